use thiserror::Error;

use crate::format::tiff::{Format, Ifd};

/// Errors that can occur while locating, walking or decoding EXIF metadata.
///
/// Entry-level problems found during the directory walk (bad offsets, unknown
/// format codes) are recorded on the affected [`Entry`](crate::Entry) and
/// surface again when that entry is decoded. Header-level problems abort the
/// parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExifError {
    /// TIFF header is missing, truncated, or carries a bad marker/magic
    #[error("Invalid TIFF header: {reason}")]
    InvalidHeader { reason: String },

    /// Format code is not one of the twelve defined by the standard
    #[error("Unsupported format code: {0}")]
    UnsupportedFormatCode(u16),

    /// Raw byte span does not match `count * element width`
    #[error("Length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: u64, actual: u64 },

    /// Requested decode format differs from the entry's stored format
    #[error("Format mismatch: requested {expected}, entry is {actual}")]
    FormatMismatch { expected: Format, actual: Format },

    /// No entry exists for the (directory, tag) pair
    #[error("Entry not found: {ifd} tag 0x{tag:04X}")]
    EntryNotFound { ifd: Ifd, tag: u16 },

    /// Entry exists but its value has the wrong shape for the caller
    #[error("Value type mismatch for {ifd} tag 0x{tag:04X}: expected {expected}, got {actual}")]
    ValueTypeMismatch {
        ifd: Ifd,
        tag: u16,
        expected: Format,
        actual: Format,
    },

    /// Entry value is empty where at least one element is required
    #[error("Value too small for {ifd} tag 0x{tag:04X}")]
    ValueTooSmall { ifd: Ifd, tag: u16 },

    /// Offset or size places a read outside the buffer
    #[error("Offset out of bounds: {len} bytes at offset {offset}, buffer is {size} bytes")]
    OffsetOutOfBounds { offset: u64, len: u64, size: u64 },

    /// Directory offset was already visited during this walk
    #[error("Circular directory reference at offset {offset}")]
    CircularDirectoryReference { offset: u32 },

    /// Stream ended before the metadata block was complete
    #[error("Incomplete stream: EXIF block not fully received")]
    IncompleteStream,

    /// Stream contains no EXIF block
    #[error("No EXIF data found")]
    NoExifData,

    /// Loader was used after it left the feeding state
    #[error("Loader is in state {state}, expected Feeding")]
    InvalidLoaderState { state: &'static str },

    /// Failure reading from the underlying byte source
    #[error("I/O error: {0}")]
    Io(String),
}

impl ExifError {
    pub(crate) fn invalid_header(reason: impl Into<String>) -> Self {
        ExifError::InvalidHeader {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for ExifError {
    fn from(err: std::io::Error) -> Self {
        ExifError::Io(err.to_string())
    }
}
