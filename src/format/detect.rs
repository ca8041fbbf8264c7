//! Input kind detection.
//!
//! EXIF metadata reaches the library in one of three shapes, told apart by
//! their first bytes:
//!
//! - **JPEG**: starts with SOI (`FF D8`); the block lives in an APP1 segment
//! - **EXIF block**: starts with the `Exif\0\0` APP1 identifier
//! - **TIFF**: starts with a TIFF header (`II*\0` or `MM\0*`)

use std::fmt;

use crate::error::ExifError;

use super::jpeg::SOI;
use super::tiff::{EXIF_HEADER, TIFF_SIGNATURE_BE, TIFF_SIGNATURE_LE};

// =============================================================================
// InputKind
// =============================================================================

/// Detected shape of an input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// JPEG file; the EXIF block must be located via marker framing
    Jpeg,

    /// Bare APP1 payload starting with `Exif\0\0`
    ExifBlock,

    /// TIFF file, which is itself an EXIF block
    Tiff,
}

impl InputKind {
    /// Get a human-readable name for the input kind.
    pub const fn name(&self) -> &'static str {
        match self {
            InputKind::Jpeg => "JPEG",
            InputKind::ExifBlock => "EXIF block",
            InputKind::Tiff => "TIFF",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Detection
// =============================================================================

/// Signatures and the input kind each one identifies.
const SIGNATURES: [(&[u8], InputKind); 4] = [
    (&SOI, InputKind::Jpeg),
    (EXIF_HEADER, InputKind::ExifBlock),
    (TIFF_SIGNATURE_LE, InputKind::Tiff),
    (TIFF_SIGNATURE_BE, InputKind::Tiff),
];

/// Detect the input kind from the first bytes of a stream.
///
/// # Returns
/// * `Ok(Some(kind))` - a signature matched
/// * `Ok(None)` - `prefix` is too short to decide but could still match
///
/// # Errors
/// `NoExifData` if `prefix` cannot be the start of any supported input.
pub fn detect_input(prefix: &[u8]) -> Result<Option<InputKind>, ExifError> {
    let mut undecided = false;
    for (signature, kind) in SIGNATURES {
        if prefix.starts_with(signature) {
            return Ok(Some(kind));
        }
        if signature.starts_with(prefix) {
            undecided = true;
        }
    }

    if undecided {
        Ok(None)
    } else {
        Err(ExifError::NoExifData)
    }
}

// =============================================================================
// Tests
// =============================================================================
