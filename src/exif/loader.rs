//! Incremental EXIF loading from a byte stream.
//!
//! [`ExifLoader`] accepts input in arbitrary chunks and finds the EXIF block
//! without needing the whole file in memory.
//!
//! # Lifecycle
//!
//! ```text
//! Feeding --(APP1 Exif segment complete)--> HeaderLocated --parse()--> Parsed
//!    |                                                                   ^
//!    +--------------------------parse()----------------------------------+
//!                         (bare EXIF block or TIFF input)
//! ```
//!
//! - **JPEG input**: markers are walked as bytes arrive. Segments other than
//!   the EXIF APP1 segment are skipped without being buffered. Once the EXIF
//!   segment is complete, [`feed`](ExifLoader::feed) reports
//!   [`FeedStatus::HeaderLocated`] and accepts no more input.
//! - **EXIF block / TIFF input**: there is no framing, so the whole stream is
//!   the block. It is accumulated until the caller calls
//!   [`parse`](ExifLoader::parse).
//!
//! Buffers are released as soon as [`parse`](ExifLoader::parse) consumes them,
//! or when the loader is dropped.

use std::io::{ErrorKind, Read};

use bytes::{Buf, Bytes, BytesMut};
use tracing::{debug, trace, warn};

use crate::error::ExifError;
use crate::format::jpeg::{self, MarkerStep, APP1, SOI};
use crate::format::tiff::EXIF_HEADER;
use crate::format::{detect_input, InputKind};

use super::store::ExifData;

// =============================================================================
// Constants
// =============================================================================

/// Default number of bytes read per feed by [`ExifLoader::read_from`].
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

// =============================================================================
// States
// =============================================================================

/// Where the loader is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    /// Accepting bytes; the EXIF block has not been delimited yet
    Feeding,

    /// The EXIF block is complete and waiting to be parsed
    HeaderLocated,

    /// The block was handed to the directory walker; terminal
    Parsed,
}

impl LoaderState {
    pub const fn name(&self) -> &'static str {
        match self {
            LoaderState::Feeding => "Feeding",
            LoaderState::HeaderLocated => "HeaderLocated",
            LoaderState::Parsed => "Parsed",
        }
    }
}

/// Result of a successful [`ExifLoader::feed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    /// Keep feeding
    NeedMore,

    /// The EXIF block is complete; call [`ExifLoader::parse`]
    HeaderLocated,
}

/// Position of the JPEG framer between segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Framing {
    /// At a marker boundary
    Marker,

    /// Discarding the rest of an uninteresting segment
    Skip { remaining: usize },

    /// Collecting an APP1 payload that may hold the EXIF block
    App1 { payload_len: usize },
}

// =============================================================================
// ExifLoader
// =============================================================================

/// Chunked EXIF loader.
///
/// # Example
///
/// ```
/// use exifwalk::{ExifLoader, FeedStatus};
///
/// let tiff = [
///     0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00, // header
///     0x00, 0x00, // no entries
///     0x00, 0x00, 0x00, 0x00, // no next directory
/// ];
///
/// let mut loader = ExifLoader::new();
/// for chunk in tiff.chunks(3) {
///     assert_eq!(loader.feed(chunk).unwrap(), FeedStatus::NeedMore);
/// }
/// let exif = loader.parse().unwrap();
/// assert!(exif.is_empty());
/// ```
#[derive(Debug)]
pub struct ExifLoader {
    state: LoaderState,
    kind: Option<InputKind>,
    framing: Framing,
    pending: BytesMut,
    block: Option<Bytes>,
    bytes_fed: u64,
}

impl Default for ExifLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ExifLoader {
    pub fn new() -> Self {
        Self {
            state: LoaderState::Feeding,
            kind: None,
            framing: Framing::Marker,
            pending: BytesMut::new(),
            block: None,
            bytes_fed: 0,
        }
    }

    /// Read `reader` to the end of the EXIF block and parse it.
    ///
    /// JPEG input stops being read as soon as the EXIF segment is complete;
    /// other input is read to end of stream.
    ///
    /// # Errors
    /// `Io` for reader failures, otherwise whatever [`feed`](Self::feed) or
    /// [`parse`](Self::parse) fail with.
    pub fn read_from<R: Read>(mut reader: R, chunk_size: usize) -> Result<ExifData, ExifError> {
        let mut loader = ExifLoader::new();
        let mut buf = vec![0u8; chunk_size.max(1)];

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            if loader.feed(&buf[..n])? == FeedStatus::HeaderLocated {
                break;
            }
        }

        loader.parse()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoaderState {
        self.state
    }

    /// Input kind, once enough bytes have arrived to tell.
    pub fn input_kind(&self) -> Option<InputKind> {
        self.kind
    }

    /// Total bytes passed to [`feed`](Self::feed) so far.
    pub fn bytes_fed(&self) -> u64 {
        self.bytes_fed
    }

    /// Bytes currently held by the loader.
    pub fn buffered(&self) -> usize {
        self.pending.len() + self.block.as_ref().map_or(0, Bytes::len)
    }

    /// Feed the next chunk of the stream.
    ///
    /// # Errors
    /// * `InvalidLoaderState` - the loader has left `Feeding`
    /// * `NoExifData` - the input is not a supported format, or a JPEG reached
    ///   its image data without an EXIF segment
    pub fn feed(&mut self, chunk: &[u8]) -> Result<FeedStatus, ExifError> {
        if self.state != LoaderState::Feeding {
            return Err(ExifError::InvalidLoaderState {
                state: self.state.name(),
            });
        }
        self.bytes_fed += chunk.len() as u64;

        let mut chunk = chunk;
        if let Framing::Skip { remaining } = self.framing {
            // Skipped segment bytes never reach the buffer
            let skipped = remaining.min(chunk.len());
            chunk = &chunk[skipped..];
            self.framing = match remaining - skipped {
                0 => Framing::Marker,
                remaining => Framing::Skip { remaining },
            };
        }
        self.pending.extend_from_slice(chunk);

        if self.kind.is_none() {
            let Some(kind) = detect_input(&self.pending)? else {
                return Ok(FeedStatus::NeedMore);
            };
            debug!(%kind, "Detected input kind");
            self.kind = Some(kind);
            if kind == InputKind::Jpeg {
                self.pending.advance(SOI.len());
            }
        }

        match self.kind {
            Some(InputKind::Jpeg) => self.advance_jpeg(),
            _ => Ok(FeedStatus::NeedMore),
        }
    }

    /// Walk buffered JPEG segments as far as the buffered bytes allow.
    fn advance_jpeg(&mut self) -> Result<FeedStatus, ExifError> {
        loop {
            match self.framing {
                Framing::Skip { remaining } => {
                    let skipped = remaining.min(self.pending.len());
                    self.pending.advance(skipped);
                    if skipped < remaining {
                        self.framing = Framing::Skip {
                            remaining: remaining - skipped,
                        };
                        return Ok(FeedStatus::NeedMore);
                    }
                    self.framing = Framing::Marker;
                }
                Framing::Marker => match jpeg::next_marker(&self.pending) {
                    MarkerStep::NeedMore => return Ok(FeedStatus::NeedMore),
                    MarkerStep::Standalone { consumed } => self.pending.advance(consumed),
                    MarkerStep::Segment {
                        marker,
                        header_len,
                        payload_len,
                    } => {
                        self.pending.advance(header_len);
                        self.framing = if marker == APP1[1] {
                            Framing::App1 { payload_len }
                        } else {
                            trace!(
                                marker = format_args!("0x{:02X}", marker),
                                payload_len,
                                "Skipping JPEG segment"
                            );
                            Framing::Skip {
                                remaining: payload_len,
                            }
                        };
                    }
                    MarkerStep::EndOfMetadata { marker } => {
                        debug!(
                            marker = format_args!("0x{:02X}", marker),
                            "Reached image data without an EXIF segment"
                        );
                        return Err(ExifError::NoExifData);
                    }
                    MarkerStep::Invalid { byte } => {
                        warn!(
                            byte = format_args!("0x{:02X}", byte),
                            "Malformed JPEG marker"
                        );
                        return Err(ExifError::NoExifData);
                    }
                },
                Framing::App1 { payload_len } => {
                    // Other APP1 payloads (XMP) are dropped as soon as the
                    // identifier rules them out
                    let probe = EXIF_HEADER.len();
                    let ruled_out = payload_len < probe
                        || (self.pending.len() >= probe
                            && !jpeg::is_exif_segment(APP1[1], &self.pending[..probe]));
                    if ruled_out {
                        trace!(payload_len, "Skipping non-EXIF APP1 segment");
                        self.framing = Framing::Skip {
                            remaining: payload_len,
                        };
                        continue;
                    }
                    if self.pending.len() < payload_len {
                        return Ok(FeedStatus::NeedMore);
                    }

                    let payload = self.pending.split_to(payload_len).freeze();
                    self.pending = BytesMut::new();
                    self.block = Some(payload);
                    self.state = LoaderState::HeaderLocated;
                    debug!(
                        size = payload_len,
                        bytes_fed = self.bytes_fed,
                        "EXIF segment located"
                    );
                    return Ok(FeedStatus::HeaderLocated);
                }
            }
        }
    }

    /// Walk the EXIF block and return the entries.
    ///
    /// For bare EXIF block or TIFF input, everything fed so far is the block.
    /// Once the block reaches the directory walker the loader is `Parsed`,
    /// whether or not the walk succeeds.
    ///
    /// # Errors
    /// * `IncompleteStream` - a JPEG's EXIF segment has not been fully fed
    ///   (or too few bytes arrived to tell the input kind); the loader stays
    ///   in `Feeding`
    /// * `NoExifData` - nothing was fed
    /// * `InvalidLoaderState` - already `Parsed`
    /// * errors from [`ExifData::parse`]
    pub fn parse(&mut self) -> Result<ExifData, ExifError> {
        let block = match (self.state, self.kind) {
            (LoaderState::Parsed, _) => {
                return Err(ExifError::InvalidLoaderState {
                    state: self.state.name(),
                })
            }
            (LoaderState::HeaderLocated, _) => self.block.take().unwrap_or_default(),
            (LoaderState::Feeding, Some(InputKind::ExifBlock | InputKind::Tiff)) => {
                self.pending.split().freeze()
            }
            (LoaderState::Feeding, None) if self.bytes_fed == 0 => {
                return Err(ExifError::NoExifData);
            }
            (LoaderState::Feeding, _) => return Err(ExifError::IncompleteStream),
        };

        self.release();
        self.state = LoaderState::Parsed;
        debug!(size = block.len(), "Parsing EXIF block");

        ExifData::parse(block)
    }

    /// Drop all buffered bytes.
    fn release(&mut self) {
        self.pending = BytesMut::new();
        self.block = None;
    }
}

impl Drop for ExifLoader {
    fn drop(&mut self) {
        if self.state != LoaderState::Parsed {
            trace!(
                state = self.state.name(),
                buffered = self.buffered(),
                "EXIF loader dropped before parsing"
            );
        }
        self.release();
    }
}

// =============================================================================
// Tests
// =============================================================================
