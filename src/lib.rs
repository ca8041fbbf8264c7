//! # exifwalk
//!
//! An EXIF metadata extraction engine.
//!
//! This library locates the EXIF block of a JPEG or TIFF file, walks its
//! directory structure, and decodes tag values on demand. Values are never
//! copied out of the input buffer until they are decoded.
//!
//! ## Features
//!
//! - **Safe directory walking**: every offset is bounds-checked and every
//!   directory is visited at most once, so crafted input cannot loop or panic
//! - **Per-entry faults**: a bad entry is reported on that entry while its
//!   siblings still decode
//! - **Typed decoding**: twelve formats decoded into a closed [`Value`] enum
//!   under strict format and length checks
//! - **GPS helper**: signed latitude, longitude and altitude
//! - **Incremental loading**: feed a JPEG in chunks and stop reading as soon
//!   as the EXIF segment is complete
//!
//! ## Architecture
//!
//! - [`io`] - Endian reads and bounds-checked slicing
//! - [`mod@format`] - TIFF header, directory walker, entry decoding, JPEG framing
//! - [`exif`] - The entry store, GPS helper and incremental loader
//! - [`report`] - Text/JSON summaries used by the CLI
//! - [`config`] - CLI configuration types
//!
//! ## Example
//!
//! ```rust
//! use exifwalk::{tags, ExifData, Ifd, Value};
//!
//! let block = [
//!     0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, // big-endian header
//!     0x00, 0x01, // one entry
//!     0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x06, 0x00, 0x00, // Orientation = 6
//!     0x00, 0x00, 0x00, 0x00, // no next directory
//! ];
//!
//! let exif = ExifData::parse(block.to_vec()).unwrap();
//! assert_eq!(
//!     exif.get_value(Ifd::Ifd0, tags::ORIENTATION).unwrap(),
//!     Value::Short(vec![6])
//! );
//! ```

pub mod config;
pub mod error;
pub mod exif;
pub mod format;
pub mod io;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use error::ExifError;
pub use exif::{
    ExifData, ExifLoader, FeedStatus, Gps, IfdTag, LoaderState, Location, DEFAULT_CHUNK_SIZE,
};
pub use format::tiff::{
    tag_name, tags, walk, ByteOrder, Directory, Entry, Format, Ifd, Rational, SRational,
    TiffHeader, Value, Walk, EXIF_HEADER, TIFF_HEADER_SIZE,
};
pub use format::{detect_input, InputKind};
pub use report::{EntryReport, Report};
