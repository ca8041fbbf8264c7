//! Container formats that carry EXIF metadata.
//!
//! - [`tiff`]: the TIFF structure of the EXIF block itself (header,
//!   directories, entries and value decoding)
//! - [`jpeg`]: marker framing used to find the block inside a JPEG
//! - [`detect`]: tells JPEG, bare EXIF blocks and TIFF files apart

pub mod detect;
pub mod jpeg;
pub mod tiff;

pub use detect::{detect_input, InputKind};
