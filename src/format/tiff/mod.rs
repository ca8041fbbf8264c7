//! TIFF structure of an EXIF block.
//!
//! EXIF metadata is stored as a miniature TIFF file, whether it sits inside a
//! JPEG APP1 segment or at the start of a TIFF image.
//!
//! # Key Concepts
//!
//! - **Byte order**: the header declares its endianness (II = little-endian,
//!   MM = big-endian). All multi-byte values must be read respecting this order.
//!
//! - **IFD (Image File Directory)**: a table of 12-byte entries. EXIF uses up
//!   to five of them: Ifd0, Ifd1, Exif, Gps and InterOperability.
//!
//! - **Inline vs offset values**: values of 4 bytes or fewer are stored inline
//!   in the entry, larger values are stored at an offset pointed to by the entry.
//!
//! - **Entries are views**: an [`Entry`] keeps a zero-copy slice of the block
//!   and is decoded to a [`Value`] on demand.

mod parser;
mod rational;
pub mod tags;
mod values;
mod walker;

pub use parser::{
    strip_exif_prefix, ByteOrder, TiffHeader, EXIF_HEADER, TIFF_HEADER_SIZE, TIFF_SIGNATURE_BE,
    TIFF_SIGNATURE_LE,
};
pub use rational::{Rational, SRational};
pub use tags::{gps, interop, tag_name, Format, Ifd};
pub use values::{Entry, Value};
pub use walker::{walk, Directory, Walk, IFD_ENTRY_SIZE};
