//! TIFF header parsing and byte-order detection.
//!
//! Every EXIF block is a small TIFF file: an 8-byte header followed by image
//! file directories, with every offset relative to the start of the header.
//!
//! # TIFF Header Structure
//!
//! ```text
//! Bytes 0-1: Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! Bytes 2-3: Magic (42 = 0x002A), in the declared byte order
//! Bytes 4-7: Offset to the first IFD (Ifd0)
//! ```
//!
//! Inside a JPEG the header is preceded by the 6-byte APP1 identifier
//! `Exif\0\0`, which [`strip_exif_prefix`] removes.

use serde::Serialize;

use crate::error::ExifError;
use crate::io::{read_u16_be, read_u16_le, read_u32_be, read_u32_le, read_u64_be, read_u64_le};

// =============================================================================
// Constants
// =============================================================================

/// TIFF magic number
const TIFF_MAGIC: u16 = 42;

/// First four bytes of a little-endian TIFF header
pub const TIFF_SIGNATURE_LE: &[u8] = b"II\x2A\x00";

/// First four bytes of a big-endian TIFF header
pub const TIFF_SIGNATURE_BE: &[u8] = b"MM\x00\x2A";

/// Size of the TIFF header in bytes
pub const TIFF_HEADER_SIZE: usize = 8;

/// Identifier that opens an EXIF APP1 payload
pub const EXIF_HEADER: &[u8] = b"Exif\0\0";

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of an EXIF block.
///
/// Detected once from the header and then carried on every entry, so decoding
/// never depends on ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// The two-byte marker that opens a header in this byte order.
    pub const fn marker(self) -> [u8; 2] {
        match self {
            ByteOrder::LittleEndian => *b"II",
            ByteOrder::BigEndian => *b"MM",
        }
    }

    /// Read a u16 from a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }

    /// Read a u64 from a byte slice using this byte order.
    #[inline]
    pub fn read_u64(self, bytes: &[u8]) -> u64 {
        match self {
            ByteOrder::LittleEndian => read_u64_le(bytes),
            ByteOrder::BigEndian => read_u64_be(bytes),
        }
    }
}

// =============================================================================
// TiffHeader
// =============================================================================

/// Parsed TIFF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the block
    pub byte_order: ByteOrder,

    /// Offset of Ifd0, relative to the start of the header
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Parse a TIFF header from the start of `bytes`.
    ///
    /// # Errors
    /// `InvalidHeader` if there are fewer than 8 bytes, the byte-order marker
    /// is neither `II` nor `MM`, the magic is not 42, or the first IFD offset
    /// points outside `bytes`.
    pub fn parse(bytes: &[u8]) -> Result<Self, ExifError> {
        if bytes.len() < TIFF_HEADER_SIZE {
            return Err(ExifError::invalid_header(format!(
                "need at least {} bytes, got {}",
                TIFF_HEADER_SIZE,
                bytes.len()
            )));
        }

        let marker = [bytes[0], bytes[1]];
        let byte_order = if marker == ByteOrder::LittleEndian.marker() {
            ByteOrder::LittleEndian
        } else if marker == ByteOrder::BigEndian.marker() {
            ByteOrder::BigEndian
        } else {
            return Err(ExifError::invalid_header(format!(
                "byte order marker 0x{:02X}{:02X} is neither II nor MM",
                marker[0], marker[1]
            )));
        };

        let magic = byte_order.read_u16(&bytes[2..4]);
        if magic != TIFF_MAGIC {
            return Err(ExifError::invalid_header(format!(
                "magic {} is not {}",
                magic, TIFF_MAGIC
            )));
        }

        let first_ifd_offset = byte_order.read_u32(&bytes[4..8]);
        if first_ifd_offset as usize >= bytes.len() {
            return Err(ExifError::invalid_header(format!(
                "first IFD offset {} is outside the {}-byte block",
                first_ifd_offset,
                bytes.len()
            )));
        }

        Ok(TiffHeader {
            byte_order,
            first_ifd_offset,
        })
    }
}

/// Strip the `Exif\0\0` APP1 identifier, if present.
///
/// Returns the number of bytes to skip to reach the TIFF header.
pub fn strip_exif_prefix(bytes: &[u8]) -> usize {
    if bytes.starts_with(EXIF_HEADER) {
        EXIF_HEADER.len()
    } else {
        0
    }
}

// =============================================================================
// Tests
// =============================================================================
