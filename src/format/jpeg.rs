//! JPEG marker framing.
//!
//! EXIF metadata travels inside a JPEG as the payload of an APP1 segment that
//! opens with `Exif\0\0`. This module walks the marker structure far enough to
//! find that segment, without decoding any image data.
//!
//! # Segment Layout
//!
//! ```text
//! FF D8                       SOI, first two bytes of the stream
//! [FF ...] FF xx              optional fill bytes, then the marker
//! LL LL                       big-endian length, counting itself but not the marker
//! payload (LLLL - 2 bytes)
//! ```
//!
//! Standalone markers (RSTn, TEM) carry no length. Metadata segments always
//! precede the first SOS, so reaching SOS or EOI means there is no EXIF block.

use super::tiff::EXIF_HEADER;

// =============================================================================
// JPEG Markers
// =============================================================================

/// Start Of Image marker
pub const SOI: [u8; 2] = [0xFF, 0xD8];

/// End Of Image marker
pub const EOI: [u8; 2] = [0xFF, 0xD9];

/// Start Of Scan marker
pub const SOS: [u8; 2] = [0xFF, 0xDA];

/// Application segment 1 (EXIF, XMP) marker
pub const APP1: [u8; 2] = [0xFF, 0xE1];

/// Temporary private use marker (no length)
const TEM: u8 = 0x01;

/// First and last restart markers (no length)
const RST0: u8 = 0xD0;
const RST7: u8 = 0xD7;

/// Size of the length field that follows a marker
const LENGTH_SIZE: usize = 2;

// =============================================================================
// Marker Scanning
// =============================================================================

/// Outcome of looking at the bytes at a marker boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStep {
    /// Not enough bytes buffered to decide
    NeedMore,

    /// A marker without a payload; `consumed` bytes can be dropped
    Standalone { consumed: usize },

    /// A length-prefixed segment.
    ///
    /// `header_len` covers fill bytes, the marker and the length field;
    /// `payload_len` bytes of payload follow.
    Segment {
        marker: u8,
        header_len: usize,
        payload_len: usize,
    },

    /// SOS or EOI: no metadata segment can follow
    EndOfMetadata { marker: u8 },

    /// A byte other than 0xFF where a marker was expected
    Invalid { byte: u8 },
}

/// Inspect the marker at the start of `data`.
///
/// `data` must be positioned at a marker boundary (just after SOI or just
/// after a previous segment).
pub fn next_marker(data: &[u8]) -> MarkerStep {
    let Some(&first) = data.first() else {
        return MarkerStep::NeedMore;
    };
    if first != 0xFF {
        return MarkerStep::Invalid { byte: first };
    }

    // Any number of 0xFF fill bytes may precede the marker code
    let Some(code_pos) = data.iter().position(|&byte| byte != 0xFF) else {
        return MarkerStep::NeedMore;
    };
    let marker = data[code_pos];
    let after_marker = code_pos + 1;

    match marker {
        m if m == EOI[1] || m == SOS[1] => MarkerStep::EndOfMetadata { marker },
        TEM | RST0..=RST7 => MarkerStep::Standalone {
            consumed: after_marker,
        },
        // Byte-stuffed zero is not a marker at a segment boundary
        0x00 => MarkerStep::Invalid { byte: marker },
        _ => {
            let Some(length) = data.get(after_marker..after_marker + LENGTH_SIZE) else {
                return MarkerStep::NeedMore;
            };
            let length = u16::from_be_bytes([length[0], length[1]]) as usize;
            if length < LENGTH_SIZE {
                return MarkerStep::Invalid { byte: marker };
            }
            MarkerStep::Segment {
                marker,
                header_len: after_marker + LENGTH_SIZE,
                payload_len: length - LENGTH_SIZE,
            }
        }
    }
}

/// Check whether a segment is the EXIF APP1 segment.
pub fn is_exif_segment(marker: u8, payload: &[u8]) -> bool {
    marker == APP1[1] && payload.starts_with(EXIF_HEADER)
}

// =============================================================================
// Tests
// =============================================================================
