//! Image File Directory walking.
//!
//! Starting from Ifd0, the walker follows a fixed set of links:
//!
//! ```text
//! Ifd0 --next--------------------> Ifd1 (thumbnail)
//! Ifd0 --ExifIfdPointer----------> Exif --InteroperabilityIfdPointer--> InterOperability
//! Ifd0 --GPSInfoIfdPointer-------> Gps
//! ```
//!
//! # Directory Layout
//!
//! ```text
//! 2 bytes           entry count n
//! n * 12 bytes      entries: tag (2), format (2), count (4), value-or-offset (4)
//! 4 bytes           offset of the next directory (0 = none)
//! ```
//!
//! Every offset visited is remembered, so a directory is parsed at most once
//! no matter how the links are crafted. Problems with a single entry (unknown
//! format, value outside the buffer) are recorded on that entry and the walk
//! carries on. An unreadable Ifd0 aborts the walk; an unreadable sub-directory
//! is skipped.

use std::collections::HashSet;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::error::ExifError;
use crate::io::checked_range;

use super::parser::{ByteOrder, TiffHeader};
use super::tags::{self, Format, Ifd};
use super::values::Entry;

// =============================================================================
// Constants
// =============================================================================

/// Size of one directory entry in bytes
pub const IFD_ENTRY_SIZE: usize = 12;

/// Size of the entry count field at the start of a directory
const IFD_COUNT_SIZE: usize = 2;

/// Size of the next directory offset field at the end of a directory
const IFD_NEXT_OFFSET_SIZE: usize = 4;

/// Position of the value-or-offset field within an entry
const VALUE_FIELD_POS: usize = 8;

// =============================================================================
// Directory
// =============================================================================

/// One parsed directory.
#[derive(Debug, Clone)]
pub struct Directory {
    /// Which logical directory this is
    pub ifd: Ifd,

    /// Offset of the directory within the block
    pub offset: u32,

    /// Entries in on-disk order
    pub entries: Vec<Entry>,

    /// Offset of the next directory in the chain (0 if none)
    pub next_offset: u32,
}

impl Directory {
    /// Parse the directory at `offset` in `buf`.
    ///
    /// # Errors
    /// `OffsetOutOfBounds` if the entry count or the entry table does not fit
    /// in the buffer. A missing trailing "next" offset is treated as 0.
    pub fn parse(buf: &Bytes, offset: u32, byte_order: ByteOrder, ifd: Ifd) -> Result<Self, ExifError> {
        let offset_u64 = u64::from(offset);
        let count_range = checked_range(offset_u64, IFD_COUNT_SIZE as u64, buf.len())?;
        let entry_count = byte_order.read_u16(&buf[count_range.clone()]) as usize;

        let table_len = (entry_count * IFD_ENTRY_SIZE) as u64;
        let table_range = checked_range(count_range.end as u64, table_len, buf.len())?;

        let entries = (0..entry_count)
            .map(|index| {
                let pos = table_range.start + index * IFD_ENTRY_SIZE;
                parse_entry(buf, pos, byte_order, ifd)
            })
            .collect();

        let next_offset =
            match checked_range(table_range.end as u64, IFD_NEXT_OFFSET_SIZE as u64, buf.len()) {
                Ok(range) => byte_order.read_u32(&buf[range]),
                Err(_) => {
                    debug!(%ifd, offset, "Directory has no next offset field, treating as 0");
                    0
                }
            };

        Ok(Directory {
            ifd,
            offset,
            entries,
            next_offset,
        })
    }

    /// Get an entry by tag ID.
    pub fn get_entry(&self, tag: u16) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    /// Resolve a pointer tag to the offset of the directory it names.
    fn pointer(&self, tag: u16) -> Option<u32> {
        let entry = self.get_entry(tag)?;
        match entry.as_offset() {
            Some(0) => None,
            Some(offset) => Some(offset),
            None => {
                warn!(
                    ifd = %self.ifd,
                    tag = format_args!("0x{:04X}", tag),
                    format = entry.format_raw,
                    count = entry.count,
                    "Pointer tag does not hold a single offset, ignoring"
                );
                None
            }
        }
    }
}

/// Parse the 12-byte entry at `pos`; the caller guarantees it is in bounds.
fn parse_entry(buf: &Bytes, pos: usize, byte_order: ByteOrder, ifd: Ifd) -> Entry {
    let tag = byte_order.read_u16(&buf[pos..pos + 2]);
    let format_raw = byte_order.read_u16(&buf[pos + 2..pos + 4]);
    let count = byte_order.read_u32(&buf[pos + 4..pos + 8]);
    let value_pos = pos + VALUE_FIELD_POS;

    let Some(format) = Format::from_u16(format_raw) else {
        warn!(%ifd, tag = format_args!("0x{:04X}", tag), format_raw, "Unsupported format code");
        return Entry::faulted(
            ifd,
            tag,
            format_raw,
            count,
            byte_order,
            ExifError::UnsupportedFormatCode(format_raw),
        );
    };

    let size = format.byte_size(count);
    let range = if format.fits_inline(count) {
        // Inline values are left-aligned in the 4-byte field
        value_pos..value_pos + size as usize
    } else {
        let value_offset = byte_order.read_u32(&buf[value_pos..value_pos + 4]);
        match checked_range(u64::from(value_offset), size, buf.len()) {
            Ok(range) => range,
            Err(err) => {
                warn!(
                    %ifd,
                    tag = format_args!("0x{:04X}", tag),
                    value_offset,
                    size,
                    "Entry value lies outside the EXIF block"
                );
                return Entry::faulted(ifd, tag, format_raw, count, byte_order, err);
            }
        }
    };

    Entry::new(ifd, tag, format_raw, count, buf.slice(range), byte_order)
}

// =============================================================================
// Walker
// =============================================================================

/// Result of walking every reachable directory.
#[derive(Debug, Clone)]
pub struct Walk {
    /// Entries from all directories, in walk order
    pub entries: Vec<Entry>,

    /// Directories that were parsed, with their offsets, in walk order
    pub directories: Vec<(Ifd, u32)>,
}

/// Bounded walk over the directories of one EXIF block.
struct DirectoryWalker<'a> {
    buf: &'a Bytes,
    byte_order: ByteOrder,
    visited: HashSet<u32>,
    walk: Walk,
}

impl<'a> DirectoryWalker<'a> {
    fn new(buf: &'a Bytes, byte_order: ByteOrder) -> Self {
        Self {
            buf,
            byte_order,
            visited: HashSet::new(),
            walk: Walk {
                entries: Vec::new(),
                directories: Vec::new(),
            },
        }
    }

    /// Mark `offset` as visited.
    ///
    /// # Errors
    /// `CircularDirectoryReference` if the offset was seen before.
    fn enter(&mut self, offset: u32) -> Result<(), ExifError> {
        if self.visited.insert(offset) {
            Ok(())
        } else {
            Err(ExifError::CircularDirectoryReference { offset })
        }
    }

    /// Parse a directory and record its entries.
    fn visit(&mut self, ifd: Ifd, offset: u32) -> Result<Directory, ExifError> {
        self.enter(offset)?;
        let directory = Directory::parse(self.buf, offset, self.byte_order, ifd)?;

        debug!(
            %ifd,
            offset,
            entries = directory.entries.len(),
            next_offset = directory.next_offset,
            "Parsed directory"
        );

        self.walk.directories.push((ifd, offset));
        self.walk.entries.extend(directory.entries.iter().cloned());
        Ok(directory)
    }

    /// Visit a linked directory, skipping it if it cannot be read.
    fn visit_linked(&mut self, ifd: Ifd, offset: Option<u32>) -> Option<Directory> {
        let offset = offset?;
        match self.visit(ifd, offset) {
            Ok(directory) => Some(directory),
            Err(err @ ExifError::CircularDirectoryReference { .. }) => {
                debug!(%ifd, offset, error = %err, "Directory already visited, not following link");
                None
            }
            Err(err) => {
                warn!(%ifd, offset, error = %err, "Skipping unreadable directory");
                None
            }
        }
    }

    fn run(mut self, first_ifd_offset: u32) -> Result<Walk, ExifError> {
        let ifd0 = self.visit(Ifd::Ifd0, first_ifd_offset)?;

        let next = Some(ifd0.next_offset).filter(|&offset| offset != 0);
        self.visit_linked(Ifd::Ifd1, next);

        let exif = self.visit_linked(Ifd::Exif, ifd0.pointer(tags::EXIF_IFD_POINTER));
        self.visit_linked(Ifd::Gps, ifd0.pointer(tags::GPS_INFO_IFD_POINTER));

        if let Some(exif) = exif {
            let interop = exif.pointer(tags::INTEROPERABILITY_IFD_POINTER);
            self.visit_linked(Ifd::InterOperability, interop);
        }

        Ok(self.walk)
    }
}

/// Walk all directories reachable from the header's first IFD.
///
/// `buf` must start at the TIFF header; all offsets are relative to it.
///
/// # Errors
/// Fails only if Ifd0 itself cannot be read.
pub fn walk(buf: &Bytes, header: &TiffHeader) -> Result<Walk, ExifError> {
    DirectoryWalker::new(buf, header.byte_order).run(header.first_ifd_offset)
}

// =============================================================================
// Tests
// =============================================================================
