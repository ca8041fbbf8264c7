//! The parsed, immutable set of EXIF entries.
//!
//! [`ExifData`] owns the EXIF block as a reference-counted [`Bytes`] buffer.
//! Every [`Entry`] holds a slice of that buffer, so values are never copied
//! and the buffer lives exactly as long as some entry or the store needs it.
//!
//! After [`ExifData::parse`] returns, the store is never mutated. It is
//! `Send + Sync` and can be queried from many threads at once.

use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use serde::Serialize;
use tracing::debug;

use crate::error::ExifError;
use crate::format::tiff::{
    self, strip_exif_prefix, tags, ByteOrder, Entry, Ifd, TiffHeader, Value,
};
use crate::io::checked_range;

use super::gps::{Gps, Location};

// =============================================================================
// IfdTag
// =============================================================================

/// Composite key identifying an entry: the directory plus the tag within it.
///
/// Tag IDs are directory-scoped; `(Gps, 0x0002)` and `(Exif, 0x0002)` are
/// unrelated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IfdTag {
    pub ifd: Ifd,
    pub tag: u16,
}

impl IfdTag {
    pub const fn new(ifd: Ifd, tag: u16) -> Self {
        Self { ifd, tag }
    }
}

impl fmt::Display for IfdTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:0x{:04X}", self.ifd, self.tag)
    }
}

// =============================================================================
// ExifData
// =============================================================================

/// All entries decoded from one EXIF block.
#[derive(Debug, Clone)]
pub struct ExifData {
    byte_order: ByteOrder,
    block: Bytes,
    entries: HashMap<IfdTag, Entry>,
    directories: Vec<(Ifd, u32)>,
}

impl ExifData {
    /// Parse an EXIF block.
    ///
    /// `data` must start either with a TIFF header or with the `Exif\0\0`
    /// APP1 identifier followed by a TIFF header. The prefix is dropped
    /// without copying.
    ///
    /// # Errors
    /// `InvalidHeader` if the header is malformed, or `OffsetOutOfBounds` if
    /// Ifd0 itself cannot be read. Problems with individual entries or
    /// sub-directories do not fail the parse.
    pub fn parse(data: impl Into<Bytes>) -> Result<Self, ExifError> {
        let data = data.into();
        let block = data.slice(strip_exif_prefix(&data)..);
        let header = TiffHeader::parse(&block)?;

        debug!(
            byte_order = ?header.byte_order,
            first_ifd_offset = header.first_ifd_offset,
            size = block.len(),
            "Walking EXIF block"
        );

        let walk = tiff::walk(&block, &header)?;

        let mut entries = HashMap::with_capacity(walk.entries.len());
        for entry in walk.entries {
            let key = IfdTag::new(entry.ifd, entry.tag);
            match entries.entry(key) {
                MapEntry::Vacant(slot) => {
                    slot.insert(entry);
                }
                MapEntry::Occupied(_) => {
                    debug!(%key, "Duplicate tag in directory, keeping first occurrence");
                }
            }
        }

        debug!(
            entries = entries.len(),
            directories = walk.directories.len(),
            "Finished EXIF walk"
        );

        Ok(ExifData {
            byte_order: header.byte_order,
            block,
            entries,
            directories: walk.directories,
        })
    }

    /// Byte order declared by the block's header.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// The TIFF block the entries point into, starting at the header.
    pub fn block(&self) -> &Bytes {
        &self.block
    }

    /// Directories that were parsed, with their offsets, in walk order.
    pub fn directories(&self) -> &[(Ifd, u32)] {
        &self.directories
    }

    /// Look up an entry by directory and tag.
    pub fn get_entry(&self, ifd: Ifd, tag: u16) -> Option<&Entry> {
        self.entries.get(&IfdTag::new(ifd, tag))
    }

    /// Decode an entry using its stored format.
    ///
    /// # Errors
    /// `EntryNotFound` if there is no such entry, otherwise whatever the
    /// entry's decode fails with.
    pub fn get_value(&self, ifd: Ifd, tag: u16) -> Result<Value, ExifError> {
        self.get_entry(ifd, tag)
            .ok_or(ExifError::EntryNotFound { ifd, tag })?
            .value()
    }

    /// All entries, ordered by directory and then tag.
    pub fn entries(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.values().collect();
        entries.sort_by_key(|entry| (entry.ifd, entry.tag));
        entries
    }

    /// Entries of one directory, ordered by tag.
    pub fn entries_in(&self, ifd: Ifd) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self
            .entries
            .values()
            .filter(|entry| entry.ifd == ifd)
            .collect();
        entries.sort_by_key(|entry| entry.tag);
        entries
    }

    /// Number of distinct (directory, tag) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The embedded JPEG thumbnail, if Ifd1 names one that lies in the block.
    pub fn thumbnail(&self) -> Option<Bytes> {
        let offset = self.single_u32(Ifd::Ifd1, tags::JPEG_INTERCHANGE_FORMAT)?;
        let length = self.single_u32(Ifd::Ifd1, tags::JPEG_INTERCHANGE_FORMAT_LENGTH)?;

        match checked_range(u64::from(offset), u64::from(length), self.block.len()) {
            Ok(range) if !range.is_empty() => Some(self.block.slice(range)),
            Ok(_) => None,
            Err(err) => {
                debug!(error = %err, "Thumbnail lies outside the EXIF block");
                None
            }
        }
    }

    /// A view over the GPS directory.
    pub fn gps(&self) -> Gps<'_> {
        Gps::new(self)
    }

    /// Signed latitude, longitude and altitude from the GPS directory.
    ///
    /// # Errors
    /// The first missing or malformed GPS component.
    pub fn get_location(&self) -> Result<Location, ExifError> {
        self.gps().location()
    }

    fn single_u32(&self, ifd: Ifd, tag: u16) -> Option<u32> {
        match self.get_value(ifd, tag).ok()? {
            Value::Long(values) => values.first().copied(),
            Value::Short(values) => values.first().copied().map(u32::from),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
