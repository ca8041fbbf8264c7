//! Printable summary of an EXIF store.
//!
//! A [`Report`] is a plain serializable snapshot: every entry with its name
//! and rendered value (or the error that prevented rendering), plus the GPS
//! location when one can be derived. The binary prints it as text or JSON.

use std::fmt;

use serde::Serialize;

use crate::exif::{ExifData, Location};
use crate::format::tiff::{ByteOrder, Entry, Format, Ifd};

// =============================================================================
// Report Types
// =============================================================================

/// One entry, rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryReport {
    pub ifd: Ifd,
    pub tag: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    pub format_code: u16,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EntryReport {
    pub fn new(entry: &Entry) -> Self {
        let (value, error) = match entry.value() {
            Ok(value) => (Some(value.to_string()), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            ifd: entry.ifd,
            tag: entry.tag,
            name: entry.name(),
            format: entry.format,
            format_code: entry.format_raw,
            count: entry.count,
            value,
            error,
        }
    }
}

/// Summary of a parsed EXIF block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub byte_order: ByteOrder,
    pub directories: Vec<Ifd>,
    pub entries: Vec<EntryReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_size: Option<usize>,
}

impl Report {
    /// Build a report; with `gps_only`, only GPS entries are listed.
    pub fn new(exif: &ExifData, gps_only: bool) -> Self {
        let entries = if gps_only {
            exif.entries_in(Ifd::Gps)
        } else {
            exif.entries()
        };
        let (location, location_error) = match exif.get_location() {
            Ok(location) => (Some(location), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            byte_order: exif.byte_order(),
            directories: exif.directories().iter().map(|(ifd, _)| *ifd).collect(),
            entries: entries.into_iter().map(EntryReport::new).collect(),
            location,
            location_error,
            thumbnail_size: exif.thumbnail().map(|thumbnail| thumbnail.len()),
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Byte order: {:?}", self.byte_order)?;

        let directories: Vec<&str> = self.directories.iter().map(|ifd| ifd.name()).collect();
        writeln!(f, "Directories: {}", directories.join(", "))?;

        for entry in &self.entries {
            let format = entry
                .format
                .map_or_else(|| format!("format {}", entry.format_code), |known| known.to_string());
            write!(
                f,
                "[{}] 0x{:04X} {} ({} x{}): ",
                entry.ifd,
                entry.tag,
                entry.name.unwrap_or("Unknown"),
                format,
                entry.count
            )?;
            match (&entry.value, &entry.error) {
                (Some(value), _) => writeln!(f, "{}", value)?,
                (None, Some(error)) => writeln!(f, "<{}>", error)?,
                (None, None) => writeln!(f)?,
            }
        }

        if let Some(size) = self.thumbnail_size {
            writeln!(f, "Thumbnail: {} bytes", size)?;
        }
        match (&self.location, &self.location_error) {
            (Some(location), _) => writeln!(f, "Location: {}", location),
            (None, Some(error)) => writeln!(f, "Location: unavailable ({})", error),
            (None, None) => Ok(()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
