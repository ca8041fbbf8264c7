//! GPS coordinates derived from the GPS directory.
//!
//! Latitude and longitude are stored as three unsigned rationals (degrees,
//! minutes, seconds) plus a one-character hemisphere reference. Altitude is a
//! single rational in meters plus a reference byte (1 = below sea level).

use std::fmt;

use serde::Serialize;

use crate::error::ExifError;
use crate::format::tiff::{gps as tag, Entry, Format, Ifd, Rational};

use super::store::ExifData;

// =============================================================================
// Location
// =============================================================================

/// Signed position: degrees north/east are positive, altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Lat: {:.8}, Lng: {:.8}, Alt: {:.4}>",
            self.latitude, self.longitude, self.altitude
        )
    }
}

// =============================================================================
// Gps
// =============================================================================

/// Read-only view over the GPS entries of an [`ExifData`].
///
/// Holds nothing but a reference to the store; create one per use.
#[derive(Debug, Clone, Copy)]
pub struct Gps<'a> {
    data: &'a ExifData,
}

impl<'a> Gps<'a> {
    pub fn new(data: &'a ExifData) -> Self {
        Self { data }
    }

    /// Latitude in signed degrees, negative in the southern hemisphere.
    pub fn latitude(&self) -> Result<f64, ExifError> {
        self.coordinate(tag::LATITUDE, tag::LATITUDE_REF, 'S')
    }

    /// Longitude in signed degrees, negative west of Greenwich.
    pub fn longitude(&self) -> Result<f64, ExifError> {
        self.coordinate(tag::LONGITUDE, tag::LONGITUDE_REF, 'W')
    }

    /// Altitude in meters, negative below sea level.
    pub fn altitude(&self) -> Result<f64, ExifError> {
        let rationals = self.rationals(tag::ALTITUDE)?;
        let Some(first) = rationals.first() else {
            return Err(ExifError::LengthMismatch {
                expected: 1,
                actual: 0,
            });
        };
        let altitude = first.to_f64();

        let entry = self.entry(tag::ALTITUDE_REF)?;
        let reference = match entry.format {
            Some(Format::UnsignedByte) => entry.as_bytes()?,
            Some(Format::Undefined) => entry.as_undefined()?,
            _ => return Err(self.type_mismatch(entry, Format::UnsignedByte)),
        };
        match reference.first() {
            None => Err(ExifError::ValueTooSmall {
                ifd: Ifd::Gps,
                tag: tag::ALTITUDE_REF,
            }),
            Some(1) => Ok(-altitude),
            Some(_) => Ok(altitude),
        }
    }

    /// Latitude, longitude and altitude together.
    ///
    /// # Errors
    /// The first component that is missing or malformed; nothing is partially
    /// filled in.
    pub fn location(&self) -> Result<Location, ExifError> {
        Ok(Location {
            latitude: self.latitude()?,
            longitude: self.longitude()?,
            altitude: self.altitude()?,
        })
    }

    /// Degrees/minutes/seconds value, signed by its reference entry.
    fn coordinate(&self, value_tag: u16, ref_tag: u16, negative: char) -> Result<f64, ExifError> {
        let rationals = self.rationals(value_tag)?;
        let [degrees, minutes, seconds] = rationals.as_slice() else {
            return Err(ExifError::LengthMismatch {
                expected: 3,
                actual: rationals.len() as u64,
            });
        };
        let magnitude = degrees.to_f64() + minutes.to_f64() / 60.0 + seconds.to_f64() / 3600.0;

        let entry = self.entry(ref_tag)?;
        if entry.format != Some(Format::Ascii) {
            return Err(self.type_mismatch(entry, Format::Ascii));
        }
        let reference = entry.as_ascii()?;
        let Some(hemisphere) = reference.chars().next() else {
            return Err(ExifError::ValueTooSmall {
                ifd: Ifd::Gps,
                tag: ref_tag,
            });
        };

        if hemisphere.to_ascii_uppercase() == negative {
            Ok(-magnitude)
        } else {
            Ok(magnitude)
        }
    }

    fn entry(&self, tag: u16) -> Result<&'a Entry, ExifError> {
        self.data
            .get_entry(Ifd::Gps, tag)
            .ok_or(ExifError::EntryNotFound { ifd: Ifd::Gps, tag })
    }

    fn rationals(&self, tag: u16) -> Result<Vec<Rational>, ExifError> {
        let entry = self.entry(tag)?;
        if entry.format != Some(Format::UnsignedRational) {
            return Err(self.type_mismatch(entry, Format::UnsignedRational));
        }
        entry.as_rationals()
    }

    fn type_mismatch(&self, entry: &Entry, expected: Format) -> ExifError {
        match entry.format {
            Some(actual) => ExifError::ValueTypeMismatch {
                ifd: entry.ifd,
                tag: entry.tag,
                expected,
                actual,
            },
            None => ExifError::UnsupportedFormatCode(entry.format_raw),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
