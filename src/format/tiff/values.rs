//! EXIF entries and typed value decoding.
//!
//! An [`Entry`] is one directory record whose value bytes are a zero-copy view
//! into the parsed block. Values are decoded on demand: every decode checks
//! that the requested format equals the stored one and that the raw span is
//! exactly `count * element width` bytes before touching a single element.
//!
//! # Decoded Shapes
//!
//! | Format | Width | [`Value`] variant |
//! |---|---|---|
//! | UnsignedByte | 1 | `Byte(Bytes)` |
//! | Ascii | 1 | `Ascii(String)` |
//! | UnsignedShort | 2 | `Short(Vec<u16>)` |
//! | UnsignedLong | 4 | `Long(Vec<u32>)` |
//! | UnsignedRational | 8 | `Rational(Vec<Rational>)` |
//! | SignedByte | 1 | `SByte(Vec<i8>)` |
//! | Undefined | 1 | `Undefined(Bytes)` |
//! | SignedShort | 2 | `SShort(Vec<i16>)` |
//! | SignedLong | 4 | `SLong(Vec<i32>)` |
//! | SignedRational | 8 | `SRational(Vec<SRational>)` |
//! | Float | 4 | `Float(Vec<f32>)` |
//! | Double | 8 | `Double(Vec<f64>)` |

use std::fmt;

use bytes::Bytes;

use crate::error::ExifError;

use super::parser::ByteOrder;
use super::rational::{Rational, SRational};
use super::tags::{tag_name, Format, Ifd};

// =============================================================================
// Entry
// =============================================================================

/// One decoded directory record.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Directory the entry was found in
    pub ifd: Ifd,

    /// Tag ID, meaningful within `ifd`
    pub tag: u16,

    /// Parsed format, `None` for codes outside 1-12
    pub format: Option<Format>,

    /// Format code as stored in the directory
    pub format_raw: u16,

    /// Declared element count
    pub count: u32,

    /// Byte order used to interpret `raw`
    pub byte_order: ByteOrder,

    raw: Bytes,

    fault: Option<ExifError>,
}

impl Entry {
    /// Create an entry from its raw parts.
    ///
    /// An unknown `format_raw` is recorded as an `UnsupportedFormatCode`
    /// fault, matching what the directory walker does.
    pub fn new(
        ifd: Ifd,
        tag: u16,
        format_raw: u16,
        count: u32,
        raw: Bytes,
        byte_order: ByteOrder,
    ) -> Self {
        let format = Format::from_u16(format_raw);
        let fault = match format {
            Some(_) => None,
            None => Some(ExifError::UnsupportedFormatCode(format_raw)),
        };
        Self {
            ifd,
            tag,
            format,
            format_raw,
            count,
            byte_order,
            raw,
            fault,
        }
    }

    /// Create an entry whose value could not be located during the walk.
    pub(crate) fn faulted(
        ifd: Ifd,
        tag: u16,
        format_raw: u16,
        count: u32,
        byte_order: ByteOrder,
        fault: ExifError,
    ) -> Self {
        Self {
            ifd,
            tag,
            format: Format::from_u16(format_raw),
            format_raw,
            count,
            byte_order,
            raw: Bytes::new(),
            fault: Some(fault),
        }
    }

    /// Undecoded value bytes (empty for faulted entries).
    #[inline]
    pub fn raw(&self) -> &Bytes {
        &self.raw
    }

    /// The structural problem recorded for this entry during the walk, if any.
    #[inline]
    pub fn fault(&self) -> Option<&ExifError> {
        self.fault.as_ref()
    }

    /// Symbolic tag name within this entry's directory.
    pub fn name(&self) -> Option<&'static str> {
        tag_name(self.ifd, self.tag)
    }

    /// Verify the decode contract and return the raw span.
    fn checked_raw(&self, requested: Format) -> Result<&[u8], ExifError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }

        let actual = self
            .format
            .ok_or(ExifError::UnsupportedFormatCode(self.format_raw))?;
        if actual != requested {
            return Err(ExifError::FormatMismatch {
                expected: requested,
                actual,
            });
        }

        let expected = requested.byte_size(self.count);
        if self.raw.len() as u64 != expected {
            return Err(ExifError::LengthMismatch {
                expected,
                actual: self.raw.len() as u64,
            });
        }

        Ok(&self.raw)
    }

    // -------------------------------------------------------------------------
    // Typed decoders
    // -------------------------------------------------------------------------

    /// Decode an `UnsignedByte` entry (zero-copy).
    pub fn as_bytes(&self) -> Result<Bytes, ExifError> {
        self.checked_raw(Format::UnsignedByte)?;
        Ok(self.raw.clone())
    }

    /// Decode an `Undefined` entry (zero-copy).
    pub fn as_undefined(&self) -> Result<Bytes, ExifError> {
        self.checked_raw(Format::Undefined)?;
        Ok(self.raw.clone())
    }

    /// Decode an `Ascii` entry.
    ///
    /// Trailing NUL terminators are stripped; invalid UTF-8 is replaced.
    pub fn as_ascii(&self) -> Result<String, ExifError> {
        let raw = self.checked_raw(Format::Ascii)?;
        let end = raw.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
        Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
    }

    /// Decode an `UnsignedShort` entry.
    pub fn as_u16s(&self) -> Result<Vec<u16>, ExifError> {
        let order = self.byte_order;
        let raw = self.checked_raw(Format::UnsignedShort)?;
        Ok(raw.chunks_exact(2).map(|c| order.read_u16(c)).collect())
    }

    /// Decode an `UnsignedLong` entry.
    pub fn as_u32s(&self) -> Result<Vec<u32>, ExifError> {
        let order = self.byte_order;
        let raw = self.checked_raw(Format::UnsignedLong)?;
        Ok(raw.chunks_exact(4).map(|c| order.read_u32(c)).collect())
    }

    /// Decode an `UnsignedRational` entry, eight bytes per element.
    pub fn as_rationals(&self) -> Result<Vec<Rational>, ExifError> {
        let order = self.byte_order;
        let raw = self.checked_raw(Format::UnsignedRational)?;
        Ok(raw
            .chunks_exact(8)
            .map(|c| Rational::new(order.read_u32(&c[..4]), order.read_u32(&c[4..])))
            .collect())
    }

    /// Decode a `SignedByte` entry.
    pub fn as_i8s(&self) -> Result<Vec<i8>, ExifError> {
        let raw = self.checked_raw(Format::SignedByte)?;
        Ok(raw.iter().map(|&b| b as i8).collect())
    }

    /// Decode a `SignedShort` entry.
    pub fn as_i16s(&self) -> Result<Vec<i16>, ExifError> {
        let order = self.byte_order;
        let raw = self.checked_raw(Format::SignedShort)?;
        Ok(raw.chunks_exact(2).map(|c| order.read_u16(c) as i16).collect())
    }

    /// Decode a `SignedLong` entry.
    pub fn as_i32s(&self) -> Result<Vec<i32>, ExifError> {
        let order = self.byte_order;
        let raw = self.checked_raw(Format::SignedLong)?;
        Ok(raw.chunks_exact(4).map(|c| order.read_u32(c) as i32).collect())
    }

    /// Decode a `SignedRational` entry, eight bytes per element.
    pub fn as_srationals(&self) -> Result<Vec<SRational>, ExifError> {
        let order = self.byte_order;
        let raw = self.checked_raw(Format::SignedRational)?;
        Ok(raw
            .chunks_exact(8)
            .map(|c| {
                SRational::new(
                    order.read_u32(&c[..4]) as i32,
                    order.read_u32(&c[4..]) as i32,
                )
            })
            .collect())
    }

    /// Decode a `Float` entry by reinterpreting each 32-bit word.
    pub fn as_f32s(&self) -> Result<Vec<f32>, ExifError> {
        let order = self.byte_order;
        let raw = self.checked_raw(Format::Float)?;
        Ok(raw
            .chunks_exact(4)
            .map(|c| f32::from_bits(order.read_u32(c)))
            .collect())
    }

    /// Decode a `Double` entry by reinterpreting each 64-bit word.
    pub fn as_f64s(&self) -> Result<Vec<f64>, ExifError> {
        let order = self.byte_order;
        let raw = self.checked_raw(Format::Double)?;
        Ok(raw
            .chunks_exact(8)
            .map(|c| f64::from_bits(order.read_u64(c)))
            .collect())
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Decode with the entry's own stored format.
    pub fn value(&self) -> Result<Value, ExifError> {
        let format = self
            .format
            .ok_or(ExifError::UnsupportedFormatCode(self.format_raw))?;
        self.decode(format)
    }

    /// Decode as the format with numeric code `code`.
    ///
    /// # Errors
    /// `UnsupportedFormatCode` if `code` is not 1-12; otherwise the same
    /// errors as [`decode`](Self::decode).
    pub fn value_as(&self, code: u16) -> Result<Value, ExifError> {
        let format = Format::from_u16(code).ok_or(ExifError::UnsupportedFormatCode(code))?;
        self.decode(format)
    }

    /// Decode as `format`.
    pub fn decode(&self, format: Format) -> Result<Value, ExifError> {
        Ok(match format {
            Format::UnsignedByte => Value::Byte(self.as_bytes()?),
            Format::Ascii => Value::Ascii(self.as_ascii()?),
            Format::UnsignedShort => Value::Short(self.as_u16s()?),
            Format::UnsignedLong => Value::Long(self.as_u32s()?),
            Format::UnsignedRational => Value::Rational(self.as_rationals()?),
            Format::SignedByte => Value::SByte(self.as_i8s()?),
            Format::Undefined => Value::Undefined(self.as_undefined()?),
            Format::SignedShort => Value::SShort(self.as_i16s()?),
            Format::SignedLong => Value::SLong(self.as_i32s()?),
            Format::SignedRational => Value::SRational(self.as_srationals()?),
            Format::Float => Value::Float(self.as_f32s()?),
            Format::Double => Value::Double(self.as_f64s()?),
        })
    }

    /// Read a single-element UnsignedLong/UnsignedShort value as an offset.
    ///
    /// Used for pointer tags that link to sub-directories.
    pub(crate) fn as_offset(&self) -> Option<u32> {
        let value: Vec<u32> = match self.format? {
            Format::UnsignedLong => self.as_u32s().ok()?,
            Format::UnsignedShort => self.as_u16s().ok()?.into_iter().map(u32::from).collect(),
            _ => return None,
        };
        match value.as_slice() {
            [offset] => Some(*offset),
            _ => None,
        }
    }
}

// =============================================================================
// Value
// =============================================================================

/// A decoded entry value, one variant per EXIF format.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(Bytes),
    Ascii(String),
    Short(Vec<u16>),
    Long(Vec<u32>),
    Rational(Vec<Rational>),
    SByte(Vec<i8>),
    Undefined(Bytes),
    SShort(Vec<i16>),
    SLong(Vec<i32>),
    SRational(Vec<SRational>),
    Float(Vec<f32>),
    Double(Vec<f64>),
}

impl Value {
    /// The format this value was decoded from.
    pub const fn format(&self) -> Format {
        match self {
            Value::Byte(_) => Format::UnsignedByte,
            Value::Ascii(_) => Format::Ascii,
            Value::Short(_) => Format::UnsignedShort,
            Value::Long(_) => Format::UnsignedLong,
            Value::Rational(_) => Format::UnsignedRational,
            Value::SByte(_) => Format::SignedByte,
            Value::Undefined(_) => Format::Undefined,
            Value::SShort(_) => Format::SignedShort,
            Value::SLong(_) => Format::SignedLong,
            Value::SRational(_) => Format::SignedRational,
            Value::Float(_) => Format::Float,
            Value::Double(_) => Format::Double,
        }
    }

    /// Number of decoded elements (characters for Ascii).
    pub fn len(&self) -> usize {
        match self {
            Value::Byte(v) | Value::Undefined(v) => v.len(),
            Value::Ascii(v) => v.len(),
            Value::Short(v) => v.len(),
            Value::Long(v) => v.len(),
            Value::Rational(v) => v.len(),
            Value::SByte(v) => v.len(),
            Value::SShort(v) => v.len(),
            Value::SLong(v) => v.len(),
            Value::SRational(v) => v.len(),
            Value::Float(v) => v.len(),
            Value::Double(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write `items` separated by ", ".
fn write_list<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Byte(v) => write_list(f, &v[..], |f, b| write!(f, "{}", b)),
            Value::Ascii(v) => f.write_str(v),
            Value::Short(v) => write_list(f, &v[..], |f, x| write!(f, "{}", x)),
            Value::Long(v) => write_list(f, &v[..], |f, x| write!(f, "{}", x)),
            Value::Rational(v) => write_list(f, &v[..], |f, r| write!(f, "{}", r.to_f64())),
            Value::SByte(v) => write_list(f, &v[..], |f, x| write!(f, "{}", x)),
            Value::Undefined(v) => {
                for byte in v.iter() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Value::SShort(v) => write_list(f, &v[..], |f, x| write!(f, "{}", x)),
            Value::SLong(v) => write_list(f, &v[..], |f, x| write!(f, "{}", x)),
            Value::SRational(v) => write_list(f, &v[..], |f, r| write!(f, "{}", r.to_f64())),
            Value::Float(v) => write_list(f, &v[..], |f, x| write!(f, "{}", x)),
            Value::Double(v) => write_list(f, &v[..], |f, x| write!(f, "{}", x)),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
