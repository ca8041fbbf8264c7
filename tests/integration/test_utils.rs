//! Test utilities for integration tests.
//!
//! Builders for EXIF blocks in either byte order, with the pointer tags and
//! "next" links between directories filled in automatically, plus a JPEG
//! wrapper that places a block in an APP1 segment.

use exifwalk::{tags, ByteOrder};

// =============================================================================
// Directory Builder
// =============================================================================

/// Typed entry payload, serialized in the block's byte order at build time.
#[derive(Clone, Debug)]
enum Payload {
    Bytes(Vec<u8>),
    Shorts(Vec<u16>),
    Longs(Vec<u32>),
    Rationals(Vec<(u32, u32)>),
    SRationals(Vec<(i32, i32)>),
    Doubles(Vec<f64>),
}

#[derive(Clone, Debug)]
struct EntrySpec {
    tag: u16,
    format: u16,
    count: u32,
    payload: Payload,
}

impl EntrySpec {
    fn encode(&self, order: ByteOrder) -> Vec<u8> {
        let mut out = Vec::new();
        match &self.payload {
            Payload::Bytes(bytes) => out.extend_from_slice(bytes),
            Payload::Shorts(values) => {
                for value in values {
                    put(&mut out, order, &value.to_le_bytes(), &value.to_be_bytes());
                }
            }
            Payload::Longs(values) => {
                for value in values {
                    put(&mut out, order, &value.to_le_bytes(), &value.to_be_bytes());
                }
            }
            Payload::Rationals(values) => {
                for (n, d) in values {
                    put(&mut out, order, &n.to_le_bytes(), &n.to_be_bytes());
                    put(&mut out, order, &d.to_le_bytes(), &d.to_be_bytes());
                }
            }
            Payload::SRationals(values) => {
                for (n, d) in values {
                    put(&mut out, order, &n.to_le_bytes(), &n.to_be_bytes());
                    put(&mut out, order, &d.to_le_bytes(), &d.to_be_bytes());
                }
            }
            Payload::Doubles(values) => {
                for value in values {
                    put(&mut out, order, &value.to_le_bytes(), &value.to_be_bytes());
                }
            }
        }
        out
    }
}

fn put(out: &mut Vec<u8>, order: ByteOrder, le: &[u8], be: &[u8]) {
    match order {
        ByteOrder::LittleEndian => out.extend_from_slice(le),
        ByteOrder::BigEndian => out.extend_from_slice(be),
    }
}

/// Builder for one directory.
#[derive(Clone, Debug, Default)]
pub struct IfdBuilder {
    entries: Vec<EntrySpec>,
}

impl IfdBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, tag: u16, format: u16, count: u32, payload: Payload) -> Self {
        self.entries.push(EntrySpec {
            tag,
            format,
            count,
            payload,
        });
        self
    }

    /// ASCII entry; a terminating NUL is appended.
    pub fn ascii(self, tag: u16, text: &str) -> Self {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0);
        let count = bytes.len() as u32;
        self.push(tag, 2, count, Payload::Bytes(bytes))
    }

    pub fn bytes(self, tag: u16, bytes: &[u8]) -> Self {
        self.push(tag, 1, bytes.len() as u32, Payload::Bytes(bytes.to_vec()))
    }

    pub fn undefined(self, tag: u16, bytes: &[u8]) -> Self {
        self.push(tag, 7, bytes.len() as u32, Payload::Bytes(bytes.to_vec()))
    }

    pub fn short(self, tag: u16, values: &[u16]) -> Self {
        self.push(tag, 3, values.len() as u32, Payload::Shorts(values.to_vec()))
    }

    pub fn long(self, tag: u16, values: &[u32]) -> Self {
        self.push(tag, 4, values.len() as u32, Payload::Longs(values.to_vec()))
    }

    pub fn rational(self, tag: u16, values: &[(u32, u32)]) -> Self {
        self.push(tag, 5, values.len() as u32, Payload::Rationals(values.to_vec()))
    }

    pub fn srational(self, tag: u16, values: &[(i32, i32)]) -> Self {
        self.push(tag, 10, values.len() as u32, Payload::SRationals(values.to_vec()))
    }

    pub fn double(self, tag: u16, values: &[f64]) -> Self {
        self.push(tag, 12, values.len() as u32, Payload::Doubles(values.to_vec()))
    }

    /// Entry with an arbitrary format code, count and payload bytes.
    pub fn raw(self, tag: u16, format: u16, count: u32, bytes: &[u8]) -> Self {
        self.push(tag, format, count, Payload::Bytes(bytes.to_vec()))
    }

    /// Entry whose value-offset field is written verbatim, for out-of-bounds cases.
    ///
    /// `format` and `count` should describe more than 4 bytes so that the
    /// field is read as an offset.
    pub fn dangling(self, tag: u16, format: u16, count: u32, offset: u32) -> Self {
        self.push(tag, format, count, Payload::Longs(vec![offset]))
    }

    fn set_long(&mut self, tag: u16, value: u32) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.tag == tag) {
            entry.payload = Payload::Longs(vec![value]);
        }
    }

    fn overflow_size(&self, order: ByteOrder) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.encode(order).len())
            .filter(|&len| len > 4)
            .sum()
    }

    fn size(&self, order: ByteOrder) -> usize {
        2 + 12 * self.entries.len() + 4 + self.overflow_size(order)
    }

    fn write(&self, data: &mut Vec<u8>, order: ByteOrder, offset: usize, next: u32) {
        assert_eq!(data.len(), offset, "directory written at the wrong offset");
        let mut overflow_offset = offset + 2 + 12 * self.entries.len() + 4;
        let mut overflow = Vec::new();

        put(
            data,
            order,
            &(self.entries.len() as u16).to_le_bytes(),
            &(self.entries.len() as u16).to_be_bytes(),
        );
        for entry in &self.entries {
            put(data, order, &entry.tag.to_le_bytes(), &entry.tag.to_be_bytes());
            put(data, order, &entry.format.to_le_bytes(), &entry.format.to_be_bytes());
            put(data, order, &entry.count.to_le_bytes(), &entry.count.to_be_bytes());

            let encoded = entry.encode(order);
            if encoded.len() <= 4 {
                let mut field = encoded;
                field.resize(4, 0);
                data.extend_from_slice(&field);
            } else {
                let field = overflow_offset as u32;
                put(data, order, &field.to_le_bytes(), &field.to_be_bytes());
                overflow_offset += encoded.len();
                overflow.extend_from_slice(&encoded);
            }
        }
        put(data, order, &next.to_le_bytes(), &next.to_be_bytes());
        data.extend_from_slice(&overflow);
    }
}

// =============================================================================
// Block Builder
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Ifd0,
    Ifd1,
    Exif,
    Gps,
    Interop,
}

/// Builder for a complete EXIF (TIFF) block.
///
/// Directories are laid out after the header in walk order. Pointer tags
/// (Exif, GPS, Interoperability) and the thumbnail tags are added for every
/// directory that is present.
pub struct ExifBuilder {
    byte_order: ByteOrder,
    ifd0: IfdBuilder,
    ifd1: Option<IfdBuilder>,
    exif: Option<IfdBuilder>,
    gps: Option<IfdBuilder>,
    interop: Option<IfdBuilder>,
    thumbnail: Option<Vec<u8>>,
    ifd1_next: Option<u32>,
}

impl ExifBuilder {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ifd0: IfdBuilder::new(),
            ifd1: None,
            exif: None,
            gps: None,
            interop: None,
            thumbnail: None,
            ifd1_next: None,
        }
    }

    pub fn ifd0(mut self, ifd: IfdBuilder) -> Self {
        self.ifd0 = ifd;
        self
    }

    pub fn ifd1(mut self, ifd: IfdBuilder) -> Self {
        self.ifd1 = Some(ifd);
        self
    }

    pub fn exif(mut self, ifd: IfdBuilder) -> Self {
        self.exif = Some(ifd);
        self
    }

    pub fn gps(mut self, ifd: IfdBuilder) -> Self {
        self.gps = Some(ifd);
        self
    }

    pub fn interop(mut self, ifd: IfdBuilder) -> Self {
        self.interop = Some(ifd);
        self
    }

    /// Thumbnail bytes appended after the directories, referenced from Ifd1.
    pub fn thumbnail(mut self, data: &[u8]) -> Self {
        self.thumbnail = Some(data.to_vec());
        self
    }

    /// Override Ifd1's "next" offset (e.g. point it back at Ifd0).
    pub fn ifd1_next(mut self, offset: u32) -> Self {
        self.ifd1_next = Some(offset);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let order = self.byte_order;

        let mut ifd0 = self.ifd0.clone();
        let mut exif = self.exif.clone().or_else(|| self.interop.as_ref().map(|_| IfdBuilder::new()));
        let mut ifd1 = self.ifd1.clone().or_else(|| self.thumbnail.as_ref().map(|_| IfdBuilder::new()));

        if exif.is_some() {
            ifd0 = ifd0.long(tags::EXIF_IFD_POINTER, &[0]);
        }
        if self.gps.is_some() {
            ifd0 = ifd0.long(tags::GPS_INFO_IFD_POINTER, &[0]);
        }
        if self.interop.is_some() {
            exif = exif.map(|ifd| ifd.long(tags::INTEROPERABILITY_IFD_POINTER, &[0]));
        }
        if let Some(thumbnail) = &self.thumbnail {
            ifd1 = ifd1.map(|ifd| {
                ifd.long(tags::JPEG_INTERCHANGE_FORMAT, &[0])
                    .long(tags::JPEG_INTERCHANGE_FORMAT_LENGTH, &[thumbnail.len() as u32])
            });
        }

        let mut dirs: Vec<(Slot, IfdBuilder)> = vec![(Slot::Ifd0, ifd0)];
        dirs.extend(ifd1.map(|ifd| (Slot::Ifd1, ifd)));
        dirs.extend(exif.map(|ifd| (Slot::Exif, ifd)));
        dirs.extend(self.gps.clone().map(|ifd| (Slot::Gps, ifd)));
        dirs.extend(self.interop.clone().map(|ifd| (Slot::Interop, ifd)));

        // Pointer values never change directory sizes, so offsets are final
        let mut offsets = Vec::with_capacity(dirs.len());
        let mut pos = 8;
        for (_, ifd) in &dirs {
            offsets.push(pos);
            pos += ifd.size(order);
        }
        let thumbnail_offset = pos as u32;

        let offset_of = |slot: Slot| -> Option<u32> {
            dirs.iter()
                .position(|(s, _)| *s == slot)
                .map(|index| offsets[index] as u32)
        };
        let exif_offset = offset_of(Slot::Exif);
        let gps_offset = offset_of(Slot::Gps);
        let interop_offset = offset_of(Slot::Interop);
        let ifd1_offset = offset_of(Slot::Ifd1);

        for (slot, ifd) in dirs.iter_mut() {
            match slot {
                Slot::Ifd0 => {
                    if let Some(offset) = exif_offset {
                        ifd.set_long(tags::EXIF_IFD_POINTER, offset);
                    }
                    if let Some(offset) = gps_offset {
                        ifd.set_long(tags::GPS_INFO_IFD_POINTER, offset);
                    }
                }
                Slot::Exif => {
                    if let Some(offset) = interop_offset {
                        ifd.set_long(tags::INTEROPERABILITY_IFD_POINTER, offset);
                    }
                }
                Slot::Ifd1 => ifd.set_long(tags::JPEG_INTERCHANGE_FORMAT, thumbnail_offset),
                _ => {}
            }
        }

        let mut data = Vec::new();
        put(&mut data, order, b"II", b"MM");
        put(&mut data, order, &42u16.to_le_bytes(), &42u16.to_be_bytes());
        put(&mut data, order, &8u32.to_le_bytes(), &8u32.to_be_bytes());

        for ((slot, ifd), offset) in dirs.iter().zip(&offsets) {
            let next = match slot {
                Slot::Ifd0 => ifd1_offset.unwrap_or(0),
                Slot::Ifd1 => self.ifd1_next.unwrap_or(0),
                _ => 0,
            };
            ifd.write(&mut data, order, *offset, next);
        }

        if let Some(thumbnail) = &self.thumbnail {
            data.extend_from_slice(thumbnail);
        }
        data
    }
}

// =============================================================================
// JPEG Wrapping
// =============================================================================

fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0xFF, marker];
    data.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    data.extend_from_slice(payload);
    data
}

/// A JPEG with JFIF, XMP and EXIF application segments, a quantization
/// table, and a short scan.
pub fn jpeg_with_exif(block: &[u8]) -> Vec<u8> {
    let mut exif = b"Exif\0\0".to_vec();
    exif.extend_from_slice(block);

    let mut data = vec![0xFF, 0xD8];
    data.extend(segment(0xE0, b"JFIF\0\x01\x02\0\0\x01\0\x01\0\0"));
    data.extend(segment(0xE1, b"http://ns.adobe.com/xap/1.0/\0<x:xmpmeta/>"));
    data.extend(segment(0xE1, &exif));
    data.extend(segment(0xDB, &[0u8; 65]));
    data.extend(segment(0xDA, &[0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]));
    data.extend_from_slice(&[0x12, 0x34, 0x56, 0xFF, 0x00, 0x78]);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

/// A JPEG with no EXIF segment.
pub fn jpeg_without_exif() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    data.extend(segment(0xE0, b"JFIF\0\x01\x02\0\0\x01\0\x01\0\0"));
    data.extend(segment(0xDB, &[0u8; 65]));
    data.extend(segment(0xDA, &[0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]));
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

// =============================================================================
// Fixtures
// =============================================================================

/// GPS directory at 25°21'32.6101" with the given references.
pub fn gps_ifd(lat_ref: &str, lon_ref: &str, alt_ref: u8) -> IfdBuilder {
    IfdBuilder::new()
        .bytes(tags::gps::VERSION_ID, &[2, 3, 0, 0])
        .ascii(tags::gps::LATITUDE_REF, lat_ref)
        .rational(tags::gps::LATITUDE, &[(25, 1), (21, 1), (326101, 10000)])
        .ascii(tags::gps::LONGITUDE_REF, lon_ref)
        .rational(tags::gps::LONGITUDE, &[(131, 1), (0, 1), (552063, 10000)])
        .bytes(tags::gps::ALTITUDE_REF, &[alt_ref])
        .rational(tags::gps::ALTITUDE, &[(3520, 100)])
}

/// A camera-like block: Ifd0, thumbnail Ifd1, Exif, GPS and Interop.
pub fn camera_block(order: ByteOrder) -> Vec<u8> {
    ExifBuilder::new(order)
        .ifd0(
            IfdBuilder::new()
                .ascii(tags::MAKE, "Canon")
                .ascii(tags::MODEL, "Canon EOS 5D Mark IV")
                .short(tags::ORIENTATION, &[1])
                .rational(tags::X_RESOLUTION, &[(72, 1)])
                .rational(tags::Y_RESOLUTION, &[(72, 1)])
                .short(tags::RESOLUTION_UNIT, &[2])
                .ascii(tags::DATE_TIME, "2019:03:07 17:42:51"),
        )
        .ifd1(IfdBuilder::new().short(tags::COMPRESSION, &[6]))
        .thumbnail(&[0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x02, 0xFF, 0xD9])
        .exif(
            IfdBuilder::new()
                .rational(tags::EXPOSURE_TIME, &[(1, 200)])
                .rational(tags::FNUMBER, &[(28, 10)])
                .undefined(tags::EXIF_VERSION, b"0231")
                .ascii(tags::DATE_TIME_ORIGINAL, "2019:03:07 17:42:51")
                .srational(tags::EXPOSURE_BIAS_VALUE, &[(-2, 3)])
                .short(tags::FLASH, &[16]),
        )
        .gps(gps_ifd("N", "W", 0))
        .interop(
            IfdBuilder::new()
                .ascii(tags::interop::INDEX, "R98")
                .undefined(tags::interop::VERSION, b"0100"),
        )
        .build()
}
