//! Typed decoding integration tests.
//!
//! Tests verify:
//! - Each value shape decodes through the store in both byte orders
//! - Format and length contracts hold for entries found by the walker
//! - A failed decode leaves the store and entry usable

use exifwalk::{tags, ByteOrder, ExifData, ExifError, Format, Ifd, Rational, SRational, Value};

use super::test_utils::{camera_block, ExifBuilder, IfdBuilder};

fn decode_block(order: ByteOrder) -> ExifData {
    let data = ExifBuilder::new(order)
        .ifd0(
            IfdBuilder::new()
                .bytes(0x1000, &[1, 2, 3, 4, 5])
                .raw(0x1001, 6, 3, &[0xFF, 0x80, 0x7F])
                .short(0x1002, &[1, 65535, 300])
                .raw(0x1003, 8, 2, &[0xFF, 0xFE, 0x00, 0x02])
                .long(0x1004, &[0xDEADBEEF, 7])
                .raw(0x1005, 9, 1, &[0xFF, 0xFF, 0xFF, 0xFF])
                .rational(0x1006, &[(25, 1), (21, 1), (326101, 10000)])
                .srational(0x1007, &[(-7, 2), (3, -4)])
                .double(0x1008, &[1.5, -0.25])
                .undefined(0x1009, b"0230"),
        )
        .build();
    ExifData::parse(data).unwrap()
}

fn check_values(order: ByteOrder) {
    let exif = decode_block(order);
    let value = |tag| exif.get_value(Ifd::Ifd0, tag).unwrap();

    assert_eq!(value(0x1000), Value::Byte(vec![1, 2, 3, 4, 5].into()));
    assert_eq!(value(0x1002), Value::Short(vec![1, 65535, 300]));
    assert_eq!(value(0x1004), Value::Long(vec![0xDEADBEEF, 7]));
    assert_eq!(
        value(0x1006),
        Value::Rational(vec![
            Rational::new(25, 1),
            Rational::new(21, 1),
            Rational::new(326101, 10000)
        ])
    );
    assert_eq!(
        value(0x1007),
        Value::SRational(vec![SRational::new(-7, 2), SRational::new(3, -4)])
    );
    assert_eq!(value(0x1008), Value::Double(vec![1.5, -0.25]));
    assert_eq!(value(0x1009), Value::Undefined(b"0230".to_vec().into()));
}

#[test]
fn test_values_little_endian() {
    check_values(ByteOrder::LittleEndian);
}

#[test]
fn test_values_big_endian() {
    check_values(ByteOrder::BigEndian);
}

#[test]
fn test_single_byte_formats_ignore_order() {
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let exif = decode_block(order);
        assert_eq!(
            exif.get_value(Ifd::Ifd0, 0x1001).unwrap(),
            Value::SByte(vec![-1, -128, 127])
        );
    }
}

#[test]
fn test_signed_values_are_order_dependent() {
    // The same raw bytes were written for both orders
    let le = decode_block(ByteOrder::LittleEndian);
    let be = decode_block(ByteOrder::BigEndian);

    assert_eq!(
        le.get_value(Ifd::Ifd0, 0x1003).unwrap(),
        Value::SShort(vec![-257, 512])
    );
    assert_eq!(
        be.get_value(Ifd::Ifd0, 0x1003).unwrap(),
        Value::SShort(vec![-2, 2])
    );
    assert_eq!(
        le.get_value(Ifd::Ifd0, 0x1005).unwrap(),
        Value::SLong(vec![-1])
    );
}

#[test]
fn test_format_mismatch_then_retry() {
    let exif = decode_block(ByteOrder::BigEndian);
    let entry = exif.get_entry(Ifd::Ifd0, 0x1002).unwrap();

    assert_eq!(
        entry.decode(Format::UnsignedLong),
        Err(ExifError::FormatMismatch {
            expected: Format::UnsignedLong,
            actual: Format::UnsignedShort,
        })
    );
    assert_eq!(entry.value_as(99), Err(ExifError::UnsupportedFormatCode(99)));

    // Retry with the stored format, or fall back to raw bytes
    assert_eq!(entry.as_u16s().unwrap(), vec![1, 65535, 300]);
    assert_eq!(entry.raw().len(), 6);
}

#[test]
fn test_inline_padding_not_decoded() {
    // One short occupies 2 of the 4 value-field bytes
    let data = ExifBuilder::new(ByteOrder::LittleEndian)
        .ifd0(IfdBuilder::new().raw(0x2000, 3, 1, &[0x05, 0x00]))
        .build();
    let exif = ExifData::parse(data).unwrap();
    assert_eq!(
        exif.get_value(Ifd::Ifd0, 0x2000).unwrap(),
        Value::Short(vec![5])
    );
}

#[test]
fn test_display_rendering() {
    let exif = ExifData::parse(camera_block(ByteOrder::LittleEndian)).unwrap();
    let render = |ifd, tag| exif.get_value(ifd, tag).unwrap().to_string();

    assert_eq!(render(Ifd::Ifd0, tags::MAKE), "Canon");
    assert_eq!(render(Ifd::Exif, tags::EXPOSURE_TIME), "0.005");
    assert_eq!(render(Ifd::Exif, tags::FNUMBER), "2.8");
    assert_eq!(render(Ifd::Exif, tags::EXIF_VERSION), "30323331");
    assert_eq!(render(Ifd::Gps, tags::gps::VERSION_ID), "2, 3, 0, 0");
}

#[test]
fn test_entry_names() {
    let exif = ExifData::parse(camera_block(ByteOrder::BigEndian)).unwrap();
    let names: Vec<&str> = exif
        .entries_in(Ifd::Exif)
        .iter()
        .filter_map(|entry| entry.name())
        .collect();

    assert!(names.contains(&"ExposureTime"));
    assert!(names.contains(&"DateTimeOriginal"));
    assert!(names.contains(&"InteroperabilityIfdPointer"));
}
