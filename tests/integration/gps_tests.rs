//! GPS integration tests.
//!
//! Tests verify:
//! - Coordinates are signed by their hemisphere references
//! - Altitude is signed by its reference byte
//! - Missing or malformed components are reported without partial results

use exifwalk::{tags, ByteOrder, ExifData, ExifError, Format, Ifd, Location};

use super::test_utils::{camera_block, gps_ifd, ExifBuilder, IfdBuilder};

const LATITUDE: f64 = 25.35905836;
const LONGITUDE: f64 = 131.01533508;
const ALTITUDE: f64 = 35.2;

fn gps_data(order: ByteOrder, gps: IfdBuilder) -> ExifData {
    let data = ExifBuilder::new(order)
        .ifd0(IfdBuilder::new().ascii(tags::MAKE, "Pixel"))
        .gps(gps)
        .build();
    ExifData::parse(data).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-8,
        "expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Sign Tests
// =============================================================================

#[test]
fn test_north_east_above_sea_level() {
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let exif = gps_data(order, gps_ifd("N", "E", 0));
        let location = exif.get_location().unwrap();
        assert_close(location.latitude, LATITUDE);
        assert_close(location.longitude, LONGITUDE);
        assert_close(location.altitude, ALTITUDE);
    }
}

#[test]
fn test_south_west_below_sea_level() {
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let exif = gps_data(order, gps_ifd("S", "W", 1));
        let location = exif.get_location().unwrap();
        assert_close(location.latitude, -LATITUDE);
        assert_close(location.longitude, -LONGITUDE);
        assert_close(location.altitude, -ALTITUDE);
    }
}

#[test]
fn test_camera_block_location() {
    let exif = ExifData::parse(camera_block(ByteOrder::LittleEndian)).unwrap();
    let gps = exif.gps();
    assert_close(gps.latitude().unwrap(), LATITUDE);
    assert_close(gps.longitude().unwrap(), -LONGITUDE);
    assert_close(gps.altitude().unwrap(), ALTITUDE);
}

#[test]
fn test_unknown_reference_is_positive() {
    let exif = gps_data(ByteOrder::BigEndian, gps_ifd("X", "Q", 7));
    let location = exif.get_location().unwrap();
    assert!(location.latitude > 0.0);
    assert!(location.longitude > 0.0);
    assert!(location.altitude > 0.0);
}

#[test]
fn test_location_display() {
    let location = Location {
        latitude: -33.8688,
        longitude: 151.2093,
        altitude: 58.0,
    };
    assert_eq!(
        location.to_string(),
        "<Lat: -33.86880000, Lng: 151.20930000, Alt: 58.0000>"
    );
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_no_gps_directory() {
    let exif = ExifData::parse(
        ExifBuilder::new(ByteOrder::LittleEndian)
            .ifd0(IfdBuilder::new().ascii(tags::MAKE, "Pixel"))
            .build(),
    )
    .unwrap();

    assert_eq!(
        exif.get_location(),
        Err(ExifError::EntryNotFound {
            ifd: Ifd::Gps,
            tag: tags::gps::LATITUDE
        })
    );
}

#[test]
fn test_latitude_with_wrong_count() {
    let gps = IfdBuilder::new()
        .ascii(tags::gps::LATITUDE_REF, "N")
        .rational(tags::gps::LATITUDE, &[(25, 1), (21, 1), (0, 1), (0, 1)]);
    let exif = gps_data(ByteOrder::LittleEndian, gps);

    assert_eq!(
        exif.gps().latitude(),
        Err(ExifError::LengthMismatch {
            expected: 3,
            actual: 4
        })
    );
}

#[test]
fn test_reference_with_wrong_type() {
    let gps = IfdBuilder::new()
        .bytes(tags::gps::LATITUDE_REF, b"N")
        .rational(tags::gps::LATITUDE, &[(25, 1), (21, 1), (0, 1)]);
    let exif = gps_data(ByteOrder::BigEndian, gps);

    assert_eq!(
        exif.gps().latitude(),
        Err(ExifError::ValueTypeMismatch {
            ifd: Ifd::Gps,
            tag: tags::gps::LATITUDE_REF,
            expected: Format::Ascii,
            actual: Format::UnsignedByte,
        })
    );
}

#[test]
fn test_missing_altitude_fails_location() {
    let gps = IfdBuilder::new()
        .ascii(tags::gps::LATITUDE_REF, "N")
        .rational(tags::gps::LATITUDE, &[(25, 1), (21, 1), (0, 1)])
        .ascii(tags::gps::LONGITUDE_REF, "E")
        .rational(tags::gps::LONGITUDE, &[(131, 1), (0, 1), (0, 1)]);
    let exif = gps_data(ByteOrder::LittleEndian, gps);

    assert!(exif.gps().latitude().is_ok());
    assert!(exif.gps().longitude().is_ok());
    assert_eq!(
        exif.get_location(),
        Err(ExifError::EntryNotFound {
            ifd: Ifd::Gps,
            tag: tags::gps::ALTITUDE
        })
    );
}

#[test]
fn test_out_of_bounds_latitude() {
    let gps = IfdBuilder::new()
        .ascii(tags::gps::LATITUDE_REF, "N")
        .dangling(tags::gps::LATITUDE, 5, 3, 0x00F0_0000);
    let exif = gps_data(ByteOrder::BigEndian, gps);

    assert!(matches!(
        exif.gps().latitude(),
        Err(ExifError::OffsetOutOfBounds { .. })
    ));
}
