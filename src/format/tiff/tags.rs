//! EXIF format codes, directory identifiers and tag catalogs.
//!
//! This module is the vocabulary for EXIF parsing:
//! - Format codes that determine how entry values are encoded
//! - The five logical directories an entry can live in
//! - Tag IDs per directory, with symbolic names
//!
//! Tag numbers are defined by the EXIF/TIFF standards and must never change.
//! A tag ID is only meaningful within its directory: `0x0002` is
//! `GPSLatitude` in the GPS directory and `InteroperabilityVersion` in the
//! InterOperability directory.

use std::fmt;

use serde::Serialize;

// =============================================================================
// Formats
// =============================================================================

/// EXIF entry formats (TIFF field types 1-12).
///
/// Each format has a fixed element width, which determines:
/// - Whether an entry's value fits inline in the 4-byte value field
/// - How many raw bytes an entry with `count` elements must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum Format {
    /// Unsigned 8-bit integer
    UnsignedByte = 1,

    /// 8-bit ASCII character, NUL terminated
    Ascii = 2,

    /// Unsigned 16-bit integer
    UnsignedShort = 3,

    /// Unsigned 32-bit integer
    UnsignedLong = 4,

    /// Two unsigned 32-bit integers (numerator, denominator)
    UnsignedRational = 5,

    /// Signed 8-bit integer
    SignedByte = 6,

    /// Opaque bytes
    Undefined = 7,

    /// Signed 16-bit integer
    SignedShort = 8,

    /// Signed 32-bit integer
    SignedLong = 9,

    /// Two signed 32-bit integers (numerator, denominator)
    SignedRational = 10,

    /// IEEE-754 single precision
    Float = 11,

    /// IEEE-754 double precision
    Double = 12,
}

impl Format {
    /// All twelve formats, in code order.
    pub const ALL: [Format; 12] = [
        Format::UnsignedByte,
        Format::Ascii,
        Format::UnsignedShort,
        Format::UnsignedLong,
        Format::UnsignedRational,
        Format::SignedByte,
        Format::Undefined,
        Format::SignedShort,
        Format::SignedLong,
        Format::SignedRational,
        Format::Float,
        Format::Double,
    ];

    /// Maximum bytes that can be stored inline in a directory entry.
    pub const INLINE_THRESHOLD: u64 = 4;

    /// Size of a single element of this format in bytes.
    #[inline]
    pub const fn element_width(self) -> u64 {
        match self {
            Format::UnsignedByte | Format::Ascii | Format::SignedByte | Format::Undefined => 1,
            Format::UnsignedShort | Format::SignedShort => 2,
            Format::UnsignedLong | Format::SignedLong | Format::Float => 4,
            Format::UnsignedRational | Format::SignedRational | Format::Double => 8,
        }
    }

    /// Create a Format from its numeric code.
    ///
    /// Returns `None` for codes outside 1-12.
    pub fn from_u16(value: u16) -> Option<Self> {
        Format::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// Get the numeric format code.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Total byte size of `count` elements.
    #[inline]
    pub const fn byte_size(self, count: u32) -> u64 {
        self.element_width() * count as u64
    }

    /// Check if `count` elements fit inline in the value field.
    #[inline]
    pub const fn fits_inline(self, count: u32) -> bool {
        self.byte_size(count) <= Self::INLINE_THRESHOLD
    }

    /// Get a human-readable name for the format.
    pub const fn name(self) -> &'static str {
        match self {
            Format::UnsignedByte => "UnsignedByte",
            Format::Ascii => "Ascii",
            Format::UnsignedShort => "UnsignedShort",
            Format::UnsignedLong => "UnsignedLong",
            Format::UnsignedRational => "UnsignedRational",
            Format::SignedByte => "SignedByte",
            Format::Undefined => "Undefined",
            Format::SignedShort => "SignedShort",
            Format::SignedLong => "SignedLong",
            Format::SignedRational => "SignedRational",
            Format::Float => "Float",
            Format::Double => "Double",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Directories
// =============================================================================

/// The logical directories an EXIF entry can be found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Ifd {
    /// Primary image directory
    Ifd0,

    /// Thumbnail directory (Ifd0's "next" directory)
    Ifd1,

    /// Exif sub-directory, pointed to from Ifd0
    Exif,

    /// GPS sub-directory, pointed to from Ifd0
    Gps,

    /// Interoperability sub-directory, pointed to from Exif
    InterOperability,
}

impl Ifd {
    /// All directories, in walk order.
    pub const ALL: [Ifd; 5] = [
        Ifd::Ifd0,
        Ifd::Ifd1,
        Ifd::Exif,
        Ifd::Gps,
        Ifd::InterOperability,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Ifd::Ifd0 => "Ifd0",
            Ifd::Ifd1 => "Ifd1",
            Ifd::Exif => "Exif",
            Ifd::Gps => "Gps",
            Ifd::InterOperability => "InterOperability",
        }
    }
}

impl fmt::Display for Ifd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tag Catalogs
// =============================================================================

/// Look up the symbolic name of a tag within a directory.
///
/// Ifd0, Ifd1 and Exif share one namespace (cameras are not always strict
/// about which of them a tag lands in); GPS and InterOperability have their
/// own.
pub fn tag_name(ifd: Ifd, tag: u16) -> Option<&'static str> {
    let catalog = match ifd {
        Ifd::Ifd0 | Ifd::Ifd1 | Ifd::Exif => MAIN_TAG_NAMES,
        Ifd::Gps => GPS_TAG_NAMES,
        Ifd::InterOperability => INTEROP_TAG_NAMES,
    };
    catalog
        .binary_search_by_key(&tag, |&(id, _)| id)
        .ok()
        .map(|index| catalog[index].1)
}

// -----------------------------------------------------------------------------
// Ifd0 / Ifd1 / Exif
// -----------------------------------------------------------------------------

pub const NEW_SUBFILE_TYPE: u16 = 0x00fe;
pub const IMAGE_WIDTH: u16 = 0x0100;
pub const IMAGE_LENGTH: u16 = 0x0101;
pub const BITS_PER_SAMPLE: u16 = 0x0102;
pub const COMPRESSION: u16 = 0x0103;
pub const PHOTOMETRIC_INTERPRETATION: u16 = 0x0106;
pub const FILL_ORDER: u16 = 0x010a;
pub const DOCUMENT_NAME: u16 = 0x010d;
pub const IMAGE_DESCRIPTION: u16 = 0x010e;
pub const MAKE: u16 = 0x010f;
pub const MODEL: u16 = 0x0110;
pub const STRIP_OFFSETS: u16 = 0x0111;
pub const ORIENTATION: u16 = 0x0112;
pub const SAMPLES_PER_PIXEL: u16 = 0x0115;
pub const ROWS_PER_STRIP: u16 = 0x0116;
pub const STRIP_BYTE_COUNTS: u16 = 0x0117;
pub const X_RESOLUTION: u16 = 0x011a;
pub const Y_RESOLUTION: u16 = 0x011b;
pub const PLANAR_CONFIGURATION: u16 = 0x011c;
pub const RESOLUTION_UNIT: u16 = 0x0128;
pub const TRANSFER_FUNCTION: u16 = 0x012d;
pub const SOFTWARE: u16 = 0x0131;
pub const DATE_TIME: u16 = 0x0132;
pub const ARTIST: u16 = 0x013b;
pub const WHITE_POINT: u16 = 0x013e;
pub const PRIMARY_CHROMATICITIES: u16 = 0x013f;
pub const SUB_IFDS: u16 = 0x014a;
pub const TRANSFER_RANGE: u16 = 0x0156;
pub const JPEG_PROC: u16 = 0x0200;
/// Offset of the JPEG thumbnail (Ifd1)
pub const JPEG_INTERCHANGE_FORMAT: u16 = 0x0201;
/// Byte length of the JPEG thumbnail (Ifd1)
pub const JPEG_INTERCHANGE_FORMAT_LENGTH: u16 = 0x0202;
pub const YCBCR_COEFFICIENTS: u16 = 0x0211;
pub const YCBCR_SUB_SAMPLING: u16 = 0x0212;
pub const YCBCR_POSITIONING: u16 = 0x0213;
pub const REFERENCE_BLACK_WHITE: u16 = 0x0214;
pub const XML_PACKET: u16 = 0x02bc;
pub const CFA_REPEAT_PATTERN_DIM: u16 = 0x828d;
pub const CFA_PATTERN: u16 = 0x828e;
pub const BATTERY_LEVEL: u16 = 0x828f;
pub const COPYRIGHT: u16 = 0x8298;
pub const EXPOSURE_TIME: u16 = 0x829a;
pub const FNUMBER: u16 = 0x829d;
pub const IPTC_NAA: u16 = 0x83bb;
pub const IMAGE_RESOURCES: u16 = 0x8649;
/// Pointer tag: offset of the Exif sub-directory (Ifd0)
pub const EXIF_IFD_POINTER: u16 = 0x8769;
pub const INTER_COLOR_PROFILE: u16 = 0x8773;
pub const EXPOSURE_PROGRAM: u16 = 0x8822;
pub const SPECTRAL_SENSITIVITY: u16 = 0x8824;
/// Pointer tag: offset of the GPS sub-directory (Ifd0)
pub const GPS_INFO_IFD_POINTER: u16 = 0x8825;
pub const ISO_SPEED_RATINGS: u16 = 0x8827;
pub const OECF: u16 = 0x8828;
pub const TIME_ZONE_OFFSET: u16 = 0x882a;
pub const EXIF_VERSION: u16 = 0x9000;
pub const DATE_TIME_ORIGINAL: u16 = 0x9003;
pub const DATE_TIME_DIGITIZED: u16 = 0x9004;
pub const COMPONENTS_CONFIGURATION: u16 = 0x9101;
pub const COMPRESSED_BITS_PER_PIXEL: u16 = 0x9102;
pub const SHUTTER_SPEED_VALUE: u16 = 0x9201;
pub const APERTURE_VALUE: u16 = 0x9202;
pub const BRIGHTNESS_VALUE: u16 = 0x9203;
pub const EXPOSURE_BIAS_VALUE: u16 = 0x9204;
pub const MAX_APERTURE_VALUE: u16 = 0x9205;
pub const SUBJECT_DISTANCE: u16 = 0x9206;
pub const METERING_MODE: u16 = 0x9207;
pub const LIGHT_SOURCE: u16 = 0x9208;
pub const FLASH: u16 = 0x9209;
pub const FOCAL_LENGTH: u16 = 0x920a;
pub const SUBJECT_AREA: u16 = 0x9214;
pub const TIFF_EP_STANDARD_ID: u16 = 0x9216;
pub const MAKER_NOTE: u16 = 0x927c;
pub const USER_COMMENT: u16 = 0x9286;
pub const SUB_SEC_TIME: u16 = 0x9290;
pub const SUB_SEC_TIME_ORIGINAL: u16 = 0x9291;
pub const SUB_SEC_TIME_DIGITIZED: u16 = 0x9292;
pub const XP_TITLE: u16 = 0x9c9b;
pub const XP_COMMENT: u16 = 0x9c9c;
pub const XP_AUTHOR: u16 = 0x9c9d;
pub const XP_KEYWORDS: u16 = 0x9c9e;
pub const XP_SUBJECT: u16 = 0x9c9f;
pub const FLASH_PIX_VERSION: u16 = 0xa000;
pub const COLOR_SPACE: u16 = 0xa001;
pub const PIXEL_X_DIMENSION: u16 = 0xa002;
pub const PIXEL_Y_DIMENSION: u16 = 0xa003;
pub const RELATED_SOUND_FILE: u16 = 0xa004;
/// Pointer tag: offset of the InterOperability sub-directory (Exif)
pub const INTEROPERABILITY_IFD_POINTER: u16 = 0xa005;
pub const FLASH_ENERGY: u16 = 0xa20b;
pub const SPATIAL_FREQUENCY_RESPONSE: u16 = 0xa20c;
pub const FOCAL_PLANE_X_RESOLUTION: u16 = 0xa20e;
pub const FOCAL_PLANE_Y_RESOLUTION: u16 = 0xa20f;
pub const FOCAL_PLANE_RESOLUTION_UNIT: u16 = 0xa210;
pub const SUBJECT_LOCATION: u16 = 0xa214;
pub const EXPOSURE_INDEX: u16 = 0xa215;
pub const SENSING_METHOD: u16 = 0xa217;
pub const FILE_SOURCE: u16 = 0xa300;
pub const SCENE_TYPE: u16 = 0xa301;
pub const NEW_CFA_PATTERN: u16 = 0xa302;
pub const CUSTOM_RENDERED: u16 = 0xa401;
pub const EXPOSURE_MODE: u16 = 0xa402;
pub const WHITE_BALANCE: u16 = 0xa403;
pub const DIGITAL_ZOOM_RATIO: u16 = 0xa404;
pub const FOCAL_LENGTH_IN_35MM_FILM: u16 = 0xa405;
pub const SCENE_CAPTURE_TYPE: u16 = 0xa406;
pub const GAIN_CONTROL: u16 = 0xa407;
pub const CONTRAST: u16 = 0xa408;
pub const SATURATION: u16 = 0xa409;
pub const SHARPNESS: u16 = 0xa40a;
pub const DEVICE_SETTING_DESCRIPTION: u16 = 0xa40b;
pub const SUBJECT_DISTANCE_RANGE: u16 = 0xa40c;
pub const IMAGE_UNIQUE_ID: u16 = 0xa420;
pub const CAMERA_OWNER_NAME: u16 = 0xa430;
pub const BODY_SERIAL_NUMBER: u16 = 0xa431;
pub const LENS_SPECIFICATION: u16 = 0xa432;
pub const LENS_MAKE: u16 = 0xa433;
pub const LENS_MODEL: u16 = 0xa434;
pub const LENS_SERIAL_NUMBER: u16 = 0xa435;
pub const COMPOSITE_IMAGE: u16 = 0xa460;
pub const SOURCE_IMAGE_NUMBER_OF_COMPOSITE_IMAGE: u16 = 0xa461;
pub const SOURCE_EXPOSURE_TIMES_OF_COMPOSITE_IMAGE: u16 = 0xa462;
pub const GAMMA: u16 = 0xa500;
pub const PRINT_IMAGE_MATCHING: u16 = 0xc4a5;
pub const PADDING: u16 = 0xea1c;

/// Names for the shared Ifd0/Ifd1/Exif namespace, sorted by tag ID.
static MAIN_TAG_NAMES: &[(u16, &str)] = &[
    (NEW_SUBFILE_TYPE, "NewSubfileType"),
    (IMAGE_WIDTH, "ImageWidth"),
    (IMAGE_LENGTH, "ImageLength"),
    (BITS_PER_SAMPLE, "BitsPerSample"),
    (COMPRESSION, "Compression"),
    (PHOTOMETRIC_INTERPRETATION, "PhotometricInterpretation"),
    (FILL_ORDER, "FillOrder"),
    (DOCUMENT_NAME, "DocumentName"),
    (IMAGE_DESCRIPTION, "ImageDescription"),
    (MAKE, "Make"),
    (MODEL, "Model"),
    (STRIP_OFFSETS, "StripOffsets"),
    (ORIENTATION, "Orientation"),
    (SAMPLES_PER_PIXEL, "SamplesPerPixel"),
    (ROWS_PER_STRIP, "RowsPerStrip"),
    (STRIP_BYTE_COUNTS, "StripByteCounts"),
    (X_RESOLUTION, "XResolution"),
    (Y_RESOLUTION, "YResolution"),
    (PLANAR_CONFIGURATION, "PlanarConfiguration"),
    (RESOLUTION_UNIT, "ResolutionUnit"),
    (TRANSFER_FUNCTION, "TransferFunction"),
    (SOFTWARE, "Software"),
    (DATE_TIME, "DateTime"),
    (ARTIST, "Artist"),
    (WHITE_POINT, "WhitePoint"),
    (PRIMARY_CHROMATICITIES, "PrimaryChromaticities"),
    (SUB_IFDS, "SubIFDs"),
    (TRANSFER_RANGE, "TransferRange"),
    (JPEG_PROC, "JPEGProc"),
    (JPEG_INTERCHANGE_FORMAT, "JPEGInterchangeFormat"),
    (JPEG_INTERCHANGE_FORMAT_LENGTH, "JPEGInterchangeFormatLength"),
    (YCBCR_COEFFICIENTS, "YCbCrCoefficients"),
    (YCBCR_SUB_SAMPLING, "YCbCrSubSampling"),
    (YCBCR_POSITIONING, "YCbCrPositioning"),
    (REFERENCE_BLACK_WHITE, "ReferenceBlackWhite"),
    (XML_PACKET, "XMLPacket"),
    (CFA_REPEAT_PATTERN_DIM, "CFARepeatPatternDim"),
    (CFA_PATTERN, "CFAPattern"),
    (BATTERY_LEVEL, "BatteryLevel"),
    (COPYRIGHT, "Copyright"),
    (EXPOSURE_TIME, "ExposureTime"),
    (FNUMBER, "FNumber"),
    (IPTC_NAA, "IPTC/NAA"),
    (IMAGE_RESOURCES, "ImageResources"),
    (EXIF_IFD_POINTER, "ExifIfdPointer"),
    (INTER_COLOR_PROFILE, "InterColorProfile"),
    (EXPOSURE_PROGRAM, "ExposureProgram"),
    (SPECTRAL_SENSITIVITY, "SpectralSensitivity"),
    (GPS_INFO_IFD_POINTER, "GPSInfoIfdPointer"),
    (ISO_SPEED_RATINGS, "ISOSpeedRatings"),
    (OECF, "OECF"),
    (TIME_ZONE_OFFSET, "TimeZoneOffset"),
    (EXIF_VERSION, "ExifVersion"),
    (DATE_TIME_ORIGINAL, "DateTimeOriginal"),
    (DATE_TIME_DIGITIZED, "DateTimeDigitized"),
    (COMPONENTS_CONFIGURATION, "ComponentsConfiguration"),
    (COMPRESSED_BITS_PER_PIXEL, "CompressedBitsPerPixel"),
    (SHUTTER_SPEED_VALUE, "ShutterSpeedValue"),
    (APERTURE_VALUE, "ApertureValue"),
    (BRIGHTNESS_VALUE, "BrightnessValue"),
    (EXPOSURE_BIAS_VALUE, "ExposureBiasValue"),
    (MAX_APERTURE_VALUE, "MaxApertureValue"),
    (SUBJECT_DISTANCE, "SubjectDistance"),
    (METERING_MODE, "MeteringMode"),
    (LIGHT_SOURCE, "LightSource"),
    (FLASH, "Flash"),
    (FOCAL_LENGTH, "FocalLength"),
    (SUBJECT_AREA, "SubjectArea"),
    (TIFF_EP_STANDARD_ID, "TIFF/EPStandardID"),
    (MAKER_NOTE, "MakerNote"),
    (USER_COMMENT, "UserComment"),
    (SUB_SEC_TIME, "SubSecTime"),
    (SUB_SEC_TIME_ORIGINAL, "SubSecTimeOriginal"),
    (SUB_SEC_TIME_DIGITIZED, "SubSecTimeDigitized"),
    (XP_TITLE, "XPTitle"),
    (XP_COMMENT, "XPComment"),
    (XP_AUTHOR, "XPAuthor"),
    (XP_KEYWORDS, "XPKeywords"),
    (XP_SUBJECT, "XPSubject"),
    (FLASH_PIX_VERSION, "FlashPixVersion"),
    (COLOR_SPACE, "ColorSpace"),
    (PIXEL_X_DIMENSION, "PixelXDimension"),
    (PIXEL_Y_DIMENSION, "PixelYDimension"),
    (RELATED_SOUND_FILE, "RelatedSoundFile"),
    (INTEROPERABILITY_IFD_POINTER, "InteroperabilityIfdPointer"),
    (FLASH_ENERGY, "FlashEnergy"),
    (SPATIAL_FREQUENCY_RESPONSE, "SpatialFrequencyResponse"),
    (FOCAL_PLANE_X_RESOLUTION, "FocalPlaneXResolution"),
    (FOCAL_PLANE_Y_RESOLUTION, "FocalPlaneYResolution"),
    (FOCAL_PLANE_RESOLUTION_UNIT, "FocalPlaneResolutionUnit"),
    (SUBJECT_LOCATION, "SubjectLocation"),
    (EXPOSURE_INDEX, "ExposureIndex"),
    (SENSING_METHOD, "SensingMethod"),
    (FILE_SOURCE, "FileSource"),
    (SCENE_TYPE, "SceneType"),
    (NEW_CFA_PATTERN, "CFAPattern"),
    (CUSTOM_RENDERED, "CustomRendered"),
    (EXPOSURE_MODE, "ExposureMode"),
    (WHITE_BALANCE, "WhiteBalance"),
    (DIGITAL_ZOOM_RATIO, "DigitalZoomRatio"),
    (FOCAL_LENGTH_IN_35MM_FILM, "FocalLengthIn35mmFilm"),
    (SCENE_CAPTURE_TYPE, "SceneCaptureType"),
    (GAIN_CONTROL, "GainControl"),
    (CONTRAST, "Contrast"),
    (SATURATION, "Saturation"),
    (SHARPNESS, "Sharpness"),
    (DEVICE_SETTING_DESCRIPTION, "DeviceSettingDescription"),
    (SUBJECT_DISTANCE_RANGE, "SubjectDistanceRange"),
    (IMAGE_UNIQUE_ID, "ImageUniqueID"),
    (CAMERA_OWNER_NAME, "CameraOwnerName"),
    (BODY_SERIAL_NUMBER, "BodySerialNumber"),
    (LENS_SPECIFICATION, "LensSpecification"),
    (LENS_MAKE, "LensMake"),
    (LENS_MODEL, "LensModel"),
    (LENS_SERIAL_NUMBER, "LensSerialNumber"),
    (COMPOSITE_IMAGE, "CompositeImage"),
    (
        SOURCE_IMAGE_NUMBER_OF_COMPOSITE_IMAGE,
        "SourceImageNumberOfCompositeImage",
    ),
    (
        SOURCE_EXPOSURE_TIMES_OF_COMPOSITE_IMAGE,
        "SourceExposureTimesOfCompositeImage",
    ),
    (GAMMA, "Gamma"),
    (PRINT_IMAGE_MATCHING, "PrintImageMatching"),
    (PADDING, "Padding"),
];

// -----------------------------------------------------------------------------
// GPS
// -----------------------------------------------------------------------------

/// Tags of the GPS directory.
pub mod gps {
    pub const VERSION_ID: u16 = 0x0000;
    pub const LATITUDE_REF: u16 = 0x0001;
    pub const LATITUDE: u16 = 0x0002;
    pub const LONGITUDE_REF: u16 = 0x0003;
    pub const LONGITUDE: u16 = 0x0004;
    pub const ALTITUDE_REF: u16 = 0x0005;
    pub const ALTITUDE: u16 = 0x0006;
    pub const TIME_STAMP: u16 = 0x0007;
    pub const SATELLITES: u16 = 0x0008;
    pub const STATUS: u16 = 0x0009;
    pub const MEASURE_MODE: u16 = 0x000a;
    pub const DOP: u16 = 0x000b;
    pub const SPEED_REF: u16 = 0x000c;
    pub const SPEED: u16 = 0x000d;
    pub const TRACK_REF: u16 = 0x000e;
    pub const TRACK: u16 = 0x000f;
    pub const IMG_DIRECTION_REF: u16 = 0x0010;
    pub const IMG_DIRECTION: u16 = 0x0011;
    pub const MAP_DATUM: u16 = 0x0012;
    pub const DEST_LATITUDE_REF: u16 = 0x0013;
    pub const DEST_LATITUDE: u16 = 0x0014;
    pub const DEST_LONGITUDE_REF: u16 = 0x0015;
    pub const DEST_LONGITUDE: u16 = 0x0016;
    pub const DEST_BEARING_REF: u16 = 0x0017;
    pub const DEST_BEARING: u16 = 0x0018;
    pub const DEST_DISTANCE_REF: u16 = 0x0019;
    pub const DEST_DISTANCE: u16 = 0x001a;
    pub const PROCESSING_METHOD: u16 = 0x001b;
    pub const AREA_INFORMATION: u16 = 0x001c;
    pub const DATE_STAMP: u16 = 0x001d;
    pub const DIFFERENTIAL: u16 = 0x001e;
    pub const H_POSITIONING_ERROR: u16 = 0x001f;
}

static GPS_TAG_NAMES: &[(u16, &str)] = &[
    (gps::VERSION_ID, "GPSVersionID"),
    (gps::LATITUDE_REF, "GPSLatitudeRef"),
    (gps::LATITUDE, "GPSLatitude"),
    (gps::LONGITUDE_REF, "GPSLongitudeRef"),
    (gps::LONGITUDE, "GPSLongitude"),
    (gps::ALTITUDE_REF, "GPSAltitudeRef"),
    (gps::ALTITUDE, "GPSAltitude"),
    (gps::TIME_STAMP, "GPSTimeStamp"),
    (gps::SATELLITES, "GPSSatellites"),
    (gps::STATUS, "GPSStatus"),
    (gps::MEASURE_MODE, "GPSMeasureMode"),
    (gps::DOP, "GPSDOP"),
    (gps::SPEED_REF, "GPSSpeedRef"),
    (gps::SPEED, "GPSSpeed"),
    (gps::TRACK_REF, "GPSTrackRef"),
    (gps::TRACK, "GPSTrack"),
    (gps::IMG_DIRECTION_REF, "GPSImgDirectionRef"),
    (gps::IMG_DIRECTION, "GPSImgDirection"),
    (gps::MAP_DATUM, "GPSMapDatum"),
    (gps::DEST_LATITUDE_REF, "GPSDestLatitudeRef"),
    (gps::DEST_LATITUDE, "GPSDestLatitude"),
    (gps::DEST_LONGITUDE_REF, "GPSDestLongitudeRef"),
    (gps::DEST_LONGITUDE, "GPSDestLongitude"),
    (gps::DEST_BEARING_REF, "GPSDestBearingRef"),
    (gps::DEST_BEARING, "GPSDestBearing"),
    (gps::DEST_DISTANCE_REF, "GPSDestDistanceRef"),
    (gps::DEST_DISTANCE, "GPSDestDistance"),
    (gps::PROCESSING_METHOD, "GPSProcessingMethod"),
    (gps::AREA_INFORMATION, "GPSAreaInformation"),
    (gps::DATE_STAMP, "GPSDateStamp"),
    (gps::DIFFERENTIAL, "GPSDifferential"),
    (gps::H_POSITIONING_ERROR, "GPSHPositioningError"),
];

// -----------------------------------------------------------------------------
// InterOperability
// -----------------------------------------------------------------------------

/// Tags of the InterOperability directory.
pub mod interop {
    pub const INDEX: u16 = 0x0001;
    pub const VERSION: u16 = 0x0002;
    pub const RELATED_IMAGE_FILE_FORMAT: u16 = 0x1000;
    pub const RELATED_IMAGE_WIDTH: u16 = 0x1001;
    pub const RELATED_IMAGE_LENGTH: u16 = 0x1002;
}

static INTEROP_TAG_NAMES: &[(u16, &str)] = &[
    (interop::INDEX, "InteroperabilityIndex"),
    (interop::VERSION, "InteroperabilityVersion"),
    (interop::RELATED_IMAGE_FILE_FORMAT, "RelatedImageFileFormat"),
    (interop::RELATED_IMAGE_WIDTH, "RelatedImageWidth"),
    (interop::RELATED_IMAGE_LENGTH, "RelatedImageLength"),
];

// =============================================================================
// Tests
// =============================================================================
