use num_enum::TryFromPrimitive;

/// Marker codes that get a named trace line. Every other code byte is
/// reported with its raw value by the fallback decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum JpegMarkerCode {
    /// SOI: Marks the start of an image.
    StartOfImage = 0xD8,

    /// EOI: Marks the end of an image.
    EndOfImage = 0xD9,

    /// SOS: Marks the start of scan.
    StartOfScan = 0xDA,

    /// APP0: Application data 0: used for JFIF header.
    ApplicationData0 = 0xE0,

    /// APP7: Application data 7: used for HP color-space info.
    ApplicationData7 = 0xE7,

    /// APP8: Application data 8: used for HP color-transformation info or SPIFF header.
    ApplicationData8 = 0xE8,

    /// COM: Comment block.
    Comment = 0xFE,

    // The following markers are defined in ISO/IEC 14495-1 | ITU T.87. (JPEG-LS standard)
    /// SOF_55: Marks the start of a JPEG-LS encoded frame.
    StartOfFrameJpegls = 0xF7,

    /// LSE: Marks the start of a JPEG-LS extended parameters segment.
    JpeglsExtendedParameters = 0xF8,
}

pub const JPEG_MARKER_START_BYTE: u8 = 0xFF;
