use thiserror::Error;

/// Errors that can occur while building or reading a DDS header.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DdsError {
    /// The data does not start with the `DDS ` magic.
    #[error("Not a DDS file: missing 'DDS ' magic")]
    NotADds,

    /// The data is shorter than the fixed size header.
    #[error("DDS data too short: need at least {needed} bytes, got {actual} bytes.")]
    TooShort {
        /// Required size in bytes
        needed: usize,
        /// Actual size in bytes
        actual: usize,
    },

    /// The header describes a pixel format this crate does not handle.
    #[error("Unsupported DDS pixel format (flags: {flags:#X}, fourcc: {fourcc:#010X}, bits: {rgb_bit_count})")]
    UnsupportedFormat {
        /// Pixel format flags
        flags: u32,
        /// FourCC, as a little-endian integer
        fourcc: u32,
        /// Bits per pixel for uncompressed formats
        rgb_bit_count: u32,
    },

    /// The texture is too large for the 32-bit size fields of the header.
    #[error("Texture of {width}x{height} pixels is too large for a DDS header")]
    TooLarge {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
}
