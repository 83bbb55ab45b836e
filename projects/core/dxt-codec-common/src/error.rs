//! Error types shared by the encoders and decoders.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a texture.
///
/// Every error is reported to the immediate caller; nothing is retried and no
/// partial output is guaranteed to be meaningful.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The requested format cannot be used for this operation.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(&'static str),

    /// A channel order refers to a byte outside of the pixel, or reuses a byte.
    #[error("Invalid channel order: channels must be distinct offsets below {bytes_per_pixel}")]
    InvalidChannelOrder {
        /// Number of bytes per pixel implied by the channel order.
        bytes_per_pixel: usize,
    },

    /// The image dimensions cannot be split into whole 4x4 blocks.
    #[error("Invalid dimensions: {width}x{height}. Width and height must be non-zero multiples of 4.")]
    InvalidDimensions {
        /// Width in pixels
        width: usize,
        /// Height in pixels
        height: usize,
    },

    /// A buffer does not have the length implied by the dimensions and format.
    #[error("Invalid input length: expected {expected} bytes, got {actual} bytes.")]
    InvalidLength {
        /// The required size in bytes
        expected: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// A fixed-size output buffer is too small for the encoded data.
    #[error("Output buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    OutputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// Writing to an output stream failed.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
