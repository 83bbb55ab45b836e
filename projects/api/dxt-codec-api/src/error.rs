//! Error types for decoding DDS framed textures.

use dxt_codec_common::CodecError;
use dxt_codec_dds::DdsError;
use thiserror::Error;

/// Errors that can occur in [`decode_dds`](crate::decode_dds).
#[derive(Debug, Error)]
pub enum DdsDecodeError {
    /// The header could not be read, or describes a format that cannot be decoded.
    #[error(transparent)]
    Dds(#[from] DdsError),

    /// The texture data following the header could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
