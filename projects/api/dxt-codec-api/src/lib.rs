#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod decode;
pub mod encoder;
pub mod error;
pub mod format;

pub use decode::{decode, decode_dds, DecodedImage};
pub use encoder::{Encoder, EncoderBuilder, EncoderSettings};
pub use error::DdsDecodeError;
pub use format::TextureFormat;

// Types callers need to configure an encoder or provide an output.
pub use dxt_codec_bc1::EndpointSelection;
#[cfg(feature = "std")]
pub use dxt_codec_common::sink::WriteSink;
pub use dxt_codec_common::raster::ChannelOrder;
pub use dxt_codec_common::sink::{BlockSink, SliceSink};
pub use dxt_codec_common::CodecError;
pub use dxt_codec_dds::{DdsHeader, DDS_HEADER_SIZE};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
