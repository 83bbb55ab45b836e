#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod color_565;
pub mod color_8888;
pub mod decoded_4x4_block;
pub mod error;
pub mod raster;
pub mod sink;

pub use error::CodecError;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
