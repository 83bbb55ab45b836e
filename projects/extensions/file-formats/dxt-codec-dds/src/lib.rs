#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

/// DDS header building and parsing.
pub mod dds;

/// Errors raised while reading DDS headers.
pub mod error;

pub use dds::constants::DDS_HEADER_SIZE;
pub use dds::header::{DdsFormat, DdsHeader, DdsPixelFormat};
pub use dds::likely_dds::likely_dds;
pub use error::DdsError;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
