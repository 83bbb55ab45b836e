#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod block;
pub mod endpoints;
pub mod indices;
pub mod util;

pub use block::{encode_bc1_alpha_block, encode_bc1_block, Bc1Block};
pub use endpoints::{ColorEndpoints, EndpointSelection};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
