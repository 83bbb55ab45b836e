#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod alpha;
pub mod block;
pub mod util;
pub mod ycocg;

pub use block::{encode_bc3_block, Bc3Block};
pub use ycocg::encode_ycocg_block;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
