//! Utility functions for working with DXT5 blocks.

mod bc3_decode;
pub use bc3_decode::*;
