//! Utility functions for working with DXT1 blocks.

mod bc1_decode;
pub use bc1_decode::*;
