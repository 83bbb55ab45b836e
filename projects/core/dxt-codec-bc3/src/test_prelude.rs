//! Common test imports and utilities for BC3 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

// Common types from the shared and BC1 crates
pub use dxt_codec_bc1::{Bc1Block, EndpointSelection};
pub use dxt_codec_common::color_565::Color565;
pub use dxt_codec_common::color_8888::Color8888;
pub use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;

// Types from this crate
pub use crate::alpha::{alpha_index_at, alpha_indices};
pub use crate::block::{encode_bc3_block, Bc3Block};
pub use crate::util::decode_bc3_block;
pub use crate::ycocg::encode_ycocg_block;

/// A block whose alpha runs from 0 to 255 in steps of 17, over a fixed colour.
pub(crate) fn alpha_ramp() -> Decoded4x4Block {
    let mut block = Decoded4x4Block::new(Color8888::default());
    for (x, pixel) in block.pixels.iter_mut().enumerate() {
        *pixel = Color8888::new(120, 60, 30, (x * 17) as u8);
    }
    block
}
