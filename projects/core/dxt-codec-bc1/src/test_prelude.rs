//! Common test imports and utilities for BC1 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

// Common types from the shared crate
pub use dxt_codec_common::color_565::Color565;
pub use dxt_codec_common::color_8888::Color8888;
pub use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;

// Types from this crate
pub use crate::block::{encode_bc1_alpha_block, encode_bc1_block, Bc1Block};
pub use crate::endpoints::{ColorEndpoints, EndpointSelection};

/// Builds a block from 16 `(r, g, b, a)` tuples in row-major order.
pub(crate) fn block_from(texels: [(u8, u8, u8, u8); 16]) -> Decoded4x4Block {
    let mut block = Decoded4x4Block::new(Color8888::default());
    for (pixel, (r, g, b, a)) in block.pixels.iter_mut().zip(texels) {
        *pixel = Color8888::new(r, g, b, a);
    }
    block
}

/// A 16 texel horizontal gradient from black to white, fully opaque.
pub(crate) fn grey_ramp() -> Decoded4x4Block {
    let mut block = Decoded4x4Block::new(Color8888::default());
    for (x, pixel) in block.pixels.iter_mut().enumerate() {
        let v = (x * 17) as u8;
        *pixel = Color8888::new(v, v, v, 255);
    }
    block
}
