//! Common imports for tests in this crate.

pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;

pub use crate::*;

/// Builds an RGBA raster where every pixel's channels depend on its position.
pub fn gradient_rgba(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x + y) * 7) as u8,
                if (x + y) % 5 == 0 { 0 } else { 255 - (x * 3) as u8 },
            ]);
        }
    }
    pixels
}
