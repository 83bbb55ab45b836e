//! # 4x4 Texel Block
//!
//! This module provides the [`Decoded4x4Block`] structure, the unit every encoder in the
//! workspace consumes and every decoder produces.
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```
//!
//! ## Usage
//!
//! ```
//! use dxt_codec_common::color_8888::Color8888;
//! use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
//!
//! // Create a block filled with red pixels
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let block = Decoded4x4Block::new(red_pixel);
//!
//! assert!(block.has_identical_pixels());
//! ```

use crate::color_8888::Color8888;

/// Represents a 4x4 block of texels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Constructs a new block initialised with 16 copies of the provided pixel.
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Gets the pixel at the specified coordinates (0-3, 0-3).
    ///
    /// # Panics
    ///
    /// If `x` or `y` is 4 or greater.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(x < 4 && y < 4, "pixel ({x}, {y}) is outside of a 4x4 block");
        self.pixels[y * 4 + x]
    }

    /// Sets the pixel at the specified coordinates (0-3, 0-3).
    ///
    /// # Panics
    ///
    /// If `x` or `y` is 4 or greater.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Color8888) {
        assert!(x < 4 && y < 4, "pixel ({x}, {y}) is outside of a 4x4 block");
        self.pixels[y * 4 + x] = pixel;
    }

    /// Checks if all pixels in the block have the same color and alpha values
    #[inline]
    pub fn has_identical_pixels(&self) -> bool {
        let first = self.pixels[0];
        self.pixels.iter().all(|pixel| *pixel == first)
    }

    /// Checks if all pixels in the block have the same color values,
    /// ignoring the alpha values.
    #[inline]
    pub fn has_identical_pixels_ignore_alpha(&self) -> bool {
        let first = self.pixels[0].without_alpha();
        self.pixels
            .iter()
            .all(|pixel| pixel.without_alpha() == first)
    }

    /// Checks if all pixels in the block have the same alpha values
    #[inline]
    pub fn has_identical_alpha(&self) -> bool {
        let first_pixel_alpha = self.pixels[0].a;
        self.pixels.iter().all(|pixel| pixel.a == first_pixel_alpha)
    }
}
