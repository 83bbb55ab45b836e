//! # RGB565 Color Format Support
//!
//! This module provides support for working with 16-bit RGB565 colors, which are
//! the endpoint representation of the DXT1 and DXT5 block formats.
//!
//! ## Overview
//!
//! RGB565 packs red, green, and blue color components into a single 16-bit value:
//!
//! - **Red**: 5 bits (bits 15-11)
//! - **Green**: 6 bits (bits 10-5)
//! - **Blue**: 5 bits (bits 4-0)
//!
//! ## Color Expansion
//!
//! When converting RGB565 colors back to 8-bit components, the top bits are replicated
//! into the low bits, as D3D11 requires. The encoders
//! in this workspace never compare texels against raw 5/6 bit values; every distance
//! is measured against the *expanded* endpoint, so the same expansion is exposed for
//! 8-bit inputs through [`requantize_5`] and [`requantize_6`].
//!
//! ## Examples
//!
//! ```rust
//! use dxt_codec_common::color_565::Color565;
//!
//! // Create from raw 16-bit value
//! let color = Color565::from_raw(0xF800); // Pure red
//! assert_eq!(color.red(), 255);
//! assert_eq!(color.green(), 0);
//! assert_eq!(color.blue(), 0);
//! ```
//!
//! ## Additional Reading
//!
//! - [GPU BCn Decoding by Fabian Giesen](https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/)

use crate::color_8888::Color8888;

/// Mask keeping the 5 significant bits of an 8-bit channel.
pub const C565_5_MASK: u8 = 0xF8;

/// Mask keeping the 6 significant bits of an 8-bit channel.
pub const C565_6_MASK: u8 = 0xFC;

/// Snaps an 8-bit channel onto the 5-bit grid, returning the expanded 8-bit value
/// a decoder would reconstruct for it.
///
/// ```
/// use dxt_codec_common::color_565::requantize_5;
///
/// assert_eq!(requantize_5(255), 255);
/// assert_eq!(requantize_5(248), 255);
/// assert_eq!(requantize_5(7), 0);
/// ```
#[inline(always)]
pub const fn requantize_5(value: u8) -> u8 {
    (value & C565_5_MASK) | (value >> 5)
}

/// Snaps an 8-bit channel onto the 6-bit grid, returning the expanded 8-bit value
/// a decoder would reconstruct for it.
#[inline(always)]
pub const fn requantize_6(value: u8) -> u8 {
    (value & C565_6_MASK) | (value >> 6)
}

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in the DXT1 and DXT5 color blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from separate RGB components by truncating
    /// each channel to its significant bits.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Creates a new [`Color565`] from the RGB channels of a texel. Alpha is ignored.
    #[inline]
    pub const fn from_color_8888(color: Color8888) -> Self {
        Self::from_rgb(color.r, color.g, color.b)
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// Extracts the expanded 8-bit red component (0-255)
    ///
    /// The 5-bit value is expanded as `(value << 3) | (value >> 2)`.
    #[inline]
    pub const fn red(&self) -> u8 {
        let r = (self.value & 0b11111000_00000000) >> 11;
        ((r << 3) | (r >> 2)) as u8
    }

    /// Extracts the expanded 8-bit green component (0-255)
    ///
    /// The 6-bit value is expanded as `(value << 2) | (value >> 4)`.
    #[inline]
    pub const fn green(&self) -> u8 {
        let g = (self.value & 0b00000111_11100000) >> 5;
        ((g << 2) | (g >> 4)) as u8
    }

    /// Extracts the expanded 8-bit blue component (0-255)
    ///
    /// The 5-bit value is expanded as `(value << 3) | (value >> 2)`.
    #[inline]
    pub const fn blue(&self) -> u8 {
        let b = self.value & 0b00000000_00011111;
        ((b << 3) | (b >> 2)) as u8
    }

    /// Returns if this value is greater than the other.
    /// DXT1 decoders use this comparison to choose between 4-color and 3-color blocks.
    #[inline]
    pub const fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// ```
    /// use dxt_codec_common::color_565::Color565;
    ///
    /// let rgba8888 = Color565::from_rgb(255, 0, 0).to_color_8888();
    /// assert_eq!((rgba8888.r, rgba8888.g, rgba8888.b, rgba8888.a), (255, 0, 0, 255));
    /// ```
    #[inline]
    pub const fn to_color_8888(&self) -> Color8888 {
        self.to_color_8888_with_alpha(255)
    }

    /// Converts this RGB565 color to a RGBA8888 color with the specified alpha value
    #[inline]
    pub const fn to_color_8888_with_alpha(&self, alpha: u8) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), alpha)
    }
}
