//! # Colour Index Assignment
//!
//! Assigns each of the 16 texels of a block a 2-bit index into the palette derived from
//! the block's endpoints.
//!
//! Distances are Manhattan (L1) distances against the endpoints *as a decoder would
//! reconstruct them* from 5:6:5, and the nearest candidate is picked with a fixed set of
//! pairwise comparisons rather than an argmin. The comparisons decide ties, so they are
//! reproduced exactly:
//!
//! ```text
//! b0 = d0 > d3    b1 = d1 > d2    b2 = d0 > d2    b3 = d1 > d3    b4 = d2 > d3
//! x0 = b1 & b2    x1 = b0 & b3    x2 = b0 & b4
//! index = x2 | ((x0 | x1) << 1)
//! ```
//!
//! Indices are packed LSB first: texel 0 occupies bits 0-1, texel 15 bits 30-31.

use dxt_codec_common::color_565::Color565;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;

/// Absolute value without a branch: `(d ^ (d >> 31)) - (d >> 31)`.
#[inline(always)]
pub const fn branchless_abs(value: i32) -> i32 {
    let sign = value >> 31;
    (value ^ sign) - sign
}

/// L1 distance between two texels over the red, green and blue channels.
#[inline(always)]
pub fn rgb_distance(a: Color8888, b: Color8888) -> i32 {
    branchless_abs(a.r as i32 - b.r as i32)
        + branchless_abs(a.g as i32 - b.g as i32)
        + branchless_abs(a.b as i32 - b.b as i32)
}

/// Builds the 4-colour palette `[c0, c1, (2c0 + c1) / 3, (c0 + 2c1) / 3]` from two
/// already reconstructed colours. Alpha is left at 255.
#[inline]
pub fn four_color_palette(c0: Color8888, c1: Color8888) -> [Color8888; 4] {
    let third = |a: u8, b: u8| ((2 * a as u32 + b as u32) / 3) as u8;
    [
        c0,
        c1,
        Color8888::new(third(c0.r, c1.r), third(c0.g, c1.g), third(c0.b, c1.b), 255),
        Color8888::new(third(c1.r, c0.r), third(c1.g, c0.g), third(c1.b, c0.b), 255),
    ]
}

/// Assigns 4-colour indices for a block whose endpoints are `color0` (high) and
/// `color1` (low).
///
/// # Remarks
///
/// A solid block whose endpoints are equal gets all-zero indices.
#[inline]
pub fn color_indices(block: &Decoded4x4Block, color0: Color565, color1: Color565) -> u32 {
    let palette = four_color_palette(color0.to_color_8888(), color1.to_color_8888());
    palette_indices(block, &palette, rgb_distance)
}

/// Assigns 4-colour indices against an arbitrary palette using the given distance.
///
/// Used directly by encoders that measure distances over a subset of channels.
#[inline(always)]
pub fn palette_indices(
    block: &Decoded4x4Block,
    palette: &[Color8888; 4],
    distance: impl Fn(Color8888, Color8888) -> i32,
) -> u32 {
    let mut result = 0u32;

    for (i, &texel) in block.pixels.iter().enumerate() {
        let d0 = distance(palette[0], texel);
        let d1 = distance(palette[1], texel);
        let d2 = distance(palette[2], texel);
        let d3 = distance(palette[3], texel);

        let b0 = (d0 > d3) as u32;
        let b1 = (d1 > d2) as u32;
        let b2 = (d0 > d2) as u32;
        let b3 = (d1 > d3) as u32;
        let b4 = (d2 > d3) as u32;

        let x0 = b1 & b2;
        let x1 = b0 & b3;
        let x2 = b0 & b4;

        result |= (x2 | ((x0 | x1) << 1)) << (i << 1);
    }

    result
}

/// Assigns 3-colour + transparent indices, as used by DXT1 punch-through alpha.
///
/// `color0` must be the low endpoint and `color1` the high one, which is what makes a
/// decoder switch to 3-colour mode. The palette is `[color0, color1, (color0 + color1) / 2]`
/// and index 3 marks a transparent texel.
///
/// A texel is transparent only when its RGB is exactly black. This is tested on the raw
/// channels, independent of any colour distance. Alpha plays no part.
pub fn color_indices_3color(block: &Decoded4x4Block, color0: Color565, color1: Color565) -> u32 {
    let c0 = color0.to_color_8888();
    let c1 = color1.to_color_8888();
    let half = |a: u8, b: u8| ((a as u32 + b as u32) / 2) as u8;
    let c2 = Color8888::new(half(c0.r, c1.r), half(c0.g, c1.g), half(c0.b, c1.b), 255);

    let mut result = 0u32;

    for (i, &texel) in block.pixels.iter().enumerate() {
        let d0 = rgb_distance(c0, texel);
        let d1 = rgb_distance(c1, texel);
        let d2 = rgb_distance(c2, texel);

        let b0 = (d0 > d2) as u32;
        let b1 = (d1 > d2) as u32;
        let b2 = (d0 > d1) as u32;

        let mid = b0 & b1;
        let high = b2 & (mid ^ 1);
        let index = (mid << 1) | high;

        let d3 = texel.r | texel.g | texel.b;
        let transparent = (d3 == 0) as u32;

        result |= (index | (transparent * 3)) << (i << 1);
    }

    result
}

/// Reads the 2-bit index of texel `i` (0-15) from packed indices.
#[inline(always)]
pub const fn index_at(indices: u32, i: usize) -> u8 {
    ((indices >> (i << 1)) & 0b11) as u8
}
