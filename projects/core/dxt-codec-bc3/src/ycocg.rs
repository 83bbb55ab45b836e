//! # YCoCg-DXT5
//!
//! A higher quality use of the DXT5 format for colour images: each texel is converted to
//! the YCoCg colour space, luma (Y) goes into the 8-level alpha channel, and the two chroma
//! channels (Co, Cg) go into the red and green channels of the colour half. The source alpha
//! is discarded.
//!
//! Per block, the encoder
//!
//! 1. converts every texel to `(Co, Cg, 0, Y)`;
//! 2. takes the per-channel extrema of Co, Cg and Y;
//! 3. picks a scale factor of 1, 2 or 4 so the chroma deviation from 128 uses as much of
//!    the range as possible, scales chroma of both texels and endpoints by it, and records
//!    `scale - 1` in the blue channel of both endpoints;
//! 4. insets the bounding box by 1/16th (chroma) and 1/32nd (luma) of its extent and snaps
//!    chroma to the 5:6:5 grid;
//! 5. chooses which diagonal of the Co/Cg bounding box the texels lie along, swapping the
//!    Cg endpoints if the other diagonal fits better;
//! 6. assigns colour indices using the Co/Cg distance only.
//!
//! The blue channel of a decoded texel gives the scale back: `scale = (blue >> 3) + 1`.
//! See [`ycocg_to_rgb`].
//!
//! Based on "Real-Time YCoCg-DXT Compression" by J.M.P. van Waveren and Ignacio Castaño.

use crate::alpha::alpha_indices;
use crate::block::Bc3Block;
use dxt_codec_bc1::indices::{branchless_abs, four_color_palette, palette_indices};
use dxt_codec_bc1::Bc1Block;
use dxt_codec_common::color_565::{requantize_5, requantize_6, Color565};
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;

const INSET_COLOR_SHIFT: i32 = 4;
const INSET_ALPHA_SHIFT: i32 = 5;

#[inline(always)]
fn clamp_byte(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Converts an RGB texel to `(Co, Cg, 0, Y)`, stored in the `r`, `g`, `b` and `a`
/// fields respectively. Chroma is offset by 128.
#[inline(always)]
pub fn rgb_to_ycocg(texel: Color8888) -> Color8888 {
    let (r, g, b) = (texel.r as i32, texel.g as i32, texel.b as i32);
    let co = (((r << 1) - (b << 1) + 2) >> 2) + 128;
    let cg = (((g << 1) - r - b + 2) >> 2) + 128;
    let y = (r + (g << 1) + b + 2) >> 2;
    Color8888::new(clamp_byte(co), clamp_byte(cg), 0, clamp_byte(y))
}

/// Converts a decoded YCoCg-DXT5 texel back to opaque RGB.
///
/// The per-block scale is read from the blue channel.
#[inline]
pub fn ycocg_to_rgb(texel: Color8888) -> Color8888 {
    let scale = ((texel.b >> 3) as i32) + 1;
    let co = (texel.r as i32 - 128) / scale;
    let cg = (texel.g as i32 - 128) / scale;
    let y = texel.a as i32;

    Color8888::new(
        clamp_byte(y + co - cg),
        clamp_byte(y + cg),
        clamp_byte(y - co - cg),
        255,
    )
}

/// Encodes an RGB block as YCoCg-DXT5.
///
/// # Example
///
/// ```
/// use dxt_codec_bc3::encode_ycocg_block;
/// use dxt_codec_bc3::ycocg::ycocg_to_rgb;
/// use dxt_codec_common::color_8888::Color8888;
/// use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
///
/// let block = Decoded4x4Block::new(Color8888::new(100, 100, 100, 255));
/// let decoded = encode_ycocg_block(&block).decode();
///
/// assert_eq!(ycocg_to_rgb(decoded.pixel(0, 0)), Color8888::new(100, 100, 100, 255));
/// ```
pub fn encode_ycocg_block(block: &Decoded4x4Block) -> Bc3Block {
    let mut ycocg = *block;
    for texel in ycocg.pixels.iter_mut() {
        *texel = rgb_to_ycocg(*texel);
    }

    let (mut min, mut max) = ycocg_bounds(&ycocg);
    scale_ycocg(&mut ycocg, &mut min, &mut max);
    inset_ycocg_bounds(&mut min, &mut max);
    select_ycocg_diagonal(&ycocg, &mut min, &mut max);

    let color0 = Color565::from_color_8888(max);
    let color1 = Color565::from_color_8888(min);
    let palette = four_color_palette(color0.to_color_8888(), color1.to_color_8888());
    let indices = palette_indices(&ycocg, &palette, cocg_distance);

    Bc3Block::new(
        max.a,
        min.a,
        alpha_indices(&ycocg, min.a, max.a),
        Bc1Block::new(color0, color1, indices),
    )
}

/// L1 distance over the Co and Cg channels.
#[inline(always)]
fn cocg_distance(a: Color8888, b: Color8888) -> i32 {
    branchless_abs(a.r as i32 - b.r as i32) + branchless_abs(a.g as i32 - b.g as i32)
}

/// Extrema of Co, Cg and Y. Blue is left at 0.
fn ycocg_bounds(block: &Decoded4x4Block) -> (Color8888, Color8888) {
    let mut min = Color8888::new(255, 255, 0, 255);
    let mut max = Color8888::new(0, 0, 0, 0);

    for texel in block.pixels {
        min.r = min.r.min(texel.r);
        min.g = min.g.min(texel.g);
        min.a = min.a.min(texel.a);
        max.r = max.r.max(texel.r);
        max.g = max.g.max(texel.g);
        max.a = max.a.max(texel.a);
    }

    (min, max)
}

/// The largest chroma scale (1, 2 or 4) that keeps the deviation from 128 in range.
#[inline]
fn chroma_scale(min: Color8888, max: Color8888) -> i32 {
    let deviation = |c: u8| branchless_abs(c as i32 - 128);
    let m0 = deviation(min.r)
        .max(deviation(min.g))
        .max(deviation(max.r))
        .max(deviation(max.g));

    let mask0 = -((m0 <= 128 / 2 - 1) as i32);
    let mask1 = -((m0 <= 128 / 4 - 1) as i32);
    1 + (1 & mask0) + (2 & mask1)
}

fn scale_ycocg(block: &mut Decoded4x4Block, min: &mut Color8888, max: &mut Color8888) {
    let scale = chroma_scale(*min, *max);
    let rescale = |c: u8| ((c as i32 - 128) * scale + 128) as u8;

    min.r = rescale(min.r);
    min.g = rescale(min.g);
    min.b = ((scale - 1) << 3) as u8;
    max.r = rescale(max.r);
    max.g = rescale(max.g);
    max.b = ((scale - 1) << 3) as u8;

    for texel in block.pixels.iter_mut() {
        texel.r = rescale(texel.r);
        texel.g = rescale(texel.g);
    }
}

fn inset_ycocg_bounds(min: &mut Color8888, max: &mut Color8888) {
    let inset = |min: u8, max: u8, shift: i32| {
        let (min, max) = (min as i32, max as i32);
        let inset = (max - min) - ((1 << (shift - 1)) - 1);
        let mini = ((min << shift) + inset) >> shift;
        let maxi = ((max << shift) - inset) >> shift;
        (clamp_byte(mini), clamp_byte(maxi))
    };

    let (co_min, co_max) = inset(min.r, max.r, INSET_COLOR_SHIFT);
    let (cg_min, cg_max) = inset(min.g, max.g, INSET_COLOR_SHIFT);
    let (y_min, y_max) = inset(min.a, max.a, INSET_ALPHA_SHIFT);

    min.r = requantize_5(co_min);
    min.g = requantize_6(cg_min);
    min.a = y_min;
    max.r = requantize_5(co_max);
    max.g = requantize_6(cg_max);
    max.a = y_max;
}

fn select_ycocg_diagonal(block: &Decoded4x4Block, min: &mut Color8888, max: &mut Color8888) {
    let mid0 = ((min.r as u32 + max.r as u32 + 1) >> 1) as u8;
    let mid1 = ((min.g as u32 + max.g as u32 + 1) >> 1) as u8;

    let mut side = 0u32;
    for texel in block.pixels {
        let b0 = (texel.r >= mid0) as u32;
        let b1 = (texel.g >= mid1) as u32;
        side += b0 ^ b1;
    }

    // conditional swap of the Cg endpoints
    let mask = 0u8.wrapping_sub((side > 8) as u8);
    let swap = (min.g ^ max.g) & mask;
    min.g ^= swap;
    max.g ^= swap;
}
