//! DXT5 (BC3) decoding, following MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3>
//!
//! Colours use the 'ideal' integer rounding of the DX9 docs, the same values the encoder
//! measures distances against. Interpolated alpha levels are rounded to nearest.

use dxt_codec_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Builds the 8 entry alpha lookup table for a pair of alpha endpoints.
///
/// If `alpha0 > alpha1` the table holds 8 interpolated values, else 6 interpolated
/// values followed by fully transparent and fully opaque.
#[inline(always)]
pub fn alpha_palette(alpha0: u8, alpha1: u8) -> [u8; 8] {
    let (a0, a1) = (alpha0 as u32, alpha1 as u32);
    let mut alpha_values = [0u8; 8];
    alpha_values[0] = alpha0; // bit code 000
    alpha_values[1] = alpha1; // bit code 001

    if alpha0 > alpha1 {
        // 8 interpolated alpha values
        for (k, value) in (1..=6u32).rev().zip(alpha_values[2..].iter_mut()) {
            *value = ((k * a0 + (7 - k) * a1 + 3) / 7) as u8;
        }
    } else {
        // 6 interpolated alpha values + transparent and opaque
        for (k, value) in (1..=4u32).rev().zip(alpha_values[2..6].iter_mut()) {
            *value = ((k * a0 + (5 - k) * a1 + 2) / 5) as u8;
        }
        alpha_values[6] = 0; // Transparent (bit code 110)
        alpha_values[7] = 255; // Opaque (bit code 111)
    }

    alpha_values
}

/// Decodes a DXT5 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: The 16 bytes of the block
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels with alpha
///
/// # Example
///
/// ```
/// use dxt_codec_bc3::util::decode_bc3_block;
///
/// let bc3_block = [0u8; 16]; // Compressed BC3 block
///
/// // Decode the BC3 block into a structured representation
/// let decoded = decode_bc3_block(&bc3_block);
/// let pixel_at_0_0 = decoded.pixel(0, 0);
/// ```
#[inline(always)]
pub fn decode_bc3_block(src: &[u8; 16]) -> Decoded4x4Block {
    // Last 8 bytes contain the color data (same format as BC1)
    let c0 = Color565::from_raw(u16::from_le_bytes([src[8], src[9]]));
    let c1 = Color565::from_raw(u16::from_le_bytes([src[10], src[11]]));
    let idx = u32::from_le_bytes([src[12], src[13], src[14], src[15]]);

    let (r0, g0, b0) = (c0.red() as u32, c0.green() as u32, c0.blue() as u32);
    let (r1, g1, b1) = (c1.red() as u32, c1.green() as u32, c1.blue() as u32);

    // BC3 always uses the 4-color mode (no transparency from color section)
    let dict = [
        Color8888::new(r0 as u8, g0 as u8, b0 as u8, 255),
        Color8888::new(r1 as u8, g1 as u8, b1 as u8, 255),
        Color8888::new(
            ((2 * r0 + r1) / 3) as u8,
            ((2 * g0 + g1) / 3) as u8,
            ((2 * b0 + b1) / 3) as u8,
            255,
        ),
        Color8888::new(
            ((r0 + 2 * r1) / 3) as u8,
            ((g0 + 2 * g1) / 3) as u8,
            ((b0 + 2 * b1) / 3) as u8,
            255,
        ),
    ];

    // First 8 bytes contain the alpha endpoints and 48 bits of alpha indices,
    // which cross byte boundaries.
    let alpha_values = alpha_palette(src[0], src[1]);
    let alpha_indices = u64::from_le_bytes([src[2], src[3], src[4], src[5], src[6], src[7], 0, 0]);

    let mut result = Decoded4x4Block::new(Color8888::new(0, 0, 0, 0));
    for (i, pixel) in result.pixels.iter_mut().enumerate() {
        let color = dict[((idx >> (i * 2)) & 0x3) as usize];
        let alpha = alpha_values[((alpha_indices >> (i * 3)) & 0x7) as usize];
        *pixel = Color8888::new(color.r, color.g, color.b, alpha);
    }

    result
}

/// Decodes a DXT5 block from the start of a slice.
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc3_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; 16] = src.get(..16)?.try_into().ok()?;
    Some(decode_bc3_block(block))
}
