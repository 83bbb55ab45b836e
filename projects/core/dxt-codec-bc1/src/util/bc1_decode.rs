//! DXT1 (BC1) block decoding, following the reference decoder described on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures>
//!
//! Interpolated colours use the 'ideal' integer rounding of the DX9 docs
//! (`(2c0 + c1) / 3`), which is also what the encoder measures distances against.

use dxt_codec_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Decodes a DXT1 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: The 8 bytes of the block
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels. Texels that use the
/// transparent index of a 3-colour block decode as transparent black.
///
/// # Example
///
/// ```
/// use dxt_codec_bc1::util::decode_bc1_block;
///
/// let bc1_block = [0u8; 8]; // Compressed BC1 block
///
/// // Decode the BC1 block into a structured representation
/// let decoded = decode_bc1_block(&bc1_block);
/// let pixel_at_0_0 = decoded.pixel(0, 0);
/// ```
#[inline(always)]
pub fn decode_bc1_block(src: &[u8; 8]) -> Decoded4x4Block {
    // Extract color endpoints and index data
    let c0 = Color565::from_raw(u16::from_le_bytes([src[0], src[1]]));
    let c1 = Color565::from_raw(u16::from_le_bytes([src[2], src[3]]));
    let idx = u32::from_le_bytes([src[4], src[5], src[6], src[7]]);

    let (r0, g0, b0) = (c0.red() as u32, c0.green() as u32, c0.blue() as u32);
    let (r1, g1, b1) = (c1.red() as u32, c1.green() as u32, c1.blue() as u32);

    let mut dict = [Color8888::new(0, 0, 0, 0); 4];
    dict[0] = c0.to_color_8888();
    dict[1] = c1.to_color_8888();

    // Calculate the additional colors based on whether c0 > c1
    if c0.greater_than(&c1) {
        // Four-color block
        dict[2] = Color8888::new(
            ((2 * r0 + r1) / 3) as u8,
            ((2 * g0 + g1) / 3) as u8,
            ((2 * b0 + b1) / 3) as u8,
            255,
        );
        dict[3] = Color8888::new(
            ((r0 + 2 * r1) / 3) as u8,
            ((g0 + 2 * g1) / 3) as u8,
            ((b0 + 2 * b1) / 3) as u8,
            255,
        );
    } else {
        // Three-color block, 1 bit alpha.
        dict[2] = Color8888::new(
            ((r0 + r1) / 2) as u8,
            ((g0 + g1) / 2) as u8,
            ((b0 + b1) / 2) as u8,
            255,
        );
        dict[3] = Color8888::new(0, 0, 0, 0); // Transparent black
    }

    let mut result = Decoded4x4Block::new(Color8888::new(0, 0, 0, 0));
    for (i, pixel) in result.pixels.iter_mut().enumerate() {
        *pixel = dict[((idx >> (i * 2)) & 0x3) as usize];
    }

    result
}

/// Decodes a DXT1 block from the start of a slice.
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc1_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; 8] = src.get(..8)?.try_into().ok()?;
    Some(decode_bc1_block(block))
}
