//! # Alpha Index Assignment
//!
//! Assigns each texel a 3-bit index into the 8-level DXT5 alpha ramp spanned by
//! `alpha0 = max` and `alpha1 = min`.
//!
//! Seven thresholds sit halfway between neighbouring ramp levels:
//!
//! ```text
//! mid   = (max - min) / 14
//! ab[k] = ((7 - k) * max + k * min) / 7 + mid        for k in 1..=7
//! ```
//!
//! A texel's provisional index is one plus the number of thresholds its alpha does not
//! exceed, modulo 8. That count runs from the top of the ramp downwards, so the result is
//! finally remapped with `index ^ (index < 2)`, which moves the two endpoints onto codes
//! 0 (`max`) and 1 (`min`) as the hardware decoder expects.
//!
//! When `min == max` every texel lands on index 1.

use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;

/// Computes the packed alpha indices of a block: 16 3-bit indices, texel 0 in the lowest
/// bits of byte 0, serialized as 6 little-endian bytes.
pub fn alpha_indices(block: &Decoded4x4Block, min_alpha: u8, max_alpha: u8) -> [u8; 6] {
    let min = min_alpha as i32;
    let max = max_alpha as i32;
    let mid = (max - min) / 14;

    let mut thresholds = [0i32; 7];
    for (k, threshold) in (1..=7).zip(thresholds.iter_mut()) {
        *threshold = ((7 - k) * max + k * min) / 7 + mid;
    }

    let mut packed = 0u64;
    for (i, texel) in block.pixels.iter().enumerate() {
        let alpha = texel.a as i32;

        // 1 for every threshold `alpha` does not exceed
        let mut sum = 1;
        for threshold in thresholds {
            sum += ((alpha - threshold - 1) >> 31) & 1;
        }

        let index = (sum & 7) as u64;
        let index = index ^ (index < 2) as u64;
        packed |= index << (i * 3);
    }

    let bytes = packed.to_le_bytes();
    [bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]]
}

/// Reads the 3-bit alpha index of texel `i` (0-15) from packed alpha indices.
///
/// Indices straddle byte boundaries, so the bytes are read as one 48-bit integer.
#[inline]
pub fn alpha_index_at(indices: &[u8; 6], i: usize) -> u8 {
    let packed = u64::from_le_bytes([
        indices[0], indices[1], indices[2], indices[3], indices[4], indices[5], 0, 0,
    ]);
    ((packed >> (i * 3)) & 0b111) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(128)]
    #[case(254)]
    #[case(255)]
    fn uniform_alpha_gives_index_one(#[case] alpha: u8) {
        let block = Decoded4x4Block::new(Color8888::new(10, 20, 30, alpha));
        let indices = alpha_indices(&block, alpha, alpha);
        for i in 0..16 {
            assert_eq!(alpha_index_at(&indices, i), 1);
        }
        // 0b001 repeated 16 times
        assert_eq!(indices, [0x49, 0x92, 0x24, 0x49, 0x92, 0x24]);
    }

    #[test]
    fn ramp_maps_onto_interpolated_levels() {
        let indices = alpha_indices(&alpha_ramp(), 0, 255);
        let expected: [u8; 16] = [1, 1, 7, 7, 6, 6, 5, 5, 4, 4, 3, 3, 2, 2, 0, 0];
        for (i, expected) in expected.iter().enumerate() {
            assert_eq!(alpha_index_at(&indices, i), *expected, "texel {i}");
        }
    }

    #[test]
    fn endpoints_get_endpoint_codes() {
        let mut block = Decoded4x4Block::new(Color8888::new(0, 0, 0, 40));
        block.set_pixel(2, 1, Color8888::new(0, 0, 0, 200));

        let indices = alpha_indices(&block, 40, 200);
        assert_eq!(alpha_index_at(&indices, 0), 1);
        assert_eq!(alpha_index_at(&indices, 6), 0);
    }

    #[test]
    fn indices_crossing_byte_boundaries() {
        // texel 2 occupies bits 6..9, straddling bytes 0 and 1
        let indices = [0b1100_0000, 0b0000_0001, 0, 0, 0, 0];
        assert_eq!(alpha_index_at(&indices, 2), 0b111);
        assert_eq!(alpha_index_at(&indices, 1), 0);
        assert_eq!(alpha_index_at(&indices, 3), 0);
    }
}
