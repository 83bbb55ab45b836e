//! # DXT1 Block
//!
//! The 8-byte DXT1 wire block and the two block encoders.
//!
//! ```text
//! offset 0: color0   u16 LE (5:6:5)
//! offset 2: color1   u16 LE (5:6:5)
//! offset 4: indices  u32 LE, 2 bits per texel, texel 0 in the low bits
//! ```
//!
//! Opaque blocks store the high endpoint in `color0`, so `color0 >= color1` and decoders
//! use 4-colour mode. Punch-through blocks store the low endpoint first, which selects
//! 3-colour + transparent mode.

use crate::endpoints::{select_endpoints, EndpointSelection};
use crate::indices::{color_indices, color_indices_3color, index_at};
use crate::util::decode_bc1_block;
use dxt_codec_common::color_565::Color565;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_codec_common::sink::BlockSink;
use dxt_codec_common::CodecError;

/// A single encoded DXT1 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bc1Block {
    /// First endpoint
    pub color0: Color565,
    /// Second endpoint
    pub color1: Color565,
    /// 16 packed 2-bit indices
    pub indices: u32,
}

impl Bc1Block {
    /// Size of an encoded block in bytes.
    pub const SIZE: usize = 8;

    /// Creates a block from its endpoints and packed indices.
    #[inline]
    pub const fn new(color0: Color565, color1: Color565, indices: u32) -> Self {
        Self {
            color0,
            color1,
            indices,
        }
    }

    /// Serializes the block into its 8-byte little-endian wire form.
    #[inline]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..2].copy_from_slice(&self.color0.raw_value().to_le_bytes());
        bytes[2..4].copy_from_slice(&self.color1.raw_value().to_le_bytes());
        bytes[4..8].copy_from_slice(&self.indices.to_le_bytes());
        bytes
    }

    /// Reads a block from its 8-byte wire form.
    #[inline]
    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        Self {
            color0: Color565::from_raw(u16::from_le_bytes([bytes[0], bytes[1]])),
            color1: Color565::from_raw(u16::from_le_bytes([bytes[2], bytes[3]])),
            indices: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    /// Appends the block to a sink.
    #[inline]
    pub fn write_to<S: BlockSink + ?Sized>(&self, sink: &mut S) -> Result<(), CodecError> {
        sink.write_u16_le(self.color0.raw_value())?;
        sink.write_u16_le(self.color1.raw_value())?;
        sink.write_u32_le(self.indices)
    }

    /// Index of texel `i` (0-15), in [0, 3].
    #[inline]
    pub const fn index(&self, i: usize) -> u8 {
        index_at(self.indices, i)
    }

    /// Whether a decoder interprets this block in 3-colour + transparent mode.
    #[inline]
    pub const fn is_three_color(&self) -> bool {
        !self.color0.greater_than(&self.color1)
    }

    /// Decodes the block.
    #[inline]
    pub fn decode(&self) -> Decoded4x4Block {
        decode_bc1_block(&self.to_bytes())
    }
}

/// Encodes an opaque DXT1 block. Alpha only influences which texels take part in
/// luminance endpoint selection.
///
/// # Example
///
/// ```
/// use dxt_codec_bc1::{encode_bc1_block, EndpointSelection};
/// use dxt_codec_common::color_8888::Color8888;
/// use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
///
/// let block = Decoded4x4Block::new(Color8888::new(248, 252, 248, 255));
/// let encoded = encode_bc1_block(&block, EndpointSelection::Luminance);
///
/// assert_eq!(encoded.color0.raw_value(), 0xFFFF);
/// assert_eq!(encoded.color1.raw_value(), 0xFFFF);
/// assert_eq!(encoded.indices, 0);
/// ```
pub fn encode_bc1_block(block: &Decoded4x4Block, selection: EndpointSelection) -> Bc1Block {
    let endpoints = select_endpoints(block, selection);
    let max = endpoints.max_565();
    let min = endpoints.min_565();
    Bc1Block::new(max, min, color_indices(block, max, min))
}

/// Encodes a DXT1 block with punch-through alpha: the endpoints are stored low first and
/// transparent texels get index 3.
pub fn encode_bc1_alpha_block(block: &Decoded4x4Block, selection: EndpointSelection) -> Bc1Block {
    let endpoints = select_endpoints(block, selection);
    let max = endpoints.max_565();
    let min = endpoints.min_565();
    Bc1Block::new(min, max, color_indices_3color(block, min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn wire_layout_is_little_endian() {
        let block = Bc1Block::new(
            Color565::from_raw(0xF800),
            Color565::from_raw(0x001F),
            0x1234_5678,
        );
        assert_eq!(
            block.to_bytes(),
            [0x00, 0xF8, 0x1F, 0x00, 0x78, 0x56, 0x34, 0x12]
        );
        assert_eq!(Bc1Block::from_bytes(&block.to_bytes()), block);

        let mut sink = Vec::new();
        block.write_to(&mut sink).unwrap();
        assert_eq!(sink, block.to_bytes());
    }

    #[rstest]
    #[case(EndpointSelection::Luminance)]
    #[case(EndpointSelection::BoundingBox)]
    fn solid_representable_block_round_trips(#[case] selection: EndpointSelection) {
        let block = Decoded4x4Block::new(Color8888::new(132, 130, 132, 255));
        let encoded = encode_bc1_block(&block, selection);

        assert_eq!(encoded.color0.raw_value(), 0x8410);
        assert_eq!(encoded.color1.raw_value(), 0x8410);
        assert_eq!(encoded.indices, 0);
        assert_eq!(encoded.decode(), block);
    }

    #[test]
    fn opaque_blocks_keep_four_color_order() {
        let encoded = encode_bc1_block(&grey_ramp(), EndpointSelection::Luminance);
        assert_eq!(encoded.color0.raw_value(), 0xFFFF);
        assert_eq!(encoded.color1.raw_value(), 0x0000);
        assert!(!encoded.is_three_color());

        let decoded = encoded.decode();
        assert_eq!(decoded.pixel(0, 0), Color8888::new(0, 0, 0, 255));
        assert_eq!(decoded.pixel(3, 3), Color8888::new(255, 255, 255, 255));
        assert_eq!(decoded.pixel(0, 2), Color8888::new(170, 170, 170, 255));
    }

    #[test]
    fn punch_through_block_decodes_transparent_texels() {
        let mut block = Decoded4x4Block::new(Color8888::new(200, 100, 50, 255));
        block.set_pixel(0, 0, Color8888::new(40, 20, 10, 255));
        block.set_pixel(1, 1, Color8888::new(0, 0, 0, 255));
        block.set_pixel(2, 2, Color8888::new(200, 100, 50, 0));

        let encoded = encode_bc1_alpha_block(&block, EndpointSelection::Luminance);
        assert!(encoded.is_three_color());
        assert_eq!(encoded.index(5), 3);
        assert_ne!(encoded.index(10), 3);

        let decoded = encoded.decode();
        assert_eq!(decoded.pixel(1, 1).a, 0);
        assert_eq!(decoded.pixel(0, 0).a, 255);
        assert_eq!(decoded.pixel(2, 2).a, 255);
    }

    #[test]
    fn encoded_indices_are_in_range() {
        let block = block_from([
            (0, 0, 0, 255),
            (255, 0, 0, 255),
            (0, 255, 0, 255),
            (0, 0, 255, 255),
            (12, 34, 56, 255),
            (78, 90, 12, 255),
            (34, 56, 78, 0),
            (90, 12, 34, 255),
            (255, 255, 0, 255),
            (0, 255, 255, 255),
            (255, 0, 255, 255),
            (128, 128, 128, 255),
            (64, 64, 64, 255),
            (192, 192, 192, 255),
            (1, 2, 3, 255),
            (250, 251, 252, 255),
        ]);
        let encoded = encode_bc1_block(&block, EndpointSelection::Luminance);
        for i in 0..16 {
            assert!(encoded.index(i) <= 3);
        }
        assert_eq!(encode_bc1_block(&block, EndpointSelection::Luminance), encoded);
    }
}
