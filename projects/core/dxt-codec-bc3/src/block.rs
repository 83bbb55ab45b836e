//! # DXT5 Block
//!
//! The 16-byte DXT5 wire block and the DXT5 block encoder.
//!
//! ```text
//! offset  0: alpha0         u8  (max alpha)
//! offset  1: alpha1         u8  (min alpha)
//! offset  2: alpha indices  6 bytes, 3 bits per texel, texel 0 in the low bits
//! offset  8: colour block   8 bytes, laid out as a DXT1 block
//! ```
//!
//! The colour half is always decoded in 4-colour mode, regardless of endpoint order.

use crate::alpha::{alpha_index_at, alpha_indices};
use crate::util::decode_bc3_block;
use dxt_codec_bc1::endpoints::select_endpoints;
use dxt_codec_bc1::indices::color_indices;
use dxt_codec_bc1::{Bc1Block, EndpointSelection};
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_codec_common::sink::BlockSink;
use dxt_codec_common::CodecError;

/// A single encoded DXT5 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bc3Block {
    /// First alpha endpoint
    pub alpha0: u8,
    /// Second alpha endpoint
    pub alpha1: u8,
    /// 16 packed 3-bit alpha indices
    pub alpha_indices: [u8; 6],
    /// The colour half of the block
    pub color: Bc1Block,
}

impl Bc3Block {
    /// Size of an encoded block in bytes.
    pub const SIZE: usize = 16;

    /// Creates a block from its parts.
    #[inline]
    pub const fn new(alpha0: u8, alpha1: u8, alpha_indices: [u8; 6], color: Bc1Block) -> Self {
        Self {
            alpha0,
            alpha1,
            alpha_indices,
            color,
        }
    }

    /// Serializes the block into its 16-byte wire form.
    #[inline]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0] = self.alpha0;
        bytes[1] = self.alpha1;
        bytes[2..8].copy_from_slice(&self.alpha_indices);
        bytes[8..16].copy_from_slice(&self.color.to_bytes());
        bytes
    }

    /// Reads a block from its 16-byte wire form.
    #[inline]
    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        let mut alpha_indices = [0u8; 6];
        alpha_indices.copy_from_slice(&bytes[2..8]);
        let mut color = [0u8; Bc1Block::SIZE];
        color.copy_from_slice(&bytes[8..16]);

        Self {
            alpha0: bytes[0],
            alpha1: bytes[1],
            alpha_indices,
            color: Bc1Block::from_bytes(&color),
        }
    }

    /// Appends the block to a sink.
    #[inline]
    pub fn write_to<S: BlockSink + ?Sized>(&self, sink: &mut S) -> Result<(), CodecError> {
        sink.write_bytes(&[self.alpha0, self.alpha1])?;
        sink.write_bytes(&self.alpha_indices)?;
        self.color.write_to(sink)
    }

    /// Alpha index of texel `i` (0-15), in [0, 7].
    #[inline]
    pub fn alpha_index(&self, i: usize) -> u8 {
        alpha_index_at(&self.alpha_indices, i)
    }

    /// Decodes the block.
    #[inline]
    pub fn decode(&self) -> Decoded4x4Block {
        decode_bc3_block(&self.to_bytes())
    }
}

/// Encodes a DXT5 block: DXT1 colour with an independent 8-level alpha ramp.
///
/// # Example
///
/// ```
/// use dxt_codec_bc3::encode_bc3_block;
/// use dxt_codec_bc1::EndpointSelection;
/// use dxt_codec_common::color_8888::Color8888;
/// use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
///
/// let block = Decoded4x4Block::new(Color8888::new(132, 130, 132, 77));
/// let encoded = encode_bc3_block(&block, EndpointSelection::Luminance);
///
/// assert_eq!((encoded.alpha0, encoded.alpha1), (77, 77));
/// assert_eq!(encoded.decode(), block);
/// ```
pub fn encode_bc3_block(block: &Decoded4x4Block, selection: EndpointSelection) -> Bc3Block {
    let endpoints = select_endpoints(block, selection);
    let max = endpoints.max_565();
    let min = endpoints.min_565();

    Bc3Block::new(
        endpoints.max.a,
        endpoints.min.a,
        alpha_indices(block, endpoints.min.a, endpoints.max.a),
        Bc1Block::new(max, min, color_indices(block, max, min)),
    )
}
