//! Output formats supported by the [`Encoder`](crate::Encoder).

use derive_enum_all_values::AllValues;
use dxt_codec_bc1::Bc1Block;
use dxt_codec_bc3::Bc3Block;

/// The compressed (or raw) data format written by an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u8)]
pub enum TextureFormat {
    /// Opaque DXT1. 8 bytes per block.
    Dxt1 = 0,
    /// DXT1 with punch-through alpha: texels whose RGB is pure black become transparent.
    /// Source alpha is not consulted. 8 bytes per block.
    Dxt1Alpha = 1,
    /// DXT5 with an 8-level interpolated alpha channel. 16 bytes per block.
    Dxt5 = 2,
    /// DXT5 holding YCoCg colour: luma in the alpha channel, scaled chroma in the colour
    /// channels. 16 bytes per block.
    YCoCgDxt5 = 3,
    /// Raw RGB or RGBA pixels, depending on whether the source has an alpha channel.
    Uncompressed = 4,
}

impl TextureFormat {
    /// Size of one encoded 4x4 block, or [`None`] for [`TextureFormat::Uncompressed`].
    #[inline]
    pub const fn block_size(&self) -> Option<usize> {
        match self {
            TextureFormat::Dxt1 | TextureFormat::Dxt1Alpha => Some(Bc1Block::SIZE),
            TextureFormat::Dxt5 | TextureFormat::YCoCgDxt5 => Some(Bc3Block::SIZE),
            TextureFormat::Uncompressed => None,
        }
    }

    /// Whether this is a block compressed format.
    #[inline]
    pub const fn is_compressed(&self) -> bool {
        self.block_size().is_some()
    }

    /// Number of bytes per pixel [`decode`](crate::decode) produces for this format:
    /// 3 for opaque formats and 4 for formats with alpha.
    /// YCoCg-DXT5 decodes to RGB, as its alpha channel carries luma.
    #[inline]
    pub const fn decoded_channels(&self) -> Option<usize> {
        match self {
            TextureFormat::Dxt1 | TextureFormat::YCoCgDxt5 => Some(3),
            TextureFormat::Dxt1Alpha | TextureFormat::Dxt5 => Some(4),
            TextureFormat::Uncompressed => None,
        }
    }
}

impl Default for TextureFormat {
    fn default() -> Self {
        Self::Dxt1
    }
}
