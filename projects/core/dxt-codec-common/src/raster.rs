//! # Raster Adapters
//!
//! Maps a flat byte raster in an arbitrary pixel layout onto [`Color8888`] texels,
//! and slices 4x4 [`Decoded4x4Block`]s out of it.
//!
//! A [`ChannelOrder`] is a plain value: it is chosen once per image and passed along
//! with the raster, so two images with different layouts can be encoded concurrently
//! without sharing any state.
//!
//! ```
//! use dxt_codec_common::raster::{ChannelOrder, Raster};
//!
//! // A 4x4 ABGR image, every pixel opaque red.
//! let pixels = [255u8, 0, 0, 255].repeat(16);
//! let raster = Raster::new(&pixels, 4, 4, ChannelOrder::abgr()).unwrap();
//!
//! let block = raster.block_extractor().extract(0, 0);
//! assert_eq!(block.pixels[0].r, 255);
//! assert_eq!(block.pixels[0].a, 255);
//! ```

use crate::color_8888::Color8888;
use crate::decoded_4x4_block::Decoded4x4Block;
use crate::error::CodecError;

/// Byte offsets of each channel within one source pixel.
///
/// When `alpha` is [`None`] the raster has 3 bytes per pixel and every texel
/// reads back with an alpha of 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelOrder {
    red: u8,
    green: u8,
    blue: u8,
    alpha: Option<u8>,
}

impl ChannelOrder {
    /// `R, G, B, A`; the default layout.
    pub const fn rgba() -> Self {
        Self::from_offsets(0, 1, 2, Some(3))
    }

    /// `A, B, G, R`
    pub const fn abgr() -> Self {
        Self::from_offsets(3, 2, 1, Some(0))
    }

    /// `B, G, R, A`
    pub const fn bgr() -> Self {
        Self::from_offsets(2, 1, 0, Some(3))
    }

    /// `B, G, R` without an alpha channel.
    pub const fn bgr_no_alpha() -> Self {
        Self::from_offsets(2, 1, 0, None)
    }

    /// `R, G, B` without an alpha channel.
    pub const fn rgb_no_alpha() -> Self {
        Self::from_offsets(0, 1, 2, None)
    }

    const fn from_offsets(red: u8, green: u8, blue: u8, alpha: Option<u8>) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a channel order from the byte offset of each channel inside a pixel.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidChannelOrder`] if an offset does not fit in the pixel
    /// (3 bytes without alpha, 4 with) or two channels share an offset.
    pub fn custom(red: u8, green: u8, blue: u8, alpha: Option<u8>) -> Result<Self, CodecError> {
        let order = Self::from_offsets(red, green, blue, alpha);
        let bytes_per_pixel = order.bytes_per_pixel();

        let mut seen = [false; 4];
        let offsets = [Some(red), Some(green), Some(blue), alpha];
        for offset in offsets.into_iter().flatten() {
            let offset = offset as usize;
            if offset >= bytes_per_pixel || seen[offset] {
                return Err(CodecError::InvalidChannelOrder { bytes_per_pixel });
            }
            seen[offset] = true;
        }

        Ok(order)
    }

    /// Number of bytes one pixel occupies in the raster.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> usize {
        if self.alpha.is_some() {
            4
        } else {
            3
        }
    }

    /// Whether the raster carries its own alpha channel.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Whether pixels are already laid out as `R, G, B[, A]`, so they can be
    /// copied without reordering.
    #[inline]
    pub const fn is_canonical(&self) -> bool {
        self.red == 0
            && self.green == 1
            && self.blue == 2
            && match self.alpha {
                Some(alpha) => alpha == 3,
                None => true,
            }
    }

    /// Reads one texel from a pixel slice of at least [`Self::bytes_per_pixel`] bytes.
    #[inline(always)]
    pub fn texel(&self, pixel: &[u8]) -> Color8888 {
        let alpha = match self.alpha {
            Some(offset) => pixel[offset as usize],
            None => 255,
        };
        Color8888::new(
            pixel[self.red as usize],
            pixel[self.green as usize],
            pixel[self.blue as usize],
            alpha,
        )
    }
}

impl Default for ChannelOrder {
    fn default() -> Self {
        Self::rgba()
    }
}

/// A borrowed pixel raster together with its dimensions and layout.
#[derive(Debug, Clone, Copy)]
pub struct Raster<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    order: ChannelOrder,
}

impl<'a> Raster<'a> {
    /// Wraps a raster, checking that it holds at least `width * height` pixels.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidDimensions`] if either dimension is zero, or the raster size
    ///   in bytes overflows `usize`.
    /// - [`CodecError::InvalidLength`] if `data` is shorter than
    ///   `width * height * order.bytes_per_pixel()`.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        order: ChannelOrder,
    ) -> Result<Self, CodecError> {
        if width == 0 || height == 0 {
            return Err(CodecError::InvalidDimensions { width, height });
        }

        let Some(expected) = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(order.bytes_per_pixel()))
        else {
            return Err(CodecError::InvalidDimensions { width, height });
        };
        if data.len() < expected {
            return Err(CodecError::InvalidLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
            order,
        })
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Layout of each pixel
    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// The pixel bytes covered by the dimensions, without any trailing data.
    #[inline]
    pub fn pixel_bytes(&self) -> &'a [u8] {
        &self.data[..self.width * self.height * self.order.bytes_per_pixel()]
    }

    /// Whether both dimensions are multiples of 4.
    #[inline]
    pub fn is_block_aligned(&self) -> bool {
        self.width % 4 == 0 && self.height % 4 == 0
    }

    /// Number of 4x4 blocks per row and per column.
    #[inline]
    pub fn block_dimensions(&self) -> (usize, usize) {
        (self.width / 4, self.height / 4)
    }

    /// Reads the texel at `(x, y)`.
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> Color8888 {
        let bpp = self.order.bytes_per_pixel();
        let offset = (y * self.width + x) * bpp;
        self.order.texel(&self.data[offset..offset + bpp])
    }

    /// Creates the block extractor for this raster. The extraction path is picked
    /// here, once per image, based on the pixel size.
    #[inline]
    pub fn block_extractor(&self) -> BlockExtractor<'a> {
        let extract: ExtractFn = if self.order.has_alpha() {
            extract_block_with_alpha
        } else {
            extract_block_no_alpha
        };

        BlockExtractor {
            data: self.data,
            width: self.width,
            order: self.order,
            extract,
        }
    }
}

type ExtractFn = fn(&[u8], usize, usize, ChannelOrder) -> Decoded4x4Block;

/// Slices 4x4 blocks out of a [`Raster`].
///
/// Callers must only request blocks that lie fully inside the raster; the encoders
/// guarantee this by rejecting dimensions that are not multiples of 4.
#[derive(Clone, Copy)]
pub struct BlockExtractor<'a> {
    data: &'a [u8],
    width: usize,
    order: ChannelOrder,
    extract: ExtractFn,
}

impl BlockExtractor<'_> {
    /// Extracts the block at block coordinates `(block_x, block_y)`, i.e. the texels
    /// starting at pixel `(block_x * 4, block_y * 4)`.
    #[inline]
    pub fn extract(&self, block_x: usize, block_y: usize) -> Decoded4x4Block {
        let bpp = self.order.bytes_per_pixel();
        let offset = ((block_y * 4) * self.width + block_x * 4) * bpp;
        (self.extract)(self.data, offset, self.width * bpp, self.order)
    }
}

#[inline(always)]
fn extract_block_with_alpha(
    data: &[u8],
    mut offset: usize,
    row_stride: usize,
    order: ChannelOrder,
) -> Decoded4x4Block {
    let mut block = Decoded4x4Block::new(Color8888::default());
    let [r, g, b, a] = [
        order.red as usize,
        order.green as usize,
        order.blue as usize,
        order.alpha.unwrap_or(3) as usize,
    ];

    for row in block.pixels.chunks_exact_mut(4) {
        for texel in row.iter_mut() {
            *texel = Color8888::new(
                data[offset + r],
                data[offset + g],
                data[offset + b],
                data[offset + a],
            );
            offset += 4;
        }
        offset += row_stride - 16;
    }

    block
}

#[inline(always)]
fn extract_block_no_alpha(
    data: &[u8],
    mut offset: usize,
    row_stride: usize,
    order: ChannelOrder,
) -> Decoded4x4Block {
    let mut block = Decoded4x4Block::new(Color8888::default());
    let [r, g, b] = [
        order.red as usize,
        order.green as usize,
        order.blue as usize,
    ];

    for row in block.pixels.chunks_exact_mut(4) {
        for texel in row.iter_mut() {
            *texel = Color8888::new(data[offset + r], data[offset + g], data[offset + b], 255);
            offset += 3;
        }
        offset += row_stride - 12;
    }

    block
}
