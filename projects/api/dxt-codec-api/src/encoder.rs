//! Image level encoding.
//!
//! An [`Encoder`] is built once through [`EncoderBuilder`] and is immutable afterwards.
//! Each call splits the raster into 4x4 blocks, encodes them in row-major order and
//! appends them to a [`BlockSink`], optionally after a 128-byte DDS header.

use crate::format::TextureFormat;
use alloc::vec::Vec;
use core::ops::Range;
use dxt_codec_bc1::{encode_bc1_alpha_block, encode_bc1_block, EndpointSelection};
use dxt_codec_bc3::{encode_bc3_block, encode_ycocg_block};
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_codec_common::raster::{BlockExtractor, ChannelOrder, Raster};
use dxt_codec_common::sink::BlockSink;
use dxt_codec_common::CodecError;
use dxt_codec_dds::{DdsFormat, DdsHeader, DDS_HEADER_SIZE};
use tracing::{debug, trace};

/// Immutable configuration of an [`Encoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncoderSettings {
    /// The output format.
    pub format: TextureFormat,
    /// Layout of the pixels in the source raster.
    pub channel_order: ChannelOrder,
    /// How colour endpoints are picked for DXT1 and DXT5.
    /// YCoCg-DXT5 always uses its own bounding box selection.
    pub endpoint_selection: EndpointSelection,
    /// Whether to prefix the output with a DDS header.
    pub write_header: bool,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            format: TextureFormat::default(),
            channel_order: ChannelOrder::default(),
            endpoint_selection: EndpointSelection::default(),
            write_header: true,
        }
    }
}

/// Builder for an [`Encoder`].
///
/// Settings that are not set fall back to [`EncoderSettings::default`]: DXT1, RGBA
/// input, luminance endpoint selection, with a DDS header.
///
/// # Examples
///
/// ```
/// use dxt_codec_api::{ChannelOrder, EncoderBuilder, TextureFormat};
///
/// let encoder = EncoderBuilder::new()
///     .format(TextureFormat::YCoCgDxt5)
///     .channel_order(ChannelOrder::bgr())
///     .write_header(false)
///     .build();
///
/// assert_eq!(encoder.encoded_size(16, 16), 256);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EncoderBuilder {
    format: Option<TextureFormat>,
    channel_order: Option<ChannelOrder>,
    endpoint_selection: Option<EndpointSelection>,
    write_header: Option<bool>,
}

impl EncoderBuilder {
    /// Create a new encoder builder.
    pub fn new() -> Self {
        Self {
            format: None,
            channel_order: None,
            endpoint_selection: None,
            write_header: None,
        }
    }

    /// Set the output format.
    pub fn format(mut self, format: TextureFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the layout of the pixels that will be passed to the encoder.
    pub fn channel_order(mut self, order: ChannelOrder) -> Self {
        self.channel_order = Some(order);
        self
    }

    /// Set the colour endpoint selection used by the DXT1 and DXT5 encoders.
    ///
    /// [`EndpointSelection::Luminance`] reproduces the reference encoder's output.
    pub fn endpoint_selection(mut self, selection: EndpointSelection) -> Self {
        self.endpoint_selection = Some(selection);
        self
    }

    /// Set whether the output starts with a 128-byte DDS header.
    pub fn write_header(mut self, write_header: bool) -> Self {
        self.write_header = Some(write_header);
        self
    }

    /// The settings the encoder will be built with.
    pub fn settings(&self) -> EncoderSettings {
        let defaults = EncoderSettings::default();
        EncoderSettings {
            format: self.format.unwrap_or(defaults.format),
            channel_order: self.channel_order.unwrap_or(defaults.channel_order),
            endpoint_selection: self
                .endpoint_selection
                .unwrap_or(defaults.endpoint_selection),
            write_header: self.write_header.unwrap_or(defaults.write_header),
        }
    }

    /// Build the encoder.
    pub fn build(&self) -> Encoder {
        Encoder::new(self.settings())
    }
}

impl Default for EncoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A stateless texture encoder bound to one [`EncoderSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Encoder {
    settings: EncoderSettings,
}

impl Encoder {
    /// Creates an encoder from its settings.
    #[inline]
    pub const fn new(settings: EncoderSettings) -> Self {
        Self { settings }
    }

    /// The settings this encoder was built with.
    #[inline]
    pub const fn settings(&self) -> &EncoderSettings {
        &self.settings
    }

    /// Size of the encoded texture data, excluding any header.
    ///
    /// DXT1 takes `width * height / 2` bytes, DXT5 and YCoCg-DXT5 `width * height`,
    /// and uncompressed output 3 or 4 bytes per pixel depending on whether the source
    /// has an alpha channel.
    pub fn payload_size(&self, width: usize, height: usize) -> usize {
        match self.settings.format.block_size() {
            Some(block_size) => (width / 4) * (height / 4) * block_size,
            None => width * height * self.uncompressed_bytes_per_pixel(),
        }
    }

    /// Total number of bytes [`Encoder::encode`] writes for an image of this size.
    pub fn encoded_size(&self, width: usize, height: usize) -> usize {
        let header = if self.settings.write_header {
            DDS_HEADER_SIZE
        } else {
            0
        };
        header + self.payload_size(width, height)
    }

    /// Builds the DDS header describing an image of this size, whether or not this
    /// encoder writes it.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidDimensions`] if a dimension does not fit the header's
    /// 32-bit fields.
    pub fn header(&self, width: usize, height: usize) -> Result<DdsHeader, CodecError> {
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(invalid_dimensions(width, height));
        };

        match self.settings.format {
            TextureFormat::Dxt1 => DdsHeader::new(DdsFormat::Dxt1, w, h),
            TextureFormat::Dxt1Alpha => DdsHeader::new(DdsFormat::Dxt1Alpha, w, h),
            TextureFormat::Dxt5 => DdsHeader::new(DdsFormat::Dxt5, w, h),
            TextureFormat::YCoCgDxt5 => DdsHeader::ycocg_dxt5(w, h),
            TextureFormat::Uncompressed => {
                if self.settings.channel_order.has_alpha() {
                    DdsHeader::new(DdsFormat::Rgba8888, w, h)
                } else {
                    DdsHeader::new(DdsFormat::Rgb888, w, h)
                }
            }
        }
        .map_err(|_| invalid_dimensions(width, height))
    }

    /// Encodes a raster and appends the result to `sink`.
    ///
    /// # Parameters
    /// - `data`: the source pixels, laid out as described by the configured channel order
    /// - `width`, `height`: dimensions in pixels
    /// - `sink`: where the (optional) header and the encoded data are written
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidDimensions`] if a dimension is zero, or not a multiple of 4
    ///   for a compressed format.
    /// - [`CodecError::InvalidLength`] if `data` holds fewer than `width * height` pixels.
    /// - Any error reported by the sink.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_codec_api::{EncoderBuilder, TextureFormat};
    ///
    /// let pixels = [0u8; 4 * 4 * 4];
    /// let encoder = EncoderBuilder::new().write_header(false).build();
    ///
    /// let mut output = Vec::new();
    /// encoder.encode(&pixels, 4, 4, &mut output).unwrap();
    /// assert_eq!(output.len(), 8);
    /// ```
    pub fn encode<S: BlockSink + ?Sized>(
        &self,
        data: &[u8],
        width: usize,
        height: usize,
        sink: &mut S,
    ) -> Result<(), CodecError> {
        let raster = self.raster(data, width, height)?;
        if self.settings.write_header {
            self.write_header(width, height, sink)?;
        }

        if self.settings.format.is_compressed() {
            let (_, blocks_y) = raster.block_dimensions();
            self.encode_block_rows(&raster, 0..blocks_y, sink)?;
        } else {
            self.write_uncompressed(&raster, sink)?;
        }

        debug!(
            width,
            height,
            format = ?self.settings.format,
            bytes = self.encoded_size(width, height),
            "encoded texture"
        );
        Ok(())
    }

    /// Encodes a raster into a newly allocated buffer of exactly
    /// [`Encoder::encoded_size`] bytes.
    ///
    /// # Errors
    ///
    /// See [`Encoder::encode`].
    pub fn encode_to_vec(
        &self,
        data: &[u8],
        width: usize,
        height: usize,
    ) -> Result<Vec<u8>, CodecError> {
        let mut output = Vec::with_capacity(self.encoded_size(width, height));
        self.encode(data, width, height, &mut output)?;
        Ok(output)
    }

    /// Encodes a raster like [`Encoder::encode_to_vec`], spreading block rows over the
    /// rayon thread pool. The output is byte-identical to the sequential encoder.
    ///
    /// # Errors
    ///
    /// See [`Encoder::encode`].
    #[cfg(feature = "rayon")]
    pub fn encode_parallel_to_vec(
        &self,
        data: &[u8],
        width: usize,
        height: usize,
    ) -> Result<Vec<u8>, CodecError> {
        use dxt_codec_common::sink::SliceSink;
        use rayon::prelude::*;

        let Some(block_size) = self.settings.format.block_size() else {
            return self.encode_to_vec(data, width, height);
        };

        let raster = self.raster(data, width, height)?;
        let mut output = alloc::vec![0u8; self.encoded_size(width, height)];

        let payload_start = if self.settings.write_header {
            let header = self.header(width, height)?.to_bytes();
            output[..DDS_HEADER_SIZE].copy_from_slice(&header);
            DDS_HEADER_SIZE
        } else {
            0
        };

        let (blocks_x, _) = raster.block_dimensions();
        output[payload_start..]
            .par_chunks_mut(blocks_x * block_size)
            .enumerate()
            .try_for_each(|(block_y, row)| {
                let mut sink = SliceSink::new(row);
                self.encode_block_rows(&raster, block_y..block_y + 1, &mut sink)
            })?;

        debug!(
            width,
            height,
            format = ?self.settings.format,
            bytes = output.len(),
            "encoded texture in parallel"
        );
        Ok(output)
    }

    /// Validates the dimensions and wraps the source pixels.
    fn raster<'a>(
        &self,
        data: &'a [u8],
        width: usize,
        height: usize,
    ) -> Result<Raster<'a>, CodecError> {
        let raster = Raster::new(data, width, height, self.settings.channel_order)?;
        if self.settings.format.is_compressed() && !raster.is_block_aligned() {
            return Err(invalid_dimensions(width, height));
        }
        Ok(raster)
    }

    fn write_header<S: BlockSink + ?Sized>(
        &self,
        width: usize,
        height: usize,
        sink: &mut S,
    ) -> Result<(), CodecError> {
        let header = self.header(width, height)?;
        trace!(
            width,
            height,
            flags = header.flags,
            fourcc = header.pixel_format.fourcc,
            ycocg = header.is_ycocg(),
            "writing DDS header"
        );
        sink.write_bytes(&header.to_bytes())
    }

    /// Encodes every block in `rows` (block row indices), in row-major order.
    fn encode_block_rows<S: BlockSink + ?Sized>(
        &self,
        raster: &Raster<'_>,
        rows: Range<usize>,
        sink: &mut S,
    ) -> Result<(), CodecError> {
        let extractor = raster.block_extractor();
        let (blocks_x, _) = raster.block_dimensions();
        let selection = self.settings.endpoint_selection;

        match self.settings.format {
            TextureFormat::Dxt1 => encode_blocks(&extractor, blocks_x, rows, sink, |block, sink| {
                encode_bc1_block(block, selection).write_to(sink)
            }),
            TextureFormat::Dxt1Alpha => {
                encode_blocks(&extractor, blocks_x, rows, sink, |block, sink| {
                    encode_bc1_alpha_block(block, selection).write_to(sink)
                })
            }
            TextureFormat::Dxt5 => encode_blocks(&extractor, blocks_x, rows, sink, |block, sink| {
                encode_bc3_block(block, selection).write_to(sink)
            }),
            TextureFormat::YCoCgDxt5 => {
                encode_blocks(&extractor, blocks_x, rows, sink, |block, sink| {
                    encode_ycocg_block(block).write_to(sink)
                })
            }
            TextureFormat::Uncompressed => Err(CodecError::UnsupportedFormat(
                "uncompressed output has no blocks",
            )),
        }
    }

    /// Writes the pixels as RGBA, or RGB when the source has no alpha channel.
    fn write_uncompressed<S: BlockSink + ?Sized>(
        &self,
        raster: &Raster<'_>,
        sink: &mut S,
    ) -> Result<(), CodecError> {
        let order = raster.order();
        if order.is_canonical() {
            return sink.write_bytes(raster.pixel_bytes());
        }

        let bytes_per_pixel = self.uncompressed_bytes_per_pixel();
        for pixel in raster.pixel_bytes().chunks_exact(order.bytes_per_pixel()) {
            let texel = order.texel(pixel);
            sink.write_bytes(&[texel.r, texel.g, texel.b, texel.a][..bytes_per_pixel])?;
        }
        Ok(())
    }

    #[inline]
    fn uncompressed_bytes_per_pixel(&self) -> usize {
        if self.settings.channel_order.has_alpha() {
            4
        } else {
            3
        }
    }
}

#[inline(always)]
fn encode_blocks<S, F>(
    extractor: &BlockExtractor<'_>,
    blocks_x: usize,
    rows: Range<usize>,
    sink: &mut S,
    mut encode_block: F,
) -> Result<(), CodecError>
where
    S: BlockSink + ?Sized,
    F: FnMut(&Decoded4x4Block, &mut S) -> Result<(), CodecError>,
{
    for block_y in rows {
        for block_x in 0..blocks_x {
            encode_block(&extractor.extract(block_x, block_y), sink)?;
        }
    }
    Ok(())
}

#[inline]
fn invalid_dimensions(width: usize, height: usize) -> CodecError {
    CodecError::InvalidDimensions { width, height }
}
