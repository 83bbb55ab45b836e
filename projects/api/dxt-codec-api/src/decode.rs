//! Image level decoding.
//!
//! [`decode`] reconstructs a raster from headerless DXT1/DXT5/YCoCg-DXT5 data;
//! [`decode_dds`] does the same for a DDS framed buffer, taking the dimensions and
//! format from its header.

use crate::error::DdsDecodeError;
use crate::format::TextureFormat;
use alloc::vec::Vec;
use dxt_codec_bc1::util::decode_bc1_block_from_slice;
use dxt_codec_bc3::util::decode_bc3_block_from_slice;
use dxt_codec_bc3::ycocg::ycocg_to_rgb;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_codec_common::CodecError;
use dxt_codec_dds::{DdsFormat, DdsHeader, DDS_HEADER_SIZE};
use tracing::debug;

/// A raster produced by [`decode_dds`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedImage {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Bytes per pixel: 3 for RGB, 4 for RGBA
    pub channels: usize,
    /// The pixels, row-major, in R, G, B(, A) order
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Whether the pixels carry an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }
}

/// Decodes headerless block compressed data into an RGB or RGBA raster.
///
/// DXT1 and YCoCg-DXT5 decode to RGB (3 bytes per pixel); DXT1 with punch-through
/// alpha and DXT5 decode to RGBA (4 bytes per pixel).
///
/// # Errors
///
/// - [`CodecError::UnsupportedFormat`] for [`TextureFormat::Uncompressed`].
/// - [`CodecError::InvalidDimensions`] if a dimension is zero or not a multiple of 4.
/// - [`CodecError::InvalidLength`] if `data` is not exactly the size of an encoded image
///   with these dimensions.
///
/// # Examples
///
/// ```
/// use dxt_codec_api::{decode, TextureFormat};
///
/// // color0 = color1 = 0x8410, all indices 0
/// let block = [0x10, 0x84, 0x10, 0x84, 0, 0, 0, 0];
/// let pixels = decode(&block, 4, 4, TextureFormat::Dxt1).unwrap();
///
/// assert_eq!(pixels.len(), 4 * 4 * 3);
/// assert_eq!(&pixels[0..3], &[132, 130, 132]);
/// ```
pub fn decode(
    data: &[u8],
    width: usize,
    height: usize,
    format: TextureFormat,
) -> Result<Vec<u8>, CodecError> {
    let (Some(block_size), Some(channels)) = (format.block_size(), format.decoded_channels())
    else {
        return Err(CodecError::UnsupportedFormat(
            "only DXT1 and DXT5 data can be decoded",
        ));
    };

    if width == 0 || height == 0 || width % 4 != 0 || height % 4 != 0 {
        return Err(CodecError::InvalidDimensions { width, height });
    }

    let blocks_x = width / 4;
    let expected = blocks_x * (height / 4) * block_size;
    if data.len() != expected {
        return Err(CodecError::InvalidLength {
            expected,
            actual: data.len(),
        });
    }

    let decode_block: fn(&[u8]) -> Option<Decoded4x4Block> = match format {
        TextureFormat::Dxt1 | TextureFormat::Dxt1Alpha => decode_bc1_block_from_slice,
        _ => decode_bc3_block_from_slice,
    };
    let ycocg = format == TextureFormat::YCoCgDxt5;

    let row_pitch = width * channels;
    let mut output = alloc::vec![0u8; row_pitch * height];
    for (index, src) in data.chunks_exact(block_size).enumerate() {
        let block = decode_block(src).ok_or(CodecError::InvalidLength {
            expected: block_size,
            actual: src.len(),
        })?;

        let (block_x, block_y) = (index % blocks_x, index / blocks_x);
        for y in 0..4 {
            let row_start = (block_y * 4 + y) * row_pitch + block_x * 4 * channels;
            let row = &mut output[row_start..row_start + 4 * channels];
            for (x, pixel) in row.chunks_exact_mut(channels).enumerate() {
                let mut texel = block.pixel(x, y);
                if ycocg {
                    texel = ycocg_to_rgb(texel);
                }
                pixel.copy_from_slice(&[texel.r, texel.g, texel.b, texel.a][..channels]);
            }
        }
    }

    debug!(width, height, format = ?format, bytes = output.len(), "decoded texture");
    Ok(output)
}

/// Decodes a DDS framed texture.
///
/// DXT1 decodes to RGB unless the pixel format advertises alpha; DXT5 decodes to RGBA,
/// or to RGB when the header carries the YCoCg-DXT5 vendor tag. Uncompressed RGB and
/// RGBA data is returned as is.
///
/// # Errors
///
/// - [`DdsDecodeError::Dds`] if the header is missing, truncated, or describes a pixel
///   format other than DXT1, DXT5, RGB or RGBA.
/// - [`DdsDecodeError::Codec`] if the data after the header does not have the exact size
///   the header implies, or the dimensions cannot be decoded.
pub fn decode_dds(data: &[u8]) -> Result<DecodedImage, DdsDecodeError> {
    let header = DdsHeader::parse(data)?;
    let dds_format = header.format()?;
    let payload = &data[DDS_HEADER_SIZE..];
    let width = header.width as usize;
    let height = header.height as usize;

    let format = match dds_format {
        DdsFormat::Dxt1 => TextureFormat::Dxt1,
        DdsFormat::Dxt1Alpha => TextureFormat::Dxt1Alpha,
        DdsFormat::Dxt5 if header.is_ycocg() => TextureFormat::YCoCgDxt5,
        DdsFormat::Dxt5 => TextureFormat::Dxt5,
        DdsFormat::Rgb888 | DdsFormat::Rgba8888 => {
            let Some(expected) = dds_format.data_size(header.width, header.height) else {
                return Err(CodecError::InvalidDimensions { width, height }.into());
            };
            if payload.len() != expected {
                return Err(CodecError::InvalidLength {
                    expected,
                    actual: payload.len(),
                }
                .into());
            }

            return Ok(DecodedImage {
                width,
                height,
                channels: if dds_format == DdsFormat::Rgba8888 { 4 } else { 3 },
                data: payload.to_vec(),
            });
        }
    };

    let data = decode(payload, width, height, format)?;
    Ok(DecodedImage {
        width,
        height,
        channels: data.len() / (width * height),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn encode(format: TextureFormat, pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
        EncoderBuilder::new()
            .format(format)
            .build()
            .encode_to_vec(pixels, width, height)
            .unwrap()
    }

    #[rstest]
    #[case(6, 8)]
    #[case(8, 6)]
    #[case(0, 4)]
    #[case(2, 8)]
    fn rejects_dimensions_that_do_not_tile(#[case] width: usize, #[case] height: usize) {
        assert!(matches!(
            decode(&[0u8; 64], width, height, TextureFormat::Dxt1),
            Err(CodecError::InvalidDimensions { .. })
        ));
    }

    #[rstest]
    #[case(TextureFormat::Dxt1, 31)]
    #[case(TextureFormat::Dxt1, 33)]
    #[case(TextureFormat::Dxt5, 63)]
    #[case(TextureFormat::Dxt5, 65)]
    fn rejects_mismatched_lengths(#[case] format: TextureFormat, #[case] length: usize) {
        let data = vec![0u8; length];
        assert!(matches!(
            decode(&data, 8, 8, format),
            Err(CodecError::InvalidLength { actual, .. }) if actual == length
        ));
    }

    #[test]
    fn rejects_uncompressed() {
        assert!(matches!(
            decode(&[0u8; 64], 4, 4, TextureFormat::Uncompressed),
            Err(CodecError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn punch_through_decodes_transparent_texels() {
        let mut pixels = vec![200u8; 4 * 4 * 4];
        pixels[4 * 5..4 * 5 + 3].fill(0);
        pixels[4 * 6 + 3] = 0;
        let dds = encode(TextureFormat::Dxt1Alpha, &pixels, 4, 4);

        let image = decode_dds(&dds).unwrap();
        assert!(image.has_alpha());
        assert_eq!(image.data[4 * 5 + 3], 0);
        assert_eq!(image.data[4 * 6 + 3], 255);
        assert_eq!(image.data[3], 255);
    }

    #[test]
    fn ycocg_decodes_to_rgb() {
        let pixels: Vec<u8> = [100u8, 100, 100, 255].repeat(16);
        let dds = encode(TextureFormat::YCoCgDxt5, &pixels, 4, 4);

        let image = decode_dds(&dds).unwrap();
        assert_eq!(image.channels, 3);
        assert_eq!(image.data, [100u8, 100, 100].repeat(16));
    }

    #[test]
    fn dxt5_keeps_alpha() {
        let pixels: Vec<u8> = [132u8, 130, 132, 77].repeat(64);
        let dds = encode(TextureFormat::Dxt5, &pixels, 8, 8);

        let image = decode_dds(&dds).unwrap();
        assert_eq!((image.width, image.height, image.channels), (8, 8, 4));
        assert_eq!(image.data, pixels);
    }

    #[test]
    fn uncompressed_is_returned_as_is() {
        let pixels = gradient_rgba(4, 8);
        let dds = encode(TextureFormat::Uncompressed, &pixels, 4, 8);

        let image = decode_dds(&dds).unwrap();
        assert_eq!((image.width, image.height, image.channels), (4, 8, 4));
        assert_eq!(image.data, pixels);
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let pixels = gradient_rgba(8, 8);
        let dds = encode(TextureFormat::Dxt1, &pixels, 8, 8);
        assert!(matches!(
            decode_dds(&dds[..dds.len() - 1]),
            Err(DdsDecodeError::Codec(CodecError::InvalidLength { .. }))
        ));
    }

    #[test]
    fn missing_header_is_rejected() {
        assert!(matches!(
            decode_dds(&[0u8; 256]),
            Err(DdsDecodeError::Dds(dxt_codec_dds::DdsError::NotADds))
        ));
        assert!(matches!(
            decode_dds(b"DDS "),
            Err(DdsDecodeError::Dds(dxt_codec_dds::DdsError::TooShort { .. }))
        ));
    }
}
