//! # DDS Header
//!
//! The 128-byte legacy DDS header: the `DDS ` magic followed by the 124-byte
//! `DDS_HEADER` structure, which embeds a 32-byte `DDS_PIXELFORMAT`.
//!
//! ```text
//! 0x00 magic           0x04 size (124)      0x08 flags          0x0C height
//! 0x10 width           0x14 pitch/linear    0x18 depth          0x1C mipmap count
//! 0x20 reserved (44 bytes)
//! 0x4C pixel format: size (32), flags, fourcc, bit count, R/G/B/A masks
//! 0x6C caps            0x70 caps2           0x74 reserved (12 bytes)
//! ```
//!
//! All fields are little-endian.
//!
//! ```
//! use dxt_codec_dds::{DdsFormat, DdsHeader};
//!
//! let header = DdsHeader::new(DdsFormat::Dxt1, 512, 512).unwrap();
//! let bytes = header.to_bytes();
//! assert_eq!(&bytes[0..4], b"DDS ");
//!
//! let parsed = DdsHeader::parse(&bytes).unwrap();
//! assert_eq!(parsed.pitch_or_linear_size, 131072);
//! assert_eq!(parsed.format().unwrap(), DdsFormat::Dxt1);
//! ```

use super::constants::*;
use super::likely_dds::likely_dds;
use crate::error::DdsError;
use endian_writer::{EndianReader, EndianWriter, LittleEndianReader, LittleEndianWriter};

/// Data formats a [`DdsHeader`] can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DdsFormat {
    /// DXT1, opaque
    Dxt1 = 0,
    /// DXT1 with 1-bit (punch-through) alpha
    Dxt1Alpha = 1,
    /// DXT5 (including YCoCg-DXT5)
    Dxt5 = 2,
    /// 24 bits per pixel, stored as R, G, B
    Rgb888 = 3,
    /// 32 bits per pixel, stored as R, G, B, A
    Rgba8888 = 4,
}

impl DdsFormat {
    /// Size of the texture data following the header, in bytes.
    ///
    /// Returns [`None`] if the size does not fit in a `usize`.
    #[inline]
    pub const fn data_size(&self, width: u32, height: u32) -> Option<usize> {
        let pixels = match (width as usize).checked_mul(height as usize) {
            Some(pixels) => pixels,
            None => return None,
        };
        match self {
            DdsFormat::Dxt1 | DdsFormat::Dxt1Alpha => Some(pixels / 2),
            DdsFormat::Dxt5 => Some(pixels),
            DdsFormat::Rgb888 => pixels.checked_mul(3),
            DdsFormat::Rgba8888 => pixels.checked_mul(4),
        }
    }

    /// Whether this is a block compressed format.
    #[inline]
    pub const fn is_compressed(&self) -> bool {
        matches!(self, DdsFormat::Dxt1 | DdsFormat::Dxt1Alpha | DdsFormat::Dxt5)
    }
}

/// The 32-byte `DDS_PIXELFORMAT` structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DdsPixelFormat {
    /// `DDPF_*` flags
    pub flags: u32,
    /// FourCC as a little-endian integer, or 0 for uncompressed data
    pub fourcc: u32,
    /// Bits per pixel for uncompressed data
    pub rgb_bit_count: u32,
    /// Red channel mask
    pub r_mask: u32,
    /// Green channel mask
    pub g_mask: u32,
    /// Blue channel mask
    pub b_mask: u32,
    /// Alpha channel mask
    pub a_mask: u32,
}

impl DdsPixelFormat {
    /// The pixel format block for a given data format.
    pub const fn for_format(format: DdsFormat) -> Self {
        match format {
            DdsFormat::Dxt1 => Self::fourcc(DDPF_FOURCC, FOURCC_DXT1),
            DdsFormat::Dxt1Alpha => Self::fourcc(DDPF_FOURCC | DDPF_ALPHAPIXELS, FOURCC_DXT1),
            DdsFormat::Dxt5 => Self::fourcc(DDPF_FOURCC, FOURCC_DXT5),
            DdsFormat::Rgb888 => Self {
                flags: DDPF_RGB,
                fourcc: 0,
                rgb_bit_count: 24,
                r_mask: RGBA8888_RED_MASK,
                g_mask: RGBA8888_GREEN_MASK,
                b_mask: RGBA8888_BLUE_MASK,
                a_mask: 0,
            },
            DdsFormat::Rgba8888 => Self {
                flags: DDPF_RGB | DDPF_ALPHAPIXELS,
                fourcc: 0,
                rgb_bit_count: 32,
                r_mask: RGBA8888_RED_MASK,
                g_mask: RGBA8888_GREEN_MASK,
                b_mask: RGBA8888_BLUE_MASK,
                a_mask: RGBA8888_ALPHA_MASK,
            },
        }
    }

    const fn fourcc(flags: u32, fourcc: u32) -> Self {
        Self {
            flags,
            fourcc,
            rgb_bit_count: 0,
            r_mask: 0,
            g_mask: 0,
            b_mask: 0,
            a_mask: 0,
        }
    }

    /// Determines the data format described by this pixel format.
    ///
    /// # Errors
    ///
    /// [`DdsError::UnsupportedFormat`] for anything other than DXT1, DXT4/5 or
    /// byte ordered RGB/RGBA.
    pub fn format(&self) -> Result<DdsFormat, DdsError> {
        let unsupported = DdsError::UnsupportedFormat {
            flags: self.flags,
            fourcc: self.fourcc,
            rgb_bit_count: self.rgb_bit_count,
        };

        if (self.flags & DDPF_FOURCC) != 0 {
            return match self.fourcc {
                FOURCC_DXT1 if (self.flags & DDPF_ALPHAPIXELS) != 0 => Ok(DdsFormat::Dxt1Alpha),
                FOURCC_DXT1 => Ok(DdsFormat::Dxt1),
                FOURCC_DXT4 | FOURCC_DXT5 => Ok(DdsFormat::Dxt5),
                _ => Err(unsupported),
            };
        }

        if (self.flags & DDPF_RGB) == 0 {
            return Err(unsupported);
        }

        let rgb_masks = self.r_mask == RGBA8888_RED_MASK
            && self.g_mask == RGBA8888_GREEN_MASK
            && self.b_mask == RGBA8888_BLUE_MASK;
        let has_alpha = (self.flags & DDPF_ALPHAPIXELS) != 0;

        match (self.rgb_bit_count, has_alpha) {
            (24, false) if rgb_masks => Ok(DdsFormat::Rgb888),
            (32, true) if rgb_masks && self.a_mask == RGBA8888_ALPHA_MASK => {
                Ok(DdsFormat::Rgba8888)
            }
            _ => Err(unsupported),
        }
    }
}

/// The legacy DDS header, without the magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DdsHeader {
    /// `dwSize`; always 124 for headers built by this crate
    pub size: u32,
    /// `DDSD_*` flags
    pub flags: u32,
    /// Height in pixels
    pub height: u32,
    /// Width in pixels
    pub width: u32,
    /// Total data size for compressed formats, bytes per scanline for uncompressed ones
    pub pitch_or_linear_size: u32,
    /// Depth of a volume texture; 0
    pub depth: u32,
    /// Number of mipmaps; 0
    pub mipmap_count: u32,
    /// 44 reserved bytes; zero unless a vendor tag is present
    pub reserved: [u8; DDS_RESERVED1_SIZE],
    /// The pixel format block
    pub pixel_format: DdsPixelFormat,
    /// `DDSCAPS_*` flags
    pub caps: u32,
    /// `DDSCAPS2_*` flags
    pub caps2: u32,
}

impl DdsHeader {
    /// Builds the header for a single surface texture without mipmaps.
    ///
    /// Compressed formats record the total data size (`width * height / 2` for DXT1,
    /// `width * height` for DXT5); uncompressed formats record the scanline pitch
    /// and additionally set `DDSD_PITCH`.
    ///
    /// The uncompressed pitch is in bytes, `width * bitsPerPixel / 8`, as DDS readers
    /// expect. It is not the bit count `width * bitsPerPixel` some legacy writers store.
    ///
    /// # Errors
    ///
    /// [`DdsError::TooLarge`] if the linear size or pitch does not fit in 32 bits.
    pub fn new(format: DdsFormat, width: u32, height: u32) -> Result<Self, DdsError> {
        let too_large = DdsError::TooLarge { width, height };
        let pixel_format = DdsPixelFormat::for_format(format);
        let (flags, pitch_or_linear_size) = if format.is_compressed() {
            let linear_size = format
                .data_size(width, height)
                .and_then(|size| u32::try_from(size).ok())
                .ok_or(too_large)?;
            (DDSD_DEFAULT_FLAGS, linear_size)
        } else {
            let pitch = width
                .checked_mul(pixel_format.rgb_bit_count / 8)
                .ok_or(too_large)?;
            (DDSD_DEFAULT_FLAGS | DDSD_PITCH, pitch)
        };

        Ok(Self {
            size: DDS_HEADER_STRUCT_SIZE,
            flags,
            height,
            width,
            pitch_or_linear_size,
            depth: 0,
            mipmap_count: 0,
            reserved: [0; DDS_RESERVED1_SIZE],
            pixel_format,
            caps: DDSCAPS_TEXTURE,
            caps2: 0,
        })
    }

    /// Builds a DXT5 header carrying the [`YCOCG_VENDOR_TAG`] in its reserved area.
    ///
    /// # Errors
    ///
    /// [`DdsError::TooLarge`] under the same conditions as [`DdsHeader::new`].
    pub fn ycocg_dxt5(width: u32, height: u32) -> Result<Self, DdsError> {
        let mut header = Self::new(DdsFormat::Dxt5, width, height)?;
        header.reserved[..YCOCG_VENDOR_TAG.len()].copy_from_slice(&YCOCG_VENDOR_TAG);
        Ok(header)
    }

    /// Whether the reserved area starts with the YCoCg-DXT5 vendor tag.
    #[inline]
    pub fn is_ycocg(&self) -> bool {
        self.reserved.starts_with(&YCOCG_VENDOR_TAG)
    }

    /// The data format described by the pixel format block.
    #[inline]
    pub fn format(&self) -> Result<DdsFormat, DdsError> {
        self.pixel_format.format()
    }

    /// Serializes the header, magic included.
    pub fn to_bytes(&self) -> [u8; DDS_HEADER_SIZE] {
        let mut bytes = [0u8; DDS_HEADER_SIZE];
        bytes[DDS_RESERVED1_OFFSET..DDS_RESERVED1_OFFSET + DDS_RESERVED1_SIZE]
            .copy_from_slice(&self.reserved);

        // SAFETY: every offset written below is at most 0x70, and each write is 4 bytes,
        // well within the 128 byte buffer.
        unsafe {
            let mut writer = LittleEndianWriter::new(bytes.as_mut_ptr());
            writer.write_u32_at(DDS_MAGIC, 0);
            writer.write_u32_at(self.size, DDS_SIZE_OFFSET as isize);
            writer.write_u32_at(self.flags, DDS_FLAGS_OFFSET as isize);
            writer.write_u32_at(self.height, DDS_HEIGHT_OFFSET as isize);
            writer.write_u32_at(self.width, DDS_WIDTH_OFFSET as isize);
            writer.write_u32_at(
                self.pitch_or_linear_size,
                DDS_PITCH_OR_LINEAR_SIZE_OFFSET as isize,
            );
            writer.write_u32_at(self.depth, DDS_DEPTH_OFFSET as isize);
            writer.write_u32_at(self.mipmap_count, DDS_MIPMAP_COUNT_OFFSET as isize);

            let pf = &self.pixel_format;
            writer.write_u32_at(DDS_PIXELFORMAT_SIZE, DDS_PIXELFORMAT_OFFSET as isize);
            writer.write_u32_at(pf.flags, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
            writer.write_u32_at(pf.fourcc, FOURCC_OFFSET as isize);
            writer.write_u32_at(pf.rgb_bit_count, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize);
            writer.write_u32_at(pf.r_mask, DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
            writer.write_u32_at(pf.g_mask, DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
            writer.write_u32_at(pf.b_mask, DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
            writer.write_u32_at(pf.a_mask, DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);

            writer.write_u32_at(self.caps, DDS_CAPS_OFFSET as isize);
            writer.write_u32_at(self.caps2, DDS_CAPS2_OFFSET as isize);
        }

        bytes
    }

    /// Reads a header from the start of `data`.
    ///
    /// The pixel format is not validated here; call [`DdsHeader::format`] for that.
    ///
    /// # Errors
    ///
    /// - [`DdsError::TooShort`] if `data` is shorter than [`DDS_HEADER_SIZE`].
    /// - [`DdsError::NotADds`] if the magic is missing.
    pub fn parse(data: &[u8]) -> Result<Self, DdsError> {
        if data.len() < DDS_HEADER_SIZE {
            return Err(DdsError::TooShort {
                needed: DDS_HEADER_SIZE,
                actual: data.len(),
            });
        }
        if !likely_dds(data) {
            return Err(DdsError::NotADds);
        }

        let mut reserved = [0u8; DDS_RESERVED1_SIZE];
        reserved.copy_from_slice(&data[DDS_RESERVED1_OFFSET..DDS_RESERVED1_OFFSET + DDS_RESERVED1_SIZE]);

        // SAFETY: We checked data.len() >= DDS_HEADER_SIZE (128), and the furthest read
        // is 4 bytes at DDS_CAPS2_OFFSET (0x70).
        unsafe {
            let mut reader = LittleEndianReader::new(data.as_ptr());
            Ok(Self {
                size: reader.read_u32_at(DDS_SIZE_OFFSET as isize),
                flags: reader.read_u32_at(DDS_FLAGS_OFFSET as isize),
                height: reader.read_u32_at(DDS_HEIGHT_OFFSET as isize),
                width: reader.read_u32_at(DDS_WIDTH_OFFSET as isize),
                pitch_or_linear_size: reader.read_u32_at(DDS_PITCH_OR_LINEAR_SIZE_OFFSET as isize),
                depth: reader.read_u32_at(DDS_DEPTH_OFFSET as isize),
                mipmap_count: reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize),
                reserved,
                pixel_format: DdsPixelFormat {
                    flags: reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize),
                    fourcc: reader.read_u32_at(FOURCC_OFFSET as isize),
                    rgb_bit_count: reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize),
                    r_mask: reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize),
                    g_mask: reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize),
                    b_mask: reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize),
                    a_mask: reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize),
                },
                caps: reader.read_u32_at(DDS_CAPS_OFFSET as isize),
                caps2: reader.read_u32_at(DDS_CAPS2_OFFSET as isize),
            })
        }
    }
}
