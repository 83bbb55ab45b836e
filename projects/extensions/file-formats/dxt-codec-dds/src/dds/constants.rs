//! DDS format constants and definitions
#![allow(missing_docs)]

/// Magic header for DDS files
pub const DDS_MAGIC: u32 = u32::from_le_bytes(*b"DDS ");

/// Size of the legacy DDS header, magic included.
pub const DDS_HEADER_SIZE: usize = 0x80;

/// Value of the `dwSize` field; the header size without the magic.
pub const DDS_HEADER_STRUCT_SIZE: u32 = 124;

/// Value of the `dwSize` field of the pixel format structure.
pub const DDS_PIXELFORMAT_SIZE: u32 = 32;

/// FourCC of DXT1 data
pub const FOURCC_DXT1: u32 = u32::from_le_bytes(*b"DXT1");
/// FourCC of premultiplied DXT5 data, read as DXT5
pub const FOURCC_DXT4: u32 = u32::from_le_bytes(*b"DXT4");
/// FourCC of DXT5 data
pub const FOURCC_DXT5: u32 = u32::from_le_bytes(*b"DXT5");

// DDS header field offsets
pub(crate) const DDS_SIZE_OFFSET: usize = 0x04;
pub(crate) const DDS_FLAGS_OFFSET: usize = 0x08;
pub(crate) const DDS_HEIGHT_OFFSET: usize = 0x0C;
pub(crate) const DDS_WIDTH_OFFSET: usize = 0x10;
pub(crate) const DDS_PITCH_OR_LINEAR_SIZE_OFFSET: usize = 0x14;
pub(crate) const DDS_DEPTH_OFFSET: usize = 0x18;
pub(crate) const DDS_MIPMAP_COUNT_OFFSET: usize = 0x1C;
pub(crate) const DDS_RESERVED1_OFFSET: usize = 0x20;
pub(crate) const DDS_RESERVED1_SIZE: usize = 44;
pub(crate) const DDS_CAPS_OFFSET: usize = 0x6C;
pub(crate) const DDS_CAPS2_OFFSET: usize = 0x70;

// DDS pixel format offsets (within the 32-byte DDSPIXELFORMAT structure at offset 0x4C)
pub(crate) const DDS_PIXELFORMAT_OFFSET: usize = 0x4C;
pub(crate) const DDS_PIXELFORMAT_FLAGS_OFFSET: usize = 0x50;
pub(crate) const FOURCC_OFFSET: usize = 0x54;
pub(crate) const DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET: usize = 0x58;
pub(crate) const DDS_PIXELFORMAT_RBITMASK_OFFSET: usize = 0x5C;
pub(crate) const DDS_PIXELFORMAT_GBITMASK_OFFSET: usize = 0x60;
pub(crate) const DDS_PIXELFORMAT_BBITMASK_OFFSET: usize = 0x64;
pub(crate) const DDS_PIXELFORMAT_ABITMASK_OFFSET: usize = 0x68;

// DDS header flags
pub const DDSD_CAPS: u32 = 0x1;
pub const DDSD_HEIGHT: u32 = 0x2;
pub const DDSD_WIDTH: u32 = 0x4;
pub const DDSD_PITCH: u32 = 0x8;
pub const DDSD_PIXELFORMAT: u32 = 0x1000;
pub const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub const DDSD_LINEARSIZE: u32 = 0x80000;

/// Flags written for every header this crate produces.
pub const DDSD_DEFAULT_FLAGS: u32 =
    DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT | DDSD_MIPMAPCOUNT | DDSD_LINEARSIZE;

// DDS pixel format flags
pub const DDPF_ALPHAPIXELS: u32 = 0x1;
pub const DDPF_FOURCC: u32 = 0x4;
pub const DDPF_RGB: u32 = 0x40;

// DDS caps
pub const DDSCAPS_TEXTURE: u32 = 0x1000;

// Pixel format bit masks for bytes stored as R, G, B[, A] (0xAABBGGRR)
pub const RGBA8888_RED_MASK: u32 = 0x000000FF;
pub const RGBA8888_GREEN_MASK: u32 = 0x0000FF00;
pub const RGBA8888_BLUE_MASK: u32 = 0x00FF0000;
pub const RGBA8888_ALPHA_MASK: u32 = 0xFF000000;

/// Tag written at the start of the reserved area of YCoCg-DXT5 headers.
///
/// Not part of the DDS format, which requires reserved bytes to be zero; some texture
/// tools look for it to tell YCoCg-DXT5 data apart from ordinary DXT5.
pub const YCOCG_VENDOR_TAG: [u8; 11] = *b"YCOCG-DXT5\0";
