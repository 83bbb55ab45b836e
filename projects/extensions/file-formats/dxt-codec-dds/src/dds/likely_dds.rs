use super::constants::*;

/// Determines if the given data likely represents a DDS texture.
/// This is done by checking the 'MAGIC' header, 'DDS ' at offset 0 and minimum size.
/// For full header validation, use [`DdsHeader::parse`].
///
/// [`DdsHeader::parse`]: crate::dds::header::DdsHeader::parse
#[inline(always)]
pub fn likely_dds(data: &[u8]) -> bool {
    data.len() >= DDS_HEADER_SIZE
        && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == DDS_MAGIC
}
