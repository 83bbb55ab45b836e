//! End-to-end behaviour of the encoder and decoder.

use dxt_codec_api::{
    decode, decode_dds, ChannelOrder, DdsHeader, EncoderBuilder, EndpointSelection,
    TextureFormat, DDS_HEADER_SIZE,
};
use rstest::rstest;

/// A 16x16 RGBA image with varied colour and alpha.
fn test_image() -> Vec<u8> {
    let mut pixels = Vec::with_capacity(16 * 16 * 4);
    for y in 0..16u32 {
        for x in 0..16u32 {
            pixels.extend_from_slice(&[
                (x * 16) as u8,
                (y * 16) as u8,
                ((x * y) % 256) as u8,
                ((x + y) * 8) as u8,
            ]);
        }
    }
    pixels
}

fn rgba_to_abgr(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks_exact(4)
        .flat_map(|p| [p[3], p[2], p[1], p[0]])
        .collect()
}

fn solid(pixel: [u8; 4], width: usize, height: usize) -> Vec<u8> {
    pixel.repeat(width * height)
}

#[rstest]
#[case(TextureFormat::Dxt1)]
#[case(TextureFormat::Dxt1Alpha)]
#[case(TextureFormat::Dxt5)]
#[case(TextureFormat::YCoCgDxt5)]
#[case(TextureFormat::Uncompressed)]
fn encoding_is_deterministic(#[case] format: TextureFormat) {
    let pixels = test_image();
    let encoder = EncoderBuilder::new().format(format).build();
    let first = encoder.encode_to_vec(&pixels, 16, 16).unwrap();
    let second = encoder.encode_to_vec(&pixels, 16, 16).unwrap();
    assert_eq!(first, second);
}

#[rstest]
#[case(TextureFormat::Dxt1, 4, 4, 8)]
#[case(TextureFormat::Dxt1, 16, 8, 64)]
#[case(TextureFormat::Dxt1Alpha, 16, 16, 128)]
#[case(TextureFormat::Dxt5, 4, 4, 16)]
#[case(TextureFormat::Dxt5, 16, 8, 128)]
#[case(TextureFormat::YCoCgDxt5, 16, 16, 256)]
fn payload_and_header_sizes(
    #[case] format: TextureFormat,
    #[case] width: usize,
    #[case] height: usize,
    #[case] payload: usize,
) {
    let pixels = solid([1, 2, 3, 4], width, height);
    let encoder = EncoderBuilder::new().format(format).build();
    let output = encoder.encode_to_vec(&pixels, width, height).unwrap();

    assert_eq!(output.len(), DDS_HEADER_SIZE + payload);
    assert_eq!(&output[0..4], b"DDS ");
    assert_eq!(&output[4..8], &124u32.to_le_bytes());

    let headerless = EncoderBuilder::new()
        .format(format)
        .write_header(false)
        .build()
        .encode_to_vec(&pixels, width, height)
        .unwrap();
    assert_eq!(headerless, output[DDS_HEADER_SIZE..]);
}

#[rstest]
#[case(0)]
#[case(77)]
#[case(255)]
fn uniform_alpha_gets_index_one(#[case] alpha: u8) {
    let mut pixels = test_image();
    for pixel in pixels.chunks_exact_mut(4) {
        pixel[3] = alpha;
    }

    let output = EncoderBuilder::new()
        .format(TextureFormat::Dxt5)
        .write_header(false)
        .build()
        .encode_to_vec(&pixels, 16, 16)
        .unwrap();

    for block in output.chunks_exact(16) {
        assert_eq!(block[0], alpha);
        assert_eq!(block[1], alpha);
        // 0b001 in each of the 16 3-bit fields
        assert_eq!(&block[2..8], &[0x49, 0x92, 0x24, 0x49, 0x92, 0x24]);
    }
}

#[rstest]
#[case(EndpointSelection::Luminance)]
#[case(EndpointSelection::BoundingBox)]
fn solid_block_encodes_to_single_endpoint(#[case] selection: EndpointSelection) {
    let encoder = EncoderBuilder::new()
        .endpoint_selection(selection)
        .write_header(false)
        .build();

    // 248, 252, 248 is 0xFFFF in 5:6:5
    let output = encoder
        .encode_to_vec(&solid([248, 252, 248, 255], 4, 4), 4, 4)
        .unwrap();
    assert_eq!(output, [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0]);

    // 132, 130, 132 survives 5:6:5 quantisation unchanged
    let pixels = solid([132, 130, 132, 255], 4, 4);
    let output = encoder.encode_to_vec(&pixels, 4, 4).unwrap();
    assert_eq!(output, [0x10, 0x84, 0x10, 0x84, 0, 0, 0, 0]);
    assert_eq!(
        decode(&output, 4, 4, TextureFormat::Dxt1).unwrap(),
        [132u8, 130, 132].repeat(16)
    );
}

#[test]
fn indices_stay_in_range() {
    let pixels = test_image();

    let dxt1 = EncoderBuilder::new()
        .write_header(false)
        .build()
        .encode_to_vec(&pixels, 16, 16)
        .unwrap();
    for block in dxt1.chunks_exact(8) {
        let indices = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);
        for i in 0..16 {
            assert!((indices >> (i * 2)) & 0b11 <= 3);
        }
    }

    let dxt5 = EncoderBuilder::new()
        .format(TextureFormat::Dxt5)
        .write_header(false)
        .build()
        .encode_to_vec(&pixels, 16, 16)
        .unwrap();
    for block in dxt5.chunks_exact(16) {
        let mut packed = [0u8; 8];
        packed[..6].copy_from_slice(&block[2..8]);
        let packed = u64::from_le_bytes(packed);
        for i in 0..16 {
            assert!((packed >> (i * 3)) & 0b111 <= 7);
        }
        assert!(block[0] >= block[1]);
    }
}

#[test]
fn dxt1_header_round_trip() {
    let header = EncoderBuilder::new().build().header(512, 512).unwrap();
    let bytes = header.to_bytes();

    assert_eq!(&bytes[0..4], b"DDS ");
    let parsed = DdsHeader::parse(&bytes).unwrap();
    assert_eq!(parsed.size, 124);
    assert_eq!(parsed.width, 512);
    assert_eq!(parsed.height, 512);
    assert_eq!(parsed.pitch_or_linear_size, 131072);
    assert_eq!(parsed.pixel_format.fourcc.to_le_bytes(), *b"DXT1");
    assert_eq!(parsed, header);
}

#[rstest]
#[case(TextureFormat::Dxt1)]
#[case(TextureFormat::Dxt1Alpha)]
#[case(TextureFormat::Dxt5)]
#[case(TextureFormat::YCoCgDxt5)]
#[case(TextureFormat::Uncompressed)]
fn channel_order_does_not_change_output(#[case] format: TextureFormat) {
    let rgba = test_image();
    let abgr = rgba_to_abgr(&rgba);

    let from_rgba = EncoderBuilder::new()
        .format(format)
        .channel_order(ChannelOrder::rgba())
        .build()
        .encode_to_vec(&rgba, 16, 16)
        .unwrap();
    let from_abgr = EncoderBuilder::new()
        .format(format)
        .channel_order(ChannelOrder::abgr())
        .build()
        .encode_to_vec(&abgr, 16, 16)
        .unwrap();

    assert_eq!(from_rgba, from_abgr);
}

#[test]
fn three_byte_sources_are_opaque() {
    let rgb: Vec<u8> = test_image()
        .chunks_exact(4)
        .flat_map(|p| [p[0], p[1], p[2]])
        .collect();
    let rgba: Vec<u8> = rgb.chunks_exact(3).flat_map(|p| [p[0], p[1], p[2], 255]).collect();
    let bgr: Vec<u8> = rgb.chunks_exact(3).flat_map(|p| [p[2], p[1], p[0]]).collect();

    let encode = |order: ChannelOrder, pixels: &[u8]| {
        EncoderBuilder::new()
            .format(TextureFormat::Dxt5)
            .channel_order(order)
            .build()
            .encode_to_vec(pixels, 16, 16)
            .unwrap()
    };

    let expected = encode(ChannelOrder::rgba(), &rgba);
    assert_eq!(encode(ChannelOrder::rgb_no_alpha(), &rgb), expected);
    assert_eq!(encode(ChannelOrder::bgr_no_alpha(), &bgr), expected);
}

#[test]
fn custom_channel_order_matches_preset() {
    let rgba = test_image();
    let abgr = rgba_to_abgr(&rgba);
    let custom = ChannelOrder::custom(3, 2, 1, Some(0)).unwrap();
    assert_eq!(custom, ChannelOrder::abgr());

    let encoder = EncoderBuilder::new().channel_order(custom).build();
    let expected = EncoderBuilder::new().build().encode_to_vec(&rgba, 16, 16).unwrap();
    assert_eq!(encoder.encode_to_vec(&abgr, 16, 16).unwrap(), expected);
}

#[rstest]
#[case(TextureFormat::Dxt1, 3)]
#[case(TextureFormat::Dxt1Alpha, 4)]
#[case(TextureFormat::Dxt5, 4)]
#[case(TextureFormat::YCoCgDxt5, 3)]
fn framed_output_decodes(#[case] format: TextureFormat, #[case] channels: usize) {
    let pixels = test_image();
    let dds = EncoderBuilder::new()
        .format(format)
        .build()
        .encode_to_vec(&pixels, 16, 16)
        .unwrap();

    let image = decode_dds(&dds).unwrap();
    assert_eq!((image.width, image.height), (16, 16));
    assert_eq!(image.channels, channels);
    assert_eq!(image.data.len(), 16 * 16 * channels);
    assert_eq!(
        image.data,
        decode(&dds[DDS_HEADER_SIZE..], 16, 16, format).unwrap()
    );
}

#[test]
fn stream_output_matches_buffer() {
    let pixels = test_image();
    let encoder = EncoderBuilder::new().format(TextureFormat::Dxt5).build();

    let mut sink = dxt_codec_api::WriteSink::new(std::io::Cursor::new(Vec::new()));
    encoder.encode(&pixels, 16, 16, &mut sink).unwrap();
    assert_eq!(sink.written(), encoder.encoded_size(16, 16));
    assert_eq!(
        sink.into_inner().into_inner(),
        encoder.encode_to_vec(&pixels, 16, 16).unwrap()
    );
}
