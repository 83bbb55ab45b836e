use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxt_codec_api::{decode, EncoderBuilder, TextureFormat};
use std::hint::black_box;

const WIDTH: usize = 512;
const HEIGHT: usize = 512;

// Helper to generate an RGBA image with smooth gradients and some noise
fn generate_test_image() -> Vec<u8> {
    let mut pixels = Vec::with_capacity(WIDTH * HEIGHT * 4);
    let mut seed = 0x1234_5678u32;
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let noise = (seed >> 28) as u8;
            pixels.extend_from_slice(&[
                (x / 2) as u8 ^ noise,
                (y / 2) as u8,
                ((x + y) / 4) as u8,
                255 - ((x ^ y) as u8 & 0x3F),
            ]);
        }
    }
    pixels
}

fn criterion_benchmark(c: &mut Criterion) {
    let pixels = generate_test_image();
    let formats = [
        ("dxt1", TextureFormat::Dxt1),
        ("dxt1 alpha", TextureFormat::Dxt1Alpha),
        ("dxt5", TextureFormat::Dxt5),
        ("ycocg-dxt5", TextureFormat::YCoCgDxt5),
    ];

    let mut group = c.benchmark_group("Encode");
    group.throughput(Throughput::Bytes(pixels.len() as u64));
    for (name, format) in formats {
        let encoder = EncoderBuilder::new()
            .format(format)
            .write_header(false)
            .build();
        let mut output = Vec::with_capacity(encoder.encoded_size(WIDTH, HEIGHT));

        group.bench_with_input(BenchmarkId::new(name, WIDTH), &pixels, |b, pixels| {
            b.iter(|| {
                output.clear();
                encoder
                    .encode(black_box(pixels), WIDTH, HEIGHT, &mut output)
                    .unwrap();
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Decode");
    group.throughput(Throughput::Bytes((WIDTH * HEIGHT * 4) as u64));
    for (name, format) in formats {
        let encoded = EncoderBuilder::new()
            .format(format)
            .write_header(false)
            .build()
            .encode_to_vec(&pixels, WIDTH, HEIGHT)
            .unwrap();

        group.bench_with_input(BenchmarkId::new(name, WIDTH), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded), WIDTH, HEIGHT, format).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
