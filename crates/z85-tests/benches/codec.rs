use std::io::Write;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use z85_decoder::{DecoderConfig, Z85Decoder, decode, decode_with};
use z85_encoder::{Z85Encoder, encode};

/// Deterministic pseudo-random payload (no RNG dependency needed).
fn payload(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x9E37_79B9;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state.to_be_bytes()[0]
        })
        .collect()
}

const SIZES: [usize; 4] = [16, 256, 4096, 16384];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in SIZES {
        let data = payload(size);
        #[allow(clippy::cast_possible_truncation)]
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("bulk", size), &data, |b, data| {
            b.iter(|| encode(data));
        });
        group.bench_with_input(BenchmarkId::new("stream_64b_writes", size), &data, |b, data| {
            b.iter(|| {
                let mut encoder = Z85Encoder::new(Vec::with_capacity(size * 5 / 4 + 5));
                for piece in data.chunks(64) {
                    encoder.write_all(piece).unwrap();
                }
                encoder.finish().unwrap()
            });
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in SIZES {
        let text = encode(&payload(size));
        #[allow(clippy::cast_possible_truncation)]
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("bulk", size), &text, |b, text| {
            b.iter(|| decode(text));
        });
        group.bench_with_input(BenchmarkId::new("bulk_strict", size), &text, |b, text| {
            b.iter(|| decode_with(text, &DecoderConfig::strict()).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("stream_64b_writes", size), &text, |b, text| {
            b.iter(|| {
                let mut decoder = Z85Decoder::new(Vec::with_capacity(size));
                for piece in text.as_bytes().chunks(64) {
                    decoder.write_all(piece).unwrap();
                }
                decoder.finish().unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
