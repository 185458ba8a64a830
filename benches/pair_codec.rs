//! Pair Codec Benchmarks
//!
//! Benchmarks for the varint codec and the pair codec covering:
//! - Raw varint encode/decode across magnitudes
//! - Pair encode/decode for small, negative and nested pairs
//! - Batch throughput over a stream of pairs
//!
//! ## Running
//!
//! ```bash
//! # All codec benchmarks
//! cargo bench --bench pair_codec
//!
//! # Specific categories
//! cargo bench --bench pair_codec -- "varint"
//! cargo bench --bench pair_codec -- "pair/decode"
//! ```

use archwire::varint::{decode_varint, encode_varint, MAX_VARINT_BYTES};
use archwire::{from_bytes, serialize_pair, to_bytes, BinaryReader, BinaryWriter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// =============================================================================
// Constants
// =============================================================================

/// Values whose varints take 1, 3, 5 and 10 bytes
const MAGNITUDES: &[u64] = &[0x7F, 0x1F_FFFF, 0x7_FFFF_FFFF, u64::MAX];

/// Pairs per batch in the throughput benchmarks
const BATCH_SIZE: u64 = 1_000;

// =============================================================================
// Varint
// =============================================================================

fn varint_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint");
    group.throughput(Throughput::Elements(1));

    for &value in MAGNITUDES {
        group.bench_function(BenchmarkId::new("encode", value), |b| {
            let mut buf = [0u8; MAX_VARINT_BYTES];
            b.iter(|| encode_varint(black_box(value), &mut buf))
        });

        let mut buf = [0u8; MAX_VARINT_BYTES];
        let len = encode_varint(value, &mut buf);
        let encoded = buf[..len].to_vec();
        group.bench_function(BenchmarkId::new("decode", value), |b| {
            b.iter(|| decode_varint::<u64>(black_box(&encoded)))
        });
    }

    group.finish();
}

// =============================================================================
// Pairs
// =============================================================================

fn pair_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair");
    group.throughput(Throughput::Elements(1));

    group.bench_function("encode/small", |b| {
        b.iter(|| to_bytes(&mut black_box((1u32, 2u64))))
    });
    group.bench_function("encode/negative", |b| {
        b.iter(|| to_bytes(&mut black_box((i64::MIN, -1i32))))
    });

    let small = to_bytes(&mut (1u32, 2u64)).unwrap_or_default();
    group.bench_function("decode/small", |b| {
        b.iter(|| from_bytes::<(u32, u64)>(black_box(&small)))
    });

    let negative = to_bytes(&mut (i64::MIN, -1i32)).unwrap_or_default();
    group.bench_function("decode/negative", |b| {
        b.iter(|| from_bytes::<(i64, i32)>(black_box(&negative)))
    });

    let nested = to_bytes(&mut ((7u16, -7i16), "nested".to_string())).unwrap_or_default();
    group.bench_function("decode/nested", |b| {
        b.iter(|| from_bytes::<((u16, i16), String)>(black_box(&nested)))
    });

    group.finish();
}

fn batch_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair/batch");
    group.throughput(Throughput::Elements(BATCH_SIZE));

    group.bench_function("encode", |b| {
        b.iter(|| {
            let mut ar = BinaryWriter::new(Vec::with_capacity(BATCH_SIZE as usize * 8));
            for i in 0..BATCH_SIZE {
                let mut pair = (i, -(i as i64));
                serialize_pair(&mut ar, &mut pair);
            }
            ar.into_inner()
        })
    });

    let mut ar = BinaryWriter::new(Vec::new());
    for i in 0..BATCH_SIZE {
        serialize_pair(&mut ar, &mut (i, -(i as i64)));
    }
    let stream = ar.into_inner();

    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut ar = BinaryReader::new(black_box(&stream[..]));
            let mut pair = (0u64, 0i64);
            for _ in 0..BATCH_SIZE {
                serialize_pair(&mut ar, &mut pair);
            }
            pair
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    varint_benchmarks,
    pair_benchmarks,
    batch_benchmarks
);
criterion_main!(benches);
