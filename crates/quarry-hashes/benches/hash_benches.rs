//! Hash primitive benchmarks.
//!
//! Run: `cargo bench -p quarry-hashes`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quarry_hashes::{bip32_hash, murmur3_32, siphash_u256, siphash_u256_extra, SipHasher};

fn bench_murmur3(c: &mut Criterion) {
    let mut group = c.benchmark_group("murmur3_32");

    for size in [4usize, 32, 256, 4096] {
        let data = vec![0xabu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| murmur3_32(0xfba4c795, std::hint::black_box(data)));
        });
    }

    group.finish();
}

fn bench_siphash_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("siphash_stream");

    for size in [32usize, 256, 4096] {
        let data = vec![0x5au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let mut h = SipHasher::new(0x0706050403020100, 0x0f0e0d0c0b0a0908);
                h.write(std::hint::black_box(data));
                h.finalize()
            });
        });
    }

    group.finish();
}

fn bench_siphash_u256(c: &mut Criterion) {
    let val = [0x5au8; 32];
    c.bench_function("siphash_u256", |b| {
        b.iter(|| siphash_u256(0x0706050403020100, 0x0f0e0d0c0b0a0908, std::hint::black_box(&val)));
    });
    c.bench_function("siphash_u256_extra", |b| {
        b.iter(|| {
            siphash_u256_extra(
                0x0706050403020100,
                0x0f0e0d0c0b0a0908,
                std::hint::black_box(&val),
                0x11223344,
            )
        });
    });
}

fn bench_bip32_hash(c: &mut Criterion) {
    let chain_code = [0x5cu8; 32];
    let key = [0xa7u8; 32];
    c.bench_function("bip32_hash", |b| {
        b.iter(|| bip32_hash(std::hint::black_box(&chain_code), 0x80000000, 0x00, &key));
    });
}

criterion_group!(
    benches,
    bench_murmur3,
    bench_siphash_stream,
    bench_siphash_u256,
    bench_bip32_hash
);
criterion_main!(benches);
