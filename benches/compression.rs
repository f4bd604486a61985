use bufcodec::Codec;
use bufcodec::compression::{compress_bound, compress_into, decompress_into};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: &[(&str, usize)] = &[("1KB", 1024), ("64KB", 64 * 1024), ("1MB", 1024 * 1024)];

fn make_payload(size: usize) -> Vec<u8> {
    // Semi-compressible: repeating pattern with some variation
    (0..size).map(|i| (i % 251) as u8).collect()
}

fn bench_codec(c: &mut Criterion, codec: Codec) {
    let mut group = c.benchmark_group(codec.name());
    for &(label, size) in SIZES {
        let data = make_payload(size);
        let mut scratch = vec![0u8; compress_bound(codec, size).unwrap()];
        let mut restored = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("compress", label), &data, |b, data| {
            b.iter(|| compress_into(codec, data, &mut scratch).unwrap());
        });

        let n = compress_into(codec, &data, &mut scratch).unwrap();
        let compressed = scratch[..n].to_vec();
        group.bench_with_input(
            BenchmarkId::new("decompress", label),
            &compressed,
            |b, data| {
                b.iter(|| decompress_into(codec, data, &mut restored).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_lz4(c: &mut Criterion) {
    bench_codec(c, Codec::Lz4);
}

fn bench_deflate(c: &mut Criterion) {
    bench_codec(c, Codec::Deflate);
}

criterion_group!(benches, bench_lz4, bench_deflate);
criterion_main!(benches);
