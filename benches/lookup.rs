use codepage_d::{decode_byte, decode_lossy, table_for};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_decode_byte(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_byte");

    group.bench_function("ascii", |b| {
        b.iter(|| decode_byte(black_box("CP1252"), black_box(0x41)))
    });
    group.bench_function("high", |b| {
        b.iter(|| decode_byte(black_box("CP1252"), black_box(0x80)))
    });
    group.bench_function("undefined", |b| {
        b.iter(|| decode_byte(black_box("CP1252"), black_box(0x81)))
    });
    group.bench_function("unknown_encoding", |b| {
        b.iter(|| decode_byte(black_box("CP9999"), black_box(0x80)))
    });
    group.finish();
}

fn bench_decode_lossy(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_lossy_cp437");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| decode_lossy(black_box("CP437"), black_box(data)).unwrap());
        });
    }
    group.finish();
}

fn bench_bulk_via_raw_table(c: &mut Criterion) {
    // The table_for escape hatch for callers that hoist the name lookup
    // out of their per-byte loop.
    let table = table_for("CP437").unwrap();
    let data: Vec<u8> = (0..4096).map(|i| (i % 256) as u8).collect();

    let mut group = c.benchmark_group("raw_table");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("index_4096", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for &byte in black_box(&data) {
                if byte >= 0x80 {
                    acc += table[byte as usize - 0x80][0] as usize;
                }
            }
            acc
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_decode_byte,
    bench_decode_lossy,
    bench_bulk_via_raw_table
);
criterion_main!(benches);
