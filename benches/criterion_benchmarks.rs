use bytescan::report;
use bytescan::scan::{first_non_ascii, non_ascii, suspicious_matches};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::io;

/// Printable ASCII text with the occasional multi-byte character mixed in.
fn gen_text(size: usize, seed: u64, every: usize) -> Vec<u8> {
    let mut s = seed;
    let mut out = Vec::with_capacity(size + 3);
    while out.len() < size {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        if every > 0 && (s >> 33) as usize % every == 0 {
            out.extend_from_slice("\u{2014}".as_bytes());
        } else {
            out.push(b' ' + ((s >> 33) % 95) as u8);
        }
    }
    out.truncate(size);
    out
}

fn bench_threshold_scan(c: &mut Criterion) {
    let mut g = c.benchmark_group("threshold_scan_mb_s");
    for size in [64 * 1024usize, 1024 * 1024, 8 * 1024 * 1024] {
        let clean = gen_text(size, 1, 0);
        let dirty = gen_text(size, 1, 512);
        g.throughput(Throughput::Bytes(size as u64));
        g.bench_with_input(BenchmarkId::new("first_clean", size), &size, |b, _| {
            b.iter(|| black_box(first_non_ascii(black_box(&clean))));
        });
        g.bench_with_input(BenchmarkId::new("all_dirty", size), &size, |b, _| {
            b.iter(|| black_box(non_ascii(black_box(&dirty)).count()));
        });
    }
    g.finish();
}

fn bench_suspicious_scan(c: &mut Criterion) {
    let mut g = c.benchmark_group("suspicious_scan_mb_s");
    for size in [64 * 1024usize, 1024 * 1024, 8 * 1024 * 1024] {
        let data = gen_text(size, 2, 256);
        g.throughput(Throughput::Bytes(size as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(suspicious_matches(black_box(&data)).count()));
        });
    }
    g.finish();
}

fn bench_report(c: &mut Criterion) {
    let data = gen_text(1024 * 1024, 3, 64);
    let mut g = c.benchmark_group("report_to_sink");
    g.throughput(Throughput::Bytes(data.len() as u64));
    g.bench_function("suspicious", |b| {
        b.iter(|| report::report_suspicious(&mut io::sink(), black_box(&data)).unwrap());
    });
    g.bench_function("non_ascii_all", |b| {
        b.iter(|| report::report_non_ascii(&mut io::sink(), black_box(&data), true).unwrap());
    });
    g.finish();
}

criterion_group!(
    benches,
    bench_threshold_scan,
    bench_suspicious_scan,
    bench_report
);
criterion_main!(benches);
