//! Benchmarks for suffix lookup and domain resolution.
//!
//! Run with: cargo bench
//!
//! This benchmark suite measures:
//! - `find` throughput for hits, wildcard/exception hits and misses
//! - `domain` throughput including normalization and decomposition
//! - Scalability with different list sizes
//! - Parsing cost of list text

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use k2suffix::{FindOptions, ParseOptions, SuffixList, BUILTIN_LIST};

/// Generate list text with the given number of synthetic suffixes.
fn generate_list(count: usize) -> String {
    let mut text = String::from("com\nnet\norg\nuk\nco.uk\n*.ck\n!www.ck\n");
    for i in 0..count {
        match i % 3 {
            0 => text.push_str(&format!("zone{}.com\n", i)),
            1 => text.push_str(&format!("*.zone{}.net\n", i)),
            _ => text.push_str(&format!("sub.zone{}.org\n", i)),
        }
    }
    text
}

/// Generate queries, a share of which hit listed suffixes.
fn generate_queries(count: usize, hit_ratio: f64) -> Vec<String> {
    let mut queries = Vec::with_capacity(count);
    let hits = (count as f64 * hit_ratio) as usize;

    for i in 0..hits {
        match i % 3 {
            0 => queries.push(format!("www.site{}.zone{}.com", i, (i % 1000) / 3 * 3)),
            1 => queries.push(format!("a.b{}.zone{}.net", i, (i % 1000) / 3 * 3 + 1)),
            _ => queries.push(format!("host{}.example.co.uk", i)),
        }
    }

    for i in hits..count {
        queries.push(format!("host{}.unknown{}.example", i, i));
    }

    queries
}

fn bench_find(c: &mut Criterion) {
    let list = SuffixList::from_text(&generate_list(10_000), &ParseOptions::default()).unwrap();
    let options = FindOptions::default();
    let queries = generate_queries(1000, 0.8);

    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("mixed_queries", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(list.find(query, &options));
            }
        })
    });

    group.finish();
}

fn bench_domain(c: &mut Criterion) {
    let list = k2suffix::default_list();
    let queries = [
        "www.example.com",
        "a.b.c.example.co.uk",
        "www.city.kobe.jp",
        "a.b.test.ck",
        "user.github.io",
        "host.unknown.example",
    ];

    let mut group = c.benchmark_group("domain");
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("builtin_list", |b| {
        b.iter(|| {
            for query in &queries {
                let _ = black_box(list.domain(query));
            }
        })
    });

    group.finish();
}

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    let options = FindOptions::default();

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let list = SuffixList::from_text(&generate_list(*size), &ParseOptions::default()).unwrap();
        let queries: Vec<_> = (0..100)
            .map(|i| format!("www.site{}.zone{}.com", i, (i * 3) % size))
            .collect();

        group.throughput(Throughput::Elements(100));
        group.bench_with_input(BenchmarkId::new("rules", size), size, |b, _| {
            b.iter(|| {
                for query in &queries {
                    black_box(list.find(query, &options));
                }
            })
        });
    }

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    group.throughput(Throughput::Bytes(BUILTIN_LIST.len() as u64));

    group.bench_function("builtin_unicode", |b| {
        b.iter(|| black_box(SuffixList::from_text(BUILTIN_LIST, &ParseOptions::default())))
    });

    let ascii = generate_list(10_000);
    group.bench_function("synthetic_ascii", |b| {
        let options = ParseOptions::default().with_ascii_input(true);
        b.iter(|| black_box(SuffixList::from_text(&ascii, &options)))
    });

    group.finish();
}

criterion_group!(benches, bench_find, bench_domain, bench_scalability, bench_load);
criterion_main!(benches);
