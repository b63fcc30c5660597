#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Parse and serialize benchmarks for `UrlManager`
use criterion::{Criterion, criterion_group, criterion_main};
use parq::UrlManager;
use std::hint::black_box;

const URLS: &[&str] = &[
    "http://example.com/search?q=rust&page=2&debug=1",
    "https://www.amazon.ca/dp/B09MLC6KX4?psc=1&ref=ppx_yo2ov_dt_b_product_details",
    "http://x/y?k%20ey=v%26al&flag&a=1&a=2&a=3",
    "http://example.com/plain/path/without/query",
    "http://example.com/p?q=caf%C3%A9&emoji=%F0%9F%A6%80&empty=",
];

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| {
            for url in URLS {
                let _ = black_box(UrlManager::parse(black_box(url)));
            }
        });
    });
}

fn bench_generate(c: &mut Criterion) {
    let managers: Vec<UrlManager> = URLS.iter().map(|url| UrlManager::parse(url).unwrap()).collect();

    c.bench_function("generate_url", |b| {
        b.iter(|| {
            for manager in &managers {
                black_box(manager.generate_url());
            }
        });
    });
}

fn bench_parse_generate_roundtrip(c: &mut Criterion) {
    c.bench_function("roundtrip", |b| {
        b.iter(|| {
            for url in URLS {
                let manager = UrlManager::parse(black_box(url)).unwrap();
                black_box(manager.generate_url());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_generate,
    bench_parse_generate_roundtrip
);
criterion_main!(benches);
