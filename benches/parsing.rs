//! Criterion benchmarks for queue URL extraction.
//!
//! Extraction sits on the hot path of request instrumentation, so every
//! outbound call pays for it whether or not it targets a queue.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sqs_url::{QueueAttributes, QueueUrl, get_account_id, get_queue_name, get_region};

const CASES: [(&str, &str); 6] = [
    ("regional", "https://sqs.us-east-1.amazonaws.com/123456789012/q1"),
    ("global", "https://sqs.amazonaws.com/123456789012/orders"),
    ("legacy", "https://queue.amazonaws.com/123456789012/orders"),
    (
        "long_name",
        "https://sqs.ap-southeast-2.amazonaws.com/123456789012/aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    ),
    ("not_a_queue", "https://example.com/static/js/app.bundle.js"),
    ("bad_account", "https://sqs.us-east-1.amazonaws.com/1234/q1"),
];

/// Benchmark: each extraction function across URL shapes
fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for (name, url) in CASES {
        group.throughput(Throughput::Bytes(url.len() as u64));
        group.bench_with_input(BenchmarkId::new("queue_name", name), &url, |b, url| {
            b.iter(|| get_queue_name(black_box(Some(*url))));
        });
        group.bench_with_input(BenchmarkId::new("account_id", name), &url, |b, url| {
            b.iter(|| get_account_id(black_box(Some(*url))));
        });
        group.bench_with_input(BenchmarkId::new("region", name), &url, |b, url| {
            b.iter(|| get_region(black_box(Some(*url))));
        });
    }

    group.finish();
}

/// Benchmark: all three attributes at once
fn bench_attributes(c: &mut Criterion) {
    let mut group = c.benchmark_group("attributes");

    for (name, url) in CASES {
        group.bench_with_input(BenchmarkId::new("from_url", name), &url, |b, url| {
            b.iter(|| QueueAttributes::from_url(black_box(Some(*url))));
        });
    }

    group.finish();
}

/// Benchmark: typed parse, which allocates owned components
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, url) in CASES {
        group.bench_with_input(BenchmarkId::new("queue_url", name), &url, |b, url| {
            b.iter(|| QueueUrl::parse(black_box(url)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_attributes, bench_parse);
criterion_main!(benches);
