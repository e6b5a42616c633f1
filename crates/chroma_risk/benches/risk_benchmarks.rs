//! Criterion benchmarks for the colour risk engine.
//!
//! Benchmarks cover:
//! - Colour summary aggregation
//! - Portfolio statistics over subsets
//! - Colour/search filtering
//!
//! The generated portfolio is 120 companies; tiled copies exercise the
//! same code paths at larger input sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chroma_core::types::Company;
use chroma_risk::{filter_by_color_and_search, portfolio_stats, summarize};

/// Tiles the generated portfolio to the requested size.
fn portfolio_of(size: usize) -> Vec<Company> {
    let base = chroma_data::generate();
    base.iter().cycle().take(size).cloned().collect()
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for size in [120, 1_200, 12_000] {
        let companies = portfolio_of(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &companies, |b, input| {
            b.iter(|| summarize(black_box(input)));
        });
    }
    group.finish();
}

fn bench_portfolio_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("portfolio_stats");
    for size in [120, 1_200, 12_000] {
        let companies = portfolio_of(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &companies, |b, input| {
            b.iter(|| portfolio_stats(black_box(input)));
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let companies = portfolio_of(12_000);
    let colors = vec!["Navy".to_string(), "Crimson".to_string()];

    c.bench_function("filter/color_and_search", |b| {
        b.iter(|| {
            filter_by_color_and_search(black_box(&companies), black_box(&colors), black_box("apex"))
        });
    });
}

criterion_group!(benches, bench_summarize, bench_portfolio_stats, bench_filter);
criterion_main!(benches);
