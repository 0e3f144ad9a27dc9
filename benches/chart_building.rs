//! Benchmarks for chart construction and brush resolution
//!
//! Run with: cargo bench

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cellvis_rs::chart::{resolve_brush, split_values, BrushSelection, DistChart};
use cellvis_rs::{CellId, DashboardConfig, Value};

fn numeric_dataset(n: usize) -> HashMap<CellId, Value> {
    (0..n)
        .map(|i| {
            // Deterministic pseudo-random spread over [0, 10)
            let v = (i as f64 * 0.61803398875).fract() * 10.0;
            (format!("cell_{:06}", i), Value::Num(v))
        })
        .collect()
}

fn factor_dataset(n: usize) -> HashMap<CellId, Value> {
    let levels = ["G1", "S", "G2M", "M"];
    (0..n)
        .map(|i| {
            (
                format!("cell_{:06}", i),
                Value::Factor(levels[i % levels.len()].to_string()),
            )
        })
        .collect()
}

fn bench_comparison_chart(c: &mut Criterion) {
    let config = DashboardConfig::default();
    let mut group = c.benchmark_group("comparison_chart");

    for n in [1_000usize, 10_000] {
        let values = numeric_dataset(n);
        let selected: Vec<CellId> = (0..n / 5).map(|i| format!("cell_{:06}", i)).collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("numeric", n), &n, |b, _| {
            b.iter(|| {
                let (sel, rem) = split_values(black_box(&values), black_box(&selected));
                DistChart::comparison(&sel, &rem, "subset", &config)
            })
        });

        let factors = factor_dataset(n);
        group.bench_with_input(BenchmarkId::new("categorical", n), &n, |b, _| {
            b.iter(|| {
                let (sel, rem) = split_values(black_box(&factors), black_box(&selected));
                DistChart::comparison(&sel, &rem, "subset", &config)
            })
        });
    }
    group.finish();
}

fn bench_brush_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("brush_resolution");

    for n in [1_000usize, 10_000] {
        let values = numeric_dataset(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("range", n), &n, |b, _| {
            b.iter(|| {
                resolve_brush(
                    black_box(&values),
                    &BrushSelection::Range { min: 2.5, max: 7.5 },
                )
            })
        });

        let factors = factor_dataset(n);
        group.bench_with_input(BenchmarkId::new("categories", n), &n, |b, _| {
            b.iter(|| {
                resolve_brush(
                    black_box(&factors),
                    &BrushSelection::Categories(vec!["S".to_string(), "G2M".to_string()]),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_comparison_chart, bench_brush_resolution);
criterion_main!(benches);
