// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_breakpoints::{Breakpoint, BreakpointSet, BreakpointTable, Responsive, classify};

/// Widths spread over every tier, including the open-ended top one.
fn widths(len: usize) -> Vec<f64> {
    (0..len).map(|i| (i % 2_400) as f64).collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("breakpoints/classify");
    let table = BreakpointTable::TAILWIND;

    for len in [256usize, 4_096] {
        let widths = widths(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("tailwind", len), &widths, |b, widths| {
            b.iter(|| {
                for &w in widths {
                    black_box(classify(black_box(w)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("table", len), &widths, |b, widths| {
            b.iter(|| {
                for &w in widths {
                    black_box(table.classify(black_box(w)));
                }
            });
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("breakpoints/resolve");
    let widths = widths(4_096);
    group.throughput(Throughput::Elements(widths.len() as u64));

    // Worst case for the scan: only `sm` set, so wide widths walk every tier.
    let sparse = Responsive::new(0_u32).sm(1);
    let dense = Responsive::new(0_u32).sm(1).md(2).lg(3).xl(4).xxl(5);

    group.bench_function("sparse", |b| {
        b.iter(|| {
            for &w in &widths {
                black_box(sparse.resolve(black_box(w)));
            }
        });
    });

    group.bench_function("dense", |b| {
        b.iter(|| {
            for &w in &widths {
                black_box(dense.resolve(black_box(w)));
            }
        });
    });

    let desktop = BreakpointSet::range(Breakpoint::Lg..);
    let table = BreakpointTable::TAILWIND;
    group.bench_function("set_matches", |b| {
        b.iter(|| {
            for &w in &widths {
                black_box(desktop.matches(&table, black_box(w)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_resolve);
criterion_main!(benches);
