// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation operations.
//!
//! Measures the performance of:
//! - Stepping (next/previous with wraparound)
//! - Direct jumps (go_to, including out-of-range resets)

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::gallery::Gallery;
use std::hint::black_box;

/// Benchmark stepping through a full wrap of the gallery.
fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("advance_full_wrap", |b| {
        b.iter(|| {
            let mut gallery = Gallery::new(128).unwrap();
            for _ in 0..256 {
                gallery.advance(1);
            }
            black_box(gallery.current());
        });
    });

    group.bench_function("advance_large_delta", |b| {
        b.iter(|| {
            let mut gallery = Gallery::new(128).unwrap();
            gallery.advance(black_box(1_000_003));
            black_box(gallery.current());
        });
    });

    group.finish();
}

/// Benchmark direct jumps, mixing in-range and out-of-range targets.
fn bench_go_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("go_to_mixed_targets", |b| {
        b.iter(|| {
            let mut gallery = Gallery::new(128).unwrap();
            for target in [-1_i64, 0, 1, 64, 128, 129, 10_000] {
                gallery.go_to(black_box(target));
            }
            black_box(gallery.current());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_go_to);
criterion_main!(benches);
