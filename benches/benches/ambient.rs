// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `gesture_frame_view`'s transform parsing and ambient resolution.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use gesture_frame_view::{AmbientResolver, AncestorStyle, parse_transform};

const TRANSFORMS: [&str; 4] = [
    "matrix(2, 0, 0, 2, 10, 20)",
    "scale(1.5) rotate(30deg) translate(10px, 4px)",
    "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 40, 20, 0, 1)",
    "skewX(10deg) scale(0.5, 2)",
];

fn chain(depth: usize, transformed_every: usize) -> Vec<String> {
    (0..depth)
        .map(|i| {
            if i % transformed_every == 0 {
                TRANSFORMS[i % TRANSFORMS.len()].to_string()
            } else {
                "none".to_string()
            }
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_transform");
    for (i, value) in TRANSFORMS.iter().enumerate() {
        group.bench_with_input(BenchmarkId::from_parameter(i), value, |b, value| {
            b.iter(|| black_box(parse_transform(black_box(value))));
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("ambient_resolve");
    for &depth in &[4_usize, 16, 64] {
        let styles = chain(depth, 4);

        // Unchanged chain: only the cache key is rebuilt and compared.
        group.bench_with_input(BenchmarkId::new("memoized", depth), &styles, |b, styles| {
            let mut resolver = AmbientResolver::new();
            b.iter(|| {
                let chain = styles.iter().map(|s| AncestorStyle::new(s));
                black_box(resolver.resolve(chain))
            });
        });

        // Alternating chains force a parse and inversion every call.
        let other = chain(depth, 3);
        group.bench_with_input(
            BenchmarkId::new("recomputed", depth),
            &(styles, other),
            |b, (styles, other)| {
                let mut resolver = AmbientResolver::new();
                let mut flip = false;
                b.iter(|| {
                    flip = !flip;
                    let current = if flip { styles } else { other };
                    let chain = current.iter().map(|s| AncestorStyle::new(s));
                    black_box(resolver.resolve(chain))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_resolve);
criterion_main!(benches);
