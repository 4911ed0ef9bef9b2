// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use eulerscope_trail::{TrailBuffer, TrailCapacity, TrailPoint};
use kurbo::Point;

fn filled(capacity: TrailCapacity, n: usize) -> TrailBuffer {
    let mut trail = TrailBuffer::new(capacity);
    for i in 0..n {
        trail.append(TrailPoint::new(Point::new(i as f64, 0.0)));
    }
    trail
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("trail/append");
    group.throughput(Throughput::Elements(1));

    for len in [500_usize, 2_000] {
        let capacity = TrailCapacity::finite(len).unwrap();
        // Full buffer: every append evicts.
        group.bench_function(BenchmarkId::new("saturated", len), |b| {
            b.iter_batched_ref(
                || filled(capacity, len),
                |trail| trail.append(TrailPoint::new(black_box(Point::new(1.0, 2.0)))),
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("unbounded", |b| {
        let mut trail = TrailBuffer::new(TrailCapacity::Unbounded);
        b.iter(|| trail.append(TrailPoint::new(black_box(Point::new(1.0, 2.0)))));
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("trail/snapshot");

    for len in [500_usize, 2_000] {
        // Rotate the ring so the snapshot spans both halves of storage.
        let capacity = TrailCapacity::finite(len).unwrap();
        let trail = filled(capacity, len + len / 2);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::new("sum_positions", len), |b| {
            b.iter(|| {
                let sum = trail
                    .snapshot()
                    .positions()
                    .fold(0.0, |acc, p| acc + p.x + p.y);
                black_box(sum)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_append, bench_snapshot);
criterion_main!(benches);
