// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use eulerscope_view2d::ViewTransform;
use kurbo::Point;

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport");

    group.bench_function("zoom_in_out", |b| {
        let mut view = ViewTransform::default();
        let cursor = Point::new(400.0, 300.0);
        b.iter(|| {
            black_box(view.zoom_at(black_box(cursor), 1.0));
            black_box(view.zoom_at(black_box(cursor), -1.0));
        });
    });

    group.bench_function("to_logical", |b| {
        let mut view = ViewTransform::default();
        view.zoom_at(Point::new(10.0, 10.0), 1.0);
        b.iter(|| black_box(view.to_logical(black_box(Point::new(123.0, 456.0)))));
    });

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
