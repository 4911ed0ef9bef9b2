// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use eulerscope_animation::{AnimationController, EngineConfig, ModeId};
use eulerscope_generators::{DigitWalk, PointGenerator, RotatingArm};
use eulerscope_surface::{RecordingSurface, Size};

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generators");

    let arm = RotatingArm::default();
    group.bench_function("rotating_arm", |b| {
        let mut step = 0_u64;
        b.iter(|| {
            step = step.wrapping_add(1);
            black_box(arm.generate(black_box(step), 1.0, None))
        });
    });

    let walk = DigitWalk::default();
    let seed = walk.seed();
    group.bench_function("digit_walk", |b| {
        let mut step = 0_u64;
        b.iter(|| {
            step = step.wrapping_add(1);
            black_box(walk.generate(black_box(step), 1.0, seed.as_ref()))
        });
    });

    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/steady_state");

    for mode in [ModeId::RotatingArm, ModeId::DigitWalk] {
        let mut engine = AnimationController::with_queue(EngineConfig::default()).unwrap();
        let mut surface = RecordingSurface::new(Size::new(1280.0, 720.0));
        engine.start_mode(mode);
        // Fill the trail so every frame evicts and strokes a full polyline.
        for _ in 0..2_500 {
            engine.run_refresh(&mut surface);
        }

        group.bench_function(BenchmarkId::from_parameter(format!("{mode:?}")), |b| {
            b.iter(|| {
                surface.clear_draws();
                black_box(engine.run_refresh(&mut surface))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generators, bench_frames);
criterion_main!(benches);
