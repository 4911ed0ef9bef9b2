// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end controller scenarios driven through a frame queue and a
//! recording surface.

use eulerscope_animation::{
    Anchor, AnimationController, AnimationState, ConfigError, EngineConfig, FrameKind,
    FrameOutcome, FrameTicket, ModeId, SessionEpoch,
};
use eulerscope_surface::{
    Affine, Point, RecordingSurface, RenderSurfaceExt, Size, SurfaceOp,
};
use eulerscope_timing::FrameQueue;
use eulerscope_trail::TrailCapacity;

type Engine = AnimationController<FrameQueue<FrameTicket>>;

fn origin_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.rotating_arm.anchor = Anchor::Fixed(Point::ZERO);
    config.digit_walk.anchor = Anchor::Fixed(Point::ZERO);
    config
}

fn setup(config: EngineConfig) -> (Engine, RecordingSurface) {
    let mut engine = AnimationController::with_queue(config).unwrap();
    let mut surface = RecordingSurface::new(Size::new(800.0, 600.0));
    // Initial blank frame.
    assert_eq!(engine.run_refresh(&mut surface), 1);
    surface.clear_draws();
    (engine, surface)
}

fn run(engine: &mut Engine, surface: &mut RecordingSurface, frames: usize) {
    for _ in 0..frames {
        engine.run_refresh(surface);
    }
}

fn positions(engine: &Engine) -> Vec<Point> {
    engine.trail().positions().collect()
}

#[test]
fn new_controller_paints_background_once() {
    let mut engine = AnimationController::with_queue(EngineConfig::default()).unwrap();
    let mut surface = RecordingSurface::new(Size::new(320.0, 200.0));

    assert_eq!(engine.state(), AnimationState::Idle);
    assert_eq!(engine.run_refresh(&mut surface), 1);
    assert_eq!(surface.len(), 1);
    let draw = surface.draws().next().unwrap();
    assert_eq!(draw.transform, Affine::IDENTITY);
    assert!(matches!(
        draw.op,
        SurfaceOp::FillRect { color, .. } if color == engine.config().palette.background
    ));

    // Nothing is rescheduled while idle.
    assert_eq!(engine.run_refresh(&mut surface), 0);
    assert!(engine.scheduler().is_empty());
}

#[test]
fn invalid_config_is_rejected() {
    let config = EngineConfig {
        initial_speed: f64::NAN,
        ..EngineConfig::default()
    };
    let err = AnimationController::with_queue(config).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSpeed(s) if s.is_nan()));
}

#[test]
fn rotating_arm_matches_closed_form() {
    let (mut engine, mut surface) = setup(origin_config());
    engine.start_mode(ModeId::RotatingArm);

    run(&mut engine, &mut surface, 1);
    assert_eq!(positions(&engine), [Point::new(250.0, 0.0)]);

    run(&mut engine, &mut surface, 100);
    assert_eq!(engine.current_step_count(), 101);
    let tip = engine.trail().last().unwrap().position;
    assert!((tip.x - 3.83).abs() < 1e-2, "tip = {tip:?}");
    assert!((tip.y - 61.49).abs() < 1e-2, "tip = {tip:?}");
}

#[test]
fn digit_walk_first_step_heads_east() {
    let (mut engine, mut surface) = setup(origin_config());
    engine.start_mode(ModeId::DigitWalk);
    run(&mut engine, &mut surface, 1);

    assert_eq!(positions(&engine), [Point::ZERO, Point::new(3.0, 0.0)]);
    assert_eq!(engine.trail().last().unwrap().meta.hue, Some(72.0));
}

#[test]
fn surface_center_anchor_is_resolved_on_first_frame() {
    let (mut engine, mut surface) = setup(EngineConfig::default());
    engine.start_mode(ModeId::DigitWalk);
    run(&mut engine, &mut surface, 1);
    assert_eq!(engine.trail().first().unwrap().position, Point::new(400.0, 300.0));

    // A resize mid-session does not move the running walk.
    surface.resize(Size::new(100.0, 100.0));
    run(&mut engine, &mut surface, 1);
    assert_eq!(engine.trail().first().unwrap().position, Point::new(400.0, 300.0));
}

#[test]
fn stale_ticket_after_mode_switch_changes_nothing() {
    let (mut engine, mut surface) = setup(origin_config());
    engine.start_mode(ModeId::RotatingArm);
    run(&mut engine, &mut surface, 3);

    let old = engine.scheduler_mut().pop_due().unwrap();
    assert_eq!(old.kind, FrameKind::Step(ModeId::RotatingArm));

    engine.start_mode(ModeId::DigitWalk);
    let before = engine.debug_info();
    surface.clear_draws();

    assert_eq!(engine.on_frame(old, &mut surface), FrameOutcome::Stale);
    assert_eq!(engine.debug_info(), before);
    assert!(engine.trail().is_empty());
    assert_eq!(engine.current_step_count(), 0);
    assert!(surface.is_empty());
    // Only the new mode's first frame is queued.
    assert_eq!(engine.scheduler().len(), 1);

    run(&mut engine, &mut surface, 1);
    assert_eq!(engine.state(), AnimationState::Running(ModeId::DigitWalk));
    assert_eq!(engine.current_step_count(), 1);
}

#[test]
fn forged_tickets_are_stale() {
    let (mut engine, mut surface) = setup(origin_config());
    engine.start_mode(ModeId::DigitWalk);
    let epoch = engine.epoch();

    let queued = engine.scheduler_mut().pop_due().unwrap();

    let wrong_mode = FrameTicket {
        kind: FrameKind::Step(ModeId::RotatingArm),
        ..queued
    };
    let blank_while_running = FrameTicket {
        kind: FrameKind::Blank,
        ..queued
    };
    let future = FrameTicket {
        epoch: SessionEpoch(epoch.0 + 1),
        ..queued
    };
    let unrequested = FrameTicket {
        seq: queued.seq + 1,
        ..queued
    };
    for ticket in [wrong_mode, blank_while_running, future, unrequested] {
        assert_eq!(engine.on_frame(ticket, &mut surface), FrameOutcome::Stale);
    }
    assert!(surface.is_empty());
    assert_eq!(engine.current_step_count(), 0);

    // The genuine ticket is still honored.
    assert_eq!(
        engine.on_frame(queued, &mut surface),
        FrameOutcome::Rendered { step: 0 }
    );
}

#[test]
fn duplicate_delivery_runs_the_frame_once() {
    let (mut engine, mut surface) = setup(origin_config());
    engine.start_mode(ModeId::DigitWalk);

    let ticket = engine.scheduler_mut().pop_due().unwrap();
    assert_eq!(
        engine.on_frame(ticket, &mut surface),
        FrameOutcome::Rendered { step: 0 }
    );
    let before = engine.debug_info();
    let draws = surface.len();
    assert_eq!(engine.on_frame(ticket, &mut surface), FrameOutcome::Stale);
    assert_eq!(engine.debug_info(), before);
    assert_eq!(surface.len(), draws);

    // The loop does not fork: one request, one frame per refresh.
    assert_eq!(engine.scheduler().len(), 1);
    assert_eq!(engine.run_refresh(&mut surface), 1);
    assert_eq!(engine.scheduler().len(), 1);
    assert_eq!(engine.current_step_count(), 2);
}

#[test]
fn restarting_the_running_mode_starts_over() {
    let (mut engine, mut surface) = setup(origin_config());
    engine.start_mode(ModeId::DigitWalk);
    run(&mut engine, &mut surface, 5);
    let first_epoch = engine.epoch();

    engine.start_mode(ModeId::DigitWalk);
    assert!(engine.epoch() > first_epoch);
    assert_eq!(engine.current_step_count(), 0);
    assert!(engine.trail().is_empty());

    run(&mut engine, &mut surface, 1);
    assert_eq!(positions(&engine), [Point::ZERO, Point::new(3.0, 0.0)]);
}

#[test]
fn clear_stops_resets_and_blanks() {
    let (mut engine, mut surface) = setup(origin_config());
    engine.start_mode(ModeId::RotatingArm);
    run(&mut engine, &mut surface, 4);
    engine.zoom_at(Point::new(10.0, 10.0), 1.0);
    engine.set_speed(3.0).unwrap();

    engine.clear();
    assert_eq!(engine.state(), AnimationState::Idle);
    assert_eq!(engine.current_step_count(), 0);
    assert!(engine.trail().is_empty());
    assert_eq!(engine.current_scale(), 1.0);
    assert_eq!(engine.speed(), 3.0);

    surface.clear_draws();
    assert_eq!(engine.run_refresh(&mut surface), 1);
    let ops: Vec<_> = surface.draws().map(|d| (d.transform, d.op.clone())).collect();
    assert_eq!(
        ops,
        [(
            Affine::IDENTITY,
            SurfaceOp::FillRect {
                rect: surface.bounds(),
                color: engine.config().palette.background,
            }
        )]
    );
    assert_eq!(engine.run_refresh(&mut surface), 0);
}

#[test]
fn frame_draws_in_order_with_view_transform() {
    let (mut engine, mut surface) = setup(origin_config());
    engine.zoom_at(Point::ZERO, 1.0);
    let view = engine.viewport().affine();
    engine.start_mode(ModeId::RotatingArm);
    run(&mut engine, &mut surface, 2);

    let draws: Vec<_> = surface.draws().cloned().collect();
    let second_frame = &draws[draws.len() / 2..];
    let palette = engine.config().palette;

    // Fade in screen space first.
    assert_eq!(second_frame[0].transform, Affine::IDENTITY);
    assert!(matches!(
        second_frame[0].op,
        SurfaceOp::FillRect { color, .. } if color == palette.fade
    ));

    // Trail and markers in logical space, widths compensated for zoom.
    match &second_frame[1].op {
        SurfaceOp::StrokePolyline { points, width, .. } => {
            assert_eq!(points.len(), 2);
            assert!((width - 2.0 / 1.1).abs() < 1e-12);
        }
        other => panic!("expected trail polyline, got {other:?}"),
    }
    for draw in &second_frame[1..7] {
        assert_eq!(draw.transform, view);
    }

    // Overlay text in screen space.
    let texts: Vec<_> = second_frame[7..]
        .iter()
        .map(|d| {
            assert_eq!(d.transform, Affine::IDENTITY);
            match &d.op {
                SurfaceOp::Text { text, origin, .. } => (text.clone(), *origin),
                other => panic!("expected text, got {other:?}"),
            }
        })
        .collect();
    assert_eq!(
        texts,
        [
            ("ω₂ / ω₁ ≈ e = 2.718282".to_owned(), Point::new(10.0, 20.0)),
            ("Zoom: 1.10x".to_owned(), Point::new(10.0, 40.0)),
            ("Step: 1".to_owned(), Point::new(10.0, 60.0)),
        ]
    );
}

#[test]
fn speed_change_applies_to_the_next_frame() {
    let (mut engine, mut surface) = setup(origin_config());
    engine.start_mode(ModeId::DigitWalk);
    run(&mut engine, &mut surface, 1);
    engine.set_speed(2.0).unwrap();
    run(&mut engine, &mut surface, 1);

    // Step 1 reads digit 7 (north-west) at twice the step size.
    assert_eq!(
        positions(&engine),
        [Point::ZERO, Point::new(3.0, 0.0), Point::new(-3.0, -6.0)]
    );
    assert!(engine.set_speed(0.0).is_err());
    assert_eq!(engine.speed(), 2.0);
}

#[test]
fn max_speed_runs_stay_finite() {
    let config = origin_config();
    let (mut engine, mut surface) = setup(config);
    assert!(engine.set_speed(f64::MAX).is_err());
    assert!(engine.set_speed(config.max_speed * 1.5).is_err());
    engine.set_speed(config.max_speed).unwrap();

    for mode in [ModeId::RotatingArm, ModeId::DigitWalk] {
        engine.start_mode(mode);
        run(&mut engine, &mut surface, 5_000);
        assert_eq!(engine.current_step_count(), 5_000);
        assert!(engine.trail().positions().all(|p| p.is_finite()));
    }
}

#[test]
fn trail_respects_configured_capacity() {
    let mut config = origin_config();
    config.set_trail_len(ModeId::RotatingArm, 5).unwrap();
    let (mut engine, mut surface) = setup(config);
    engine.start_mode(ModeId::RotatingArm);
    run(&mut engine, &mut surface, 20);

    assert_eq!(engine.trail().len(), 5);
    let info = engine.debug_info().trail;
    assert_eq!(info.total_appended, 20);
    assert_eq!(info.evicted, 15);

    let mut unbounded = origin_config();
    unbounded.set_capacity(ModeId::DigitWalk, TrailCapacity::Unbounded);
    let (mut engine, mut surface) = setup(unbounded);
    engine.start_mode(ModeId::DigitWalk);
    run(&mut engine, &mut surface, 2_500);
    assert_eq!(engine.trail().len(), 2_501);
}

#[test]
fn runs_are_bit_identical() {
    let trace = |mode| {
        let (mut engine, mut surface) = setup(EngineConfig::default());
        engine.start_mode(mode);
        run(&mut engine, &mut surface, 300);
        engine
            .trail()
            .positions()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect::<Vec<_>>()
    };
    for mode in [ModeId::RotatingArm, ModeId::DigitWalk] {
        assert_eq!(trace(mode), trace(mode));
    }
}
