// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mode switching and stale frames.
//!
//! Run one mode, switch to the other while a frame for the first is still in
//! flight, then deliver that late frame and watch it get dropped.
//!
//! Run:
//! - `cargo run -p eulerscope_demos --example mode_switch`

use eulerscope_animation::{AnimationController, EngineConfig, ModeId};
use eulerscope_surface::{RecordingSurface, Size};

fn main() {
    let mut engine = AnimationController::with_queue(EngineConfig::default()).unwrap();
    let mut surface = RecordingSurface::new(Size::new(640.0, 480.0));

    engine.start_mode(ModeId::RotatingArm);
    for _ in 0..30 {
        engine.run_refresh(&mut surface);
    }
    println!(
        "{:?}: step {}, {} trail points",
        engine.state(),
        engine.current_step_count(),
        engine.trail().len()
    );

    // The host already dequeued the next arm frame when the user clicked.
    let late = engine.scheduler_mut().pop_due().unwrap();
    engine.start_mode(ModeId::DigitWalk);

    let outcome = engine.on_frame(late, &mut surface);
    println!("late {:?} frame from {:?}: {outcome:?}", late.kind, late.epoch);

    for _ in 0..30 {
        engine.run_refresh(&mut surface);
    }
    println!(
        "{:?}: step {}, {} trail points",
        engine.state(),
        engine.current_step_count(),
        engine.trail().len()
    );
}
