// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Digit walk basics.
//!
//! Step the digits-of-e walk by hand, without a controller, and print where
//! each digit sends it.
//!
//! Run:
//! - `cargo run -p eulerscope_demos --example digit_walk_basics`

use eulerscope_generators::{DigitWalk, PointGenerator, euler_digit};
use eulerscope_trail::{TrailBuffer, TrailCapacity};
use kurbo::Point;

fn main() {
    let walk = DigitWalk::default().with_origin(Point::new(0.0, 0.0));
    let mut trail = TrailBuffer::new(TrailCapacity::finite(8).unwrap());
    if let Some(seed) = walk.seed() {
        trail.append(seed);
    }

    for step in 0..12 {
        let (index, digit) = euler_digit(step);
        let generated = walk.generate(step, 1.0, trail.last());
        let p = generated.sample.position;
        println!(
            "step {step:2}: digit[{index}] = {digit} -> ({:5.1}, {:5.1}) hue {:?}",
            p.x, p.y, generated.sample.meta.hue
        );
        trail.append(generated.sample);
    }

    let info = trail.debug_info();
    println!(
        "kept {} of {} points ({} evicted)",
        info.len, info.total_appended, info.evicted
    );
}
