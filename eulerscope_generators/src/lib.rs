// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eulerscope Generators: deterministic point sources driven by e.
//!
//! A generator turns a step counter into the next point of an animation
//! trail. Generators are pure: the output depends only on the step, the speed
//! multiplier, and the previous point, so replaying a step sequence
//! reproduces the same trail bit for bit.
//!
//! Two variants are provided:
//! - [`RotatingArm`]: the tip of a two-link arm whose second joint turns e
//!   times as fast as the first.
//! - [`DigitWalk`]: a walk whose direction at step `t` is picked by the `t`-th
//!   decimal digit of e.
//!
//! [`AnyGenerator`] dispatches over both so a controller can hold "whichever
//! mode is active" by value.
//!
//! Besides the new point, a generator reports the [`Marker`]s that decorate
//! the current frame (arm segments, joints, the walk head) and the
//! [`Readout`]s for the text overlay. Generators never draw, and never touch
//! the trail or the viewport themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use eulerscope_generators::{DigitWalk, PointGenerator};
//!
//! let walk = DigitWalk::default();
//! // Step 0 reads the digit 2, which steps east.
//! let out = walk.generate(0, 1.0, None);
//! assert_eq!(out.sample.position, Point::new(3.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod arm;
mod digits;
mod marker;
mod walk;

use eulerscope_trail::TrailPoint;
use smallvec::SmallVec;

pub use arm::RotatingArm;
pub use digits::{E_DIGITS, euler_digit};
pub use marker::{Marker, MarkerRole, Readout};
pub use walk::{DigitWalk, step_direction};

/// Metadata attached to every generated point.
///
/// The trail carries this without looking at it; renderers may use it to pick
/// colors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleMeta {
    /// Display hue in degrees, when the generator derives one.
    pub hue: Option<f64>,
}

/// A generated point with its metadata.
pub type Sample = TrailPoint<SampleMeta>;

/// Markers for one frame. Five covers the rotating arm without spilling.
pub type Markers = SmallVec<[Marker; 5]>;

/// Overlay readouts for one frame.
pub type Readouts = SmallVec<[Readout; 2]>;

/// Output of a single generator step.
#[derive(Clone, Debug, PartialEq)]
pub struct Generated {
    /// The point to append to the trail.
    pub sample: Sample,
    /// Decorations for the current frame, in logical coordinates.
    pub markers: Markers,
}

/// A deterministic source of trail points.
pub trait PointGenerator {
    /// Produces the point for `step`.
    ///
    /// `speed` is a positive multiplier. `prior` is the most recent point of
    /// the trail, if any. The same inputs always yield the same output.
    fn generate(&self, step: u64, speed: f64, prior: Option<&Sample>) -> Generated;

    /// Point to place in an empty trail before the first step, if the
    /// generator walks relative to its previous output.
    fn seed(&self) -> Option<Sample> {
        None
    }

    /// Overlay readouts describing `step`.
    fn readouts(&self, step: u64) -> Readouts;
}

/// Either of the built-in generators.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyGenerator {
    /// Two-link rotating arm.
    RotatingArm(RotatingArm),
    /// Digit-driven walk.
    DigitWalk(DigitWalk),
}

impl PointGenerator for AnyGenerator {
    fn generate(&self, step: u64, speed: f64, prior: Option<&Sample>) -> Generated {
        match self {
            Self::RotatingArm(g) => g.generate(step, speed, prior),
            Self::DigitWalk(g) => g.generate(step, speed, prior),
        }
    }

    fn seed(&self) -> Option<Sample> {
        match self {
            Self::RotatingArm(g) => g.seed(),
            Self::DigitWalk(g) => g.seed(),
        }
    }

    fn readouts(&self, step: u64) -> Readouts {
        match self {
            Self::RotatingArm(g) => g.readouts(step),
            Self::DigitWalk(g) => g.readouts(step),
        }
    }
}

impl From<RotatingArm> for AnyGenerator {
    fn from(g: RotatingArm) -> Self {
        Self::RotatingArm(g)
    }
}

impl From<DigitWalk> for AnyGenerator {
    fn from(g: DigitWalk) -> Self {
        Self::DigitWalk(g)
    }
}
