// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::E;

use kurbo::{Point, Vec2};
use smallvec::smallvec;

use crate::{Generated, Marker, MarkerRole, PointGenerator, Readout, Readouts, Sample, SampleMeta};

/// Two-link arm whose outer link turns e times as fast as the inner one.
///
/// At step `t` with speed multiplier `s`:
///
/// ```text
/// θ₁ = ω₁·s·t
/// θ₂ = e·ω₁·s·t
/// joint = origin + L₁·(cos θ₁, sin θ₁)
/// tip   = joint  + L₂·(cos θ₂, sin θ₂)
/// ```
///
/// The traced point is the tip. Because e is irrational the curve never
/// closes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatingArm {
    /// Length of the inner link.
    pub inner_length: f64,
    /// Length of the outer link.
    pub outer_length: f64,
    /// Angular velocity of the inner link, in radians per step at speed 1.
    pub base_angular_velocity: f64,
    /// Fixed pivot, in logical coordinates.
    pub origin: Point,
}

impl RotatingArm {
    /// Ratio of outer to inner angular velocity.
    pub const VELOCITY_RATIO: f64 = E;

    /// Returns the arm with its pivot moved to `origin`.
    #[must_use]
    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    /// Returns the joint and tip positions for `step`.
    #[must_use]
    pub fn linkage(&self, step: u64, speed: f64) -> (Point, Point) {
        let omega1 = self.base_angular_velocity * speed;
        let omega2 = Self::VELOCITY_RATIO * omega1;
        let t = step as f64;
        let joint = self.origin + Vec2::from_angle(omega1 * t) * self.inner_length;
        let tip = joint + Vec2::from_angle(omega2 * t) * self.outer_length;
        (joint, tip)
    }
}

impl Default for RotatingArm {
    fn default() -> Self {
        Self {
            inner_length: 150.0,
            outer_length: 100.0,
            base_angular_velocity: 0.02,
            origin: Point::ZERO,
        }
    }
}

impl PointGenerator for RotatingArm {
    fn generate(&self, step: u64, speed: f64, _prior: Option<&Sample>) -> Generated {
        let (joint, tip) = self.linkage(step, speed);
        Generated {
            sample: Sample::with_meta(tip, SampleMeta::default()),
            markers: smallvec![
                Marker::Segment {
                    from: self.origin,
                    to: joint,
                    width_px: 3.0,
                    role: MarkerRole::Link,
                },
                Marker::Segment {
                    from: joint,
                    to: tip,
                    width_px: 3.0,
                    role: MarkerRole::Link,
                },
                Marker::Dot {
                    center: self.origin,
                    radius_px: 5.0,
                    role: MarkerRole::Pivot,
                },
                Marker::Dot {
                    center: joint,
                    radius_px: 4.0,
                    role: MarkerRole::Joint,
                },
                Marker::Dot {
                    center: tip,
                    radius_px: 6.0,
                    role: MarkerRole::Tip,
                },
            ],
        }
    }

    fn readouts(&self, _step: u64) -> Readouts {
        smallvec![Readout::RatioToE(Self::VELOCITY_RATIO)]
    }
}
