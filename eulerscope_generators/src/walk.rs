// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::smallvec;

use crate::digits::euler_digit;
use crate::{Generated, Marker, MarkerRole, PointGenerator, Readout, Readouts, Sample, SampleMeta};

/// Step directions indexed by digit, screen axes (y grows downward).
///
/// Digits 0–7 go clockwise around the compass starting at north; 8 and 9
/// stand still.
const DIRECTIONS: [Vec2; 10] = [
    Vec2::new(0.0, -1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(-1.0, -1.0),
    Vec2::ZERO,
    Vec2::ZERO,
];

/// Returns the step direction for a decimal digit.
///
/// Diagonals are not normalized, so diagonal steps cover √2 times the
/// distance of axis-aligned ones.
///
/// # Panics
///
/// Panics if `digit > 9`.
#[must_use]
pub fn step_direction(digit: u8) -> Vec2 {
    DIRECTIONS[usize::from(digit)]
}

/// Walk whose direction at step `t` is chosen by the `t`-th digit of e.
///
/// Each step moves the previous point by `direction * step_size * speed`.
/// With no previous point the walk starts from `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DigitWalk {
    /// Distance of an axis-aligned step at speed 1.
    pub step_size: f64,
    /// Starting point, in logical coordinates.
    pub origin: Point,
}

impl DigitWalk {
    /// Degrees of hue between consecutive digits.
    pub const HUE_PER_DIGIT: f64 = 36.0;

    /// Returns the walk starting from `origin`.
    #[must_use]
    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }
}

impl Default for DigitWalk {
    fn default() -> Self {
        Self {
            step_size: 3.0,
            origin: Point::ZERO,
        }
    }
}

impl PointGenerator for DigitWalk {
    fn generate(&self, step: u64, speed: f64, prior: Option<&Sample>) -> Generated {
        let (_, digit) = euler_digit(step);
        let from = prior.map_or(self.origin, |p| p.position);
        let position = from + step_direction(digit) * (self.step_size * speed);
        let meta = SampleMeta {
            hue: Some(f64::from(digit) * Self::HUE_PER_DIGIT),
        };
        Generated {
            sample: Sample::with_meta(position, meta),
            markers: smallvec![Marker::Dot {
                center: position,
                radius_px: 3.0,
                role: MarkerRole::Head,
            }],
        }
    }

    fn seed(&self) -> Option<Sample> {
        Some(Sample::new(self.origin))
    }

    fn readouts(&self, step: u64) -> Readouts {
        let (idx, digit) = euler_digit(step);
        smallvec![Readout::DigitIndex(idx), Readout::Digit(digit)]
    }
}
