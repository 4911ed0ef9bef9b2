// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

/// What a marker depicts; renderers map roles to colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    /// An arm link.
    Link,
    /// The fixed pivot of the arm.
    Pivot,
    /// The elbow between the two links.
    Joint,
    /// The arm tip, i.e. the point being traced.
    Tip,
    /// The current head of a walk.
    Head,
}

/// Per-frame decoration in logical coordinates.
///
/// Sizes are in screen pixels so they stay the same on screen regardless of
/// zoom; the renderer divides them by the current scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Marker {
    /// A straight segment.
    Segment {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke width in pixels.
        width_px: f64,
        /// What the segment depicts.
        role: MarkerRole,
    },
    /// A filled dot.
    Dot {
        /// Center.
        center: Point,
        /// Radius in pixels.
        radius_px: f64,
        /// What the dot depicts.
        role: MarkerRole,
    },
}

/// A line of overlay text describing the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Readout {
    /// Ratio of the arm's angular velocities.
    RatioToE(f64),
    /// Position in the digit table.
    DigitIndex(usize),
    /// Digit driving the current walk step.
    Digit(u8),
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RatioToE(ratio) => write!(f, "ω₂ / ω₁ ≈ e = {ratio:.6}"),
            Self::DigitIndex(idx) => write!(f, "Digit index: {idx}"),
            Self::Digit(d) => write!(f, "Digit: {d}"),
        }
    }
}
