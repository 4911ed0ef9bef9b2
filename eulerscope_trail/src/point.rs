// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// A single generated point in logical coordinates.
///
/// `meta` is opaque to the trail: it is carried along and handed back to the
/// renderer unchanged. Points are plain `Copy` values and are never mutated
/// after being appended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint<M = ()> {
    /// Position in logical (pre-viewport) coordinates.
    pub position: Point,
    /// Caller-defined metadata, such as a display hue.
    pub meta: M,
}

impl<M> TrailPoint<M> {
    /// Creates a point with explicit metadata.
    #[inline]
    pub const fn with_meta(position: Point, meta: M) -> Self {
        Self { position, meta }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
    }
}

impl<M: Default> TrailPoint<M> {
    /// Creates a point with default metadata.
    #[inline]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            meta: M::default(),
        }
    }
}
