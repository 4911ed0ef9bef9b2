// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan state helper: turn pointer positions into viewport offsets.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`PanState::begin`] with the pointer position and
//!    the viewport's current offset. This records the grab anchor.
//! 2) On each move, call [`PanState::update`] to get the offset that keeps the
//!    grabbed point under the pointer.
//! 3) End the gesture with [`PanState::end`].
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use eulerscope_view2d::PanState;
//!
//! let mut pan = PanState::default();
//! pan.begin(Point::new(10.0, 20.0), Vec2::new(5.0, 5.0));
//! assert!(pan.is_panning());
//!
//! let offset = pan.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(offset, Vec2::new(10.0, 10.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks an in-progress drag-to-pan gesture.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct PanState {
    /// Pointer position minus the offset at the time the gesture began.
    pub anchor: Option<Vec2>,
}

impl PanState {
    /// Start a gesture at `pos` while the viewport sits at `offset`.
    ///
    /// Starting again while already panning re-anchors at the new position.
    pub fn begin(&mut self, pos: Point, offset: Vec2) {
        self.anchor = Some(pos.to_vec2() - offset);
    }

    /// Returns the offset for pointer position `pos`, or `None` when no
    /// gesture is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let anchor = self.anchor?;
        Some(pos.to_vec2() - anchor)
    }

    /// End the gesture. Safe to call when not panning.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Returns `true` while a gesture is active.
    pub fn is_panning(&self) -> bool {
        self.anchor.is_some()
    }
}
