// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::pan::PanState;
use crate::policy::{CursorHint, ZoomOutcome, ZoomPolicy};

/// Uniform scale + translation mapping logical coordinates to screen pixels.
///
/// `ViewTransform` owns the pan/zoom state for a drawing surface. It can be
/// used to:
/// - Zoom around the cursor in response to wheel input.
/// - Pan in response to pointer drags.
/// - Convert points between logical and screen coordinates.
#[derive(Clone, Debug)]
pub struct ViewTransform {
    scale: f64,
    offset: Vec2,
    policy: ZoomPolicy,
    pan: PanState,
}

impl ViewTransform {
    /// Creates an identity transform governed by `policy`.
    #[must_use]
    pub fn new(policy: ZoomPolicy) -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            policy,
            pan: PanState::default(),
        }
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current translation in screen pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the zoom policy.
    #[must_use]
    pub fn policy(&self) -> ZoomPolicy {
        self.policy
    }

    /// Replaces the zoom policy.
    ///
    /// The current transform is kept even if its scale falls outside the new
    /// range; later zoom requests are judged against the new limits.
    pub fn set_policy(&mut self, policy: ZoomPolicy) {
        self.policy = policy;
    }

    /// Zooms one wheel step around `anchor`, given in screen coordinates.
    ///
    /// A positive `direction` zooms in; anything else zooms out. If the
    /// resulting scale would leave the policy range, nothing changes and
    /// [`ZoomOutcome::Rejected`] is returned. Otherwise the offset is moved
    /// so that the logical point under `anchor` stays under `anchor`.
    pub fn zoom_at(&mut self, anchor: Point, direction: f64) -> ZoomOutcome {
        let factor = self.policy.factor_for(direction);
        let new_scale = self.scale * factor;
        if !self.policy.admits(new_scale) {
            return ZoomOutcome::Rejected;
        }
        let anchor = anchor.to_vec2();
        self.offset = anchor - (anchor - self.offset) * factor;
        self.scale = new_scale;
        ZoomOutcome::Applied
    }

    /// Starts a pan gesture at `pos` (screen coordinates).
    pub fn begin_pan(&mut self, pos: Point) {
        self.pan.begin(pos, self.offset);
    }

    /// Moves the view so the point grabbed in [`Self::begin_pan`] follows
    /// `pos`. Has no effect unless a pan is active.
    pub fn continue_pan(&mut self, pos: Point) {
        if let Some(offset) = self.pan.update(pos) {
            self.offset = offset;
        }
    }

    /// Ends the pan gesture, if any.
    pub fn end_pan(&mut self) {
        self.pan.end();
    }

    /// Returns `true` while a pan gesture is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// Returns the cursor the host should display.
    #[must_use]
    pub fn cursor_hint(&self) -> CursorHint {
        if self.pan.is_panning() {
            CursorHint::Grabbing
        } else {
            CursorHint::Grab
        }
    }

    /// Restores the identity transform and drops any active pan gesture.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset = Vec2::ZERO;
        self.pan.end();
    }

    /// Converts a logical point into screen coordinates.
    #[must_use]
    pub fn to_screen(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.offset).to_point()
    }

    /// Converts a screen point into logical coordinates.
    #[must_use]
    pub fn to_logical(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Returns the logical → screen mapping as an affine transform.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Returns the logical rectangle visible through a screen rectangle.
    #[must_use]
    pub fn visible_logical_rect(&self, screen: Rect) -> Rect {
        Rect::from_points(
            self.to_logical(screen.origin()),
            self.to_logical(Point::new(screen.x1, screen.y1)),
        )
    }

    /// Logical units covered by one screen pixel.
    ///
    /// Useful for stroke widths and marker radii that should stay a fixed
    /// number of pixels wide regardless of zoom.
    #[must_use]
    pub fn logical_units_per_pixel(&self) -> f64 {
        1.0 / self.scale
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            scale: self.scale,
            offset: self.offset,
            policy: self.policy,
            panning: self.pan.is_panning(),
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(ZoomPolicy::default())
    }
}

/// Debug snapshot of a [`ViewTransform`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransformDebugInfo {
    /// Current uniform scale.
    pub scale: f64,
    /// Current translation in screen pixels.
    pub offset: Vec2,
    /// Zoom factors and limits.
    pub policy: ZoomPolicy,
    /// Whether a pan gesture is active.
    pub panning: bool,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::ViewTransform;
    use crate::{CursorHint, ZoomOutcome, ZoomPolicy};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn logical_screen_roundtrip() {
        let mut view = ViewTransform::default();
        view.zoom_at(Point::new(120.0, 80.0), 1.0);
        view.begin_pan(Point::new(0.0, 0.0));
        view.continue_pan(Point::new(-37.0, 12.0));

        let logical = Point::new(10.0, -5.0);
        let back = view.to_logical(view.to_screen(logical));
        assert!(close(back, logical));
    }

    #[test]
    fn zoom_keeps_cursor_point_fixed() {
        let mut view = ViewTransform::default();
        let cursor = Point::new(400.0, 300.0);
        let before = view.to_logical(cursor);

        assert_eq!(view.zoom_at(cursor, 1.0), ZoomOutcome::Applied);
        assert!((view.scale() - 1.1).abs() < 1e-12);
        assert!(close(view.to_logical(cursor), before));

        assert_eq!(view.zoom_at(cursor, -1.0), ZoomOutcome::Applied);
        assert!(close(view.to_logical(cursor), before));
    }

    #[test]
    fn zoom_offset_matches_closed_form() {
        let mut view = ViewTransform::default();
        view.zoom_at(Point::new(100.0, 50.0), 1.0);
        // offset = anchor - (anchor - 0) * 1.1
        assert!((view.offset().x - -10.0).abs() < 1e-9);
        assert!((view.offset().y - -5.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_zoom_is_a_no_op() {
        let mut view = ViewTransform::default();
        let cursor = Point::new(13.0, 7.0);
        let mut applied = 0;
        while view.zoom_at(cursor, 1.0) == ZoomOutcome::Applied {
            applied += 1;
        }
        // 1.1^24 ≈ 9.85, 1.1^25 ≈ 10.83.
        assert_eq!(applied, 24);
        let scale = view.scale();
        let offset = view.offset();

        assert_eq!(view.zoom_at(cursor, 1.0), ZoomOutcome::Rejected);
        assert_eq!(view.scale(), scale);
        assert_eq!(view.offset(), offset);
    }

    #[test]
    fn zoom_out_stops_above_minimum() {
        let mut view = ViewTransform::default();
        for _ in 0..100 {
            view.zoom_at(Point::new(5.0, 5.0), -1.0);
        }
        assert!(view.scale() >= 0.1);
        assert!(view.scale() < 0.12);
    }

    #[test]
    fn pan_moves_offset_only() {
        let mut view = ViewTransform::default();
        view.zoom_at(Point::ZERO, 1.0);
        let scale = view.scale();

        view.begin_pan(Point::new(10.0, 10.0));
        assert_eq!(view.cursor_hint(), CursorHint::Grabbing);
        view.continue_pan(Point::new(30.0, 5.0));
        assert_eq!(view.offset(), Vec2::new(20.0, -5.0));
        assert_eq!(view.scale(), scale);

        view.end_pan();
        assert_eq!(view.cursor_hint(), CursorHint::Grab);
        view.continue_pan(Point::new(100.0, 100.0));
        assert_eq!(view.offset(), Vec2::new(20.0, -5.0));
    }

    #[test]
    fn reset_restores_identity() {
        let mut view = ViewTransform::default();
        view.zoom_at(Point::new(3.0, 9.0), 1.0);
        view.begin_pan(Point::ZERO);
        view.continue_pan(Point::new(4.0, 4.0));

        view.reset();
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.offset(), Vec2::ZERO);
        assert!(!view.is_panning());
        let p = Point::new(-12.25, 7.5);
        assert_eq!(view.to_screen(p), p);
        assert_eq!(view.to_logical(p), p);
    }

    #[test]
    fn affine_agrees_with_to_screen() {
        let mut view = ViewTransform::default();
        view.zoom_at(Point::new(50.0, 60.0), 1.0);
        view.zoom_at(Point::new(10.0, 60.0), 1.0);
        let p = Point::new(7.0, -3.0);
        assert!(close(view.affine() * p, view.to_screen(p)));
    }

    #[test]
    fn visible_rect_and_pixel_size_follow_scale() {
        let mut view = ViewTransform::new(ZoomPolicy::default());
        let screen = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(view.visible_logical_rect(screen), screen);

        view.zoom_at(Point::ZERO, 1.0);
        let visible = view.visible_logical_rect(screen);
        assert!((visible.width() - 800.0 / 1.1).abs() < 1e-9);
        assert!((view.logical_units_per_pixel() - 1.0 / 1.1).abs() < 1e-12);

        let info = view.debug_info();
        assert!(!info.panning);
        assert_eq!(info.policy, ZoomPolicy::default());
    }
}
