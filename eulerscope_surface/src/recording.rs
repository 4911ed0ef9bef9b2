// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;

use crate::{FontSpec, RenderSurface};

/// A single drawing call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// [`RenderSurface::fill_rect`].
    FillRect {
        /// Rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`RenderSurface::stroke_line`].
    StrokeLine {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// [`RenderSurface::stroke_polyline`].
    StrokePolyline {
        /// Vertices in order.
        points: Vec<Point>,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// [`RenderSurface::stroke_arc`].
    StrokeArc {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// [`RenderSurface::fill_circle`].
    FillCircle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// [`RenderSurface::draw_text`].
    Text {
        /// The string drawn.
        text: String,
        /// Baseline-left origin.
        origin: Point,
        /// Text color.
        color: Color,
        /// Font.
        font: FontSpec,
    },
}

/// A drawing call plus the transform that was active when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedDraw {
    /// The call.
    pub op: SurfaceOp,
    /// Transform at the time of the call.
    pub transform: Affine,
}

/// Surface that records calls instead of rasterizing.
///
/// This surface:
/// - Reports a fixed, settable size,
/// - Tracks the current transform,
/// - Logs every draw call with that transform, in order,
/// - Counts transform changes so tests can check state hygiene.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    transform: Affine,
    draws: Vec<RecordedDraw>,
    transform_changes: usize,
}

impl RecordingSurface {
    /// Creates an empty recording with the given drawable size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            transform: Affine::IDENTITY,
            draws: Vec::new(),
            transform_changes: 0,
        }
    }

    /// Changes the reported size, as a host would on window resize.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Returns the transform currently in effect.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns every recorded draw, oldest first.
    pub fn draws(&self) -> impl Iterator<Item = &RecordedDraw> {
        self.draws.iter()
    }

    /// Returns how many draws have been recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    /// Returns `true` if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Returns how many times the transform was set or reset.
    #[must_use]
    pub fn transform_changes(&self) -> usize {
        self.transform_changes
    }

    /// Returns the text of every [`SurfaceOp::Text`] draw, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.draws.iter().filter_map(|d| match &d.op {
            SurfaceOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Drops all recorded draws but keeps size and transform.
    pub fn clear_draws(&mut self) {
        self.draws.clear();
        self.transform_changes = 0;
    }

    fn record(&mut self, op: SurfaceOp) {
        self.draws.push(RecordedDraw {
            op,
            transform: self.transform,
        });
    }
}

impl RenderSurface for RecordingSurface {
    fn dimensions(&self) -> Size {
        self.size
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.transform_changes += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(SurfaceOp::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.record(SurfaceOp::StrokeLine {
            from,
            to,
            color,
            width,
        });
    }

    fn stroke_polyline(&mut self, points: &mut dyn Iterator<Item = Point>, color: Color, width: f64) {
        let points: Vec<Point> = points.collect();
        self.record(SurfaceOp::StrokePolyline {
            points,
            color,
            width,
        });
    }

    fn stroke_arc(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        self.record(SurfaceOp::StrokeArc {
            center,
            radius,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.record(SurfaceOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Color, font: FontSpec) {
        self.record(SurfaceOp::Text {
            text: text.to_string(),
            origin,
            color,
            font,
        });
    }
}
