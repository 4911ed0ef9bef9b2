// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eulerscope Surface: the drawing interface the animation core renders into.
//!
//! The core never talks to a concrete graphics API. Instead it drives a
//! [`RenderSurface`]: a small, immediate-mode set of primitives (rects,
//! lines, arcs, circles, text) plus a current transform. Hosts implement the
//! trait over whatever they render with, for example a 2D canvas context or
//! a CPU rasterizer.
//!
//! # Coordinate spaces
//!
//! Geometry is interpreted through the transform last set with
//! [`RenderSurface::set_transform`]. [`RenderSurface::reset_transform`]
//! returns to the identity, i.e. raw surface pixels, which is what fixed
//! overlays (text, full-surface fades) are drawn in.
//!
//! [`RenderSurface::dimensions`] reports the drawable size in those same
//! identity-space units (CSS pixels for a canvas, not device pixels).
//!
//! # Recording
//!
//! [`RecordingSurface`] implements the trait by logging every call together
//! with the transform that was active. It is intended for tests and debugging
//! that want to assert on emitted operations; it does not rasterize.
//!
//! ```rust
//! use kurbo::{Affine, Point, Size};
//! use peniko::Color;
//! use eulerscope_surface::{RecordingSurface, RenderSurface, SurfaceOp};
//!
//! let mut surface = RecordingSurface::new(Size::new(800.0, 600.0));
//! surface.set_transform(Affine::scale(2.0));
//! surface.fill_circle(Point::new(1.0, 1.0), 3.0, Color::WHITE);
//!
//! let draw = surface.draws().next().unwrap();
//! assert_eq!(draw.transform, Affine::scale(2.0));
//! assert!(matches!(draw.op, SurfaceOp::FillCircle { .. }));
//! ```

#![no_std]

extern crate alloc;

mod recording;

pub use kurbo::{Affine, Point, Rect, Size};
pub use peniko::Color;
pub use recording::{RecordedDraw, RecordingSurface, SurfaceOp};

/// Font family for overlay text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// A fixed-width face.
    #[default]
    Monospace,
    /// A proportional sans-serif face.
    SansSerif,
}

/// Font selection for [`RenderSurface::draw_text`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    /// Family.
    pub family: FontFamily,
    /// Size in pixels.
    pub size_px: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: FontFamily::Monospace,
            size_px: 14.0,
        }
    }
}

/// Immediate-mode drawing target.
///
/// All methods take geometry in the coordinate space of the current
/// transform. Widths and radii are in those units too; callers that want a
/// constant on-screen size divide by the current scale.
pub trait RenderSurface {
    /// Drawable size in identity-transform units.
    fn dimensions(&self) -> Size;

    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Return to the identity transform.
    #[inline]
    fn reset_transform(&mut self) {
        self.set_transform(Affine::IDENTITY);
    }

    /// Fill a rectangle. Colors with alpha blend over existing content.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64);

    /// Stroke a connected path through `points`, in order.
    ///
    /// The default implementation strokes one segment per consecutive pair.
    /// Backends with native path support should override this so joins are
    /// rendered properly and the path is submitted in one call.
    fn stroke_polyline(&mut self, points: &mut dyn Iterator<Item = Point>, color: Color, width: f64) {
        let Some(mut prev) = points.next() else {
            return;
        };
        for next in points {
            self.stroke_line(prev, next, color, width);
            prev = next;
        }
    }

    /// Stroke a full circle outline.
    fn stroke_arc(&mut self, center: Point, radius: f64, color: Color, width: f64);

    /// Fill a disc.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Draw a single line of text with its baseline-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, color: Color, font: FontSpec);
}

/// Convenience helpers layered on [`RenderSurface`].
pub trait RenderSurfaceExt: RenderSurface {
    /// The full drawable area as a rectangle at the origin.
    #[inline]
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.dimensions())
    }

    /// Center of the drawable area.
    #[inline]
    fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Fill the whole surface in identity space, leaving the identity
    /// transform active.
    fn fill_all(&mut self, color: Color) {
        self.reset_transform();
        let bounds = self.bounds();
        self.fill_rect(bounds, color);
    }

    /// Run `f` with `transform` active, restoring the identity afterwards.
    ///
    /// Note: if `f` panics, the transform is not restored.
    #[inline]
    fn with_transform<R>(&mut self, transform: Affine, f: impl FnOnce(&mut Self) -> R) -> R {
        self.set_transform(transform);
        let out = f(self);
        self.reset_transform();
        out
    }
}

impl<T: RenderSurface + ?Sized> RenderSurfaceExt for T {}
