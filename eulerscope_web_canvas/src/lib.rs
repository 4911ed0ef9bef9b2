// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML canvas 2D backend for the Eulerscope render surface.
//!
//! `CanvasSurface` implements [`eulerscope_surface::RenderSurface`] on top of
//! a `web_sys::CanvasRenderingContext2d` when targeting `wasm32`. Geometry is given in CSS pixels; the surface folds the
//! device pixel ratio into every transform it installs, so a backing store
//! sized at `css * dpr` stays sharp on high-density displays while
//! `dimensions()` keeps reporting CSS pixels.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_surface(
//!     canvas: web_sys::HtmlCanvasElement,
//!     css_width: f64,
//!     css_height: f64,
//!     dpr: f64,
//! ) -> Result<eulerscope_web_canvas::CanvasSurface, wasm_bindgen::JsValue> {
//!     let mut surface = eulerscope_web_canvas::CanvasSurface::new(canvas, dpr)?;
//!     surface.resize(kurbo::Size::new(css_width, css_height));
//!     Ok(surface)
//! }
//! ```
//!
//! The CSS helpers [`color_to_css`] and [`font_to_css`] and the
//! [`device_transform`] mapping are available on every target.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;

use eulerscope_surface::{FontFamily, FontSpec};
use kurbo::Affine;
use peniko::Color;

#[cfg(target_arch = "wasm32")]
use core::fmt;
#[cfg(target_arch = "wasm32")]
use eulerscope_surface::RenderSurface;
#[cfg(target_arch = "wasm32")]
use kurbo::{Point, Rect, Size};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Formats a color as a CSS `rgba(...)` string.
#[must_use]
pub fn color_to_css(color: Color) -> String {
    let rgba = color.to_rgba8();
    let alpha = f64::from(rgba.a) / 255.0;
    format!("rgba({}, {}, {}, {alpha})", rgba.r, rgba.g, rgba.b)
}

/// Formats a font as a CSS `font` shorthand.
#[must_use]
pub fn font_to_css(font: FontSpec) -> String {
    let family = match font.family {
        FontFamily::Monospace => "monospace",
        FontFamily::SansSerif => "sans-serif",
    };
    format!("{}px {family}", font.size_px)
}

/// Maps a transform in CSS pixels to the canvas backing store.
#[must_use]
pub fn device_transform(device_pixel_ratio: f64, transform: Affine) -> Affine {
    Affine::scale(device_pixel_ratio) * transform
}

/// Canvas 2D surface (only available on `wasm32`).
#[cfg(target_arch = "wasm32")]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    device_pixel_ratio: f64,
    size: Size,
}

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for CanvasSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasSurface")
            .field("device_pixel_ratio", &self.device_pixel_ratio)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(target_arch = "wasm32")]
impl CanvasSurface {
    /// Creates a surface for a DOM canvas element.
    ///
    /// The reported size starts out as the current backing store divided by
    /// `device_pixel_ratio`; call [`Self::resize`] whenever the element's
    /// CSS size changes.
    pub fn new(canvas: HtmlCanvasElement, device_pixel_ratio: f64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let device_pixel_ratio = if device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let size = Size::new(
            f64::from(canvas.width()) / device_pixel_ratio,
            f64::from(canvas.height()) / device_pixel_ratio,
        );
        let mut surface = Self {
            canvas,
            ctx,
            device_pixel_ratio,
            size,
        };
        surface.set_transform(Affine::IDENTITY);
        Ok(surface)
    }

    /// Resizes the backing store for a new CSS size.
    ///
    /// Resizing a canvas clears it and resets its state.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "canvas dimensions are small non-negative pixel counts"
    )]
    pub fn resize(&mut self, css_size: Size) {
        self.size = css_size;
        self.canvas
            .set_width((css_size.width * self.device_pixel_ratio + 0.5) as u32);
        self.canvas
            .set_height((css_size.height * self.device_pixel_ratio + 0.5) as u32);
        self.set_transform(Affine::IDENTITY);
    }

    /// Returns the device pixel ratio in use.
    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }
}

#[cfg(target_arch = "wasm32")]
impl RenderSurface for CanvasSurface {
    fn dimensions(&self) -> Size {
        self.size
    }

    fn set_transform(&mut self, transform: Affine) {
        let [a, b, c, d, e, f] = device_transform(self.device_pixel_ratio, transform).as_coeffs();
        let _ = self.ctx.set_transform(a, b, c, d, e, f);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color_to_css(color));
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color_to_css(color));
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn stroke_polyline(&mut self, points: &mut dyn Iterator<Item = Point>, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color_to_css(color));
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        if let Some(first) = points.next() {
            self.ctx.move_to(first.x, first.y);
            for p in points {
                self.ctx.line_to(p.x, p.y);
            }
        }
        self.ctx.stroke();
    }

    fn stroke_arc(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color_to_css(color));
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, core::f64::consts::TAU);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ctx.set_fill_style_str(&color_to_css(color));
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, core::f64::consts::TAU);
        self.ctx.fill();
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Color, font: FontSpec) {
        self.ctx.set_fill_style_str(&color_to_css(color));
        self.ctx.set_font(&font_to_css(font));
        let _ = self.ctx.fill_text(text, origin.x, origin.y);
    }
}
