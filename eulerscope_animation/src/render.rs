// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame drawing helpers.
//!
//! Logical-space helpers expect the viewport transform to be installed and
//! divide pixel sizes by the current scale so strokes keep a constant
//! on-screen width at any zoom level.

use alloc::format;
use alloc::string::String;

use eulerscope_generators::{Marker, MarkerRole, Readout, SampleMeta};
use eulerscope_surface::{FontSpec, RenderSurface};
use eulerscope_trail::TrailSnapshot;
use kurbo::Point;
use peniko::Color;
use peniko::color::{AlphaColor, Hsl, Srgb};
use smallvec::SmallVec;

use crate::config::Palette;

/// Left edge of overlay text, in screen pixels.
pub const OVERLAY_X: f64 = 10.0;
/// Baseline of the first overlay line, in screen pixels.
pub const OVERLAY_TOP: f64 = 20.0;
/// Distance between overlay baselines, in screen pixels.
pub const OVERLAY_LINE_HEIGHT: f64 = 20.0;

/// Fully saturated, mid-lightness color at `hue` degrees.
#[must_use]
pub fn hue_color(hue: f64) -> Color {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "hues are small angles; f32 precision is plenty for a color"
    )]
    let hue = (hue % 360.0) as f32;
    AlphaColor::<Hsl>::new([hue, 100.0, 50.0, 1.0]).convert::<Srgb>()
}

/// Color used for a marker of the given role.
#[must_use]
pub fn role_color(palette: &Palette, role: MarkerRole) -> Color {
    match role {
        MarkerRole::Link | MarkerRole::Pivot | MarkerRole::Joint => palette.linkage,
        MarkerRole::Tip => palette.tip,
        MarkerRole::Head => palette.head,
    }
}

/// Strokes the whole trail as one polyline.
///
/// The color follows the hue of the newest point when it has one.
pub(crate) fn draw_trail(
    surface: &mut (impl RenderSurface + ?Sized),
    trail: TrailSnapshot<'_, SampleMeta>,
    palette: &Palette,
    width_px: f64,
    scale: f64,
) {
    if trail.len() < 2 {
        return;
    }
    let color = trail
        .last()
        .and_then(|p| p.meta.hue)
        .map_or(palette.trail, hue_color);
    surface.stroke_polyline(&mut trail.positions(), color, width_px / scale);
}

/// Draws generator markers in logical space.
pub(crate) fn draw_markers(
    surface: &mut (impl RenderSurface + ?Sized),
    markers: &[Marker],
    palette: &Palette,
    scale: f64,
) {
    for marker in markers {
        match *marker {
            Marker::Segment {
                from,
                to,
                width_px,
                role,
            } => surface.stroke_line(from, to, role_color(palette, role), width_px / scale),
            Marker::Dot {
                center,
                radius_px,
                role,
            } => surface.fill_circle(center, radius_px / scale, role_color(palette, role)),
        }
    }
}

/// Builds the overlay lines: mode readouts, then zoom, then step.
pub(crate) fn overlay_lines(readouts: &[Readout], scale: f64, step: u64) -> SmallVec<[String; 4]> {
    let mut lines: SmallVec<[String; 4]> = readouts.iter().map(|r| format!("{r}")).collect();
    lines.push(format!("Zoom: {scale:.2}x"));
    lines.push(format!("Step: {step}"));
    lines
}

/// Draws overlay lines in screen space, one per row from the top left.
pub(crate) fn draw_overlay(
    surface: &mut (impl RenderSurface + ?Sized),
    lines: &[String],
    color: Color,
) {
    let font = FontSpec::default();
    let mut y = OVERLAY_TOP;
    for line in lines {
        surface.draw_text(line, Point::new(OVERLAY_X, y), color, font);
        y += OVERLAY_LINE_HEIGHT;
    }
}
