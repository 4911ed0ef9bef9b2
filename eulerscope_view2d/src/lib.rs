// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eulerscope View 2D: the viewport transform between logical drawing
//! coordinates and screen pixels.
//!
//! The transform is a similarity with a uniform scale and a translation:
//!
//! ```text
//! screen  = logical * scale + offset
//! logical = (screen - offset) / scale
//! ```
//!
//! It focuses on:
//! - Cursor-anchored wheel zoom with a bounded scale.
//! - Drag panning (see [`PanState`]).
//! - Coordinate conversion in both directions.
//!
//! It does **not** own any scene or rendering backend. Callers are expected
//! to feed pointer and wheel input in, and hand [`ViewTransform::affine`] to
//! whatever surface they draw on.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use eulerscope_view2d::{ViewTransform, ZoomOutcome};
//!
//! let mut view = ViewTransform::default();
//!
//! // Zoom in around the cursor at (400, 300).
//! let cursor = Point::new(400.0, 300.0);
//! let before = view.to_logical(cursor);
//! assert_eq!(view.zoom_at(cursor, 1.0), ZoomOutcome::Applied);
//! let after = view.to_logical(cursor);
//! assert!((before - after).hypot() < 1e-9);
//!
//! // Drag the view 10px to the right.
//! view.begin_pan(Point::new(0.0, 0.0));
//! view.continue_pan(Point::new(10.0, 0.0));
//! view.end_pan();
//!
//! view.reset();
//! assert_eq!(view.to_screen(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
//! ```
//!
//! ## Design notes
//!
//! - Zoom requests whose result would leave the configured scale range are
//!   rejected outright; the transform is left exactly as it was rather than
//!   clamped. Wheel gestures arrive continuously, so silently stopping at the
//!   edge is the expected behavior.
//! - Rotation and shear are not supported.
//!
//! This crate is `no_std`.

#![no_std]

mod pan;
mod policy;
mod viewport;

pub use pan::PanState;
pub use policy::{CursorHint, ZoomOutcome, ZoomPolicy, ZoomPolicyError};
pub use viewport::{ViewTransform, ViewTransformDebugInfo};
