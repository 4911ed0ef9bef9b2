// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eulerscope Animation: the single-active-animation controller.
//!
//! [`AnimationController`] ties the other Eulerscope crates together. It owns
//! the trail, the view transform, the running mode and its step counter, and
//! draws one frame per scheduler callback onto any
//! [`RenderSurface`](eulerscope_surface::RenderSurface).
//!
//! At most one mode runs at a time. Every [`start_mode`] and [`clear`]
//! advances a [`SessionEpoch`]; scheduled frames carry the epoch they were
//! requested under, and a frame whose epoch is no longer current is dropped
//! without touching any state. Cancelling the previous frame request is
//! attempted too, but the epoch check is what guarantees that two modes never
//! interleave.
//!
//! Each step frame:
//! 1. Lays a translucent fade over the whole surface.
//! 2. Installs the view transform and asks the mode's generator for the next
//!    point, given the step counter, speed and previous point.
//! 3. Appends the point to the trail and strokes the trail, then the
//!    generator's markers, at constant pixel widths.
//! 4. Draws the text overlay in screen space and requests the next frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use eulerscope_animation::{AnimationController, EngineConfig, FrameOutcome, ModeId};
//! use eulerscope_surface::{RecordingSurface, Size};
//!
//! let mut engine = AnimationController::with_queue(EngineConfig::default()).unwrap();
//! let mut surface = RecordingSurface::new(Size::new(800.0, 600.0));
//!
//! engine.start_mode(ModeId::DigitWalk);
//! for _ in 0..10 {
//!     engine.run_refresh(&mut surface);
//! }
//! assert_eq!(engine.current_step_count(), 10);
//! // Seed point plus one point per frame.
//! assert_eq!(engine.trail().len(), 11);
//!
//! // Switching modes makes every outstanding frame of the old one stale.
//! let ticket = engine.scheduler_mut().pop_due().unwrap();
//! engine.start_mode(ModeId::RotatingArm);
//! assert_eq!(engine.on_frame(ticket, &mut surface), FrameOutcome::Stale);
//! ```
//!
//! [`start_mode`]: AnimationController::start_mode
//! [`clear`]: AnimationController::clear
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod error;
mod input;
mod render;
mod session;

pub use config::{
    Anchor, DEFAULT_MAX_SPEED, DIGIT_WALK_TRAIL_LEN, DigitWalkConfig, EngineConfig, Palette,
    ROTATING_ARM_TRAIL_LEN, RotatingArmConfig,
};
pub use controller::{AnimationController, ControllerDebugInfo};
pub use error::{ConfigError, ControlError};
pub use input::{Command, InputEvent, wheel_direction};
pub use render::{OVERLAY_LINE_HEIGHT, OVERLAY_TOP, OVERLAY_X, hue_color, role_color};
pub use session::{AnimationState, FrameKind, FrameOutcome, FrameTicket, ModeId, SessionEpoch};
