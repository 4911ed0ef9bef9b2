// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host input routing.
//!
//! Hosts translate their native events into [`InputEvent`] values with
//! positions in surface coordinates (CSS pixels in a browser) and feed them
//! to [`AnimationController::handle_input`]. Viewport changes apply
//! immediately and are picked up by the next frame.

use eulerscope_timing::FrameScheduler;
use eulerscope_view2d::ZoomOutcome;
use kurbo::Point;

use crate::controller::AnimationController;
use crate::error::ControlError;
use crate::session::{FrameTicket, ModeId};

/// A user command, usually bound to a button or slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Start (or restart) a mode.
    Start(ModeId),
    /// Stop and blank the surface.
    Clear,
    /// Restore the identity view.
    ResetView,
    /// Change the speed multiplier.
    SetSpeed(f64),
}

/// An input event in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse wheel or trackpad scroll over the surface.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Vertical scroll delta; positive scrolls down and zooms out.
        delta_y: f64,
    },
    /// Primary pointer pressed.
    PointerDown {
        /// Pointer position.
        position: Point,
    },
    /// Pointer moved.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// Pointer released.
    PointerUp {
        /// Pointer position.
        position: Point,
    },
    /// Pointer left the surface.
    PointerLeave,
    /// A user command.
    Command(Command),
}

/// Maps a wheel delta to a zoom direction: scrolling down zooms out.
#[must_use]
pub fn wheel_direction(delta_y: f64) -> f64 {
    if delta_y > 0.0 { -1.0 } else { 1.0 }
}

impl<S: FrameScheduler<FrameTicket>> AnimationController<S> {
    /// Routes one input event.
    ///
    /// Only [`Command::SetSpeed`] can fail; a refused command changes
    /// nothing.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<(), ControlError> {
        match event {
            InputEvent::Wheel { position, delta_y } => {
                self.zoom_at(position, wheel_direction(delta_y));
            }
            InputEvent::PointerDown { position } => self.view_mut().begin_pan(position),
            InputEvent::PointerMove { position } => self.view_mut().continue_pan(position),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => self.view_mut().end_pan(),
            InputEvent::Command(command) => return self.apply_command(command),
        }
        Ok(())
    }

    /// Runs a user command.
    pub fn apply_command(&mut self, command: Command) -> Result<(), ControlError> {
        match command {
            Command::Start(mode) => self.start_mode(mode),
            Command::Clear => self.clear(),
            Command::ResetView => self.reset_view(),
            Command::SetSpeed(speed) => self.set_speed(speed)?,
        }
        Ok(())
    }

    /// Zooms one step around `anchor` (surface coordinates).
    ///
    /// Zoom requests that would leave the configured scale range are
    /// ignored and reported as [`ZoomOutcome::Rejected`].
    pub fn zoom_at(&mut self, anchor: Point, direction: f64) -> ZoomOutcome {
        let outcome = self.view_mut().zoom_at(anchor, direction);
        if outcome == ZoomOutcome::Rejected {
            tracing::trace!(scale = self.current_scale(), "zoom out of range");
        }
        outcome
    }
}
