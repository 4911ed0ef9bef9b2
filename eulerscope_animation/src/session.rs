// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use eulerscope_generators::AnyGenerator;

/// A selectable visualization mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeId {
    /// Two-link arm with angular velocity ratio e.
    RotatingArm,
    /// Walk steered by the digits of e.
    DigitWalk,
}

/// Identifier of one animation run.
///
/// Bumped on every start and clear. Frames carry the epoch they were
/// scheduled under and are ignored once it is no longer current.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SessionEpoch(pub u64);

impl SessionEpoch {
    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// What a scheduled frame is for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// Advance and draw the given mode.
    Step(ModeId),
    /// Paint the idle background once.
    Blank,
}

/// Token handed to the frame scheduler and returned when the frame fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameTicket {
    /// Epoch the frame was scheduled under.
    pub epoch: SessionEpoch,
    /// Work the frame was scheduled for.
    pub kind: FrameKind,
    /// Request number, unique per controller. Only the most recent request
    /// is honored, so a ticket delivered twice runs at most once.
    pub seq: u64,
}

/// Controller state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// No mode is active.
    #[default]
    Idle,
    /// The given mode owns the render loop.
    Running(ModeId),
}

/// What happened when a frame was delivered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A step was generated and drawn; `step` is the counter value used.
    Rendered {
        /// Step counter consumed by the frame.
        step: u64,
    },
    /// The idle background was painted.
    Blanked,
    /// The ticket belonged to a superseded session or was already
    /// delivered; nothing was touched.
    Stale,
}

/// State of the running mode.
#[derive(Clone, Debug)]
pub(crate) struct Session {
    pub(crate) epoch: SessionEpoch,
    pub(crate) mode: ModeId,
    pub(crate) step: u64,
    /// Built on the first frame, once the surface size is known.
    pub(crate) generator: Option<AnyGenerator>,
}

impl Session {
    pub(crate) fn new(epoch: SessionEpoch, mode: ModeId) -> Self {
        Self {
            epoch,
            mode,
            step: 0,
            generator: None,
        }
    }

    /// Returns `true` if `ticket` was scheduled by this session.
    pub(crate) fn owns(&self, ticket: FrameTicket) -> bool {
        ticket.epoch == self.epoch && ticket.kind == FrameKind::Step(self.mode)
    }
}
