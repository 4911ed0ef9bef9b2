// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use eulerscope_generators::{Generated, PointGenerator, Sample, SampleMeta};
use eulerscope_surface::{RenderSurface, RenderSurfaceExt};
use eulerscope_timing::{FrameHandle, FrameQueue, FrameScheduler};
use eulerscope_trail::{TrailBuffer, TrailDebugInfo, TrailSnapshot};
use eulerscope_view2d::{CursorHint, ViewTransform, ViewTransformDebugInfo};

use crate::config::{EngineConfig, is_speed};
use crate::error::{ConfigError, ControlError};
use crate::render;
use crate::session::{
    AnimationState, FrameKind, FrameOutcome, FrameTicket, ModeId, Session, SessionEpoch,
};

/// Owns every piece of engine state and runs at most one animation at a time.
///
/// The controller never drives itself. Each frame is requested through the
/// [`FrameScheduler`] with a [`FrameTicket`], and the host hands the ticket
/// back to [`AnimationController::on_frame`] when the display refreshes.
/// Starting or clearing bumps the [`SessionEpoch`], so tickets from an
/// earlier session are recognised and dropped even if the scheduler already
/// dequeued them.
#[derive(Debug)]
pub struct AnimationController<S> {
    config: EngineConfig,
    view: ViewTransform,
    trail: TrailBuffer<SampleMeta>,
    session: Option<Session>,
    epoch: SessionEpoch,
    speed: f64,
    pending: Option<PendingFrame>,
    next_seq: u64,
    scheduler: S,
}

/// The one frame request the controller is waiting on.
#[derive(Clone, Copy, Debug)]
struct PendingFrame {
    handle: FrameHandle,
    seq: u64,
}

impl<S: FrameScheduler<FrameTicket>> AnimationController<S> {
    /// Validates `config` and creates an idle controller.
    ///
    /// A blank frame is requested right away so the surface starts out
    /// painted with the background color.
    pub fn new(config: EngineConfig, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut controller = Self {
            view: ViewTransform::new(config.zoom),
            trail: TrailBuffer::new(config.capacity(ModeId::RotatingArm)),
            session: None,
            epoch: SessionEpoch::default(),
            speed: config.initial_speed,
            pending: None,
            next_seq: 0,
            scheduler,
            config,
        };
        controller.schedule(FrameKind::Blank);
        Ok(controller)
    }

    /// Starts `mode`, replacing whatever was running.
    ///
    /// Starting the mode that is already running restarts it from step 0.
    /// The view transform and speed are kept.
    pub fn start_mode(&mut self, mode: ModeId) {
        self.begin_epoch();
        self.trail.clear();
        self.trail.set_capacity(self.config.capacity(mode));
        self.session = Some(Session::new(self.epoch, mode));
        tracing::debug!(epoch = self.epoch.0, ?mode, "animation started");
        self.schedule(FrameKind::Step(mode));
    }

    /// Stops any animation and returns to a blank, idle state.
    ///
    /// The trail is emptied, the view is reset, and the surface is repainted
    /// with the background on the next frame.
    pub fn clear(&mut self) {
        self.begin_epoch();
        self.trail.clear();
        self.view.reset();
        self.session = None;
        tracing::debug!(epoch = self.epoch.0, "animation cleared");
        self.schedule(FrameKind::Blank);
    }

    /// Restores scale 1 and zero offset. Does not touch the animation.
    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Sets the speed multiplier used from the next frame on.
    ///
    /// Accepts positive values up to [`EngineConfig::max_speed`].
    pub fn set_speed(&mut self, speed: f64) -> Result<(), ControlError> {
        if !is_speed(speed, self.config.max_speed) {
            return Err(ControlError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    /// Handles a frame previously requested by this controller.
    ///
    /// Tickets that no longer match the current session, or that are not the
    /// most recent request, do nothing and request nothing.
    pub fn on_frame<R>(&mut self, ticket: FrameTicket, surface: &mut R) -> FrameOutcome
    where
        R: RenderSurface + ?Sized,
    {
        if ticket.epoch != self.epoch {
            tracing::trace!(
                ticket = ticket.epoch.0,
                current = self.epoch.0,
                "dropping stale frame"
            );
            return FrameOutcome::Stale;
        }
        if self.pending.is_none_or(|p| p.seq != ticket.seq) {
            tracing::trace!(seq = ticket.seq, "dropping frame that is not awaited");
            return FrameOutcome::Stale;
        }
        match ticket.kind {
            FrameKind::Blank if self.session.is_none() => {
                self.pending = None;
                surface.fill_all(self.config.palette.background);
                FrameOutcome::Blanked
            }
            FrameKind::Step(_) if self.session.as_ref().is_some_and(|s| s.owns(ticket)) => {
                self.pending = None;
                let step = self.step(surface);
                self.schedule(ticket.kind);
                FrameOutcome::Rendered { step }
            }
            _ => {
                tracing::trace!(?ticket, "dropping frame for inactive mode");
                FrameOutcome::Stale
            }
        }
    }

    /// Number of frames rendered in the current session.
    #[must_use]
    pub fn current_step_count(&self) -> u64 {
        self.session.as_ref().map_or(0, |s| s.step)
    }

    /// Current zoom factor.
    #[must_use]
    pub fn current_scale(&self) -> f64 {
        self.view.scale()
    }

    /// The running mode, if any.
    #[must_use]
    pub fn current_mode(&self) -> Option<ModeId> {
        self.session.as_ref().map(|s| s.mode)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.current_mode()
            .map_or(AnimationState::Idle, AnimationState::Running)
    }

    /// Current session epoch.
    #[must_use]
    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }

    /// Current speed multiplier.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Read-only view of the trail, oldest point first.
    #[must_use]
    pub fn trail(&self) -> TrailSnapshot<'_, SampleMeta> {
        self.trail.snapshot()
    }

    /// Read-only view transform.
    #[must_use]
    pub fn viewport(&self) -> &ViewTransform {
        &self.view
    }

    /// Cursor the host should show over the surface.
    #[must_use]
    pub fn cursor_hint(&self) -> CursorHint {
        self.view.cursor_hint()
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler, for hosts that drain it.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Returns a snapshot of controller state for debugging and tests.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            state: self.state(),
            epoch: self.epoch,
            step: self.current_step_count(),
            speed: self.speed,
            frame_pending: self.pending.is_some(),
            trail: self.trail.debug_info(),
            view: self.view.debug_info(),
        }
    }

    pub(crate) fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    fn begin_epoch(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.scheduler.cancel_frame(pending.handle);
        }
        self.epoch = self.epoch.next();
    }

    fn schedule(&mut self, kind: FrameKind) {
        let seq = self.next_seq;
        self.next_seq = seq.wrapping_add(1);
        let ticket = FrameTicket {
            epoch: self.epoch,
            kind,
            seq,
        };
        let handle = self.scheduler.request_frame(ticket);
        self.pending = Some(PendingFrame { handle, seq });
    }

    /// Frame body for the running session. Returns the step it consumed.
    fn step<R>(&mut self, surface: &mut R) -> u64
    where
        R: RenderSurface + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            return 0;
        };
        let palette = self.config.palette;
        let scale = self.view.scale();
        let step = session.step;

        surface.fill_all(palette.fade);
        surface.set_transform(self.view.affine());

        let center = surface.center();
        let mode = session.mode;
        let config = &self.config;
        let generator = session
            .generator
            .get_or_insert_with(|| config.generator(mode, center));

        if self.trail.is_empty()
            && let Some(seed) = generator.seed()
        {
            self.trail.append(seed);
        }

        let Generated { sample, markers } = generator.generate(step, self.speed, self.trail.last());
        let readouts = generator.readouts(step);
        let valid = sample.is_finite();
        if let Some(sample) = checked_sample(sample, self.trail.last()) {
            self.trail.append(sample);
        }

        render::draw_trail(
            surface,
            self.trail.snapshot(),
            &palette,
            self.config.trail_width_px,
            scale,
        );
        if valid {
            render::draw_markers(surface, &markers, &palette, scale);
        }

        surface.reset_transform();
        let lines = render::overlay_lines(&readouts, scale, step);
        render::draw_overlay(surface, &lines, palette.text);

        tracing::trace!(epoch = session.epoch.0, step, "frame rendered");
        session.step = step.wrapping_add(1);
        step
    }
}

impl AnimationController<FrameQueue<FrameTicket>> {
    /// Creates a controller driven by an in-memory [`FrameQueue`].
    pub fn with_queue(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::new(config, FrameQueue::new())
    }

    /// Delivers every frame due at this display refresh.
    ///
    /// Frames requested while delivering wait for the next call. Returns the
    /// number of frames that did work.
    pub fn run_refresh<R>(&mut self, surface: &mut R) -> usize
    where
        R: RenderSurface + ?Sized,
    {
        let due = self.scheduler.take_due();
        due.map(|ticket| self.on_frame(ticket, surface))
            .filter(|outcome| *outcome != FrameOutcome::Stale)
            .count()
    }
}

/// Snapshot of controller state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerDebugInfo {
    /// Idle or running.
    pub state: AnimationState,
    /// Current epoch.
    pub epoch: SessionEpoch,
    /// Frames rendered in this session.
    pub step: u64,
    /// Speed multiplier.
    pub speed: f64,
    /// Whether a frame request is outstanding.
    pub frame_pending: bool,
    /// Trail bookkeeping.
    pub trail: TrailDebugInfo,
    /// View transform.
    pub view: ViewTransformDebugInfo,
}

/// Rejects non-finite generator output.
///
/// Debug builds treat it as a bug and panic. Release builds substitute the
/// last valid point and log a warning; with no valid point to fall back on
/// the sample is dropped.
pub(crate) fn checked_sample(sample: Sample, last_valid: Option<&Sample>) -> Option<Sample> {
    debug_assert!(
        sample.is_finite(),
        "generator produced a non-finite point: {:?}",
        sample.position
    );
    if sample.is_finite() {
        return Some(sample);
    }
    tracing::warn!(
        position = ?sample.position,
        "generator produced a non-finite point; reusing the last valid one"
    );
    last_valid.copied()
}
