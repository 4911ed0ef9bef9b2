// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.
//!
//! Everything here is plain data with `Default` values that reproduce the
//! stock look and feel. Nothing is loaded from disk; hosts build an
//! [`EngineConfig`] in code and the controller validates it once.

use core::num::NonZeroUsize;

use eulerscope_generators::{AnyGenerator, DigitWalk, RotatingArm};
use eulerscope_trail::TrailCapacity;
use eulerscope_view2d::ZoomPolicy;
use kurbo::Point;
use peniko::Color;

use crate::error::ConfigError;
use crate::session::ModeId;

/// Default trail length for the rotating arm.
pub const ROTATING_ARM_TRAIL_LEN: NonZeroUsize = NonZeroUsize::new(500).unwrap();

/// Default upper bound on the speed multiplier.
pub const DEFAULT_MAX_SPEED: f64 = 10.0;

/// Default trail length for the digit walk.
pub const DIGIT_WALK_TRAIL_LEN: NonZeroUsize = NonZeroUsize::new(2000).unwrap();

/// Where a generator's origin sits in logical space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Anchor {
    /// The center of the surface, measured on the first frame of a session.
    #[default]
    SurfaceCenter,
    /// A fixed logical point.
    Fixed(Point),
}

impl Anchor {
    /// Resolves the anchor against the current surface center.
    #[must_use]
    pub fn resolve(self, surface_center: Point) -> Point {
        match self {
            Self::SurfaceCenter => surface_center,
            Self::Fixed(p) => p,
        }
    }
}

/// Settings for the rotating-arm mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatingArmConfig {
    /// Arm geometry and angular velocity. The origin is replaced by the
    /// resolved [`Anchor`] when a session begins.
    pub arm: RotatingArm,
    /// Pivot placement.
    pub anchor: Anchor,
    /// Trail bound.
    pub capacity: TrailCapacity,
}

impl Default for RotatingArmConfig {
    fn default() -> Self {
        Self {
            arm: RotatingArm::default(),
            anchor: Anchor::SurfaceCenter,
            capacity: TrailCapacity::Finite(ROTATING_ARM_TRAIL_LEN),
        }
    }
}

/// Settings for the digit-walk mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DigitWalkConfig {
    /// Step size. The origin is replaced by the resolved [`Anchor`] when a
    /// session begins.
    pub walk: DigitWalk,
    /// Starting point.
    pub anchor: Anchor,
    /// Trail bound.
    pub capacity: TrailCapacity,
}

impl Default for DigitWalkConfig {
    fn default() -> Self {
        Self {
            walk: DigitWalk::default(),
            anchor: Anchor::SurfaceCenter,
            capacity: TrailCapacity::Finite(DIGIT_WALK_TRAIL_LEN),
        }
    }
}

/// Colors used by the frame renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Opaque fill used when the engine is cleared.
    pub background: Color,
    /// Translucent fill laid over the previous frame, leaving fading ghosts.
    pub fade: Color,
    /// Trail color for points without a hue.
    pub trail: Color,
    /// Arm links, pivot and joint.
    pub linkage: Color,
    /// Arm tip.
    pub tip: Color,
    /// Walk head.
    pub head: Color,
    /// Overlay text.
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            fade: Color::from_rgba8(0, 0, 0, 20),
            trail: Color::from_rgba8(0, 255, 255, 153),
            linkage: Color::from_rgb8(0, 255, 255),
            tip: Color::from_rgb8(255, 0, 255),
            head: Color::WHITE,
            text: Color::WHITE,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Wheel zoom factors and scale limits.
    pub zoom: ZoomPolicy,
    /// Rotating-arm mode.
    pub rotating_arm: RotatingArmConfig,
    /// Digit-walk mode.
    pub digit_walk: DigitWalkConfig,
    /// Speed multiplier in effect before the host changes it.
    pub initial_speed: f64,
    /// Largest speed multiplier the host may set.
    pub max_speed: f64,
    /// Trail stroke width in screen pixels.
    pub trail_width_px: f64,
    /// Colors.
    pub palette: Palette,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomPolicy::default(),
            rotating_arm: RotatingArmConfig::default(),
            digit_walk: DigitWalkConfig::default(),
            initial_speed: 1.0,
            max_speed: DEFAULT_MAX_SPEED,
            trail_width_px: 2.0,
            palette: Palette::default(),
        }
    }
}

impl EngineConfig {
    /// Sets the trail length for `mode`. Zero is rejected.
    pub fn set_trail_len(&mut self, mode: ModeId, max_len: usize) -> Result<(), ConfigError> {
        let capacity = TrailCapacity::finite(max_len).ok_or(ConfigError::ZeroCapacity(mode))?;
        self.set_capacity(mode, capacity);
        Ok(())
    }

    /// Sets the trail capacity for `mode`, including [`TrailCapacity::Unbounded`].
    pub fn set_capacity(&mut self, mode: ModeId, capacity: TrailCapacity) {
        match mode {
            ModeId::RotatingArm => self.rotating_arm.capacity = capacity,
            ModeId::DigitWalk => self.digit_walk.capacity = capacity,
        }
    }

    /// Returns the trail capacity for `mode`.
    #[must_use]
    pub fn capacity(&self, mode: ModeId) -> TrailCapacity {
        match mode {
            ModeId::RotatingArm => self.rotating_arm.capacity,
            ModeId::DigitWalk => self.digit_walk.capacity,
        }
    }

    /// Builds the generator for `mode`, anchored against `surface_center`.
    #[must_use]
    pub fn generator(&self, mode: ModeId, surface_center: Point) -> AnyGenerator {
        match mode {
            ModeId::RotatingArm => {
                let cfg = &self.rotating_arm;
                cfg.arm.with_origin(cfg.anchor.resolve(surface_center)).into()
            }
            ModeId::DigitWalk => {
                let cfg = &self.digit_walk;
                cfg.walk.with_origin(cfg.anchor.resolve(surface_center)).into()
            }
        }
    }

    /// Checks every value the controller relies on.
    ///
    /// Per-step quantities are checked against `max_speed` over the whole
    /// step range, so generator output stays finite for every speed the
    /// controller accepts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zoom.validate()?;
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(ConfigError::InvalidMaxSpeed(self.max_speed));
        }
        if !is_speed(self.initial_speed, self.max_speed) {
            return Err(ConfigError::InvalidSpeed(self.initial_speed));
        }
        let arm = &self.rotating_arm.arm;
        check(ModeId::RotatingArm, "inner_length", arm.inner_length)?;
        check(ModeId::RotatingArm, "outer_length", arm.outer_length)?;
        check(
            ModeId::RotatingArm,
            "outer_length",
            arm.inner_length + arm.outer_length,
        )?;
        let horizon = self.max_speed * STEP_HORIZON;
        check(
            ModeId::RotatingArm,
            "base_angular_velocity",
            arm.base_angular_velocity * horizon,
        )?;
        check(
            ModeId::DigitWalk,
            "step_size",
            self.digit_walk.walk.step_size * horizon,
        )?;
        Ok(())
    }
}

/// Largest step counter a session can reach.
const STEP_HORIZON: f64 = u64::MAX as f64;

pub(crate) fn is_speed(v: f64, max_speed: f64) -> bool {
    v.is_finite() && v > 0.0 && v <= max_speed
}

fn check(mode: ModeId, parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            mode,
            parameter,
            value,
        })
    }
}
