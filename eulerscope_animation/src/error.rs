// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use eulerscope_view2d::ZoomPolicyError;
use thiserror::Error;

use crate::session::ModeId;

/// Reasons an [`EngineConfig`](crate::EngineConfig) is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The zoom policy is unusable.
    #[error("invalid zoom policy: {0}")]
    InvalidZoomPolicy(#[from] ZoomPolicyError),
    /// The speed ceiling is not a positive finite number.
    #[error("maximum speed must be positive and finite, got {0}")]
    InvalidMaxSpeed(f64),
    /// The initial speed multiplier is not in `(0, max_speed]`.
    #[error("initial speed must be in (0, max_speed], got {0}")]
    InvalidSpeed(f64),
    /// A trail length of zero was requested.
    #[error("trail capacity for {0:?} must be at least 1")]
    ZeroCapacity(ModeId),
    /// A generator parameter is negative, or overflows at the speed ceiling.
    #[error("{mode:?} parameter `{parameter}` is out of range, got {value}")]
    InvalidParameter {
        /// Mode whose configuration is wrong.
        mode: ModeId,
        /// Parameter name.
        parameter: &'static str,
        /// Offending value.
        value: f64,
    },
}

/// Reasons a host command is refused.
///
/// Refused commands leave the controller unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ControlError {
    /// Speed multipliers must be in `(0, max_speed]`.
    #[error("speed multiplier must be in (0, max_speed], got {0}")]
    InvalidSpeed(f64),
}
