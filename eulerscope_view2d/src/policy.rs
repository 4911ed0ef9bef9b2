// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Wheel zoom step factors and scale limits.
///
/// The defaults zoom by 10% per wheel notch and keep the scale within
/// `[0.1, 10.0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomPolicy {
    /// Multiplier applied for a positive zoom direction.
    pub zoom_in_factor: f64,
    /// Multiplier applied for a non-positive zoom direction.
    pub zoom_out_factor: f64,
    /// Smallest scale a zoom may produce.
    pub min_scale: f64,
    /// Largest scale a zoom may produce.
    pub max_scale: f64,
}

impl ZoomPolicy {
    /// Default zoom-in step.
    pub const DEFAULT_ZOOM_IN: f64 = 1.1;
    /// Default zoom-out step.
    pub const DEFAULT_ZOOM_OUT: f64 = 0.9;
    /// Default lower scale bound.
    pub const DEFAULT_MIN_SCALE: f64 = 0.1;
    /// Default upper scale bound.
    pub const DEFAULT_MAX_SCALE: f64 = 10.0;

    /// Returns the factor for a wheel direction.
    ///
    /// Only a strictly positive direction zooms in.
    #[must_use]
    pub fn factor_for(&self, direction: f64) -> f64 {
        if direction > 0.0 {
            self.zoom_in_factor
        } else {
            self.zoom_out_factor
        }
    }

    /// Returns `true` if `scale` is inside the configured range.
    #[must_use]
    pub fn admits(&self, scale: f64) -> bool {
        scale >= self.min_scale && scale <= self.max_scale
    }

    /// Checks that the factors and limits describe a usable policy.
    ///
    /// The identity scale `1.0` must be admitted, since that is where every
    /// reset lands.
    pub fn validate(&self) -> Result<(), ZoomPolicyError> {
        let finite = [
            self.zoom_in_factor,
            self.zoom_out_factor,
            self.min_scale,
            self.max_scale,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ZoomPolicyError::NonFinite);
        }
        if self.zoom_in_factor <= 1.0 {
            return Err(ZoomPolicyError::ZoomInFactor(self.zoom_in_factor));
        }
        if self.zoom_out_factor <= 0.0 || self.zoom_out_factor >= 1.0 {
            return Err(ZoomPolicyError::ZoomOutFactor(self.zoom_out_factor));
        }
        if self.min_scale <= 0.0 || !self.admits(1.0) {
            return Err(ZoomPolicyError::ScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        Ok(())
    }
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self {
            zoom_in_factor: Self::DEFAULT_ZOOM_IN,
            zoom_out_factor: Self::DEFAULT_ZOOM_OUT,
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
        }
    }
}

/// Reasons a [`ZoomPolicy`] is unusable.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ZoomPolicyError {
    /// A factor or limit is NaN or infinite.
    #[error("zoom policy contains a non-finite value")]
    NonFinite,
    /// The zoom-in factor does not enlarge.
    #[error("zoom-in factor must be greater than 1, got {0}")]
    ZoomInFactor(f64),
    /// The zoom-out factor is not in `(0, 1)`.
    #[error("zoom-out factor must be in (0, 1), got {0}")]
    ZoomOutFactor(f64),
    /// The scale range is empty, non-positive, or excludes `1.0`.
    #[error("scale range [{min}, {max}] must be positive and contain 1.0")]
    ScaleRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
}

/// Result of a zoom request.
///
/// Rejection is not an error: it only reports that the transform was left
/// untouched because the new scale would have left the allowed range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomOutcome {
    /// Scale and offset were updated.
    Applied,
    /// The request was ignored.
    Rejected,
}

/// Pointer cursor the host should show over the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Idle: the surface can be grabbed.
    #[default]
    Grab,
    /// A pan gesture is in progress.
    Grabbing,
}
