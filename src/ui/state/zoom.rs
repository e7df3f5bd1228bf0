// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! Scale limits of the photo surface and the explicit zoom lifecycle that
//! replaces zoom delegate callbacks.

pub use crate::config::{
    DEFAULT_MAX_ZOOM_SCALE, MAX_ZOOM_SCALE_LIMIT, MIN_ZOOM_SCALE, ZOOM_SCALE_EPSILON,
};

/// Minimum and maximum zoom scale, with `min <= max` guaranteed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    min: f32,
    max: f32,
}

impl ZoomLimits {
    /// Creates limits, clamping `max` to `[min, MAX_ZOOM_SCALE_LIMIT]`.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        let min = if min.is_finite() && min > 0.0 {
            min
        } else {
            MIN_ZOOM_SCALE
        };
        let max = if max.is_finite() {
            max.clamp(min, MAX_ZOOM_SCALE_LIMIT.max(min))
        } else {
            DEFAULT_MAX_ZOOM_SCALE.max(min)
        };
        Self { min, max }
    }

    /// Limits with the default minimum and the given maximum.
    #[must_use]
    pub fn with_max(max: f32) -> Self {
        Self::new(MIN_ZOOM_SCALE, max)
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    #[must_use]
    pub fn clamp(self, scale: f32) -> f32 {
        if scale.is_finite() {
            scale.clamp(self.min, self.max)
        } else {
            self.min
        }
    }

    /// Whether `scale` is at (or numerically indistinguishable from) the minimum.
    #[must_use]
    pub fn is_min(self, scale: f32) -> bool {
        scale <= self.min + ZOOM_SCALE_EPSILON
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::with_max(DEFAULT_MAX_ZOOM_SCALE)
    }
}

/// Where the surface is in a zoom interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomPhase {
    /// No zoom has happened since the image was set.
    #[default]
    Idle,
    /// A zoom interaction is in progress.
    Zooming,
    /// The last zoom interaction has ended.
    Settled,
}

/// Zoom lifecycle events.
///
/// Every zoom mechanic of the surface funnels through these three hooks so
/// that recentering and pan enabling live in exactly one place.
pub trait ZoomObserver {
    /// A zoom interaction is about to start.
    fn zoom_will_begin(&mut self);

    /// The scale changed; the observer should recompute layout.
    fn zoom_did_change(&mut self);

    /// The zoom interaction ended at `scale`.
    fn zoom_did_end(&mut self, scale: f32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_limits_match_viewer_defaults() {
        let limits = ZoomLimits::default();
        assert_abs_diff_eq!(limits.min(), 1.0);
        assert_abs_diff_eq!(limits.max(), 3.0);
    }

    #[test]
    fn max_is_clamped_into_valid_range() {
        assert_abs_diff_eq!(ZoomLimits::with_max(0.5).max(), 1.0);
        assert_abs_diff_eq!(ZoomLimits::with_max(50.0).max(), MAX_ZOOM_SCALE_LIMIT);
        assert_abs_diff_eq!(ZoomLimits::with_max(f32::NAN).max(), DEFAULT_MAX_ZOOM_SCALE);
    }

    #[test]
    fn clamp_keeps_scale_within_limits() {
        let limits = ZoomLimits::with_max(3.0);
        assert_abs_diff_eq!(limits.clamp(0.2), 1.0);
        assert_abs_diff_eq!(limits.clamp(2.0), 2.0);
        assert_abs_diff_eq!(limits.clamp(7.0), 3.0);
        assert_abs_diff_eq!(limits.clamp(f32::INFINITY), 1.0);
    }

    #[test]
    fn is_min_tolerates_rounding() {
        let limits = ZoomLimits::default();
        assert!(limits.is_min(1.0));
        assert!(limits.is_min(1.0 + ZOOM_SCALE_EPSILON / 2.0));
        assert!(!limits.is_min(1.01));
    }

    #[test]
    fn phase_starts_idle() {
        assert_eq!(ZoomPhase::default(), ZoomPhase::Idle);
    }
}
