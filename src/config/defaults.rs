// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom scale at which the photo is aspect-fitted into the viewport.
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Default maximum zoom scale (pinch and double tap).
pub const DEFAULT_MAX_ZOOM_SCALE: f32 = 3.0;

/// Upper bound accepted for a configured maximum zoom scale.
pub const MAX_ZOOM_SCALE_LIMIT: f32 = 10.0;

/// Scale multiplier applied per wheel line (wheel stands in for pinch).
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;

/// Two scales closer than this are treated as equal.
pub const ZOOM_SCALE_EPSILON: f32 = 1e-4;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default maximum delay between the two taps of a double tap.
pub const DEFAULT_DOUBLE_TAP_THRESHOLD_MS: u64 = 350;

/// Minimum accepted double-tap threshold.
pub const MIN_DOUBLE_TAP_THRESHOLD_MS: u64 = 100;

/// Maximum accepted double-tap threshold.
pub const MAX_DOUBLE_TAP_THRESHOLD_MS: u64 = 1000;

/// Maximum distance in logical pixels between the two taps of a double tap.
pub const DOUBLE_TAP_SLOP: f32 = 20.0;

/// Quiet period after the last wheel event that ends a wheel zoom.
pub const WHEEL_ZOOM_SETTLE_MS: u64 = 150;

/// Interval of the tick that settles wheel zooms.
pub const GESTURE_TICK_MS: u64 = 50;

/// Duration of the zoom played after a double tap.
pub const ZOOM_ANIMATION_MS: u64 = 300;

/// Duration of the fade played before the photo modal closes.
pub const DISMISS_FADE_MS: u64 = 200;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Height of the navigation bar hosting the dismiss button.
pub const NAV_BAR_HEIGHT: f32 = 48.0;

/// Default window width.
pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;

/// Default window height.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// User agent sent with photo requests.
pub const USER_AGENT: &str = concat!("PhotoReview/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed for a photo request.
pub const MAX_REDIRECTS: usize = 10;

/// Largest photo body accepted from the network or disk (32 MiB).
pub const MAX_PHOTO_BYTES: u64 = 32 * 1024 * 1024;
