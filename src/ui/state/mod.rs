// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure state and geometry used by the photo surface, kept apart from the
//! widgets so it can be tested without a renderer.

pub mod drag;
pub mod geometry;
pub mod zoom;

pub use drag::DragState;
pub use zoom::{ZoomLimits, ZoomObserver, ZoomPhase};
