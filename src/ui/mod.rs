// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns a `State`, consumes its own `Message` and reports outcomes to
//! the application through an `Effect`.
//!
//! # Screens
//!
//! - [`review_card`] - Review summary with buttons opening each photo
//! - [`photo_review`] - Full-screen modal with a navigation bar and the photo
//!
//! # Shared Infrastructure
//!
//! - [`photo_view`] - Zoomable, pannable photo surface and gesture recognition
//! - [`state`] - Reusable zoom, drag and fitting geometry
//! - [`widgets`] - Custom Iced widgets
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod icons;
pub mod photo_review;
pub mod photo_view;
pub mod review_card;
pub mod state;
pub mod theming;
pub mod widgets;
