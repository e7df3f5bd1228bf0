// SPDX-License-Identifier: MPL-2.0
//! Full-screen photo review modal.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (controller: load, dismiss, event routing)
//!     ├── navbar      - Close button and title
//!     └── photo_view  - Zoomable surface (ui::photo_view)
//! ```

pub mod component;
pub mod navbar;

pub use component::{Effect, LoadToken, Message, State, ViewerSettings};
