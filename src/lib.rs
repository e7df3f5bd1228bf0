// SPDX-License-Identifier: MPL-2.0
//! `photo_review` is a full-screen, zoomable photo viewer for user reviews,
//! built with the Iced GUI framework.
//!
//! A review (author, rating, date, text and photo URLs) is shown as a card;
//! each photo opens in a modal where it can be zoomed by double tap, pinch
//! or mouse wheel and panned while zoomed. Photos are fetched over HTTP(S)
//! or read from disk, and a placeholder is shown when loading fails.

#![doc(html_root_url = "https://docs.rs/photo_review/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
