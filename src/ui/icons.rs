// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are compiled in with `include_bytes!` and their handles cached in a
//! `OnceLock`, so building a view never re-parses the document.

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(xmark, "xmark.svg", "Cross used by the close button.");

/// Gives an icon a square size.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
