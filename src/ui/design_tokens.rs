// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the screens.
//!
//! Spacing follows an 8px grid; sizes and type scale are in logical pixels.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);

    /// Filled rating star.
    pub const STAR_ON: Color = Color::from_rgb(0.98, 0.71, 0.12);
    /// Empty rating star.
    pub const STAR_OFF: Color = Color::from_rgb(0.75, 0.75, 0.75);
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    /// Maximum width of the review card column.
    pub const CARD_MAX_WIDTH: f32 = 560.0;
}

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}
