// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and its mapping onto Iced themes.

use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Backdrop of the photo surface in light mode.
const LIGHT_SURFACE: Color = Color::WHITE;

/// Backdrop of the photo surface in dark mode.
const DARK_SURFACE: Color = Color::from_rgb(0.06, 0.06, 0.07);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Iced theme matching this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Background color behind the photo.
    #[must_use]
    pub fn surface_color(self) -> Color {
        if self.is_dark() {
            DARK_SURFACE
        } else {
            LIGHT_SURFACE
        }
    }
}
