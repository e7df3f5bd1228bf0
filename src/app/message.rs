// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::photo_review;
use crate::ui::review_card;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ReviewCard(review_card::Message),
    PhotoReview(photo_review::Message),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Photo to open directly in the review modal.
    pub photo_url: Option<String>,
    /// JSON file holding the review shown on the card.
    pub review_path: Option<String>,
    /// Index of the review photo to open at startup.
    pub photo_index: Option<usize>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PHOTO_REVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
