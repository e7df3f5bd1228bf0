// SPDX-License-Identifier: MPL-2.0
//! Review record decoded from an external JSON payload.

use crate::error::Result;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Highest rating a review can carry; used to render star rows.
pub const MAX_RATING: i32 = 5;

/// A user review.
///
/// Field names follow the payload (`first_name`, `avatar_url`, ...). Only field
/// presence is enforced; values are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review text.
    pub text: String,
    /// Creation time, verbatim from the payload.
    pub created: String,
    pub first_name: String,
    pub last_name: String,
    /// Any JSON integer; see [`Review::clamped_rating`] for display.
    pub rating: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_urls: Option<Vec<String>>,
}

impl Review {
    /// Decodes a single review.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Decode`] when the payload is not valid JSON
    /// or a required field is missing.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a JSON array of reviews.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Decode`] if any element fails to decode.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// "First Last", without stray whitespace when a part is empty.
    #[must_use]
    pub fn author_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Photo URLs attached to the review; empty when the payload has none.
    #[must_use]
    pub fn photo_urls(&self) -> &[String] {
        self.photo_urls.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn photo_url(&self, index: usize) -> Option<&str> {
        self.photo_urls().get(index).map(String::as_str)
    }

    /// Creation time parsed as RFC 3339, when the payload uses that format.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.created.trim()).ok()
    }

    /// Rating clamped to `0..=MAX_RATING`.
    #[must_use]
    pub fn clamped_rating(&self) -> i32 {
        i32::try_from(self.rating.clamp(0, i64::from(MAX_RATING))).unwrap_or(MAX_RATING)
    }
}
