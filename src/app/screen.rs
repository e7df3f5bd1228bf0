// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ReviewCard,
    /// Full-screen photo modal over the card.
    PhotoReview,
}
