// SPDX-License-Identifier: MPL-2.0
//! Domain records, independent of the UI layer.

pub mod review;

pub use review::Review;
