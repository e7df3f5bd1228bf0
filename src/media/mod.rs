// SPDX-License-Identifier: MPL-2.0
//! Photo decoding and loading.

pub mod image;
pub mod loader;

pub use image::{placeholder, ImageData};
pub use loader::{ImageLoader, NetworkImageLoader};
