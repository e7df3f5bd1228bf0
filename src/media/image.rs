// SPDX-License-Identifier: MPL-2.0
//! Decoded image data and the bundled placeholder photo.

use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::GenericImageView;
use resvg::usvg;
use std::sync::OnceLock;

const PLACEHOLDER_SVG: &[u8] = include_bytes!("../../assets/placeholder_photo.svg");

/// Fallback size used when the placeholder SVG cannot be rasterized.
const PLACEHOLDER_FALLBACK_SIZE: (u32, u32) = (400, 300);
const PLACEHOLDER_FALLBACK_GRAY: u8 = 0xC8;

static PLACEHOLDER: OnceLock<ImageData> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Logical size used by the layout geometry.
    #[must_use]
    pub fn size(&self) -> Size {
        #[allow(clippy::cast_precision_loss)]
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Decodes encoded image bytes. SVG documents are rasterized at their
/// intrinsic size; everything else goes through the `image` crate.
///
/// # Errors
///
/// Returns [`Error::Decode`] for unsupported or corrupt raster data and
/// [`Error::Svg`] when an SVG cannot be parsed or rendered.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    if looks_like_svg(bytes) {
        return rasterize_svg(bytes);
    }

    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has empty dimensions".into()));
    }
    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

/// Rasterizes an SVG document into RGBA pixels.
///
/// # Errors
///
/// Returns [`Error::Svg`] if parsing fails, the document has zero size, or
/// the pixmap cannot be allocated.
pub fn rasterize_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(ImageData::from_rgba(width, height, pixmap.take()))
}

/// The bundled placeholder shown when a photo cannot be loaded.
///
/// Rendered once and shared afterwards. Never fails: if the bundled SVG
/// cannot be rasterized, a flat gray image of the same size is used.
#[must_use]
pub fn placeholder() -> ImageData {
    PLACEHOLDER
        .get_or_init(|| {
            rasterize_svg(PLACEHOLDER_SVG).unwrap_or_else(|err| {
                tracing::warn!(%err, "placeholder SVG failed to render");
                let (width, height) = PLACEHOLDER_FALLBACK_SIZE;
                let gray = image_rs::RgbaImage::from_pixel(
                    width,
                    height,
                    image_rs::Rgba([
                        PLACEHOLDER_FALLBACK_GRAY,
                        PLACEHOLDER_FALLBACK_GRAY,
                        PLACEHOLDER_FALLBACK_GRAY,
                        255,
                    ]),
                );
                ImageData::from_rgba(width, height, gray.into_vec())
            })
        })
        .clone()
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let trimmed = text.trim_start_matches('\u{feff}').trim_start();
    trimmed.starts_with("<svg") || (trimmed.starts_with("<?xml") && text.contains("<svg"))
}
