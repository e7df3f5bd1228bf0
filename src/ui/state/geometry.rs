// SPDX-License-Identifier: MPL-2.0
//! Layout geometry of the zoomable photo surface.
//!
//! All functions are pure and work in logical pixels. "Content" coordinates
//! are relative to the scrollable content (the zoomed image plus centering
//! padding); "viewport" coordinates are relative to the visible surface.

use iced::{Point, Rectangle, Size, Vector};

/// Aspect-fits `image` inside `viewport` and centers the result.
///
/// The returned rectangle keeps the image aspect ratio and touches the
/// viewport on at least one axis. Degenerate sizes yield the full viewport.
#[must_use]
pub fn aspect_fit(image: Size, viewport: Size) -> Rectangle {
    let full = Rectangle::new(Point::ORIGIN, viewport);
    if !is_usable(image) || !is_usable(viewport) {
        return full;
    }

    let image_aspect = image.width / image.height;
    let viewport_aspect = viewport.width / viewport.height;

    let fitted = if image_aspect > viewport_aspect {
        Size::new(viewport.width, viewport.width / image_aspect)
    } else {
        Size::new(viewport.height * image_aspect, viewport.height)
    };

    Rectangle::new(centered_origin(fitted, viewport), fitted)
}

/// Rectangle of the displayed image that fills the viewport once scaled by
/// `scale`, centered on `location`.
#[must_use]
pub fn zoom_rect(location: Point, displayed: Size, scale: f32) -> Rectangle {
    let size = Size::new(displayed.width / scale, displayed.height / scale);
    Rectangle::new(
        Point::new(location.x - size.width / 2.0, location.y - size.height / 2.0),
        size,
    )
}

/// Origin that centers `content` inside `bounds`, axis by axis.
///
/// An axis where the content is at least as large as the bounds gets 0 and
/// is scrolled instead.
#[must_use]
pub fn centered_origin(content: Size, bounds: Size) -> Point {
    Point::new(
        center_axis(content.width, bounds.width),
        center_axis(content.height, bounds.height),
    )
}

fn center_axis(content: f32, bounds: f32) -> f32 {
    if content < bounds {
        (bounds - content) / 2.0
    } else {
        0.0
    }
}

/// Largest scroll offset for `content` shown through `viewport`.
#[must_use]
pub fn max_offset(content: Size, viewport: Size) -> Vector {
    Vector::new(
        (content.width - viewport.width).max(0.0),
        (content.height - viewport.height).max(0.0),
    )
}

/// Clamps `offset` to `[0, max_offset]` on both axes.
#[must_use]
pub fn clamp_offset(offset: Vector, content: Size, viewport: Size) -> Vector {
    let max = max_offset(content, viewport);
    Vector::new(
        clamp_axis(offset.x, max.x),
        clamp_axis(offset.y, max.y),
    )
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        0.0
    }
}

/// Scale at which `rect` fills `viewport` without overflowing either axis.
#[must_use]
pub fn scale_to_fill(rect: Size, viewport: Size) -> Option<f32> {
    if !is_usable(rect) || !is_usable(viewport) {
        return None;
    }
    Some((viewport.width / rect.width).min(viewport.height / rect.height))
}

fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
