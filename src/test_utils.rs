// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float and rectangle comparisons.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use iced::{Point, Rectangle, Size, Vector};

/// Epsilon for geometry values that are computed through a few divisions.
pub const GEOMETRY_EPSILON: f32 = 1e-3;

/// Asserts two rectangles are equal component-wise within [`GEOMETRY_EPSILON`].
#[track_caller]
pub fn assert_rect_eq(actual: Rectangle, expected: Rectangle) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = GEOMETRY_EPSILON);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = GEOMETRY_EPSILON);
    assert_abs_diff_eq!(actual.width, expected.width, epsilon = GEOMETRY_EPSILON);
    assert_abs_diff_eq!(actual.height, expected.height, epsilon = GEOMETRY_EPSILON);
}

#[track_caller]
pub fn assert_vector_eq(actual: Vector, expected: Vector) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = GEOMETRY_EPSILON);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = GEOMETRY_EPSILON);
}

#[must_use]
pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(width, height))
}
