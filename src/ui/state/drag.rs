// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Pan interaction state for moving a zoomed photo around.

use iced::{Point, Vector};

#[derive(Debug, Clone, Default)]
pub struct DragState {
    pub is_dragging: bool,

    /// Pointer position where the drag started.
    pub start_position: Option<Point>,

    /// Content offset when the drag started.
    pub start_offset: Option<Vector>,
}

impl DragState {
    pub fn start(&mut self, position: Point, offset: Vector) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Unclamped content offset for the pointer at `current_position`.
    ///
    /// Content moves with the pointer, so the offset moves against it.
    #[must_use]
    pub fn offset_for(&self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;
        Some(start_offset - (current_position - start_pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(state.offset_for(Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn stop_clears_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));
        state.stop();

        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
        assert!(state.start_offset.is_none());
    }

    #[test]
    fn offset_moves_against_pointer() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), Vector::new(50.0, 30.0));

        // Pointer moved left/up by 20: content follows, offset grows.
        let offset = state.offset_for(Point::new(180.0, 130.0));
        assert_eq!(offset, Some(Vector::new(70.0, 50.0)));

        // Dragging far right may go negative; callers clamp.
        let offset = state.offset_for(Point::new(400.0, 150.0));
        assert_eq!(offset, Some(Vector::new(-150.0, 30.0)));
    }
}
