// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native mouse, touch and keyboard events are only needed while the photo
//! modal is open; the review card relies on regular widget interaction.

use super::{Message, Screen};
use crate::config::defaults::GESTURE_TICK_MS;
use crate::ui::photo_review;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes raw input to the photo modal while it is shown.
///
/// Events are forwarded whatever their capture status: the locked
/// scrollable never captures input, and the close button sits outside the
/// surface, where presses are ignored by gesture recognition.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::PhotoReview => event::listen_with(|event, _status, _window_id| {
            if matches!(
                event,
                event::Event::Mouse(_) | event::Event::Touch(_) | event::Event::Keyboard(_)
            ) {
                Some(Message::PhotoReview(photo_review::Message::RawEvent(event)))
            } else {
                None
            }
        }),
        Screen::ReviewCard => Subscription::none(),
    }
}

/// Periodic tick settling wheel zooms, active only while one is pending.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(Duration::from_millis(GESTURE_TICK_MS))
            .map(|at| Message::PhotoReview(photo_review::Message::Tick(at)))
    } else {
        Subscription::none()
    }
}

/// Animation frames for the double-tap zoom and the closing fade.
pub fn create_frame_subscription(needs_frames: bool) -> Subscription<Message> {
    if needs_frames {
        window::frames().map(|at| Message::PhotoReview(photo_review::Message::Frame(at)))
    } else {
        Subscription::none()
    }
}
