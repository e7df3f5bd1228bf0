// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition for the photo surface.
//!
//! Raw Iced mouse and touch events are folded into the handful of gestures
//! the surface reacts to. Positions are surface-local: the caller passes the
//! surface origin in window coordinates and the surface size.

use crate::config::defaults::{
    DEFAULT_DOUBLE_TAP_THRESHOLD_MS, DOUBLE_TAP_SLOP, WHEEL_ZOOM_FACTOR, WHEEL_ZOOM_SETTLE_MS,
};
use iced::{mouse, touch, Event, Point, Rectangle, Size, Vector};
use std::time::{Duration, Instant};

/// Pixel scroll distance treated as one wheel line.
const PIXELS_PER_LINE: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    DoubleTap(Point),
    PanStarted(Point),
    PanMoved(Point),
    PanEnded,
    /// Multiply the scale by `factor`, keeping `anchor` fixed.
    Pinch { factor: f32, anchor: Point },
    PinchEnded,
}

#[derive(Debug, Clone)]
pub struct Tracker {
    double_tap_threshold: Duration,
    last_press: Option<(Instant, Point)>,
    cursor: Option<Point>,
    mouse_down: bool,
    panning: bool,
    fingers: Vec<(touch::Finger, Point)>,
    pinch_distance: Option<f32>,
    last_wheel: Option<Instant>,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DOUBLE_TAP_THRESHOLD_MS))
    }
}

impl Tracker {
    #[must_use]
    pub fn new(double_tap_threshold: Duration) -> Self {
        Self {
            double_tap_threshold,
            last_press: None,
            cursor: None,
            mouse_down: false,
            panning: false,
            fingers: Vec::with_capacity(2),
            pinch_distance: None,
            last_wheel: None,
        }
    }

    /// Last known cursor position, surface-local.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Whether a wheel zoom is waiting to be settled by [`Tracker::poll`].
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.last_wheel.is_some()
    }

    /// Forgets every in-flight interaction.
    pub fn reset(&mut self) {
        *self = Self::new(self.double_tap_threshold);
    }

    pub fn process(
        &mut self,
        event: &Event,
        origin: Vector,
        bounds: Size,
        now: Instant,
    ) -> Option<Gesture> {
        let area = Rectangle::new(Point::ORIGIN, bounds);
        match event {
            Event::Mouse(mouse_event) => self.process_mouse(mouse_event, origin, area, now),
            Event::Touch(touch_event) => self.process_touch(touch_event, origin, area, now),
            _ => None,
        }
    }

    /// Ends a wheel zoom once the wheel has been quiet long enough.
    pub fn poll(&mut self, now: Instant) -> Option<Gesture> {
        let last = self.last_wheel?;
        if now.saturating_duration_since(last) >= Duration::from_millis(WHEEL_ZOOM_SETTLE_MS) {
            self.last_wheel = None;
            Some(Gesture::PinchEnded)
        } else {
            None
        }
    }

    fn process_mouse(
        &mut self,
        event: &mouse::Event,
        origin: Vector,
        area: Rectangle,
        now: Instant,
    ) -> Option<Gesture> {
        match event {
            mouse::Event::CursorMoved { position } => {
                let local = *position - origin;
                self.cursor = Some(local);
                (self.mouse_down && self.panning).then_some(Gesture::PanMoved(local))
            }
            mouse::Event::CursorLeft => {
                self.cursor = None;
                None
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = self.cursor.filter(|p| area.contains(*p))?;
                self.mouse_down = true;
                Some(self.press(position, now))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                self.mouse_down = false;
                self.end_pan()
            }
            mouse::Event::WheelScrolled { delta } => {
                let anchor = self.cursor.filter(|p| area.contains(*p))?;
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_LINE,
                };
                if lines == 0.0 || !lines.is_finite() {
                    return None;
                }
                self.last_wheel = Some(now);
                Some(Gesture::Pinch {
                    factor: WHEEL_ZOOM_FACTOR.powf(lines),
                    anchor,
                })
            }
            _ => None,
        }
    }

    fn process_touch(
        &mut self,
        event: &touch::Event,
        origin: Vector,
        area: Rectangle,
        now: Instant,
    ) -> Option<Gesture> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                let local = position - origin;
                match self.fingers.len() {
                    0 => {
                        if !area.contains(local) {
                            return None;
                        }
                        self.fingers.push((id, local));
                        Some(self.press(local, now))
                    }
                    1 => {
                        self.fingers.push((id, local));
                        self.pinch_distance = Some(self.finger_distance());
                        self.last_press = None;
                        self.end_pan()
                    }
                    _ => None,
                }
            }
            touch::Event::FingerMoved { id, position } => {
                let local = position - origin;
                let finger = self.fingers.iter_mut().find(|(finger, _)| *finger == id)?;
                finger.1 = local;

                if self.fingers.len() == 2 {
                    let previous = self.pinch_distance?;
                    let distance = self.finger_distance();
                    self.pinch_distance = Some(distance);
                    let factor = distance / previous;
                    (factor.is_finite() && factor > 0.0).then(|| Gesture::Pinch {
                        factor,
                        anchor: self.finger_midpoint(),
                    })
                } else {
                    self.panning.then_some(Gesture::PanMoved(local))
                }
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                let before = self.fingers.len();
                self.fingers.retain(|(finger, _)| *finger != id);
                if before == self.fingers.len() {
                    return None;
                }
                if self.pinch_distance.take().is_some() {
                    Some(Gesture::PinchEnded)
                } else {
                    self.end_pan()
                }
            }
        }
    }

    fn press(&mut self, position: Point, now: Instant) -> Gesture {
        let is_double = self.last_press.is_some_and(|(at, first)| {
            now.saturating_duration_since(at) <= self.double_tap_threshold
                && first.distance(position) <= DOUBLE_TAP_SLOP
        });

        if is_double {
            self.last_press = None;
            self.panning = false;
            Gesture::DoubleTap(position)
        } else {
            self.last_press = Some((now, position));
            self.panning = true;
            Gesture::PanStarted(position)
        }
    }

    fn end_pan(&mut self) -> Option<Gesture> {
        if self.panning {
            self.panning = false;
            Some(Gesture::PanEnded)
        } else {
            None
        }
    }

    fn finger_distance(&self) -> f32 {
        match self.fingers.as_slice() {
            [(_, a), (_, b), ..] => a.distance(*b),
            _ => 0.0,
        }
    }

    fn finger_midpoint(&self) -> Point {
        match self.fingers.as_slice() {
            [(_, a), (_, b), ..] => Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0),
            [(_, a)] => *a,
            [] => Point::ORIGIN,
        }
    }
}
