// SPDX-License-Identifier: MPL-2.0
//! Zoomable photo surface.
//!
//! Shows a single photo aspect-fitted into the available bounds and lets the
//! user zoom (pinch, wheel, double tap) and pan while zoomed. The surface
//! owns all of its layout state; the scrollable widget in [`pane`] only
//! mirrors the offset pushed to it with `snap_to`.
//!
//! ## Coordinate spaces
//!
//! - *viewport*: relative to the visible surface, `(0, 0)` top-left.
//! - *content*: relative to the scrollable content, i.e. viewport + offset.
//! - *image-local*: relative to the photo at minimum scale, so the displayed
//!   photo spans `(0, 0)..fitted_size`.

pub mod gesture;
pub mod pane;

use crate::config::defaults::ZOOM_ANIMATION_MS;
use crate::media::ImageData;
use crate::ui::state::geometry;
use crate::ui::state::{DragState, ZoomLimits, ZoomObserver, ZoomPhase};
use gesture::{Gesture, Tracker};
use iced::animation::Easing;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Animation, Event, Point, Rectangle, Size, Task, Vector};
use std::time::{Duration, Instant};

pub use pane::{view, ViewContext};

/// Widget id of the scrollable hosting the photo.
pub const SCROLLABLE_ID: &str = "photo-view-scrollable";

#[derive(Debug, Clone)]
pub enum Message {
    /// The surface was laid out with a new size.
    Resized(Size),
    /// Raw input; `origin` is the surface's top-left corner in window space.
    Input {
        event: Event,
        origin: Vector,
        at: Instant,
    },
    /// Periodic tick used to settle wheel zooms.
    Tick(Instant),
    /// Animation frame while a double-tap zoom is running.
    Frame(Instant),
}

/// What a double tap did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoubleTapOutcome {
    ZoomedOut,
    /// Zoomed in onto this image-local rectangle.
    ZoomedIn(Rectangle),
    Ignored,
}

#[derive(Debug, Clone)]
pub struct State {
    image: Option<ImageData>,
    bounds: Size,
    limits: ZoomLimits,
    zoom_scale: f32,
    phase: ZoomPhase,
    scroll_enabled: bool,
    /// Aspect-fit rectangle at minimum scale, viewport coordinates.
    fitted: Rectangle,
    /// Photo frame inside the scrollable content.
    image_frame: Rectangle,
    content_size: Size,
    offset: Vector,
    /// Frame restored when a zoom ends at minimum scale.
    initial_image_frame: Option<Rectangle>,
    drag: DragState,
    gestures: Tracker,
    zoom_animation: Option<ZoomAnimation>,
}

/// Double-tap zoom in flight, sampled on every frame.
#[derive(Debug, Clone)]
struct ZoomAnimation {
    progress: Animation<bool>,
    from_scale: f32,
    to_scale: f32,
    from_offset: Vector,
    to_offset: Vector,
}

impl ZoomAnimation {
    fn start(from: (f32, Vector), to: (f32, Vector), at: Instant) -> Self {
        Self {
            progress: Animation::new(false)
                .duration(Duration::from_millis(ZOOM_ANIMATION_MS))
                .easing(Easing::EaseInOut)
                .go(true, at),
            from_scale: from.0,
            to_scale: to.0,
            from_offset: from.1,
            to_offset: to.1,
        }
    }

    fn sample(&self, at: Instant) -> (f32, Vector) {
        let t: f32 = self.progress.interpolate(0.0, 1.0, at);
        (
            self.from_scale + (self.to_scale - self.from_scale) * t,
            self.from_offset + (self.to_offset - self.from_offset) * t,
        )
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            ZoomLimits::default(),
            Duration::from_millis(crate::config::DEFAULT_DOUBLE_TAP_THRESHOLD_MS),
        )
    }
}

impl State {
    #[must_use]
    pub fn new(limits: ZoomLimits, double_tap_threshold: Duration) -> Self {
        Self {
            image: None,
            bounds: Size::ZERO,
            limits,
            zoom_scale: limits.min(),
            phase: ZoomPhase::Idle,
            scroll_enabled: false,
            fitted: Rectangle::with_size(Size::ZERO),
            image_frame: Rectangle::with_size(Size::ZERO),
            content_size: Size::ZERO,
            offset: Vector::ZERO,
            initial_image_frame: None,
            drag: DragState::default(),
            gestures: Tracker::new(double_tap_threshold),
            zoom_animation: None,
        }
    }

    pub fn handle(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Resized(bounds) => {
                self.resize(bounds);
                self.sync_offset()
            }
            Message::Input { event, origin, at } => {
                match self.gestures.process(&event, origin, self.bounds, at) {
                    Some(gesture) => {
                        self.apply(gesture, at);
                        self.sync_offset()
                    }
                    None => Task::none(),
                }
            }
            Message::Tick(at) => match self.gestures.poll(at) {
                Some(gesture) => {
                    self.apply(gesture, at);
                    self.sync_offset()
                }
                None => Task::none(),
            },
            Message::Frame(at) => {
                if self.advance_zoom(at) {
                    self.sync_offset()
                } else {
                    Task::none()
                }
            }
        }
    }

    fn apply(&mut self, gesture: Gesture, at: Instant) {
        // New input lands on the final layout of a running zoom.
        self.finish_zoom_animation();
        match gesture {
            Gesture::DoubleTap(location) => {
                let outcome = self.handle_double_tap(location, at);
                tracing::trace!(?location, ?outcome, "double tap");
            }
            Gesture::PanStarted(position) => self.begin_pan(position),
            Gesture::PanMoved(position) => self.pan_to(position),
            Gesture::PanEnded => self.end_pan(),
            Gesture::Pinch { factor, anchor } => self.pinch(factor, anchor),
            Gesture::PinchEnded => self.finish_pinch(),
        }
    }

    /// Replaces the photo and lays it out at minimum scale.
    ///
    /// `None` clears the surface; the empty frame then covers the bounds.
    pub fn set_image(&mut self, image: Option<ImageData>) {
        self.image = image;
        self.zoom_animation = None;
        self.zoom_scale = self.limits.min();
        self.phase = ZoomPhase::Idle;
        self.offset = Vector::ZERO;
        self.drag.stop();
        self.gestures.reset();
        self.initial_image_frame = None;
        self.refresh_fitted();
        self.layout_at_min();
    }

    /// Re-lays out the surface for new bounds, keeping the current scale.
    pub fn resize(&mut self, bounds: Size) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.initial_image_frame = None;
        self.refresh_fitted();
        if self.limits.is_min(self.zoom_scale) {
            self.layout_at_min();
        } else {
            self.zoom_did_change();
        }
    }

    /// Zooms out when zoomed in; otherwise zooms onto the tapped point.
    ///
    /// `location` is in viewport coordinates. Taps that miss the photo while
    /// at minimum scale are ignored. Both zooms are animated from `at` and
    /// progress with [`Message::Frame`].
    pub fn handle_double_tap(&mut self, location: Point, at: Instant) -> DoubleTapOutcome {
        if self.image.is_none() {
            return DoubleTapOutcome::Ignored;
        }

        if !self.limits.is_min(self.zoom_scale) {
            self.animate_zoom(self.limits.min(), Vector::ZERO, at);
            return DoubleTapOutcome::ZoomedOut;
        }

        let local = self.image_local(location);
        let displayed = self.fitted.size();
        if !Rectangle::with_size(displayed).contains(local) {
            return DoubleTapOutcome::Ignored;
        }

        let rect = geometry::zoom_rect(local, displayed, self.limits.max());
        self.zoom_to(rect, at);
        DoubleTapOutcome::ZoomedIn(rect)
    }

    /// Animates the zoom so that the image-local `rect` fills the viewport,
    /// centered.
    pub fn zoom_to(&mut self, rect: Rectangle, at: Instant) {
        if self.image.is_none() {
            return;
        }
        let Some(scale) = geometry::scale_to_fill(rect.size(), self.bounds) else {
            return;
        };
        let scale = self.limits.clamp(scale);

        let (frame, content_size) = self.layout_at(scale);
        let center = rect.center();
        let content_center = Point::new(frame.x + center.x * scale, frame.y + center.y * scale);
        let half_viewport = Vector::new(self.bounds.width / 2.0, self.bounds.height / 2.0);
        let offset = geometry::clamp_offset(
            content_center - Point::ORIGIN - half_viewport,
            content_size,
            self.bounds,
        );
        self.animate_zoom(scale, offset, at);
    }

    fn animate_zoom(&mut self, scale: f32, offset: Vector, at: Instant) {
        self.finish_zoom_animation();
        self.zoom_will_begin();
        self.zoom_animation = Some(ZoomAnimation::start(
            (self.zoom_scale, self.offset),
            (scale, offset),
            at,
        ));
    }

    /// Moves a running zoom animation to `at`. Returns whether anything moved.
    fn advance_zoom(&mut self, at: Instant) -> bool {
        let Some(animation) = &self.zoom_animation else {
            return false;
        };
        if !animation.progress.is_animating(at) {
            self.finish_zoom_animation();
            return true;
        }

        let (scale, offset) = animation.sample(at);
        self.zoom_scale = scale;
        self.zoom_did_change();
        self.offset = geometry::clamp_offset(offset, self.content_size, self.bounds);
        true
    }

    /// Jumps a running zoom animation to its end and settles the zoom.
    fn finish_zoom_animation(&mut self) {
        let Some(animation) = self.zoom_animation.take() else {
            return;
        };
        self.zoom_scale = animation.to_scale;
        self.zoom_did_change();
        self.offset = geometry::clamp_offset(animation.to_offset, self.content_size, self.bounds);
        self.zoom_did_end(animation.to_scale);
    }

    /// Sets the scale in one complete zoom interaction.
    pub fn set_zoom_scale(&mut self, scale: f32) {
        self.finish_zoom_animation();
        let scale = self.limits.clamp(scale);
        self.zoom_will_begin();
        self.zoom_scale = scale;
        self.zoom_did_change();
        self.zoom_did_end(scale);
    }

    /// Multiplies the scale by `factor`, keeping the viewport point `anchor`
    /// over the same spot of the photo.
    pub fn pinch(&mut self, factor: f32, anchor: Point) {
        if self.image.is_none() || !factor.is_finite() || factor <= 0.0 {
            return;
        }
        if self.phase != ZoomPhase::Zooming {
            self.zoom_will_begin();
        }

        let local = self.image_local(anchor);
        self.zoom_scale = self.limits.clamp(self.zoom_scale * factor);
        self.zoom_did_change();

        let content = Point::new(
            self.image_frame.x + local.x * self.zoom_scale,
            self.image_frame.y + local.y * self.zoom_scale,
        );
        self.offset = geometry::clamp_offset(content - anchor, self.content_size, self.bounds);
    }

    /// Ends a pinch started by [`State::pinch`].
    pub fn finish_pinch(&mut self) {
        if self.phase == ZoomPhase::Zooming {
            self.zoom_did_end(self.zoom_scale);
        }
    }

    pub fn begin_pan(&mut self, position: Point) {
        if self.scroll_enabled {
            self.drag.start(position, self.offset);
        }
    }

    pub fn pan_to(&mut self, position: Point) {
        if let Some(offset) = self.drag.offset_for(position) {
            self.offset = geometry::clamp_offset(offset, self.content_size, self.bounds);
        }
    }

    pub fn end_pan(&mut self) {
        self.drag.stop();
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    #[must_use]
    pub fn zoom_scale(&self) -> f32 {
        self.zoom_scale
    }

    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    #[must_use]
    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    #[must_use]
    pub fn image_frame(&self) -> Rectangle {
        self.image_frame
    }

    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn initial_image_frame(&self) -> Option<Rectangle> {
        self.initial_image_frame
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Whether the photo is under the cursor and can be dragged.
    #[must_use]
    pub fn can_grab(&self) -> bool {
        self.scroll_enabled
            && self
                .gestures
                .cursor()
                .is_some_and(|cursor| self.image_frame.contains(cursor + self.offset))
    }

    /// Whether [`Message::Tick`] is needed to settle a gesture.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.gestures.needs_tick()
    }

    /// Whether a double-tap zoom is running and needs [`Message::Frame`].
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.zoom_animation.is_some()
    }

    /// Offset as a fraction of the scrollable range, for `snap_to`.
    #[must_use]
    pub fn relative_offset(&self) -> RelativeOffset {
        let max = geometry::max_offset(self.content_size, self.bounds);
        RelativeOffset {
            x: if max.x > 0.0 { self.offset.x / max.x } else { 0.0 },
            y: if max.y > 0.0 { self.offset.y / max.y } else { 0.0 },
        }
    }

    fn sync_offset(&self) -> Task<Message> {
        operation::snap_to(Id::new(SCROLLABLE_ID), self.relative_offset())
    }

    fn image_local(&self, location: Point) -> Point {
        let content = location + self.offset;
        Point::new(
            (content.x - self.image_frame.x) / self.zoom_scale,
            (content.y - self.image_frame.y) / self.zoom_scale,
        )
    }

    fn refresh_fitted(&mut self) {
        self.fitted = match &self.image {
            Some(image) => geometry::aspect_fit(image.size(), self.bounds),
            None => Rectangle::with_size(self.bounds),
        };
        if self.initial_image_frame.is_none() {
            self.initial_image_frame = Some(self.fitted);
        }
    }

    /// Photo frame and content size at `scale`.
    fn layout_at(&self, scale: f32) -> (Rectangle, Size) {
        let displayed = Size::new(self.fitted.width * scale, self.fitted.height * scale);
        let frame = Rectangle::new(geometry::centered_origin(displayed, self.bounds), displayed);
        let content_size = Size::new(
            displayed.width.max(self.bounds.width),
            displayed.height.max(self.bounds.height),
        );
        (frame, content_size)
    }

    fn layout_at_min(&mut self) {
        self.scroll_enabled = false;
        self.image_frame = self.initial_image_frame.unwrap_or(self.fitted);
        self.content_size = self.bounds;
        self.offset = Vector::ZERO;
    }
}

impl ZoomObserver for State {
    fn zoom_will_begin(&mut self) {
        self.scroll_enabled = true;
        self.phase = ZoomPhase::Zooming;
    }

    fn zoom_did_change(&mut self) {
        (self.image_frame, self.content_size) = self.layout_at(self.zoom_scale);
        self.scroll_enabled = !self.limits.is_min(self.zoom_scale);
        self.offset = geometry::clamp_offset(self.offset, self.content_size, self.bounds);
    }

    fn zoom_did_end(&mut self, scale: f32) {
        self.phase = ZoomPhase::Settled;
        if self.limits.is_min(scale) {
            self.zoom_scale = self.limits.min();
            self.layout_at_min();
        }
    }
}
