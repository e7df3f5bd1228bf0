// SPDX-License-Identifier: MPL-2.0
//! Photo review controller.
//!
//! Hosts the zoomable surface as a full-screen modal, loads the photo through
//! the injected [`ImageLoader`], and reports dismissal to the parent.

use super::navbar;
use crate::config::defaults::{DISMISS_FADE_MS, NAV_BAR_HEIGHT};
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData, ImageLoader};
use crate::ui::photo_view;
use crate::ui::state::ZoomLimits;
use iced::animation::Easing;
use iced::task::Handle;
use iced::widget::{container, Column, Container, Stack};
use iced::{keyboard, Animation, Background, Color, Element, Event, Length, Task, Theme, Vector};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of load tokens, shared by every controller of the process.
static NEXT_LOAD_TOKEN: AtomicU64 = AtomicU64::new(0);

/// Identifies one load request, unique across controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(u64);

impl LoadToken {
    fn next() -> Self {
        Self(NEXT_LOAD_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// Surface behavior settings taken from the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    pub limits: ZoomLimits,
    pub double_tap_threshold: Duration,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            limits: ZoomLimits::default(),
            double_tap_threshold: Duration::from_millis(
                crate::config::DEFAULT_DOUBLE_TAP_THRESHOLD_MS,
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    PhotoLoaded {
        token: LoadToken,
        image: Option<ImageData>,
    },
    Dismiss,
    /// Window-level event, positions in window coordinates.
    RawEvent(Event),
    Tick(Instant),
    /// Animation frame, drives the zoom and the closing fade.
    Frame(Instant),
    PhotoView(photo_view::Message),
    Navbar(navbar::Message),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Dismissed,
}

struct PendingLoad {
    token: LoadToken,
    handle: Handle,
}

pub struct State {
    photo_url: String,
    photo_view: photo_view::State,
    loader: Arc<dyn ImageLoader>,
    pending: Option<PendingLoad>,
    /// Closing fade, set once the modal is dismissed.
    closing: Option<Animation<bool>>,
    /// Opacity of the veil drawn over the modal while closing.
    veil: f32,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("photo_url", &self.photo_url)
            .field("loader", &self.loader)
            .field("pending", &self.pending.as_ref().map(|load| load.token))
            .field("closing", &self.closing.is_some())
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(
        photo_url: impl Into<String>,
        loader: Arc<dyn ImageLoader>,
        settings: ViewerSettings,
    ) -> Self {
        Self {
            photo_url: photo_url.into(),
            photo_view: photo_view::State::new(settings.limits, settings.double_tap_threshold),
            loader,
            pending: None,
            closing: None,
            veil: 0.0,
        }
    }

    #[must_use]
    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }

    #[must_use]
    pub fn photo_view(&self) -> &photo_view::State {
        &self.photo_view
    }

    /// Token of the in-flight load, if any.
    #[must_use]
    pub fn pending_token(&self) -> Option<LoadToken> {
        self.pending.as_ref().map(|load| load.token)
    }

    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.closing.is_none() && self.photo_view.needs_tick()
    }

    /// Whether [`Message::Frame`] is needed for a zoom or the closing fade.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.closing.is_some() || self.photo_view.is_animating()
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing.is_some()
    }

    /// Starts loading the photo, replacing any load still in flight.
    pub fn load(&mut self) -> Task<Message> {
        self.cancel_pending();

        let token = LoadToken::next();
        tracing::debug!(url = %self.photo_url, ?token, "loading photo");

        let future = self.loader.load_image(&self.photo_url);
        let (task, handle) =
            Task::perform(future, move |image| Message::PhotoLoaded { token, image }).abortable();
        self.pending = Some(PendingLoad { token, handle });
        task
    }

    /// Cancels the pending load and starts the closing fade.
    ///
    /// [`Effect::Dismissed`] is reported by the first [`Message::Frame`]
    /// after the fade has ended.
    pub fn dismiss(&mut self, at: Instant) {
        self.cancel_pending();
        if self.closing.is_none() {
            self.closing = Some(
                Animation::new(false)
                    .duration(Duration::from_millis(DISMISS_FADE_MS))
                    .easing(Easing::EaseOut)
                    .go(true, at),
            );
        }
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        if let Some(closing) = &self.closing {
            // Only frames matter once closing.
            return match message {
                Message::Frame(at) if !closing.is_animating(at) => {
                    self.veil = 1.0;
                    (Effect::Dismissed, Task::none())
                }
                Message::Frame(at) => {
                    self.veil = closing.interpolate(0.0, 1.0, at);
                    (Effect::None, Task::none())
                }
                _ => (Effect::None, Task::none()),
            };
        }

        match message {
            Message::PhotoLoaded { token, image } => {
                if self.pending_token() != Some(token) {
                    tracing::debug!(?token, "ignoring stale photo load");
                    return (Effect::None, Task::none());
                }
                self.pending = None;
                let image = image.unwrap_or_else(|| {
                    tracing::info!(url = %self.photo_url, "showing placeholder photo");
                    media::placeholder()
                });
                self.photo_view.set_image(Some(image));
                (Effect::None, Task::none())
            }
            Message::Dismiss | Message::Navbar(navbar::Message::Close) => {
                self.dismiss(Instant::now());
                (Effect::None, Task::none())
            }
            Message::RawEvent(event) => self.handle_raw_event(event),
            Message::Tick(now) => (
                Effect::None,
                self.photo_view
                    .handle(photo_view::Message::Tick(now))
                    .map(Message::PhotoView),
            ),
            Message::Frame(now) => (
                Effect::None,
                self.photo_view
                    .handle(photo_view::Message::Frame(now))
                    .map(Message::PhotoView),
            ),
            Message::PhotoView(message) => (
                Effect::None,
                self.photo_view.handle(message).map(Message::PhotoView),
            ),
        }
    }

    fn handle_raw_event(&mut self, event: Event) -> (Effect, Task<Message>) {
        if let Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) = event
        {
            self.dismiss(Instant::now());
            return (Effect::None, Task::none());
        }

        if !matches!(event, Event::Mouse(_) | Event::Touch(_)) {
            return (Effect::None, Task::none());
        }

        let task = self
            .photo_view
            .handle(photo_view::Message::Input {
                event,
                origin: surface_origin(),
                at: Instant::now(),
            })
            .map(Message::PhotoView);
        (Effect::None, task)
    }

    fn cancel_pending(&mut self) {
        if let Some(load) = self.pending.take() {
            tracing::debug!(token = ?load.token, "cancelling photo load");
            load.handle.abort();
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, surface_color: Color) -> Element<'a, Message> {
        let bar = navbar::view(navbar::ViewContext { i18n }).map(Message::Navbar);
        let surface = photo_view::view(
            &self.photo_view,
            photo_view::ViewContext {
                i18n,
                surface_color,
            },
        )
        .map(Message::PhotoView);

        let modal = Column::new()
            .push(bar)
            .push(surface)
            .width(Length::Fill)
            .height(Length::Fill);

        if self.closing.is_none() {
            return modal.into();
        }

        let veil = Color {
            a: self.veil,
            ..surface_color
        };
        Stack::new()
            .push(modal)
            .push(
                Container::new(Column::new())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(move |_theme: &Theme| container::Style {
                        background: Some(Background::Color(veil)),
                        ..Default::default()
                    }),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Top-left corner of the surface in window coordinates.
fn surface_origin() -> Vector {
    Vector::new(0.0, NAV_BAR_HEIGHT)
}
