// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the review card and the
//! photo review modal.
//!
//! The `App` struct wires together localization, settings, the decoded
//! review and the image loader, and decides what happens when the modal is
//! dismissed.

mod message;
pub mod paths;
mod screen;
mod subscription;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, defaults};
use crate::domain::Review;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::media::ImageLoader;
use crate::ui::photo_review::{self, ViewerSettings};
use crate::ui::review_card;
use crate::ui::state::ZoomLimits;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    review: Option<Review>,
    /// Message key of the error that rejected the review file.
    review_error: Option<&'static str>,
    photo_review: Option<photo_review::State>,
    loader: Arc<dyn ImageLoader>,
    viewer_settings: ViewerSettings,
    /// Launched with a bare photo URL: closing the modal quits.
    exit_on_dismiss: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_review", &self.review.is_some())
            .field("photo_review", &self.photo_review)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(defaults::WINDOW_DEFAULT_WIDTH, defaults::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(
            defaults::MIN_WINDOW_WIDTH,
            defaults::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, loader: Arc<dyn ImageLoader>) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, loader.clone())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and opens the requested photo, if any.
    pub fn new(flags: Flags, loader: Arc<dyn ImageLoader>) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!(message = %i18n.tr(&key), "settings were not loaded");
        }

        let (review, review_error) = match flags.review_path.as_deref() {
            Some(path) => match load_review(Path::new(path)) {
                Ok(review) => (Some(review), None),
                Err(err) => {
                    tracing::warn!(path, %err, "review file rejected");
                    (None, Some(err.i18n_key()))
                }
            },
            None => (None, None),
        };

        let viewer_settings = ViewerSettings {
            limits: ZoomLimits::with_max(config.viewer.max_zoom_scale()),
            double_tap_threshold: config.viewer.double_tap_threshold(),
        };

        let mut app = App {
            i18n,
            screen: Screen::ReviewCard,
            theme_mode: config.general.theme_mode,
            review,
            review_error,
            photo_review: None,
            loader,
            viewer_settings,
            exit_on_dismiss: false,
        };

        let startup_photo = match (&flags.photo_url, &app.review, flags.photo_index) {
            (Some(url), _, _) => Some(url.clone()),
            (None, Some(review), Some(index)) => {
                let url = review.photo_url(index).map(str::to_string);
                if url.is_none() {
                    tracing::warn!(index, "review has no photo at this index");
                }
                url
            }
            _ => None,
        };
        app.exit_on_dismiss = flags.photo_url.is_some() && app.review.is_none();

        let task = match startup_photo {
            Some(url) => app.open_photo(url),
            None => Task::none(),
        };
        (app, task)
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn review(&self) -> Option<&Review> {
        self.review.as_ref()
    }

    #[must_use]
    pub fn review_error(&self) -> Option<&'static str> {
        self.review_error
    }

    #[must_use]
    pub fn photo_review(&self) -> Option<&photo_review::State> {
        self.photo_review.as_ref()
    }

    #[must_use]
    pub fn viewer_settings(&self) -> ViewerSettings {
        self.viewer_settings
    }

    fn open_photo(&mut self, url: String) -> Task<Message> {
        tracing::info!(%url, "opening photo review");
        let mut modal =
            photo_review::State::new(url, Arc::clone(&self.loader), self.viewer_settings);
        let task = modal.load().map(Message::PhotoReview);
        self.photo_review = Some(modal);
        self.screen = Screen::PhotoReview;
        task
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::PhotoReview => {
                format!("{} - {app_name}", self.i18n.tr("photo-review-title"))
            }
            Screen::ReviewCard => match &self.review {
                Some(review) => format!("{} - {app_name}", review.author_name()),
                None => app_name,
            },
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let modal = self.photo_review.as_ref();
        let needs_tick = modal.is_some_and(photo_review::State::needs_tick);
        let needs_frames = modal.is_some_and(photo_review::State::needs_frames);

        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_tick_subscription(needs_tick),
            subscription::create_frame_subscription(needs_frames),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ReviewCard(review_card::Message::OpenPhoto(index)) => {
                let url = self
                    .review
                    .as_ref()
                    .and_then(|review| review.photo_url(index))
                    .map(str::to_string);
                match url {
                    Some(url) => self.open_photo(url),
                    None => Task::none(),
                }
            }
            Message::PhotoReview(modal_message) => {
                let Some(modal) = self.photo_review.as_mut() else {
                    return Task::none();
                };
                let (effect, task) = modal.update(modal_message);
                match effect {
                    photo_review::Effect::None => task.map(Message::PhotoReview),
                    photo_review::Effect::Dismissed => self.close_photo(),
                }
            }
        }
    }

    fn close_photo(&mut self) -> Task<Message> {
        self.photo_review = None;
        self.screen = Screen::ReviewCard;
        if self.exit_on_dismiss {
            tracing::info!("photo dismissed, exiting");
            iced::exit()
        } else {
            Task::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match (&self.screen, &self.photo_review) {
            (Screen::PhotoReview, Some(modal)) => modal
                .view(&self.i18n, self.theme_mode.surface_color())
                .map(Message::PhotoReview),
            _ => review_card::view(review_card::ViewContext {
                i18n: &self.i18n,
                review: self.review.as_ref(),
                load_error: self.review_error,
            })
            .map(Message::ReviewCard),
        }
    }
}

fn load_review(path: &Path) -> Result<Review> {
    let json = std::fs::read_to_string(path)?;
    Review::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;
    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    #[derive(Debug)]
    struct NoopLoader;

    impl ImageLoader for NoopLoader {
        fn load_image(&self, _source: &str) -> BoxFuture<'static, Option<ImageData>> {
            async { None }.boxed()
        }
    }

    const REVIEW_JSON: &str = r#"{
        "text": "Cozy place",
        "created": "2024-01-02T10:00:00Z",
        "first_name": "Oleg",
        "last_name": "Ivanov",
        "rating": 5,
        "photo_urls": ["https://example.com/a.jpg", "https://example.com/b.jpg"]
    }"#;

    fn flags_in(dir: &Path) -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.to_string_lossy().into_owned()),
            ..Flags::default()
        }
    }

    fn dismiss_and_settle(app: &mut App) {
        let _ = app.update(Message::PhotoReview(photo_review::Message::Dismiss));
        let _ = app.update(Message::PhotoReview(photo_review::Message::Frame(
            Instant::now() + Duration::from_secs(1),
        )));
    }

    fn write_review(dir: &Path) -> String {
        let path = dir.join("review.json");
        std::fs::write(&path, REVIEW_JSON).expect("write review");
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn photo_url_opens_modal_and_dismiss_clears_it() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            photo_url: Some("https://example.com/only.jpg".to_string()),
            ..flags_in(dir.path())
        };
        let (mut app, _task) = App::new(flags, Arc::new(NoopLoader));
        assert_eq!(app.screen(), Screen::PhotoReview);
        assert!(app.exit_on_dismiss);
        assert_eq!(
            app.photo_review().map(photo_review::State::photo_url),
            Some("https://example.com/only.jpg")
        );

        let _ = app.update(Message::PhotoReview(photo_review::Message::Dismiss));
        assert_eq!(app.screen(), Screen::PhotoReview);
        assert!(app.photo_review().is_some_and(photo_review::State::is_closing));

        let _ = app.update(Message::PhotoReview(photo_review::Message::Frame(
            Instant::now() + Duration::from_secs(1),
        )));
        assert!(app.photo_review().is_none());
        assert_eq!(app.screen(), Screen::ReviewCard);
    }

    #[test]
    fn review_card_opens_selected_photo() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            review_path: Some(write_review(dir.path())),
            ..flags_in(dir.path())
        };
        let (mut app, _task) = App::new(flags, Arc::new(NoopLoader));
        assert_eq!(app.screen(), Screen::ReviewCard);
        assert_eq!(app.review().map(Review::author_name).as_deref(), Some("Oleg Ivanov"));

        let _ = app.update(Message::ReviewCard(review_card::Message::OpenPhoto(1)));
        assert_eq!(app.screen(), Screen::PhotoReview);
        assert_eq!(
            app.photo_review().map(photo_review::State::photo_url),
            Some("https://example.com/b.jpg")
        );

        dismiss_and_settle(&mut app);
        assert_eq!(app.screen(), Screen::ReviewCard);
        assert!(!app.exit_on_dismiss);
    }

    #[test]
    fn photo_index_flag_opens_review_photo() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            review_path: Some(write_review(dir.path())),
            photo_index: Some(0),
            ..flags_in(dir.path())
        };
        let (app, _task) = App::new(flags, Arc::new(NoopLoader));
        assert_eq!(
            app.photo_review().map(photo_review::State::photo_url),
            Some("https://example.com/a.jpg")
        );
    }

    #[test]
    fn out_of_range_photo_is_ignored() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            review_path: Some(write_review(dir.path())),
            ..flags_in(dir.path())
        };
        let (mut app, _task) = App::new(flags, Arc::new(NoopLoader));
        let _ = app.update(Message::ReviewCard(review_card::Message::OpenPhoto(7)));
        assert_eq!(app.screen(), Screen::ReviewCard);
        assert!(app.photo_review().is_none());
    }

    #[test]
    fn invalid_review_file_leaves_card_empty() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"text\": 1 }").expect("write review");
        let flags = Flags {
            review_path: Some(path.to_string_lossy().into_owned()),
            ..flags_in(dir.path())
        };
        let (app, _task) = App::new(flags, Arc::new(NoopLoader));
        assert!(app.review().is_none());
        assert_eq!(app.review_error(), Some("error-decode"));
        assert_eq!(app.screen(), Screen::ReviewCard);
    }

    #[test]
    fn missing_review_file_reports_io_error() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            review_path: Some(dir.path().join("absent.json").to_string_lossy().into_owned()),
            ..flags_in(dir.path())
        };
        let (app, _task) = App::new(flags, Arc::new(NoopLoader));
        assert!(app.review().is_none());
        assert_eq!(app.review_error(), Some("error-io"));
    }

    #[test]
    fn viewer_settings_follow_config() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("settings.toml"),
            "[viewer]\nmax_zoom_scale = 5.0\ndouble_tap_threshold_ms = 250\n",
        )
        .expect("write settings");
        let (app, _task) = App::new(flags_in(dir.path()), Arc::new(NoopLoader));
        let settings = app.viewer_settings();
        assert!((settings.limits.max() - 5.0).abs() < f32::EPSILON);
        assert_eq!(settings.double_tap_threshold.as_millis(), 250);
    }

    #[test]
    fn title_names_the_open_screen() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            review_path: Some(write_review(dir.path())),
            ..flags_in(dir.path())
        };
        let (mut app, _task) = App::new(flags, Arc::new(NoopLoader));
        assert!(app.title().starts_with("Oleg Ivanov"));
        let _ = app.update(Message::ReviewCard(review_card::Message::OpenPhoto(0)));
        assert!(app.title().starts_with(&app.i18n.tr("photo-review-title")));
    }
}
