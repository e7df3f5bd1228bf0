// SPDX-License-Identifier: MPL-2.0
use photo_review::config::{self, Config, DEFAULT_MAX_ZOOM_SCALE};
use photo_review::error::Error;
use photo_review::i18n::fluent::I18n;
use photo_review::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    std::fs::write(&path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("photo-review-title"), "Photo");

    std::fs::write(&path, "[general]\nlanguage = \"ru\"\n")
        .expect("Failed to write russian config file");

    let loaded = config::load_from_path(&path).expect("Failed to load russian config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ru");
    assert_eq!(i18n.tr("photo-review-title"), "Фото");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("ru".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_viewer_settings_load_through_directory_override() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"dark\"\n\n[viewer]\nmax_zoom_scale = 4.5\ndouble_tap_threshold_ms = 500\n",
    )
    .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert!((loaded.viewer.max_zoom_scale() - 4.5).abs() < f32::EPSILON);
    assert_eq!(loaded.viewer.double_tap_threshold().as_millis(), 500);
}

#[test]
fn test_broken_settings_fall_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[viewer\nmax_zoom_scale = ")
        .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));

    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    let message = i18n.tr("notification-config-load-error");
    assert!(!message.starts_with("MISSING"));
}

#[test]
fn test_out_of_range_viewer_values_are_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[viewer]\nmax_zoom_scale = 100.0\ndouble_tap_threshold_ms = 5\n",
    )
    .expect("Failed to write settings");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(loaded.viewer.max_zoom_scale() > DEFAULT_MAX_ZOOM_SCALE);
    assert!(loaded.viewer.max_zoom_scale() <= config::MAX_ZOOM_SCALE_LIMIT);
    assert_eq!(
        loaded.viewer.double_tap_threshold().as_millis(),
        u128::from(config::MIN_DOUBLE_TAP_THRESHOLD_MS)
    );
}

#[test]
fn test_every_locale_translates_ui_keys() {
    let keys = [
        "window-title",
        "photo-review-title",
        "photo-review-close",
        "photo-review-loading",
        "review-card-empty",
        "review-card-photos",
        "review-card-no-photos",
        "error-io",
        "error-decode",
        "error-network",
    ];
    for locale in ["en-US", "ru"] {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        for key in keys {
            let text = i18n.tr(key);
            assert!(!text.starts_with("MISSING"), "{locale} lacks {key}");
        }
    }
}

#[test]
fn test_error_keys_resolve_in_every_locale() {
    let errors = [
        Error::Io("gone".into()),
        Error::Decode("bad json".into()),
        Error::Network("timeout".into()),
        Error::Config("bad field".into()),
    ];
    for locale in ["en-US", "ru"] {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        for err in &errors {
            let text = i18n.tr(err.i18n_key());
            assert!(!text.starts_with("MISSING"), "{locale} lacks {err}");
        }
    }
}
