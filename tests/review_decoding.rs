// SPDX-License-Identifier: MPL-2.0
use photo_review::domain::review::{Review, MAX_RATING};

const REVIEWS: &str = r#"[
    {
        "text": "Great coffee, slow service.",
        "created": "2023-11-20T09:15:00+03:00",
        "first_name": "Maria",
        "last_name": "Sokolova",
        "rating": 4,
        "avatar_url": "https://example.com/avatars/maria.png",
        "photo_urls": [
            "https://example.com/photos/1.jpg",
            "https://example.com/photos/2.jpg"
        ]
    },
    {
        "text": "Would not come back.",
        "created": "yesterday",
        "first_name": "Ivan",
        "last_name": "Orlov",
        "rating": 9
    }
]"#;

#[test]
fn decodes_review_list() {
    let reviews = Review::list_from_json(REVIEWS).expect("reviews decode");
    assert_eq!(reviews.len(), 2);

    let first = &reviews[0];
    assert_eq!(first.author_name(), "Maria Sokolova");
    assert_eq!(first.photo_urls().len(), 2);
    assert_eq!(first.photo_url(1), Some("https://example.com/photos/2.jpg"));
    assert!(first.created_at().is_some());
    assert_eq!(first.clamped_rating(), 4);

    let second = &reviews[1];
    assert!(second.photo_urls().is_empty());
    assert_eq!(second.photo_url(0), None);
    assert!(second.avatar_url.is_none());
    assert!(second.created_at().is_none());
    assert_eq!(second.clamped_rating(), MAX_RATING);
}

#[test]
fn missing_required_field_is_an_error() {
    let json = r#"{ "text": "x", "created": "now", "first_name": "A", "rating": 3 }"#;
    let err = Review::from_json(json).expect_err("last_name is required");
    assert_eq!(err.i18n_key(), "error-decode");
}

#[test]
fn serialization_omits_absent_optionals() {
    let reviews = Review::list_from_json(REVIEWS).expect("reviews decode");
    let json = serde_json::to_string(&reviews[1]).expect("review encodes");
    assert!(!json.contains("avatar_url"));
    assert!(!json.contains("photo_urls"));
}
