// SPDX-License-Identifier: MPL-2.0
//! Review card screen: author, rating, date, text and photo buttons.

use crate::domain::review::{Review, MAX_RATING};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use fluent_bundle::FluentValue;
use iced::alignment::Horizontal;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub review: Option<&'a Review>,
    /// Message key explaining why no review is shown.
    pub load_error: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenPhoto(usize),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(review) = ctx.review else {
        return Container::new(Text::new(empty_message(ctx.i18n, ctx.load_error)))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    };

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(review.author_name()).size(typography::TITLE_MD))
        .push(rating_row(ctx.i18n, review))
        .push(
            Text::new(created_label(review))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let body = Text::new(review.text.as_str()).size(typography::BODY);

    let card = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(sizing::CARD_MAX_WIDTH)
        .push(header)
        .push(body)
        .push(photos_section(ctx.i18n, review));

    scrollable(
        Container::new(card)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn rating_row<'a>(i18n: &I18n, review: &Review) -> Element<'a, Message> {
    let filled = review.clamped_rating();
    let stars = (0..MAX_RATING).fold(Row::new().spacing(2.0), |row, index| {
        let color = if index < filled {
            palette::STAR_ON
        } else {
            palette::STAR_OFF
        };
        row.push(Text::new("★").size(sizing::ICON_SM).color(color))
    });

    let label = i18n.tr_with_args(
        "review-card-rating",
        &[("stars", FluentValue::from(i64::from(filled)))],
    );

    Row::new()
        .spacing(spacing::XS)
        .push(stars)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::GRAY_700),
        )
        .into()
}

fn photos_section<'a>(i18n: &I18n, review: &Review) -> Element<'a, Message> {
    let urls = review.photo_urls();
    if urls.is_empty() {
        return Text::new(i18n.tr("review-card-no-photos"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400)
            .into();
    }

    let buttons = urls
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, _url)| {
            let label = i18n.tr_with_args(
                "review-card-open-photo",
                &[("index", FluentValue::from(index as i64 + 1))],
            );
            row.push(
                button(Text::new(label).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(Message::OpenPhoto(index)),
            )
        });

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("review-card-photos")).size(typography::BODY))
        .push(buttons.wrap())
        .into()
}

fn empty_message(i18n: &I18n, load_error: Option<&'static str>) -> String {
    match load_error {
        Some(key) => format!("{} {}", i18n.tr(key), i18n.tr("review-card-empty")),
        None => i18n.tr("review-card-empty"),
    }
}

/// Creation date for display: `YYYY-MM-DD HH:MM` when parseable, else verbatim.
fn created_label(review: &Review) -> String {
    review
        .created_at()
        .map(|created| created.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| review.created.clone())
}
