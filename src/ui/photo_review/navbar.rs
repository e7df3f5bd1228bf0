// SPDX-License-Identifier: MPL-2.0
//! Navigation bar of the photo modal: close button on the left, title centered.

use crate::config::defaults::NAV_BAR_HEIGHT;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, svg, tooltip, Container, Row, Space, Stack, Text};
use iced::{Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close_icon = icons::sized(icons::xmark(), sizing::ICON_MD).style(
        |theme: &Theme, _status: svg::Status| svg::Style {
            color: Some(theme.palette().text),
        },
    );

    let close_button = button(close_icon)
        .on_press(Message::Close)
        .padding(spacing::XS)
        .style(button::text);

    let close_button = tooltip(
        close_button,
        Container::new(Text::new(ctx.i18n.tr("photo-review-close")).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .gap(4);

    let leading = Row::new()
        .push(close_button)
        .push(Space::new().width(Length::Fill))
        .align_y(Vertical::Center)
        .padding([0.0, spacing::XS]);

    let title = Container::new(
        Text::new(ctx.i18n.tr("photo-review-title")).size(typography::TITLE_SM),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    Container::new(
        Stack::new()
            .push(title)
            .push(Container::new(leading).height(Length::Fill).align_y(Vertical::Center)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(NAV_BAR_HEIGHT))
    .style(container::bordered_box)
    .into()
}
