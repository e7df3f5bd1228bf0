// SPDX-License-Identifier: MPL-2.0
//! Rendering of the photo surface: the photo inside a locked scrollable,
//! padded to its frame origin, over a themed backdrop.

use super::{Message, State, SCROLLABLE_ID};
use crate::i18n::fluent::I18n;
use crate::ui::widgets::locked_scrollable;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{mouse_area, Container, Id, Image, Scrollable, Space, Stack, Text};
use iced::{mouse, Background, Color, ContentFit, Element, Length, Padding, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub surface_color: Color,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let frame = state.image_frame();

    let content: Element<'a, Message> = match state.image() {
        Some(photo) => Image::new(photo.handle.clone())
            .width(Length::Fixed(frame.width))
            .height(Length::Fixed(frame.height))
            .content_fit(ContentFit::Fill)
            .into(),
        None => Space::new()
            .width(Length::Fixed(frame.width))
            .height(Length::Fixed(frame.height))
            .into(),
    };

    // Padding on both sides makes the content span the whole viewport on
    // axes where the photo is smaller than it.
    let padded = Container::new(content).padding(Padding {
        top: frame.y,
        right: frame.x,
        bottom: frame.y,
        left: frame.x,
    });

    let scrollable = Scrollable::new(padded)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        });

    let locked = locked_scrollable(scrollable).on_resize(Message::Resized);

    let interaction = if state.is_dragging() {
        mouse::Interaction::Grabbing
    } else if state.can_grab() {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::default()
    };

    let surface_color = ctx.surface_color;
    let mut layers = Stack::new().push(
        Container::new(mouse_area(locked).interaction(interaction))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(surface_color)),
                ..Default::default()
            }),
    );

    if state.image().is_none() {
        layers = layers.push(
            Container::new(Text::new(ctx.i18n.tr("photo-review-loading")))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}
