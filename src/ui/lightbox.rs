// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: one slide at a time with stepping, direct thumbnail
//! jumps, and the caption/credit bar.
//!
//! The overlay renders entirely from the shared [`Gallery`] index: which
//! slide is visible, which thumbnail is highlighted, and which caption and
//! credit are shown are all derived here from the same position, so exactly
//! one slide and one active thumbnail exist per frame by construction.

use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::manifest::SlideDeck;
use crate::media::SlideMedia;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, scrollable, tooltip, Column, Container, Image, Row, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the lightbox overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close button pressed.
    ClosePressed,
    /// Click on the dimmed backdrop outside the overlay.
    BackdropPressed,
    /// Step to the previous slide.
    PreviousPressed,
    /// Step to the next slide.
    NextPressed,
    /// Jump directly to slide `n` (1-based).
    ThumbnailPressed(usize),
}

/// Context required to render the lightbox overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub deck: &'a SlideDeck,
    pub media: &'a [SlideMedia],
    pub gallery: &'a Gallery,
}

/// Renders the overlay content stacked above the dimmed page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let position = ctx.gallery.position();
    let slide = &ctx.media[position];

    let counter = Container::new(
        Text::new(format!("{} / {}", ctx.gallery.current(), ctx.gallery.len())).size(14),
    )
    .padding(spacing::XS)
    .style(styles::caption_bar);

    let close_button = button(Text::new(ctx.i18n.tr("lightbox-close")))
        .style(styles::overlay_button)
        .on_press(Message::ClosePressed);

    let top_bar = Row::new()
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .push(counter)
        .push(iced::widget::space::horizontal())
        .push(close_button);

    let previous_button = tooltip(
        button(Text::new("‹").size(32))
            .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
            .style(styles::overlay_button)
            .on_press(Message::PreviousPressed),
        Text::new(ctx.i18n.tr("lightbox-previous")).size(12),
        tooltip::Position::Top,
    );

    let next_button = tooltip(
        button(Text::new("›").size(32))
            .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
            .style(styles::overlay_button)
            .on_press(Message::NextPressed),
        Text::new(ctx.i18n.tr("lightbox-next")).size(12),
        tooltip::Position::Top,
    );

    let slide_view = Container::new(Image::new(slide.image.handle.clone()))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let main_row = Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(previous_button)
        .push(slide_view)
        .push(next_button);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(top_bar)
        .push(main_row)
        .push(caption_bar(ctx.deck, position))
        .push(thumbnail_strip(ctx.media, ctx.gallery))
        .into()
}

/// The caption and credit display targets, mirroring the sources at the
/// current position.
fn caption_bar(deck: &SlideDeck, position: usize) -> Element<'_, Message> {
    let caption = Text::new(deck.caption(position)).size(16);
    let credit = Text::new(deck.credit(position))
        .size(12)
        .color(palette::GRAY_200);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(caption)
            .push(credit),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .align_x(alignment::Horizontal::Center)
    .style(styles::caption_bar)
    .into()
}

/// One thumbnail per slide; the current slide's thumbnail carries the
/// highlight ring and full opacity, the rest are dimmed.
fn thumbnail_strip<'a>(media: &'a [SlideMedia], gallery: &'a Gallery) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);

    for (position, slide) in media.iter().enumerate() {
        let slide_number = position + 1;
        let active = gallery.is_current(slide_number);
        let alpha = if active {
            1.0
        } else {
            opacity::THUMBNAIL_INACTIVE
        };

        row = row.push(
            button(
                Image::new(slide.thumbnail.handle.clone())
                    .width(Length::Fixed(sizing::THUMBNAIL_CELL))
                    .height(Length::Fixed(sizing::THUMBNAIL_CELL))
                    .opacity(alpha),
            )
            .padding(spacing::XS)
            .style(styles::thumbnail_button(active))
            .on_press(Message::ThumbnailPressed(slide_number)),
        );
    }

    Container::new(scrollable(row).direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::new(),
    )))
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}
