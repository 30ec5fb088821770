// SPDX-License-Identifier: MPL-2.0
//! Gallery page: the thumbnail grid shown while the lightbox is closed.

use crate::i18n::fluent::I18n;
use crate::media::SlideMedia;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Image, Row, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Open the lightbox on the current slide.
    OpenPressed,
    /// Open the lightbox directly on slide `n` (1-based).
    ThumbnailPressed(usize),
}

/// Context required to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: Option<&'a str>,
    pub media: &'a [SlideMedia],
}

/// Renders the gallery title, the thumbnail grid, and the open button.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    if let Some(title) = ctx.title {
        column = column.push(Text::new(title.to_string()).size(28));
    }

    column = column.push(Text::new(ctx.i18n.tr("page-hint")).size(14));

    for (row_index, chunk) in ctx.media.chunks(sizing::PAGE_GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::SM);
        for (col_index, slide) in chunk.iter().enumerate() {
            let slide_number = row_index * sizing::PAGE_GRID_COLUMNS + col_index + 1;
            row = row.push(
                button(
                    Image::new(slide.thumbnail.handle.clone())
                        .width(Length::Fixed(sizing::THUMBNAIL_CELL))
                        .height(Length::Fixed(sizing::THUMBNAIL_CELL)),
                )
                .padding(spacing::XS)
                .style(styles::thumbnail_button(false))
                .on_press(Message::ThumbnailPressed(slide_number)),
            );
        }
        column = column.push(row);
    }

    column = column.push(
        button(Text::new(ctx.i18n.tr("open-gallery-button")))
            .style(styles::overlay_button)
            .on_press(Message::OpenPressed),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}
