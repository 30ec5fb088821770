// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the thumbnail page, and stacks the lightbox overlay above it
//! while the modal is open. The dimmed backdrop sits between the two layers
//! and closes the lightbox when clicked.

use super::{App, Message};
use crate::ui::lightbox;
use crate::ui::page;
use crate::ui::styles;
use iced::widget::{mouse_area, stack, Container, Text};
use iced::{alignment, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let Some(loaded) = app.loaded.as_ref() else {
        return error_view(app);
    };

    let page_view = page::view(page::ViewContext {
        i18n: &app.i18n,
        title: loaded.title.as_deref(),
        media: &loaded.media,
    })
    .map(Message::Page);

    if !app.is_modal_open() {
        return page_view;
    }

    let backdrop = Container::new(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::backdrop);

    let overlay = lightbox::view(lightbox::ViewContext {
        i18n: &app.i18n,
        deck: &loaded.deck,
        media: &loaded.media,
        gallery: &loaded.gallery,
    })
    .map(Message::Lightbox);

    stack![
        page_view,
        mouse_area(backdrop).on_press(Message::Lightbox(lightbox::Message::BackdropPressed)),
        overlay
    ]
    .into()
}

fn error_view(app: &App) -> Element<'_, Message> {
    let details = app
        .load_error
        .as_ref()
        .map(|e| e.to_string())
        .unwrap_or_default();

    Container::new(Text::new(details).size(16))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
