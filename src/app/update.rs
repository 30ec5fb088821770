// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state transitions funnel through [`handle`]: modal visibility
//! toggles, index stepping, direct jumps, and keyboard routing. The view is
//! re-derived from the updated state on the next frame, which is where the
//! render step of the original widget contract lives.

use super::{App, Message};
use crate::ui::lightbox;
use crate::ui::page;
use iced::keyboard;
use iced::{Event, Task};

pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Page(message) => handle_page(app, message),
        Message::Lightbox(message) => handle_lightbox(app, message),
        Message::RawEvent(event) => handle_raw_event(app, &event),
    }

    Task::none()
}

fn handle_page(app: &mut App, message: page::Message) {
    match message {
        page::Message::OpenPressed => app.modal_open = true,
        page::Message::ThumbnailPressed(n) => {
            if let Some(loaded) = app.loaded.as_mut() {
                loaded.gallery.go_to(n as i64);
            }
            app.modal_open = true;
        }
    }
}

fn handle_lightbox(app: &mut App, message: lightbox::Message) {
    match message {
        lightbox::Message::ClosePressed | lightbox::Message::BackdropPressed => {
            app.modal_open = false;
        }
        lightbox::Message::PreviousPressed => advance(app, -1),
        lightbox::Message::NextPressed => advance(app, 1),
        lightbox::Message::ThumbnailPressed(n) => {
            if let Some(loaded) = app.loaded.as_mut() {
                loaded.gallery.go_to(n as i64);
            }
        }
    }
}

fn advance(app: &mut App, delta: i32) {
    if let Some(loaded) = app.loaded.as_mut() {
        loaded.gallery.advance(delta);
    }
}

/// Keyboard bindings are scoped to the open lightbox: arrows step, Escape
/// closes. With the lightbox closed all keys are ignored.
fn handle_raw_event(app: &mut App, event: &Event) {
    if !app.modal_open {
        return;
    }

    if let Event::Keyboard(keyboard::Event::KeyPressed {
        key: keyboard::Key::Named(named),
        ..
    }) = event
    {
        match named {
            keyboard::key::Named::ArrowLeft => advance(app, -1),
            keyboard::key::Named::ArrowRight => advance(app, 1),
            keyboard::key::Named::Escape => app.modal_open = false,
            _ => {}
        }
    }
}
