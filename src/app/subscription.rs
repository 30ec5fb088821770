// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Forwards native keyboard events into the update loop; whether a key has
//! any effect depends on the modal state, which only `update` knows.

use super::Message;
use iced::{event, Subscription};

/// Listens for keyboard events not already captured by a focused widget.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match (&event, status) {
        (event::Event::Keyboard(..), event::Status::Ignored) => {
            Some(Message::RawEvent(event.clone()))
        }
        _ => None,
    })
}
