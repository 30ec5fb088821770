// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::lightbox;
use crate::ui::page;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    Lightbox(lightbox::Message),
    /// Native event forwarded from the subscription layer (keyboard).
    RawEvent(iced::Event),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Path to the gallery manifest to load on startup.
    pub manifest_path: Option<String>,
}
