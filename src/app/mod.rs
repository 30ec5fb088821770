// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and lightbox.
//!
//! The `App` struct wires together the gallery state, localization, and the
//! two views, and translates messages into index changes and modal
//! visibility. Policy decisions (window sizing, startup loading) stay close
//! to the main update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::error::Error;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::manifest::{self, SlideDeck};
use crate::media::{self, SlideMedia};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// A fully loaded gallery: the four collections, their decoded images, and
/// the navigation state over them.
pub struct Loaded {
    pub title: Option<String>,
    pub deck: SlideDeck,
    pub media: Vec<SlideMedia>,
    pub gallery: Gallery,
}

/// Root Iced application state bridging the page, the lightbox, and
/// localization.
pub struct App {
    pub i18n: I18n,
    loaded: Option<Loaded>,
    load_error: Option<Error>,
    /// Whether the lightbox overlay is shown. Independent of the slide
    /// index: closing and reopening resumes on the same slide.
    modal_open: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("modal_open", &self.modal_open)
            .field("slides", &self.loaded.as_ref().map(|l| l.gallery.len()))
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn load_gallery(manifest_path: &Path) -> Result<Loaded, Error> {
    let manifest = manifest::load_from_path(manifest_path)?;
    let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let deck = SlideDeck::from_manifest(&manifest, base_dir)?;
    let media = media::load_deck(&deck)?;
    let gallery = Gallery::new(deck.len())?;
    log::info!(
        "loaded gallery '{}' with {} slides",
        manifest.title.as_deref().unwrap_or("(untitled)"),
        deck.len()
    );

    Ok(Loaded {
        title: manifest.title,
        deck,
        media,
        gallery,
    })
}

impl App {
    /// Initializes application state: resolves the locale and synchronously
    /// loads the gallery named by `Flags`. A gallery that fails to load
    /// leaves the application on an error screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (loaded, load_error) = match flags.manifest_path.as_deref() {
            Some(path) => match load_gallery(&PathBuf::from(path)) {
                Ok(loaded) => (Some(loaded), None),
                Err(e) => {
                    log::warn!("failed to load gallery: {e}");
                    (None, Some(e))
                }
            },
            None => (
                None,
                Some(Error::Manifest("no gallery manifest given".to_string())),
            ),
        };

        let app = App {
            i18n,
            loaded,
            load_error,
            modal_open: false,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.loaded.as_ref().and_then(|l| l.title.as_deref()) {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Whether the lightbox overlay is currently shown.
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }
}


#[cfg(test)]
mod tests {
    use super::test_fixtures::app_with_slides;

    #[test]
    fn title_includes_gallery_title() {
        let app = app_with_slides(2);
        let title = app.title();
        assert!(title.starts_with("Test gallery - "));
    }

    #[test]
    fn modal_starts_closed_on_first_slide() {
        let app = app_with_slides(3);
        assert!(!app.is_modal_open());
        assert_eq!(super::test_fixtures::current_index(&app), 1);
    }
}
