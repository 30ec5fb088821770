// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a modal image-gallery viewer built with the Iced GUI
//! framework.
//!
//! A gallery is declared in a TOML manifest (slides with captions, credits,
//! and optional thumbnails) and rendered as a thumbnail page with a lightbox
//! overlay: one slide visible at a time, wraparound next/previous stepping,
//! and direct jumps via the thumbnail strip.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod manifest;
pub mod media;
pub mod ui;
