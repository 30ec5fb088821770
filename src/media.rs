// SPDX-License-Identifier: MPL-2.0
//! Synchronous slide image loading.
//!
//! All gallery images are decoded up front, before the first frame is drawn.
//! The gallery is a finite, manifest-declared set, so there is no lazy or
//! asynchronous loading path: a slide that cannot be decoded is a startup
//! error, matching the fail-outright stance of the manifest itself.

use crate::error::{Error, Result};
use crate::manifest::SlideDeck;
use iced::widget::image::Handle;
use image_rs::DynamicImage;
use std::path::Path;

/// Bounding box (in pixels) for thumbnails generated from the slide image
/// when the manifest declares no thumbnail file.
pub const THUMBNAIL_BOX: u32 = 160;

/// A decoded image ready for the Iced image widget.
#[derive(Debug, Clone)]
pub struct SlideImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl SlideImage {
    fn from_dynamic(image: &DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            handle: Handle::from_rgba(width, height, rgba.into_raw()),
            width,
            height,
        }
    }
}

/// The slide image and its thumbnail, index-aligned with the deck.
#[derive(Debug, Clone)]
pub struct SlideMedia {
    pub image: SlideImage,
    pub thumbnail: SlideImage,
}

fn decode(path: &Path) -> Result<DynamicImage> {
    image_rs::open(path).map_err(|e| Error::Image(format!("{}: {}", path.display(), e)))
}

/// Loads one slide. When the thumbnail path equals the image path (the
/// manifest declared none), the thumbnail is downscaled from the already
/// decoded slide instead of decoding the file twice.
pub fn load_slide(image_path: &Path, thumbnail_path: &Path) -> Result<SlideMedia> {
    let full = decode(image_path)?;

    let thumbnail = if thumbnail_path == image_path {
        SlideImage::from_dynamic(&full.thumbnail(THUMBNAIL_BOX, THUMBNAIL_BOX))
    } else {
        SlideImage::from_dynamic(&decode(thumbnail_path)?)
    };

    Ok(SlideMedia {
        image: SlideImage::from_dynamic(&full),
        thumbnail,
    })
}

/// Loads every slide of the deck, in deck order.
pub fn load_deck(deck: &SlideDeck) -> Result<Vec<SlideMedia>> {
    (0..deck.len())
        .map(|position| load_slide(deck.image(position), deck.thumbnail(position)))
        .collect()
}
