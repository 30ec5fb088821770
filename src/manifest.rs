// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest loading and the slide collections derived from it.
//!
//! A gallery is declared in a TOML file listing its slides in display order.
//! Each slide names an image file and carries the caption and credit text
//! shown in the lightbox, plus an optional pre-rendered thumbnail:
//!
//! ```toml
//! title = "Roundhouse restoration"
//!
//! [[slides]]
//! image = "photos/engine-168.jpg"
//! thumbnail = "thumbs/engine-168.jpg"
//! caption = "Engine 168 after cosmetic restoration"
//! credit = "Photo: J. Ferguson"
//! ```
//!
//! Relative paths are resolved against the manifest's parent directory.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One slide record as written in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideEntry {
    /// Image file shown in the lightbox.
    pub image: PathBuf,
    /// Optional thumbnail file; the slide image is downscaled when absent.
    #[serde(default)]
    pub thumbnail: Option<PathBuf>,
    /// Caption mirrored into the caption bar while this slide is current.
    #[serde(default)]
    pub caption: String,
    /// Credit line mirrored alongside the caption.
    #[serde(default)]
    pub credit: String,
}

/// Parsed gallery manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Optional gallery title, used for the window title.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slides: Vec<SlideEntry>,
}

/// Loads and parses a manifest file. Unlike the settings file, a broken
/// manifest is a hard error rather than a silent fallback: the gallery
/// cannot render without its slide definitions.
pub fn load_from_path(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
    let manifest: Manifest =
        toml::from_str(&content).map_err(|e| Error::Manifest(e.to_string()))?;
    manifest.validate()?;
    Ok(manifest)
}

impl Manifest {
    /// Checks the structural requirements the collections rely on.
    pub fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            return Err(Error::Manifest("manifest declares no slides".to_string()));
        }
        for (i, slide) in self.slides.iter().enumerate() {
            if slide.image.as_os_str().is_empty() {
                return Err(Error::Manifest(format!(
                    "slide {} has an empty image path",
                    i + 1
                )));
            }
        }
        Ok(())
    }

    /// Number of slides declared.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when no slides are declared (rejected by [`validate`](Self::validate)).
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// The four index-aligned slide collections, resolved and validated.
///
/// This is the constructor-injected reference set the lightbox renders from:
/// slide images, thumbnails, captions, and credits, all of equal length N.
/// Slide `n` (1-based) corresponds to position `n - 1` in every collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideDeck {
    images: Vec<PathBuf>,
    thumbnails: Vec<PathBuf>,
    captions: Vec<String>,
    credits: Vec<String>,
}

impl SlideDeck {
    /// Builds a deck from the four parallel collections.
    ///
    /// Rejects empty decks and collections of diverging length; the
    /// index-aligned lookup every render step performs is only sound when
    /// all four collections agree on N.
    pub fn new(
        images: Vec<PathBuf>,
        thumbnails: Vec<PathBuf>,
        captions: Vec<String>,
        credits: Vec<String>,
    ) -> Result<Self> {
        let n = images.len();
        if n == 0 {
            return Err(Error::Manifest("deck has no slides".to_string()));
        }
        if thumbnails.len() != n || captions.len() != n || credits.len() != n {
            return Err(Error::Manifest(format!(
                "collection lengths diverge: {} images, {} thumbnails, {} captions, {} credits",
                n,
                thumbnails.len(),
                captions.len(),
                credits.len()
            )));
        }
        Ok(Self {
            images,
            thumbnails,
            captions,
            credits,
        })
    }

    /// Builds the deck from a manifest, resolving relative paths against
    /// `base_dir` and falling back to the slide image where no thumbnail
    /// file is given.
    pub fn from_manifest(manifest: &Manifest, base_dir: &Path) -> Result<Self> {
        manifest.validate()?;

        let resolve = |p: &Path| -> PathBuf {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base_dir.join(p)
            }
        };

        let images: Vec<PathBuf> = manifest.slides.iter().map(|s| resolve(&s.image)).collect();
        let thumbnails: Vec<PathBuf> = manifest
            .slides
            .iter()
            .map(|s| match s.thumbnail.as_deref() {
                Some(thumb) => resolve(thumb),
                None => resolve(&s.image),
            })
            .collect();
        let captions: Vec<String> = manifest.slides.iter().map(|s| s.caption.clone()).collect();
        let credits: Vec<String> = manifest.slides.iter().map(|s| s.credit.clone()).collect();

        Self::new(images, thumbnails, captions, credits)
    }

    /// Number of slides N shared by all four collections.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false: construction rejects empty decks.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Slide image path at 0-based `position`.
    pub fn image(&self, position: usize) -> &Path {
        &self.images[position]
    }

    /// Thumbnail path at 0-based `position`.
    pub fn thumbnail(&self, position: usize) -> &Path {
        &self.thumbnails[position]
    }

    /// Caption text at 0-based `position`.
    pub fn caption(&self, position: usize) -> &str {
        &self.captions[position]
    }

    /// Credit text at 0-based `position`.
    pub fn credit(&self, position: usize) -> &str {
        &self.credits[position]
    }
}
