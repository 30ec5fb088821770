// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config};
use iced_gallery::gallery::Gallery;
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::manifest::{self, SlideDeck};
use iced_gallery::media;
use image_rs::RgbaImage;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    RgbaImage::new(width, height)
        .save(dir.join(name))
        .expect("failed to write test image");
}

#[test]
fn manifest_to_loaded_gallery_end_to_end() {
    let dir = tempdir().expect("failed to create temp dir");
    write_png(dir.path(), "a.png", 16, 8);
    write_png(dir.path(), "b.png", 8, 16);
    write_png(dir.path(), "b-thumb.png", 4, 8);

    let manifest_path = dir.path().join("gallery.toml");
    fs::write(
        &manifest_path,
        r#"
title = "Integration"

[[slides]]
image = "a.png"
caption = "First slide"
credit = "Photo: A"

[[slides]]
image = "b.png"
thumbnail = "b-thumb.png"
caption = "Second slide"
credit = "Photo: B"
"#,
    )
    .expect("failed to write manifest");

    let manifest = manifest::load_from_path(&manifest_path).expect("manifest should load");
    let deck = SlideDeck::from_manifest(&manifest, dir.path()).expect("deck should build");
    let loaded = media::load_deck(&deck).expect("images should decode");
    let mut gallery = Gallery::new(deck.len()).expect("gallery should build");

    // Initial render state: slide 1, matching caption and credit.
    assert_eq!(gallery.current(), 1);
    assert_eq!(deck.caption(gallery.position()), "First slide");
    assert_eq!(deck.credit(gallery.position()), "Photo: A");
    assert_eq!(loaded[gallery.position()].image.width, 16);

    // Step forward: everything moves together, index-aligned.
    gallery.advance(1);
    assert_eq!(deck.caption(gallery.position()), "Second slide");
    assert_eq!(deck.credit(gallery.position()), "Photo: B");
    assert_eq!(loaded[gallery.position()].thumbnail.width, 4);

    // Wrap around the end back to slide 1.
    gallery.advance(1);
    assert_eq!(gallery.current(), 1);
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("failed to close temporary directory");
}

#[test]
fn translated_labels_differ_between_locales() {
    let i18n_en = I18n::new(Some("en-US".to_string()), &Config::default());
    let i18n_fr = I18n::new(Some("fr".to_string()), &Config::default());

    let en = i18n_en.tr("lightbox-close");
    let fr = i18n_fr.tr("lightbox-close");
    assert!(!en.starts_with("MISSING:"));
    assert!(!fr.starts_with("MISSING:"));
    assert_ne!(en, fr);
}
