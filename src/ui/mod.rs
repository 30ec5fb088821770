// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`page`] - Thumbnail grid page from which the gallery is opened
//! - [`lightbox`] - Modal overlay showing one slide with navigation
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, backdrop)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod lightbox;
pub mod page;
pub mod styles;
