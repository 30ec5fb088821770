// SPDX-License-Identifier: MPL-2.0
//! Design tokens centralisés suivant le Design Tokens W3C standard.
//!
//! Tokens are designed to be consistent: check the impact on all components
//! before modifying, and maintain the spacing ratios (e.g. MD = XS * 2).

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

pub mod opacity {
    /// Dimmed lightbox backdrop over the page content.
    pub const BACKDROP: f32 = 0.85;
    /// Overlay chrome (nav buttons, counter) at rest.
    pub const OVERLAY_STRONG: f32 = 0.65;
    /// Overlay chrome under the cursor.
    pub const OVERLAY_HOVER: f32 = 0.85;
    /// Overlay chrome while pressed.
    pub const OVERLAY_PRESSED: f32 = 0.95;
    /// Thumbnails other than the active one.
    pub const THUMBNAIL_INACTIVE: f32 = 0.5;
}

/// Spacing scale (8px grid).
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Edge length of the square thumbnail cells.
    pub const THUMBNAIL_CELL: f32 = 96.0;
    /// Width of the previous/next overlay buttons.
    pub const NAV_BUTTON_WIDTH: f32 = 48.0;
    /// Thumbnails per row in the page grid.
    pub const PAGE_GRID_COLUMNS: usize = 4;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod border {
    /// Width of the active-thumbnail highlight ring.
    pub const ACTIVE_RING: f32 = 3.0;
}
