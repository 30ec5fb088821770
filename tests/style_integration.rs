// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use iced_gallery::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_gallery::ui::styles;

    #[test]
    fn all_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all styles compile and are callable
        let _ = styles::overlay_button(&theme, Status::Active);
        let _ = styles::thumbnail_button(true)(&theme, Status::Active);
        let _ = styles::thumbnail_button(false)(&theme, Status::Hovered);
        let _ = styles::backdrop(&theme);
        let _ = styles::caption_bar(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::THUMBNAIL_CELL;
    }

    #[test]
    fn overlay_button_brightens_on_hover() {
        let theme = Theme::Dark;
        let rest = styles::overlay_button(&theme, Status::Active);
        let hover = styles::overlay_button(&theme, Status::Hovered);

        let alpha = |style: &iced::widget::button::Style| match style.background {
            Some(iced::Background::Color(c)) => c.a,
            _ => 0.0,
        };
        assert!(alpha(&hover) > alpha(&rest));
    }

    #[test]
    fn active_thumbnail_ring_is_wider_than_inactive() {
        let theme = Theme::Dark;
        let active = styles::thumbnail_button(true)(&theme, Status::Active);
        let inactive = styles::thumbnail_button(false)(&theme, Status::Active);

        assert!(active.border.width > inactive.border.width);
    }
}
