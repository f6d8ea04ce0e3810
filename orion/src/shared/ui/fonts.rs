use iced::Font;
use iced::font::Weight;

pub(crate) const DEFAULT_UI_FONT_SIZE: f32 = 14.0;

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: DEFAULT_UI_FONT_SIZE,
        }
    }
}

/// Combined font configuration for body text and headings.
#[derive(Debug, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) heading: Font,
}

impl FontsConfig {
    /// Build the font configuration for a base UI size.
    pub(crate) fn with_size(size: f32) -> Self {
        Self {
            ui: UiFonts {
                size,
                ..UiFonts::default()
            },
            ..Self::default()
        }
    }

    /// Scale the base size, used for headings and captions.
    pub(crate) fn scaled(&self, factor: f32) -> f32 {
        self.ui.size * factor
    }
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            ui: UiFonts::default(),
            heading: Font {
                weight: Weight::Semibold,
                ..Font::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_custom_size_when_config_built_then_scale_follows_base_size() {
        let fonts = FontsConfig::with_size(20.0);
        assert_eq!(fonts.ui.size, 20.0);
        assert_eq!(fonts.scaled(0.5), 10.0);
        assert_eq!(fonts.heading.weight, Weight::Semibold);
    }
}
