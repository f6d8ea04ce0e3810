use iced::theme::Palette;
use iced::{Color, Theme};
use serde::Deserialize;
use thiserror::Error;

/// Errors produced while reading theme colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ThemeError {
    #[error("invalid hex color '{0}', expected #RRGGBB")]
    InvalidHexColor(String),
}

/// Built-in palettes selectable from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemePreset {
    #[default]
    Light,
    Midnight,
}

impl ThemePreset {
    pub(crate) fn id(self) -> &'static str {
        match self {
            ThemePreset::Light => "orion-light",
            ThemePreset::Midnight => "orion-midnight",
        }
    }

    pub(crate) fn palette(self) -> ColorPalette {
        match self {
            ThemePreset::Light => ColorPalette::default(),
            ThemePreset::Midnight => ColorPalette::midnight(),
        }
    }
}

/// Hex palette as written in presets and settings.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) muted: String,
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) border: String,
    pub(crate) primary: String,
    pub(crate) primary_soft: String,
    pub(crate) accent: String,
    pub(crate) success: String,
    pub(crate) warning: String,
    pub(crate) danger: String,
    // POS stage colors
    pub(crate) stage_background: String,
    pub(crate) stage_surface: String,
    pub(crate) stage_foreground: String,
    pub(crate) stage_muted: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#0F172A"),
            muted: String::from("#64748B"),
            background: String::from("#F1F5F9"),
            surface: String::from("#FFFFFF"),
            border: String::from("#E2E8F0"),
            primary: String::from("#2563EB"),
            primary_soft: String::from("#DBEAFE"),
            accent: String::from("#6366F1"),
            success: String::from("#16A34A"),
            warning: String::from("#D97706"),
            danger: String::from("#DC2626"),
            stage_background: String::from("#0B1120"),
            stage_surface: String::from("#16213A"),
            stage_foreground: String::from("#F1F5F9"),
            stage_muted: String::from("#94A3B8"),
        }
    }
}

impl ColorPalette {
    fn midnight() -> Self {
        Self {
            foreground: String::from("#E2E8F0"),
            muted: String::from("#94A3B8"),
            background: String::from("#0F172A"),
            surface: String::from("#1E293B"),
            border: String::from("#334155"),
            primary: String::from("#38BDF8"),
            primary_soft: String::from("#0C4A6E"),
            ..Self::default()
        }
    }
}

/// Palette converted to iced colors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) muted: Color,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) border: Color,
    pub(crate) primary: Color,
    pub(crate) primary_soft: Color,
    pub(crate) accent: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) danger: Color,
    pub(crate) stage_background: Color,
    pub(crate) stage_surface: Color,
    pub(crate) stage_foreground: Color,
    pub(crate) stage_muted: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: color_or_fallback(&p.foreground),
            muted: color_or_fallback(&p.muted),
            background: color_or_fallback(&p.background),
            surface: color_or_fallback(&p.surface),
            border: color_or_fallback(&p.border),
            primary: color_or_fallback(&p.primary),
            primary_soft: color_or_fallback(&p.primary_soft),
            accent: color_or_fallback(&p.accent),
            success: color_or_fallback(&p.success),
            warning: color_or_fallback(&p.warning),
            danger: color_or_fallback(&p.danger),
            stage_background: color_or_fallback(&p.stage_background),
            stage_surface: color_or_fallback(&p.stage_surface),
            stage_foreground: color_or_fallback(&p.stage_foreground),
            stage_muted: color_or_fallback(&p.stage_muted),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.primary,
            success: palette.success,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn from_palette(id: String, palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(palette),
        }
    }

    #[cfg(test)]
    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed from the app root down to widget views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Owns the active theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    /// Build the theme for a preset, optionally overriding the primary color.
    pub(crate) fn new(preset: ThemePreset, accent: Option<&str>) -> Self {
        let mut palette = preset.palette();
        if let Some(accent) = accent {
            match parse_hex_color(accent) {
                Ok(_) => palette.primary = accent.to_string(),
                Err(err) => log::warn!("ignoring accent override: {err}"),
            }
        }

        Self {
            current: AppTheme::from_palette(preset.id().to_string(), &palette),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(ThemePreset::default(), None)
    }
}

/// Parse a `#RRGGBB` string.
///
/// iced also accepts short and alpha forms; settings only allow the
/// six-digit form with a leading `#`.
pub(crate) fn parse_hex_color(value: &str) -> Result<Color, ThemeError> {
    let invalid = || ThemeError::InvalidHexColor(value.to_string());

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    value.parse::<Color>().map_err(|err| {
        log::debug!("hex color '{value}' rejected: {err}");
        invalid()
    })
}

/// Return `color` with its alpha replaced.
pub(crate) fn with_alpha(mut color: Color, alpha: f32) -> Color {
    color.a = alpha;
    color
}

fn color_or_fallback(value: &str) -> Color {
    parse_hex_color(value).unwrap_or_else(|err| {
        log::warn!("{err}, falling back to black");
        Color::BLACK
    })
}
