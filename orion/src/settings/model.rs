use serde::Deserialize;

use crate::shared::ui::fonts::DEFAULT_UI_FONT_SIZE;
use crate::shared::ui::theme::ThemePreset;

pub(crate) const MIN_FONT_SIZE: f32 = 10.0;
pub(crate) const MAX_FONT_SIZE: f32 = 24.0;

/// Theme section of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ThemeSettings {
    pub(crate) preset: ThemePreset,
    pub(crate) accent: Option<String>,
}

/// UI section of the settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct UiSettings {
    pub(crate) font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_UI_FONT_SIZE,
        }
    }
}

/// Settings payload read from `settings.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct SettingsData {
    theme: ThemeSettings,
    ui: UiSettings,
}

impl SettingsData {
    pub(crate) fn theme_preset(&self) -> ThemePreset {
        self.theme.preset
    }

    pub(crate) fn accent(&self) -> Option<&str> {
        self.theme.accent.as_deref()
    }

    /// Base UI font size, clamped to the supported range.
    pub(crate) fn font_size(&self) -> f32 {
        if self.ui.font_size.is_finite() {
            self.ui.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
        } else {
            DEFAULT_UI_FONT_SIZE
        }
    }
}
