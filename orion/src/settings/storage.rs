use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    pub(crate) fn new(
        settings: SettingsData,
        status: SettingsLoadStatus,
    ) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

pub(crate) fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

pub(crate) fn load_settings_from_path(
    path: &Path,
) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<SettingsData>(&data) {
        Ok(settings) => {
            Ok(SettingsLoad::new(settings, SettingsLoadStatus::Loaded))
        },
        Err(err) => Ok(SettingsLoad::new(
            SettingsData::default(),
            SettingsLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

pub(crate) fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("orion")
            .join("settings.json");
    }

    std::env::temp_dir().join("orion").join("settings.json")
}
