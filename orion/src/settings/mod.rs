mod errors;
pub(crate) mod model;
mod storage;

pub(crate) use self::model::SettingsData;
pub(crate) use self::storage::SettingsLoadStatus;

/// Load settings from disk, falling back to defaults on any failure.
pub(crate) fn load_initial_settings() -> SettingsData {
    match storage::load_settings() {
        Ok(load) => {
            let (settings, status) = load.into_parts();
            match status {
                SettingsLoadStatus::Loaded => {
                    log::info!(
                        "settings loaded from {}",
                        storage::settings_path().display()
                    );
                },
                SettingsLoadStatus::Missing => {
                    log::debug!("settings file missing, using defaults");
                },
                SettingsLoadStatus::Invalid(message) => {
                    log::warn!("settings file invalid: {message}");
                },
            }
            settings
        },
        Err(err) => {
            log::warn!("failed to load settings: {err}");
            SettingsData::default()
        },
    }
}
