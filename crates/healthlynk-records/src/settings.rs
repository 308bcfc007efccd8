//! User preferences

use crate::io::{read_json, write_json};
use crate::paths::Paths;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub notifications_enabled: bool,
    pub location_enabled: bool,
    pub voice_enabled: bool,
    /// 0-100
    pub voice_volume: u8,
    pub dark_theme: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            location_enabled: true,
            voice_enabled: true,
            voice_volume: 80,
            dark_theme: false,
        }
    }
}

impl Settings {
    pub fn load(paths: &Paths) -> anyhow::Result<Self> {
        let mut settings: Settings = read_json(&paths.settings_file())?;
        settings.voice_volume = settings.voice_volume.min(100);
        Ok(settings)
    }

    pub fn save(&self, paths: &Paths) -> anyhow::Result<()> {
        write_json(&paths.settings_file(), self)?;
        tracing::debug!(path = %paths.settings_file().display(), "settings saved");
        Ok(())
    }
}
