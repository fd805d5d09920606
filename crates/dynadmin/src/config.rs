use std::{env, path::PathBuf};

/// Application configuration loaded from environment variables.
///
/// The endpoint itself is not configured here: it lives in the settings store
/// and changes only through the console.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the settings file. `None` when no config directory exists, in
    /// which case settings are not persisted.
    pub settings_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNADMIN_SETTINGS_PATH` - Settings file path
    ///   (default: `<config dir>/dynadmin/settings.json`)
    pub fn from_env() -> Self {
        Self {
            settings_path: env::var("DYNADMIN_SETTINGS_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .or_else(default_settings_path),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Platform config directory location of the settings file.
fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dynadmin").join("settings.json"))
}
