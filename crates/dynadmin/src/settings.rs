//! Durable console settings.
//!
//! Settings are a flat JSON object in one file. The console owns a single key,
//! [`ENDPOINT_STORAGE_KEY`]; any other keys found in the file are kept on
//! write.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use dynadmin_core::endpoint::{DEFAULT_ENDPOINT, ENDPOINT_STORAGE_KEY};
use thiserror::Error;

/// Errors that can occur while persisting settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings storage is unavailable")]
    Unavailable,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type Settings = BTreeMap<String, serde_json::Value>;

/// File-backed key-value settings.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// A store with no backing file. Reads yield defaults, writes fail.
    pub fn unavailable() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads the persisted endpoint.
    ///
    /// Falls back to [`DEFAULT_ENDPOINT`] when storage is unavailable, the
    /// file is missing or unreadable, or the value is absent or blank.
    pub fn load_endpoint(&self) -> String {
        let settings = match self.read() {
            Ok(settings) => settings,
            Err(SettingsError::Unavailable) => {
                tracing::debug!("Settings storage unavailable, using default endpoint");
                return DEFAULT_ENDPOINT.to_string();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read settings, using default endpoint");
                return DEFAULT_ENDPOINT.to_string();
            }
        };

        settings
            .get(ENDPOINT_STORAGE_KEY)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Persists the endpoint, keeping any other keys in the file.
    pub fn save_endpoint(&self, endpoint: &str) -> Result<(), SettingsError> {
        let path = self.path.as_ref().ok_or(SettingsError::Unavailable)?;

        let mut settings = match self.read() {
            Ok(settings) => settings,
            Err(SettingsError::Json(e)) => {
                tracing::warn!(error = %e, path = %path.display(), "Overwriting malformed settings file");
                Settings::new()
            }
            Err(e) => return Err(e),
        };

        settings.insert(
            ENDPOINT_STORAGE_KEY.to_string(),
            serde_json::Value::String(endpoint.to_string()),
        );

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&settings)?)?;

        tracing::debug!(path = %path.display(), endpoint, "Endpoint persisted");
        Ok(())
    }

    /// Reads the whole settings object. A missing file is an empty object.
    fn read(&self) -> Result<Settings, SettingsError> {
        let path = self.path.as_ref().ok_or(SettingsError::Unavailable)?;

        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::new()),
            Err(e) => Err(e.into()),
        }
    }
}
