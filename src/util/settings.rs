//! Settings for a wordhoard run.
//!
//! Loaded from a JSON file (defaults to `<config dir>/wordhoard/settings.json`)
//! with every field optional, then overridden by `WORDHOARD_*` environment
//! variables. A missing file is not an error; a malformed one is.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the translation API key
pub const ENV_API_KEY: &str = "WORDHOARD_API_KEY";
/// Environment variable overriding the translation endpoint
pub const ENV_API_URL: &str = "WORDHOARD_API_URL";
/// Environment variable overriding the translation model
pub const ENV_MODEL: &str = "WORDHOARD_MODEL";

const APP_DIR_NAME: &str = "wordhoard";
const SETTINGS_FILE_NAME: &str = "settings.json";

const DEFAULT_API_URL: &str =
    "https://dashscope.aliyuncs.com/compatible-mode/v1/chat/completions";
const DEFAULT_MODEL: &str = "qwen-turbo-latest";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error types for settings loading
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Settings file exists but could not be read
    #[error("Failed to read settings file {path:?}: {message}")]
    Read { path: PathBuf, message: String },
    /// Settings file is not valid JSON for [`Settings`]
    #[error("Failed to parse settings file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Connection settings for the gloss (translation) service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationSettings {
    /// Bearer token; translation is disabled when absent
    pub api_key: Option<String>,
    /// OpenAI-compatible chat completions endpoint
    pub api_url: String,
    /// Model name sent with each request
    pub model: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub translation: TranslationSettings,
    /// Directory for the default output file when `--output` is not given
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `path`, or from the default location when `None`,
    /// then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_settings_path(),
        };

        let mut settings = match path {
            Some(ref p) if p.exists() => Self::from_file(p)?,
            Some(ref p) => {
                crate::debug!("No settings file at {:?}, using defaults", p);
                Self::default()
            }
            None => {
                crate::debug!("Could not determine config directory, using default settings");
                Self::default()
            }
        };

        settings.apply_env();
        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let settings = serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        crate::debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Overlay non-empty `WORDHOARD_*` environment variables.
    fn apply_env(&mut self) {
        if let Some(key) = non_empty_env(ENV_API_KEY) {
            self.translation.api_key = Some(key);
        }
        if let Some(url) = non_empty_env(ENV_API_URL) {
            self.translation.api_url = url;
        }
        if let Some(model) = non_empty_env(ENV_MODEL) {
            self.translation.model = model;
        }
        // An empty key in the file counts as unset
        if self
            .translation
            .api_key
            .as_deref()
            .is_some_and(|k| k.trim().is_empty())
        {
            self.translation.api_key = None;
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// `<config dir>/wordhoard/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
