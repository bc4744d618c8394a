//! Shared utilities for the wordhoard backend.
//!
//! - `runtime`: single-threaded Tokio bridge used by the binary entry point
//! - `settings`: JSON settings with environment overrides
//! - `logging`: fern dispatcher behind the `log` facade

pub mod logging;
mod runtime;
mod settings;

pub use runtime::block_on;

/// Compile a built-in pattern, logging and returning `None` if it is invalid.
pub(crate) fn compile_pattern(pattern: &str) -> Option<regex::Regex> {
    match regex::Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            crate::warn!("Failed to compile pattern '{}': {}", pattern, e);
            None
        }
    }
}
pub use settings::{
    default_settings_path, Settings, SettingsError, TranslationSettings, ENV_API_KEY, ENV_API_URL,
    ENV_MODEL,
};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
