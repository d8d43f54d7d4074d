//! Settings persistence module.
//!
//! This module provides functions to load and save application settings
//! as JSON in `.chatbar/settings.json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::app::state::{EnterBehavior, SettingsState};

/// Base URL used for navigation requests when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Persisted settings that are saved between sessions.
///
/// Enum values are stored by display name so an unknown name from a newer
/// or hand-edited file falls back to the default instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PersistedSettings {
    /// The enter key behavior ("Submit" or "Newline").
    pub enter_behavior: String,
    /// Id of the assistant messages go to when no override is set.
    pub default_assistant: Option<u64>,
    /// Root URL that navigation paths are joined onto.
    pub base_url: String,
}

/// Parses enter behavior from its string name.
///
/// Returns `EnterBehavior::Submit` as the default for unrecognized values.
fn parse_enter_behavior(s: &str) -> EnterBehavior {
    match s {
        "Newline" => EnterBehavior::Newline,
        _ => EnterBehavior::Submit,
    }
}

impl From<&SettingsState> for PersistedSettings {
    fn from(state: &SettingsState) -> Self {
        Self {
            enter_behavior: state.enter_behavior.name().to_string(),
            default_assistant: state.default_assistant,
            base_url: state.base_url.clone(),
        }
    }
}

impl PersistedSettings {
    /// Applies these persisted settings to a mutable `SettingsState`.
    ///
    /// Invalid or empty values are replaced with defaults.
    pub fn apply_to(&self, state: &mut SettingsState) {
        state.enter_behavior = parse_enter_behavior(&self.enter_behavior);
        state.default_assistant = self.default_assistant;
        state.base_url = if self.base_url.trim().is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            self.base_url.trim().to_string()
        };
    }
}

/// Loads settings from the specified settings file path.
///
/// If the file doesn't exist, returns default settings.
///
/// # Arguments
///
/// * `path` - Path to the settings file
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings(path: &Path) -> Result<PersistedSettings> {
    if !path.exists() {
        return Ok(PersistedSettings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))
}

/// Saves settings to the specified settings file path as pretty JSON.
///
/// The parent directory must exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_settings(path: &Path, settings: &PersistedSettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

    std::fs::write(path, json)
        .with_context(|| format!("Failed to write settings file: {}", path.display()))
}
