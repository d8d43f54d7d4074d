//! File system operations.

use std::path::{Path, PathBuf};

use anyhow::Context;

pub mod corpus;
pub mod settings;

pub use corpus::{CorpusError, load_assistants, load_corpora, load_prompts};
pub use settings::{DEFAULT_BASE_URL, PersistedSettings, load_settings, save_settings};

/// Name of the hidden per-project directory.
pub const CHATBAR_DIR: &str = ".chatbar";

/// Holds all chatbar-related paths derived from a base directory.
///
/// Tests root this at a temporary directory; the binary roots it at the
/// current working directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use chatbar::fs::ChatbarPaths;
///
/// let paths = ChatbarPaths::new(Path::new("/tmp/test"));
/// assert_eq!(paths.settings_file(), Path::new("/tmp/test/.chatbar/settings.json"));
/// ```
#[derive(Debug, Clone)]
pub struct ChatbarPaths {
    base: PathBuf,
}

impl ChatbarPaths {
    /// Creates paths rooted at the given base directory.
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Creates paths rooted at the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_cwd() -> anyhow::Result<Self> {
        let base = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self { base })
    }

    /// Returns the base directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the `.chatbar` directory path.
    #[must_use]
    pub fn chatbar_dir(&self) -> PathBuf {
        self.base.join(CHATBAR_DIR)
    }

    /// Returns the settings file path (`.chatbar/settings.json`).
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.chatbar_dir().join("settings.json")
    }

    /// Returns the default assistant corpus path (`.chatbar/assistants.json`).
    #[must_use]
    pub fn assistants_file(&self) -> PathBuf {
        self.chatbar_dir().join("assistants.json")
    }

    /// Returns the default prompt corpus path (`.chatbar/prompts.json`).
    #[must_use]
    pub fn prompts_file(&self) -> PathBuf {
        self.chatbar_dir().join("prompts.json")
    }

    /// Returns the log file path (`.chatbar/chatbar.log`).
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.chatbar_dir().join("chatbar.log")
    }

    /// Ensures the `.chatbar` directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_chatbar_dir(&self) -> anyhow::Result<()> {
        let dir = self.chatbar_dir();
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Loads settings from the settings file.
    ///
    /// If the file doesn't exist, returns default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> anyhow::Result<PersistedSettings> {
        load_settings(&self.settings_file())
    }

    /// Saves settings to the settings file, creating `.chatbar` if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save_settings(&self, settings: &PersistedSettings) -> anyhow::Result<()> {
        self.ensure_chatbar_dir()?;
        save_settings(&self.settings_file(), settings)
    }
}
