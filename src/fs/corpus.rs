//! Loading the assistant and prompt corpora from JSON files.
//!
//! Both files hold a JSON array in display order. A missing file is an empty
//! corpus; an unreadable or malformed file is a [`CorpusError`] naming the
//! path, which the app reports without refusing to start.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::composer::{Assistant, Corpora, InputPrompt};

/// Failure to load one corpus file.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a JSON array of the expected records.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CorpusError {
    /// The file that failed to load.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

fn load_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CorpusError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the assistant corpus.
///
/// # Errors
///
/// Returns [`CorpusError`] if the file exists but cannot be read or parsed.
pub fn load_assistants(path: &Path) -> Result<Vec<Assistant>, CorpusError> {
    load_list(path)
}

/// Loads the prompt corpus, including inactive prompts.
///
/// # Errors
///
/// Returns [`CorpusError`] if the file exists but cannot be read or parsed.
pub fn load_prompts(path: &Path) -> Result<Vec<InputPrompt>, CorpusError> {
    load_list(path)
}

/// Loads both corpora, collecting failures instead of stopping at the first.
///
/// A corpus that failed to load is empty in the result.
#[must_use]
pub fn load_corpora(assistants: &Path, prompts: &Path) -> (Corpora, Vec<CorpusError>) {
    let mut errors = Vec::new();
    let assistants = load_assistants(assistants).unwrap_or_else(|e| {
        errors.push(e);
        Vec::new()
    });
    let prompts = load_prompts(prompts).unwrap_or_else(|e| {
        errors.push(e);
        Vec::new()
    });
    (Corpora::new(assistants, prompts), errors)
}
