//! Commit outcomes.
//!
//! Confirming a panel row either commits a candidate or, for the synthetic
//! "create new" row, requests navigation to a view outside the composer.

use super::candidates::{Assistant, InputPrompt};

/// Views the composer can ask the host to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    /// The assistant creation form.
    AssistantCreation,
    /// The prompt library admin page.
    PromptLibrary,
}

impl NavigationTarget {
    /// Path of the view, relative to the product base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::AssistantCreation => "/assistants/new",
            Self::PromptLibrary => "/admin/prompt-library",
        }
    }

    /// Joins the path onto `base_url`, tolerating a trailing slash.
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Result of a confirmation key (Tab or Enter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// No panel was visible; the key should fall through.
    Ignored,
    /// A mention was committed. The buffer is now empty.
    AssistantSelected(Assistant),
    /// A shortcut was committed. The buffer now holds the prompt content.
    PromptApplied(InputPrompt),
    /// The synthetic entry was confirmed. The buffer is unchanged.
    Navigate(NavigationTarget),
}

impl Confirmation {
    /// Whether the confirmation key was consumed by a panel.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// A message handed to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Final buffer content.
    pub text: String,
    /// Assistant override active at submission time.
    pub alternative_assistant: Option<Assistant>,
}

/// Buffer content after committing a shortcut.
#[must_use]
pub fn shortcut_buffer(prompt: &InputPrompt) -> String {
    format!("{} ", prompt.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_paths() {
        assert_eq!(NavigationTarget::AssistantCreation.path(), "/assistants/new");
        assert_eq!(
            NavigationTarget::PromptLibrary.path(),
            "/admin/prompt-library"
        );
    }

    #[test]
    fn navigation_url_handles_trailing_slash() {
        assert_eq!(
            NavigationTarget::PromptLibrary.url("http://localhost:3000/"),
            "http://localhost:3000/admin/prompt-library"
        );
        assert_eq!(
            NavigationTarget::AssistantCreation.url("http://localhost:3000"),
            "http://localhost:3000/assistants/new"
        );
    }

    #[test]
    fn shortcut_buffer_appends_single_space() {
        let prompt = InputPrompt {
            id: 1,
            prompt: "weld".to_string(),
            content: "Explain welding".to_string(),
            active: true,
        };
        assert_eq!(shortcut_buffer(&prompt), "Explain welding ");
    }

    #[test]
    fn only_ignored_falls_through() {
        assert!(!Confirmation::Ignored.is_consumed());
        assert!(Confirmation::Navigate(NavigationTarget::PromptLibrary).is_consumed());
    }
}
