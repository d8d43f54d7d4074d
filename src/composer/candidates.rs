//! Suggestion corpora and candidate filtering.
//!
//! The composer receives two read-only corpora: the assistants that can be
//! mentioned with `@` and the saved input prompts that can be expanded with
//! `/`. Filtering is a stable, case-insensitive prefix match against the
//! trigger fragment; every panel additionally ends with a synthetic
//! "create new" entry that is not part of the candidate vector.

use serde::{Deserialize, Serialize};

use super::commit::NavigationTarget;
use super::trigger::Trigger;

/// An assistant that can be mentioned with `@`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assistant {
    /// Backend identifier.
    pub id: u64,
    /// Display name, matched against the mention fragment.
    pub name: String,
    /// One-line description shown next to the name.
    #[serde(default)]
    pub description: String,
}

/// A saved prompt that can be expanded with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPrompt {
    /// Backend identifier.
    pub id: u64,
    /// Shortcut name, matched against the shortcut fragment.
    pub prompt: String,
    /// Text that replaces the buffer when the shortcut is committed.
    pub content: String,
    /// Inactive prompts are never suggested.
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

/// Both suggestion corpora, injected into the composer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpora {
    /// Mention corpus, in display order.
    pub assistants: Vec<Assistant>,
    /// Shortcut corpus, in display order.
    pub prompts: Vec<InputPrompt>,
}

impl Corpora {
    /// Creates corpora from the two lists.
    #[must_use]
    pub fn new(assistants: Vec<Assistant>, prompts: Vec<InputPrompt>) -> Self {
        Self {
            assistants,
            prompts,
        }
    }

    /// Looks up an assistant by id.
    #[must_use]
    pub fn assistant(&self, id: u64) -> Option<&Assistant> {
        self.assistants.iter().find(|a| a.id == id)
    }
}

/// Which suggestion panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// `@` mention panel listing assistants.
    Assistants,
    /// `/` shortcut panel listing prompts.
    Prompts,
}

impl Panel {
    /// Title drawn on the popup border.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Assistants => " Assistants ",
            Self::Prompts => " Prompts ",
        }
    }

    /// Label of the synthetic entry at the end of the panel.
    #[must_use]
    pub const fn create_label(self) -> &'static str {
        match self {
            Self::Assistants => "Create a new assistant",
            Self::Prompts => "Create a new prompt",
        }
    }

    /// Where confirming the synthetic entry navigates.
    #[must_use]
    pub const fn navigation_target(self) -> NavigationTarget {
        match self {
            Self::Assistants => NavigationTarget::AssistantCreation,
            Self::Prompts => NavigationTarget::PromptLibrary,
        }
    }
}

/// A corpus-derived suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// An assistant from the mention corpus.
    Assistant(Assistant),
    /// A prompt from the shortcut corpus.
    Prompt(InputPrompt),
}

impl Candidate {
    /// The name matched against the fragment and shown in bold.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Assistant(assistant) => &assistant.name,
            Self::Prompt(prompt) => &prompt.prompt,
        }
    }

    /// Secondary text shown after the name.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Assistant(assistant) => &assistant.description,
            Self::Prompt(prompt) => &prompt.content,
        }
    }
}

/// One row of a visible panel: a candidate or the synthetic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionItem<'a> {
    /// A corpus-derived candidate.
    Candidate(&'a Candidate),
    /// The trailing "create new" entry of the given panel.
    CreateNew(Panel),
}

/// Case-insensitive prefix test.
fn starts_with_ignore_case(name: &str, fragment: &str) -> bool {
    name.to_lowercase().starts_with(&fragment.to_lowercase())
}

/// Assistants whose name starts with `fragment`, in corpus order.
#[must_use]
pub fn filter_assistants(assistants: &[Assistant], fragment: &str) -> Vec<Candidate> {
    assistants
        .iter()
        .filter(|assistant| starts_with_ignore_case(&assistant.name, fragment))
        .cloned()
        .map(Candidate::Assistant)
        .collect()
}

/// Active prompts whose shortcut starts with `fragment`, in corpus order.
#[must_use]
pub fn filter_prompts(prompts: &[InputPrompt], fragment: &str) -> Vec<Candidate> {
    prompts
        .iter()
        .filter(|prompt| prompt.active && starts_with_ignore_case(&prompt.prompt, fragment))
        .cloned()
        .map(Candidate::Prompt)
        .collect()
}

/// Computes the panel and its candidates for a trigger.
///
/// Returns `None` for [`Trigger::None`]. A mention only ever filters the
/// assistant corpus and a shortcut only the prompt corpus.
#[must_use]
pub fn visible_candidates(trigger: &Trigger, corpora: &Corpora) -> Option<(Panel, Vec<Candidate>)> {
    match trigger {
        Trigger::None => None,
        Trigger::Mention(fragment) => Some((
            Panel::Assistants,
            filter_assistants(&corpora.assistants, fragment),
        )),
        Trigger::Shortcut(fragment) => {
            Some((Panel::Prompts, filter_prompts(&corpora.prompts, fragment)))
        }
    }
}
