//! Inline suggestion engine for the chat composer.
//!
//! The engine turns the composer buffer into one of three modes and drives
//! the suggestion panel:
//!
//! - **Plain text**: no panel.
//! - **Mention** (`@name`): filters the assistant corpus. Committing records
//!   an alternative assistant and clears the buffer.
//! - **Shortcut** (`/name`): filters the active prompts. Committing replaces
//!   the buffer with the prompt content.
//!
//! Each panel ends with a synthetic "create new" row that requests
//! navigation instead of committing.
//!
//! The engine has no I/O and no terminal types. The app feeds it the buffer
//! after every edit through [`Composer::on_input_change`] and forwards
//! navigation keys while [`Composer::popup`] is visible.

pub mod candidates;
pub mod commit;
pub mod selection;
pub mod trigger;

use tracing::{debug, info};

pub use candidates::{
    Assistant, Candidate, Corpora, InputPrompt, Panel, SuggestionItem, filter_assistants,
    filter_prompts, visible_candidates,
};
pub use commit::{Confirmation, NavigationTarget, Submission, shortcut_buffer};
pub use selection::SuggestionPopupState;
pub use trigger::{MENTION_SIGIL, SHORTCUT_SIGIL, Trigger, detect_trigger, is_word_char};

/// Owner of the buffer, trigger, panel, and assistant override.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    /// In-progress message.
    buffer: String,
    /// Trigger derived from the buffer tail.
    trigger: Trigger,
    /// Visible panel and selection cursor.
    popup: SuggestionPopupState,
    /// Injected suggestion corpora.
    corpora: Corpora,
    /// Assistant used when no override is set.
    default_assistant_id: Option<u64>,
    /// Assistant chosen through a mention.
    alternative_assistant: Option<Assistant>,
}

impl Composer {
    /// Creates an empty composer over the given corpora.
    #[must_use]
    pub fn new(corpora: Corpora) -> Self {
        Self {
            corpora,
            ..Self::default()
        }
    }

    /// Sets the default assistant.
    #[must_use]
    pub fn with_default_assistant(mut self, id: Option<u64>) -> Self {
        self.default_assistant_id = id;
        self
    }

    /// Changes the default assistant.
    ///
    /// An override pointing at the new default is dropped, since mentioning
    /// the default assistant never records an override.
    pub fn set_default_assistant(&mut self, id: Option<u64>) {
        self.default_assistant_id = id;
        if self
            .alternative_assistant
            .as_ref()
            .is_some_and(|assistant| Some(assistant.id) == id)
        {
            self.alternative_assistant = None;
        }
    }

    /// Replaces the corpora and refreshes a visible panel against them.
    pub fn set_corpora(&mut self, corpora: Corpora) {
        self.corpora = corpora;
        if self.trigger.is_active() {
            self.refresh_popup(false);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current buffer content.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current trigger.
    #[must_use]
    pub const fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    /// Current panel state.
    #[must_use]
    pub const fn popup(&self) -> &SuggestionPopupState {
        &self.popup
    }

    /// Injected corpora.
    #[must_use]
    pub const fn corpora(&self) -> &Corpora {
        &self.corpora
    }

    /// Id of the default assistant.
    #[must_use]
    pub const fn default_assistant_id(&self) -> Option<u64> {
        self.default_assistant_id
    }

    /// The default assistant record, if it is in the corpus.
    #[must_use]
    pub fn default_assistant(&self) -> Option<&Assistant> {
        self.default_assistant_id
            .and_then(|id| self.corpora.assistant(id))
    }

    /// Assistant override set by a mention commit.
    #[must_use]
    pub const fn alternative_assistant(&self) -> Option<&Assistant> {
        self.alternative_assistant.as_ref()
    }

    /// Drops the assistant override. Returns true if one was set.
    pub fn clear_alternative_assistant(&mut self) -> bool {
        let cleared = self.alternative_assistant.take();
        if let Some(assistant) = &cleared {
            info!(assistant = %assistant.name, "Cleared assistant override");
        }
        cleared.is_some()
    }

    // =========================================================================
    // Input Change Observer
    // =========================================================================

    /// Feeds the buffer after an edit.
    ///
    /// Identical text is ignored, so caret movement cannot re-open a panel
    /// that was dismissed. Otherwise the trigger is re-detected and the panel
    /// recomputed. The selection survives only when neither the trigger nor
    /// the visible list changed.
    pub fn on_input_change(&mut self, text: &str) {
        if text == self.buffer {
            return;
        }
        self.buffer.clear();
        self.buffer.push_str(text);

        let next = detect_trigger(&self.buffer);
        let same_trigger = next == self.trigger;
        if !same_trigger {
            debug!(from = ?self.trigger, to = ?next, "Trigger changed");
        }
        self.trigger = next;
        self.refresh_popup(same_trigger);
    }

    /// Recomputes the panel from the current trigger and corpora.
    fn refresh_popup(&mut self, keep_selection: bool) {
        let Some((panel, candidates)) = visible_candidates(&self.trigger, &self.corpora) else {
            self.popup = SuggestionPopupState::Hidden;
            return;
        };

        let selected = match &self.popup {
            SuggestionPopupState::Showing {
                panel: old_panel,
                candidates: old_candidates,
                selected,
            } if keep_selection && *old_panel == panel && *old_candidates == candidates => {
                *selected
            }
            _ => 0,
        };

        self.popup = SuggestionPopupState::Showing {
            panel,
            candidates,
            selected,
        };
    }

    // =========================================================================
    // Selection Cursor
    // =========================================================================

    /// Moves the cursor up. Returns true if a panel consumed the key.
    pub fn select_up(&mut self) -> bool {
        self.popup.select_up();
        self.popup.is_visible()
    }

    /// Moves the cursor down. Returns true if a panel consumed the key.
    pub fn select_down(&mut self) -> bool {
        self.popup.select_down();
        self.popup.is_visible()
    }

    /// Hides the panel and drops the trigger.
    ///
    /// The buffer is left alone. The panel comes back only after the next
    /// edit produces a trigger again, starting at index 0.
    pub fn dismiss(&mut self) {
        if self.popup.is_visible() {
            debug!(trigger = ?self.trigger, "Suggestion panel dismissed");
        }
        self.popup = SuggestionPopupState::Hidden;
        self.trigger = Trigger::None;
    }

    // =========================================================================
    // Commit Handler
    // =========================================================================

    /// Handles Tab or Enter.
    ///
    /// With no visible panel this returns [`Confirmation::Ignored`] and the
    /// caller should treat the key normally. Otherwise the key is consumed:
    /// the synthetic row yields a navigation request with the buffer intact,
    /// and a candidate row is committed.
    pub fn confirm(&mut self) -> Confirmation {
        let outcome = match self.popup.selected_item() {
            None => return Confirmation::Ignored,
            Some(SuggestionItem::CreateNew(panel)) => {
                let target = panel.navigation_target();
                info!(path = target.path(), "Navigation requested");
                Confirmation::Navigate(target)
            }
            Some(SuggestionItem::Candidate(Candidate::Assistant(assistant))) => {
                Confirmation::AssistantSelected(assistant.clone())
            }
            Some(SuggestionItem::Candidate(Candidate::Prompt(prompt))) => {
                Confirmation::PromptApplied(prompt.clone())
            }
        };

        match &outcome {
            Confirmation::AssistantSelected(assistant) => self.commit_mention(assistant.clone()),
            Confirmation::PromptApplied(prompt) => self.commit_shortcut(prompt),
            Confirmation::Navigate(_) | Confirmation::Ignored => {}
        }
        self.dismiss();
        outcome
    }

    fn commit_mention(&mut self, assistant: Assistant) {
        info!(assistant = %assistant.name, id = assistant.id, "Mention committed");
        self.alternative_assistant = if Some(assistant.id) == self.default_assistant_id {
            None
        } else {
            Some(assistant)
        };
        self.buffer.clear();
    }

    fn commit_shortcut(&mut self, prompt: &InputPrompt) {
        info!(shortcut = %prompt.prompt, id = prompt.id, "Shortcut committed");
        self.buffer = shortcut_buffer(prompt);
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Takes the buffer for sending.
    ///
    /// Returns `None` while a panel is visible or when the buffer is blank.
    /// On success the buffer is cleared; the assistant override is kept.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.popup.is_visible() || self.buffer.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.buffer);
        self.trigger = Trigger::None;
        info!(chars = text.chars().count(), "Message submitted");
        Some(Submission {
            text,
            alternative_assistant: self.alternative_assistant.clone(),
        })
    }
}
