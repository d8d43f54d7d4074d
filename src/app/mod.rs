//! Main application state and logic.
//!
//! This module contains the core App struct and its implementation,
//! organized into submodules:
//! - `input` - Text input editing and submission
//! - `render` - UI rendering
//! - `state` - Application state structures
//! - `events` - Event handling logic
//!
//! ## Application Modes
//!
//! - **`Chat`**: Transcript above, composer below. Typing `@` or `/` opens a
//!   suggestion panel driven by [`Composer`].
//! - **`Settings`**: Modal overlay (Ctrl+S) for the Enter key behavior and the
//!   default assistant. Changes are saved when the overlay closes.

pub mod events;
mod input;
mod layout;
mod render;
pub mod state;

#[cfg(test)]
mod tests;

pub use layout::{ChatLayout, calculate_chat_layout};

use std::path::Path;

use ratatui::layout::Rect;

use crate::cli::Args;
use crate::composer::{Assistant, Composer, Confirmation};
use crate::fs::{ChatbarPaths, load_corpora};
use crate::tui::Theme;
use crate::tui::widgets::{MAX_TRANSCRIPT_LINES, TranscriptLine, calculate_visual_line_count};

pub use self::state::{
    AppMode, EnterBehavior, LayoutState, ScrollState, SettingsItem, SettingsState,
    TextInputState, TranscriptState,
};

/// Main application state.
///
/// Organized into component sub-structs:
/// - `composer`: suggestion engine (trigger, panel, assistant override)
/// - `text_input`: the editable textarea mirrored into `composer`
/// - `settings`: settings panel state
/// - `transcript`: submitted messages and system lines
/// - `layout`: dynamic layout dimensions updated each frame
pub struct App {
    // =========================================================================
    // Shared State
    // =========================================================================
    /// All chatbar-related filesystem paths.
    pub(crate) paths: ChatbarPaths,
    /// Theme for styling.
    pub(crate) theme: Theme,
    /// Current application mode.
    pub(crate) mode: AppMode,
    /// Should quit flag.
    should_quit: bool,

    // =========================================================================
    // Component States
    // =========================================================================
    /// Suggestion engine.
    pub(crate) composer: Composer,
    /// Text input state.
    pub(crate) text_input: TextInputState,
    /// Settings panel state.
    pub(crate) settings: SettingsState,
    /// Transcript state.
    pub(crate) transcript: TranscriptState,
    /// Dynamic layout dimensions.
    pub(crate) layout: LayoutState,
}

impl App {
    /// Creates a new application rooted at `paths`.
    ///
    /// Loads persisted settings and both corpora. Failures are reported as
    /// warning lines in the transcript; the app always starts.
    #[must_use]
    pub fn new(paths: ChatbarPaths, args: &Args) -> Self {
        let assistants_path = args
            .assistants
            .clone()
            .unwrap_or_else(|| paths.assistants_file());
        let prompts_path = args.prompts.clone().unwrap_or_else(|| paths.prompts_file());

        let mut app = Self {
            paths,
            theme: Theme::default(),
            mode: AppMode::Chat,
            should_quit: false,
            composer: Composer::default(),
            text_input: TextInputState::new(),
            settings: SettingsState::default(),
            transcript: TranscriptState::default(),
            layout: LayoutState::default(),
        };

        match app.paths.load_settings() {
            Ok(persisted) => persisted.apply_to(&mut app.settings),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "failed to load settings");
                app.push_line(TranscriptLine::warning(format!(
                    "Failed to load settings: {e:#}"
                )));
            }
        }

        if let Some(base_url) = &args.base_url {
            app.settings.base_url = base_url.trim().to_string();
        }

        app.load_corpora(&assistants_path, &prompts_path);
        app
    }

    /// Loads both corpora into the composer, reporting failures.
    fn load_corpora(&mut self, assistants_path: &Path, prompts_path: &Path) {
        let (corpora, errors) = load_corpora(assistants_path, prompts_path);
        for error in &errors {
            tracing::warn!(path = %error.path().display(), error = %error, "corpus not loaded");
            self.push_line(TranscriptLine::warning(error.to_string()));
        }

        tracing::info!(
            assistants = corpora.assistants.len(),
            prompts = corpora.prompts.len(),
            "corpora loaded"
        );

        let default_id = self.settings.default_assistant;
        if let Some(id) = default_id
            && corpora.assistant(id).is_none()
        {
            tracing::warn!(id, "default assistant not in corpus");
            self.push_line(TranscriptLine::warning(format!(
                "Default assistant {id} is not in the assistant list"
            )));
        }

        self.composer = Composer::new(corpora).with_default_assistant(default_id);
    }

    /// Returns true if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the suggestion engine.
    #[must_use]
    pub const fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Calculates and caches the layout based on terminal dimensions.
    ///
    /// The stored layout is used by both scroll calculations and rendering.
    /// Should be called once per frame before rendering.
    pub fn update_layout(&mut self, terminal_area: Rect) {
        let show_banner = self.composer.alternative_assistant().is_some();
        self.layout.chat = calculate_chat_layout(terminal_area, show_banner);
        self.auto_scroll_transcript_if_enabled();
    }

    // =========================================================================
    // Transcript
    // =========================================================================

    /// Appends a line, dropping the oldest lines beyond the cap.
    pub(crate) fn push_line(&mut self, line: TranscriptLine) {
        let transcript = &mut self.transcript;
        transcript.lines.push(line);
        if transcript.lines.len() > MAX_TRANSCRIPT_LINES {
            let drain_count = transcript.lines.len() - MAX_TRANSCRIPT_LINES;
            transcript.lines.drain(0..drain_count);
            transcript.scroll.offset = transcript.scroll.offset.saturating_sub(drain_count);
            transcript.truncated = true;
        }
        self.auto_scroll_transcript_if_enabled();
    }

    /// Number of visual lines in the transcript after wrapping.
    pub(crate) fn transcript_visual_line_count(&self) -> usize {
        calculate_visual_line_count(
            &self.transcript.lines,
            self.layout.transcript_content_width(),
        )
    }

    fn auto_scroll_transcript_if_enabled(&mut self) {
        let content_len = self.transcript_visual_line_count();
        self.transcript
            .scroll
            .auto_scroll_if_enabled(content_len, self.layout.transcript_visible_height());
    }

    // =========================================================================
    // Suggestion Panel
    // =========================================================================

    /// Returns true if a suggestion panel is showing.
    #[must_use]
    pub fn should_show_suggestion_popup(&self) -> bool {
        self.composer.popup().is_visible()
    }

    /// Mirrors the textarea into the composer after an edit.
    pub(crate) fn sync_composer(&mut self) {
        let text = self.text_input.collect_text();
        self.composer.on_input_change(&text);
    }

    /// Confirms the highlighted panel row and applies the outcome.
    ///
    /// Returns false if no panel was showing.
    pub(crate) fn confirm_suggestion(&mut self) -> bool {
        let confirmation = self.composer.confirm();
        let consumed = confirmation.is_consumed();
        self.apply_confirmation(confirmation);
        consumed
    }

    fn apply_confirmation(&mut self, confirmation: Confirmation) {
        match confirmation {
            Confirmation::Ignored => {}
            Confirmation::AssistantSelected(assistant) => {
                self.text_input.clear();
                self.push_line(TranscriptLine::info(format!(
                    "Next message goes to @{}",
                    assistant.name
                )));
            }
            Confirmation::PromptApplied(_) => {
                let buffer = self.composer.buffer().to_string();
                self.text_input.set_text(&buffer);
            }
            Confirmation::Navigate(target) => {
                let url = target.url(&self.settings.base_url);
                tracing::info!(%url, "navigation requested");
                self.push_line(TranscriptLine::success(format!("Open {url}")));
            }
        }
    }

    /// Dismisses the suggestion panel without committing.
    pub(crate) fn dismiss_suggestions(&mut self) {
        self.composer.dismiss();
    }

    /// Clears the assistant override, reporting it in the transcript.
    pub(crate) fn clear_alternative_assistant(&mut self) {
        if self.composer.clear_alternative_assistant() {
            self.push_line(TranscriptLine::info("Assistant override cleared"));
        }
    }

    /// Assistant the next message will be addressed to.
    #[must_use]
    pub fn recipient(&self) -> Option<&Assistant> {
        self.composer
            .alternative_assistant()
            .or_else(|| self.composer.default_assistant())
    }
}
