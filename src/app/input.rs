//! Text input handling for the App.
//!
//! Editing goes through `tui-textarea`; after every edit the joined text is
//! handed to the composer, which decides whether a suggestion panel shows.

use chrono::Local;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::app::state::EnterBehavior;
use crate::composer::Submission;
use crate::tui::widgets::TranscriptLine;

/// Recipient label when no assistant is known.
const FALLBACK_RECIPIENT: &str = "Assistant";

impl App {
    /// Handles text input key events.
    ///
    /// Key bindings:
    /// - `Enter` - Submit, or newline when Enter behavior is `Newline`
    /// - `\` then `Enter` - Newline, on any terminal; the `\` is removed
    /// - `Shift+Enter` / `Alt+Enter` / `Ctrl+J` - Newline
    /// - `Ctrl+Enter` / `Ctrl+D` - Submit
    /// - Other keys - Delegated to `tui-textarea`
    pub(super) fn handle_text_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_text_input();
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_text_input();
            }
            // Ctrl+J is a plain LF, so it works where Shift+Enter is not reported
            KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_newline();
            }
            KeyCode::Enter
                if key.modifiers.contains(KeyModifiers::SHIFT)
                    || key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.insert_newline();
            }
            KeyCode::Enter => {
                if self.caret_follows_backslash() {
                    self.text_input.textarea.delete_char();
                    self.insert_newline();
                    return;
                }
                match self.settings.enter_behavior {
                    EnterBehavior::Submit => self.submit_text_input(),
                    EnterBehavior::Newline => self.insert_newline(),
                }
            }
            _ => {
                self.text_input.textarea.input(key);
                self.sync_composer();
            }
        }
    }

    /// True when the character just before the caret is `\`.
    fn caret_follows_backslash(&self) -> bool {
        let (row, col) = self.text_input.cursor();
        self.text_input
            .lines()
            .get(row)
            .and_then(|line| line.chars().nth(col.checked_sub(1)?))
            == Some('\\')
    }

    fn insert_newline(&mut self) {
        self.text_input.textarea.insert_newline();
        self.sync_composer();
    }

    /// Submits the composer buffer.
    ///
    /// Does nothing while a suggestion panel is showing or when the buffer is
    /// blank. Otherwise the message is appended to the transcript under the
    /// current recipient and the input is cleared.
    pub(super) fn submit_text_input(&mut self) {
        let Some(submission) = self.composer.submit() else {
            return;
        };
        self.text_input.clear();
        self.record_submission(&submission);
    }

    fn record_submission(&mut self, submission: &Submission) {
        let recipient = submission
            .alternative_assistant
            .as_ref()
            .or_else(|| self.composer.default_assistant())
            .map_or(FALLBACK_RECIPIENT, |a| a.name.as_str())
            .to_string();

        tracing::info!(
            recipient = %recipient,
            override_active = submission.alternative_assistant.is_some(),
            "message sent"
        );

        let timestamp = Local::now().format("%H:%M");
        self.push_line(TranscriptLine::author(format!(
            "{timestamp}  You → {recipient}"
        )));
        for line in submission.text.lines() {
            self.push_line(TranscriptLine::message(line));
        }
    }
}
