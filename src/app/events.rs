//! Event handling logic for the App.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::app::AppMode;
use crate::app::state::SettingsItem;
use crate::fs::PersistedSettings;
use crate::tui::widgets::TranscriptLine;

/// Scroll page size for navigation.
const SCROLL_PAGE_SIZE: usize = 10;

impl App {
    /// Handles pasted text from bracketed paste mode.
    ///
    /// The paste is inserted at the cursor as one edit, so the composer sees
    /// a single input change. Ignored outside Chat mode.
    ///
    /// Line endings are normalized to `\n` and other control characters are
    /// dropped before insertion.
    pub fn handle_paste(&mut self, text: &str) {
        if self.mode != AppMode::Chat || text.is_empty() {
            return;
        }

        // tui-textarea handles \n and \r\n but not a lone \r
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let filtered: String = normalized
            .chars()
            .filter(|c| !c.is_control() || *c == '\n')
            .collect();

        self.text_input.textarea.insert_str(&filtered);
        self.sync_composer();
    }

    /// Handles loss of terminal focus.
    ///
    /// Focus loss dismisses any visible suggestion panel.
    pub fn handle_focus_lost(&mut self) {
        if self.should_show_suggestion_popup() {
            tracing::debug!("focus lost, dismissing suggestions");
            self.dismiss_suggestions();
        }
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, "key");

        // Global hotkey: Ctrl+S opens settings from Chat mode
        if self.mode == AppMode::Chat
            && key.code == KeyCode::Char('s')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.open_settings();
            return;
        }

        match self.mode {
            AppMode::Chat => self.handle_chat_key(key),
            AppMode::Settings => self.handle_settings_key(key),
        }
    }

    /// Opens the settings panel.
    ///
    /// Opening dismisses the suggestion panel, so the overlay never sits on
    /// top of a live selection.
    pub(crate) fn open_settings(&mut self) {
        if self.mode == AppMode::Settings {
            return;
        }

        self.dismiss_suggestions();
        self.settings.previous_mode = Some(self.mode);
        self.settings.selected_index = 0;
        self.mode = AppMode::Settings;
    }

    /// Closes the settings panel, saves settings, and applies the default
    /// assistant to the composer.
    pub(crate) fn close_settings(&mut self) {
        let persisted = PersistedSettings::from(&self.settings);
        if let Err(e) = self.paths.save_settings(&persisted) {
            tracing::warn!(error = %format!("{e:#}"), "failed to save settings");
            self.push_line(TranscriptLine::warning(format!(
                "Failed to save settings: {e:#}"
            )));
        }

        self.composer
            .set_default_assistant(self.settings.default_assistant);

        self.mode = self.settings.previous_mode.take().unwrap_or_default();
    }

    /// Handles key events in chat mode.
    ///
    /// Key event priorities:
    /// 1. Suggestion panel (when visible): Up/Down, Tab/Enter, Esc
    /// 2. Transcript scrolling (Ctrl+Arrow keys, Ctrl+Home/End)
    /// 3. Page scrolling (PageUp/PageDown)
    /// 4. Esc, Ctrl+C quit, Ctrl+X clears the assistant override
    /// 5. Text input handling (default)
    fn handle_chat_key(&mut self, key: KeyEvent) {
        // Priority 1: Suggestion panel
        if self.should_show_suggestion_popup() {
            match key.code {
                KeyCode::Up if key.modifiers.is_empty() => {
                    self.composer.select_up();
                    return;
                }
                KeyCode::Down if key.modifiers.is_empty() => {
                    self.composer.select_down();
                    return;
                }
                KeyCode::Tab => {
                    self.confirm_suggestion();
                    return;
                }
                // Ctrl+Enter falls through to submit, which refuses while a panel shows
                KeyCode::Enter if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.confirm_suggestion();
                    return;
                }
                KeyCode::Esc => {
                    self.dismiss_suggestions();
                    return;
                }
                _ => {}
            }
        }

        // Priority 2: Transcript scrolling with Ctrl modifier
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Up => {
                    self.scroll_transcript_up();
                    return;
                }
                KeyCode::Down => {
                    self.scroll_transcript_down();
                    return;
                }
                KeyCode::Home => {
                    self.scroll_transcript_to_top();
                    return;
                }
                KeyCode::End => {
                    self.scroll_transcript_to_bottom();
                    return;
                }
                _ => {}
            }
        }

        // Priority 3: Page scrolling
        match key.code {
            KeyCode::PageUp => {
                self.page_up_transcript();
                return;
            }
            KeyCode::PageDown => {
                self.page_down_transcript();
                return;
            }
            _ => {}
        }

        // Priority 4: Global chat shortcuts
        match key.code {
            KeyCode::Esc => return,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_alternative_assistant();
                return;
            }
            _ => {}
        }

        // Priority 5: Text input
        self.handle_text_input(key);
    }

    /// Handles key events in settings mode.
    fn handle_settings_key(&mut self, key: KeyEvent) {
        let max_index = SettingsItem::all().len().saturating_sub(1);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.settings.selected_index = self.settings.selected_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.settings.selected_index = (self.settings.selected_index + 1).min(max_index);
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.settings.selected_index = self.settings.selected_index.saturating_sub(1);
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.settings.selected_index = (self.settings.selected_index + 1).min(max_index);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.cycle_current_setting();
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.close_settings();
            }
            // Ctrl+C closes settings instead of quitting
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.close_settings();
            }
            _ => {}
        }
    }

    /// Cycles through options for the currently selected setting.
    fn cycle_current_setting(&mut self) {
        let Some(current_item) = SettingsItem::all().get(self.settings.selected_index) else {
            return;
        };

        match current_item {
            SettingsItem::EnterBehavior => {
                self.settings.enter_behavior = self.settings.enter_behavior.next();
            }
            SettingsItem::DefaultAssistant => {
                self.settings
                    .cycle_default_assistant(&self.composer.corpora().assistants);
            }
        }
    }

    // =========================================================================
    // Transcript Scrolling
    // =========================================================================

    fn scroll_transcript_up(&mut self) {
        self.transcript.scroll.scroll_up();
    }

    fn scroll_transcript_down(&mut self) {
        let content_len = self.transcript_visual_line_count();
        self.transcript
            .scroll
            .scroll_down(content_len, self.layout.transcript_visible_height());
    }

    fn scroll_transcript_to_top(&mut self) {
        self.transcript.scroll.scroll_to_top();
    }

    /// Scrolls to the bottom and re-enables auto-scroll.
    fn scroll_transcript_to_bottom(&mut self) {
        let content_len = self.transcript_visual_line_count();
        self.transcript
            .scroll
            .scroll_to_bottom(content_len, self.layout.transcript_visible_height());
    }

    fn page_up_transcript(&mut self) {
        self.transcript.scroll.page_up(SCROLL_PAGE_SIZE);
    }

    fn page_down_transcript(&mut self) {
        let content_len = self.transcript_visual_line_count();
        self.transcript.scroll.page_down(
            content_len,
            self.layout.transcript_visible_height(),
            SCROLL_PAGE_SIZE,
        );
    }
}
