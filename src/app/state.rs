//! Application state structures.
//!
//! This module contains the state definitions for different parts of the application:
//!
//! - **`TextInputState`**: Multi-line text editing backed by `tui-textarea`
//! - **`SettingsState`**: Enter key behavior, default assistant, base URL
//! - **`TranscriptState`**: Submitted messages and system lines, with scrolling
//! - **`LayoutState`**: Dynamic layout dimensions
//!
//! The suggestion engine state lives in [`crate::composer::Composer`], not here.

use tui_textarea::{CursorMove, TextArea};

use crate::composer::Assistant;
use crate::fs::DEFAULT_BASE_URL;
use crate::tui::widgets::TranscriptLine;

/// Placeholder shown in the empty composer.
pub const INPUT_PLACEHOLDER: &str = "Send a message or try @ or /";

/// Behavior of the Enter key in the text input area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnterBehavior {
    /// Enter submits the message, Shift+Enter inserts a newline.
    #[default]
    Submit,
    /// Enter inserts a newline, Ctrl+D submits.
    Newline,
}

impl EnterBehavior {
    /// Toggles between the two behaviors.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Submit => Self::Newline,
            Self::Newline => Self::Submit,
        }
    }

    /// Returns the display name for this behavior.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Newline => "Newline",
        }
    }
}

/// Identifiers for settings items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    /// Enter key behavior.
    EnterBehavior,
    /// Assistant used when no `@` override is active.
    DefaultAssistant,
}

impl SettingsItem {
    /// Returns all settings items in display order.
    #[must_use]
    pub fn all() -> &'static [SettingsItem] {
        &[SettingsItem::EnterBehavior, SettingsItem::DefaultAssistant]
    }

    /// Returns the display label for this item.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EnterBehavior => "Enter Key",
            Self::DefaultAssistant => "Default Assistant",
        }
    }

    /// Returns a description for this item.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::EnterBehavior => "Behavior of the Enter key (Submit vs Newline)",
            Self::DefaultAssistant => "Assistant that answers when nobody is @mentioned",
        }
    }
}

/// The application mode.
///
/// - **Chat**: Transcript plus composer.
/// - **Settings**: Modal overlay for configuration (Ctrl+S).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Transcript and composer.
    #[default]
    Chat,
    /// Settings panel overlay.
    Settings,
}

// =============================================================================
// State Sub-Structs
// =============================================================================

/// State for the composer text area.
///
/// The textarea owns editing and the caret. Its joined text is mirrored into
/// the composer engine after every edit.
pub struct TextInputState {
    /// The text area widget from `tui-textarea` crate.
    pub textarea: TextArea<'static>,
}

impl Default for TextInputState {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInputState {
    /// Creates an empty text input with the placeholder set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            textarea: new_textarea(Vec::new()),
        }
    }

    /// Clears the text area content and resets cursor.
    pub fn clear(&mut self) {
        self.textarea = new_textarea(Vec::new());
    }

    /// Returns the lines of text from the textarea.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    /// Returns the cursor position as (row, col), both zero-indexed.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    /// Collects all input lines into a single string.
    #[must_use]
    pub fn collect_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replaces the content and places the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        let lines = text.split('\n').map(String::from).collect();
        let mut textarea = new_textarea(lines);
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }
}

fn new_textarea(lines: Vec<String>) -> TextArea<'static> {
    let mut textarea = if lines.is_empty() {
        TextArea::default()
    } else {
        TextArea::new(lines)
    };
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    textarea
}

/// State for the settings panel.
#[derive(Debug, Clone)]
pub struct SettingsState {
    /// Currently selected index in the settings list.
    pub selected_index: usize,
    /// Enter key behavior.
    pub enter_behavior: EnterBehavior,
    /// Id of the default assistant.
    pub default_assistant: Option<u64>,
    /// Root URL for navigation requests.
    pub base_url: String,
    /// Previous mode to return to when closing settings.
    pub previous_mode: Option<AppMode>,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            selected_index: 0,
            enter_behavior: EnterBehavior::default(),
            default_assistant: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            previous_mode: None,
        }
    }
}

impl SettingsState {
    /// Advances the default assistant through `assistants`, then back to none.
    ///
    /// An id that is no longer in the corpus restarts at the first assistant.
    pub fn cycle_default_assistant(&mut self, assistants: &[Assistant]) {
        let position = self
            .default_assistant
            .and_then(|id| assistants.iter().position(|a| a.id == id));
        self.default_assistant = match position {
            None => assistants.first().map(|a| a.id),
            Some(index) => assistants.get(index + 1).map(|a| a.id),
        };
    }

    /// Display name of the default assistant.
    #[must_use]
    pub fn default_assistant_name<'a>(&self, assistants: &'a [Assistant]) -> &'a str {
        self.default_assistant
            .and_then(|id| assistants.iter().find(|a| a.id == id))
            .map_or("None", |a| a.name.as_str())
    }
}

/// Transcript of submitted messages and system lines.
#[derive(Debug)]
pub struct TranscriptState {
    /// Lines in display order.
    pub lines: Vec<TranscriptLine>,
    /// Scroll position and auto-scroll behavior.
    pub(crate) scroll: ScrollState,
    /// Whether old lines were dropped to respect the line cap.
    pub truncated: bool,
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            scroll: ScrollState::new(),
            truncated: false,
        }
    }
}

/// Dynamic layout tracking state.
///
/// Stores the full [`ChatLayout`] calculated once per frame, so scrolling
/// and rendering agree on dimensions.
///
/// [`ChatLayout`]: crate::app::ChatLayout
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutState {
    /// The cached chat layout, calculated once per frame.
    pub chat: crate::app::ChatLayout,
}

impl LayoutState {
    /// Returns the visible height of the transcript panel (excluding borders).
    #[must_use]
    pub const fn transcript_visible_height(&self) -> usize {
        self.chat.transcript_visible_height
    }

    /// Returns the content width of the transcript panel (excluding borders and scrollbar).
    #[must_use]
    pub const fn transcript_content_width(&self) -> usize {
        self.chat.transcript_content_width
    }
}

/// Scroll state for a panel, combining position and auto-scroll behavior.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current scroll offset in visual lines from the top.
    pub offset: usize,
    /// Whether to follow new content. Cleared when the user scrolls up.
    pub auto_scroll: bool,
}

impl ScrollState {
    /// Creates a new scroll state with auto-scroll enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Scrolls up by one line, disabling auto-scroll.
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
        self.auto_scroll = false;
    }

    /// Scrolls down by one line, enabling auto-scroll if at the bottom.
    pub fn scroll_down(&mut self, content_len: usize, visible_height: usize) {
        let max_scroll = content_len.saturating_sub(visible_height);
        self.offset = (self.offset + 1).min(max_scroll);
        self.auto_scroll = self.offset >= max_scroll;
    }

    /// Scrolls up by a page, disabling auto-scroll.
    pub fn page_up(&mut self, page_size: usize) {
        self.offset = self.offset.saturating_sub(page_size);
        self.auto_scroll = false;
    }

    /// Scrolls down by a page, enabling auto-scroll if at the bottom.
    pub fn page_down(&mut self, content_len: usize, visible_height: usize, page_size: usize) {
        let max_scroll = content_len.saturating_sub(visible_height);
        self.offset = (self.offset + page_size).min(max_scroll);
        self.auto_scroll = self.offset >= max_scroll;
    }

    /// Scrolls to the top, disabling auto-scroll.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_scroll = false;
    }

    /// Scrolls to the bottom, enabling auto-scroll.
    pub fn scroll_to_bottom(&mut self, content_len: usize, visible_height: usize) {
        self.offset = content_len.saturating_sub(visible_height);
        self.auto_scroll = true;
    }

    /// Follows the bottom if auto-scroll is enabled.
    pub fn auto_scroll_if_enabled(&mut self, content_len: usize, visible_height: usize) {
        if self.auto_scroll {
            self.offset = content_len.saturating_sub(visible_height);
        }
    }
}
