//! Shared test utilities for the app module.
//!
//! - `create_test_app_with_lines` - Creates an `App` over a sample corpus
//! - `render_app_to_terminal` - Renders the app to a `TestBackend`
//! - Key event helpers (`char_key`, `enter_key`, `key`, `ctrl_key`, `type_str`)

use crate::app::{App, AppMode, LayoutState, SettingsState, TextInputState, TranscriptState};
use crate::composer::{Assistant, Composer, Corpora, InputPrompt};
use crate::fs::ChatbarPaths;
use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tui_textarea::{CursorMove, TextArea};

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Creates a [`KeyEvent`] for the Enter key with specified modifiers.
pub fn enter_key(modifiers: KeyModifiers) -> KeyEvent {
    key(KeyCode::Enter, modifiers)
}

/// Creates a [`KeyEvent`] for a character key with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Creates a key press [`KeyEvent`].
pub fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Types each character of `text` as a separate key press.
pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

fn assistant(id: u64, name: &str, description: &str) -> Assistant {
    Assistant {
        id,
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn prompt(id: u64, shortcut: &str, content: &str, active: bool) -> InputPrompt {
    InputPrompt {
        id,
        prompt: shortcut.to_string(),
        content: content.to_string(),
        active,
    }
}

/// Sample corpora: assistants John, Jane, Bob and prompts weld, summarize,
/// plus an inactive `sunset`.
pub fn sample_corpora() -> Corpora {
    Corpora::new(
        vec![
            assistant(1, "John", "General help"),
            assistant(2, "Jane", "Research assistant"),
            assistant(3, "Bob", ""),
        ],
        vec![
            prompt(10, "weld", "Explain TIG welding step by step", true),
            prompt(11, "summarize", "Summarize the following text:", true),
            prompt(12, "sunset", "Retired prompt", false),
        ],
    )
}

/// Helper to create a minimal `App` for testing.
///
/// Note: `cursor_col` is the character index (not byte index) for compatibility
/// with `tui-textarea`'s cursor positioning.
///
/// Uses the system temp directory as base path. Tests that save settings
/// should use `create_test_app_with_paths` with their own `TempDir`.
pub fn create_test_app_with_lines(lines: &[&str], cursor_row: usize, cursor_col: usize) -> App {
    create_test_app_with_paths(
        lines,
        cursor_row,
        cursor_col,
        ChatbarPaths::new(std::env::temp_dir().as_path()),
    )
}

/// Helper to create a minimal `App` for testing with custom paths.
pub fn create_test_app_with_paths(
    lines: &[&str],
    cursor_row: usize,
    cursor_col: usize,
    paths: ChatbarPaths,
) -> App {
    let textarea = if lines.is_empty() {
        TextInputState::new().textarea
    } else {
        let mut textarea = TextArea::new(lines.iter().map(|s| (*s).to_string()).collect());
        textarea.move_cursor(CursorMove::Top);
        for _ in 0..cursor_row {
            textarea.move_cursor(CursorMove::Down);
        }
        textarea.move_cursor(CursorMove::Head);
        for _ in 0..cursor_col {
            textarea.move_cursor(CursorMove::Forward);
        }
        textarea
    };

    let mut app = App {
        paths,
        theme: crate::tui::Theme::default(),
        mode: AppMode::Chat,
        should_quit: false,
        composer: Composer::new(sample_corpora()),
        text_input: TextInputState { textarea },
        settings: SettingsState::default(),
        transcript: TranscriptState::default(),
        layout: LayoutState::default(),
    };
    app.sync_composer();
    app
}

/// Creates an empty app over the sample corpora.
pub fn create_test_app() -> App {
    create_test_app_with_lines(&[], 0, 0)
}

/// Renders the app to a `TestBackend` terminal.
///
/// Calls `update_layout()` before rendering, as the main loop does.
///
/// # Errors
///
/// Returns an error if terminal creation or rendering fails.
pub fn render_app_to_terminal(
    app: &mut App,
    width: u16,
    height: u16,
) -> Result<Terminal<TestBackend>> {
    use ratatui::layout::Rect;

    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;

    app.update_layout(Rect::new(0, 0, width, height));
    terminal.draw(|f| app.render(f))?;

    Ok(terminal)
}

/// Returns the rendered rows as plain strings.
pub fn buffer_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

/// Text of every transcript line, in order.
pub fn transcript_texts(app: &App) -> Vec<String> {
    app.transcript
        .lines
        .iter()
        .map(|line| line.text.clone())
        .collect()
}
