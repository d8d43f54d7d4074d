//! Terminal event configuration.
//!
//! Enables the terminal modes the composer relies on:
//! - Bracketed paste, so a paste arrives as one event
//! - Keyboard enhancement, so Shift+Enter is distinguishable from Enter
//! - Focus reporting, so the suggestion panel closes when the terminal loses focus

use std::io::stdout;

use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;

/// Guard that disables the enabled terminal event modes on drop.
///
/// Each mode is optional; a terminal that rejects one still gets the others.
pub struct TerminalEventGuard {
    bracketed_paste_enabled: bool,
    keyboard_enhancement_enabled: bool,
    focus_change_enabled: bool,
}

impl TerminalEventGuard {
    #[must_use]
    pub fn new() -> Self {
        let bracketed_paste_enabled = match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "could not enable bracketed paste");
                false
            }
        };

        let keyboard_enhancement_enabled = match execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        ) {
            Ok(()) => true,
            Err(e) => {
                // Shift+Enter falls back to plain Enter
                tracing::debug!(error = %e, "keyboard enhancement unavailable");
                false
            }
        };

        let focus_change_enabled = match execute!(stdout(), EnableFocusChange) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "focus reporting unavailable");
                false
            }
        };

        tracing::debug!(
            bracketed_paste_enabled,
            keyboard_enhancement_enabled,
            focus_change_enabled,
            "terminal event modes configured"
        );

        Self {
            bracketed_paste_enabled,
            keyboard_enhancement_enabled,
            focus_change_enabled,
        }
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        if self.focus_change_enabled {
            let _ = execute!(stdout(), DisableFocusChange);
        }
        if self.keyboard_enhancement_enabled {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        if self.bracketed_paste_enabled {
            let _ = execute!(stdout(), DisableBracketedPaste);
        }
    }
}
