//! Layout calculation helpers for the TUI.
//!
//! A single source of truth for layout, so scroll calculations in the event
//! handlers and rendering in `App::render` always agree on dimensions.

use ratatui::layout::{Constraint, Layout, Rect};

/// Layout information for the chat screen.
///
/// - Transcript scrolls above
/// - The assistant override banner sits between transcript and composer
/// - The composer is at the bottom, followed by key hints
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatLayout {
    /// Header area (1 line).
    pub header: Rect,
    /// Transcript area (scrollable, main content).
    pub transcript: Rect,
    /// Override banner (1 line, zero height when no override is active).
    pub banner: Rect,
    /// Composer area.
    pub input: Rect,
    /// Footer area (key hints, 1 line).
    pub footer: Rect,
    /// Visible height of the transcript (excluding borders).
    pub transcript_visible_height: usize,
    /// Content width of the transcript (excluding borders and scrollbar).
    pub transcript_content_width: usize,
}

/// Layout constraints without an override banner.
const CHAT_LAYOUT_CONSTRAINTS: [Constraint; 5] = [
    Constraint::Length(1), // Header
    Constraint::Min(5),    // Transcript (grows)
    Constraint::Length(0), // Banner (hidden)
    Constraint::Length(5), // Composer
    Constraint::Length(1), // Footer
];

/// Layout constraints while an assistant override is active.
const CHAT_LAYOUT_BANNER_CONSTRAINTS: [Constraint; 5] = [
    Constraint::Length(1), // Header
    Constraint::Min(5),    // Transcript (grows)
    Constraint::Length(1), // Banner
    Constraint::Length(5), // Composer
    Constraint::Length(1), // Footer
];

/// Calculates the layout for the chat screen.
///
/// `show_banner` reserves one line above the composer for the assistant
/// override banner.
#[must_use]
pub fn calculate_chat_layout(area: Rect, show_banner: bool) -> ChatLayout {
    let chunks = if show_banner {
        Layout::vertical(CHAT_LAYOUT_BANNER_CONSTRAINTS).split(area)
    } else {
        Layout::vertical(CHAT_LAYOUT_CONSTRAINTS).split(area)
    };

    let transcript = chunks[1];
    let input = chunks[3];

    // Transcript: 2 for borders, 1 more column for the scrollbar
    let transcript_visible_height = transcript.height.saturating_sub(2) as usize;
    let transcript_content_width = transcript.width.saturating_sub(3) as usize;

    ChatLayout {
        header: chunks[0],
        transcript,
        banner: chunks[2],
        input,
        footer: chunks[4],
        transcript_visible_height,
        transcript_content_width,
    }
}
