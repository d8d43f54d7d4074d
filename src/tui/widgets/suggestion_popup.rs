//! Suggestion panel widget.
//!
//! Draws the `@` assistant panel or the `/` prompt panel above the composer.
//! The synthetic "create new" row is always drawn last, so a panel with no
//! matching candidates still shows one row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::composer::{Candidate, SuggestionItem, SuggestionPopupState};
use crate::tui::Theme;

/// Maximum number of visible rows in the suggestion popup.
pub const MAX_SUGGESTION_POPUP_ROWS: usize = 8;

/// Maximum popup width in terminal cells.
const MAX_POPUP_WIDTH: usize = 60;

/// Tag drawn before the default assistant's description.
const DEFAULT_TAG: &str = "(default) ";

/// Widget for rendering the visible suggestion panel.
pub struct SuggestionPopup<'a> {
    state: &'a SuggestionPopupState,
    default_assistant_id: Option<u64>,
    theme: &'a Theme,
}

impl<'a> SuggestionPopup<'a> {
    /// Creates a new suggestion popup widget.
    #[must_use]
    pub const fn new(
        state: &'a SuggestionPopupState,
        default_assistant_id: Option<u64>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            default_assistant_id,
            theme,
        }
    }

    /// Calculates the preferred size for the popup.
    ///
    /// Returns (width, height) in terminal cells, or (0, 0) when hidden.
    #[must_use]
    pub fn preferred_size(&self) -> (u16, u16) {
        let Some(panel) = self.state.panel() else {
            return (0, 0);
        };

        let widest_row = self
            .state
            .items()
            .map(|item| self.row_text(item).width())
            .max()
            .unwrap_or(0);

        // Prefix "> " plus borders, never narrower than the title
        let width = (widest_row + 2 + 2)
            .max(panel.title().width() + 4)
            .min(MAX_POPUP_WIDTH);
        let rows = self.state.item_count().min(MAX_SUGGESTION_POPUP_ROWS);

        // Both values are capped well below u16::MAX
        #[allow(clippy::cast_possible_truncation)]
        (width as u16, (rows + 2) as u16)
    }

    fn is_default(&self, item: SuggestionItem<'_>) -> bool {
        match item {
            SuggestionItem::Candidate(Candidate::Assistant(assistant)) => {
                Some(assistant.id) == self.default_assistant_id
            }
            _ => false,
        }
    }

    /// Plain text of a row without the selection prefix.
    fn row_text(&self, item: SuggestionItem<'_>) -> String {
        match item {
            SuggestionItem::Candidate(candidate) => {
                let tag = if self.is_default(item) { DEFAULT_TAG } else { "" };
                let detail = first_line(candidate.detail());
                if tag.is_empty() && detail.is_empty() {
                    candidate.name().to_string()
                } else {
                    format!("{}  {tag}{detail}", candidate.name())
                }
            }
            SuggestionItem::CreateNew(panel) => format!("+ {}", panel.create_label()),
        }
    }

    fn row_line(&self, item: SuggestionItem<'_>, is_selected: bool) -> Line<'static> {
        let prefix = if is_selected { "> " } else { "  " };
        let name_style = if is_selected {
            self.theme.highlight_style()
        } else {
            self.theme.normal_style()
        };

        match item {
            SuggestionItem::Candidate(candidate) => {
                let mut spans = vec![
                    Span::styled(prefix, name_style),
                    Span::styled(candidate.name().to_string(), name_style),
                ];
                let detail = first_line(candidate.detail());
                let is_default = self.is_default(item);
                if is_default || !detail.is_empty() {
                    spans.push(Span::raw("  "));
                }
                if is_default {
                    spans.push(Span::styled(DEFAULT_TAG, self.theme.success_style()));
                }
                if !detail.is_empty() {
                    spans.push(Span::styled(detail.to_string(), self.theme.muted_style()));
                }
                Line::from(spans)
            }
            SuggestionItem::CreateNew(panel) => {
                let style = if is_selected {
                    self.theme.create_new_style().patch(self.theme.highlight_style())
                } else {
                    self.theme.create_new_style()
                };
                Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("+ {}", panel.create_label()), style),
                ])
            }
        }
    }
}

/// First line of a possibly multi-line description.
fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim()
}

/// First visible row so that `selected` stays inside a window of `rows`.
fn window_start(selected: usize, rows: usize) -> usize {
    (selected + 1).saturating_sub(rows)
}

impl Widget for SuggestionPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (Some(panel), Some(selected)) = (self.state.panel(), self.state.selected_index())
        else {
            return;
        };

        Clear.render(area, buf);

        let block = Block::default()
            .title(panel.title())
            .title_style(self.theme.header_style())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = inner.height as usize;
        let start = window_start(selected, rows);

        let items: Vec<ListItem> = self
            .state
            .items()
            .enumerate()
            .skip(start)
            .take(rows)
            .map(|(i, item)| ListItem::new(self.row_line(item, i == selected)))
            .collect();

        Widget::render(List::new(items), inner, buf);
    }
}
