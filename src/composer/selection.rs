//! Selection cursor for the suggestion panel.
//!
//! The panel has `N + 1` rows: `N` corpus candidates followed by the
//! synthetic "create new" row at index `N`. The cursor is clamped into
//! `[0, N]` on every transition, so it can never be read out of range.

use super::candidates::{Candidate, Panel, SuggestionItem};

/// State of the suggestion panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggestionPopupState {
    /// No panel is visible. Dismissal always lands here.
    #[default]
    Hidden,
    /// A panel is visible.
    Showing {
        /// Which corpus the candidates came from.
        panel: Panel,
        /// Corpus-derived candidates, without the synthetic row.
        candidates: Vec<Candidate>,
        /// Cursor in `[0, candidates.len()]`.
        selected: usize,
    },
}

impl SuggestionPopupState {
    /// Returns true if a panel is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Showing { .. })
    }

    /// Returns the visible panel, if any.
    #[must_use]
    pub const fn panel(&self) -> Option<Panel> {
        match self {
            Self::Showing { panel, .. } => Some(*panel),
            Self::Hidden => None,
        }
    }

    /// Move selection up by one, stopping at the first row.
    pub fn select_up(&mut self) {
        if let Self::Showing { selected, .. } = self {
            *selected = selected.saturating_sub(1);
        }
    }

    /// Move selection down by one, stopping at the synthetic row.
    pub fn select_down(&mut self) {
        if let Self::Showing {
            candidates,
            selected,
            ..
        } = self
        {
            *selected = (*selected + 1).min(candidates.len());
        }
    }

    /// Returns the row under the cursor.
    #[must_use]
    pub fn selected_item(&self) -> Option<SuggestionItem<'_>> {
        let Self::Showing {
            panel,
            candidates,
            selected,
        } = self
        else {
            return None;
        };
        Some(
            candidates
                .get(*selected)
                .map_or(SuggestionItem::CreateNew(*panel), SuggestionItem::Candidate),
        )
    }

    /// Returns the cursor position if a panel is visible.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Showing { selected, .. } => Some(*selected),
            Self::Hidden => None,
        }
    }

    /// Number of corpus-derived candidates (`N`).
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        match self {
            Self::Showing { candidates, .. } => candidates.len(),
            Self::Hidden => 0,
        }
    }

    /// Number of rows including the synthetic entry (`N + 1`), or 0 when hidden.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::Showing { candidates, .. } => candidates.len() + 1,
            Self::Hidden => 0,
        }
    }

    /// Returns true when the cursor sits on the synthetic row.
    #[must_use]
    pub fn is_create_new_selected(&self) -> bool {
        matches!(self.selected_item(), Some(SuggestionItem::CreateNew(_)))
    }

    /// Iterates over every row, synthetic entry last.
    pub fn items(&self) -> impl Iterator<Item = SuggestionItem<'_>> {
        let (panel, candidates) = match self {
            Self::Showing {
                panel, candidates, ..
            } => (Some(*panel), candidates.as_slice()),
            Self::Hidden => (None, &[][..]),
        };
        candidates
            .iter()
            .map(SuggestionItem::Candidate)
            .chain(panel.map(SuggestionItem::CreateNew))
    }
}
