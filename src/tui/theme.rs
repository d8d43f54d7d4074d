//! Colors and text styles for the chat screen.
//!
//! Widgets never pick colors themselves; they ask the [`Theme`] for the style
//! of a role (border, muted hint, create row, override banner).

use ratatui::style::{Color, Modifier, Style};

/// Palette used by every widget.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Message text.
    pub text: Color,
    /// Titles, selection, and key hints.
    pub accent: Color,
    /// The assistant override banner.
    pub mention: Color,
    /// "Create a new ..." rows and navigation lines.
    pub create: Color,
    /// Load and save failures.
    pub alert: Color,
    /// Descriptions and secondary hints.
    pub dim: Color,
    /// Block borders.
    pub frame: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

impl Theme {
    /// Palette for dark terminal backgrounds.
    pub const DARK: Self = Self {
        text: Color::White,
        accent: Color::Cyan,
        mention: Color::Magenta,
        create: Color::Green,
        alert: Color::Yellow,
        dim: Color::DarkGray,
        frame: Color::Gray,
    };

    fn bold(color: Color) -> Style {
        Style::new().fg(color).add_modifier(Modifier::BOLD)
    }

    // =========================================================================
    // Text
    // =========================================================================

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::new().fg(self.text)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::new().fg(self.dim)
    }

    /// Input placeholder. Dimmed gray rather than `dim`, which is too dark
    /// to read on most dark backgrounds.
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::new().fg(Color::Gray).add_modifier(Modifier::DIM)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::new().fg(self.create)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::new().fg(self.alert)
    }

    // =========================================================================
    // Chrome
    // =========================================================================

    /// Block titles and the app name.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Self::bold(self.accent)
    }

    /// Selected rows and key names in hints.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Self::bold(self.accent)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::new().fg(self.frame)
    }

    #[must_use]
    pub fn scrollbar_thumb_style(&self) -> Style {
        Style::new().fg(self.accent)
    }

    #[must_use]
    pub fn scrollbar_track_style(&self) -> Style {
        Style::new().fg(self.dim)
    }

    // =========================================================================
    // Suggestions
    // =========================================================================

    /// The synthetic "create new" row of a suggestion panel.
    #[must_use]
    pub fn create_new_style(&self) -> Style {
        Style::new().fg(self.create).add_modifier(Modifier::ITALIC)
    }

    /// The `@name` tag of the active assistant override.
    #[must_use]
    pub fn banner_style(&self) -> Style {
        Self::bold(self.mention).add_modifier(Modifier::REVERSED)
    }
}
