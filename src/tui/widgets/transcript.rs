//! Scrollable transcript widget.
//!
//! Shows submitted messages with an author line, plus system lines for
//! commits, navigation requests, and load/save warnings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

use crate::tui::Theme;

/// Maximum number of transcript lines kept; older lines are dropped first.
pub const MAX_TRANSCRIPT_LINES: usize = 5000;

/// What a transcript line is, which decides its prefix and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranscriptLineKind {
    /// One line of a submitted message.
    #[default]
    Message,
    /// Heading above a message: time and recipient.
    Author,
    /// Override changes and other notices.
    Info,
    /// Navigation requests.
    Success,
    /// Load and save failures.
    Warning,
}

impl TranscriptLineKind {
    const fn prefix(self) -> &'static str {
        match self {
            Self::Author => "",
            Self::Message | Self::Info => "  ",
            Self::Success => "+ ",
            Self::Warning => "! ",
        }
    }

    fn style(self, theme: &Theme) -> Style {
        match self {
            Self::Message => theme.normal_style(),
            Self::Author => theme.highlight_style(),
            Self::Info => theme.muted_style(),
            Self::Success => theme.success_style(),
            Self::Warning => theme.warning_style(),
        }
    }
}

/// One logical transcript line. Long lines wrap when drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    /// Text including the kind's prefix.
    pub text: String,
    /// Decides the prefix and color.
    pub kind: TranscriptLineKind,
}

impl TranscriptLine {
    fn new(kind: TranscriptLineKind, text: impl Into<String>) -> Self {
        Self {
            text: format!("{}{}", kind.prefix(), text.into()),
            kind,
        }
    }

    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self::new(TranscriptLineKind::Message, text)
    }

    #[must_use]
    pub fn author(text: impl Into<String>) -> Self {
        Self::new(TranscriptLineKind::Author, text)
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(TranscriptLineKind::Info, text)
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(TranscriptLineKind::Success, text)
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(TranscriptLineKind::Warning, text)
    }
}

/// Bordered, scrollable view over the transcript.
///
/// The title reports dropped lines and, when the content overflows, the
/// visible range such as `(16-30/30)`.
pub struct TranscriptWidget<'a> {
    lines: &'a [TranscriptLine],
    offset: usize,
    title: &'a str,
    theme: &'a Theme,
    truncated: bool,
}

impl<'a> TranscriptWidget<'a> {
    #[must_use]
    pub const fn new(
        lines: &'a [TranscriptLine],
        offset: usize,
        title: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            lines,
            offset,
            title,
            theme,
            truncated: false,
        }
    }

    /// Marks the transcript as having dropped old lines.
    #[must_use]
    pub const fn truncated(mut self, truncated: bool) -> Self {
        self.truncated = truncated;
        self
    }

    fn title_text(&self, total: usize, height: usize) -> String {
        let mut title = self.title.to_string();
        if self.truncated {
            title.push_str(" [truncated]");
        }
        if total > height {
            let last = (self.offset + height).min(total);
            title.push_str(&format!(" ({}-{last}/{total})", self.offset + 1));
        }
        title
    }
}

/// Total number of rows after wrapping, for scroll calculations.
#[must_use]
pub fn calculate_visual_line_count(lines: &[TranscriptLine], content_width: usize) -> usize {
    if content_width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| wrap(&line.text, content_width).len())
        .sum()
}

/// Wraps `text` into rows of at most `width` columns.
///
/// Breaks between words; a word wider than the row is split. Always returns
/// at least one row.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

impl Widget for TranscriptWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(self.theme.border_style());
        let inner = block.inner(area);
        let height = inner.height as usize;
        // Rightmost column belongs to the scrollbar
        let width = inner.width.saturating_sub(1) as usize;

        let rows: Vec<Line> = self
            .lines
            .iter()
            .flat_map(|line| {
                let style = line.kind.style(self.theme);
                wrap(&line.text, width)
                    .into_iter()
                    .map(move |row| Line::styled(row, style))
            })
            .collect();
        let total = rows.len();

        block
            .title(Line::styled(
                self.title_text(total, height),
                self.theme.header_style(),
            ))
            .render(area, buf);

        let visible: Vec<Line> = rows.into_iter().skip(self.offset).take(height).collect();
        Paragraph::new(visible).render(inner, buf);

        if total > height {
            let mut state = ScrollbarState::new(total)
                .position(self.offset)
                .viewport_content_length(height);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .track_style(self.theme.scrollbar_track_style())
                .thumb_style(self.theme.scrollbar_thumb_style())
                .render(inner, buf, &mut state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(
        lines: &[TranscriptLine],
        offset: usize,
        truncated: bool,
        width: u16,
        height: u16,
    ) -> Result<Terminal<TestBackend>> {
        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        let theme = Theme::default();
        terminal.draw(|frame| {
            let widget = TranscriptWidget::new(lines, offset, "Conversation", &theme)
                .truncated(truncated);
            frame.render_widget(widget, frame.area());
        })?;
        Ok(terminal)
    }

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn renders_empty_transcript_with_title_and_borders() -> Result<()> {
        let terminal = render(&[], 0, false, 40, 5)?;
        let buffer = terminal.backend().buffer();

        assert!(row(&terminal, 0).contains("Conversation"));
        assert_eq!(buffer[(0, 0)].symbol(), "┌");
        assert_eq!(buffer[(39, 4)].symbol(), "┘");
        Ok(())
    }

    #[test]
    fn renders_lines_with_kind_styles() -> Result<()> {
        let lines = vec![
            TranscriptLine::author("12:00 You → Jane"),
            TranscriptLine::message("hello"),
            TranscriptLine::warning("careful"),
        ];
        let terminal = render(&lines, 0, false, 40, 6)?;
        let buffer = terminal.backend().buffer();
        let theme = Theme::default();

        assert!(row(&terminal, 1).contains("You → Jane"));
        assert!(row(&terminal, 2).contains("hello"));
        assert!(row(&terminal, 3).contains("! careful"));
        assert_eq!(buffer[(3, 2)].fg, theme.normal_style().fg.unwrap_or_default());
        assert_eq!(buffer[(1, 3)].fg, theme.warning_style().fg.unwrap_or_default());
        Ok(())
    }

    #[test]
    fn respects_scroll_offset() -> Result<()> {
        let lines: Vec<_> = (0..10)
            .map(|i| TranscriptLine::info(format!("line {i}")))
            .collect();
        let terminal = render(&lines, 4, false, 30, 5)?;

        assert!(row(&terminal, 1).contains("line 4"));
        assert!(row(&terminal, 0).contains("(5-7/10)"));
        Ok(())
    }

    #[test]
    fn shows_truncation_indicator() -> Result<()> {
        let lines = vec![TranscriptLine::info("x")];
        let terminal = render(&lines, 0, true, 40, 4)?;
        assert!(row(&terminal, 0).contains("[truncated]"));
        Ok(())
    }

    // =========================================================================
    // Line helpers
    // =========================================================================

    #[test]
    fn constructors_set_prefix_and_kind() {
        assert_eq!(TranscriptLine::info("a").text, "  a");
        assert_eq!(TranscriptLine::success("a").text, "+ a");
        assert_eq!(TranscriptLine::warning("a").text, "! a");
        assert_eq!(TranscriptLine::message("a").kind, TranscriptLineKind::Message);
        assert_eq!(TranscriptLine::author("a").text, "a");
    }

    mod wrapping {
        use super::*;

        #[test]
        fn breaks_between_words() {
            assert_eq!(wrap("hello big world", 8), ["hello", "big", "world"]);
            assert_eq!(wrap("fits as is", 10), ["fits as is"]);
        }

        #[test]
        fn splits_long_words_by_width() {
            assert_eq!(wrap("abcdef", 4), ["abcd", "ef"]);
            // Wide characters take two columns
            assert_eq!(wrap("日本語", 4), ["日本", "語"]);
        }

        #[test]
        fn empty_text_is_one_row() {
            assert_eq!(wrap("", 4), [""]);
        }
    }

    #[test]
    fn visual_line_count_accounts_for_wrapping() {
        let lines = vec![
            TranscriptLine::author("short"),
            TranscriptLine::author("a".repeat(25)),
            TranscriptLine::author(""),
        ];
        assert_eq!(calculate_visual_line_count(&lines, 10), 1 + 3 + 1);
        assert_eq!(calculate_visual_line_count(&lines, 0), 3);
    }
}
