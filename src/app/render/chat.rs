//! Chat mode rendering.
//!
//! Header, transcript, assistant override banner, composer, footer, and the
//! suggestion panel drawn over the bottom of the transcript.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::tui::widgets::{SuggestionPopup, TranscriptWidget};

impl App {
    /// Renders the chat screen.
    ///
    /// Uses the cached layout from `self.layout.chat`, calculated once per
    /// frame in `update_layout()`.
    pub(crate) fn render_chat(&self, frame: &mut Frame) {
        let layout = self.layout.chat;

        self.render_chat_header(frame, layout.header);
        self.render_chat_transcript(frame, layout.transcript);
        self.render_override_banner(frame, layout.banner);
        self.render_chat_input(frame, layout.input);
        self.render_chat_footer(frame, layout.footer);

        if self.should_show_suggestion_popup() {
            self.render_suggestion_popup(frame, layout.input);
        }
    }

    /// Renders the header with the current recipient.
    fn render_chat_header(&self, frame: &mut Frame, area: Rect) {
        let recipient = self.recipient().map_or("no assistant", |a| a.name.as_str());
        let header = Line::from(vec![
            Span::styled(" Chatbar ", self.theme.header_style()),
            Span::styled("[→ ", self.theme.muted_style()),
            Span::styled(recipient.to_string(), self.theme.normal_style()),
            Span::styled("]", self.theme.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_chat_transcript(&self, frame: &mut Frame, area: Rect) {
        let widget = TranscriptWidget::new(
            &self.transcript.lines,
            self.transcript.scroll.offset,
            "Conversation",
            &self.theme,
        )
        .truncated(self.transcript.truncated);
        frame.render_widget(widget, area);
    }

    /// Renders the active assistant override, if any.
    fn render_override_banner(&self, frame: &mut Frame, area: Rect) {
        let Some(assistant) = self.composer.alternative_assistant() else {
            return;
        };

        let mut spans = vec![Span::styled(
            format!(" @{} ", assistant.name),
            self.theme.banner_style(),
        )];
        if !assistant.description.is_empty() {
            spans.push(Span::styled(
                format!(" {}", assistant.description),
                self.theme.muted_style(),
            ));
        }
        spans.push(Span::styled("  [Ctrl+X] ", self.theme.highlight_style()));
        spans.push(Span::styled("Clear", self.theme.muted_style()));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Renders the composer textarea.
    fn render_chat_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Message ")
            .title_style(self.theme.header_style())
            .title_bottom(Line::from(vec![
                Span::styled(" \\", self.theme.highlight_style()),
                Span::styled("+Enter for newline ", self.theme.muted_style()),
            ]))
            .border_style(self.theme.border_style());

        let mut textarea = self.text_input.textarea.clone();
        textarea.set_block(block);
        textarea.set_style(self.theme.normal_style());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_style(self.theme.placeholder_style());

        frame.render_widget(&textarea, area);
    }

    /// Renders the key hints for the current state.
    fn render_chat_footer(&self, frame: &mut Frame, area: Rect) {
        let footer_content = if self.should_show_suggestion_popup() {
            vec![
                Span::styled(" [↑/↓] ", self.theme.highlight_style()),
                Span::styled("Navigate  ", self.theme.muted_style()),
                Span::styled("[Tab/Enter] ", self.theme.highlight_style()),
                Span::styled("Select  ", self.theme.muted_style()),
                Span::styled("[Esc] ", self.theme.highlight_style()),
                Span::styled("Dismiss", self.theme.muted_style()),
            ]
        } else {
            vec![
                Span::styled(" [Enter] ", self.theme.highlight_style()),
                Span::styled("Send  ", self.theme.muted_style()),
                Span::styled("[@] ", self.theme.highlight_style()),
                Span::styled("Assistants  ", self.theme.muted_style()),
                Span::styled("[/] ", self.theme.highlight_style()),
                Span::styled("Prompts  ", self.theme.muted_style()),
                Span::styled("[Ctrl+S] ", self.theme.highlight_style()),
                Span::styled("Settings", self.theme.muted_style()),
            ]
        };

        frame.render_widget(Paragraph::new(Line::from(footer_content)), area);
    }

    /// Renders the suggestion panel above the composer.
    fn render_suggestion_popup(&self, frame: &mut Frame, input_area: Rect) {
        let popup = SuggestionPopup::new(
            self.composer.popup(),
            self.composer.default_assistant_id(),
            &self.theme,
        );

        let (popup_width, popup_height) = popup.preferred_size();
        if popup_height == 0 {
            return;
        }

        let popup_area = calculate_suggestion_popup_area(popup_width, popup_height, input_area);
        frame.render_widget(popup, popup_area);
    }
}

/// Area for the suggestion panel: directly above the composer, left aligned.
///
/// Width is clamped to the composer; height to the rows above it.
fn calculate_suggestion_popup_area(popup_width: u16, popup_height: u16, input_area: Rect) -> Rect {
    let height = popup_height.min(input_area.y);
    Rect {
        x: input_area.x,
        y: input_area.y - height,
        width: popup_width.min(input_area.width),
        height,
    }
}
