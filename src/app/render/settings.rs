//! Settings overlay rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::app::{App, SettingsItem};

const OVERLAY_WIDTH: u16 = 56;

/// Title, subtitle, blank, items, blank, description, blank, hints, borders.
const OVERLAY_HEIGHT: u16 = 11;

/// Label column width, so values line up.
const LABEL_WIDTH: usize = 18;

impl App {
    /// Renders the settings panel as a centered overlay.
    pub(crate) fn render_settings(&self, frame: &mut Frame) {
        let area = centered(frame.area(), OVERLAY_WIDTH, OVERLAY_HEIGHT);
        frame.render_widget(Clear, area);

        let mut lines = vec![
            Line::styled("Chatbar Settings", self.theme.header_style()),
            Line::styled(
                "Saved to .chatbar/settings.json on close.",
                self.theme.muted_style(),
            ),
            Line::default(),
        ];

        let items = SettingsItem::all();
        lines.extend(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| self.setting_line(*item, i == self.settings.selected_index)),
        );

        lines.push(Line::default());
        if let Some(item) = items.get(self.settings.selected_index) {
            lines.push(Line::styled(item.description(), self.theme.muted_style()));
        }
        lines.push(Line::default());
        lines.push(self.settings_hints());

        let block = Block::bordered()
            .title(" Settings ")
            .title_style(self.theme.header_style())
            .border_style(self.theme.border_style());

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn setting_line(&self, item: SettingsItem, is_selected: bool) -> Line<'static> {
        let value = match item {
            SettingsItem::EnterBehavior => self.settings.enter_behavior.name(),
            SettingsItem::DefaultAssistant => self
                .settings
                .default_assistant_name(&self.composer.corpora().assistants),
        };
        let label = format!("{:<LABEL_WIDTH$}", item.label());

        if is_selected {
            let style = self.theme.highlight_style();
            Line::from(vec![
                Span::styled("› ", style),
                Span::styled(label, style),
                Span::styled(format!("[{value}]"), style),
            ])
        } else {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(label, self.theme.normal_style()),
                Span::styled(format!("[{value}]"), self.theme.muted_style()),
            ])
        }
    }

    fn settings_hints(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (key, action)) in [("[↑/↓]", "Navigate"), ("[Enter]", "Change"), ("[Esc]", "Close")]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("{key} "), self.theme.highlight_style()));
            spans.push(Span::styled(action, self.theme.muted_style()));
        }
        Line::from(spans)
    }
}

/// A `width` x `height` area centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    cell
}
