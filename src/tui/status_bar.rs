//! Status bar widget for displaying status messages and help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, PopupType, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: error, status message, or nothing
        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ]));
        } else if !state.status_message.is_empty() {
            lines.push(Line::from(state.status_message.clone()));
        } else {
            lines.push(Line::from(""));
        }

        // Help line at the bottom
        lines.push(Self::help_line(state, theme));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Contextual help hints for the current input context.
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match &state.active_popup {
            Some(PopupType::FilterPanel) => &[
                ("↑/↓", "navigate"),
                ("Enter", "toggle"),
                ("r", "reset"),
                ("Esc", "close"),
            ],
            Some(PopupType::HelpOverlay) => &[("Esc", "close")],
            None if state.search_editing => {
                &[("type", "search"), ("Backspace", "delete"), ("Esc", "done")]
            }
            None if state.focus == Focus::Sidebar => &[
                ("↑/↓", "navigate"),
                ("Enter", "toggle"),
                ("Tab", "grid"),
                ("r", "reset"),
            ],
            None => &[
                ("↑↓←→", "navigate"),
                ("f", "favorite"),
                ("o", "preview"),
                ("g", "code"),
                ("/", "search"),
            ],
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw((*action).to_string()));
        }

        // Main context always advertises the help overlay
        if state.active_popup.is_none() && !state.search_editing {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "?".to_string(),
                Style::default().fg(theme.accent),
            ));
            spans.push(Span::raw(": Help"));
        }

        Line::from(spans)
    }
}
