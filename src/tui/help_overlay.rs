//! Help overlay listing all keyboard shortcuts.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;

/// Shortcut listing shown by `?`.
const BINDINGS: &[(&str, &str)] = &[
    ("↑ ↓ ← → / hjkl", "Move between cards"),
    ("Tab", "Switch focus between sidebar and grid"),
    ("Enter / Space", "Toggle the entry under the cursor"),
    ("/", "Edit the search query"),
    ("r", "Clear all category filters"),
    ("Shift+F", "Open the compact filter panel"),
    ("f", "Toggle favorite on the hovered card"),
    ("o", "Open the live preview in the browser"),
    ("g", "Open the source code in the browser"),
    ("y", "Copy the preview URL to the clipboard"),
    ("t", "Cycle theme (Auto/Dark/Light)"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

/// Renders the help popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let key_width = BINDINGS
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (key, action) in BINDINGS {
        let pad = key_width.saturating_sub(key.chars().count());
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(pad + 2)),
            Span::styled((*action).to_string(), Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Esc or ? to close",
        Style::default().fg(theme.text_muted),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

/// Helper to create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
