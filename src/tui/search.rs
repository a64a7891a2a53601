//! Hero search bar widget.
//!
//! The query itself lives in the selection; this widget only knows
//! whether search editing is active and renders accordingly.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;

/// Renders the search bar.
///
/// While editing, a block cursor is appended and the border uses the
/// accent color; otherwise the hint shows how to start searching.
pub fn render(f: &mut Frame, area: Rect, query: &str, editing: bool, theme: &Theme) {
    let text = if editing {
        format!("Search: {query}█")
    } else if query.is_empty() {
        "Search templates... (press / to search)".to_string()
    } else {
        format!("Search: {query} (press / to edit)")
    };

    let style = if editing {
        Style::default().fg(theme.accent)
    } else if query.is_empty() {
        Style::default().fg(theme.text_muted)
    } else {
        Style::default().fg(theme.text)
    };

    let search = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(search, area);
}
