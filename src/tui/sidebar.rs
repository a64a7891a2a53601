//! Sidebar with the category and technology filter controls.
//!
//! Controlled-component pattern: the selection lives in `AppState`; the
//! sidebar renders from it and emits toggle/reset events. Only the
//! cursor and the technology-section collapse flag are local, and both
//! are presentation-only.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::filter::Selection;
use crate::models::Taxonomy;
use crate::tui::theme::Theme;

/// Events the sidebar emits to the page shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    /// Toggle one category id in the selection
    ToggleCategory(String),
    /// Clear the whole selection
    Reset,
}

/// A navigable sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    Category(usize),
    TechHeader,
    Tech(usize),
    Reset,
}

/// Sidebar cursor and collapse state.
#[derive(Debug)]
pub struct SidebarState {
    /// Cursor index into the flattened row list
    cursor: usize,
    /// Whether the technology section is expanded
    pub tech_open: bool,
}

impl SidebarState {
    /// Creates a sidebar with the technology section expanded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursor: 0,
            tech_open: true,
        }
    }

    /// Flattened rows for the current collapse state.
    fn rows(&self, taxonomy: &Taxonomy) -> Vec<Row> {
        let mut rows: Vec<Row> = (0..taxonomy.categories.len()).map(Row::Category).collect();
        rows.push(Row::TechHeader);
        if self.tech_open {
            rows.extend((0..taxonomy.technologies.len()).map(Row::Tech));
        }
        rows.push(Row::Reset);
        rows
    }

    /// Moves the cursor up one row.
    pub fn previous(&mut self, taxonomy: &Taxonomy) {
        let len = self.rows(taxonomy).len();
        if self.cursor == 0 {
            self.cursor = len.saturating_sub(1);
        } else {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor down one row.
    pub fn next(&mut self, taxonomy: &Taxonomy) {
        let len = self.rows(taxonomy).len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Activates the row under the cursor.
    ///
    /// Category rows emit a toggle event, the reset row emits a reset,
    /// the technology header flips the collapse flag, and technology
    /// entries do nothing (they are informational).
    pub fn activate(&mut self, taxonomy: &Taxonomy) -> Option<SidebarEvent> {
        match self.rows(taxonomy).get(self.cursor)? {
            Row::Category(i) => taxonomy
                .categories
                .get(*i)
                .map(|c| SidebarEvent::ToggleCategory(c.id.clone())),
            Row::TechHeader => {
                self.tech_open = !self.tech_open;
                // Keep the cursor on the header when the section folds
                None
            }
            Row::Tech(_) => None,
            Row::Reset => Some(SidebarEvent::Reset),
        }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the sidebar.
pub fn render(
    f: &mut Frame,
    area: Rect,
    taxonomy: &Taxonomy,
    selection: &Selection,
    state: &SidebarState,
    focused: bool,
    theme: &Theme,
) {
    let border_style = if focused {
        Style::default().fg(theme.primary)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Filters ")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = state.rows(taxonomy);
    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "Categories",
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )));

    for (row_idx, row) in rows.iter().enumerate() {
        let under_cursor = focused && row_idx == state.cursor;
        match row {
            Row::Category(i) => {
                let entry = &taxonomy.categories[*i];
                let active = selection.is_active(&entry.id);
                lines.push(entry_line(
                    &entry.name,
                    entry.count,
                    active,
                    under_cursor,
                    false,
                    width,
                    theme,
                ));
            }
            Row::TechHeader => {
                lines.push(Line::from(""));
                let chevron = if state.tech_open { "▾" } else { "▸" };
                let style = if under_cursor {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD)
                };
                lines.push(Line::from(Span::styled(
                    format!("Technologies {chevron}"),
                    style,
                )));
            }
            Row::Tech(i) => {
                let entry = &taxonomy.technologies[*i];
                lines.push(entry_line(
                    &entry.name,
                    entry.count,
                    false,
                    under_cursor,
                    true,
                    width,
                    theme,
                ));
            }
            Row::Reset => {
                lines.push(Line::from(""));
                let style = if under_cursor {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else if selection.categories.is_empty() {
                    Style::default().fg(theme.inactive)
                } else {
                    Style::default().fg(theme.text)
                };
                lines.push(Line::from(Span::styled("[ Reset filters ]", style)));
            }
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// One taxonomy entry line: marker, name, right-aligned count.
fn entry_line(
    name: &str,
    count: usize,
    active: bool,
    under_cursor: bool,
    muted: bool,
    width: usize,
    theme: &Theme,
) -> Line<'static> {
    let marker = if active { "✓ " } else { "  " };
    let count_str = format!("{count}");
    let pad = width
        .saturating_sub(marker.chars().count() + name.chars().count() + count_str.len())
        .max(1);

    let name_style = if under_cursor {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else if active {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    } else if muted {
        Style::default().fg(theme.text_secondary)
    } else {
        Style::default().fg(theme.text)
    };

    Line::from(vec![
        Span::styled(
            marker.to_string(),
            Style::default().fg(if active { theme.success } else { theme.text_muted }),
        ),
        Span::styled(name.to_string(), name_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(count_str, Style::default().fg(theme.text_muted)),
    ])
}
