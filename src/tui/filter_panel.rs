//! Compact filter panel overlay.
//!
//! The narrow-terminal variant of the sidebar: a centered popup with
//! the same category controls, collapsible sections, and an
//! active-filter badge row. It drives the same selection as the
//! sidebar, so both stay consistent; its collapse flags are its own and
//! reset every time the panel opens.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::filter::Selection;
use crate::models::Taxonomy;
use crate::tui::sidebar::SidebarEvent;
use crate::tui::theme::Theme;

/// A navigable panel row.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    CategoryHeader,
    Category(usize),
    TechHeader,
    Tech(usize),
    Reset,
}

/// Filter panel cursor and per-section collapse flags.
#[derive(Debug)]
pub struct FilterPanelState {
    cursor: usize,
    /// Whether the category section is expanded
    pub category_open: bool,
    /// Whether the technology section is expanded
    pub tech_open: bool,
}

impl FilterPanelState {
    /// Creates a fresh panel state with both sections expanded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursor: 0,
            category_open: true,
            tech_open: true,
        }
    }

    fn rows(&self, taxonomy: &Taxonomy) -> Vec<Row> {
        let mut rows = vec![Row::CategoryHeader];
        if self.category_open {
            rows.extend((0..taxonomy.categories.len()).map(Row::Category));
        }
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
    /// Section headers flip their collapse flag; category rows emit the
    /// same toggle events as the sidebar; technology rows are
    /// informational.
    pub fn activate(&mut self, taxonomy: &Taxonomy) -> Option<SidebarEvent> {
        match self.rows(taxonomy).get(self.cursor)? {
            Row::CategoryHeader => {
                self.category_open = !self.category_open;
                None
            }
            Row::Category(i) => taxonomy
                .categories
                .get(*i)
                .map(|c| SidebarEvent::ToggleCategory(c.id.clone())),
            Row::TechHeader => {
                self.tech_open = !self.tech_open;
                None
            }
            Row::Tech(_) => None,
            Row::Reset => Some(SidebarEvent::Reset),
        }
    }
}

impl Default for FilterPanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the filter panel popup.
pub fn render(
    f: &mut Frame,
    taxonomy: &Taxonomy,
    selection: &Selection,
    state: &FilterPanelState,
    theme: &Theme,
) {
    let area = centered_rect(60, 80, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let title = if selection.categories.is_empty() {
        " Filter options ".to_string()
    } else {
        format!(" Filter options ({}) ", selection.categories.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Active filter badges
            Constraint::Min(4),    // Sections
            Constraint::Length(1), // Help line
        ])
        .split(inner);

    render_active_badges(f, chunks[0], taxonomy, selection, theme);
    render_sections(f, chunks[1], taxonomy, selection, state, theme);

    let help = Paragraph::new(Line::from(Span::styled(
        "↑/↓ navigate | Enter/Space toggle | r reset | Esc close",
        Style::default().fg(theme.text_muted),
    )));
    f.render_widget(help, chunks[2]);
}

/// Active selection as a badge row; unknown ids render nothing.
fn render_active_badges(
    f: &mut Frame,
    area: Rect,
    taxonomy: &Taxonomy,
    selection: &Selection,
    theme: &Theme,
) {
    let mut spans: Vec<Span> = Vec::new();

    if selection.categories.is_empty() {
        spans.push(Span::styled(
            "No active filters",
            Style::default().fg(theme.text_muted),
        ));
    } else {
        for id in &selection.categories {
            // A selection id with no taxonomy entry is skipped rather
            // than rendered as a blank badge
            let Some(name) = taxonomy.category_name(id) else {
                continue;
            };
            spans.push(Span::styled(
                format!("[{name} ✕] "),
                Style::default().fg(theme.accent),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Collapsible category and technology sections.
fn render_sections(
    f: &mut Frame,
    area: Rect,
    taxonomy: &Taxonomy,
    selection: &Selection,
    state: &FilterPanelState,
    theme: &Theme,
) {
    let rows = state.rows(taxonomy);
    let mut lines: Vec<Line> = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        let under_cursor = row_idx == state.cursor;
        let header_style = |open_marker: &str, name: &str| {
            let style = if under_cursor {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled(format!("{name} {open_marker}"), style))
        };

        match row {
            Row::CategoryHeader => {
                lines.push(header_style(chevron(state.category_open), "Categories"));
            }
            Row::Category(i) => {
                let entry = &taxonomy.categories[*i];
                let active = selection.is_active(&entry.id);
                let marker = if active { "✓" } else { " " };
                let style = if under_cursor {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else if active {
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {marker} "),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled(format!("{} ({})", entry.name, entry.count), style),
                ]));
            }
            Row::TechHeader => {
                lines.push(header_style(chevron(state.tech_open), "Technologies"));
            }
            Row::Tech(i) => {
                let entry = &taxonomy.technologies[*i];
                let style = if under_cursor {
                    Style::default().fg(theme.accent)
                } else {
                    Style::default().fg(theme.text_secondary)
                };
                lines.push(Line::from(Span::styled(
                    format!("    {} ({})", entry.name, entry.count),
                    style,
                )));
            }
            Row::Reset => {
                let style = if under_cursor {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("[ Reset filters ]", style)));
            }
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

const fn chevron(open: bool) -> &'static str {
    if open {
        "▾"
    } else {
        "▸"
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaxonomyEntry;

    fn taxonomy() -> Taxonomy {
        Taxonomy {
            categories: vec![TaxonomyEntry {
                id: "blog".to_string(),
                name: "Blog".to_string(),
                count: 2,
            }],
            technologies: vec![TaxonomyEntry {
                id: "typescript".to_string(),
                name: "TypeScript".to_string(),
                count: 5,
            }],
        }
    }

    #[test]
    fn test_panel_drives_same_events_as_sidebar() {
        let taxonomy = taxonomy();
        let mut state = FilterPanelState::new();

        // rows: cat header, cat0, tech header, tech0, reset
        state.next(&taxonomy);
        assert_eq!(
            state.activate(&taxonomy),
            Some(SidebarEvent::ToggleCategory("blog".to_string()))
        );
    }

    #[test]
    fn test_section_headers_collapse_independently() {
        let taxonomy = taxonomy();
        let mut state = FilterPanelState::new();

        assert_eq!(state.activate(&taxonomy), None);
        assert!(!state.category_open);
        assert!(state.tech_open);

        // Collapsed: rows are cat header, tech header, tech0, reset
        state.next(&taxonomy);
        assert_eq!(state.activate(&taxonomy), None);
        assert!(!state.tech_open);
    }

    #[test]
    fn test_fresh_panel_has_sections_open() {
        let state = FilterPanelState::new();
        assert!(state.category_open);
        assert!(state.tech_open);
    }

    #[test]
    fn test_reset_row_emits_reset() {
        let taxonomy = taxonomy();
        let mut state = FilterPanelState::new();

        state.previous(&taxonomy);
        assert_eq!(state.activate(&taxonomy), Some(SidebarEvent::Reset));
    }
}
