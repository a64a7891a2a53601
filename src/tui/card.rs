//! Template card widget.
//!
//! Renders one template record as a bordered card: preview banner,
//! title, description, category/technology badges, and the link action
//! hints. Card-local state is the favorite flag; the hover flag is
//! derived from the grid cursor and highlights exactly one card.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::TemplateRecord;
use crate::tui::theme::Theme;

/// Rows a card occupies in the grid, borders included.
pub const CARD_HEIGHT: u16 = 9;

/// Per-card local UI state.
///
/// Scoped to one rendered card; favoriting has no effect on filtering
/// or on any other card, and is not persisted across runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardState {
    /// Whether the card is marked as a favorite for this session
    pub favorite: bool,
}

impl CardState {
    /// Flips the favorite flag.
    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }
}

/// Renders one template card.
pub fn render(
    f: &mut Frame,
    area: Rect,
    record: &TemplateRecord,
    state: CardState,
    hovered: bool,
    theme: &Theme,
) {
    let border_style = if hovered {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", truncate(&record.title, area.width.saturating_sub(8) as usize)),
            Style::default()
                .fg(if hovered { theme.accent } else { theme.text })
                .add_modifier(Modifier::BOLD),
        ),
        if state.favorite {
            Span::styled("♥ ", Style::default().fg(theme.error))
        } else {
            Span::raw("")
        },
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .style(Style::default().bg(theme.background));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    // Preview banner; an absent image falls back to the placeholder
    if record.image.is_empty() {
        lines.push(Line::from(Span::styled(
            center("· no preview ·", width),
            Style::default().fg(theme.text_muted),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            center(&format!("▒▒ {} ▒▒", truncate(&record.image, width.saturating_sub(6))), width),
            Style::default().fg(theme.text_secondary),
        )));
    }

    // Two description lines, truncated with ellipsis on the second
    let (first, second) = split_description(&record.description, width);
    lines.push(Line::from(Span::styled(
        first,
        Style::default().fg(theme.text_secondary),
    )));
    lines.push(Line::from(Span::styled(
        second,
        Style::default().fg(theme.text_secondary),
    )));

    lines.push(badge_line(&record.categories, theme.primary, width));
    lines.push(badge_line(&record.technologies, theme.text_muted, width));

    // Link hints only on the hovered card, mirroring the hover-revealed
    // actions of the card footer
    if hovered {
        lines.push(Line::from(vec![
            Span::styled("g", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(" Code  ", Style::default().fg(theme.text_muted)),
            Span::styled("o", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(" Preview  ", Style::default().fg(theme.text_muted)),
            Span::styled("f", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(" Favorite", Style::default().fg(theme.text_muted)),
        ]));
    } else {
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Builds one line of bracketed badges, dropping badges that overflow.
fn badge_line(tags: &[String], color: ratatui::style::Color, width: usize) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for tag in tags {
        let badge = format!("[{tag}] ");
        if used + badge.chars().count() > width {
            break;
        }
        used += badge.chars().count();
        spans.push(Span::styled(badge, Style::default().fg(color)));
    }

    Line::from(spans)
}

/// Truncates a string to `max` characters, appending an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// Splits a description into two display lines of at most `width` chars.
fn split_description(description: &str, width: usize) -> (String, String) {
    if width == 0 {
        return (String::new(), String::new());
    }

    let mut first = String::new();
    let mut second = String::new();
    let mut rest: Vec<&str> = Vec::new();

    for word in description.split_whitespace() {
        if first.chars().count() + word.chars().count() < width && rest.is_empty() {
            if !first.is_empty() {
                first.push(' ');
            }
            first.push_str(word);
        } else {
            rest.push(word);
        }
    }

    if !rest.is_empty() {
        second = truncate(&rest.join(" "), width);
    }

    (first, second)
}

/// Centers a string within `width` characters.
fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return truncate(s, width);
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_state_toggle_is_inverse() {
        let mut state = CardState::default();
        assert!(!state.favorite);

        state.toggle_favorite();
        assert!(state.favorite);

        state.toggle_favorite();
        assert!(!state.favorite);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly-ten", 11), "exactly-ten");
        assert_eq!(truncate("much too long for this", 8), "much to…");
    }

    #[test]
    fn test_split_description_short() {
        let (first, second) = split_description("fits on one line", 40);
        assert_eq!(first, "fits on one line");
        assert!(second.is_empty());
    }

    #[test]
    fn test_split_description_wraps_and_truncates() {
        let (first, second) =
            split_description("a very long description that cannot fit on a single line at all", 20);
        assert!(first.chars().count() < 20);
        assert!(second.chars().count() <= 20);
        assert!(second.ends_with('…'));
    }
}
