//! Responsive template card grid.
//!
//! The grid is the page body: a header with the live match count and
//! the active selection label, the card grid itself, and the empty-state
//! message. The cursor doubles as the hover flag for cards: exactly one
//! card is "hovered" at a time and link actions apply to it.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::HashMap;

use crate::filter::Selection;
use crate::models::TemplateRecord;
use crate::tui::card::{self, CardState, CARD_HEIGHT};
use crate::tui::theme::Theme;

/// Minimum card width; the column count follows from the area width.
const MIN_CARD_WIDTH: u16 = 36;

/// Grid cursor and per-card state.
///
/// Card states are keyed by template id so they survive re-filtering:
/// a favorited card stays favorited while it is filtered out and back
/// in, within one session.
#[derive(Debug, Default)]
pub struct GridState {
    /// Index of the hovered card within the filtered list
    pub cursor: usize,
    /// First visible card row (scroll offset)
    pub scroll_row: usize,
    /// Card-local state per template id
    cards: HashMap<String, CardState>,
}

impl GridState {
    /// Creates an empty grid state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of card columns for a given content width.
    #[must_use]
    pub fn columns(width: u16) -> usize {
        usize::from((width / MIN_CARD_WIDTH).clamp(1, 3))
    }

    /// Card state for a template id, defaulting to unfavorited.
    #[must_use]
    pub fn card(&self, id: &str) -> CardState {
        self.cards.get(id).copied().unwrap_or_default()
    }

    /// Toggles the favorite flag for one card.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let state = self.cards.entry(id.to_string()).or_default();
        state.toggle_favorite();
        state.favorite
    }

    /// Clamps the cursor after the filtered list changed.
    pub fn clamp_cursor(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Moves the cursor one card left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one card right.
    pub fn move_right(&mut self, len: usize) {
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    /// Moves the cursor one row up.
    pub fn move_up(&mut self, cols: usize) {
        self.cursor = self.cursor.saturating_sub(cols.max(1));
    }

    /// Moves the cursor one row down.
    pub fn move_down(&mut self, len: usize, cols: usize) {
        let next = self.cursor + cols.max(1);
        if next < len {
            self.cursor = next;
        } else if len > 0 {
            self.cursor = len - 1;
        }
    }

    /// Jumps to the first card.
    pub fn jump_first(&mut self) {
        self.cursor = 0;
    }

    /// Jumps to the last card.
    pub fn jump_last(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }

    /// Scrolls so the cursor row is visible.
    fn ensure_visible(&mut self, cols: usize, visible_rows: usize) {
        let row = self.cursor / cols.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if visible_rows > 0 && row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
    }
}

/// Renders the grid header, cards, and empty state.
pub fn render(
    f: &mut Frame,
    area: Rect,
    filtered: &[&TemplateRecord],
    selection: &Selection,
    state: &mut GridState,
    focused: bool,
    theme: &Theme,
) {
    // Header: selection label on the left, live count on the right
    let header_area = Rect { height: 1, ..area };
    let label = if selection.categories.is_empty() {
        "All templates".to_string()
    } else {
        format!("{} templates", selection.label())
    };
    let count = format!("Showing {} templates", filtered.len());

    let pad = (area.width as usize)
        .saturating_sub(label.chars().count() + count.chars().count());
    let header = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(if focused { theme.primary } else { theme.text })
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad)),
        Span::styled(count, Style::default().fg(theme.text_muted)),
    ]);
    f.render_widget(Paragraph::new(header), header_area);

    let body = Rect {
        y: area.y + 2,
        height: area.height.saturating_sub(2),
        ..area
    };

    if filtered.is_empty() {
        render_empty_state(f, body, theme);
        return;
    }

    let cols = GridState::columns(body.width);
    let visible_rows = usize::from(body.height / CARD_HEIGHT).max(1);
    state.clamp_cursor(filtered.len());
    state.ensure_visible(cols, visible_rows);

    let card_width = body.width / cols as u16;
    let first = state.scroll_row * cols;

    for (offset, record) in filtered.iter().enumerate().skip(first) {
        let row = offset / cols;
        if row >= state.scroll_row + visible_rows {
            break;
        }

        let col = offset % cols;
        let card_area = Rect {
            x: body.x + col as u16 * card_width,
            y: body.y + ((row - state.scroll_row) as u16) * CARD_HEIGHT,
            width: card_width.saturating_sub(1),
            height: CARD_HEIGHT,
        };

        let hovered = focused && offset == state.cursor;
        card::render(f, card_area, record, state.card(&record.id), hovered, theme);
    }
}

/// Centered message shown when no record matches the selection.
fn render_empty_state(f: &mut Frame, area: Rect, theme: &Theme) {
    let y = area.y + area.height / 3;
    let line1 = Rect { y, height: 1, ..area };
    let line2 = Rect { y: y + 1, height: 1, ..area };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "No matching templates found",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )))
        .centered(),
        line1,
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Try different filters or search terms",
            Style::default().fg(theme.text_muted),
        )))
        .centered(),
        line2,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_respond_to_width() {
        assert_eq!(GridState::columns(30), 1);
        assert_eq!(GridState::columns(36), 1);
        assert_eq!(GridState::columns(80), 2);
        assert_eq!(GridState::columns(120), 3);
        // Never more than three columns, however wide the terminal
        assert_eq!(GridState::columns(400), 3);
    }

    #[test]
    fn test_cursor_navigation_clamps() {
        let mut state = GridState::new();

        state.move_right(3);
        state.move_right(3);
        assert_eq!(state.cursor, 2);
        state.move_right(3);
        assert_eq!(state.cursor, 2);

        state.move_left();
        assert_eq!(state.cursor, 1);
        state.move_left();
        state.move_left();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_row_navigation() {
        let mut state = GridState::new();

        state.move_down(7, 3);
        assert_eq!(state.cursor, 3);
        state.move_down(7, 3);
        assert_eq!(state.cursor, 6);
        // Next row does not exist; cursor snaps to the last card
        state.move_down(7, 3);
        assert_eq!(state.cursor, 6);

        state.move_up(3);
        assert_eq!(state.cursor, 3);
        state.move_up(3);
        state.move_up(3);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_clamp_cursor_after_refilter() {
        let mut state = GridState::new();
        state.cursor = 10;

        state.clamp_cursor(4);
        assert_eq!(state.cursor, 3);

        state.clamp_cursor(0);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_favorite_is_per_card() {
        let mut state = GridState::new();

        assert!(state.toggle_favorite("minimal-blog"));
        assert!(state.card("minimal-blog").favorite);
        // Other cards are untouched
        assert!(!state.card("shop-starter").favorite);

        assert!(!state.toggle_favorite("minimal-blog"));
        assert!(!state.card("minimal-blog").favorite);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut state = GridState::new();

        state.cursor = 9; // row 3 with 3 columns
        state.ensure_visible(3, 2);
        assert_eq!(state.scroll_row, 2);

        state.cursor = 0;
        state.ensure_visible(3, 2);
        assert_eq!(state.scroll_row, 0);
    }
}
