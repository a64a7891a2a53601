//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod card;
pub mod filter_panel;
pub mod grid;
pub mod handlers;
pub mod help_overlay;
pub mod search;
pub mod sidebar;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::filter::{self, Selection};
use crate::registry::Registry;

pub use filter_panel::FilterPanelState;
pub use grid::GridState;
pub use sidebar::{SidebarEvent, SidebarState};
pub use status_bar::StatusBar;
pub use theme::Theme;

use handlers::handle_key_event;

/// Terminal width below which the sidebar is hidden and the compact
/// filter panel takes over.
pub const SIDEBAR_BREAKPOINT: u16 = 80;

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Compact filter panel (narrow-terminal filter controls)
    FilterPanel,
    /// Help overlay popup
    HelpOverlay,
}

/// Which region of the page owns navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The filter sidebar
    Sidebar,
    /// The template card grid
    Grid,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably. Only event
/// handlers modify state explicitly. The filtered list is recomputed
/// from the registry and selection on every frame; there is no cached
/// copy to go stale.
pub struct AppState {
    // Core data
    /// The template registry (read-only after load)
    pub registry: Registry,
    /// Active filters and search string
    pub selection: Selection,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Which region owns navigation keys
    pub focus: Focus,
    /// Whether the search bar is in editing mode
    pub search_editing: bool,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Sidebar cursor/collapse state
    pub sidebar: SidebarState,
    /// Grid cursor and per-card state
    pub grid: GridState,
    /// Filter panel state, rebuilt each time the panel opens
    pub filter_panel: FilterPanelState,
    /// Grid column count from the last rendered frame, used by the
    /// row-navigation handlers
    pub grid_cols: usize,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Application configuration
    pub config: Config,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from a loaded registry and config.
    pub fn new(registry: Registry, config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            registry,
            selection: Selection::new(),
            theme,
            focus: Focus::Grid,
            search_editing: false,
            active_popup: None,
            sidebar: SidebarState::new(),
            grid: GridState::new(),
            filter_panel: FilterPanelState::new(),
            grid_cols: 1,
            status_message: "Press ? for help".to_string(),
            error_message: None,
            config,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Opens the compact filter panel with fresh collapse flags.
    pub fn open_filter_panel(&mut self) {
        self.filter_panel = FilterPanelState::new();
        self.active_popup = Some(PopupType::FilterPanel);
    }

    /// Closes any active popup.
    pub fn close_popup(&mut self) {
        self.active_popup = None;
    }

    /// Applies a toggle/reset event coming from the sidebar or the
    /// filter panel. Both variants drive this one selection, so they
    /// can never disagree.
    pub fn apply_sidebar_event(&mut self, event: SidebarEvent) {
        match event {
            SidebarEvent::ToggleCategory(id) => {
                self.selection.toggle_category(&id);
                if self.selection.is_active(&id) {
                    self.set_status(format!("Filter '{id}' on"));
                } else {
                    self.set_status(format!("Filter '{id}' off"));
                }
            }
            SidebarEvent::Reset => {
                self.selection.reset();
                self.set_status("Filters reset");
            }
        }
    }

    /// Cycles the theme mode and persists the preference.
    pub fn cycle_theme(&mut self) {
        self.config.ui.theme_mode = self.config.ui.theme_mode.next();
        self.theme = Theme::from_mode(self.config.ui.theme_mode);

        match self.config.save() {
            Ok(()) => self.set_status(format!("Theme: {}", self.config.ui.theme_mode)),
            Err(e) => self.set_error(format!("Failed to save theme preference: {e}")),
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS,
        // Dark/Light are explicit)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &mut AppState) {
    // Fill entire screen with theme background color first so the
    // background is consistent regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Search bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    search::render(
        f,
        chunks[1],
        &state.selection.query,
        state.search_editing,
        &state.theme,
    );
    render_main_content(f, chunks[2], state);
    StatusBar::render(f, chunks[3], state, &state.theme.clone());

    // Render popup if active
    match state.active_popup {
        Some(PopupType::FilterPanel) => filter_panel::render(
            f,
            &state.registry.taxonomy,
            &state.selection,
            &state.filter_panel,
            &state.theme,
        ),
        Some(PopupType::HelpOverlay) => help_overlay::render(f, &state.theme),
        None => {}
    }
}

/// Render title bar with the app name and registry size
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("— {} templates in catalog", state.registry.len()),
            Style::default().fg(state.theme.text_muted),
        ),
    ]);

    let title_widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(title_widget, area);
}

/// Render main content: sidebar plus card grid.
///
/// Below the breakpoint the sidebar is dropped and the compact filter
/// panel (Shift+F) is the only filter surface, mirroring a responsive
/// page collapsing its sidebar on small screens.
fn render_main_content(f: &mut Frame, area: Rect, state: &mut AppState) {
    let narrow = area.width < SIDEBAR_BREAKPOINT;
    if narrow && state.focus == Focus::Sidebar {
        state.focus = Focus::Grid;
    }

    let grid_area = if narrow {
        area
    } else {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(20)])
            .split(area);

        sidebar::render(
            f,
            chunks[0],
            &state.registry.taxonomy,
            &state.selection,
            &state.sidebar,
            state.focus == Focus::Sidebar,
            &state.theme,
        );
        chunks[1]
    };

    // Recomputed every frame straight from the registry; with a
    // catalog this size there is nothing worth memoizing
    let filtered = filter::filter(&state.registry.templates, &state.selection);
    state.grid_cols = GridState::columns(grid_area.width);

    let theme = state.theme.clone();
    let selection = state.selection.clone();
    let focused = state.focus == Focus::Grid;
    grid::render(
        f,
        grid_area,
        &filtered,
        &selection,
        &mut state.grid,
        focused,
        &theme,
    );
}
