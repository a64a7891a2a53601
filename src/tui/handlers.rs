//! Keyboard event handlers for the TUI.
//!
//! Events are resolved through the `ShortcutRegistry` and dispatched
//! against the current `AppState`. Search editing and the help overlay
//! consume raw keys before any registry lookup happens.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::filter;
use crate::models::TemplateRecord;
use crate::shortcuts::{Action, ShortcutRegistry};
use crate::tui::{AppState, Focus, PopupType};

/// Handle a key event. Returns `Ok(true)` when the app should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits, no matter what mode we are in
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    if state.active_popup == Some(PopupType::HelpOverlay) {
        return handle_help_overlay(state, key);
    }

    if state.search_editing {
        return handle_search_editing(state, key);
    }

    if state.active_popup == Some(PopupType::FilterPanel) {
        return handle_filter_panel(state, key);
    }

    handle_main(state, key)
}

/// Help overlay swallows everything; a few keys dismiss it.
fn handle_help_overlay(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | '?') | KeyCode::Enter => state.close_popup(),
        _ => {}
    }
    Ok(false)
}

/// Search editing mode: every printable character goes into the query
/// and the grid refilters live on the next frame.
fn handle_search_editing(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.search_editing = false;
        }
        KeyCode::Backspace => {
            state.selection.query_pop();
        }
        KeyCode::Char(c) => {
            state.selection.query_push(c);
        }
        _ => {}
    }
    Ok(false)
}

/// Filter panel overlay navigation and toggling.
fn handle_filter_panel(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let shortcuts = ShortcutRegistry::new();
    let Some(action) = shortcuts.lookup("panel", key) else {
        return Ok(false);
    };

    match action {
        Action::NavigateUp => state.filter_panel.previous(&state.registry.taxonomy),
        Action::NavigateDown => state.filter_panel.next(&state.registry.taxonomy),
        Action::ToggleEntry => {
            if let Some(event) = state.filter_panel.activate(&state.registry.taxonomy) {
                state.apply_sidebar_event(event);
            }
        }
        Action::ResetFilters => {
            state.selection.reset();
            state.set_status("Filters reset");
        }
        Action::Cancel => state.close_popup(),
        _ => {}
    }

    Ok(false)
}

/// Main context: sidebar or grid focused.
fn handle_main(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let shortcuts = ShortcutRegistry::new();
    let Some(action) = shortcuts.lookup("main", key) else {
        return Ok(false);
    };

    match action {
        Action::Quit => return Ok(true),

        Action::SwitchFocus => {
            state.focus = match state.focus {
                Focus::Sidebar => Focus::Grid,
                Focus::Grid => Focus::Sidebar,
            };
        }

        Action::NavigateUp => match state.focus {
            Focus::Sidebar => state.sidebar.previous(&state.registry.taxonomy),
            Focus::Grid => state.grid.move_up(state.grid_cols),
        },
        Action::NavigateDown => match state.focus {
            Focus::Sidebar => state.sidebar.next(&state.registry.taxonomy),
            Focus::Grid => {
                let len = filtered_len(state);
                state.grid.move_down(len, state.grid_cols);
            }
        },
        Action::NavigateLeft => {
            if state.focus == Focus::Grid {
                // At the first column, stepping left moves focus into
                // the sidebar instead
                if state.grid_cols > 0 && state.grid.cursor % state.grid_cols == 0 {
                    state.focus = Focus::Sidebar;
                } else {
                    state.grid.move_left();
                }
            }
        }
        Action::NavigateRight => match state.focus {
            Focus::Sidebar => state.focus = Focus::Grid,
            Focus::Grid => {
                let len = filtered_len(state);
                state.grid.move_right(len);
            }
        },
        Action::JumpToFirst => {
            if state.focus == Focus::Grid {
                state.grid.jump_first();
            }
        }
        Action::JumpToLast => {
            if state.focus == Focus::Grid {
                let len = filtered_len(state);
                state.grid.jump_last(len);
            }
        }

        Action::ToggleEntry => match state.focus {
            Focus::Sidebar => {
                if let Some(event) = state.sidebar.activate(&state.registry.taxonomy) {
                    state.apply_sidebar_event(event);
                }
            }
            // A card acts as one big link to its live demo
            Focus::Grid => open_demo(state),
        },
        Action::ResetFilters => {
            state.selection.reset();
            state.set_status("Filters reset");
        }
        Action::StartSearch => {
            state.search_editing = true;
            state.clear_error();
        }
        Action::OpenFilterPanel => state.open_filter_panel(),

        Action::ToggleFavorite => {
            if let Some(record) = hovered_record(state) {
                let favorited = state.grid.toggle_favorite(&record.id);
                if favorited {
                    state.set_status(format!("Added '{}' to favorites", record.title));
                } else {
                    state.set_status(format!("Removed '{}' from favorites", record.title));
                }
            }
        }
        Action::OpenDemo => open_demo(state),
        Action::OpenSource => {
            if let Some(record) = hovered_record(state) {
                open_url(state, &record.source_url, &record.title, "source");
            }
        }
        Action::CopyDemoUrl => {
            if let Some(record) = hovered_record(state) {
                copy_to_clipboard(state, &record.demo_url, &record.title);
            }
        }

        Action::CycleTheme => state.cycle_theme(),
        Action::ToggleHelp => state.active_popup = Some(PopupType::HelpOverlay),
        Action::Cancel => state.clear_error(),
    }

    Ok(false)
}

/// Number of templates currently passing the filters.
fn filtered_len(state: &AppState) -> usize {
    filter::filter(&state.registry.templates, &state.selection).len()
}

/// The record under the grid cursor, if any. Cloned so handlers can
/// keep mutating state afterwards.
fn hovered_record(state: &AppState) -> Option<TemplateRecord> {
    let filtered = filter::filter(&state.registry.templates, &state.selection);
    filtered.get(state.grid.cursor).map(|r| (*r).clone())
}

fn open_demo(state: &mut AppState) {
    if let Some(record) = hovered_record(state) {
        open_url(state, &record.demo_url, &record.title, "demo");
    }
}

/// Hand a URL to the OS default browser. Failures land in the status
/// bar rather than tearing down the TUI.
fn open_url(state: &mut AppState, url: &str, title: &str, kind: &str) {
    if url.is_empty() {
        state.set_error(format!("'{title}' has no {kind} URL"));
        return;
    }

    match open::that(url) {
        Ok(()) => state.set_status(format!("Opened {kind} for '{title}'")),
        Err(e) => state.set_error(format!("Failed to open {url}: {e}")),
    }
}

fn copy_to_clipboard(state: &mut AppState, url: &str, title: &str) {
    if url.is_empty() {
        state.set_error(format!("'{title}' has no demo URL"));
        return;
    }

    let result = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(url.to_string()));
    match result {
        Ok(()) => state.set_status(format!("Copied demo URL for '{title}'")),
        Err(e) => state.set_error(format!("Clipboard error: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::registry::Registry;

    fn test_state() -> AppState {
        let registry = Registry::builtin().unwrap();
        AppState::new(registry, Config::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_key() {
        let mut state = test_state();
        assert!(handle_key_event(&mut state, press(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_ctrl_c_quits_even_while_searching() {
        let mut state = test_state();
        state.search_editing = true;
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key_event(&mut state, key).unwrap());
    }

    #[test]
    fn test_search_editing_captures_q() {
        let mut state = test_state();
        state.search_editing = true;
        assert!(!handle_key_event(&mut state, press(KeyCode::Char('q'))).unwrap());
        assert_eq!(state.selection.query, "q");
    }

    #[test]
    fn test_search_editing_backspace_and_exit() {
        let mut state = test_state();
        state.search_editing = true;
        handle_key_event(&mut state, press(KeyCode::Char('b'))).unwrap();
        handle_key_event(&mut state, press(KeyCode::Char('x'))).unwrap();
        handle_key_event(&mut state, press(KeyCode::Backspace)).unwrap();
        assert_eq!(state.selection.query, "b");

        handle_key_event(&mut state, press(KeyCode::Esc)).unwrap();
        assert!(!state.search_editing);
        // Query survives leaving editing mode
        assert_eq!(state.selection.query, "b");
    }

    #[test]
    fn test_slash_starts_search() {
        let mut state = test_state();
        handle_key_event(&mut state, press(KeyCode::Char('/'))).unwrap();
        assert!(state.search_editing);
    }

    #[test]
    fn test_tab_switches_focus() {
        let mut state = test_state();
        assert_eq!(state.focus, Focus::Grid);
        handle_key_event(&mut state, press(KeyCode::Tab)).unwrap();
        assert_eq!(state.focus, Focus::Sidebar);
        handle_key_event(&mut state, press(KeyCode::Tab)).unwrap();
        assert_eq!(state.focus, Focus::Grid);
    }

    #[test]
    fn test_reset_clears_categories_only() {
        let mut state = test_state();
        state.selection.toggle_category("blog");
        state.selection.query_push('x');
        handle_key_event(&mut state, press(KeyCode::Char('r'))).unwrap();
        assert!(state.selection.categories.is_empty());
        // The search query is owned by the search bar and survives reset
        assert_eq!(state.selection.query, "x");
    }

    #[test]
    fn test_favorite_toggle_round_trip() {
        let mut state = test_state();
        let id = state.registry.templates[0].id.clone();

        handle_key_event(&mut state, press(KeyCode::Char('f'))).unwrap();
        assert!(state.grid.card(&id).favorite);

        handle_key_event(&mut state, press(KeyCode::Char('f'))).unwrap();
        assert!(!state.grid.card(&id).favorite);
    }

    #[test]
    fn test_help_overlay_open_and_close() {
        let mut state = test_state();
        handle_key_event(&mut state, press(KeyCode::Char('?'))).unwrap();
        assert_eq!(state.active_popup, Some(PopupType::HelpOverlay));

        // Non-dismiss keys are swallowed
        handle_key_event(&mut state, press(KeyCode::Char('r'))).unwrap();
        assert_eq!(state.active_popup, Some(PopupType::HelpOverlay));

        handle_key_event(&mut state, press(KeyCode::Esc)).unwrap();
        assert_eq!(state.active_popup, None);
    }

    #[test]
    fn test_filter_panel_toggle_flows_into_selection() {
        let mut state = test_state();
        let key = KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT);
        handle_key_event(&mut state, key).unwrap();
        assert_eq!(state.active_popup, Some(PopupType::FilterPanel));

        // Panel opens on the category header; step to the first entry
        handle_key_event(&mut state, press(KeyCode::Down)).unwrap();
        handle_key_event(&mut state, press(KeyCode::Enter)).unwrap();
        assert!(!state.selection.categories.is_empty());

        handle_key_event(&mut state, press(KeyCode::Esc)).unwrap();
        assert_eq!(state.active_popup, None);
    }

    #[test]
    fn test_sidebar_enter_toggles_category() {
        let mut state = test_state();
        state.focus = Focus::Sidebar;
        handle_key_event(&mut state, press(KeyCode::Enter)).unwrap();
        assert_eq!(state.selection.categories.len(), 1);
        handle_key_event(&mut state, press(KeyCode::Enter)).unwrap();
        assert!(state.selection.categories.is_empty());
    }

    #[test]
    fn test_grid_navigation_clamps_at_end() {
        let mut state = test_state();
        state.grid_cols = 3;
        handle_key_event(&mut state, press(KeyCode::End)).unwrap();
        let last = state.registry.len() - 1;
        assert_eq!(state.grid.cursor, last);
        handle_key_event(&mut state, press(KeyCode::Right)).unwrap();
        assert_eq!(state.grid.cursor, last);
    }
}
