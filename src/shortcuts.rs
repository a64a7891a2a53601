//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and
//! actions, connecting the status bar hints with actual event handling
//! logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    JumpToFirst,
    JumpToLast,
    SwitchFocus,

    // === FILTERING ===
    ToggleEntry,
    ResetFilters,
    StartSearch,
    OpenFilterPanel,

    // === CARD ACTIONS ===
    ToggleFavorite,
    OpenDemo,
    OpenSource,
    CopyDemoUrl,

    // === APPEARANCE ===
    CycleTheme,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Cancel,
    Quit,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the
/// application. Contexts: "main" (grid or sidebar focused), "panel" (the
/// compact filter panel overlay). Search editing and the help overlay
/// consume raw keys in their handlers.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_panel_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Tab, M::NONE, Action::SwitchFocus);
        self.register(ctx, K::BackTab, M::SHIFT, Action::SwitchFocus);

        // === FILTERING ===
        self.register(ctx, K::Enter, M::NONE, Action::ToggleEntry);
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleEntry);
        self.register(ctx, K::Char('r'), M::NONE, Action::ResetFilters);
        self.register(ctx, K::Char('/'), M::NONE, Action::StartSearch);
        self.register(ctx, K::Char('F'), M::SHIFT, Action::OpenFilterPanel);

        // === CARD ACTIONS ===
        self.register(ctx, K::Char('f'), M::NONE, Action::ToggleFavorite);
        self.register(ctx, K::Char('o'), M::NONE, Action::OpenDemo);
        self.register(ctx, K::Char('g'), M::NONE, Action::OpenSource);
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyDemoUrl);

        // === APPEARANCE ===
        self.register(ctx, K::Char('t'), M::NONE, Action::CycleTheme);

        // === HELP ===
        // Terminals report '?' both with and without SHIFT
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('?'), M::SHIFT, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register all shortcuts for the filter panel overlay.
    fn register_panel_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "panel";

        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Enter, M::NONE, Action::ToggleEntry);
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleEntry);
        self.register(ctx, K::Char('r'), M::NONE, Action::ResetFilters);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Cancel);
        self.register(ctx, K::Char('F'), M::SHIFT, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(registry.lookup("main", event), Some(Action::NavigateUp));

        let event = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE);
        assert_eq!(registry.lookup("main", event), Some(Action::StartSearch));
    }

    #[test]
    fn test_context_separation() {
        let registry = ShortcutRegistry::new();

        // 'f' toggles favorite in main but is unbound in the panel
        let event = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);
        assert_eq!(registry.lookup("main", event), Some(Action::ToggleFavorite));
        assert_eq!(registry.lookup("panel", event), None);
    }

    #[test]
    fn test_unbound_key_returns_none() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(registry.lookup("main", event), None);
    }

    #[test]
    fn test_matches() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(registry.matches("main", event, Action::Quit));
        assert!(!registry.matches("main", event, Action::ToggleHelp));
    }
}
