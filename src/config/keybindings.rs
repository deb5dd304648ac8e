//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. While the search input is active,
/// typed characters never reach these bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use KeyCode::{Char, Down, End, Enter, Esc, Home, Left, PageDown, PageUp, Right, Up};

        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Vim-style selection
        keys.bind(Char('k'), none, KeyAction::SelectUp);
        keys.bind(Char('j'), none, KeyAction::SelectDown);
        keys.bind(Char('h'), none, KeyAction::SelectLeft);
        keys.bind(Char('l'), none, KeyAction::SelectRight);
        keys.bind(Char('g'), none, KeyAction::SelectFirst);
        keys.bind(Char('G'), KeyModifiers::SHIFT, KeyAction::SelectLast);

        // Arrow keys
        keys.bind(Up, none, KeyAction::SelectUp);
        keys.bind(Down, none, KeyAction::SelectDown);
        keys.bind(Left, none, KeyAction::SelectLeft);
        keys.bind(Right, none, KeyAction::SelectRight);
        keys.bind(Home, none, KeyAction::SelectFirst);
        keys.bind(End, none, KeyAction::SelectLast);

        // Table interaction
        keys.bind(Enter, none, KeyAction::OpenDetail);
        keys.bind(Char('s'), none, KeyAction::SortColumn);

        // Pagination
        keys.bind(Char(']'), none, KeyAction::NextPage);
        keys.bind(Char('['), none, KeyAction::PrevPage);
        keys.bind(PageDown, none, KeyAction::NextPage);
        keys.bind(PageUp, none, KeyAction::PrevPage);
        keys.bind(Char('+'), none, KeyAction::NextPageSize);
        keys.bind(Char('+'), KeyModifiers::SHIFT, KeyAction::NextPageSize);
        keys.bind(Char('-'), none, KeyAction::PrevPageSize);

        // Search
        keys.bind(Char('/'), none, KeyAction::StartSearch);
        keys.bind(Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);

        // Dialogs
        keys.bind(Esc, none, KeyAction::CloseDetail);

        // Application controls
        keys.bind(Char('q'), none, KeyAction::Quit);
        keys.bind(Char('?'), none, KeyAction::Help);
        keys.bind(Char('?'), KeyModifiers::SHIFT, KeyAction::Help);

        keys
    }
}
