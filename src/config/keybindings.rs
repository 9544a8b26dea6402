//! Keyboard bindings for the item grid.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to grid actions.
///
/// Only consulted while the grid has focus. The search bar handles its own
/// text editing keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no keys are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
        let shift = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT);
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);

        let table = [
            // Selection
            (plain(KeyCode::Char('j')), KeyAction::SelectNext),
            (plain(KeyCode::Down), KeyAction::SelectNext),
            (plain(KeyCode::Char('k')), KeyAction::SelectPrev),
            (plain(KeyCode::Up), KeyAction::SelectPrev),
            // Paging
            (plain(KeyCode::Char('l')), KeyAction::NextPage),
            (plain(KeyCode::Right), KeyAction::NextPage),
            (plain(KeyCode::Char(']')), KeyAction::NextPage),
            (plain(KeyCode::PageDown), KeyAction::NextPage),
            (plain(KeyCode::Char('h')), KeyAction::PrevPage),
            (plain(KeyCode::Left), KeyAction::PrevPage),
            (plain(KeyCode::Char('[')), KeyAction::PrevPage),
            (plain(KeyCode::PageUp), KeyAction::PrevPage),
            (plain(KeyCode::Char('g')), KeyAction::FirstPage),
            (plain(KeyCode::Home), KeyAction::FirstPage),
            (shift('G'), KeyAction::LastPage),
            (plain(KeyCode::End), KeyAction::LastPage),
            // Detail popup
            (plain(KeyCode::Enter), KeyAction::OpenDetail),
            (plain(KeyCode::Char(' ')), KeyAction::OpenDetail),
            (plain(KeyCode::Esc), KeyAction::CloseDetail),
            // Search
            (plain(KeyCode::Char('/')), KeyAction::FocusSearch),
            (ctrl('f'), KeyAction::FocusSearch),
            // Application
            (plain(KeyCode::Char('?')), KeyAction::Help),
            (shift('?'), KeyAction::Help),
            (plain(KeyCode::Char('q')), KeyAction::Quit),
        ];

        Self {
            bindings: table.into_iter().collect(),
        }
    }
}
