//! Terminal input mapping.
//!
//! Maps `crossterm` key events into [`GameAction`]s. Drop and restart are
//! single edge events, so no held-key (DAS/ARR style) handling is needed;
//! the engine already tolerates duplicate presses.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Drop
        KeyCode::Char(' ') | KeyCode::Down | KeyCode::Enter => Some(GameAction::Drop),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
