//! Key mapping from terminal events to game keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A game key the session cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Left,
    Right,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Reset,
}

impl GameKey {
    pub const COUNT: usize = 7;

    pub(crate) fn index(self) -> usize {
        match self {
            GameKey::Left => 0,
            GameKey::Right => 1,
            GameKey::SoftDrop => 2,
            GameKey::HardDrop => 3,
            GameKey::RotateCw => 4,
            GameKey::RotateCcw => 5,
            GameKey::Reset => 6,
        }
    }
}

/// Map a key code to a game key.
pub fn map_key(code: KeyCode) -> Option<GameKey> {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameKey::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameKey::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(GameKey::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('y') | KeyCode::Char('Y') => {
            Some(GameKey::RotateCcw)
        }

        // Actions
        KeyCode::Char(' ') => Some(GameKey::HardDrop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameKey::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
