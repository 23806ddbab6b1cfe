//! Held-key tracker for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a key counts as held until it is released or until no press/repeat event
//! for it has arrived for `key_release_timeout_ms`.

use crossterm::event::KeyCode;

use crate::map::{map_key, GameKey};
use crate::types::{Intents, Timestamp};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers auto-repeat.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Tracks which game keys are held.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Time of the latest press/repeat event per key; `None` when released
    last_seen: [Option<Timestamp>; GameKey::COUNT],
    key_release_timeout_ms: u64,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            last_seen: [None; GameKey::COUNT],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout_ms
    }

    /// Record a press (or terminal auto-repeat) of `code`. Returns the game
    /// key it maps to, if any.
    pub fn handle_key_press(&mut self, code: KeyCode, now: Timestamp) -> Option<GameKey> {
        let key = map_key(code)?;
        self.last_seen[key.index()] = Some(now);
        Some(key)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(key) = map_key(code) {
            self.last_seen[key.index()] = None;
        }
    }

    pub fn is_held(&self, key: GameKey, now: Timestamp) -> bool {
        match self.last_seen[key.index()] {
            Some(seen) => now.saturating_sub(seen) <= self.key_release_timeout_ms,
            None => false,
        }
    }

    /// Held keys at `now`, expiring any key whose events went stale.
    pub fn intents(&mut self, now: Timestamp) -> Intents {
        for slot in self.last_seen.iter_mut() {
            if let Some(seen) = *slot {
                if now.saturating_sub(seen) > self.key_release_timeout_ms {
                    *slot = None;
                }
            }
        }

        Intents {
            move_left: self.is_held(GameKey::Left, now),
            move_right: self.is_held(GameKey::Right, now),
            soft_drop: self.is_held(GameKey::SoftDrop, now),
            hard_drop: self.is_held(GameKey::HardDrop, now),
            rotate_cw: self.is_held(GameKey::RotateCw, now),
            rotate_ccw: self.is_held(GameKey::RotateCcw, now),
            reset: self.is_held(GameKey::Reset, now),
        }
    }

    pub fn reset(&mut self) {
        self.last_seen = [None; GameKey::COUNT];
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        assert_eq!(input.handle_key_press(KeyCode::Left, 0), Some(GameKey::Left));
        assert!(input.intents(10).move_left);

        input.handle_key_release(KeyCode::Left);
        assert!(!input.intents(20).move_left);
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut input = InputState::new();
        assert_eq!(input.handle_key_press(KeyCode::Char('p'), 0), None);
        assert!(!input.intents(0).any());
    }

    #[test]
    fn test_auto_release_after_timeout_without_release_events() {
        let mut input = InputState::new().with_key_release_timeout_ms(50);
        input.handle_key_press(KeyCode::Left, 0);

        assert!(input.intents(50).move_left);
        assert!(!input.intents(51).move_left);
        // Expired keys stay released even if the clock goes backwards.
        assert!(!input.intents(10).move_left);
    }

    #[test]
    fn test_terminal_repeat_keeps_key_held() {
        let mut input = InputState::new().with_key_release_timeout_ms(50);
        input.handle_key_press(KeyCode::Right, 0);
        input.handle_key_press(KeyCode::Right, 40);
        input.handle_key_press(KeyCode::Right, 80);
        assert!(input.intents(120).move_right);
    }

    #[test]
    fn test_other_key_does_not_extend_timeout() {
        let mut input = InputState::new().with_key_release_timeout_ms(50);
        input.handle_key_press(KeyCode::Left, 0);
        input.handle_key_press(KeyCode::Up, 40);

        let intents = input.intents(60);
        assert!(!intents.move_left);
        assert!(intents.rotate_cw);
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(InputState::new().key_release_timeout_ms() > 0);
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut input = InputState::new().with_key_release_timeout_ms(10_000);
        input.handle_key_press(KeyCode::Left, 0);
        input.handle_key_press(KeyCode::Char(' '), 0);
        input.reset();
        assert!(!input.intents(1).any());
    }
}
