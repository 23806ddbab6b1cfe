//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing and display, so
//! they can be shared by the simulation core, the input adapter and the renderer.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn anchor**: (width / 2, 0)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver frame period (~60 FPS) |
//! | `GRAVITY_INTERVAL_MS` | 1000 | Time between automatic one-row drops |
//! | `INITIAL_REPEAT_DELAY_MS` | 100 | Held direction: delay before the first repeat |
//! | `REPEAT_INTERVAL_MS` | 30 | Held direction: interval between repeats |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Intents, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let intents = Intents { move_left: true, ..Intents::default() };
//! assert!(intents.any());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Driver frame period in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Gravity interval (1000ms = 1 row per second)
pub const GRAVITY_INTERVAL_MS: u64 = 1000;

/// Delay between the initial move of a held direction and its first repeat.
pub const INITIAL_REPEAT_DELAY_MS: u64 = 100;

/// Interval between repeats once a held direction is repeating.
pub const REPEAT_INTERVAL_MS: u64 = 30;

/// Line clear scoring table.
///
/// Index `n - 1` holds the points for clearing `n` rows with one lock:
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
pub const LINE_SCORES: [u32; 4] = [100, 300, 500, 800];

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Milliseconds on a monotonic clock owned by the driver.
///
/// The core never reads a clock itself; every timestamp it sees comes
/// from the caller.
pub type Timestamp = u64;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation direction for a rotate attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    /// 90° clockwise: rotation index + 1
    Cw,
    /// 90° counter-clockwise: rotation index - 1
    Ccw,
}

/// Held-key state for one tick.
///
/// Every field means "currently held". The session turns `rotate_cw`,
/// `rotate_ccw`, `hard_drop` and `reset` into one-shot presses by watching
/// for the released-to-held edge, while `move_left`, `move_right` and
/// `soft_drop` act for as long as they stay held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intents {
    pub move_left: bool,
    pub move_right: bool,
    pub soft_drop: bool,
    pub hard_drop: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub reset: bool,
}

impl Intents {
    /// No keys held.
    pub const NONE: Intents = Intents {
        move_left: false,
        move_right: false,
        soft_drop: false,
        hard_drop: false,
        rotate_cw: false,
        rotate_ccw: false,
        reset: false,
    };

    /// True if any key is held.
    pub fn any(&self) -> bool {
        self.move_left
            || self.move_right
            || self.soft_drop
            || self.hard_drop
            || self.rotate_cw
            || self.rotate_ccw
            || self.reset
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Locked cell, remembering the kind that locked it
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 20);
        assert_eq!(GRAVITY_INTERVAL_MS, 1000);
        assert_eq!(INITIAL_REPEAT_DELAY_MS, 100);
        assert_eq!(REPEAT_INTERVAL_MS, 30);
        assert_eq!(LINE_SCORES, [100, 300, 500, 800]);
        assert_eq!(LINES_PER_LEVEL, 10);
    }

    #[test]
    fn piece_kind_str_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(
                PieceKind::from_str(&kind.as_str().to_uppercase()),
                Some(kind)
            );
        }
    }

    #[test]
    fn intents_none_is_default() {
        assert_eq!(Intents::NONE, Intents::default());
        assert!(!Intents::NONE.any());
        assert!(Intents {
            reset: true,
            ..Intents::NONE
        }
        .any());
    }
}
