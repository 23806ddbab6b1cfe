//! Read-only copy of the session for renderers and observers.
//!
//! Taken between ticks; it owns its data so it can be handed to another
//! thread or serialized without borrowing the session.

use serde::Serialize;

use crate::types::{Cell, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub width: u16,
    pub height: u16,
    /// Locked cells, row-major, top row first
    pub board: Vec<Cell>,
    pub active_kind: PieceKind,
    pub active_cells: [(i32, i32); 4],
    pub ghost_cells: [(i32, i32); 4],
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub game_over: bool,
}

impl SessionSnapshot {
    /// Locked cell at (x, y); `None` if empty or off the board
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    pub fn is_active_cell(&self, x: i32, y: i32) -> bool {
        self.active_cells.contains(&(x, y))
    }

    pub fn is_ghost_cell(&self, x: i32, y: i32) -> bool {
        self.ghost_cells.contains(&(x, y))
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
