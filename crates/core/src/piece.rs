//! Piece module - the falling tetromino and its board-checked moves
//!
//! A [`Piece`] never validates itself; every mutation goes through
//! [`Piece::attempt_move`] or [`Piece::attempt_rotate`], which test the
//! candidate placement against a [`Board`] and commit all-or-nothing.

use tracing::debug;

use crate::board::Board;
use crate::catalog::{geometry, rotation_count, wall_kicks, PieceShape};
use crate::types::{PieceKind, RotateDirection};

/// A falling tetromino: kind, anchor and rotation index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub rotation: usize,
}

impl Piece {
    /// Create a piece at an explicit anchor with rotation 0
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            rotation: 0,
        }
    }

    /// Create a piece at the spawn anchor: center column, top row
    pub fn spawn(kind: PieceKind, board_width: u16) -> Self {
        Self::new(kind, board_width as i32 / 2, 0)
    }

    /// Get the shape (mino offsets) for the current rotation
    pub fn shape(&self) -> &'static PieceShape {
        geometry(self.kind, self.rotation)
    }

    pub fn anchor(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Absolute board cells covered by this piece
    pub fn cells(&self) -> [(i32, i32); 4] {
        let shape = *self.shape();
        shape.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check if the piece overlaps a wall, the floor, or a locked cell
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(self.shape(), self.anchor())
    }

    /// Try to shift the piece by (dx, dy). Returns false and leaves the piece
    /// untouched if the shifted cells would collide.
    pub fn attempt_move(&mut self, dx: i32, dy: i32, board: &Board) -> bool {
        if board.collides(self.shape(), (self.x + dx, self.y + dy)) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Try to rotate one step, nudging the anchor through the wall kick list.
    ///
    /// The first kick whose placement is free wins and both rotation and
    /// anchor are committed together. Single-state kinds (O) never rotate.
    pub fn attempt_rotate(&mut self, direction: RotateDirection, board: &Board) -> bool {
        let count = rotation_count(self.kind);
        if count <= 1 {
            return false;
        }

        let new_rotation = match direction {
            RotateDirection::Cw => (self.rotation + 1) % count,
            RotateDirection::Ccw => (self.rotation + count - 1) % count,
        };
        let new_shape = geometry(self.kind, new_rotation);

        for &(kx, ky) in wall_kicks(self.kind) {
            let anchor = (self.x + kx, self.y + ky);
            if !board.collides(new_shape, anchor) {
                self.rotation = new_rotation;
                self.x = anchor.0;
                self.y = anchor.1;
                debug!(
                    kind = self.kind.as_str(),
                    ?direction,
                    rotation = new_rotation,
                    kick = ?(kx, ky),
                    cells = ?self.cells(),
                    "rotation succeeded"
                );
                return true;
            }
        }

        debug!(
            kind = self.kind.as_str(),
            ?direction,
            x = self.x,
            y = self.y,
            "rotation blocked"
        );
        false
    }

    /// Copy of this piece dropped as far as it can fall
    pub fn ghost_drop(&self, board: &Board) -> Piece {
        let mut ghost = *self;
        while ghost.attempt_move(0, 1, board) {}
        ghost
    }
}
