//! Board module - manages the game grid
//!
//! The board is a `width x height` grid (10x20 by default) where each cell is
//! either empty or holds the kind of the piece that locked there.
//! Cells are stored in a flat row-major vector for cache locality.
//!
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Rows above the board (`y < 0`) are free space: they are never stored,
//! never occupied and never block a piece.

use crate::catalog::PieceShape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Build a board from rows of text, top row first.
    ///
    /// `.` is empty, any other character is a locked cell. Handy for tests and
    /// scripted setups.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u16;
        let mut board = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width as usize, "ragged row {}", y);
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' {
                    let kind = PieceKind::from_str(&ch.to_string()).unwrap_or(PieceKind::I);
                    board.set(x as i32, y as i32, Some(kind));
                }
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if the position is not stored on the board
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position holds a locked cell. Anything above the board is free.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a piece cell may sit at this position.
    ///
    /// There is no upper limit: cells may hang above row 0 while spawning
    /// or rotating.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Check if a shape placed at `anchor` hits a wall, the floor, or a locked cell
    pub fn collides(&self, shape: &PieceShape, anchor: (i32, i32)) -> bool {
        shape.iter().any(|&(dx, dy)| {
            let x = anchor.0 + dx;
            let y = anchor.1 + dy;
            !self.in_bounds(x, y) || self.is_occupied(x, y)
        })
    }

    /// Lock a shape onto the board at `anchor`.
    ///
    /// Cells above the board or outside it are dropped silently.
    pub fn lock(&mut self, shape: &PieceShape, anchor: (i32, i32), kind: PieceKind) {
        for &(dx, dy) in shape {
            self.set(anchor.0 + dx, anchor.1 + dy, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Every row of the board as it was on entry is judged exactly once, from
    /// the bottom up; surviving rows are compacted downwards and the freed
    /// rows at the top are emptied. A row that slides into a cleared index is
    /// never re-examined.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top first
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Occupancy grid, `[y][x]`
    pub fn occupancy(&self) -> Vec<Vec<bool>> {
        self.rows()
            .map(|row| row.iter().map(Option::is_some).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
