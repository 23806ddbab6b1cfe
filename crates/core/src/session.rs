//! Session module - the game state machine
//!
//! Owns the board, the active piece and its ghost, the counters, and all
//! timing state. The driver calls [`Session::advance`] once per frame with a
//! timestamp and the keys currently held; everything else is derived here.
//!
//! Per tick, in order:
//! 1. ghost refresh
//! 2. rotation on a fresh rotate press
//! 3. hard drop on a fresh press: fall until blocked, then lock
//! 4. horizontal auto-repeat and soft drop
//! 5. gravity; a blocked gravity step locks the piece, clears rows, scores and spawns

use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::piece::Piece;
use crate::repeat::{HorizontalDirection, RepeatTimer};
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::{level_for_lines, line_clear_points};
use crate::snapshot::SessionSnapshot;
use crate::types::{Intents, RotateDirection, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Playing,
    GameOver,
}

/// What happened during one [`Session::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvanceOutcome {
    pub locked: bool,
    pub rows_cleared: u32,
    pub points: u32,
    pub became_game_over: bool,
    pub reset: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<S: PieceSource = UniformSource> {
    config: GameConfig,
    source: S,
    board: Board,
    active: Piece,
    ghost: Piece,
    score: u32,
    lines_cleared: u32,
    level: u32,
    status: SessionStatus,
    last_gravity: Timestamp,
    repeat: RepeatTimer,
    /// Keys held on the previous tick, for press edges
    previous: Intents,
}

impl<S: PieceSource> Session<S> {
    /// Start a game on an empty board
    pub fn new(config: GameConfig, source: S, now: Timestamp) -> Self {
        let board = Board::new(config.board_width, config.board_height);
        Self::with_board(config, board, source, now)
    }

    /// Start a game on a prepared board. The board's size wins over the
    /// configured one.
    pub fn with_board(mut config: GameConfig, board: Board, mut source: S, now: Timestamp) -> Self {
        config.board_width = board.width();
        config.board_height = board.height();

        let active = Piece::spawn(source.next(), board.width());
        let repeat = RepeatTimer::new(config.initial_repeat_delay_ms, config.repeat_interval_ms);

        let mut session = Self {
            config,
            source,
            board,
            active,
            ghost: active,
            score: 0,
            lines_cleared: 0,
            level: 0,
            status: SessionStatus::Playing,
            last_gravity: now,
            repeat,
            previous: Intents::NONE,
        };
        session.check_spawn();
        session.refresh_ghost();
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == SessionStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn ghost(&self) -> Piece {
        self.ghost
    }

    pub fn active_piece_cells(&self) -> [(i32, i32); 4] {
        self.active.cells()
    }

    pub fn ghost_piece_cells(&self) -> [(i32, i32); 4] {
        self.ghost.cells()
    }

    /// Occupancy grid, `[y][x]`
    pub fn board_snapshot(&self) -> Vec<Vec<bool>> {
        self.board.occupancy()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            board: self.board.cells().to_vec(),
            active_kind: self.active.kind,
            active_cells: self.active.cells(),
            ghost_cells: self.ghost.cells(),
            score: self.score,
            level: self.level,
            lines_cleared: self.lines_cleared,
            game_over: self.game_over(),
        }
    }

    /// Advance the simulation to `now` with the keys currently held.
    pub fn advance(&mut self, now: Timestamp, intents: Intents) -> AdvanceOutcome {
        let mut outcome = AdvanceOutcome::default();
        let pressed = press_edges(&self.previous, &intents);
        self.previous = intents;

        if pressed.reset {
            self.reset(now);
            outcome.reset = true;
            return outcome;
        }
        if self.status == SessionStatus::GameOver {
            return outcome;
        }

        self.refresh_ghost();

        if pressed.rotate_cw {
            self.active.attempt_rotate(RotateDirection::Cw, &self.board);
        }
        if pressed.rotate_ccw {
            self.active.attempt_rotate(RotateDirection::Ccw, &self.board);
        }

        if pressed.hard_drop {
            while self.active.attempt_move(0, 1, &self.board) {}
            self.lock_active(now, &mut outcome);
            self.refresh_ghost();
            return outcome;
        }

        let direction = HorizontalDirection::from_held(intents.move_left, intents.move_right);
        for step in self.repeat.update(now, direction) {
            self.active.attempt_move(step.dx(), 0, &self.board);
        }

        // A blocked soft drop forces the gravity step so a held down key locks.
        let mut forced = false;
        if intents.soft_drop && !self.active.attempt_move(0, 1, &self.board) {
            forced = true;
        }

        // Due once a full interval has elapsed, so a 1000ms interval steps at exactly +1000.
        if forced || now.saturating_sub(self.last_gravity) >= self.config.gravity_interval_ms {
            if self.active.attempt_move(0, 1, &self.board) {
                self.last_gravity = now;
            } else {
                self.lock_active(now, &mut outcome);
            }
        }

        self.refresh_ghost();
        outcome
    }

    /// Empty the board, zero the counters and spawn a fresh piece.
    pub fn reset(&mut self, now: Timestamp) {
        self.board.clear();
        self.score = 0;
        self.lines_cleared = 0;
        self.level = 0;
        self.status = SessionStatus::Playing;
        self.last_gravity = now;
        self.repeat.reset();
        self.spawn();
        self.refresh_ghost();
        info!("session reset");
    }

    /// Stamp the active piece, clear rows, score, and spawn the next piece.
    fn lock_active(&mut self, now: Timestamp, outcome: &mut AdvanceOutcome) {
        let piece = self.active;
        self.board.lock(piece.shape(), piece.anchor(), piece.kind);

        let rows = self.board.clear_full_rows();
        let points = line_clear_points(rows, &self.config.score_table);
        if rows > 0 {
            self.score = self.score.saturating_add(points);
            self.lines_cleared = self.lines_cleared.saturating_add(rows as u32);
            self.level = level_for_lines(self.lines_cleared, self.config.lines_per_level);
        }
        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            rows,
            points,
            score = self.score,
            "piece locked"
        );

        outcome.locked = true;
        outcome.rows_cleared = rows as u32;
        outcome.points = points;

        self.last_gravity = now;
        if !self.spawn() {
            outcome.became_game_over = true;
        }
    }

    /// Replace the active piece with a fresh one at the spawn anchor.
    /// Returns false if it landed on locked cells, ending the game.
    fn spawn(&mut self) -> bool {
        let kind = self.source.next();
        self.active = Piece::spawn(kind, self.board.width());
        self.check_spawn()
    }

    fn check_spawn(&mut self) -> bool {
        if self.active.collides(&self.board) {
            self.status = SessionStatus::GameOver;
            info!(
                score = self.score,
                lines = self.lines_cleared,
                level = self.level,
                "game over"
            );
            return false;
        }
        true
    }

    fn refresh_ghost(&mut self) {
        // A blocked spawn already overlaps the stack and has no landing row.
        self.ghost = if self.game_over() {
            self.active
        } else {
            self.active.ghost_drop(&self.board)
        };
    }
}

impl Session<UniformSource> {
    /// Default configuration and a seeded uniform piece source
    pub fn with_seed(seed: u32, now: Timestamp) -> Self {
        Self::new(GameConfig::default(), UniformSource::new(seed), now)
    }
}

/// Keys that went from released to held since the previous tick.
/// Only the one-shot keys are reported.
fn press_edges(previous: &Intents, current: &Intents) -> Intents {
    Intents {
        hard_drop: current.hard_drop && !previous.hard_drop,
        rotate_cw: current.rotate_cw && !previous.rotate_cw,
        rotate_ccw: current.rotate_ccw && !previous.rotate_ccw,
        reset: current.reset && !previous.reset,
        ..Intents::NONE
    }
}
