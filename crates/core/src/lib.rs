//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, state machine and timing logic.
//! It has **no dependencies** on UI, terminal, or clocks, making it:
//!
//! - **Deterministic**: time comes in as caller timestamps and pieces come
//!   from an injectable [`PieceSource`]
//! - **Testable**: every rule can be driven tick by tick from a test
//! - **Portable**: any renderer can consume [`SessionSnapshot`]
//!
//! # Module Structure
//!
//! - [`catalog`]: tetromino geometry per rotation state and wall kick candidates
//! - [`board`]: occupancy grid with collision checks, locking and row clearing
//! - [`piece`]: the falling piece and its board-checked move/rotate/ghost
//! - [`session`]: the game state machine driven by `advance(now, intents)`
//! - [`repeat`]: held-direction auto-repeat timer
//! - [`scoring`]: line clear points and level progression
//! - [`rng`]: piece sources (uniform random, fixed sequence)
//! - [`config`]: tunables with TOML loading
//! - [`snapshot`]: owned read-only view for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn picks one of the seven kinds at random
//! - **Simple kicks**: a blocked rotation tries a short fixed list of shifts
//! - **Ghost piece**: shows where the current piece will land
//! - **Scoring**: 100/300/500/800 for 1-4 rows, level = lines / 10
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, SequenceSource, Session};
//! use blockfall_core::types::{Intents, PieceKind};
//!
//! let mut session = Session::new(GameConfig::default(), SequenceSource::repeat(PieceKind::O), 0);
//!
//! // Hard drop the first piece onto the floor.
//! let outcome = session.advance(16, Intents { hard_drop: true, ..Intents::NONE });
//! assert!(outcome.locked);
//! assert!(session.board().is_occupied(5, 19));
//! ```
//!
//! # Timing
//!
//! Call [`Session::advance`] every frame with the current monotonic time in
//! milliseconds and the keys currently held:
//! - **Gravity**: one row per `gravity_interval_ms` (1000ms by default)
//! - **Auto-repeat**: first repeat after 100ms, then every 30ms
//! - **Soft drop**: one extra row per tick while held

pub mod board;
pub mod catalog;
pub mod config;
pub mod piece;
pub mod repeat;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{geometry, rotation_count, wall_kicks, MinoOffset, PieceShape};
pub use config::{ConfigError, GameConfig};
pub use piece::Piece;
pub use repeat::{HorizontalDirection, RepeatTimer};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use scoring::{level_for_lines, line_clear_points};
pub use session::{AdvanceOutcome, Session, SessionStatus};
pub use snapshot::SessionSnapshot;
