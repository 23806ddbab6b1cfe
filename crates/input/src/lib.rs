//! Terminal input module (driver-facing).
//!
//! Maps `crossterm` key events onto held game keys and turns them into one
//! [`types::Intents`] value per tick. Auto-repeat and press edges are the
//! session's job; this crate only answers "which keys are down right now",
//! including on terminals that never send key-release events.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputState;
pub use map::{map_key, should_quit, GameKey};
