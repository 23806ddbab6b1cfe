//! Terminal renderer for the game.
//!
//! Draws a [`core::SessionSnapshot`] into a character framebuffer and flushes
//! it to the terminal, redrawing only the runs that changed. Reads the
//! snapshot only; nothing here mutates the session.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
