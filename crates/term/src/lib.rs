//! Terminal front-end for the falling-block engine.
//!
//! Rendering is split in two: [`BoardView`] turns a `GameState` into a
//! [`FrameBuffer`] with no I/O, and [`TerminalRenderer`] flushes frames
//! through crossterm. Cells are two columns wide so the well looks square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tile_tetris_core as core;
pub use tile_tetris_types as types;

pub use fb::{FrameBuffer, Glyph};
pub use game_view::{BoardView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
