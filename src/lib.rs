//! Tile Tetris (workspace facade crate).
//!
//! Re-exports the engine crates under one path:
//! `tile_tetris::{core, input, term, types}`.

pub use tile_tetris_core as core;
pub use tile_tetris_input as input;
pub use tile_tetris_term as term;
pub use tile_tetris_types as types;
