//! Terminal input collaborator.
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]s. Each key press
//! yields at most one intent; there is no auto-repeat handling here.

pub mod map;

pub use tile_tetris_types as types;

pub use map::{handle_key_event, should_quit};
