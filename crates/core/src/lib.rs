//! Core simulation for the falling-block engine - pure, deterministic, and testable
//!
//! This crate holds the board, the piece catalog, collision, line clearing,
//! ghost projection and the piece controller. It has **no** dependencies on
//! rendering, input, or timing:
//!
//! - **Deterministic**: a seeded [`UniformSource`] (or a [`ScriptedSource`])
//!   reproduces the same game
//! - **Synchronous**: every call runs to completion; the caller schedules
//!   gravity ticks
//! - **Poll-based**: renderers read [`GameState::occupied_cells`],
//!   [`GameState::active_cells`] and [`GameState::ghost_cells`] each frame
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven shapes, their colors, quarter-turn rotation
//! - [`board`]: fixed-size occupancy grid, row 0 at the bottom
//! - [`collision`]: legality of a pose against walls, floor and locked cells
//! - [`line_clear`]: bottom-up scan that clears full rows and compacts
//! - [`ghost`]: landing projection of a pose
//! - [`game_state`]: the piece controller state machine
//! - [`rng`]: spawn randomizer behind the [`PieceSource`] trait
//! - [`config`]: validated construction settings
//!
//! # Example
//!
//! ```
//! use tile_tetris_core::{EngineConfig, GameState};
//! use tile_tetris_types::{Intent, Phase};
//!
//! let mut game = GameState::with_seed(EngineConfig::default(), 12345).unwrap();
//! game.start();
//! assert_eq!(game.phase(), Phase::Falling);
//!
//! game.handle_intent(Intent::MoveLeft);
//! game.handle_intent(Intent::Rotate);
//! game.handle_intent(Intent::HardDrop);
//!
//! // The first piece is now part of the board.
//! assert_eq!(game.board().occupied_count(), 4);
//! ```

pub mod board;
pub mod catalog;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod ghost;
pub mod line_clear;
pub mod piece;
pub mod rng;

pub use tile_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{color_for, get_shape, shape_for};
pub use collision::{can_place, cells_fit};
pub use config::{ConfigError, EngineConfig};
pub use game_state::{spawn_anchor, GameState};
pub use ghost::project;
pub use line_clear::{scan_and_clear, ClearedRows};
pub use piece::Tetromino;
pub use rng::{PieceSource, ScriptedSource, SimpleRng, UniformSource};
