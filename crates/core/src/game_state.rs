//! Game state module - the piece controller
//!
//! Owns the board, the active piece and the spawn source, and drives the
//! `Spawning → Falling → Locking → Clearing → Spawning` loop. Every entry
//! point (`handle_intent`, `on_fall_tick`) runs to completion. There is no
//! timing state here: the caller decides when gravity ticks happen.

use crate::board::Board;
use crate::catalog::color_for;
use crate::collision::can_place;
use crate::config::{ConfigError, EngineConfig};
use crate::ghost::project;
use crate::line_clear::scan_and_clear;
use crate::piece::Tetromino;
use crate::rng::{PieceSource, UniformSource};
use crate::types::{ColoredCell, Intent, LockEvent, Phase};

/// Spawn anchor for a board: horizontal center (half rounded to even), top row.
pub fn spawn_anchor(width: u8, height: u8) -> (i8, i8) {
    let half = width / 2;
    let x = if width % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    };
    (x as i8, height as i8 - 1)
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    config: EngineConfig,
    board: Board,
    active: Option<Tetromino>,
    /// Landing pose of `active`, refreshed whenever `active` changes.
    ghost: Option<Tetromino>,
    source: S,
    phase: Phase,
    spawn: (i8, i8),
    /// Successful spawns so far.
    pieces: u32,
    lines: u32,
    last_event: Option<LockEvent>,
}

impl GameState<UniformSource> {
    /// Validate `config` and build a game drawing pieces uniformly.
    ///
    /// Uses `config.seed`, falling back to `fallback_seed` when unset.
    pub fn with_seed(config: EngineConfig, fallback_seed: u32) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or(fallback_seed);
        Self::new(config, UniformSource::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Validate `config` and build an empty board. No piece is active until
    /// [`GameState::start`].
    pub fn new(config: EngineConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let width = config.board_width as u8;
        let height = config.board_height as u8;

        Ok(Self {
            config,
            board: Board::new(width, height),
            active: None,
            ghost: None,
            source,
            phase: Phase::Spawning,
            spawn: spawn_anchor(width, height),
            pieces: 0,
            lines: 0,
            last_event: None,
        })
    }

    /// Spawn the first piece. Does nothing once the game is running.
    pub fn start(&mut self) {
        if self.phase == Phase::Spawning && self.active.is_none() {
            self.spawn_piece();
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn ghost(&self) -> Option<Tetromino> {
        self.ghost
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn spawn_position(&self) -> (i8, i8) {
        self.spawn
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply one player intent. Returns whether the piece moved (hard drop
    /// always reports `true` while the game is running).
    pub fn handle_intent(&mut self, intent: Intent) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        match intent {
            Intent::MoveLeft => self.attempt_move(-1, 0, false),
            Intent::MoveRight => self.attempt_move(1, 0, false),
            Intent::SoftDrop => self.attempt_move(0, -1, false),
            Intent::Rotate => self.attempt_move(0, 0, true),
            Intent::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Gravity: one downward move, locking if the piece is resting.
    pub fn on_fall_tick(&mut self) -> bool {
        self.attempt_move(0, -1, false)
    }

    /// Try to translate by (dx, dy) and, when `rotate`, turn a quarter
    /// counter-clockwise about the anchor. No wall kicks.
    ///
    /// On success the candidate becomes the active pose. On failure the pose
    /// is untouched; only a failed pure downward move locks the piece.
    pub fn attempt_move(&mut self, dx: i8, dy: i8, rotate: bool) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let mut candidate = active.translated(dx, dy);
        if rotate {
            candidate = candidate.rotated();
        }

        if can_place(&candidate, &self.board) {
            self.active = Some(candidate);
            self.refresh_ghost();
            return true;
        }

        if dx == 0 && dy == -1 && !rotate {
            self.lock_piece();
        }
        false
    }

    /// Drop until a downward move fails (which locks). Returns rows descended.
    pub fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.attempt_move(0, -1, false) {
            distance += 1;
        }
        distance
    }

    /// Write the active piece into the board, clear lines, spawn the next piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.ghost = None;

        self.phase = Phase::Locking;
        let mut written = 0;
        for (x, y) in active.cells() {
            // Cells above the visible board are dropped.
            if self.board.set(x, y, Some(active.kind)) {
                written += 1;
            }
        }

        self.phase = Phase::Clearing;
        let cleared = scan_and_clear(&mut self.board);
        self.lines += cleared.len() as u32;

        self.phase = Phase::Spawning;
        self.spawn_piece();

        self.last_event = Some(LockEvent {
            kind: active.kind,
            cells_written: written,
            lines_cleared: cleared.len() as u32,
            game_over: self.is_game_over(),
        });
    }

    /// Draw the next kind and place it at the spawn anchor.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.source.next_kind();
        let piece = Tetromino::new(kind, self.spawn.0, self.spawn.1);

        if !can_place(&piece, &self.board) {
            self.phase = Phase::GameOver;
            return false;
        }

        self.active = Some(piece);
        self.pieces = self.pieces.wrapping_add(1);
        self.phase = Phase::Falling;
        self.refresh_ghost();
        true
    }

    fn refresh_ghost(&mut self) {
        self.ghost = self.active.map(|piece| project(&piece, &self.board));
    }

    /// Locked fragments with their colors.
    pub fn occupied_cells(&self) -> impl Iterator<Item = ColoredCell> + '_ {
        self.board.occupied().map(|(x, y, kind)| ColoredCell {
            x,
            y,
            color: color_for(kind),
        })
    }

    /// Cells of the active piece, if any.
    pub fn active_cells(&self) -> Option<[ColoredCell; 4]> {
        self.active.map(|piece| piece.colored_cells())
    }

    /// Cells of the ghost projection, if any.
    pub fn ghost_cells(&self) -> Option<[(i8, i8); 4]> {
        self.ghost.map(|ghost| ghost.cells())
    }
}
