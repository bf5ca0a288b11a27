//! Shared data types and constants for the falling-block engine.
//!
//! Everything here is plain data with no dependencies, so the same types are
//! usable by the simulation core, the input mapper, and the terminal view.
//!
//! # Coordinates
//!
//! Cells are addressed as `(x, y)` with `x` counting columns from the left and
//! `y` counting rows from the **bottom** (row 0 is the floor). Rows at or above
//! the board height are the spawn zone: always empty, never stored.
//!
//! # Board Dimensions
//!
//! | Constant | Value |
//! |----------|-------|
//! | `DEFAULT_BOARD_WIDTH` | 10 |
//! | `DEFAULT_BOARD_HEIGHT` | 20 |
//! | width range | `MIN_BOARD_WIDTH..=MAX_BOARD_WIDTH` (4..=40) |
//! | height range | `MIN_BOARD_HEIGHT..=MAX_BOARD_HEIGHT` (5..=20) |
//!
//! # Examples
//!
//! ```
//! use tile_tetris_types::{Intent, PieceKind, Rotation};
//!
//! assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
//! assert_eq!(PieceKind::Z.index(), 6);
//!
//! assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
//! assert_ne!(Intent::Rotate, Intent::HardDrop);
//! ```

/// Default board width in cells.
pub const DEFAULT_BOARD_WIDTH: u8 = 10;

/// Default board height in cells.
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Narrowest supported board.
pub const MIN_BOARD_WIDTH: u8 = 4;

/// Widest supported board.
pub const MAX_BOARD_WIDTH: u8 = 40;

/// Shortest supported board.
pub const MIN_BOARD_HEIGHT: u8 = 5;

/// Tallest supported board.
pub const MAX_BOARD_HEIGHT: u8 = 20;

/// Default gravity interval in seconds.
pub const DEFAULT_FALL_CYCLE_SECS: f32 = 1.0;

/// Number of cells in every piece.
pub const MINOS_PER_PIECE: usize = 4;

/// The seven tetromino kinds, in catalog order.
///
/// The discriminant order is the catalog index used by the uniform spawn draw:
/// `I, J, L, O, S, T, Z` map to `0..7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Look up a kind by catalog index.
    ///
    /// ```
    /// use tile_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(3), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Catalog index of this kind.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Orientation of a piece as a number of counter-clockwise quarter turns.
///
/// - **North**: spawn orientation (identity)
/// - **West**: 90° counter-clockwise
/// - **South**: 180°
/// - **East**: 270° counter-clockwise
///
/// The only rotation the engine performs is a single counter-clockwise step:
/// North → West → South → East → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    West,
    South,
    East,
}

impl Rotation {
    /// Rotate a quarter turn counter-clockwise.
    ///
    /// ```
    /// use tile_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_ccw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_ccw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Number of counter-clockwise quarter turns from identity.
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::West => 1,
            Rotation::South => 2,
            Rotation::East => 3,
        }
    }
}

/// Discrete player intents, one consumed per `handle_intent` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; locks when the piece is resting
    SoftDrop,
    /// Rotate 90° counter-clockwise about the anchor, no wall kick
    Rotate,
    /// Drop to the lowest legal row and lock
    HardDrop,
}

/// Piece controller phases.
///
/// `Spawning → Falling → Locking → Clearing → Spawning` loops for the life of
/// a game. Locking, clearing and spawning run to completion inside a single
/// call, so callers only ever observe `Spawning` (before the first spawn),
/// `Falling`, or the terminal `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    Clearing,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Spawning => "spawning",
            Phase::Falling => "falling",
            Phase::Locking => "locking",
            Phase::Clearing => "clearing",
            Phase::GameOver => "gameOver",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A board coordinate paired with the color to draw it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredCell {
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
}

/// Emitted when a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Cells written into the board; cells above the top row are dropped.
    pub cells_written: u32,
    pub lines_cleared: u32,
    /// The spawn following this lock was blocked.
    pub game_over: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: locked fragment; the kind is its identity and color
pub type Cell = Option<PieceKind>;
