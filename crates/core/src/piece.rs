//! Active piece pose: kind, rotation and anchor.

use crate::catalog::{color_for, get_shape, PieceShape};
use crate::types::{ColoredCell, PieceKind, Rotation};

/// A piece pose. Absolute cell = anchor + rotated(offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece at an anchor with identity rotation
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Get the offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board cells of this pose.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Absolute cells paired with the piece color.
    pub fn colored_cells(&self) -> [ColoredCell; 4] {
        let color = color_for(self.kind);
        self.cells().map(|(x, y)| ColoredCell { x, y, color })
    }

    /// Same pose shifted by (dx, dy).
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same anchor turned a quarter counter-clockwise.
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_ccw(),
            ..*self
        }
    }
}
