//! Piece catalog - the seven tetromino shapes and their colors
//!
//! Offsets are relative to the piece anchor with `+y` pointing up. Rotation is
//! applied to the offsets at query time; the tables themselves never change.

use crate::types::{PieceKind, Rgb, Rotation, MINOS_PER_PIECE};

/// Offset of a single mino relative to piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece anchor
pub type PieceShape = [MinoOffset; MINOS_PER_PIECE];

/// Identity-rotation shapes, indexed by catalog index.
static SHAPES: [PieceShape; 7] = [
    // I: straight line of four
    [(-2, 0), (-1, 0), (0, 0), (1, 0)],
    // J: three in line plus one above-left
    [(-1, 0), (0, 0), (1, 0), (-1, 1)],
    // L: three in line plus one above-right
    [(-1, 0), (0, 0), (1, 0), (1, 1)],
    // O: 2x2 square
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    // S
    [(-1, -1), (0, -1), (0, 0), (1, 0)],
    // T
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    // Z
    [(-1, 1), (0, 1), (0, 0), (1, 0)],
];

static COLORS: [Rgb; 7] = [
    Rgb::new(115, 251, 253),
    Rgb::new(0, 33, 245),
    Rgb::new(243, 168, 59),
    Rgb::new(255, 253, 84),
    Rgb::new(117, 250, 76),
    Rgb::new(155, 47, 246),
    Rgb::new(235, 51, 35),
];

/// Identity-rotation offsets for a piece kind.
pub fn shape_for(kind: PieceKind) -> &'static PieceShape {
    &SHAPES[kind.index()]
}

/// Display color for a piece kind.
pub fn color_for(kind: PieceKind) -> Rgb {
    COLORS[kind.index()]
}

/// Catalog lookup by raw index, as drawn by the spawn randomizer.
pub fn entry(index: usize) -> Option<(&'static PieceShape, Rgb)> {
    let kind = PieceKind::from_index(index)?;
    Some((shape_for(kind), color_for(kind)))
}

/// Rotate an offset counter-clockwise about the anchor, once per quarter turn.
#[inline]
pub fn rotate_offset(offset: MinoOffset, rotation: Rotation) -> MinoOffset {
    let (mut x, mut y) = offset;
    for _ in 0..rotation.quarter_turns() {
        (x, y) = (-y, x);
    }
    (x, y)
}

/// Get the offsets for a piece kind at a given rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    shape_for(kind).map(|offset| rotate_offset(offset, rotation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_out_of_range() {
        assert!(entry(7).is_none());
        assert!(entry(usize::MAX).is_none());
    }

    #[test]
    fn test_rotate_offset_quarter_turns() {
        assert_eq!(rotate_offset((1, 0), Rotation::North), (1, 0));
        assert_eq!(rotate_offset((1, 0), Rotation::West), (0, 1));
        assert_eq!(rotate_offset((1, 0), Rotation::South), (-1, 0));
        assert_eq!(rotate_offset((1, 0), Rotation::East), (0, -1));
    }

    #[test]
    fn test_every_shape_has_distinct_minos() {
        for kind in PieceKind::ALL {
            let shape = shape_for(kind);
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(shape[i], shape[j], "{:?} repeats a mino", kind);
                }
            }
        }
    }
}
