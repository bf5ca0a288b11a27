//! Piece catalog tests - literal shapes, colors and rotation

use std::collections::BTreeSet;

use tile_tetris::core::catalog::{entry, rotate_offset};
use tile_tetris::core::{color_for, get_shape, shape_for, Tetromino};
use tile_tetris::types::{PieceKind, Rgb, Rotation};

fn as_set(cells: &[(i8, i8)]) -> BTreeSet<(i8, i8)> {
    cells.iter().copied().collect()
}

#[test]
fn test_catalog_literal_shapes() {
    let expected: [(PieceKind, [(i8, i8); 4]); 7] = [
        (PieceKind::I, [(-2, 0), (-1, 0), (0, 0), (1, 0)]),
        (PieceKind::J, [(-1, 0), (0, 0), (1, 0), (-1, 1)]),
        (PieceKind::L, [(-1, 0), (0, 0), (1, 0), (1, 1)]),
        (PieceKind::O, [(0, 0), (1, 0), (0, 1), (1, 1)]),
        (PieceKind::S, [(-1, -1), (0, -1), (0, 0), (1, 0)]),
        (PieceKind::T, [(-1, 0), (0, 0), (1, 0), (0, 1)]),
        (PieceKind::Z, [(-1, 1), (0, 1), (0, 0), (1, 0)]),
    ];

    for (kind, cells) in expected {
        assert_eq!(as_set(shape_for(kind)), as_set(&cells), "{:?}", kind);
    }
}

#[test]
fn test_catalog_colors_by_index() {
    let expected = [
        Rgb::new(115, 251, 253),
        Rgb::new(0, 33, 245),
        Rgb::new(243, 168, 59),
        Rgb::new(255, 253, 84),
        Rgb::new(117, 250, 76),
        Rgb::new(155, 47, 246),
        Rgb::new(235, 51, 35),
    ];

    for (index, color) in expected.into_iter().enumerate() {
        let (shape, entry_color) = entry(index).unwrap();
        assert_eq!(entry_color, color);
        assert_eq!(shape.len(), 4);
        assert_eq!(color_for(PieceKind::ALL[index]), color);
    }
    assert!(entry(7).is_none());
}

#[test]
fn test_catalog_is_pure() {
    let before = *shape_for(PieceKind::T);
    let _ = get_shape(PieceKind::T, Rotation::South);
    let _ = Tetromino::new(PieceKind::T, 5, 5).rotated().rotated().cells();
    assert_eq!(*shape_for(PieceKind::T), before);
    assert_eq!(get_shape(PieceKind::T, Rotation::East), get_shape(PieceKind::T, Rotation::East));
}

#[test]
fn test_rotation_is_counter_clockwise() {
    assert_eq!(rotate_offset((1, 0), Rotation::West), (0, 1));
    assert_eq!(rotate_offset((0, 1), Rotation::West), (-1, 0));
    assert_eq!(rotate_offset((1, 0), Rotation::South), (-1, 0));
    assert_eq!(rotate_offset((1, 0), Rotation::East), (0, -1));

    // T points up, then left after one turn.
    assert_eq!(
        as_set(&get_shape(PieceKind::T, Rotation::West)),
        as_set(&[(0, -1), (0, 0), (0, 1), (-1, 0)])
    );
}

#[test]
fn test_four_rotations_return_to_identity() {
    for kind in PieceKind::ALL {
        let start = Tetromino::new(kind, 5, 10);
        let mut piece = start;
        for _ in 0..4 {
            piece = piece.rotated();
        }
        assert_eq!(piece, start);
        assert_eq!(piece.cells(), start.cells());
    }
}

#[test]
fn test_o_piece_rotates_about_corner() {
    // No special case: the square turns about its anchor cell.
    let cells = as_set(&get_shape(PieceKind::O, Rotation::West));
    assert_eq!(cells, as_set(&[(0, 0), (0, 1), (-1, 0), (-1, 1)]));
}
