//! Board tests - grid storage, bounds and row operations

use tile_tetris::core::Board;
use tile_tetris::types::{PieceKind, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH, MIN_BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..board.width() as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(10, 20);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert_eq!(board.cells().len(), 200);

    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert!(board.is_empty());
}

#[test]
fn test_board_dimensions_are_clamped() {
    let board = Board::new(1, 200);
    assert_eq!(board.width(), MIN_BOARD_WIDTH);
    assert_eq!(board.height(), MAX_BOARD_HEIGHT);

    let board = Board::new(u8::MAX, 5);
    assert_eq!(board.width(), MAX_BOARD_WIDTH);
}

#[test]
fn test_is_occupied_bounds() {
    let mut board = Board::new(10, 20);
    board.set(4, 7, Some(PieceKind::L));

    // Walls and floor.
    assert_eq!(board.is_occupied(-1, 0), None);
    assert_eq!(board.is_occupied(10, 0), None);
    assert_eq!(board.is_occupied(0, -1), None);

    // Above the visible board reads as free space.
    assert_eq!(board.is_occupied(0, 20), Some(false));
    assert_eq!(board.is_occupied(9, 50), Some(false));

    assert_eq!(board.is_occupied(4, 7), Some(true));
    assert_eq!(board.is_occupied(5, 7), Some(false));
}

#[test]
fn test_board_set_and_clear() {
    let mut board = Board::new(10, 20);

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert_eq!(board.occupied_count(), 1);

    assert!(board.clear_cell(5, 10));
    assert_eq!(board.get(5, 10), Some(None));

    // Writes outside the visible board are refused.
    assert!(!board.set(5, 20, Some(PieceKind::T)));
    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(board.is_empty());
}

#[test]
fn test_row_fullness() {
    let mut board = Board::new(10, 20);
    assert!(!board.is_row_full(0));

    for x in 0..9 {
        board.set(x, 0, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(0));

    board.set(9, 0, Some(PieceKind::O));
    assert!(board.is_row_full(0));
    assert!(!board.is_row_full(20));
}

#[test]
fn test_compact_from_shifts_rows_down_in_order() {
    let mut board = Board::new(4, 6);
    fill_row(&mut board, 1, PieceKind::I);
    board.set(0, 0, Some(PieceKind::J));
    board.set(1, 2, Some(PieceKind::S));
    board.set(2, 3, Some(PieceKind::Z));
    board.set(3, 5, Some(PieceKind::T));

    board.clear_row(1);
    board.compact_from(1);

    // Row below the cleared one is untouched.
    assert_eq!(board.get(0, 0), Some(Some(PieceKind::J)));
    assert_eq!(board.get(1, 1), Some(Some(PieceKind::S)));
    assert_eq!(board.get(2, 2), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(3, 4), Some(Some(PieceKind::T)));
    assert_eq!(board.row(5), Some(&[None; 4][..]));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_occupied_iterates_bottom_up() {
    let mut board = Board::new(10, 20);
    board.set(3, 5, Some(PieceKind::Z));
    board.set(7, 0, Some(PieceKind::O));

    let cells: Vec<_> = board.occupied().collect();
    assert_eq!(cells, vec![(7, 0, PieceKind::O), (3, 5, PieceKind::Z)]);

    board.reset();
    assert_eq!(board.occupied().count(), 0);
}
