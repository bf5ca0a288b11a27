//! Collision checks against walls, floor and locked cells.
//!
//! Rows at or above the board height are never checked for occupancy, so a
//! piece may hang partly above the visible board (spawn zone).

use crate::board::Board;
use crate::piece::Tetromino;

/// True iff every cell is inside the walls, at or above the floor, and not on
/// a locked fragment.
pub fn cells_fit(cells: &[(i8, i8)], board: &Board) -> bool {
    cells
        .iter()
        .all(|&(x, y)| board.is_occupied(x, y) == Some(false))
}

/// True iff `piece` can occupy its pose on `board`.
pub fn can_place(piece: &Tetromino, board: &Board) -> bool {
    cells_fit(&piece.cells(), board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_spawn_zone_is_always_free() {
        let board = Board::new(10, 20);
        assert!(cells_fit(&[(0, 20), (9, 25), (4, 19), (5, 100)], &board));
    }

    #[test]
    fn test_single_blocked_cell_rejects_piece() {
        let mut board = Board::new(10, 20);
        board.set(6, 10, Some(PieceKind::Z));

        let piece = Tetromino::new(PieceKind::I, 5, 10);
        assert!(!can_place(&piece, &board));
        assert!(can_place(&piece.translated(0, 1), &board));
    }
}
