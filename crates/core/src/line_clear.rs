//! Line clearing - scan for full rows, remove them, compact the rest downward.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::MAX_BOARD_HEIGHT;

/// Original row indices removed by one scan, bottom to top.
pub type ClearedRows = ArrayVec<u8, { MAX_BOARD_HEIGHT as usize }>;

/// Clear every full row and compact the rows above, preserving their order.
///
/// Rows are scanned from the floor up. After a clear the same index is
/// scanned again, since the row above has just shifted into it. Returned
/// indices refer to the board as it was before the call; `len()` is the
/// number of rows cleared.
pub fn scan_and_clear(board: &mut Board) -> ClearedRows {
    let mut cleared = ClearedRows::new();
    let mut y = 0usize;

    while y < board.height() as usize {
        if board.is_row_full(y) {
            board.clear_row(y);
            board.compact_from(y);
            // Each earlier clear pulled this row down by one.
            cleared.push((y + cleared.len()) as u8);
        } else {
            y += 1;
        }
    }

    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_nothing_to_clear() {
        let mut board = Board::new(10, 20);
        board.set(0, 0, Some(PieceKind::I));
        let before = board.clone();

        assert!(scan_and_clear(&mut board).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_cascade_of_adjacent_rows_reports_original_indices() {
        let mut board = Board::new(4, 5);
        board.fill_row(1, PieceKind::J);
        board.fill_row(2, PieceKind::L);
        board.set(3, 3, Some(PieceKind::T));

        let cleared = scan_and_clear(&mut board);
        assert_eq!(cleared.as_slice(), &[1, 2]);
        assert_eq!(board.get(3, 1), Some(Some(PieceKind::T)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_full_board_empties() {
        let mut board = Board::new(40, 20);
        for y in 0..20 {
            board.fill_row(y, PieceKind::O);
        }

        let cleared = scan_and_clear(&mut board);
        assert_eq!(cleared.len(), 20);
        assert_eq!(cleared.as_slice(), (0..20).collect::<Vec<u8>>().as_slice());
        assert!(board.is_empty());
    }
}
