//! Ghost projection: where the active piece would land.

use crate::board::Board;
use crate::collision::can_place;
use crate::piece::Tetromino;

/// Number of rows `piece` can descend before it would collide.
pub fn drop_distance(piece: &Tetromino, board: &Board) -> u32 {
    if !can_place(piece, board) {
        return 0;
    }
    let mut distance: u32 = 0;
    let mut probe = *piece;
    loop {
        let next = probe.translated(0, -1);
        if !can_place(&next, board) {
            return distance;
        }
        probe = next;
        distance += 1;
    }
}

/// Lowest legal pose reachable by moving `piece` straight down.
///
/// Pure: neither the board nor the piece is touched. A pose that is already
/// illegal is returned unchanged.
pub fn project(piece: &Tetromino, board: &Board) -> Tetromino {
    piece.translated(0, -(drop_distance(piece, board) as i8))
}
