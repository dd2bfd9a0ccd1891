//! Collision module - placement legality
//!
//! A placement is legal when every set cell of the piece's mask lands on an
//! in-bounds, empty board cell. Unset mask cells impose nothing, so the 4x4
//! box may hang past the walls or the floor as long as no block does.

use crate::board::Board;
use crate::geometry::cells;
use crate::piece::Tetromino;

/// Whether `piece`'s shape fits on `board` with its box at (x, y)
///
/// The piece's own position is ignored; only its kind and orientation matter.
/// Short-circuits on the first blocked cell and never mutates the board.
#[inline]
pub fn can_place(board: &Board, piece: &Tetromino, x: i8, y: i8) -> bool {
    cells(piece.kind, piece.orientation).all(|(dx, dy)| board.is_free(x + dx, y + dy))
}

/// Whether `piece` fits where it currently stands
#[inline]
pub fn fits(board: &Board, piece: &Tetromino) -> bool {
    can_place(board, piece, piece.x, piece.y)
}
