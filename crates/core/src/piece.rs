//! Piece module - the falling tetromino and its rotation policy
//!
//! Rotation uses a four-step kick sequence instead of SRS tables: try the
//! rotated shape in place, one row up, one column right, then one column
//! left, and accept the first that fits. This is known to misbehave for
//! I/J/L near walls and is kept as the game's rotation rule.

use tracing::trace;

use crate::board::Board;
use crate::collision::can_place;
use crate::geometry;
use crate::types::{Orientation, PieceKind};

/// Box position of a freshly dispatched piece (x, y)
pub const SPAWN_POSITION: (i8, i8) = (0, 0);

/// Rotation kick offsets (dx, dy), tried in order
pub const KICK_OFFSETS: [(i8, i8); 4] = [(0, 0), (0, -1), (1, 0), (-1, 0)];

/// Active falling piece
///
/// (x, y) is the board position of the top-left corner of the piece's 4x4
/// box. The box may hang off the board wherever its mask is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub orientation: Orientation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino facing up at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            orientation: Orientation::Up,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Whether box cell (col, row) is part of the piece
    pub fn is_set(&self, col: i8, row: i8) -> bool {
        geometry::is_occupied(self.kind, self.orientation, col, row)
    }

    /// Board coordinates (x, y) of the four blocks
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        geometry::cells(self.kind, self.orientation).map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// Same piece one rotation step over, position unchanged
    pub fn rotated(&self, right: bool) -> Self {
        let orientation = if right {
            self.orientation.rotate_right()
        } else {
            self.orientation.rotate_left()
        };
        Self {
            orientation,
            ..*self
        }
    }

    /// Same piece shifted by (dx, dy)
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Try to rotate a piece, applying the kick sequence
///
/// Returns the rotated and kicked piece, or `None` when no offset fits.
pub fn try_rotate(board: &Board, piece: &Tetromino, right: bool) -> Option<Tetromino> {
    let rotated = piece.rotated(right);

    KICK_OFFSETS.iter().find_map(|&(dx, dy)| {
        let (x, y) = (piece.x + dx, piece.y + dy);
        if can_place(board, &rotated, x, y) {
            trace!(kind = piece.kind.as_str(), to = rotated.orientation.as_str(), dx, dy, "rotate");
            Some(rotated.moved(dx, dy))
        } else {
            None
        }
    })
}
