//! Hold module - the single hold slot
//!
//! One swap is allowed per piece lifetime: `can_hold` drops to false when a
//! hold happens and comes back only when a piece locks.

use tracing::debug;

use crate::piece::Tetromino;
use crate::queue::PieceQueue;
use crate::types::PieceKind;

/// Hold slot plus the once-per-piece flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldSlot {
    kind: Option<PieceKind>,
    can_hold: bool,
}

impl HoldSlot {
    pub fn new() -> Self {
        Self {
            kind: None,
            can_hold: true,
        }
    }

    /// Held kind, if any
    pub fn kind(&self) -> Option<PieceKind> {
        self.kind
    }

    pub fn occupied(&self) -> bool {
        self.kind.is_some()
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Re-arm the slot; called when a piece locks
    pub fn rearm(&mut self) {
        self.can_hold = true;
    }

    /// Put `active` on hold and return the piece that replaces it
    ///
    /// With an empty slot the replacement comes from the front of `queue`;
    /// otherwise the held kind comes back. Either way the new piece faces up
    /// at the spawn position. Returns `None` (and changes nothing) when a hold
    /// was already used for this piece.
    pub fn hold(&mut self, active: &Tetromino, queue: &mut PieceQueue) -> Option<Tetromino> {
        if !self.can_hold {
            return None;
        }
        self.can_hold = false;

        let next = match self.kind.replace(active.kind) {
            Some(held) => {
                debug!(stored = active.kind.as_str(), released = held.as_str(), "hold swap");
                held
            }
            None => {
                debug!(stored = active.kind.as_str(), "hold into empty slot");
                queue.pop()
            }
        };

        Some(Tetromino::new(next))
    }
}

impl Default for HoldSlot {
    fn default() -> Self {
        Self::new()
    }
}
