//! Queue module - lookahead queue of upcoming pieces
//!
//! A FIFO kept at exactly [`NEXT_QUEUE_LEN`] entries: every pop from the
//! front is followed by one freshly generated kind pushed at the back,
//! generated against the previous back entry so adjacent entries differ.

use arrayvec::ArrayVec;

use crate::rng::{generate_next, SimpleRng};
use crate::types::{PieceKind, NEXT_QUEUE_LEN};

/// Upcoming pieces, front first
#[derive(Debug, Clone)]
pub struct PieceQueue {
    pending: ArrayVec<PieceKind, NEXT_QUEUE_LEN>,
    /// Most recently generated kind (the back of the queue)
    last: Option<PieceKind>,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a full queue from the given seed
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            pending: ArrayVec::new(),
            last: None,
            rng: SimpleRng::new(seed),
        };
        queue.refill();
        queue
    }

    /// Top the queue back up to its target length
    fn refill(&mut self) {
        while !self.pending.is_full() {
            let kind = generate_next(&mut self.rng, self.last);
            self.pending.push(kind);
            self.last = Some(kind);
        }
    }

    /// Take the front piece and append a new one at the back
    pub fn pop(&mut self) -> PieceKind {
        let kind = self.pending.remove(0);
        self.refill();
        kind
    }

    /// Front piece without removing it
    pub fn peek(&self) -> PieceKind {
        self.pending[0]
    }

    /// Iterate front to back
    pub fn iter(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.pending.iter().copied()
    }

    pub fn as_slice(&self) -> &[PieceKind] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
