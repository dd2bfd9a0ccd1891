//! Game state module - the active piece controller
//!
//! Owns the board, the falling piece, the lookahead queue and the hold slot,
//! and drives them through gravity steps, player commands, the lock
//! sequence and line clears.
//!
//! A piece locks after [`LOCK_TRY_LIMIT`] consecutive gravity steps that
//! could not move it down. Any successful fall resets the count.

use tracing::{debug, trace};

use crate::board::{Board, ClearedRows};
use crate::collision::can_place;
use crate::hold::HoldSlot;
use crate::piece::{self, Tetromino};
use crate::queue::PieceQueue;
use crate::types::{GameAction, PieceKind, LOCK_TRY_LIMIT, STEP_INTERVAL_MS};

/// Outcome of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The piece moved down one row
    Fell,
    /// The piece could not move; lock count increased
    Blocked,
    /// The piece locked and the next one was dispatched
    Locked,
    /// The game is paused; nothing happened
    Paused,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Tetromino,
    queue: PieceQueue,
    hold: HoldSlot,
    /// Time accumulated since the last automatic gravity step
    step_timer_ms: u32,
    /// Consecutive failed downward steps
    lock_tries: u8,
    paused: bool,
    /// Last kind handed out by the debug cycle command
    debug_kind: PieceKind,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The first active piece is the first generated kind, so the
    /// no-repeat rule also holds between it and the queue front.
    pub fn new(seed: u32) -> Self {
        let mut queue = PieceQueue::new(seed);
        let active = Tetromino::new(queue.pop());
        Self::from_parts(Board::new(), active, queue)
    }

    /// Assemble a game from an existing board, active piece and queue
    pub fn from_parts(board: Board, active: Tetromino, queue: PieceQueue) -> Self {
        Self {
            board,
            active,
            queue,
            hold: HoldSlot::new(),
            step_timer_ms: 0,
            lock_tries: 0,
            paused: false,
            debug_kind: PieceKind::I,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn hold_slot(&self) -> &HoldSlot {
        &self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.hold.can_hold()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn lock_tries(&self) -> u8 {
        self.lock_tries
    }

    pub fn step_timer_ms(&self) -> u32 {
        self.step_timer_ms
    }

    /// Advance real time by `elapsed_ms`
    ///
    /// Runs a gravity step each time the accumulated time reaches
    /// [`STEP_INTERVAL_MS`], then clears any filled rows. Returns the gravity
    /// step outcome if one ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Step> {
        let mut step = None;
        if !self.paused {
            self.step_timer_ms = self.step_timer_ms.saturating_add(elapsed_ms);
            if self.step_timer_ms >= STEP_INTERVAL_MS {
                self.step_timer_ms = 0;
                step = Some(self.step());
            }
        }
        self.clear_lines();
        step
    }

    /// One gravity step: fall a row, or count a failed try and lock on the limit
    pub fn step(&mut self) -> Step {
        if self.paused {
            return Step::Paused;
        }

        let Tetromino { x, y, .. } = self.active;
        if can_place(&self.board, &self.active, x, y + 1) {
            self.active.y += 1;
            self.lock_tries = 0;
            trace!(y = self.active.y, "fall");
            return Step::Fell;
        }

        self.lock_tries += 1;
        if self.lock_tries >= LOCK_TRY_LIMIT {
            self.lock_piece();
            Step::Locked
        } else {
            Step::Blocked
        }
    }

    /// Lock sequence: imprint, re-arm hold, dispatch the next piece
    fn lock_piece(&mut self) {
        let locked = self.active;
        self.board.imprint(&locked);
        self.hold.rearm();
        self.active = Tetromino::new(self.queue.pop());
        self.lock_tries = 0;
        debug!(
            kind = locked.kind.as_str(),
            x = locked.x,
            y = locked.y,
            next = self.active.kind.as_str(),
            "lock"
        );
    }

    /// Remove filled rows, returning their original indices
    pub fn clear_lines(&mut self) -> ClearedRows {
        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            debug!(rows = ?cleared.as_slice(), "line clear");
        }
        cleared
    }

    /// Shift the piece horizontally by `dx` if the target fits
    pub fn try_move(&mut self, dx: i8) -> bool {
        let Tetromino { x, y, .. } = self.active;
        if can_place(&self.board, &self.active, x + dx, y) {
            self.active.x += dx;
            true
        } else {
            false
        }
    }

    /// Rotate one step right or left using the kick sequence
    pub fn try_rotate(&mut self, right: bool) -> bool {
        match piece::try_rotate(&self.board, &self.active, right) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Drop the piece as far as it fits, then lock it
    ///
    /// Returns the number of rows dropped, or `None` while paused.
    pub fn hard_drop(&mut self) -> Option<u8> {
        if self.paused {
            return None;
        }

        let mut rows = 0u8;
        while can_place(&self.board, &self.active, self.active.x, self.active.y + 1) {
            self.active.y += 1;
            rows += 1;
        }
        self.lock_piece();
        Some(rows)
    }

    /// Put the active piece on hold (once per piece)
    pub fn hold(&mut self) -> bool {
        match self.hold.hold(&self.active, &mut self.queue) {
            Some(next) => {
                self.active = next;
                self.lock_tries = 0;
                true
            }
            None => false,
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
    }

    /// Debug command: swap the active kind for the next one in table order
    ///
    /// The order is tracked by its own cursor starting at I, independent of
    /// the active kind, so the first use always yields J. The piece keeps its
    /// orientation and returns to the spawn position without a collision
    /// check.
    pub fn cycle_kind(&mut self) {
        self.debug_kind = self.debug_kind.cycled();
        self.active.kind = self.debug_kind;
        self.active.x = piece::SPAWN_POSITION.0;
        self.active.y = piece::SPAWN_POSITION.1;
    }

    /// Apply a player command, then clear any filled rows
    ///
    /// Returns whether the command changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = match action {
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::SoftDrop => self.step() != Step::Paused,
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::RotateRight => self.try_rotate(true),
            GameAction::RotateLeft => self.try_rotate(false),
            GameAction::Hold => self.hold(),
            GameAction::Pause => {
                self.toggle_pause();
                true
            }
            GameAction::CycleKind => {
                self.cycle_kind();
                true
            }
        };
        self.clear_lines();
        changed
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, PieceKind, BOARD_ROWS};

    fn game_with(kind: PieceKind, x: i8, y: i8, board: Board) -> GameState {
        let active = Tetromino {
            kind,
            orientation: Orientation::Up,
            x,
            y,
        };
        GameState::from_parts(board, active, PieceQueue::new(12345))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert_eq!(state.active.orientation, Orientation::Up);
        assert_eq!((state.active.x, state.active.y), (0, 0));
        assert_ne!(state.active.kind, state.queue.peek());
        assert!(state.can_hold());
        assert!(!state.paused);
        assert_eq!(state.lock_tries, 0);
        assert_eq!(state.board.occupied_count(), 0);
    }

    #[test]
    fn test_tick_accumulates_until_interval() {
        let mut state = game_with(PieceKind::T, 3, 0, Board::new());
        assert_eq!(state.tick(100), None);
        assert_eq!(state.step_timer_ms, 100);
        assert_eq!(state.tick(99), None);
        assert_eq!(state.tick(1), Some(Step::Fell));
        assert_eq!(state.step_timer_ms, 0);
        assert_eq!(state.active.y, 1);
    }

    #[test]
    fn test_step_resets_lock_tries_on_fall() {
        let mut state = game_with(PieceKind::O, 3, 0, Board::new());
        state.lock_tries = 2;
        assert_eq!(state.step(), Step::Fell);
        assert_eq!(state.lock_tries, 0);
    }

    #[test]
    fn test_lock_after_three_blocked_steps() {
        // O Up occupies box rows 0-1, so y = 21 rests on the floor
        let mut state = game_with(PieceKind::O, 3, 21, Board::new());
        let next = state.queue.peek();

        assert_eq!(state.step(), Step::Blocked);
        assert_eq!(state.step(), Step::Blocked);
        assert_eq!(state.board.occupied_count(), 0);
        assert_eq!(state.step(), Step::Locked);

        assert!(state.board.cell_occupied(21, 4));
        assert!(state.board.cell_occupied(21, 5));
        assert!(state.board.cell_occupied(22, 4));
        assert!(state.board.cell_occupied(22, 5));
        assert_eq!(state.active, Tetromino::new(next));
        assert_eq!(state.lock_tries, 0);
    }

    #[test]
    fn test_move_blocked_by_wall() {
        let mut state = game_with(PieceKind::I, 0, 0, Board::new());
        assert!(!state.try_move(-1));
        assert_eq!(state.active.x, 0);
        assert!(state.try_move(1));
        assert_eq!(state.active.x, 1);
    }

    #[test]
    fn test_move_does_not_touch_lock_tries() {
        let mut state = game_with(PieceKind::O, 3, 21, Board::new());
        state.step();
        assert_eq!(state.lock_tries, 1);
        assert!(state.try_move(1));
        assert_eq!(state.lock_tries, 1);
    }

    #[test]
    fn test_hard_drop_lands_and_locks() {
        let mut state = game_with(PieceKind::I, 2, 0, Board::new());
        let next = state.queue.peek();

        // I Up sits on box row 1, so it lands with y = 21
        assert_eq!(state.hard_drop(), Some(21));
        for x in 2..6 {
            assert!(state.board.cell_occupied(22, x));
        }
        assert_eq!(state.active, Tetromino::new(next));
        assert!(state.can_hold());
    }

    #[test]
    fn test_hard_drop_at_spawn_row_still_drops() {
        let mut state = game_with(PieceKind::O, 0, 0, Board::new());
        assert_eq!(state.hard_drop(), Some(21));
        assert_eq!(state.board.occupied_count(), 4);
    }

    #[test]
    fn test_hard_drop_on_stack() {
        let board = Board::from_ascii(&["##########", "##########"]);
        let mut state = game_with(PieceKind::O, 0, 0, board);
        state.clear_lines();
        assert_eq!(state.board.occupied_count(), 0);

        let board = Board::from_ascii(&[".#........"]);
        let mut state = game_with(PieceKind::O, 0, 0, board);
        assert_eq!(state.hard_drop(), Some(20));
        assert!(state.board.cell_occupied(21, 1));
        assert!(state.board.cell_occupied(20, 2));
    }

    #[test]
    fn test_hold_once_per_piece() {
        let mut state = game_with(PieceKind::T, 4, 6, Board::new());
        let front = state.queue.peek();

        assert!(state.hold());
        assert_eq!(state.hold.kind(), Some(PieceKind::T));
        assert_eq!(state.active, Tetromino::new(front));
        assert!(!state.can_hold());

        let active = state.active;
        assert!(!state.hold());
        assert_eq!(state.active, active);
        assert_eq!(state.hold.kind(), Some(PieceKind::T));
    }

    #[test]
    fn test_lock_rearms_hold_and_swap_returns_held_kind() {
        let mut state = game_with(PieceKind::T, 4, 6, Board::new());
        assert!(state.hold());
        state.hard_drop();
        assert!(state.can_hold());

        let third = state.active.kind;
        state.try_move(1);
        assert!(state.hold());
        assert_eq!(state.active, Tetromino::new(PieceKind::T));
        assert_eq!(state.hold.kind(), Some(third));
    }

    #[test]
    fn test_pause_gates_gravity_and_drops() {
        let mut state = game_with(PieceKind::T, 3, 0, Board::new());
        state.toggle_pause();

        assert_eq!(state.tick(1_000), None);
        assert_eq!(state.step(), Step::Paused);
        assert_eq!(state.hard_drop(), None);
        assert!(!state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active.y, 0);

        assert!(state.apply_action(GameAction::Pause));
        assert!(!state.paused());
        assert_eq!(state.step(), Step::Fell);
    }

    #[test]
    fn test_tick_clears_filled_row() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 5, true);
        }
        board.set(0, 4, true);
        let mut state = game_with(PieceKind::T, 3, 0, board);

        state.tick(1);
        assert!(!state.board.is_row_full(5));
        assert!(state.board.cell_occupied(5, 0));
        assert_eq!(state.board.occupied_count(), 1);
        assert_eq!(state.board.rows(), BOARD_ROWS);
    }

    #[test]
    fn test_line_clear_after_lock() {
        let board = Board::from_ascii(&["####..####"]);
        // O Up fills box columns 1-2; x = 3 covers board columns 4-5
        let mut state = game_with(PieceKind::O, 3, 0, board);
        assert!(state.apply_action(GameAction::HardDrop));
        assert_eq!(state.board.occupied_count(), 2);
        assert!(state.board.cell_occupied(22, 4));
        assert!(state.board.cell_occupied(22, 5));
    }

    #[test]
    fn test_cycle_kind() {
        let mut state = game_with(PieceKind::S, 5, 9, Board::new());
        state.active.orientation = Orientation::Down;
        assert!(state.apply_action(GameAction::CycleKind));
        assert_eq!(state.active.kind, PieceKind::J);
        assert_eq!(state.active.orientation, Orientation::Down);
        assert_eq!((state.active.x, state.active.y), (0, 0));
    }

    #[test]
    fn test_cycle_kind_ignores_active_kind() {
        // Cursor runs J, L, O, T, S, Z, I, J whatever piece is falling.
        let mut state = game_with(PieceKind::J, 0, 0, Board::new());
        let expected = [
            PieceKind::J,
            PieceKind::L,
            PieceKind::O,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::I,
            PieceKind::J,
        ];
        for kind in expected {
            state.cycle_kind();
            assert_eq!(state.active.kind, kind);
        }

        // A lock dispatches a queue piece but leaves the cursor alone.
        state.hard_drop();
        state.cycle_kind();
        assert_eq!(state.active.kind, PieceKind::L);
    }

    #[test]
    fn test_rotate_action() {
        let mut state = game_with(PieceKind::T, 4, 5, Board::new());
        assert!(state.apply_action(GameAction::RotateRight));
        assert_eq!(state.active.orientation, Orientation::Right);
        assert!(state.apply_action(GameAction::RotateLeft));
        assert!(state.apply_action(GameAction::RotateLeft));
        assert_eq!(state.active.orientation, Orientation::Left);
    }
}
