//! Core types module - shared enumerations and rule constants
//!
//! Everything here is plain data with no dependencies, so it can be shared by
//! the rules engine, the key mapping layer and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 23 (indexed 0-22, top to bottom)
//! - **Spawn position**: (0, 0), the top-left corner of the piece's 4x4 box
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frontend frame interval (~60 FPS) |
//! | `STEP_INTERVAL_MS` | 200 | Real time between automatic gravity steps |
//! | `LOCK_TRY_LIMIT` | 3 | Consecutive failed downward steps before a piece locks |
//!
//! # Examples
//!
//! ```
//! use quadris_types::{GameAction, Orientation, PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(Orientation::Up.rotate_right(), Orientation::Right);
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_COLS, 10);
//! assert_eq!(BOARD_ROWS, 23);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_COLS: usize = 10;

/// Board height in cells (23 rows)
pub const BOARD_ROWS: usize = 23;

/// Frontend frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Real time between automatic gravity steps (200ms)
pub const STEP_INTERVAL_MS: u32 = 200;

/// Consecutive failed downward steps tolerated before the piece locks
pub const LOCK_TRY_LIMIT: u8 = 3;

/// Number of upcoming pieces kept in the lookahead queue
pub const NEXT_QUEUE_LEN: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(BOARD_COLS, 10);
        assert_eq!(BOARD_ROWS, 23);
        assert_eq!(STEP_INTERVAL_MS, 200);
        assert_eq!(LOCK_TRY_LIMIT, 3);
        assert_eq!(NEXT_QUEUE_LEN, 4);
    }

    #[test]
    fn piece_kind_index_matches_all_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn orientation_rotations_are_inverse() {
        for o in Orientation::ALL {
            assert_eq!(o.rotate_right().rotate_left(), o);
            assert_eq!(o.rotate_left().rotate_right(), o);
        }
    }

    #[test]
    fn piece_kind_cycle_wraps() {
        assert_eq!(PieceKind::I.cycled(), PieceKind::J);
        assert_eq!(PieceKind::S.cycled(), PieceKind::Z);
        assert_eq!(PieceKind::Z.cycled(), PieceKind::I);
    }
}

/// The seven tetromino kinds
///
/// The declaration order (I, J, L, O, T, S, Z) is the row order of every
/// per-kind table in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    T,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Row index into per-kind tables
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind at table index `i` (wraps modulo 7)
    pub const fn from_index(i: usize) -> Self {
        Self::ALL[i % 7]
    }

    /// The kind following this one in table order, wrapping Z back to I
    pub const fn cycled(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Upper-case single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// The four rotation states of a piece
///
/// Rotating right walks Up → Right → Down → Left → Up; rotating left walks
/// the same cycle backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Up,
    Right,
    Down,
    Left,
}

impl Orientation {
    /// All orientations in rotate-right order
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Right,
        Orientation::Down,
        Orientation::Left,
    ];

    /// Column index into per-orientation tables
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Successor under the rotate-right command
    ///
    /// # Examples
    ///
    /// ```
    /// use quadris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Up.rotate_right(), Orientation::Right);
    /// assert_eq!(Orientation::Right.rotate_right(), Orientation::Down);
    /// assert_eq!(Orientation::Down.rotate_right(), Orientation::Left);
    /// assert_eq!(Orientation::Left.rotate_right(), Orientation::Up);
    /// ```
    pub const fn rotate_right(self) -> Self {
        match self {
            Orientation::Up => Orientation::Right,
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
        }
    }

    /// Successor under the rotate-left command
    ///
    /// # Examples
    ///
    /// ```
    /// use quadris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Up.rotate_left(), Orientation::Left);
    /// assert_eq!(Orientation::Left.rotate_left(), Orientation::Down);
    /// ```
    pub const fn rotate_left(self) -> Self {
        match self {
            Orientation::Up => Orientation::Left,
            Orientation::Left => Orientation::Down,
            Orientation::Down => Orientation::Right,
            Orientation::Right => Orientation::Up,
        }
    }

    /// Lower-case name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Up => "up",
            Orientation::Right => "right",
            Orientation::Down => "down",
            Orientation::Left => "left",
        }
    }
}

/// Player commands, one per recognised key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Run one gravity step immediately
    SoftDrop,
    /// Drop piece to the lowest legal row and lock it
    HardDrop,
    /// Rotate piece one step right
    RotateRight,
    /// Rotate piece one step left
    RotateLeft,
    /// Hold current piece (once per piece)
    Hold,
    /// Toggle pause state
    Pause,
    /// Debug: replace the active kind with the next kind in table order
    CycleKind,
}

impl GameAction {
    /// camelCase name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateRight => "rotateRight",
            GameAction::RotateLeft => "rotateLeft",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::CycleKind => "cycleKind",
        }
    }
}
