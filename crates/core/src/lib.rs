//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else: no terminal,
//! no input devices, no clocks. The host feeds it elapsed time and player
//! commands and reads back the board, the falling piece, the queue and the
//! hold slot for drawing.
//!
//! # Module Structure
//!
//! - [`geometry`]: constant shape masks indexed by kind and orientation, preview tables
//! - [`collision`]: the single placement-legality predicate
//! - [`piece`]: the falling piece and the four-offset rotation kick
//! - [`board`]: 10x23 settled-cell grid, imprinting and row removal
//! - [`rng`]: seeded randomizer that never repeats the previous kind
//! - [`queue`]: fixed-length lookahead queue
//! - [`hold`]: the hold slot, usable once per piece
//! - [`game_state`]: gravity, lock delay, commands and line clears wired together
//!
//! # Game Rules
//!
//! - **Gravity**: one step every 200ms of accumulated time, and one per soft drop
//! - **Lock delay**: three consecutive blocked gravity steps lock the piece
//! - **Rotation**: rotated shape tried in place, one row up, one column right,
//!   one column left
//! - **Hold**: store one piece, swapping with the held one, once per piece
//! - **Randomizer**: uniform draw, redrawn when equal to the previous piece
//!
//! # Example
//!
//! ```
//! use quadris_core::GameState;
//! use quadris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! let first = *game.active();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The piece locked onto the board and the next one was dispatched
//! assert_eq!(game.board().occupied_count(), 4);
//! assert_eq!((game.active().x, game.active().y), (0, 0));
//! assert_ne!(game.active().kind, first.kind);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) once per frame with
//! the elapsed milliseconds; it runs gravity when due and clears filled rows.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod geometry;
pub mod hold;
pub mod piece;
pub mod queue;
pub mod rng;

pub use quadris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{can_place, fits};
pub use game_state::{GameState, Step};
pub use geometry::{bounding_height, bounding_width, preview_cell, shape_mask, ShapeMask};
pub use hold::HoldSlot;
pub use piece::{try_rotate, Tetromino};
pub use queue::PieceQueue;
pub use rng::SimpleRng;
