//! Terminal input module.
//!
//! Maps `crossterm` key-press events into [`crate::types::GameAction`].
//! Every recognised press produces exactly one command; held keys are not
//! auto-repeated here.

pub mod map;

pub use quadris_types as types;

pub use map::{handle_key_event, should_quit};
