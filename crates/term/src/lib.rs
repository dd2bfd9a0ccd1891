//! Terminal front end.
//!
//! Draws the game into a plain character framebuffer and flushes it through
//! crossterm. No widget toolkit: blocks are `cell_w` columns wide so the well
//! keeps a roughly square aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use quadris_core as core;
pub use quadris_types as types;

pub use fb::{Cell, FrameBuffer, Rgb, Style};
pub use game_view::{GameView, Layout, Viewport, MAX_CELL_W};
pub use renderer::{encode_frame, TerminalRenderer};
