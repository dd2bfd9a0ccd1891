//! Quadris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benchmarks can all write `quadris::core::...`.

pub use quadris_core as core;
pub use quadris_input as input;
pub use quadris_term as term;
pub use quadris_types as types;
