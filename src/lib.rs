//! TUI Gridloop (workspace facade crate).
//!
//! Re-exports the member crates under `tui_gridloop::{types, core, term,
//! input, engine}` and ships the demo applications built on them.

pub use tui_gridloop_core as core;
pub use tui_gridloop_engine as engine;
pub use tui_gridloop_input as input;
pub use tui_gridloop_term as term;
pub use tui_gridloop_types as types;

pub mod demos;
