//! Terminal input module (engine-facing).
//!
//! Maps crossterm events into [`crate::types::Key`] values and polls the
//! terminal without blocking, at most one event per call.

pub mod map;
pub mod poller;

pub use tui_gridloop_term as term;
pub use tui_gridloop_types as types;

pub use map::{decode_key, is_interrupt};
pub use poller::{InputPoller, Poll};
