//! Terminal surface module.
//!
//! This is a small, game-oriented rendering layer for terminal applications.
//! It avoids widget/layout toolkits and instead renders into a simple
//! framebuffer that is flushed to the terminal as a diff.
//!
//! - [`Surface`]: the bordered grid applications draw into
//! - [`FrameBuffer`]: plain character cells
//! - [`TerminalRenderer`]: full and diff flushing through crossterm
//! - [`Terminal`]: the driver seam used by the frame loop

pub mod backend;
pub mod error;
pub mod fb;
pub mod renderer;
pub mod surface;

pub use tui_gridloop_core as core;
pub use tui_gridloop_types as types;

pub use backend::{CrosstermTerminal, Terminal};
pub use error::{Result, TermError};
pub use fb::FrameBuffer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::{Bounds, Surface};
