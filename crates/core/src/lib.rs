//! Core engine logic - pure, deterministic, and testable
//!
//! This crate contains the parts of the frame engine that never touch the
//! terminal:
//!
//! - [`raster`]: point, line, rectangle and circle rasterization over a [`Canvas`]
//! - [`clock`]: the per-tick timestep measurement
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use tui_gridloop_core::raster::{self, Canvas};
//!
//! #[derive(Default)]
//! struct Cells(HashSet<(i32, i32)>);
//!
//! impl Canvas for Cells {
//!     fn put(&mut self, x: i32, y: i32, _ch: char) {
//!         self.0.insert((x, y));
//!     }
//! }
//!
//! let mut cells = Cells::default();
//! raster::line(&mut cells, 0, 0, 4, 2, '#');
//! assert_eq!(cells.0.len(), 5);
//! ```

pub mod clock;
pub mod raster;

pub use tui_gridloop_types as types;

pub use clock::FrameClock;
pub use raster::{Canvas, Extent};
