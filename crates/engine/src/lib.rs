//! Frame engine.
//!
//! Applications implement [`App`] and hand themselves to [`Engine::start`]
//! together with a [`ModeFlags`] set. The engine configures the terminal,
//! opens the [`Surface`], and calls the hooks until one of them stops the run.
//!
//! ```no_run
//! use tui_gridloop_engine::{App, Engine, ModeFlags, Surface};
//! use tui_gridloop_engine::term::CrosstermTerminal;
//!
//! struct Dot {
//!     x: f32,
//! }
//!
//! impl App for Dot {
//!     fn on_create(&mut self, _surface: &mut Surface) -> bool {
//!         true
//!     }
//!
//!     fn on_update(&mut self, surface: &mut Surface, dt: f32) -> bool {
//!         self.x += 4.0 * dt;
//!         surface.put_char_f(self.x, 0.0, 'o');
//!         self.x < surface.width() as f32
//!     }
//! }
//!
//! let mut engine = Engine::new(CrosstermTerminal::new());
//! engine.create_window(20, 10);
//! engine.start(&mut Dot { x: 0.0 }, ModeFlags::CBREAK | ModeFlags::NOCURSOR)?;
//! # Ok::<(), tui_gridloop_engine::EngineError>(())
//! ```

pub mod app;
pub mod engine;
pub mod error;

pub use tui_gridloop_core as core;
pub use tui_gridloop_input as input;
pub use tui_gridloop_term as term;
pub use tui_gridloop_types as types;

pub use app::App;
pub use engine::{Engine, Phase, RunReport};
pub use error::EngineError;
pub use term::Surface;
pub use types::{Key, Mode, ModeFlags};
