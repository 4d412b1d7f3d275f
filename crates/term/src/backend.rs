//! Terminal driver seam.
//!
//! The frame loop talks to the terminal only through [`Terminal`], so it can
//! run against [`CrosstermTerminal`] in the binary and a scripted driver in
//! tests.

use std::time::Duration;

use crossterm::event::{self, Event};

use crate::error::Result;
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::surface::Bounds;
use crate::types::{Mode, FALLBACK_BOUNDS};

pub trait Terminal {
    /// Configure the terminal for `mode`. Failure aborts startup.
    fn enter(&mut self, mode: &Mode) -> Result<()>;

    /// Restore the terminal.
    fn exit(&mut self) -> Result<()>;

    /// Current bounds, `(columns, rows)`.
    fn size(&mut self) -> Result<Bounds>;

    /// Take one pending event without blocking.
    fn poll_event(&mut self) -> Result<Option<Event>>;

    /// Flush a full-terminal frame. The buffer's contents are unspecified afterwards.
    fn present(&mut self, frame: &mut FrameBuffer) -> Result<()>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn enter(&mut self, mode: &Mode) -> Result<()> {
        (**self).enter(mode)
    }

    fn exit(&mut self) -> Result<()> {
        (**self).exit()
    }

    fn size(&mut self) -> Result<Bounds> {
        (**self).size()
    }

    fn poll_event(&mut self) -> Result<Option<Event>> {
        (**self).poll_event()
    }

    fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        (**self).present(frame)
    }
}

/// The real terminal, driven through crossterm.
#[derive(Default)]
pub struct CrosstermTerminal {
    renderer: TerminalRenderer,
    bounds: Option<Bounds>,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Terminal for CrosstermTerminal {
    fn enter(&mut self, mode: &Mode) -> Result<()> {
        self.renderer.enter(mode)
    }

    fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn size(&mut self) -> Result<Bounds> {
        let bounds = crossterm::terminal::size().unwrap_or(FALLBACK_BOUNDS);
        if self.bounds != Some(bounds) {
            self.renderer.invalidate();
            self.bounds = Some(bounds);
        }
        Ok(bounds)
    }

    fn poll_event(&mut self) -> Result<Option<Event>> {
        if event::poll(Duration::ZERO)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.renderer.draw_swap(frame)
    }
}
