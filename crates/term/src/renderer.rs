//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame and every frame after a size change is a full redraw;
//! otherwise only changed runs of cells are written.

use std::io::{self, Write};

use crossterm::{cursor, style::Print, terminal, QueueableCommand};
use tracing::debug;

use crate::error::{Result, TermError};
use crate::fb::FrameBuffer;
use crate::types::Mode;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    raw_mode: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            raw_mode: false,
        }
    }

    /// Configure the terminal for `mode` and switch to the alternate screen.
    pub fn enter(&mut self, mode: &Mode) -> Result<()> {
        if mode.input.is_unbuffered() {
            terminal::enable_raw_mode().map_err(TermError::Init)?;
            self.raw_mode = true;
        }
        self.buf.clear();
        let entered = encode_enter_into(mode, &mut self.buf)
            .map_err(TermError::Init)
            .and_then(|()| {
                self.flush_buf().map_err(|e| match e {
                    TermError::Io(io) => TermError::Init(io),
                    other => other,
                })
            });
        if let Err(err) = entered {
            if self.raw_mode {
                let _ = terminal::disable_raw_mode();
                self.raw_mode = false;
            }
            return Err(err);
        }
        self.last = None;
        debug!(?mode, "terminal entered");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        encode_exit_into(&mut self.buf)?;
        let flushed = self.flush_buf();
        if self.raw_mode {
            terminal::disable_raw_mode()?;
            self.raw_mode = false;
        }
        self.last = None;
        debug!("terminal restored");
        flushed
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.buf.clear();
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                self.buf.clear();
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_default();
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the terminal setup sequence for `mode` into `out`.
pub fn encode_enter_into(mode: &Mode, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    if mode.cursor_visible {
        out.queue(cursor::Show)?;
    } else {
        out.queue(cursor::Hide)?;
    }
    out.queue(terminal::DisableLineWrap)?;
    Ok(())
}

/// Encode the terminal restore sequence into `out`.
pub fn encode_exit_into(out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            out.queue(Print(fb.get(x, y).unwrap_or(' ')))?;
        }
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            out.queue(Print(next.get(x + dx, y).unwrap_or(' ')))?;
        }
        Ok(())
    })
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> io::Result<()>,
) -> io::Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
