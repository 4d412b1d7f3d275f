//! Engine: owns the terminal and the surface and drives the tick loop.
//!
//! A run moves through [`Phase`]s in order:
//!
//! ```text
//! Unopened -> Created -> Running -> Destroying -> Closed
//!     |           |                     ^
//!     |           +---------------------+   on_create returned false
//!     +--> Closed                           terminal setup failed
//! ```
//!
//! Each `Running` tick: measure `dt`, resynchronize the surface (if
//! `RESIZE`), poll one key (if `POLL_KEYS`), call `on_update`, then flush.
//! `on_destroy` and terminal restore run exactly once whenever `Created` was
//! reached.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::app::App;
use crate::core::FrameClock;
use crate::error::EngineError;
use crate::input::{InputPoller, Poll};
use crate::term::{FrameBuffer, Surface, Terminal};
use crate::types::{InputMode, Key, Mode, ModeFlags, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unopened,
    Created,
    Running,
    Destroying,
    Closed,
}

/// What happened during one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunReport {
    /// Number of `on_update` calls.
    pub ticks: u64,
    /// Number of `on_keypress` calls.
    pub keys: u64,
    /// Whether `on_create` accepted startup.
    pub created: bool,
    /// Whether the loop ended on a Ctrl-C under cbreak input.
    pub interrupted: bool,
    /// Value returned by `on_destroy`.
    pub destroy_status: bool,
}

pub struct Engine<T: Terminal> {
    terminal: T,
    surface: Surface,
    screen: FrameBuffer,
    phase: Phase,
    last_key: Option<Key>,
}

impl<T: Terminal> Engine<T> {
    pub fn new(terminal: T) -> Self {
        Self {
            terminal,
            surface: Surface::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            screen: FrameBuffer::default(),
            phase: Phase::Unopened,
            last_key: None,
        }
    }

    /// Request the interior size of the surface. Ignored under `FULLSCREEN`.
    pub fn create_window(&mut self, width: u16, height: u16) {
        self.surface = Surface::new(width, height);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Run `app` until a hook stops it, timing ticks with the system clock.
    pub fn start<A: App + ?Sized>(
        &mut self,
        app: &mut A,
        flags: ModeFlags,
    ) -> Result<RunReport, EngineError> {
        self.start_with_clock(app, flags, Instant::now)
    }

    /// Like [`Engine::start`], reading time from `now` once per tick.
    pub fn start_with_clock<A: App + ?Sized>(
        &mut self,
        app: &mut A,
        flags: ModeFlags,
        mut now: impl FnMut() -> Instant,
    ) -> Result<RunReport, EngineError> {
        for (overridden, winner) in Mode::conflicts(flags) {
            warn!(%overridden, %winner, "conflicting mode flags, later one wins");
        }
        let mode = Mode::from_flags(flags);
        self.last_key = None;
        self.set_phase(Phase::Unopened);

        if let Err(err) = self.terminal.enter(&mode) {
            self.set_phase(Phase::Closed);
            return Err(EngineError::Startup(err));
        }
        let bounds = match self.terminal.size() {
            Ok(bounds) => bounds,
            Err(err) => {
                let _ = self.terminal.exit();
                self.set_phase(Phase::Closed);
                return Err(EngineError::Startup(err));
            }
        };
        self.surface.open(bounds, &mode);
        self.set_phase(Phase::Created);

        let mut report = RunReport {
            created: app.on_create(&mut self.surface),
            ..RunReport::default()
        };

        let result = if report.created {
            self.set_phase(Phase::Running);
            self.run_ticks(app, &mode, &mut now, &mut report)
        } else {
            info!("on_create declined, skipping tick loop");
            Ok(())
        };

        self.set_phase(Phase::Destroying);
        report.destroy_status = app.on_destroy();
        self.surface.close();
        let restored = self.terminal.exit();
        self.set_phase(Phase::Closed);
        info!(
            ticks = report.ticks,
            destroy_status = report.destroy_status,
            "run finished"
        );

        result?;
        restored?;
        Ok(report)
    }

    fn run_ticks<A: App + ?Sized>(
        &mut self,
        app: &mut A,
        mode: &Mode,
        now: &mut impl FnMut() -> Instant,
        report: &mut RunReport,
    ) -> Result<(), EngineError> {
        let poller = InputPoller::new(mode);
        // Cbreak input still honours Ctrl-C when keys are not delivered.
        let poll_input = mode.poll_keys || mode.input == InputMode::Cbreak;
        let mut clock = FrameClock::start(now());

        self.flush(mode)?;

        loop {
            let dt = clock.tick(now());

            if mode.auto_resize {
                let bounds = self.terminal.size()?;
                if self.surface.resync(bounds) {
                    info!(?bounds, width = self.surface.width(), height = self.surface.height(), "terminal resized");
                }
            }

            if poll_input {
                match poller.poll(&mut self.terminal)? {
                    Poll::Key(key) if mode.poll_keys => {
                        self.last_key = Some(key);
                        report.keys += 1;
                        app.on_keypress(key);
                    }
                    Poll::Interrupt => {
                        warn!("interrupted, shutting down");
                        report.interrupted = true;
                        return Ok(());
                    }
                    _ => {}
                }
            }

            report.ticks += 1;
            if !app.on_update(&mut self.surface, dt) {
                debug!(ticks = report.ticks, "on_update ended the loop");
                return Ok(());
            }

            self.flush(mode)?;
        }
    }

    /// Compose the surface onto a terminal-sized frame and present it.
    fn flush(&mut self, mode: &Mode) -> Result<(), EngineError> {
        if mode.debug_overlay {
            self.surface.draw_debug_overlay();
        }

        let (w, h) = self.terminal.size()?;
        self.screen.resize(w, h);
        self.screen.clear(' ');
        if mode.echo && mode.input.is_unbuffered() {
            if let Some(key) = self.last_key {
                self.screen.put_str(0, 0, &format!("Key pressed: {key}"));
            }
        }
        self.surface.compose_into(&mut self.screen);
        self.terminal.present(&mut self.screen)?;
        Ok(())
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!(from = ?self.phase, to = ?phase, "phase");
        }
        self.phase = phase;
    }
}
