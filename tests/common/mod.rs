//! Shared test doubles: a scripted terminal and a recording application.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use tui_gridloop::engine::{App, Key, Surface};
use tui_gridloop::term::{Bounds, FrameBuffer, TermError, Terminal};
use tui_gridloop::types::Mode;

/// In-memory terminal driven by a script.
pub struct ScriptedTerminal {
    bounds: Bounds,
    /// `(frames presented, new bounds)`: the terminal reports `bounds` once
    /// that many frames have been presented.
    pub resizes: Vec<(usize, Bounds)>,
    /// One entry per poll; `None` means nothing pending.
    pub events: VecDeque<Option<Event>>,
    pub frames: Vec<FrameBuffer>,
    pub entered: Option<Mode>,
    pub enter_calls: usize,
    pub exit_calls: usize,
    pub poll_calls: usize,
    pub fail_enter: bool,
    pub fail_present_at: Option<usize>,
}

impl ScriptedTerminal {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            resizes: Vec::new(),
            events: VecDeque::new(),
            frames: Vec::new(),
            entered: None,
            enter_calls: 0,
            exit_calls: 0,
            poll_calls: 0,
            fail_enter: false,
            fail_present_at: None,
        }
    }

    pub fn with_keys(mut self, keys: &[Option<char>]) -> Self {
        self.events = keys
            .iter()
            .map(|k| k.map(|c| Event::Key(KeyEvent::from(KeyCode::Char(c)))))
            .collect();
        self
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(Some(event));
    }

    pub fn last_frame(&self) -> &FrameBuffer {
        self.frames.last().expect("no frame presented")
    }
}

impl Terminal for ScriptedTerminal {
    fn enter(&mut self, mode: &Mode) -> Result<(), TermError> {
        self.enter_calls += 1;
        if self.fail_enter {
            return Err(TermError::Init(io::Error::new(io::ErrorKind::Other, "not a tty")));
        }
        self.entered = Some(*mode);
        Ok(())
    }

    fn exit(&mut self) -> Result<(), TermError> {
        self.exit_calls += 1;
        Ok(())
    }

    fn size(&mut self) -> Result<Bounds, TermError> {
        let presented = self.frames.len();
        if let Some(&(_, bounds)) = self.resizes.iter().rev().find(|(at, _)| presented >= *at) {
            self.bounds = bounds;
        }
        Ok(self.bounds)
    }

    fn poll_event(&mut self) -> Result<Option<Event>, TermError> {
        self.poll_calls += 1;
        Ok(self.events.pop_front().flatten())
    }

    fn present(&mut self, frame: &mut FrameBuffer) -> Result<(), TermError> {
        if self.fail_present_at == Some(self.frames.len()) {
            return Err(TermError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "closed")));
        }
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Application that records every hook call.
#[derive(Debug, Default)]
pub struct Probe {
    pub refuse_create: bool,
    /// End the loop on this `on_update` call (1-based).
    pub stop_on_update: Option<usize>,
    pub destroy_status: bool,
    pub created: usize,
    pub destroyed: usize,
    pub dts: Vec<f32>,
    pub keys: Vec<Key>,
    /// Keys delivered before each `on_update`.
    pub keys_per_tick: Vec<usize>,
    pub pending_keys: usize,
    pub sizes_seen: Vec<(u16, u16)>,
}

impl Probe {
    pub fn stopping_after(n: usize) -> Self {
        Self {
            stop_on_update: Some(n),
            destroy_status: true,
            ..Self::default()
        }
    }

    pub fn updates(&self) -> usize {
        self.dts.len()
    }
}

impl App for Probe {
    fn on_create(&mut self, surface: &mut Surface) -> bool {
        self.created += 1;
        self.sizes_seen.push((surface.width(), surface.height()));
        !self.refuse_create
    }

    fn on_update(&mut self, surface: &mut Surface, dt: f32) -> bool {
        self.dts.push(dt);
        self.keys_per_tick.push(self.pending_keys);
        self.pending_keys = 0;
        self.sizes_seen.push((surface.width(), surface.height()));
        surface.put_char(0, 0, '*');
        self.stop_on_update != Some(self.dts.len())
    }

    fn on_keypress(&mut self, key: Key) {
        self.keys.push(key);
        self.pending_keys += 1;
    }

    fn on_destroy(&mut self) -> bool {
        self.destroyed += 1;
        self.destroy_status
    }
}

/// A clock advancing by `step_ms` on every read.
pub fn stepping_clock(step_ms: u64) -> impl FnMut() -> Instant {
    let mut t = Instant::now();
    move || {
        let current = t;
        t += Duration::from_millis(step_ms);
        current
    }
}

pub fn ctrl_c() -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

/// All rows of a frame joined with newlines.
pub fn frame_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_string(y))
        .collect::<Vec<_>>()
        .join("\n")
}
