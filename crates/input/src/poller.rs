//! Non-blocking, one-event-per-tick input polling.

use crossterm::event::Event;
use tracing::trace;

use crate::map::{decode_key, is_interrupt};
use crate::term::{TermError, Terminal};
use crate::types::{InputMode, Key, Mode};

/// Outcome of one poll attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// Nothing pending, or an event that is not a key press.
    Idle,
    Key(Key),
    /// Ctrl-C under cbreak input.
    Interrupt,
}

#[derive(Debug, Clone, Copy)]
pub struct InputPoller {
    input: InputMode,
    extended_keys: bool,
}

impl InputPoller {
    pub fn new(mode: &Mode) -> Self {
        Self {
            input: mode.input,
            extended_keys: mode.extended_keys,
        }
    }

    /// Make exactly one non-blocking read attempt.
    pub fn poll<T: Terminal + ?Sized>(&self, term: &mut T) -> Result<Poll, TermError> {
        let Some(event) = term.poll_event()? else {
            return Ok(Poll::Idle);
        };
        Ok(self.classify(event))
    }

    pub fn classify(&self, event: Event) -> Poll {
        match event {
            Event::Key(key) => {
                if self.input == InputMode::Cbreak && is_interrupt(key) {
                    return Poll::Interrupt;
                }
                match decode_key(key, self.extended_keys) {
                    Some(k) => Poll::Key(k),
                    None => Poll::Idle,
                }
            }
            other => {
                trace!(?other, "ignored input event");
                Poll::Idle
            }
        }
    }
}
