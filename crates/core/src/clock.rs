//! Frame clock: elapsed seconds between successive ticks.

use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    previous: Instant,
    current: Instant,
}

impl FrameClock {
    pub fn start(now: Instant) -> Self {
        Self {
            previous: now,
            current: now,
        }
    }

    /// Advance to `now` and return the seconds elapsed since the last tick.
    ///
    /// A `now` earlier than the last tick yields `0.0`.
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.previous = self.current;
        self.current = now;
        self.dt()
    }

    pub fn dt(&self) -> f32 {
        self.current
            .saturating_duration_since(self.previous)
            .as_secs_f32()
    }
}
