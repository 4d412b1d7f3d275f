//! Bouncing ball.

use crate::engine::{App, Key, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct Ping {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_dx: f32,
    pub ball_dy: f32,
    quit: bool,
}

impl Default for Ping {
    fn default() -> Self {
        Self {
            ball_x: 5.0,
            ball_y: 5.0,
            ball_dx: 4.0,
            ball_dy: 6.0,
            quit: false,
        }
    }
}

impl Ping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the ball by `dt` seconds inside a `width x height` grid.
    ///
    /// An axis whose new position is past its edge has its velocity reversed;
    /// the position itself is not pulled back.
    pub fn step(&mut self, dt: f32, width: u16, height: u16) {
        self.ball_x += self.ball_dx * dt;
        self.ball_y += self.ball_dy * dt;

        if self.ball_x < 0.0 || self.ball_x >= width as f32 - 1.0 {
            self.ball_dx = -self.ball_dx;
        }
        if self.ball_y < 0.0 || self.ball_y >= height as f32 - 1.0 {
            self.ball_dy = -self.ball_dy;
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

impl App for Ping {
    fn on_create(&mut self, _surface: &mut Surface) -> bool {
        *self = Self::default();
        true
    }

    fn on_update(&mut self, surface: &mut Surface, dt: f32) -> bool {
        if self.quit {
            return false;
        }
        surface.clear_all(' ');
        self.step(dt, surface.width(), surface.height());
        surface.put_char_f(self.ball_x, self.ball_y, 'O');
        true
    }

    fn on_keypress(&mut self, key: Key) {
        match key {
            Key::Char('j') => self.ball_dy = -self.ball_dy,
            Key::Char('q') | Key::Char('Q') => self.quit = true,
            _ => {}
        }
    }
}
