//! Projectile under constant acceleration.

use crate::engine::{App, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct Falling {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub ddx: f32,
    pub ddy: f32,
}

impl Default for Falling {
    fn default() -> Self {
        Self::launch(0)
    }
}

impl Falling {
    /// Start at the bottom-left corner of a surface `height` rows tall.
    pub fn launch(height: u16) -> Self {
        Self {
            x: 0.0,
            y: height as f32 - 1.0,
            dx: 8.0,
            dy: -8.0,
            ddx: 0.0,
            ddy: 1.0,
        }
    }

    /// Advance by `dt` seconds. Returns `false` once the object has left the
    /// right or bottom edge of a `width x height` grid.
    pub fn step(&mut self, dt: f32, width: u16, height: u16) -> bool {
        self.x += self.dx * dt;
        self.y += self.dy * dt;
        self.dx += self.ddx * dt;
        self.dy += self.ddy * dt;
        !(self.x >= width as f32 || self.y >= height as f32)
    }
}

impl App for Falling {
    fn on_create(&mut self, surface: &mut Surface) -> bool {
        *self = Self::launch(surface.height());
        true
    }

    fn on_update(&mut self, surface: &mut Surface, dt: f32) -> bool {
        if !self.step(dt, surface.width(), surface.height()) {
            return false;
        }
        surface.put_char_f(self.x, self.y, 'O');
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_launch_position() {
        let f = Falling::launch(10);
        assert_eq!((f.x, f.y), (0.0, 9.0));
        assert_eq!((f.dx, f.dy), (8.0, -8.0));
    }

    #[test]
    fn test_step_follows_kinematics() {
        let mut f = Falling::launch(10);
        let (mut x, mut y, dx, mut dy) = (0.0f32, 9.0f32, 8.0f32, -8.0f32);
        for _ in 0..20 {
            let alive = f.step(0.1, 20, 10);
            x += dx * 0.1;
            y += dy * 0.1;
            dy += 0.1;
            assert!((f.x - x).abs() < EPS);
            assert!((f.y - y).abs() < EPS);
            assert!((f.dx - dx).abs() < EPS);
            assert!((f.dy - dy).abs() < EPS);
            assert_eq!(alive, !(x >= 20.0 || y >= 10.0));
        }
    }

    #[test]
    fn test_stops_at_right_edge() {
        let mut f = Falling::launch(10);
        let mut ticks = 0;
        while f.step(0.1, 20, 10) {
            ticks += 1;
            assert!(ticks < 100);
        }
        // x reaches 20 after 2.5s of travel at 8 cells/s.
        assert!(f.x >= 20.0);
        assert!((24..=25).contains(&ticks));
    }
}
