//! Surface: the bordered character grid the engine renders into.
//!
//! The surface is pure (no I/O). Terminal bounds are passed in by the caller,
//! which keeps sizing, centering and resize synchronization unit-testable.
//!
//! Coordinates given to the drawing entry points are interior coordinates:
//! `(0, 0)` is the first cell inside the border. Writes are offset by the
//! border and are otherwise unchecked; a write that lands outside the
//! bordered grid is dropped, one that lands on the border overwrites it.

use tracing::debug;

use crate::core::{raster, Canvas, Extent};
use crate::fb::FrameBuffer;
use crate::types::{Mode, BORDER};

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Terminal bounds in cells, `(columns, rows)`.
pub type Bounds = (u16, u16);

#[derive(Debug, Clone)]
pub struct Surface {
    width: u16,
    height: u16,
    position: (u16, u16),
    full_screen: bool,
    bounds: Bounds,
    grid: FrameBuffer,
    open: bool,
}

impl Surface {
    /// Record the requested interior size. Nothing is allocated until [`Surface::open`].
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            position: (0, 0),
            full_screen: false,
            bounds: (0, 0),
            grid: FrameBuffer::default(),
            open: false,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Top-left corner of the border, in terminal coordinates.
    pub fn position(&self) -> (u16, u16) {
        self.position
    }

    pub fn full_screen(&self) -> bool {
        self.full_screen
    }

    /// Terminal bounds observed by the last `open` or `resync`.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The bordered grid, `(width + 2) x (height + 2)` cells.
    pub fn grid(&self) -> &FrameBuffer {
        &self.grid
    }

    /// Allocate the bordered grid against the current terminal bounds.
    pub fn open(&mut self, bounds: Bounds, mode: &Mode) {
        self.full_screen = mode.full_screen;
        self.bounds = bounds;
        self.layout();
        self.grid = FrameBuffer::new(self.outer_width(), self.outer_height());
        self.draw_border();
        self.open = true;
        debug!(
            width = self.width,
            height = self.height,
            x = self.position.0,
            y = self.position.1,
            full_screen = self.full_screen,
            "surface opened"
        );
    }

    /// Follow a terminal resize. Returns `false` without touching anything
    /// when `bounds` equals the last observed bounds.
    pub fn resync(&mut self, bounds: Bounds) -> bool {
        if bounds == self.bounds {
            return false;
        }
        let previous = self.bounds;
        self.bounds = bounds;
        self.paint_border([' '; 6]);
        self.layout();

        if self.full_screen {
            let mut grid = FrameBuffer::new(self.outer_width(), self.outer_height());
            grid.blit(&self.grid, 0, 0);
            self.grid = grid;
        }
        self.draw_border();
        debug!(?previous, ?bounds, width = self.width, height = self.height, "surface resynced");
        true
    }

    /// Release the grid. The surface can be opened again afterwards.
    pub fn close(&mut self) {
        self.grid = FrameBuffer::default();
        self.open = false;
    }

    pub fn put_char(&mut self, x: i32, y: i32, ch: char) {
        self.put(x, y, ch);
    }

    /// Write at floating coordinates, truncated toward zero.
    pub fn put_char_f(&mut self, x: f32, y: f32, ch: char) {
        raster::point_f(self, x, y, ch);
    }

    pub fn put_str(&mut self, x: i32, y: i32, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            let Some(cx) = i32::try_from(i).ok().and_then(|i| x.checked_add(i)) else {
                break;
            };
            self.put(cx, y, ch);
        }
    }

    /// Overwrite every interior cell with `ch`.
    pub fn clear_all(&mut self, ch: char) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                self.put(x, y, ch);
            }
        }
    }

    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, ch: char) {
        raster::line(self, x0, y0, x1, y1, ch);
    }

    pub fn line_f(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, ch: char) {
        raster::line_f(self, x0, y0, x1, y1, ch);
    }

    pub fn rect(&mut self, x: i32, y: i32, lx: i32, ly: i32, ch: char) {
        raster::rect(self, x, y, lx, ly, ch);
    }

    pub fn rect_fill(&mut self, x: i32, y: i32, lx: i32, ly: i32, ch: char) {
        raster::rect_fill(self, x, y, lx, ly, ch);
    }

    pub fn circle(&mut self, ox: i32, oy: i32, radius: i32, ch: char) {
        raster::circle(self, ox, oy, radius, ch);
    }

    pub fn circle_fill(&mut self, ox: i32, oy: i32, radius: i32, ch: char) {
        raster::circle_fill(self, ox, oy, radius, ch);
    }

    /// Interior cell at `(x, y)`, if inside the grid.
    pub fn cell(&self, x: i32, y: i32) -> Option<char> {
        let (gx, gy) = grid_coords(x, y)?;
        self.grid.get(gx, gy)
    }

    /// Write the current dimensions over the top border, between the corners.
    pub fn draw_debug_overlay(&mut self) {
        let room = usize::from(self.grid.width().saturating_sub(2 * BORDER));
        let text: String = format!("height:{},width:{}", self.height, self.width)
            .chars()
            .take(room)
            .collect();
        self.grid.put_str(BORDER, 0, &text);
    }

    /// Copy the bordered grid into a full-terminal frame at its position.
    pub fn compose_into(&self, screen: &mut FrameBuffer) {
        if self.open {
            screen.blit(&self.grid, self.position.0, self.position.1);
        }
    }

    fn layout(&mut self) {
        let (bx, by) = self.bounds;
        if self.full_screen {
            self.width = bx.saturating_sub(2 * BORDER);
            self.height = by.saturating_sub(2 * BORDER);
            self.position = (0, 0);
        } else {
            self.position = (
                (bx / 2).saturating_sub(self.width / 2),
                (by / 2).saturating_sub(self.height / 2),
            );
        }
    }

    fn outer_width(&self) -> u16 {
        self.width.saturating_add(2 * BORDER)
    }

    fn outer_height(&self) -> u16 {
        self.height.saturating_add(2 * BORDER)
    }

    fn draw_border(&mut self) {
        self.paint_border([
            HORIZONTAL,
            VERTICAL,
            TOP_LEFT,
            TOP_RIGHT,
            BOTTOM_LEFT,
            BOTTOM_RIGHT,
        ]);
    }

    /// `[horizontal, vertical, top-left, top-right, bottom-left, bottom-right]`
    fn paint_border(&mut self, chars: [char; 6]) {
        let [hz, vt, tl, tr, bl, br] = chars;
        let w = self.grid.width();
        let h = self.grid.height();
        if w == 0 || h == 0 {
            return;
        }
        for x in 1..w.saturating_sub(1) {
            self.grid.set(x, 0, hz);
            self.grid.set(x, h - 1, hz);
        }
        for y in 1..h.saturating_sub(1) {
            self.grid.set(0, y, vt);
            self.grid.set(w - 1, y, vt);
        }
        self.grid.set(0, 0, tl);
        self.grid.set(w - 1, 0, tr);
        self.grid.set(0, h - 1, bl);
        self.grid.set(w - 1, h - 1, br);
    }
}

impl Canvas for Surface {
    fn put(&mut self, x: i32, y: i32, ch: char) {
        if let Some((gx, gy)) = grid_coords(x, y) {
            self.grid.set(gx, gy, ch);
        }
    }

    /// Interior coordinates of the whole bordered grid, border included.
    fn extent(&self) -> Option<Extent> {
        let border = i32::from(BORDER);
        Some(Extent {
            min_x: -border,
            min_y: -border,
            max_x: i32::from(self.grid.width()) - border - 1,
            max_y: i32::from(self.grid.height()) - border - 1,
        })
    }
}

fn grid_coords(x: i32, y: i32) -> Option<(u16, u16)> {
    let gx = u16::try_from(x.checked_add(BORDER as i32)?).ok()?;
    let gy = u16::try_from(y.checked_add(BORDER as i32)?).ok()?;
    Some((gx, gy))
}
