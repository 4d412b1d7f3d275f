//! Framebuffer of character cells.

use crate::core::{Canvas, Extent};

/// 2D framebuffer of character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![' '; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible. Cell contents
    /// are not kept in place; callers redraw after a resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, ' ');
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    pub fn clear(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, ch);
            cx += 1;
        }
    }

    /// Copy `src` so that its top-left cell lands on `(x, y)`.
    ///
    /// Cells falling outside `self` are dropped.
    pub fn blit(&mut self, src: &FrameBuffer, x: u16, y: u16) {
        for sy in 0..src.height {
            let Some(dy) = y.checked_add(sy) else { break };
            if dy >= self.height {
                break;
            }
            for sx in 0..src.width {
                let Some(dx) = x.checked_add(sx) else { break };
                if dx >= self.width {
                    break;
                }
                if let Some(ch) = src.get(sx, sy) {
                    self.set(dx, dy, ch);
                }
            }
        }
    }

    /// One row as a string, for inspection.
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width).filter_map(|x| self.get(x, y)).collect()
    }
}

impl Canvas for FrameBuffer {
    fn put(&mut self, x: i32, y: i32, ch: char) {
        if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
            self.set(x, y, ch);
        }
    }

    fn extent(&self) -> Option<Extent> {
        Some(Extent::of_size(self.width, self.height))
    }
}
