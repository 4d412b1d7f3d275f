//! Raster module - geometry to grid cell conversion
//!
//! Every routine here is stateless and writes through a [`Canvas`]. Shapes are
//! computed in 64-bit arithmetic, so any `i32` input is accepted. Cells that
//! fall outside the canvas [`Extent`] (or outside `i32`) are skipped. Lines and
//! filled rectangles only iterate over the extent; circles are skipped when
//! their bounding box misses it, but otherwise walk the full radius.
//!
//! - [`line`]: one cell per step along the major axis, identical cell set in both directions
//! - [`rect`] / [`rect_fill`]: axis-aligned rectangle spanning `(x, y)` to `(x+lx, y+ly)`
//! - [`circle`] / [`circle_fill`]: midpoint circle with eight-way symmetry

use std::ops::RangeInclusive;

/// Inclusive cell range a canvas can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Extent {
    /// Cells `0..width` by `0..height`.
    pub fn of_size(width: u16, height: u16) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: i32::from(width) - 1,
            max_y: i32::from(height) - 1,
        }
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        (i64::from(self.min_x)..=i64::from(self.max_x)).contains(&x)
            && (i64::from(self.min_y)..=i64::from(self.max_y)).contains(&y)
    }
}

/// Anything that accepts single-cell writes in grid coordinates.
pub trait Canvas {
    fn put(&mut self, x: i32, y: i32, ch: char);

    /// Cells outside this range are never written. `None` means unbounded.
    fn extent(&self) -> Option<Extent> {
        None
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn put(&mut self, x: i32, y: i32, ch: char) {
        (**self).put(x, y, ch);
    }

    fn extent(&self) -> Option<Extent> {
        (**self).extent()
    }
}

/// Write a single cell.
#[inline]
pub fn point<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, ch: char) {
    canvas.put(x, y, ch);
}

/// Write a single cell addressed in floating coordinates, truncated toward zero.
#[inline]
pub fn point_f<C: Canvas + ?Sized>(canvas: &mut C, x: f32, y: f32, ch: char) {
    canvas.put(x as i32, y as i32, ch);
}

/// Draw a line segment.
///
/// Steps one cell at a time along the major axis and rounds the minor axis
/// exactly (ties round up), giving Bresenham's cells. Endpoints are ordered
/// before stepping, so `line(a, b)` and `line(b, a)` write the same cells.
/// Each cell is written once; `a == b` writes one cell.
pub fn line<C: Canvas + ?Sized>(canvas: &mut C, x0: i32, y0: i32, x1: i32, y1: i32, ch: char) {
    line_wide(canvas, x0.into(), y0.into(), x1.into(), y1.into(), ch);
}

/// Draw a line between floating endpoints, truncated toward zero.
pub fn line_f<C: Canvas + ?Sized>(canvas: &mut C, x0: f32, y0: f32, x1: f32, y1: f32, ch: char) {
    line(canvas, x0 as i32, y0 as i32, x1 as i32, y1 as i32, ch);
}

/// Outline of the rectangle with corners `(x, y)` and `(x+lx, y+ly)`.
///
/// A zero length on either axis collapses to a single line.
pub fn rect<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, lx: i32, ly: i32, ch: char) {
    let (x0, y0) = (i64::from(x), i64::from(y));
    let (x1, y1) = (x0 + i64::from(lx), y0 + i64::from(ly));
    if lx == 0 || ly == 0 {
        line_wide(canvas, x0, y0, x1, y1, ch);
        return;
    }
    line_wide(canvas, x0, y0, x1, y0, ch);
    line_wide(canvas, x1, y0, x1, y1, ch);
    line_wide(canvas, x1, y1, x0, y1, ch);
    line_wide(canvas, x0, y1, x0, y0, ch);
}

/// Filled rectangle, border cells included.
pub fn rect_fill<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, lx: i32, ly: i32, ch: char) {
    let clip = canvas.extent();
    let (left, right) = ordered(x.into(), i64::from(x) + i64::from(lx));
    let (top, bottom) = ordered(y.into(), i64::from(y) + i64::from(ly));
    for cy in clamp(top, bottom, clip.map(|e| (e.min_y, e.max_y))) {
        for cx in clamp(left, right, clip.map(|e| (e.min_x, e.max_x))) {
            emit(canvas, clip, cx, cy, ch);
        }
    }
}

/// Circle outline around `(ox, oy)`. A negative radius draws nothing.
pub fn circle<C: Canvas + ?Sized>(canvas: &mut C, ox: i32, oy: i32, radius: i32, ch: char) {
    let clip = canvas.extent();
    let (ox, oy) = (i64::from(ox), i64::from(oy));
    if !circle_visible(clip, ox, oy, radius.into()) {
        return;
    }
    midpoint_octant(radius.into(), |x, y| {
        for (cx, cy) in [
            (ox + x, oy + y),
            (ox - x, oy + y),
            (ox + x, oy - y),
            (ox - x, oy - y),
            (ox + y, oy + x),
            (ox - y, oy + x),
            (ox + y, oy - x),
            (ox - y, oy - x),
        ] {
            emit(canvas, clip, cx, cy, ch);
        }
    });
}

/// Filled circle: horizontal spans between the outline's boundary points.
pub fn circle_fill<C: Canvas + ?Sized>(canvas: &mut C, ox: i32, oy: i32, radius: i32, ch: char) {
    let clip = canvas.extent();
    let (ox, oy) = (i64::from(ox), i64::from(oy));
    if !circle_visible(clip, ox, oy, radius.into()) {
        return;
    }
    let mut span = |left: i64, right: i64, row: i64| {
        for cx in clamp(left, right, clip.map(|e| (e.min_x, e.max_x))) {
            emit(canvas, clip, cx, row, ch);
        }
    };
    midpoint_octant(radius.into(), |x, y| {
        span(ox - x, ox + x, oy + y);
        span(ox - x, ox + x, oy - y);
        span(ox - y, ox + y, oy + x);
        span(ox - y, ox + y, oy - x);
    });
}

fn line_wide<C: Canvas + ?Sized>(canvas: &mut C, x0: i64, y0: i64, x1: i64, y1: i64, ch: char) {
    let ((x0, y0), (x1, y1)) = if (x0, y0) <= (x1, y1) {
        ((x0, y0), (x1, y1))
    } else {
        ((x1, y1), (x0, y0))
    };
    let clip = canvas.extent();
    let (dx, dy) = (x1 - x0, y1 - y0);
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        emit(canvas, clip, x0, y0, ch);
        return;
    }

    // dx >= 0 after ordering; a y-major line may run either way.
    let x_major = dx >= dy.abs();
    let (major0, major_step, minor0, minor_delta) = if x_major {
        (x0, 1, y0, dy)
    } else {
        (y0, dy.signum(), x0, dx)
    };

    let major_bounds = match clip {
        Some(e) if x_major => (i64::from(e.min_x), i64::from(e.max_x)),
        Some(e) => (i64::from(e.min_y), i64::from(e.max_y)),
        None => (i64::from(i32::MIN), i64::from(i32::MAX)),
    };
    let (lo, hi) = if major_step > 0 {
        (major_bounds.0 - major0, major_bounds.1 - major0)
    } else {
        (major0 - major_bounds.1, major0 - major_bounds.0)
    };

    for i in lo.max(0)..=hi.min(steps) {
        let major = major0 + major_step * i;
        let minor = minor0 + round_div(i128::from(i) * i128::from(minor_delta), steps);
        let (x, y) = if x_major { (major, minor) } else { (minor, major) };
        emit(canvas, clip, x, y, ch);
    }
}

/// `num / den` rounded half up, for `den > 0`.
fn round_div(num: i128, den: i64) -> i64 {
    let den = i128::from(den);
    // |num / den| never exceeds the minor delta, which fits in i64.
    (2 * num + den).div_euclid(2 * den) as i64
}

/// Walk the first octant of a midpoint circle, from `(r, 0)` until `x < y`.
fn midpoint_octant(radius: i64, mut f: impl FnMut(i64, i64)) {
    if radius < 0 {
        return;
    }
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        f(x, y);
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

fn circle_visible(clip: Option<Extent>, ox: i64, oy: i64, radius: i64) -> bool {
    match clip {
        Some(e) => {
            ox + radius >= i64::from(e.min_x)
                && ox - radius <= i64::from(e.max_x)
                && oy + radius >= i64::from(e.min_y)
                && oy - radius <= i64::from(e.max_y)
        }
        None => true,
    }
}

#[inline]
fn emit<C: Canvas + ?Sized>(canvas: &mut C, clip: Option<Extent>, x: i64, y: i64, ch: char) {
    if clip.is_some_and(|e| !e.contains(x, y)) {
        return;
    }
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        canvas.put(x, y, ch);
    }
}

/// `lo..=hi` narrowed to `bounds` (or to `i32` when unbounded).
fn clamp(lo: i64, hi: i64, bounds: Option<(i32, i32)>) -> RangeInclusive<i64> {
    let (min, max) = bounds.unwrap_or((i32::MIN, i32::MAX));
    lo.max(min.into())..=hi.min(max.into())
}

#[inline]
fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct Recorder {
        cells: BTreeSet<(i32, i32)>,
        writes: usize,
    }

    impl Canvas for Recorder {
        fn put(&mut self, x: i32, y: i32, _ch: char) {
            self.cells.insert((x, y));
            self.writes += 1;
        }
    }

    /// Recorder that only accepts cells inside `extent`.
    struct Window {
        inner: Recorder,
        extent: Extent,
    }

    impl Canvas for Window {
        fn put(&mut self, x: i32, y: i32, ch: char) {
            assert!(self.extent.contains(x.into(), y.into()), "write outside extent: ({x}, {y})");
            self.inner.put(x, y, ch);
        }

        fn extent(&self) -> Option<Extent> {
            Some(self.extent)
        }
    }

    fn window(f: impl FnOnce(&mut Window)) -> Recorder {
        let mut w = Window {
            inner: Recorder::default(),
            extent: Extent::of_size(10, 6),
        };
        f(&mut w);
        w.inner
    }

    fn record(f: impl FnOnce(&mut Recorder)) -> Recorder {
        let mut r = Recorder::default();
        f(&mut r);
        r
    }

    #[test]
    fn test_line_single_point() {
        let r = record(|c| line(c, 3, 4, 3, 4, '#'));
        assert_eq!(r.writes, 1);
        assert!(r.cells.contains(&(3, 4)));
    }

    #[test]
    fn test_line_horizontal_and_vertical() {
        let h = record(|c| line(c, 0, 2, 4, 2, '#'));
        assert_eq!(h.cells, (0..=4).map(|x| (x, 2)).collect());

        let v = record(|c| line(c, 1, 5, 1, 1, '#'));
        assert_eq!(v.cells, (1..=5).map(|y| (1, y)).collect());
    }

    #[test]
    fn test_line_diagonal() {
        let r = record(|c| line(c, 0, 0, 3, 3, '#'));
        assert_eq!(r.cells, (0..=3).map(|i| (i, i)).collect());
        assert_eq!(r.writes, 4);
    }

    #[test]
    fn test_line_writes_each_cell_once() {
        let r = record(|c| line(c, -2, 7, 9, -3, '#'));
        assert_eq!(r.writes, r.cells.len());
        // Steep/shallow: one cell per step along the major axis.
        assert_eq!(r.writes, 12);
    }

    #[test]
    fn test_line_reversed_touches_same_cells() {
        let a = record(|c| line(c, 0, 0, 7, 3, '#'));
        let b = record(|c| line(c, 7, 3, 0, 0, '#'));
        assert_eq!(a.cells, b.cells);
    }

    #[test]
    fn test_line_f_truncates_toward_zero() {
        let r = record(|c| line_f(c, 1.9, 0.2, 1.1, 2.99, '#'));
        assert_eq!(r.cells, [(1, 0), (1, 1), (1, 2)].into_iter().collect());

        let neg = record(|c| point_f(c, -0.7, 3.7, '#'));
        assert!(neg.cells.contains(&(0, 3)));
    }

    #[test]
    fn test_rect_outline() {
        let r = record(|c| rect(c, 1, 1, 3, 2, '#'));
        let expected: BTreeSet<_> = [
            (1, 1),
            (2, 1),
            (3, 1),
            (4, 1),
            (1, 2),
            (4, 2),
            (1, 3),
            (2, 3),
            (3, 3),
            (4, 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(r.cells, expected);
    }

    #[test]
    fn test_rect_degenerate_is_a_line() {
        let r = record(|c| rect(c, 2, 2, 0, 4, '#'));
        let l = record(|c| line(c, 2, 2, 2, 6, '#'));
        assert_eq!(r.cells, l.cells);

        let dot = record(|c| rect(c, 2, 2, 0, 0, '#'));
        assert_eq!(dot.cells.len(), 1);
    }

    #[test]
    fn test_rect_fill_includes_border() {
        let r = record(|c| rect_fill(c, 0, 0, 2, 1, '#'));
        assert_eq!(r.cells.len(), 6);
        let outline = record(|c| rect(c, 0, 0, 2, 1, '#'));
        assert!(outline.cells.is_subset(&r.cells));
    }

    #[test]
    fn test_rect_negative_lengths() {
        let a = record(|c| rect_fill(c, 4, 4, -2, -1, '#'));
        let b = record(|c| rect_fill(c, 2, 3, 2, 1, '#'));
        assert_eq!(a.cells, b.cells);
    }

    #[test]
    fn test_circle_zero_radius() {
        let r = record(|c| circle(c, 5, 5, 0, '#'));
        assert_eq!(r.cells, [(5, 5)].into_iter().collect());
        let f = record(|c| circle_fill(c, 5, 5, 0, '#'));
        assert_eq!(f.cells, [(5, 5)].into_iter().collect());
    }

    #[test]
    fn test_circle_radius_one() {
        let r = record(|c| circle(c, 0, 0, 1, '#'));
        let expected: BTreeSet<_> = [(1, 0), (-1, 0), (0, 1), (0, -1)].into_iter().collect();
        assert!(expected.is_subset(&r.cells));
        assert!(!r.cells.contains(&(0, 0)));
    }

    #[test]
    fn test_circle_is_symmetric() {
        let r = record(|c| circle(c, 0, 0, 6, '#'));
        for &(x, y) in &r.cells {
            assert!(r.cells.contains(&(-x, y)));
            assert!(r.cells.contains(&(x, -y)));
            assert!(r.cells.contains(&(y, x)));
        }
        assert!(r.cells.contains(&(6, 0)));
        assert!(r.cells.contains(&(0, -6)));
    }

    #[test]
    fn test_circle_fill_contains_outline() {
        for radius in 0..12 {
            let outline = record(|c| circle(c, 3, -2, radius, '#'));
            let fill = record(|c| circle_fill(c, 3, -2, radius, '#'));
            assert!(outline.cells.is_subset(&fill.cells), "radius {radius}");
            assert!(fill.cells.contains(&(3, -2)));
        }
    }

    #[test]
    fn test_circle_negative_radius_draws_nothing() {
        assert!(record(|c| circle(c, 0, 0, -1, '#')).cells.is_empty());
        assert!(record(|c| circle_fill(c, 0, 0, -3, '#')).cells.is_empty());
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let max = i32::MAX;
        let min = i32::MIN;
        window(|c| rect(c, max, 0, 1, 1, '#'));
        window(|c| rect(c, min, min, -1, -1, '#'));
        window(|c| rect_fill(c, max, max, max, max, '#'));
        window(|c| circle(c, max, 0, 1, '#'));
        window(|c| circle_fill(c, min, 0, 3, '#'));
        window(|c| line(c, max, max, min, min, '#'));

        let r = record(|c| rect(c, max, 0, 1, 1, '#'));
        assert!(r.cells.iter().all(|&(x, _)| x == max));
    }

    #[test]
    fn test_long_line_is_clipped_to_extent() {
        let r = window(|c| line(c, -2_000_000_000, 2, 2_000_000_000, 2, '#'));
        assert_eq!(r.cells, (0..10).map(|x| (x, 2)).collect());

        let steep = window(|c| line(c, 3, 2_000_000_000, 3, -2_000_000_000, '#'));
        assert_eq!(steep.cells, (0..6).map(|y| (3, y)).collect());
    }

    #[test]
    fn test_clipped_line_matches_unclipped_cells() {
        let full = record(|c| line(c, -7, -4, 15, 9, '#'));
        let clipped = window(|c| line(c, -7, -4, 15, 9, '#'));
        let expected: BTreeSet<_> = full
            .cells
            .into_iter()
            .filter(|&(x, y)| Extent::of_size(10, 6).contains(x.into(), y.into()))
            .collect();
        assert_eq!(clipped.cells, expected);
    }

    #[test]
    fn test_huge_circle_fill_is_clipped() {
        let r = window(|c| circle_fill(c, 5, 3, 1_000_000, '#'));
        assert_eq!(r.cells.len(), 60);
    }
}
