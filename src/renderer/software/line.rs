//! Line rasterization: axis-aligned fast paths, Bresenham, DDA.
//!
//! Nothing here clips; every routine expects endpoints already inside the
//! frame-buffer (see [`super::clip::clip_line`]).

use crate::{
    math::{Point2, Point2I, Scalar, ceil_to_i32},
    renderer::Rgba,
};

use super::framebuffer::FrameBuffer;

/// Algorithm used for segments that are neither horizontal nor vertical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineAlgorithm {
    /// Integer error accumulation. Canonical.
    #[default]
    Bresenham,
    /// Floating-point increment; not pixel-identical to Bresenham.
    Dda,
}

/// Pick the cheapest routine for the segment's geometry.
///
/// `p0 == p1` plots exactly one pixel.
pub fn draw_line(fb: &mut FrameBuffer, p0: Point2I, p1: Point2I, p: Rgba, algo: LineAlgorithm) {
    if p0.x == p1.x {
        draw_vline(fb, p0.x, p0.y, p1.y, p);
    } else if p0.y == p1.y {
        draw_hline(fb, p0.x, p1.x, p0.y, p);
    } else {
        match algo {
            LineAlgorithm::Bresenham => draw_line_bresenham(fb, p0, p1, p),
            LineAlgorithm::Dda => draw_line_dda(fb, p0, p1, p),
        }
    }
}

/// `min(x0, x1) ..= max(x0, x1)` on row `y`.
#[inline]
pub fn draw_hline(fb: &mut FrameBuffer, x0: i32, x1: i32, y: i32, p: Rgba) {
    let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    fb.hline(lo, hi, y, p);
}

/// `min(y0, y1) ..= max(y0, y1)` in column `x`.
#[inline]
pub fn draw_vline(fb: &mut FrameBuffer, x: i32, y0: i32, y1: i32, p: Rgba) {
    let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    for y in lo..=hi {
        fb.set_pixel(x, y, p);
    }
}

/// Pixel columns covered by the half-open span `[x_left, x_right)`:
/// `ceil(x_left) ..= ceil(x_right) - 1`. `None` when no pixel is covered.
///
/// Ends beyond the `i32` range saturate; such spans are off any buffer and
/// the caller's clip drops them.
#[inline]
pub fn span_pixels(x_left: f64, x_right: f64) -> Option<(i32, i32)> {
    let first = ceil_to_i32(x_left);
    let last = ceil_to_i32(x_right).saturating_sub(1);
    (first <= last).then_some((first, last))
}

/// Horizontal segment with sub-pixel endpoints.
///
/// Uses the same coverage rule as triangle spans, so `(0, y) → (31, y)`
/// covers columns `0 ..= 30`. The row is `y` rounded to nearest.
pub fn draw_hline_f<T: Scalar>(fb: &mut FrameBuffer, p0: Point2<T>, p1: Point2<T>, p: Rgba) {
    let (a, b) = (p0.to_f64(), p1.to_f64());
    debug_assert!(a.y == b.y, "draw_hline_f needs equal y");
    let (lo, hi) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
    if let Some((x0, x1)) = span_pixels(lo, hi) {
        fb.hline(x0, x1, a.y.round() as i32, p);
    }
}

/// Vertical segment with sub-pixel endpoints; the column is `x` rounded to
/// nearest and the rows follow [`span_pixels`].
pub fn draw_vline_f<T: Scalar>(fb: &mut FrameBuffer, p0: Point2<T>, p1: Point2<T>, p: Rgba) {
    let (a, b) = (p0.to_f64(), p1.to_f64());
    debug_assert!(a.x == b.x, "draw_vline_f needs equal x");
    let (lo, hi) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
    if let Some((y0, y1)) = span_pixels(lo, hi) {
        draw_vline(fb, a.x.round() as i32, y0, y1, p);
    }
}

/// Integer Bresenham.
///
/// Always walks from the endpoint with the smaller coordinate on the
/// dominant axis, so `a → b` and `b → a` plot the same pixels.
pub fn draw_line_bresenham(fb: &mut FrameBuffer, p0: Point2I, p1: Point2I, p: Rgba) {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();

    if dx > dy {
        // x-major
        let (s, e) = if p0.x <= p1.x { (p0, p1) } else { (p1, p0) };
        let y_inc = if e.y >= s.y { 1 } else { -1 };
        let two_dy = 2 * dy;
        let two_dy_minus_dx = 2 * (dy - dx);
        let mut err = two_dy - dx;
        let (mut x, mut y) = (s.x, s.y);

        fb.set_pixel(x, y, p);
        for _ in 0..dx {
            x += 1;
            if err < 0 {
                err += two_dy;
            } else {
                err += two_dy_minus_dx;
                y += y_inc;
            }
            fb.set_pixel(x, y, p);
        }
    } else {
        // y-major (also covers |dx| == |dy| and the single-pixel case)
        let (s, e) = if p0.y <= p1.y { (p0, p1) } else { (p1, p0) };
        let x_inc = if e.x >= s.x { 1 } else { -1 };
        let two_dx = 2 * dx;
        let two_dx_minus_dy = 2 * (dx - dy);
        let mut err = two_dx - dy;
        let (mut x, mut y) = (s.x, s.y);

        fb.set_pixel(x, y, p);
        for _ in 0..dy {
            y += 1;
            if err < 0 {
                err += two_dx;
            } else {
                err += two_dx_minus_dy;
                x += x_inc;
            }
            fb.set_pixel(x, y, p);
        }
    }
}

/// Digital differential analyser: one step per pixel on the dominant axis,
/// fractional increment on the other, rounded to nearest.
pub fn draw_line_dda(fb: &mut FrameBuffer, p0: Point2I, p1: Point2I, p: Rgba) {
    let d = p1 - p0;
    let steps = d.x.abs().max(d.y.abs());
    if steps == 0 {
        fb.set_pixel(p0.x, p0.y, p);
        return;
    }
    let x_inc = d.x as f64 / steps as f64;
    let y_inc = d.y as f64 / steps as f64;

    let (mut x, mut y) = (p0.x as f64, p0.y as f64);
    fb.set_pixel(p0.x, p0.y, p);
    for _ in 0..steps {
        x += x_inc;
        y += y_inc;
        fb.set_pixel(x.round() as i32, y.round() as i32, p);
    }
}
