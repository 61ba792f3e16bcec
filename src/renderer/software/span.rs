//! Per-scanline fill strategies plugged into the triangle walker.
//!
//! The walker owns geometry (which rows, where each row starts and ends);
//! a [`SpanFiller`] owns what ends up in the pixels. Flat colour and Gouraud
//! shading share the same scan conversion this way.

use crate::{
    color::{Color, ColorF},
    renderer::Rgba,
};

use super::{
    clip::{ClipRect, clip_span},
    framebuffer::FrameBuffer,
    line::span_pixels,
    triangle::{Edge, FlatPart},
};

pub trait SpanFiller {
    /// Called before the first row of every flat part that covers at least
    /// one row. A general triangle produces two calls.
    fn begin_part(&mut self, _part: &FlatPart) {}

    /// Fill row `y` between the exact edge positions `x_left` and `x_right`.
    /// Pixels `ceil(x_left) ..= ceil(x_right) - 1` are covered, clamped to
    /// `clip`'s columns. `y` is already inside `clip`.
    fn fill_span(&mut self, fb: &mut FrameBuffer, y: i32, x_left: f64, x_right: f64, clip: &ClipRect);
}

/// Single colour for the whole triangle.
#[derive(Clone, Copy, Debug)]
pub struct SolidFill(pub Rgba);

impl SolidFill {
    pub fn new(c: Color) -> Self {
        Self(c.to_argb())
    }
}

impl SpanFiller for SolidFill {
    #[inline]
    fn fill_span(&mut self, fb: &mut FrameBuffer, y: i32, x_left: f64, x_right: f64, clip: &ClipRect) {
        let Some((x0, x1)) = span_pixels(x_left, x_right) else {
            return;
        };
        if let Some((x0, x1)) = clip_span(x0, x1, clip) {
            fb.hline(x0, x1, y, self.0);
        }
    }
}

/// Colour along one edge as a function of y: `origin + step * (y - origin_y)`.
#[derive(Clone, Copy, Debug, Default)]
struct EdgeShade {
    origin_y: f64,
    origin: ColorF,
    step: ColorF,
}

impl EdgeShade {
    fn new(e: &Edge) -> Self {
        let h = e.height();
        let step = if h > 0.0 {
            (e.bottom.color - e.top.color) * (1.0 / h) as f32
        } else {
            ColorF::ZERO
        };
        Self {
            origin_y: e.top.pos.y,
            origin: e.top.color,
            step,
        }
    }

    #[inline]
    fn at(&self, y: f64) -> ColorF {
        self.origin + self.step * (y - self.origin_y) as f32
    }
}

/// Gouraud shading: vertex colours interpolated down the edges, then across
/// each span.
///
/// Stateful per triangle: [`SpanFiller::begin_part`] re-bases the left and
/// right edge colour and their per-row increments on the current part's
/// vertices. Edge colour at a row depends only on that edge's endpoints, and
/// the split vertex of a general triangle carries the long edge's
/// interpolated colour, so the last row of the upper part and the first row
/// of the lower part agree.
#[derive(Clone, Copy, Debug, Default)]
pub struct GouraudFill {
    left: EdgeShade,
    right: EdgeShade,
}

impl GouraudFill {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpanFiller for GouraudFill {
    fn begin_part(&mut self, part: &FlatPart) {
        self.left = EdgeShade::new(&part.left);
        self.right = EdgeShade::new(&part.right);
    }

    fn fill_span(&mut self, fb: &mut FrameBuffer, y: i32, x_left: f64, x_right: f64, clip: &ClipRect) {
        let Some((x0, x1)) = span_pixels(x_left, x_right) else {
            return;
        };
        let Some((x0, x1)) = clip_span(x0, x1, clip) else {
            return;
        };

        let cl = self.left.at(y as f64);
        let cr = self.right.at(y as f64);
        let width = x_right - x_left;
        let dcdx = if width > 0.0 {
            (cr - cl) * (1.0 / width) as f32
        } else {
            ColorF::ZERO
        };

        // start at the first visible pixel, which may be past the edge
        let mut c = cl + dcdx * (x0 as f64 - x_left) as f32;
        for x in x0..=x1 {
            fb.set_pixel(x, y, c.to_color().to_argb());
            c = c + dcdx;
        }
    }
}
