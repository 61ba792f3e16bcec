//! Rendering abstraction layer.
//!
//! *Callers never touch the pixel buffer directly.* They hand pixel-space
//! points (already projected by their own 3D pipeline) to a type that
//! implements [`Renderer`], or batch them as a list of [`DrawCall`]s.
//!
//! * Every call is independent: no state survives between draws except the
//!   pixels themselves. Later draws overwrite earlier ones.
//! * Degenerate geometry (zero-area triangles, rows that round away) is a
//!   silent no-op, never an error; one bad triangle must not abort a frame.
//! * Only construction can fail, see [`RasterError`].

use crate::{
    color::Color,
    math::{Point2, Point2FD, Point2I, Scalar},
};

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// Things that can go wrong when setting up a render target.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RasterError {
    /// Width or height is zero.
    #[error("frame-buffer size {width}x{height} is empty")]
    ZeroSize { width: usize, height: usize },

    /// Dimensions overflow the pixel index or coordinate range.
    #[error("frame-buffer size {width}x{height} is too large")]
    TooLarge { width: usize, height: usize },

    /// Caller's slice is shorter than `width * height`.
    #[error("pixel buffer holds {got} pixels, {needed} needed")]
    BufferTooSmall { needed: usize, got: usize },

    /// `left > right` or `top > bottom`.
    #[error("ill-formed clip rect ({left}, {top})-({right}, {bottom})")]
    InvalidClipRect {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },

    /// Clip rect does not overlap the frame-buffer at all.
    #[error("clip rect ({left}, {top})-({right}, {bottom}) lies outside the frame-buffer")]
    ClipOutsideBuffer {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },
}

/// One primitive of a frame, in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Pixel { p: Point2I, color: Color },
    Line { p0: Point2I, p1: Point2I, color: Color },
    Outline { pts: [Point2I; 3], color: Color },
    Fill { pts: [Point2FD; 3], color: Color },
    Gouraud { pts: [Point2FD; 3], colors: [Color; 3] },
}

/// A 2D raster target.
///
/// Lines are clipped to the target's clip rectangle before they reach the
/// pixels; triangles are clipped per span. Nothing outside the clip
/// rectangle is ever written.
pub trait Renderer {
    /// Paint every pixel with `c`.
    fn clear(&mut self, c: Color);

    fn draw_pixel(&mut self, p: Point2I, c: Color);

    fn draw_line(&mut self, p0: Point2I, p1: Point2I, c: Color);

    fn draw_triangle_outline(&mut self, p0: Point2I, p1: Point2I, p2: Point2I, c: Color) {
        self.draw_line(p0, p1, c);
        self.draw_line(p1, p2, c);
        self.draw_line(p2, p0, c);
    }

    /// Solid fill. Accepts integer or sub-pixel points.
    fn fill_triangle<T: Scalar>(&mut self, p0: Point2<T>, p1: Point2<T>, p2: Point2<T>, c: Color);

    /// Gouraud fill: `c0..c2` belong to `p0..p2`.
    fn fill_triangle_gouraud<T: Scalar>(
        &mut self,
        p0: Point2<T>,
        p1: Point2<T>,
        p2: Point2<T>,
        c0: Color,
        c1: Color,
        c2: Color,
    );
}

/// Convenience blanket-impl: replay a list of [`DrawCall`]s in order.
pub trait RendererExt: Renderer {
    fn draw_calls(&mut self, calls: &[DrawCall]) {
        for call in calls {
            match *call {
                DrawCall::Pixel { p, color } => self.draw_pixel(p, color),
                DrawCall::Line { p0, p1, color } => self.draw_line(p0, p1, color),
                DrawCall::Outline { pts: [a, b, c], color } => {
                    self.draw_triangle_outline(a, b, c, color)
                }
                DrawCall::Fill { pts: [a, b, c], color } => self.fill_triangle(a, b, c, color),
                DrawCall::Gouraud {
                    pts: [a, b, c],
                    colors: [ca, cb, cc],
                } => self.fill_triangle_gouraud(a, b, c, ca, cb, cc),
            }
        }
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;

pub use software::{
    ClipRect, FrameBuffer, GouraudFill, LineAlgorithm, Outcode, SolidFill, Software, SpanFiller,
};
