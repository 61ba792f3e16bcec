//! ---------------------------------------------------------------------------
//! Scanline software (CPU) rasterizer
//!
//! * Fills a caller-owned `&mut [u32]` frame-buffer in **0xAARRGGBB** format.
//! * Lines: Cohen–Sutherland clip, then horizontal / vertical fast path or
//!   Bresenham (DDA selectable).
//! * Triangles: sort by y, split into flat parts, walk rows, delegate each
//!   span to a [`SpanFiller`] (solid or Gouraud).
//!
//! No allocation per draw call, no internal locking: one writer per frame.
//! ---------------------------------------------------------------------------

pub mod clip;
pub mod framebuffer;
pub mod line;
pub mod span;
pub mod triangle;

pub use clip::{ClipRect, Outcode, clip_line};
pub use framebuffer::FrameBuffer;
pub use line::LineAlgorithm;
pub use span::{GouraudFill, SolidFill, SpanFiller};
pub use triangle::Vertex;

use crate::{
    color::{Color, ColorF},
    math::{Point2, Point2I, Scalar},
    renderer::{RasterError, Renderer, Rgba},
};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

/// Software rasterizer bound to one frame-buffer for its lifetime.
#[derive(Debug)]
pub struct Software<'a> {
    fb: FrameBuffer<'a>,
    clip: ClipRect,
    line_algo: LineAlgorithm,
}

impl<'a> Software<'a> {
    /// Borrow `pixels` as a `width × height` target; clip = whole buffer.
    pub fn new(pixels: &'a mut [Rgba], width: usize, height: usize) -> Result<Self, RasterError> {
        let fb = FrameBuffer::new(pixels, width, height)?;
        let clip = fb.bounds();
        log::debug!("software rasterizer on {width}x{height} buffer");
        Ok(Self {
            fb,
            clip,
            line_algo: LineAlgorithm::default(),
        })
    }

    /// Restrict drawing to `rect` (intersected with the buffer bounds).
    pub fn with_clip(mut self, rect: ClipRect) -> Result<Self, RasterError> {
        self.clip = rect
            .intersect(&self.fb.bounds())
            .ok_or(RasterError::ClipOutsideBuffer {
                left: rect.left,
                top: rect.top,
                right: rect.right,
                bottom: rect.bottom,
            })?;
        Ok(self)
    }

    pub fn with_line_algorithm(mut self, algo: LineAlgorithm) -> Self {
        self.line_algo = algo;
        self
    }

    pub fn set_line_algorithm(&mut self, algo: LineAlgorithm) {
        self.line_algo = algo;
    }

    #[inline]
    pub fn line_algorithm(&self) -> LineAlgorithm {
        self.line_algo
    }

    #[inline]
    pub fn clip(&self) -> ClipRect {
        self.clip
    }

    #[inline]
    pub fn frame_buffer(&self) -> &FrameBuffer<'a> {
        &self.fb
    }

    /// Line with the DDA walker regardless of the configured algorithm.
    pub fn draw_line_dda(&mut self, p0: Point2I, p1: Point2I, c: Color) {
        self.line_with(p0, p1, c, LineAlgorithm::Dda);
    }

    fn line_with(&mut self, p0: Point2I, p1: Point2I, c: Color, algo: LineAlgorithm) {
        match clip_line(p0, p1, &self.clip) {
            Some((a, b)) => line::draw_line(&mut self.fb, a, b, c.to_argb(), algo),
            None => log::trace!("line {p0:?}-{p1:?} rejected by clip {:?}", self.clip),
        }
    }

    /// Scan-convert with a caller-supplied span filler. Colours are attached
    /// to their vertices and travel with them through sorting and splitting.
    pub fn fill_triangle_with<T: Scalar, F: SpanFiller + ?Sized>(
        &mut self,
        pts: [Point2<T>; 3],
        colors: [Color; 3],
        filler: &mut F,
    ) {
        let verts = [0, 1, 2].map(|i| Vertex::new(pts[i].to_f64(), ColorF::from(colors[i])));
        triangle::rasterize(&mut self.fb, verts, filler, &self.clip);
    }
}

impl Renderer for Software<'_> {
    fn clear(&mut self, c: Color) {
        self.fb.clear(c.to_argb());
    }

    fn draw_pixel(&mut self, p: Point2I, c: Color) {
        if self.clip.contains(p) {
            self.fb.set_pixel(p.x, p.y, c.to_argb());
        }
    }

    fn draw_line(&mut self, p0: Point2I, p1: Point2I, c: Color) {
        self.line_with(p0, p1, c, self.line_algo);
    }

    fn fill_triangle<T: Scalar>(&mut self, p0: Point2<T>, p1: Point2<T>, p2: Point2<T>, c: Color) {
        self.fill_triangle_with([p0, p1, p2], [c; 3], &mut SolidFill::new(c));
    }

    fn fill_triangle_gouraud<T: Scalar>(
        &mut self,
        p0: Point2<T>,
        p1: Point2<T>,
        p2: Point2<T>,
        c0: Color,
        c1: Color,
        c2: Color,
    ) {
        self.fill_triangle_with([p0, p1, p2], [c0, c1, c2], &mut GouraudFill::new());
    }
}
