use crate::renderer::{RasterError, Rgba, software::clip::ClipRect};

/// Non-owning, bounds-checked view over a caller-supplied pixel buffer.
///
/// * Row-major, **top-down**: row 0 is the topmost scanline and triangle
///   scan conversion walks rows in increasing index order.
/// * One [`Rgba`] per pixel; the buffer may be longer than `width * height`
///   (trailing pixels are never touched).
#[derive(Debug)]
pub struct FrameBuffer<'a> {
    pixels: &'a mut [Rgba],
    width: usize,
    height: usize,
}

impl<'a> FrameBuffer<'a> {
    /// Borrow `pixels` as a `width × height` surface.
    pub fn new(pixels: &'a mut [Rgba], width: usize, height: usize) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroSize { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(RasterError::TooLarge { width, height })?;
        if pixels.len() < needed {
            return Err(RasterError::BufferTooSmall {
                needed,
                got: pixels.len(),
            });
        }
        // i32 pixel coordinates must be able to address every column/row
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(RasterError::TooLarge { width, height });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whole surface as an inclusive clip rectangle.
    pub fn bounds(&self) -> ClipRect {
        ClipRect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height,
            "pixel ({x}, {y}) outside {}x{} frame-buffer",
            self.width,
            self.height
        );
        y as usize * self.width + x as usize
    }

    /// Write one pixel.
    ///
    /// Precondition: `0 <= x < width`, `0 <= y < height`. Callers clip first;
    /// a violation asserts in debug builds and at worst panics on the slice
    /// bound in release.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, p: Rgba) {
        let i = self.index(x, y);
        self.pixels[i] = p;
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Rgba {
        self.pixels[self.index(x, y)]
    }

    /// Fill `x0 ..= x1` on row `y`. Both ends must already be inside.
    #[inline]
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, p: Rgba) {
        debug_assert!(x0 <= x1);
        let start = self.index(x0, y);
        let end = self.index(x1, y);
        self.pixels[start..=end].fill(p);
    }

    pub fn clear(&mut self, p: Rgba) {
        let n = self.width * self.height;
        self.pixels[..n].fill(p);
    }

    /// Read-only view of the visible pixels.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels[..self.width * self.height]
    }
}
