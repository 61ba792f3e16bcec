//! Software 2D rasterizer.
//!
//! Takes pixel-space points produced by a caller's own 3D pipeline and
//! paints them into a caller-owned `u32` pixel buffer:
//!
//! * lines (horizontal / vertical fast paths, Bresenham, DDA) clipped with
//!   Cohen–Sutherland,
//! * triangle outlines,
//! * scanline-filled triangles, flat colour or Gouraud shaded.
//!
//! ```
//! use raster2d::{Color, Point2I, Renderer, Software};
//!
//! let mut pixels = vec![0u32; 64 * 48];
//! let mut sw = Software::new(&mut pixels, 64, 48)?;
//! sw.fill_triangle_gouraud(
//!     Point2I::new(4, 4),
//!     Point2I::new(60, 10),
//!     Point2I::new(20, 44),
//!     Color::RED,
//!     Color::GREEN,
//!     Color::BLUE,
//! );
//! sw.draw_line(Point2I::new(-10, 0), Point2I::new(70, 47), Color::WHITE);
//! # Ok::<(), raster2d::RasterError>(())
//! ```

pub mod color;
pub mod math;
pub mod renderer;

pub use color::{Color, ColorF};
pub use math::{Point2, Point2F, Point2FD, Point2I, Scalar};
pub use renderer::{
    ClipRect, DrawCall, LineAlgorithm, RasterError, Renderer, RendererExt, Rgba, Software,
};
