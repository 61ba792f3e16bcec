//! Pixel-space geometry shared by every raster unit.
//!
//! The 3D side (camera, projection) lives with the caller; this module only
//! knows about already-projected 2D points.

mod point;

pub use point::{Point2, Point2F, Point2FD, Point2I, Scalar, ceil_to_i32};
