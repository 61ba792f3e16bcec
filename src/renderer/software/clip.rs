//! Cohen–Sutherland line clipping against an inclusive pixel rectangle.

use bitflags::bitflags;

use crate::{math::Point2I, renderer::RasterError};

/// Inclusive clip bounds: `left ..= right` × `top ..= bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ClipRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self, RasterError> {
        if left > right || top > bottom {
            return Err(RasterError::InvalidClipRect {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// `(0, 0) ..= (w-1, h-1)`. Callers guarantee `w, h >= 1`.
    pub fn from_size(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            left: 0,
            top: 0,
            right: width as i32 - 1,
            bottom: height as i32 - 1,
        }
    }

    #[inline]
    pub fn contains(&self, p: Point2I) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Overlap of two rectangles, `None` when disjoint.
    pub fn intersect(&self, o: &ClipRect) -> Option<ClipRect> {
        ClipRect::new(
            self.left.max(o.left),
            self.top.max(o.top),
            self.right.min(o.right),
            self.bottom.min(o.bottom),
        )
        .ok()
    }

    /// Region code of `p`; empty when inside.
    pub fn outcode(&self, p: Point2I) -> Outcode {
        let mut code = Outcode::empty();
        if p.x < self.left {
            code |= Outcode::WEST;
        } else if p.x > self.right {
            code |= Outcode::EAST;
        }
        if p.y < self.top {
            code |= Outcode::NORTH;
        } else if p.y > self.bottom {
            code |= Outcode::SOUTH;
        }
        code
    }
}

bitflags! {
    /// Which side(s) of a [`ClipRect`] a point lies outside of.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Outcode: u8 {
        const WEST  = 0b0001;
        const EAST  = 0b0010;
        const NORTH = 0b0100;
        const SOUTH = 0b1000;
    }
}

/// Clip `p0 → p1` to `rect`.
///
/// Returns `None` when nothing of the segment should be drawn: both ends on
/// the same outside side, or the computed intersections still fall outside
/// (the segment only grazes a corner region). Never returns an endpoint
/// outside `rect`.
pub fn clip_line(p0: Point2I, p1: Point2I, rect: &ClipRect) -> Option<(Point2I, Point2I)> {
    let c0 = rect.outcode(p0);
    let c1 = rect.outcode(p1);

    // trivially inside
    if c0.is_empty() && c1.is_empty() {
        return Some((p0, p1));
    }
    // trivially outside: both on one forbidden side
    if c0.intersects(c1) {
        return None;
    }

    let q0 = if c0.is_empty() {
        p0
    } else {
        clip_endpoint(p0, p1, c0, rect)
    };
    let q1 = if c1.is_empty() {
        p1
    } else {
        clip_endpoint(p1, p0, c1, rect)
    };

    if rect.contains(q0) && rect.contains(q1) {
        Some((q0, q1))
    } else {
        None
    }
}

/// Move `p` (outside, region `code`) along the line towards `other` until it
/// meets the rectangle border.
///
/// The horizontal border (top/bottom) is tried first; if the resulting `x`
/// is off the rectangle, the vertical border (left/right) is used instead.
fn clip_endpoint(p: Point2I, other: Point2I, code: Outcode, rect: &ClipRect) -> Point2I {
    // f64 differences: any pair of i32 endpoints is valid input
    let dx = other.x as f64 - p.x as f64;
    let dy = other.y as f64 - p.y as f64;

    let mut fallback = p;

    let y_edge = if code.contains(Outcode::NORTH) {
        Some(rect.top)
    } else if code.contains(Outcode::SOUTH) {
        Some(rect.bottom)
    } else {
        None
    };

    // `other` is not on the same side, so dy != 0 here
    if let Some(ye) = y_edge {
        let x = p.x as f64 + (ye as f64 - p.y as f64) * dx / dy;
        let x = x.round() as i32;
        let hit = Point2I::new(x, ye);
        if x >= rect.left && x <= rect.right {
            return hit;
        }
        fallback = hit;
    }

    let x_edge = if code.contains(Outcode::WEST) {
        Some(rect.left)
    } else if code.contains(Outcode::EAST) {
        Some(rect.right)
    } else {
        None
    };

    if let Some(xe) = x_edge {
        let y = p.y as f64 + (xe as f64 - p.x as f64) * dy / dx;
        return Point2I::new(xe, y.round() as i32);
    }

    fallback
}

/// Clamp a scanline's pixel range to the rectangle's columns.
/// `None` when the span misses it entirely or is empty.
#[inline]
pub fn clip_span(x0: i32, x1: i32, rect: &ClipRect) -> Option<(i32, i32)> {
    let lo = x0.max(rect.left);
    let hi = x1.min(rect.right);
    (lo <= hi).then_some((lo, hi))
}
