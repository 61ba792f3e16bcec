//! Scanline triangle fill.
//!
//! 1. Reject degenerate input (all x equal, all y equal, non-finite).
//! 2. Sort vertices by y, carrying colour.
//! 3. Classify: flat-top, flat-bottom, or general. A general triangle is cut
//!    at the middle vertex's y into a flat-bottom part above and a flat-top
//!    part below.
//! 4. Each flat part is walked row by row; the horizontal span of every row
//!    is handed to a [`SpanFiller`].
//!
//! Rows covered by a part spanning `y_top .. y_bottom` are
//! `ceil(y_top) ..= ceil(y_bottom) - 1`. Adjacent parts (and adjacent
//! triangles sharing an edge) therefore never draw the same row twice and
//! never leave one out.

use smallvec::SmallVec;

use crate::{
    color::ColorF,
    math::{Point2FD, ceil_to_i32},
};

use super::{clip::ClipRect, framebuffer::FrameBuffer, span::SpanFiller};

/// Pixel-space vertex with an interpolatable colour.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub pos: Point2FD,
    pub color: ColorF,
}

impl Vertex {
    pub fn new(pos: Point2FD, color: ColorF) -> Self {
        Self { pos, color }
    }
}

/// Triangle edge oriented top → bottom (`top.pos.y < bottom.pos.y`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub top: Vertex,
    pub bottom: Vertex,
}

impl Edge {
    fn new(a: Vertex, b: Vertex) -> Self {
        if a.pos.y <= b.pos.y {
            Self { top: a, bottom: b }
        } else {
            Self { top: b, bottom: a }
        }
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom.pos.y - self.top.pos.y
    }

    /// dx/dy. Only valid when `height() > 0`.
    #[inline]
    pub fn slope(&self) -> f64 {
        (self.bottom.pos.x - self.top.pos.x) / self.height()
    }

    #[inline]
    pub fn x_at(&self, y: f64) -> f64 {
        self.top.pos.x + (y - self.top.pos.y) * self.slope()
    }
}

/// Flat-top or flat-bottom triangle: two edges bounding the same row range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatPart {
    pub left: Edge,
    pub right: Edge,
}

impl FlatPart {
    /// `a`, `b` share a y above `apex`.
    fn flat_top(a: Vertex, b: Vertex, apex: Vertex) -> Self {
        let (l, r) = if a.pos.x <= b.pos.x { (a, b) } else { (b, a) };
        Self {
            left: Edge::new(l, apex),
            right: Edge::new(r, apex),
        }
    }

    /// `a`, `b` share a y below `apex`.
    fn flat_bottom(apex: Vertex, a: Vertex, b: Vertex) -> Self {
        let (l, r) = if a.pos.x <= b.pos.x { (a, b) } else { (b, a) };
        Self {
            left: Edge::new(apex, l),
            right: Edge::new(apex, r),
        }
    }

    #[inline]
    pub fn top_y(&self) -> f64 {
        self.left.top.pos.y
    }

    #[inline]
    pub fn bottom_y(&self) -> f64 {
        self.left.bottom.pos.y
    }

    /// Inclusive row range; `first > last` when the part covers no row.
    /// Rows beyond the `i32` range saturate.
    #[inline]
    pub fn rows(&self) -> (i32, i32) {
        (
            ceil_to_i32(self.top_y()),
            ceil_to_i32(self.bottom_y()).saturating_sub(1),
        )
    }
}

/// Shape after sorting by y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriangleShape {
    /// `v[0].y == v[1].y < v[2].y`
    FlatTop,
    /// `v[0].y < v[1].y == v[2].y`
    FlatBottom,
    /// `v[0].y < v[1].y < v[2].y`; `split` lies on `v[0] → v[2]` at `v[1].y`.
    General { split: Vertex },
}

/// Zero visual area or unusable coordinates.
pub fn is_degenerate(v: &[Vertex; 3]) -> bool {
    if v.iter().any(|p| !p.pos.is_finite()) {
        return true;
    }
    let all_x = v[0].pos.x == v[1].pos.x && v[1].pos.x == v[2].pos.x;
    let all_y = v[0].pos.y == v[1].pos.y && v[1].pos.y == v[2].pos.y;
    all_x || all_y
}

/// Point on `p0 → p2` at `p1.y`; colour interpolated by the same fraction.
pub fn split_vertex(p0: &Vertex, p1: &Vertex, p2: &Vertex) -> Vertex {
    let t = (p1.pos.y - p0.pos.y) / (p2.pos.y - p0.pos.y);
    let x = p0.pos.x + (p1.pos.y - p0.pos.y) * (p2.pos.x - p0.pos.x) / (p2.pos.y - p0.pos.y);
    Vertex::new(
        Point2FD::new(x, p1.pos.y),
        p0.color.lerp(p2.color, t as f32),
    )
}

/// Sort `v` by ascending y (colours travel with their vertex) and classify.
/// `None` for degenerate triangles.
pub fn classify(v: &mut [Vertex; 3]) -> Option<TriangleShape> {
    if is_degenerate(v) {
        return None;
    }
    v.sort_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if v[0].pos.y == v[1].pos.y {
        Some(TriangleShape::FlatTop)
    } else if v[1].pos.y == v[2].pos.y {
        Some(TriangleShape::FlatBottom)
    } else {
        Some(TriangleShape::General {
            split: split_vertex(&v[0], &v[1], &v[2]),
        })
    }
}

/// Flat parts in top-to-bottom order (one or two). Empty for degenerate input.
pub fn decompose(mut v: [Vertex; 3]) -> SmallVec<[FlatPart; 2]> {
    let mut parts = SmallVec::new();
    match classify(&mut v) {
        None => {}
        Some(TriangleShape::FlatTop) => parts.push(FlatPart::flat_top(v[0], v[1], v[2])),
        Some(TriangleShape::FlatBottom) => parts.push(FlatPart::flat_bottom(v[0], v[1], v[2])),
        Some(TriangleShape::General { split }) => {
            parts.push(FlatPart::flat_bottom(v[0], v[1], split));
            parts.push(FlatPart::flat_top(v[1], split, v[2]));
        }
    }
    parts
}

/// Walk one flat part, rows clamped to `clip`.
pub fn fill_part<F: SpanFiller + ?Sized>(
    fb: &mut FrameBuffer,
    part: &FlatPart,
    filler: &mut F,
    clip: &ClipRect,
) {
    let (first, last) = part.rows();
    let first = first.max(clip.top);
    let last = last.min(clip.bottom);
    // zero rows: nothing to divide by, nothing to draw
    if first > last {
        return;
    }

    filler.begin_part(part);

    let dl = part.left.slope();
    let dr = part.right.slope();
    let mut xl = part.left.x_at(first as f64);
    let mut xr = part.right.x_at(first as f64);

    for y in first..=last {
        filler.fill_span(fb, y, xl, xr, clip);
        xl += dl;
        xr += dr;
    }
}

/// Scan-convert a whole triangle. Degenerate input is a silent no-op.
pub fn rasterize<F: SpanFiller + ?Sized>(
    fb: &mut FrameBuffer,
    verts: [Vertex; 3],
    filler: &mut F,
    clip: &ClipRect,
) {
    let parts = decompose(verts);
    if parts.is_empty() {
        log::trace!("skipping degenerate triangle {:?}", verts.map(|v| v.pos));
        return;
    }
    for part in &parts {
        fill_part(fb, part, filler, clip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::Color,
        renderer::{Rgba, software::line::span_pixels},
    };

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new(Point2FD::new(x, y), ColorF::from(Color::WHITE))
    }

    /// Records spans instead of drawing them.
    #[derive(Default)]
    struct SpanLog {
        spans: Vec<(i32, f64, f64)>,
        parts: usize,
    }

    impl SpanFiller for SpanLog {
        fn begin_part(&mut self, _part: &FlatPart) {
            self.parts += 1;
        }
        fn fill_span(&mut self, _fb: &mut FrameBuffer, y: i32, xl: f64, xr: f64, _clip: &ClipRect) {
            self.spans.push((y, xl, xr));
        }
    }

    fn log_spans(verts: [Vertex; 3], w: usize, h: usize) -> SpanLog {
        let mut buf: Vec<Rgba> = vec![0; w * h];
        let mut fb = FrameBuffer::new(&mut buf, w, h).unwrap();
        let clip = fb.bounds();
        let mut log = SpanLog::default();
        rasterize(&mut fb, verts, &mut log, &clip);
        log
    }

    #[test]
    fn degenerate_triangles_are_rejected() {
        assert!(is_degenerate(&[v(1.0, 0.0), v(1.0, 5.0), v(1.0, 9.0)]));
        assert!(is_degenerate(&[v(0.0, 3.0), v(5.0, 3.0), v(9.0, 3.0)]));
        assert!(is_degenerate(&[v(0.0, f64::NAN), v(5.0, 3.0), v(9.0, 1.0)]));
        assert!(!is_degenerate(&[v(0.0, 0.0), v(10.0, 0.0), v(5.0, 10.0)]));

        let log = log_spans([v(3.0, 0.0), v(3.0, 4.0), v(3.0, 8.0)], 16, 16);
        assert!(log.spans.is_empty());
        assert_eq!(log.parts, 0);
    }

    #[test]
    fn classification_sorts_and_carries_colour() {
        let mut t = [
            Vertex::new(Point2FD::new(5.0, 10.0), ColorF::from(Color::BLUE)),
            Vertex::new(Point2FD::new(0.0, 0.0), ColorF::from(Color::RED)),
            Vertex::new(Point2FD::new(10.0, 0.0), ColorF::from(Color::GREEN)),
        ];
        assert_eq!(classify(&mut t), Some(TriangleShape::FlatTop));
        assert_eq!(t[2].color, ColorF::from(Color::BLUE));
        assert_eq!(t[2].pos, Point2FD::new(5.0, 10.0));

        let mut t = [v(2.0, 9.0), v(5.0, 1.0), v(8.0, 9.0)];
        assert_eq!(classify(&mut t), Some(TriangleShape::FlatBottom));
        assert_eq!(t[0].pos, Point2FD::new(5.0, 1.0));
    }

    #[test]
    fn general_split_interpolates_position_and_colour() {
        let mut t = [
            Vertex::new(Point2FD::new(2.0, 1.0), ColorF::from(Color::BLACK)),
            Vertex::new(Point2FD::new(20.0, 9.0), ColorF::from(Color::RED)),
            Vertex::new(Point2FD::new(8.0, 25.0), ColorF::from(Color::new(240, 120, 60))),
        ];
        let Some(TriangleShape::General { split }) = classify(&mut t) else {
            panic!("expected general triangle");
        };
        assert_eq!(split.pos, Point2FD::new(4.0, 9.0));
        // one third of the way from black to (240, 120, 60)
        assert_eq!(split.color.to_color(), Color::new(80, 40, 20));
    }

    #[test]
    fn zero_height_part_emits_nothing() {
        // all three y inside one pixel row band: no integer row in [0.2, 0.8)
        let log = log_spans([v(0.0, 0.2), v(10.0, 0.5), v(4.0, 0.8)], 16, 16);
        assert!(log.spans.is_empty());
        assert_eq!(log.parts, 0, "begin_part must not run for empty parts");
    }

    #[test]
    fn flat_top_rows_and_spans() {
        let log = log_spans([v(0.0, 0.0), v(10.0, 0.0), v(5.0, 10.0)], 16, 16);
        let rows: Vec<i32> = log.spans.iter().map(|s| s.0).collect();
        assert_eq!(rows, (0..10).collect::<Vec<_>>());
        for &(y, xl, xr) in &log.spans {
            assert!((xl - 0.5 * y as f64).abs() < 1e-9);
            assert!((xr - (10.0 - 0.5 * y as f64)).abs() < 1e-9);
        }
    }

    #[test]
    fn general_split_covers_every_row_exactly_once() {
        let (p0, p1, p2) = (v(2.0, 1.0), v(20.0, 9.0), v(8.0, 25.0));
        let log = log_spans([p2, p0, p1], 32, 32);
        assert_eq!(log.parts, 2);

        let rows: Vec<i32> = log.spans.iter().map(|s| s.0).collect();
        assert_eq!(rows, (1..25).collect::<Vec<_>>(), "ceil(p0.y) ..= ceil(p2.y) - 1");

        // reference: evaluate the unsplit triangle edges directly per row
        let long = |y: f64| p0.pos.x + (y - p0.pos.y) * (p2.pos.x - p0.pos.x) / (p2.pos.y - p0.pos.y);
        let short = |y: f64| {
            if y < p1.pos.y {
                p0.pos.x + (y - p0.pos.y) * (p1.pos.x - p0.pos.x) / (p1.pos.y - p0.pos.y)
            } else {
                p1.pos.x + (y - p1.pos.y) * (p2.pos.x - p1.pos.x) / (p2.pos.y - p1.pos.y)
            }
        };
        for &(y, xl, xr) in &log.spans {
            let (a, b) = (long(y as f64), short(y as f64));
            let (ra, rb) = (a.min(b), a.max(b));
            assert_eq!(span_pixels(xl, xr), span_pixels(ra, rb), "row {y}");
        }
    }

    #[test]
    fn fractional_vertices_follow_ceiling_rows() {
        let log = log_spans([v(1.5, 2.3), v(12.25, 7.5), v(4.0, 13.7)], 16, 16);
        let rows: Vec<i32> = log.spans.iter().map(|s| s.0).collect();
        assert_eq!(rows, (3..14).collect::<Vec<_>>());
    }

    #[test]
    fn far_away_rows_saturate_to_nothing() {
        let above = log_spans([v(0.0, -1e10), v(5.0, -1e10), v(2.0, -1e10 + 10.0)], 16, 16);
        assert!(above.spans.is_empty());
        let below = log_spans([v(0.0, 1e10), v(5.0, 1e10), v(2.0, 1e10 + 10.0)], 16, 16);
        assert!(below.spans.is_empty());
        assert_eq!(above.parts + below.parts, 0);

        let part = FlatPart::flat_top(v(0.0, -1e10), v(5.0, -1e10), v(2.0, -1e10 + 10.0));
        assert_eq!(part.rows(), (i32::MIN, i32::MIN));
    }

    #[test]
    fn rows_are_clamped_to_clip() {
        let mut buf: Vec<Rgba> = vec![0; 16 * 16];
        let mut fb = FrameBuffer::new(&mut buf, 16, 16).unwrap();
        let clip = ClipRect::new(0, 4, 15, 6).unwrap();
        let mut log = SpanLog::default();
        rasterize(&mut fb, [v(0.0, -5.0), v(10.0, 0.0), v(5.0, 30.0)], &mut log, &clip);
        let rows: Vec<i32> = log.spans.iter().map(|s| s.0).collect();
        assert_eq!(rows, vec![4, 5, 6]);
        // the row-4 span must match the unclipped edge positions
        let (_, xl, xr) = log.spans[0];
        let long = 0.0 + (4.0 + 5.0) * 5.0 / 35.0;
        let short = 10.0 + 4.0 * (5.0 - 10.0) / 30.0;
        assert!((xl - long).abs() < 1e-9 && (xr - short).abs() < 1e-9);
    }
}
