// Copyright 2026 the Arko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths built from line, quadratic and conic segments.

use std::mem;

use crate::{directed_sweep, Arc, Conic, Line, ParamCurve, ParamCurveDeriv, Point, QuadBez, Rect, Vec2};

/// A segment of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSeg {
    /// A line segment.
    Line(Line),
    /// A quadratic Bézier segment.
    Quad(QuadBez),
    /// A conic (rational quadratic) segment.
    Conic(Conic),
}

impl PathSeg {
    /// The start point of the segment.
    pub fn start(&self) -> Point {
        match self {
            PathSeg::Line(line) => line.p0,
            PathSeg::Quad(quad) => quad.p0,
            PathSeg::Conic(conic) => conic.p0,
        }
    }

    /// The end point of the segment.
    pub fn end(&self) -> Point {
        match self {
            PathSeg::Line(line) => line.p1,
            PathSeg::Quad(quad) => quad.p2,
            PathSeg::Conic(conic) => conic.p2,
        }
    }

    /// Evaluate the segment at parameter `t`, in [0..1].
    pub fn eval(&self, t: f64) -> Point {
        match self {
            PathSeg::Line(line) => line.eval(t),
            PathSeg::Quad(quad) => quad.eval(t),
            PathSeg::Conic(conic) => conic.eval(t),
        }
    }

    /// The (non-normalized) tangent vector at parameter `t`.
    pub fn tangent(&self, t: f64) -> Vec2 {
        match self {
            PathSeg::Line(line) => line.delta(),
            PathSeg::Quad(quad) => quad.deriv().eval(t).to_vec2(),
            PathSeg::Conic(conic) => conic.tangent(t),
        }
    }
}

/// One continuous sub-path of connected segments.
///
/// A contour always has a well-defined start point, even when it has no
/// segments; a segment-less contour is a single point. Adjacent segments
/// share endpoints exactly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour {
    start: Point,
    segs: Vec<PathSeg>,
    closed: bool,
}

impl Contour {
    fn new(start: Point) -> Contour {
        Contour {
            start,
            segs: Vec::new(),
            closed: false,
        }
    }

    /// The first point of the contour.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The last point of the contour.
    ///
    /// For a segment-less contour this is the start point.
    #[inline]
    pub fn end(&self) -> Point {
        self.segs.last().map_or(self.start, PathSeg::end)
    }

    /// The segments of the contour.
    #[inline]
    pub fn segments(&self) -> &[PathSeg] {
        &self.segs
    }

    /// Whether the contour has been closed.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the contour is a bare point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }
}

/// A finished, immutable path: an ordered sequence of contours.
///
/// Paths are produced by [`PathBuilder::finish`] and cannot be modified
/// afterwards; build a new path with a fresh builder instead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    contours: Vec<Contour>,
}

impl Path {
    /// The contours of the path, in construction order.
    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Returns `true` if the path has no contours at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }
}

/// How a canvas-style arc is appended to a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcAppend {
    /// Start a new contour at the arc's start point.
    NewContour,
    /// Connect the current point to the arc's start point with a line,
    /// then append the arc to the current contour.
    ConnectThenArc,
}

/// A builder accumulating segments into contours.
///
/// The builder owns its contours exclusively until [`finish`] freezes them
/// into a [`Path`] and resets the builder to its empty state.
///
/// [`finish`]: PathBuilder::finish
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    contours: Vec<Contour>,
    current: Option<Contour>,
}

impl PathBuilder {
    /// Create a new, empty builder.
    pub fn new() -> PathBuilder {
        PathBuilder::default()
    }

    /// The point subsequent segments are appended from, if any.
    #[inline]
    pub fn current_point(&self) -> Option<Point> {
        self.current.as_ref().map(Contour::end)
    }

    /// Start a new contour at `p`.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.flush();
        self.current = Some(Contour::new(p.into()));
    }

    /// Append a line segment to `p`.
    ///
    /// A `line_to` with no preceding `move_to` starts an implicit contour
    /// at the origin.
    pub fn line_to(&mut self, p: impl Into<Point>) {
        let p = p.into();
        let last = self.ensure_current();
        self.push_seg(PathSeg::Line(Line::new(last, p)));
    }

    /// Append a quadratic Bézier segment with control point `p1`, ending
    /// at `p2`.
    pub fn quad_to(&mut self, p1: impl Into<Point>, p2: impl Into<Point>) {
        let (p1, p2) = (p1.into(), p2.into());
        let last = self.ensure_current();
        self.push_seg(PathSeg::Quad(QuadBez::new(last, p1, p2)));
    }

    /// Append a conic segment with control point `p1` and the given
    /// weight, ending at `p2`.
    pub fn conic_to(&mut self, p1: impl Into<Point>, p2: impl Into<Point>, weight: f64) {
        let (p1, p2) = (p1.into(), p2.into());
        let last = self.ensure_current();
        self.push_seg(PathSeg::Conic(Conic::new(last, p1, p2, weight)));
    }

    /// Mark the current contour as closed and end it.
    ///
    /// Closing is always caller-controlled; in particular, arcs never
    /// close their contour themselves.
    pub fn close(&mut self) {
        if let Some(contour) = self.current.as_mut() {
            contour.closed = true;
        }
        self.flush();
    }

    /// Append an arc as a new contour.
    ///
    /// The contour starts at the arc's start point and never connects to
    /// a previous current point. A zero sweep still produces a contour:
    /// the single point at the start angle. Non-finite bounds or angles
    /// produce nothing.
    pub fn add_arc(&mut self, bounds: Rect, start_angle: f64, sweep_angle: f64) {
        let arc = Arc::new(bounds, start_angle, sweep_angle);
        if !arc.is_finite() {
            return;
        }
        let segs = arc.to_segs();
        self.move_to(arc.start_point());
        if let Some(contour) = self.current.as_mut() {
            contour.segs.extend(segs);
        }
    }

    /// Append an arc, connected to the current point.
    ///
    /// If a current point exists and `force_move_to` is false, a single
    /// straight segment from the current point to the arc's start point is
    /// appended first (omitted when the two coincide exactly), and the arc
    /// continues the current contour. Otherwise this behaves like
    /// [`add_arc`](Self::add_arc).
    pub fn arc_to(&mut self, bounds: Rect, start_angle: f64, sweep_angle: f64, force_move_to: bool) {
        let arc = Arc::new(bounds, start_angle, sweep_angle);
        if !arc.is_finite() {
            return;
        }
        let start_pt = arc.start_point();
        match (self.current_point(), force_move_to) {
            (Some(current), false) => {
                if current != start_pt {
                    self.line_to(start_pt);
                }
            }
            _ => self.move_to(start_pt),
        }
        let segs = arc.to_segs();
        if let Some(contour) = self.current.as_mut() {
            contour.segs.extend(segs);
        }
    }

    /// Append an arc described HTML-canvas style: center, radius, and
    /// absolute start/end angles in degrees.
    ///
    /// The bounding oval is the square centered on `center` with
    /// half-extent `radius` (expected non-negative). The sweep is the
    /// angular travel from `start_deg` to `end_deg` in the requested
    /// direction, per [`directed_sweep`]; flipping `anticlockwise` never
    /// changes the start angle, so the two directions trace complementary
    /// arcs.
    pub fn canvas_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
        anticlockwise: bool,
        append: ArcAppend,
    ) {
        let bounds = Rect::from_center_half_extent(center, radius);
        let sweep = directed_sweep(start_deg, end_deg, anticlockwise);
        match append {
            ArcAppend::NewContour => self.add_arc(bounds, start_deg, sweep),
            ArcAppend::ConnectThenArc => self.arc_to(bounds, start_deg, sweep, false),
        }
    }

    /// Freeze the accumulated contours into an immutable [`Path`],
    /// resetting the builder to its empty state.
    pub fn finish(&mut self) -> Path {
        self.flush();
        Path {
            contours: mem::take(&mut self.contours),
        }
    }

    fn flush(&mut self) {
        if let Some(contour) = self.current.take() {
            self.contours.push(contour);
        }
    }

    // The current end point, starting an implicit contour at the origin
    // when none exists.
    fn ensure_current(&mut self) -> Point {
        if self.current.is_none() {
            self.current = Some(Contour::new(Point::ORIGIN));
        }
        self.current_point().unwrap_or(Point::ORIGIN)
    }

    fn push_seg(&mut self, seg: PathSeg) {
        if let Some(contour) = self.current.as_mut() {
            contour.segs.push(seg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle_bounds(r: f64) -> Rect {
        Rect::new(-r, -r, r, r)
    }

    #[test]
    fn add_arc_always_new_contour() {
        let mut builder = PathBuilder::new();
        builder.move_to((0.0, 2.0));
        builder.add_arc(circle_bounds(100.0), 0.0, 90.0);
        let path = builder.finish();
        assert_eq!(path.contours().len(), 2);
        // The pending point became its own contour; the arc never
        // connected to it.
        assert!(path.contours()[0].is_empty());
        let arc_contour = &path.contours()[1];
        assert_eq!(arc_contour.segments().len(), 1);
        assert_eq!(arc_contour.start(), Point::new(100.0, 0.0));
    }

    #[test]
    fn arc_to_inserts_one_connecting_line() {
        let mut builder = PathBuilder::new();
        builder.move_to((0.0, 2.0));
        builder.arc_to(circle_bounds(100.0), 0.0, 90.0, false);
        let path = builder.finish();
        assert_eq!(path.contours().len(), 1);
        let contour = &path.contours()[0];
        assert_eq!(contour.segments().len(), 2);
        match &contour.segments()[0] {
            PathSeg::Line(line) => {
                assert_eq!(line.p0, Point::new(0.0, 2.0));
                assert_eq!(line.p1, Point::new(100.0, 0.0));
            }
            other => panic!("expected connecting line, got {other:?}"),
        }
        assert!(matches!(contour.segments()[1], PathSeg::Conic(_)));
    }

    #[test]
    fn arc_to_skips_line_when_already_there() {
        let mut builder = PathBuilder::new();
        builder.move_to((100.0, 0.0));
        builder.arc_to(circle_bounds(100.0), 0.0, 90.0, false);
        let path = builder.finish();
        let contour = &path.contours()[0];
        assert_eq!(contour.segments().len(), 1);
        assert!(matches!(contour.segments()[0], PathSeg::Conic(_)));
    }

    #[test]
    fn arc_to_force_move_to_detaches() {
        let mut builder = PathBuilder::new();
        builder.move_to((0.0, 2.0));
        builder.arc_to(circle_bounds(100.0), 0.0, 90.0, true);
        let path = builder.finish();
        assert_eq!(path.contours().len(), 2);
        assert_eq!(path.contours()[1].segments().len(), 1);
    }

    #[test]
    fn arc_to_without_current_point_moves() {
        let mut builder = PathBuilder::new();
        builder.arc_to(circle_bounds(100.0), 0.0, 90.0, false);
        let path = builder.finish();
        assert_eq!(path.contours().len(), 1);
        assert_eq!(path.contours()[0].start(), Point::new(100.0, 0.0));
        assert_eq!(path.contours()[0].segments().len(), 1);
    }

    #[test]
    fn zero_sweep_arc_is_point_contour() {
        let mut builder = PathBuilder::new();
        builder.add_arc(circle_bounds(100.0), 45.0, 0.0);
        let path = builder.finish();
        assert_eq!(path.contours().len(), 1);
        let contour = &path.contours()[0];
        assert!(contour.is_empty());
        assert!(contour.start().is_finite());
    }

    #[test]
    fn non_finite_arc_is_dropped() {
        let mut builder = PathBuilder::new();
        builder.add_arc(circle_bounds(100.0), f64::NAN, 90.0);
        builder.arc_to(circle_bounds(100.0), 0.0, f64::NAN, false);
        assert!(builder.finish().is_empty());
    }

    #[test]
    fn line_to_without_move_to_starts_at_origin() {
        let mut builder = PathBuilder::new();
        builder.line_to((5.0, 5.0));
        let path = builder.finish();
        let contour = &path.contours()[0];
        assert_eq!(contour.start(), Point::ORIGIN);
        assert_eq!(contour.end(), Point::new(5.0, 5.0));
    }

    #[test]
    fn close_marks_contour() {
        let mut builder = PathBuilder::new();
        builder.move_to((0.0, 0.0));
        builder.line_to((10.0, 0.0));
        builder.line_to((10.0, 10.0));
        builder.close();
        builder.line_to((-1.0, -1.0));
        let path = builder.finish();
        assert_eq!(path.contours().len(), 2);
        assert!(path.contours()[0].is_closed());
        // After a close, drawing resumes in a fresh contour.
        assert!(!path.contours()[1].is_closed());
        assert_eq!(path.contours()[1].start(), Point::ORIGIN);
    }

    #[test]
    fn finish_resets_builder() {
        let mut builder = PathBuilder::new();
        builder.add_arc(circle_bounds(10.0), 0.0, 180.0);
        let first = builder.finish();
        assert!(!first.is_empty());
        assert!(builder.finish().is_empty());
        assert_eq!(builder.current_point(), None);
    }

    #[test]
    fn canvas_arc_directions_are_complementary() {
        let center = Point::new(18.0, 15.0);
        let (a0, a1) = (30.0, 120.0);
        let mut builder = PathBuilder::new();
        builder.canvas_arc(center, 10.0, a0, a1, false, ArcAppend::NewContour);
        builder.canvas_arc(center, 10.0, a0, a1, true, ArcAppend::NewContour);
        let path = builder.finish();
        let [cw, ccw] = path.contours() else {
            panic!("expected two contours");
        };
        // Same start, same end, opposite travel around the circle.
        assert_eq!(cw.start(), ccw.start());
        assert!((cw.end() - ccw.end()).hypot() < 1e-9);
        // 90° one way, 270° the other.
        assert_eq!(cw.segments().len(), 1);
        assert_eq!(ccw.segments().len(), 3);
    }

    #[test]
    fn canvas_arc_connect_mode_joins() {
        let mut builder = PathBuilder::new();
        builder.move_to((0.0, 2.0));
        builder.canvas_arc(
            Point::new(18.0, 15.0),
            10.0,
            0.0,
            180.0,
            false,
            ArcAppend::ConnectThenArc,
        );
        let path = builder.finish();
        assert_eq!(path.contours().len(), 1);
        assert!(matches!(
            path.contours()[0].segments()[0],
            PathSeg::Line(_)
        ));
    }

    #[test]
    fn canvas_arc_full_turn() {
        let mut builder = PathBuilder::new();
        builder.canvas_arc(
            Point::ZERO,
            50.0,
            0.0,
            720.0,
            false,
            ArcAppend::NewContour,
        );
        let path = builder.finish();
        let contour = &path.contours()[0];
        assert_eq!(contour.segments().len(), 4);
        assert_eq!(contour.end(), contour.start());
    }

    // Sweep torture list from the canvas-circumference rendering
    // comparison, scaled to degrees.
    #[test]
    fn many_arcs_never_misbehave() {
        let sweeps_half_turns = [
            -123.7, -2.3, -2.0, -1.0, -0.3, -0.000001, 0.0, 0.000001, 0.3, 0.7, 1.0, 1.3, 1.5,
            1.7, 1.99999, 2.0, 2.00001, 2.3, 4.3, 3934723942837.3,
        ];
        let mut builder = PathBuilder::new();
        for (i, half_turns) in sweeps_half_turns.iter().enumerate() {
            let start = -180.0 + (i as f64) * 90.0;
            builder.move_to((0.0, 2.0));
            builder.canvas_arc(
                Point::new(18.0, 15.0),
                10.0,
                start,
                start + half_turns * 180.0,
                half_turns < &0.0,
                ArcAppend::ConnectThenArc,
            );
            builder.line_to((0.0, 28.0));
        }
        let path = builder.finish();
        assert_eq!(path.contours().len(), sweeps_half_turns.len());
        for contour in path.contours() {
            assert!(contour.start().is_finite());
            for seg in contour.segments() {
                assert!(seg.start().is_finite() && seg.end().is_finite());
                assert!(seg.eval(0.5).is_finite());
            }
        }
    }
}
