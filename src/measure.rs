// Copyright 2026 the Arko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc-length measurement of paths.

use smallvec::SmallVec;

use crate::{
    Line, ParamCurve, ParamCurveArclen, ParamCurveDeriv, Path, PathSeg, Point, QuadBez, Vec2,
    DEFAULT_ACCURACY,
};

// Flattening tolerance for conic segments, in path units. Positions
// reported by the measure are off-curve by at most about this much.
const CONIC_TOLERANCE: f64 = 1e-3;

// Accuracy for the distance → parameter inverse mapping.
const INV_ARCLEN_ACCURACY: f64 = 1e-9;

/// A measurable piece: conics have been flattened away at construction.
#[derive(Clone, Copy, Debug)]
enum MeasureSeg {
    Line(Line),
    Quad(QuadBez),
}

impl MeasureSeg {
    fn arclen(&self, accuracy: f64) -> f64 {
        match self {
            MeasureSeg::Line(line) => line.arclen(accuracy),
            MeasureSeg::Quad(quad) => quad.arclen(accuracy),
        }
    }

    fn inv_arclen(&self, arclen: f64, accuracy: f64) -> f64 {
        match self {
            MeasureSeg::Line(line) => line.inv_arclen(arclen, accuracy),
            MeasureSeg::Quad(quad) => quad.inv_arclen(arclen, accuracy),
        }
    }

    fn eval(&self, t: f64) -> Point {
        match self {
            MeasureSeg::Line(line) => line.eval(t),
            MeasureSeg::Quad(quad) => quad.eval(t),
        }
    }

    fn tangent(&self, t: f64) -> Vec2 {
        match self {
            MeasureSeg::Line(line) => line.delta(),
            MeasureSeg::Quad(quad) => quad.deriv().eval(t).to_vec2(),
        }
    }

    fn chord(&self) -> Vec2 {
        match self {
            MeasureSeg::Line(line) => line.delta(),
            MeasureSeg::Quad(quad) => quad.p2 - quad.p0,
        }
    }
}

/// Arc-length parameterization of one contour of a path.
///
/// The measure snapshots the first contour of the path at construction
/// and builds a cumulative length table over its (flattened) segments;
/// the source path can be dropped or rebuilt afterwards without affecting
/// an existing measure. Queries are read-only and safe to share across
/// threads.
///
/// A measure over an empty or zero-length contour answers every query
/// with `None`; this state is fixed at construction.
#[derive(Clone, Debug)]
pub struct PathMeasure {
    segs: SmallVec<[MeasureSeg; 8]>,
    // cum[i] is the length of the contour through segs[i].
    cum: SmallVec<[f64; 8]>,
    total: f64,
}

impl PathMeasure {
    /// Measure the first contour of `path`.
    ///
    /// With `force_closed`, the contour is measured as if closed: the
    /// straight chord back to the start point is included whenever the
    /// endpoints differ. Contours explicitly closed during construction
    /// are always measured with their closing chord.
    pub fn new(path: &Path, force_closed: bool) -> PathMeasure {
        let mut measure = PathMeasure {
            segs: SmallVec::new(),
            cum: SmallVec::new(),
            total: 0.0,
        };
        if let Some(contour) = path.contours().first() {
            for seg in contour.segments() {
                match seg {
                    PathSeg::Line(line) => measure.push(MeasureSeg::Line(*line)),
                    PathSeg::Quad(quad) => measure.push(MeasureSeg::Quad(*quad)),
                    PathSeg::Conic(conic) => {
                        for quad in conic.to_quads(CONIC_TOLERANCE) {
                            measure.push(MeasureSeg::Quad(quad));
                        }
                    }
                }
            }
            if (force_closed || contour.is_closed()) && contour.end() != contour.start() {
                measure.push(MeasureSeg::Line(Line::new(contour.end(), contour.start())));
            }
        }
        measure
    }

    // Zero-length pieces are dropped so that the cumulative table is
    // strictly increasing.
    fn push(&mut self, seg: MeasureSeg) {
        let len = seg.arclen(DEFAULT_ACCURACY);
        if len > 0.0 && len.is_finite() {
            self.total += len;
            self.segs.push(seg);
            self.cum.push(self.total);
        }
    }

    /// The total length of the measured contour.
    #[inline]
    pub fn length(&self) -> f64 {
        self.total
    }

    /// Returns `true` if the measured contour has no length to parameterize.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// The position and unit tangent at the given distance along the
    /// contour.
    ///
    /// The distance is clamped into `[0, length]`. Returns `None` for a
    /// measure over an empty or zero-length contour, and for a NaN
    /// distance; the tangent is otherwise always finite and unit-length.
    pub fn pos_tan(&self, distance: f64) -> Option<(Point, Vec2)> {
        if self.segs.is_empty() || distance.is_nan() {
            return None;
        }
        let distance = distance.clamp(0.0, self.total);
        let ix = self
            .cum
            .partition_point(|&through| through < distance)
            .min(self.segs.len() - 1);
        let seg = &self.segs[ix];
        let start = if ix == 0 { 0.0 } else { self.cum[ix - 1] };
        let seg_len = self.cum[ix] - start;
        let local = (distance - start).clamp(0.0, seg_len);
        let t = seg.inv_arclen(local, INV_ARCLEN_ACCURACY);
        let pos = seg.eval(t);
        let tangent = seg.tangent(t);
        let tangent = if tangent.hypot2() > 0.0 {
            tangent
        } else {
            // Degenerate parameterization; the chord of a positive-length
            // piece still gives the direction of travel.
            seg.chord()
        };
        if tangent.hypot2() == 0.0 || !tangent.is_finite() {
            return None;
        }
        Some((pos, tangent.normalize()))
    }
}
