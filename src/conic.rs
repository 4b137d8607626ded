// Copyright 2026 the Arko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conic sections, as rational quadratic Bézier segments.

use smallvec::SmallVec;

use crate::{Point, QuadBez, Vec2};

/// A rational quadratic Bézier segment.
///
/// The curve is `(P₀(1−t)² + 2wP₁t(1−t) + P₂t²) / ((1−t)² + 2wt(1−t) + t²)`.
/// With a weight `w = cos(θ/2)`, a conic exactly represents a circular or
/// elliptical arc subtending the angle `θ`, for `θ` up to 90° — which is
/// why the arc converter never emits wider pieces.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conic {
    /// The start point.
    pub p0: Point,
    /// The control point.
    pub p1: Point,
    /// The end point.
    pub p2: Point,
    /// The weight applied to the control point.
    ///
    /// A weight of 1 degenerates to an ordinary quadratic Bézier. Weights
    /// in (0, 1) give elliptical arcs. Weights outside that range are
    /// accepted but describe hyperbolic segments, which this crate never
    /// produces itself.
    pub weight: f64,
}

impl Conic {
    /// Create a new conic segment.
    #[inline(always)]
    pub fn new(
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        weight: f64,
    ) -> Conic {
        Conic {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            weight,
        }
    }

    /// The start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.p0
    }

    /// The end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.p2
    }

    /// Evaluate the curve at parameter `t`, in [0..1].
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let b0 = mt * mt;
        let b1 = 2.0 * self.weight * t * mt;
        let b2 = t * t;
        let num = self.p0.to_vec2() * b0 + self.p1.to_vec2() * b1 + self.p2.to_vec2() * b2;
        let den = b0 + b1 + b2;
        (num / den).to_point()
    }

    /// The (non-normalized) tangent vector at parameter `t`.
    pub fn tangent(&self, t: f64) -> Vec2 {
        let mt = 1.0 - t;
        let w = self.weight;
        let p0 = self.p0.to_vec2();
        let p1 = self.p1.to_vec2();
        let p2 = self.p2.to_vec2();
        let num = p0 * (mt * mt) + p1 * (2.0 * w * t * mt) + p2 * (t * t);
        let den = mt * mt + 2.0 * w * t * mt + t * t;
        let dnum = (p1 * w - p0) * (2.0 * mt) + (p2 - p1 * w) * (2.0 * t);
        let dden = 2.0 * (1.0 - 2.0 * t) * (w - 1.0);
        // Quotient rule, with the 1/den² factor dropped: the direction is
        // all that matters to callers.
        dnum * den - num * dden
    }

    /// Subdivide into halves.
    ///
    /// The split point is the curve's parametric midpoint after rational
    /// reparameterization, so both halves are again exact arcs when `self`
    /// is one.
    pub fn subdivide(&self) -> (Conic, Conic) {
        let w = self.weight;
        let p0 = self.p0.to_vec2();
        let p1 = self.p1.to_vec2();
        let p2 = self.p2.to_vec2();
        let scale = (1.0 + w).recip();
        let half_weight = (0.5 * (1.0 + w)).sqrt();
        let m0 = (p0 + p1 * w) * scale;
        let m2 = (p1 * w + p2) * scale;
        let mid = ((p0 + p1 * (2.0 * w) + p2) / (2.0 + 2.0 * w)).to_point();
        (
            Conic::new(self.p0, m0.to_point(), mid, half_weight),
            Conic::new(mid, m2.to_point(), self.p2, half_weight),
        )
    }

    /// Approximate this conic by quadratic Bézier segments.
    ///
    /// Subdivision stops once the parametric midpoint of each piece is
    /// within `tolerance` of its quadratic stand-in; the recursion depth
    /// is bounded, so even adversarial weights terminate.
    pub fn to_quads(&self, tolerance: f64) -> SmallVec<[QuadBez; 8]> {
        fn rec(conic: &Conic, tolerance: f64, depth: usize, out: &mut SmallVec<[QuadBez; 8]>) {
            let quad = QuadBez::new(conic.p0, conic.p1, conic.p2);
            let conic_mid = conic.eval(0.5);
            let quad_mid = ((conic.p0.to_vec2()
                + conic.p1.to_vec2() * 2.0
                + conic.p2.to_vec2())
                * 0.25)
                .to_point();
            if depth == 0 || conic_mid.distance_squared(quad_mid) <= tolerance * tolerance {
                out.push(quad);
            } else {
                let (left, right) = conic.subdivide();
                rec(&left, tolerance, depth - 1, out);
                rec(&right, tolerance, depth - 1, out);
            }
        }
        let mut out = SmallVec::new();
        if !(self.weight.is_finite() && self.weight > 0.0) {
            // Degenerate weight; fall back to the chord.
            out.push(QuadBez::new(self.p0, self.p0.midpoint(self.p2), self.p2));
            return out;
        }
        rec(self, tolerance.max(1e-12), 10, &mut out);
        out
    }

    /// Is this conic finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.weight.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn unit_quarter() -> Conic {
        // Quarter of the unit circle from (1, 0) to (0, 1).
        Conic::new((1.0, 0.0), (1.0, 1.0), (0.0, 1.0), FRAC_1_SQRT_2)
    }

    #[test]
    fn conic_on_circle() {
        let c = unit_quarter();
        for i in 0..=16 {
            let t = (i as f64) / 16.0;
            let r = c.eval(t).to_vec2().hypot();
            assert!((r - 1.0).abs() < 1e-14, "t={t} r={r}");
        }
    }

    #[test]
    fn conic_endpoints() {
        let c = unit_quarter();
        assert_eq!(c.eval(0.0), c.p0);
        assert_eq!(c.eval(1.0), c.p2);
    }

    #[test]
    fn conic_subdivide_stays_on_circle() {
        let (l, r) = unit_quarter().subdivide();
        for c in [l, r] {
            for i in 0..=8 {
                let t = (i as f64) / 8.0;
                assert!((c.eval(t).to_vec2().hypot() - 1.0).abs() < 1e-14);
            }
        }
        assert_eq!(l.p2, r.p0);
    }

    #[test]
    fn conic_tangent_direction() {
        let c = unit_quarter();
        // At the start of the quarter circle the tangent points straight up.
        let t0 = c.tangent(0.0);
        assert!(t0.x.abs() < 1e-12 && t0.y > 0.0);
        // At the end it points in -x.
        let t1 = c.tangent(1.0);
        assert!(t1.y.abs() < 1e-12 && t1.x < 0.0);
    }

    #[test]
    fn conic_to_quads_accuracy() {
        let c = unit_quarter();
        let tolerance = 1e-4;
        let quads = c.to_quads(tolerance);
        assert!(quads.len() > 1);
        // Quad chains stay close to the unit circle.
        for q in &quads {
            for i in 0..=8 {
                let t = (i as f64) / 8.0;
                let r = crate::ParamCurve::eval(q, t).to_vec2().hypot();
                assert!((r - 1.0).abs() < 2.0 * tolerance, "r={r}");
            }
        }
        // And the chain is contiguous.
        for pair in quads.windows(2) {
            assert_eq!(pair[0].p2, pair[1].p0);
        }
    }

    #[test]
    fn conic_degenerate_weight() {
        let c = Conic::new((0.0, 0.0), (1.0, 1.0), (2.0, 0.0), f64::NAN);
        let quads = c.to_quads(1e-4);
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].p0, Point::new(0.0, 0.0));
        assert_eq!(quads[0].p2, Point::new(2.0, 0.0));
    }
}
