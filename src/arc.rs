// Copyright 2026 the Arko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single elliptical arc segment, and its conversion to curve segments.

use arrayvec::ArrayVec;

use crate::{Conic, Line, PathSeg, Point, Rect, Vec2};

/// Sweeps this close to (or beyond) a full turn close to an exact full
/// ellipse, in degrees.
const FULL_SWEEP_EPSILON: f64 = 1e-7;

/// A single elliptical arc segment.
///
/// The arc traces part of the ellipse inscribed in `bounds`, from
/// `start_angle` through `sweep_angle`, both in degrees. Angle 0° lies on
/// the positive x-axis; a positive sweep travels toward negative y
/// (clockwise when y points up). The point at angle θ is
/// `center + (rx·cos θ, −ry·sin θ)`.
///
/// Any finite angle magnitude is meaningful: sweeps of a full turn or more
/// describe exactly one traversal of the ellipse, and a zero sweep
/// describes the single point at `start_angle`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    /// The bounding rectangle of the ellipse.
    ///
    /// Corners may be given in either order; the bounds are normalized
    /// with [`Rect::abs`] before use. Zero-area bounds are permitted.
    pub bounds: Rect,
    /// The start angle in degrees.
    pub start_angle: f64,
    /// The signed sweep angle in degrees.
    pub sweep_angle: f64,
}

impl Arc {
    /// Create a new arc.
    #[inline(always)]
    pub fn new(bounds: impl Into<Rect>, start_angle: f64, sweep_angle: f64) -> Arc {
        Arc {
            bounds: bounds.into(),
            start_angle,
            sweep_angle,
        }
    }

    /// Is this arc finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.bounds.is_finite() && self.start_angle.is_finite() && self.sweep_angle.is_finite()
    }

    /// The point where the arc starts.
    #[inline]
    pub fn start_point(&self) -> Point {
        oval_point(self.bounds.abs(), self.start_angle)
    }

    /// The point where the arc ends, after full-sweep clamping.
    #[inline]
    pub fn end_point(&self) -> Point {
        let sweep = sweep_clamped(self.sweep_angle);
        if sweep.abs() == 360.0 {
            self.start_point()
        } else {
            oval_point(self.bounds.abs(), self.start_angle + sweep)
        }
    }

    /// Convert the arc to a minimal sequence of curve segments.
    ///
    /// The sweep is first clamped to one full turn, then split at quadrant
    /// boundaries so that no piece subtends more than 90°; each piece is
    /// an exact conic. Pieces narrow enough that the conic weight rounds
    /// to 1 degenerate to a short straight segment.
    ///
    /// Returns an empty list for a zero sweep (the arc is the single point
    /// [`start_point`](Self::start_point)) and for non-finite bounds or
    /// angles.
    pub fn to_segs(&self) -> ArrayVec<PathSeg, 5> {
        let mut segs = ArrayVec::new();
        if !self.is_finite() {
            return segs;
        }
        let sweep = sweep_clamped(self.sweep_angle);
        if sweep == 0.0 {
            return segs;
        }
        let bounds = self.bounds.abs();
        let full_turn = sweep.abs() == 360.0;
        let n = (sweep.abs() / 90.0).ceil() as usize;
        let step = sweep / n as f64;
        let weight = (0.5 * step.to_radians()).cos();
        let mut angle0 = self.start_angle;
        let mut p0 = oval_point(bounds, angle0);
        let start = p0;
        for i in 0..n {
            let angle1 = angle0 + step;
            let p2 = if full_turn && i == n - 1 {
                // A full traversal closes exactly, immune to roundoff in
                // the accumulated angle.
                start
            } else {
                oval_point(bounds, angle1)
            };
            if weight >= 1.0 {
                // The piece is so narrow that the rational representation
                // collapses; the chord is exact to f64 precision.
                segs.push(PathSeg::Line(Line::new(p0, p2)));
            } else {
                let p1 = oval_control(bounds, 0.5 * (angle0 + angle1), weight);
                segs.push(PathSeg::Conic(Conic::new(p0, p1, p2, weight)));
            }
            angle0 = angle1;
            p0 = p2;
        }
        segs
    }
}

/// The point at `angle_deg` degrees on the ellipse inscribed in `bounds`.
///
/// Angle 0° is on the positive x-axis; positive angles travel toward
/// negative y (clockwise when y points up).
#[inline]
pub fn oval_point(bounds: Rect, angle_deg: f64) -> Point {
    let center = bounds.center();
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    center + Vec2::new(0.5 * bounds.width() * cos, -(0.5 * bounds.height() * sin))
}

// The control point of a conic piece: the on-oval direction at the piece's
// angular midpoint, pushed out to the tangent intersection by 1/weight.
fn oval_control(bounds: Rect, mid_angle_deg: f64, weight: f64) -> Point {
    let center = bounds.center();
    let (sin, cos) = mid_angle_deg.to_radians().sin_cos();
    let scale = weight.recip();
    center
        + Vec2::new(
            0.5 * bounds.width() * cos * scale,
            -(0.5 * bounds.height() * sin * scale),
        )
}

/// Clamp a sweep to at most one full traversal of the ellipse.
///
/// Sweeps whose magnitude reaches or exceeds 360° (less a small epsilon,
/// favoring full-circle closure) become exactly ±360°; smaller sweeps pass
/// through unchanged. NaN propagates.
#[inline]
pub fn sweep_clamped(sweep_deg: f64) -> f64 {
    if sweep_deg.abs() >= 360.0 - FULL_SWEEP_EPSILON {
        360.0_f64.copysign(sweep_deg)
    } else {
        sweep_deg
    }
}

/// The signed sweep travelling from `start_deg` to `end_deg` in the given
/// direction, HTML-canvas style.
///
/// Clockwise travel (`anticlockwise == false`) yields a sweep in
/// [0°, 360°), anticlockwise travel one in (−360°, 0°]; a difference of a
/// full turn or more in the requested direction yields exactly ±360°. The
/// start angle itself is never altered, so the two directions over the
/// same pair of angles trace geometrically complementary arcs: their sweep
/// magnitudes sum to 360° whenever the angles differ (mod 360°).
pub fn directed_sweep(start_deg: f64, end_deg: f64, anticlockwise: bool) -> f64 {
    let delta = end_deg - start_deg;
    if anticlockwise {
        if delta <= -360.0 {
            return -360.0;
        }
        let d = delta.rem_euclid(360.0);
        if d == 0.0 {
            0.0
        } else {
            d - 360.0
        }
    } else {
        if delta >= 360.0 {
            return 360.0;
        }
        delta.rem_euclid(360.0)
    }
}
