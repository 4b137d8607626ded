// Copyright 2026 the Arko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elliptical arc path construction and arc-length measurement.
//!
//! The arko library turns arc descriptions into exact piecewise curve
//! representations (rational quadratic segments, ≤ 90° each), accumulates
//! them into paths, and answers arc-length-parameterized position and
//! tangent queries over the result. It is intended as the geometry core of
//! a 2D vector graphics pipeline; rasterization, stroking and paints live
//! elsewhere.
//!
//! # Examples
//!
//! Building a quarter-circle arc and sampling it by travelled distance:
//! ```
//! use arko::{PathBuilder, PathMeasure, Rect};
//!
//! let mut builder = PathBuilder::new();
//! builder.add_arc(Rect::new(-100.0, -100.0, 100.0, 100.0), 0.0, 90.0);
//! let path = builder.finish();
//!
//! let measure = PathMeasure::new(&path, false);
//! assert!((measure.length() - 50.0 * std::f64::consts::PI).abs() < 0.1);
//! let (pos, tan) = measure.pos_tan(0.0).unwrap();
//! assert!((pos.x - 100.0).abs() < 1e-9);
//! assert!(tan.hypot() > 0.0);
//! ```
//!
//! Angles are in degrees, with 0° on the positive x-axis. A positive sweep
//! travels in the direction of decreasing y (clockwise when y points up).
//! Malformed input never panics: non-finite geometry degrades to empty or
//! point output, and out-of-range queries are clamped.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]

mod arc;
mod conic;
mod line;
mod measure;
mod param_curve;
mod path;
mod point;
mod quadbez;
mod rect;
mod vec2;

pub use crate::arc::*;
pub use crate::conic::*;
pub use crate::line::*;
pub use crate::measure::*;
pub use crate::param_curve::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::rect::*;
pub use crate::vec2::*;

/// The default accuracy for methods taking an `accuracy` argument.
pub const DEFAULT_ACCURACY: f64 = 1e-6;
