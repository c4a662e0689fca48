//! Interpolation helpers and easing curves.
//!
//! `functions` holds the scalar/point lerps and cubic-bezier timing shared by
//! the resampler, evaluator and mesh builder; `curve` holds the easing
//! abstraction attached to keyframes.

pub mod curve;
pub mod functions;

pub use curve::{Curve, CurveFn, CurveKey};
