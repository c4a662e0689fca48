//! Easing curves attached to keyframes.
//!
//! A curve maps the linear progress through a segment (0..1) onto the blend
//! factor handed to the mesh builder. Output is never clamped: `BackOut`,
//! `Keys` and bezier control points outside [0,1] overshoot on purpose.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::functions::{bezier_ease_t, lerp_f32};

/// Overshoot amount used by `BackOut` (matches the common easing tables).
const BACK_C1: f32 = 1.70158;

/// One control key of a piecewise-linear [`Curve::Keys`] curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub t: f32,
    pub value: f32,
}

/// Caller-supplied easing function.
#[derive(Clone)]
pub struct CurveFn(Arc<dyn Fn(f32) -> f32 + Send + Sync>);

impl CurveFn {
    pub fn new(f: impl Fn(f32) -> f32 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn call(&self, t: f32) -> f32 {
        (self.0)(t)
    }
}

impl fmt::Debug for CurveFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CurveFn(..)")
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum Curve {
    #[default]
    Linear,
    /// Cubic ease-in.
    EaseIn,
    /// Cubic ease-out.
    EaseOut,
    /// Cubic ease-in-out.
    EaseInOut,
    /// Ease-out that overshoots past 1 before settling.
    BackOut,
    /// Holds 0 until the segment completes.
    Step,
    /// CSS-style timing function with control points (x1, y1, x2, y2).
    CubicBezier([f32; 4]),
    /// Piecewise-linear keys, ascending by `t`.
    Keys(Vec<CurveKey>),
    #[serde(skip)]
    Custom(CurveFn),
}

impl Curve {
    pub fn custom(f: impl Fn(f32) -> f32 + Send + Sync + 'static) -> Self {
        Curve::Custom(CurveFn::new(f))
    }

    /// Evaluate the curve at normalized progress `t`.
    pub fn sample(&self, t: f32) -> f32 {
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t * t,
            Curve::EaseOut => 1.0 - (1.0 - t).powi(3),
            Curve::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Curve::BackOut => {
                let c3 = BACK_C1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + BACK_C1 * u * u
            }
            Curve::Step => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Curve::CubicBezier([x1, y1, x2, y2]) => bezier_ease_t(t, *x1, *y1, *x2, *y2),
            Curve::Keys(keys) => sample_keys(keys, t),
            Curve::Custom(f) => f.call(t),
        }
    }
}

fn sample_keys(keys: &[CurveKey], t: f32) -> f32 {
    let (first, last) = match (keys.first(), keys.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return t,
    };
    if t <= first.t {
        return first.value;
    }
    if t >= last.t {
        return last.value;
    }
    let hi = keys.partition_point(|k| k.t <= t);
    let a = &keys[hi - 1];
    let b = &keys[hi];
    let span = b.t - a.t;
    if span <= f32::EPSILON {
        return b.value;
    }
    lerp_f32(a.value, b.value, (t - a.t) / span)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) {
        assert!((a - b).abs() <= 1e-5, "left={a} right={b}");
    }

    #[test]
    fn presets_hit_endpoints() {
        for curve in [
            Curve::Linear,
            Curve::EaseIn,
            Curve::EaseOut,
            Curve::EaseInOut,
            Curve::BackOut,
            Curve::Step,
            Curve::CubicBezier([0.42, 0.0, 0.58, 1.0]),
        ] {
            approx(curve.sample(0.0), 0.0);
            approx(curve.sample(1.0), 1.0);
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..10)
            .map(|i| Curve::BackOut.sample(i as f32 / 10.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "BackOut should exceed 1, peak={peak}");
    }

    #[test]
    fn keys_interpolate_and_extend() {
        let curve = Curve::Keys(vec![
            CurveKey { t: 0.0, value: 0.0 },
            CurveKey { t: 0.5, value: 1.5 },
            CurveKey { t: 1.0, value: 1.0 },
        ]);
        approx(curve.sample(0.25), 0.75);
        approx(curve.sample(0.75), 1.25);
        approx(curve.sample(-1.0), 0.0);
        approx(curve.sample(2.0), 1.0);
        approx(Curve::Keys(Vec::new()).sample(0.3), 0.3);
    }

    #[test]
    fn custom_curve_is_called() {
        let curve = Curve::custom(|t| 1.0 - t);
        approx(curve.sample(0.25), 0.75);
    }

    #[test]
    fn serde_round_trips_tagged_variants() {
        let json = r#"[ "EaseIn", { "CubicBezier": [0.1, 0.2, 0.3, 0.4] } ]"#;
        let curves: Vec<Curve> = serde_json::from_str(json).unwrap();
        assert!(matches!(curves[0], Curve::EaseIn));
        assert!(matches!(curves[1], Curve::CubicBezier(_)));
    }
}
