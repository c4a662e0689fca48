//! Evaluator output contracts.

use serde::{Deserialize, Serialize};

use crate::data::Keyframe;
use crate::shape::Shape;

/// Whether the host should keep advancing time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    #[default]
    Continuing,
    /// `Once` mode ran past the duration; the frame is held on the last keyframe.
    FinishedAtEnd,
}

/// Blend between two shapes produced for a single time value.
///
/// Recomputed each call and borrowed from the evaluated timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendState<'a> {
    pub shape_a: Option<&'a Shape>,
    pub shape_b: Option<&'a Shape>,
    /// Eased blend factor; may leave [0,1] when the curve overshoots.
    pub blend: f32,
    pub scale_a: f32,
    pub scale_b: f32,
    pub align_offset: i32,
}

impl<'a> BlendState<'a> {
    /// Nothing to draw.
    pub fn empty() -> Self {
        Self {
            shape_a: None,
            shape_b: None,
            blend: 0.0,
            scale_a: 0.0,
            scale_b: 0.0,
            align_offset: 0,
        }
    }

    /// Identity blend holding a single keyframe.
    pub fn hold(key: &'a Keyframe) -> Self {
        let shape = key.shape.as_deref();
        Self {
            shape_a: shape,
            shape_b: shape,
            blend: 0.0,
            scale_a: key.scale,
            scale_b: key.scale,
            align_offset: 0,
        }
    }

    /// Segment from `from` to `to` at eased `blend`; `to` owns the align offset.
    pub fn between(from: &'a Keyframe, to: &'a Keyframe, blend: f32) -> Self {
        Self {
            shape_a: from.shape.as_deref(),
            shape_b: to.shape.as_deref(),
            blend,
            scale_a: from.scale,
            scale_b: to.scale,
            align_offset: to.align_offset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shape_a.is_none() && self.shape_b.is_none()
    }

    /// Scale at the current blend.
    pub fn current_scale(&self) -> f32 {
        crate::interp::functions::lerp_f32(self.scale_a, self.scale_b, self.blend)
    }
}

impl Default for BlendState<'_> {
    fn default() -> Self {
        Self::empty()
    }
}
