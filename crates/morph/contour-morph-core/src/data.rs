//! Keyframe timeline data model.
//!
//! Keyframes live in an index-addressed list kept ascending by time. Edits go
//! through read-modify-write at an index (`get` / `set`) rather than shared
//! mutable references into the list.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};
use crate::interp::Curve;
use crate::shape::Shape;

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoopMode {
    /// Play to the end and hold the last keyframe.
    Once,
    /// Wrap back to the start, blending the last keyframe into the first.
    #[default]
    Loop,
    /// Reflect back and forth between 0 and the duration.
    PingPong,
}

/// A shape at a point in time.
///
/// The curve and align offset govern the segment *arriving* at this keyframe.
#[derive(Clone, Debug)]
pub struct Keyframe {
    pub time: f32,
    /// `None` hides the contour at this keyframe.
    pub shape: Option<Arc<Shape>>,
    pub scale: f32,
    pub curve: Curve,
    /// Jump to this keyframe without interpolating from the previous one.
    pub instant: bool,
    /// Ring-index rotation applied to this keyframe's shape when blending into it.
    pub align_offset: i32,
}

impl Keyframe {
    /// Keyframe at `time` (negative or non-finite times become 0) with unit scale
    /// and a linear curve.
    pub fn new(time: f32, shape: Option<Arc<Shape>>) -> Self {
        Self {
            time: sanitize_time(time),
            shape,
            scale: 1.0,
            curve: Curve::Linear,
            instant: false,
            align_offset: 0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_instant(mut self, instant: bool) -> Self {
        self.instant = instant;
        self
    }

    pub fn with_align_offset(mut self, offset: i32) -> Self {
        self.align_offset = offset;
        self
    }

    pub fn resolution(&self) -> Option<usize> {
        self.shape.as_ref().map(|s| s.resolution())
    }
}

#[inline]
fn sanitize_time(time: f32) -> f32 {
    if time.is_finite() {
        time.max(0.0)
    } else {
        0.0
    }
}

/// Two keyframes blended into one another whose shapes differ in resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionMismatch {
    pub from_index: usize,
    pub to_index: usize,
    pub from_resolution: usize,
    pub to_resolution: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    pub keyframes: Vec<Keyframe>,
    pub loop_mode: LoopMode,
    /// Positive values override the derived duration.
    pub explicit_duration: f32,
}

impl Timeline {
    pub fn new(loop_mode: LoopMode) -> Self {
        Self {
            keyframes: Vec::new(),
            loop_mode,
            explicit_duration: 0.0,
        }
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.explicit_duration = duration;
        self
    }

    pub fn with_keyframes(mut self, keyframes: Vec<Keyframe>) -> Self {
        self.keyframes = keyframes;
        self
    }

    /// Explicit duration when positive, else the last keyframe's time, else 1.
    pub fn duration(&self) -> f32 {
        if self.explicit_duration > 0.0 {
            return self.explicit_duration;
        }
        match self.keyframes.last() {
            Some(k) => k.time,
            None => 1.0,
        }
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Keyframe> {
        self.keyframes.get(index)
    }

    /// Write an edited copy back at `index`. Does not reorder; call
    /// [`sort_by_time`](Self::sort_by_time) after moving a keyframe in time.
    pub fn set(&mut self, index: usize, keyframe: Keyframe) -> Result<()> {
        let len = self.keyframes.len();
        let slot = self
            .keyframes
            .get_mut(index)
            .ok_or(MorphError::KeyframeOutOfRange { index, len })?;
        *slot = keyframe;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Keyframe> {
        let len = self.keyframes.len();
        if index >= len {
            return Err(MorphError::KeyframeOutOfRange { index, len });
        }
        Ok(self.keyframes.remove(index))
    }

    /// Insert after any keyframes with an equal or earlier time; returns the index used.
    pub fn insert_sorted(&mut self, keyframe: Keyframe) -> usize {
        let index = self.keyframes.partition_point(|k| k.time <= keyframe.time);
        self.keyframes.insert(index, keyframe);
        index
    }

    /// Stable sort by time.
    pub fn sort_by_time(&mut self) {
        self.keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    /// Check authoring invariants: finite non-negative times in ascending order
    /// and finite non-negative scales.
    pub fn validate(&self) -> Result<()> {
        let mut previous = 0.0f32;
        for (index, k) in self.keyframes.iter().enumerate() {
            if !k.time.is_finite() || k.time < 0.0 {
                return Err(MorphError::InvalidTime {
                    index,
                    time: k.time,
                });
            }
            if index > 0 && k.time < previous {
                return Err(MorphError::UnorderedKeyframes {
                    index,
                    time: k.time,
                    previous,
                });
            }
            if !k.scale.is_finite() || k.scale < 0.0 {
                return Err(MorphError::InvalidScale {
                    index,
                    scale: k.scale,
                });
            }
            previous = k.time;
        }
        Ok(())
    }

    /// Segments whose endpoint shapes differ in resolution, including the
    /// last-to-first wrap segment in `Loop` mode. Each one is logged as a warning;
    /// evaluation still blends them.
    pub fn resolution_mismatches(&self) -> Vec<ResolutionMismatch> {
        let n = self.keyframes.len();
        let mut pairs: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
        if self.loop_mode == LoopMode::Loop && n > 1 {
            pairs.push((n - 1, 0));
        }

        let mut out = Vec::new();
        for (from_index, to_index) in pairs {
            let from = self.keyframes[from_index].resolution();
            let to = self.keyframes[to_index].resolution();
            if let (Some(from_resolution), Some(to_resolution)) = (from, to) {
                if from_resolution != to_resolution {
                    log::warn!(
                        "keyframes {from_index} -> {to_index} blend rings of {from_resolution} and {to_resolution} points"
                    );
                    out.push(ResolutionMismatch {
                        from_index,
                        to_index,
                        from_resolution,
                        to_resolution,
                    });
                }
            }
        }
        out
    }
}
