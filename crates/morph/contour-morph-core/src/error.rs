//! Error types for authoring and loading.
//!
//! Evaluation and mesh building never fail; only APIs that accept author
//! input (shape baking, timeline edits, document parsing) return these.

/// Errors raised while constructing or validating morph data.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MorphError {
    /// Shape rings need at least three points.
    #[error("Shape resolution must be at least 3, got {resolution}")]
    InvalidResolution { resolution: usize },

    /// Keyframe time is negative or not finite.
    #[error("Keyframe {index} has invalid time {time}")]
    InvalidTime { index: usize, time: f32 },

    /// Keyframe times must be non-decreasing.
    #[error("Keyframe {index} at time {time} precedes the previous keyframe at {previous}")]
    UnorderedKeyframes {
        index: usize,
        time: f32,
        previous: f32,
    },

    /// Keyframe scale is negative or not finite.
    #[error("Keyframe {index} has invalid scale {scale}")]
    InvalidScale { index: usize, scale: f32 },

    /// Index-addressed edit outside the keyframe list.
    #[error("Keyframe index {index} out of range (len {len})")]
    KeyframeOutOfRange { index: usize, len: usize },

    /// A keyframe references a shape name missing from the library.
    #[error("Unknown shape '{name}'")]
    UnknownShape { name: String },

    /// Malformed stored timeline document.
    #[error("Parse error: {reason}")]
    Parse { reason: String },
}

pub type Result<T> = std::result::Result<T, MorphError>;

impl From<serde_json::Error> for MorphError {
    fn from(err: serde_json::Error) -> Self {
        MorphError::Parse {
            reason: err.to_string(),
        }
    }
}
