//! Contour Morph Core (engine-agnostic)
//!
//! Morphs closed 2D contours into one another over a keyframe timeline and
//! emits a triangle-fan ring mesh per tick. The pipeline is one-way:
//! key points are baked into fixed-resolution [`Shape`]s by [`resample`],
//! shapes are referenced by [`Keyframe`]s in a [`Timeline`], [`evaluate`]
//! maps a time value onto a [`BlendState`], and [`MeshBuilder`] turns that
//! state into reusable vertex/index buffers for an external renderer.

pub mod config;
pub mod data;
pub mod error;
pub mod interp;
pub mod mesh;
pub mod outputs;
pub mod player;
pub mod resample;
pub mod sampling;
pub mod shape;
pub mod stored_timeline;
pub mod time;

// Re-exports for consumers (hosts and authoring tools)
pub use config::Config;
pub use data::{Keyframe, LoopMode, ResolutionMismatch, Timeline};
pub use error::{MorphError, Result};
pub use interp::{Curve, CurveFn, CurveKey};
pub use mesh::{MeshBuffers, MeshBuilder};
pub use outputs::{BlendState, PlaybackStatus};
pub use player::{Player, PlayerCommand};
pub use resample::{perimeter, resample};
pub use sampling::{evaluate, evaluate_with};
pub use shape::{Shape, ShapeLibrary};
pub use stored_timeline::{parse_stored_timeline_json, StoredTimeline};
pub use time::effective_time;
