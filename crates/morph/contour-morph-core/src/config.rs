//! Core configuration for contour-morph-core.

use serde::{Deserialize, Serialize};

/// Numeric thresholds and buffer hints shared by the evaluator and mesh builder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keyframe (or wrap) segments shorter than this snap instantly to their destination.
    pub segment_epsilon: f32,
    /// Interpolated scales below this collapse the whole ring onto the center.
    pub scale_epsilon: f32,
    /// Bake resolution used by stored documents that do not specify one.
    pub default_resolution: usize,
    /// Uniform RGBA written to every vertex.
    pub vertex_color: [f32; 4],
    /// Ring resolution to pre-reserve buffer capacity for (0 = lazy).
    pub initial_resolution_hint: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segment_epsilon: 1e-5,
            scale_epsilon: 1e-5,
            default_resolution: 64,
            vertex_color: [1.0, 1.0, 1.0, 1.0],
            initial_resolution_hint: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "default_resolution": 128 }"#).unwrap();
        assert_eq!(cfg.default_resolution, 128);
        assert_eq!(cfg.vertex_color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(cfg.segment_epsilon, Config::default().segment_epsilon);
    }
}
