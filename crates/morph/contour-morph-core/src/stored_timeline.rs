use hashbrown::HashMap;
use serde::Deserialize;

use crate::config::Config;
use crate::data::{Keyframe, LoopMode, Timeline};
use crate::error::Result;
use crate::interp::Curve;
use crate::shape::{Shape, ShapeLibrary};

/// A parsed document: the baked shapes plus the timeline referencing them.
#[derive(Clone, Debug)]
pub struct StoredTimeline {
    pub name: String,
    pub resolution: usize,
    pub library: ShapeLibrary,
    pub timeline: Timeline,
}

/// Public API: parse a stored timeline JSON document into baked shapes and a
/// validated [`Timeline`].
///
/// Notes:
/// - Shapes are given as raw key points and baked at the document `resolution`
///   (or `cfg.default_resolution`).
/// - Keyframe `shape` names resolve through the baked library; omit `shape`
///   for a hidden keyframe.
/// - Omitted keyframe fields default to scale 1, linear curve, not instant, offset 0.
/// - `duration` <= 0 (or omitted) derives the duration from the last keyframe.
pub fn parse_stored_timeline_json(s: &str, cfg: &Config) -> Result<StoredTimeline> {
    let doc: StoredDocument = serde_json::from_str(s)?;
    let resolution = doc.resolution.unwrap_or(cfg.default_resolution);

    let mut library = ShapeLibrary::new();
    for (name, key_points) in &doc.shapes {
        library.insert(name.clone(), Shape::bake(key_points, resolution)?);
    }

    let mut keyframes = Vec::with_capacity(doc.keyframes.len());
    for k in doc.keyframes {
        let shape = k.shape.as_deref().map(|n| library.resolve(n)).transpose()?;
        keyframes.push(
            Keyframe::new(k.time, shape)
                .with_scale(k.scale)
                .with_curve(k.curve)
                .with_instant(k.instant)
                .with_align_offset(k.align_offset),
        );
    }

    let timeline = Timeline::new(doc.loop_mode)
        .with_duration(doc.duration)
        .with_keyframes(keyframes);
    timeline.validate()?;
    let mismatches = timeline.resolution_mismatches().len();

    log::debug!(
        "loaded timeline '{}': {} shape(s), {} keyframe(s), {} resolution mismatch(es)",
        doc.name,
        library.len(),
        timeline.len(),
        mismatches
    );
    Ok(StoredTimeline {
        name: doc.name,
        resolution,
        library,
        timeline,
    })
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredDocument {
    #[serde(default)]
    name: String,
    #[serde(default)]
    resolution: Option<usize>,
    #[serde(default)]
    loop_mode: LoopMode,
    #[serde(default)]
    duration: f32,
    shapes: HashMap<String, Vec<[f32; 2]>>,
    keyframes: Vec<StoredKeyframe>,
}

#[derive(Debug, Deserialize)]
struct StoredKeyframe {
    time: f32,
    #[serde(default)]
    shape: Option<String>,
    #[serde(default = "unit_scale")]
    scale: f32,
    #[serde(default)]
    curve: Curve,
    #[serde(default)]
    instant: bool,
    #[serde(default)]
    align_offset: i32,
}

fn unit_scale() -> f32 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MorphError;

    #[test]
    fn unknown_shape_is_reported() {
        let json = r#"{ "shapes": {}, "keyframes": [ { "time": 0, "shape": "ghost" } ] }"#;
        let err = parse_stored_timeline_json(json, &Config::default()).unwrap_err();
        assert_eq!(
            err,
            MorphError::UnknownShape {
                name: "ghost".into()
            }
        );
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_stored_timeline_json("{ nope", &Config::default()).unwrap_err();
        assert!(matches!(err, MorphError::Parse { .. }));
    }

    #[test]
    fn unordered_keyframes_are_rejected() {
        let json = r#"{ "shapes": {}, "keyframes": [ { "time": 1 }, { "time": 0.5 } ] }"#;
        let err = parse_stored_timeline_json(json, &Config::default()).unwrap_err();
        assert!(matches!(err, MorphError::UnorderedKeyframes { index: 1, .. }));
    }
}
