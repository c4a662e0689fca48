//! Shared JSON fixtures for contour-morph tests and benches.
//!
//! Every fixture is registered by name in `fixtures/manifest.json` at the
//! workspace root, grouped by kind.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    timelines: HashMap<String, String>,
    shapes: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct KeyPointsFile {
    key_points: Vec<[f32; 2]>,
}

fn fixture_path(kind: &str, entries: &HashMap<String, String>, name: &str) -> Result<PathBuf> {
    let rel = entries.get(name).ok_or_else(|| {
        let mut known: Vec<&str> = entries.keys().map(String::as_str).collect();
        known.sort_unstable();
        anyhow!("unknown {kind} fixture '{name}' (known: {})", known.join(", "))
    })?;
    Ok(Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../../fixtures")
        .join(rel))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn parse<T: DeserializeOwned>(path: &Path) -> Result<T> {
    serde_json::from_str(&read(path)?)
        .with_context(|| format!("failed to parse JSON fixture {}", path.display()))
}

fn sorted_names(entries: &HashMap<String, String>) -> Vec<String> {
    let mut names: Vec<String> = entries.keys().cloned().collect();
    names.sort();
    names
}

/// Stored timeline documents (`parse_stored_timeline_json` input).
pub mod timelines {
    use super::*;

    pub fn keys() -> Vec<String> {
        sorted_names(&MANIFEST.timelines)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        fixture_path("timeline", &MANIFEST.timelines, name)
    }

    pub fn json(name: &str) -> Result<String> {
        read(&path(name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        parse(&path(name)?)
    }
}

/// Raw closed-polygon key points for resampling.
pub mod shapes {
    use super::*;

    pub fn keys() -> Vec<String> {
        sorted_names(&MANIFEST.shapes)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        fixture_path("shape", &MANIFEST.shapes, name)
    }

    pub fn key_points(name: &str) -> Result<Vec<[f32; 2]>> {
        let file: KeyPointsFile = parse(&path(name)?)?;
        Ok(file.key_points)
    }
}
