//! Baked shapes and the named shape repository.

use std::sync::Arc;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};
use crate::resample::resample;

/// Immutable closed ring of 2D points (implicit edge from last to first).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f32; 2]>", into = "Vec<[f32; 2]>")]
pub struct Shape {
    positions: Vec<[f32; 2]>,
}

impl Shape {
    pub const MIN_RESOLUTION: usize = 3;

    /// Resample `key_points` into a ring of `resolution` points.
    ///
    /// Fewer than three key points still bake (to a zero ring) but are logged.
    pub fn bake(key_points: &[[f32; 2]], resolution: usize) -> Result<Self> {
        if resolution < Self::MIN_RESOLUTION {
            return Err(MorphError::InvalidResolution { resolution });
        }
        if key_points.len() < 3 {
            log::warn!(
                "baking shape from {} key point(s); output collapses to origin",
                key_points.len()
            );
        }
        Ok(Self {
            positions: resample(key_points, resolution),
        })
    }

    /// Wrap an already-baked ring.
    pub fn from_positions(positions: Vec<[f32; 2]>) -> Result<Self> {
        if positions.len() < Self::MIN_RESOLUTION {
            return Err(MorphError::InvalidResolution {
                resolution: positions.len(),
            });
        }
        Ok(Self { positions })
    }

    #[inline]
    pub fn positions(&self) -> &[[f32; 2]] {
        &self.positions
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.positions.len()
    }
}

impl TryFrom<Vec<[f32; 2]>> for Shape {
    type Error = MorphError;

    fn try_from(positions: Vec<[f32; 2]>) -> Result<Self> {
        Shape::from_positions(positions)
    }
}

impl From<Shape> for Vec<[f32; 2]> {
    fn from(shape: Shape) -> Self {
        shape.positions
    }
}

/// Named repository of shared, read-only shapes.
#[derive(Clone, Debug, Default)]
pub struct ShapeLibrary {
    shapes: HashMap<String, Arc<Shape>>,
}

impl ShapeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a shape under `name`, replacing any previous entry, and return the shared handle.
    pub fn insert(&mut self, name: impl Into<String>, shape: Shape) -> Arc<Shape> {
        let shape = Arc::new(shape);
        self.shapes.insert(name.into(), Arc::clone(&shape));
        shape
    }

    pub fn get(&self, name: &str) -> Option<Arc<Shape>> {
        self.shapes.get(name).cloned()
    }

    /// Like [`get`](Self::get) but reports a missing name as an error.
    pub fn resolve(&self, name: &str) -> Result<Arc<Shape>> {
        self.get(name).ok_or_else(|| MorphError::UnknownShape {
            name: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }
}
