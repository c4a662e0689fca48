//! Triangle-fan ring mesh built from a [`BlendState`].
//!
//! Vertex 0 is the center, vertices `1..=resolution` the ring; triangle `i`
//! is `(0, i + 1, i + 2)` with the last one wrapping back to vertex 1.
//! Buffers are a cache keyed by ring resolution: same-size frames overwrite
//! in place and the index buffer is only rebuilt when the resolution changes.

use crate::config::Config;
use crate::interp::functions::{lerp_vec2, wrap_index};
use crate::outputs::BlendState;

const CENTER: [f32; 3] = [0.0, 0.0, 0.0];

/// Render-ready buffers. Empty when there is nothing to draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
        self.indices.clear();
    }
}

/// Single-writer mesh builder; reuse one instance per rendered contour.
#[derive(Debug)]
pub struct MeshBuilder {
    scale_epsilon: f32,
    vertex_color: [f32; 4],
    /// Ring resolution the buffers are currently laid out for (0 = none).
    resolution: usize,
    buffers: MeshBuffers,
}

impl MeshBuilder {
    pub fn new(cfg: &Config) -> Self {
        let hint = cfg.initial_resolution_hint;
        let buffers = if hint > 0 {
            MeshBuffers {
                positions: Vec::with_capacity(hint + 1),
                colors: Vec::with_capacity(hint + 1),
                indices: Vec::with_capacity(hint * 3),
            }
        } else {
            MeshBuffers::default()
        };
        Self {
            scale_epsilon: cfg.scale_epsilon,
            vertex_color: cfg.vertex_color,
            resolution: 0,
            buffers,
        }
    }

    /// Ring resolution of the last non-empty build.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Fill the buffers for `state` and return them.
    pub fn build(&mut self, state: &BlendState<'_>) -> &MeshBuffers {
        let (ring_a, ring_b) = match (state.shape_a, state.shape_b) {
            (None, None) => {
                self.buffers.clear();
                self.resolution = 0;
                return &self.buffers;
            }
            // A hidden side borrows the visible ring so the blend morphs from/to it.
            (Some(a), None) => (a.positions(), a.positions()),
            (None, Some(b)) => (b.positions(), b.positions()),
            (Some(a), Some(b)) => (a.positions(), b.positions()),
        };

        let resolution = ring_a.len();
        if resolution != self.resolution {
            self.relayout(resolution);
        }

        let positions = &mut self.buffers.positions;
        positions[0] = CENTER;
        let scale = state.current_scale();
        if scale < self.scale_epsilon || ring_b.is_empty() {
            positions[1..].fill(CENTER);
            return &self.buffers;
        }

        for (i, src) in ring_a.iter().enumerate() {
            let dst = ring_b[wrap_index(i, state.align_offset, ring_b.len())];
            let p = lerp_vec2(*src, dst, state.blend);
            positions[i + 1] = [p[0] * scale, p[1] * scale, 0.0];
        }
        &self.buffers
    }

    fn relayout(&mut self, resolution: usize) {
        log::debug!(
            "mesh ring resolution {} -> {}; rebuilding buffers",
            self.resolution,
            resolution
        );
        let vertex_count = resolution + 1;
        let buffers = &mut self.buffers;
        buffers.positions.resize(vertex_count, CENTER);
        buffers.colors.clear();
        buffers.colors.resize(vertex_count, self.vertex_color);

        buffers.indices.clear();
        buffers.indices.reserve(resolution * 3);
        for i in 0..resolution {
            let current = i as u32 + 1;
            let next = ((i + 1) % resolution) as u32 + 1;
            buffers.indices.extend_from_slice(&[0, current, next]);
        }
        self.resolution = resolution;
    }
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
