//! Contour resampling.
//!
//! Converts an arbitrary closed polygon into a ring of `target_count` points
//! spaced uniformly by arc length, so two unrelated shapes become comparable
//! index-by-index. Output keeps the input winding and starts at key point 0.

use crate::interp::functions::{distance_vec2, lerp_vec2};

/// Segments shorter than this are skipped by the perimeter walk.
const MIN_SEGMENT_LENGTH: f32 = 1e-6;

/// Closed-polygon perimeter (includes the edge from the last point back to the first).
pub fn perimeter(points: &[[f32; 2]]) -> f32 {
    edge_lengths(points).iter().sum()
}

fn edge_lengths(points: &[[f32; 2]]) -> Vec<f32> {
    let n = points.len();
    (0..n)
        .map(|i| distance_vec2(points[i], points[(i + 1) % n]))
        .collect()
}

/// Resample `key_points` (treated as a closed polygon) to `target_count`
/// points at equal arc-length steps of `perimeter / target_count`.
///
/// Fewer than three key points yield `target_count` zero points.
pub fn resample(key_points: &[[f32; 2]], target_count: usize) -> Vec<[f32; 2]> {
    let n = key_points.len();
    if n < 3 {
        return vec![[0.0, 0.0]; target_count];
    }

    let lengths = edge_lengths(key_points);
    let total: f32 = lengths.iter().sum();
    let step = if target_count > 0 {
        total / target_count as f32
    } else {
        0.0
    };

    let mut out = Vec::with_capacity(target_count);
    // Cursor: current edge and distance already walked inside it.
    let mut seg = 0usize;
    let mut along = 0.0f32;
    for k in 0..target_count {
        if k > 0 {
            along += step;
        }
        // Bounded by the edge count so float drift cannot spin forever.
        let mut advanced = 0;
        while along > lengths[seg] && advanced < n {
            along -= lengths[seg];
            seg = (seg + 1) % n;
            advanced += 1;
        }
        let len = lengths[seg];
        let frac = if len > MIN_SEGMENT_LENGTH {
            (along / len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        out.push(lerp_vec2(key_points[seg], key_points[(seg + 1) % n], frac));
    }
    out
}
