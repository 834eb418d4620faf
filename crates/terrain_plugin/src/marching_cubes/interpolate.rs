//! Edge crossing interpolation.

use crate::constants::INTERPOLATION_EPSILON;

/// Fraction along an edge from `v0` to `v1` where the density reaches
/// `isolevel`, clamped to `[0, 1]`.
///
/// Returns exactly `0.5` when `|v1 - v0| <= 1e-5`.
#[inline(always)]
pub fn edge_mu(isolevel: f32, v0: f32, v1: f32) -> f32 {
  let denom = v1 - v0;
  if denom.abs() > INTERPOLATION_EPSILON {
    ((isolevel - v0) / denom).clamp(0.0, 1.0)
  } else {
    0.5
  }
}

/// Crossing point on the segment `p0..p1`.
#[inline(always)]
pub fn interpolate_edge(isolevel: f32, p0: [f32; 3], p1: [f32; 3], v0: f32, v1: f32) -> [f32; 3] {
  let mu = edge_mu(isolevel, v0, v1);
  [
    p0[0] + mu * (p1[0] - p0[0]),
    p0[1] + mu * (p1[1] - p0[1]),
    p0[2] + mu * (p1[2] - p0[2]),
  ]
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
