//! Marching-cubes surface extraction.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: DensityField     - X × Y × Z f32 samples                │
//! │  config: MeshConfig      - isolevel, axis scale, boundary       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 PHASE 1: Cube Classification                    │
//! │  For each cube in [0, X-1) × [0, Y-1) × [0, Z-1):               │
//! │    Load 8 corner densities (outside field => boundary)          │
//! │    Bit i set when corner i < isolevel                           │
//! │    Early-out when EDGE_TABLE[config] == 0                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 PHASE 2: Edge Interpolation                     │
//! │  For each crossing edge: p0 + mu * (p1 - p0)                    │
//! │    mu = clamp((iso - v0) / (v1 - v0), 0, 1), 0.5 if degenerate  │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 PHASE 3: Triangle Emission                      │
//! │  For each edge triple in TRI_TABLE[config]:                     │
//! │    normal = normalize((v2 - v0) × (v1 - v0))                    │
//! │    push 3 vertices, positions × axis scale, uv = 0              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  vertices: Vec<Vertex>   - unindexed, 3 per triangle            │
//! │  bounds: AABB            - mesh bounding box                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cubes are visited X-major, then Y, then Z, so vertex order is stable for a
//! given field. Normals are taken from the unscaled triangle.

mod corner_mask;
mod interpolate;
mod normals;

pub use corner_mask::{build as config_index, cube_corners};
pub use interpolate::{edge_mu, interpolate_edge};
pub use normals::face_normal;

use crate::edge_table::{corner_position, EDGE_CORNERS, EDGE_TABLE};
use crate::field::DensityField;
use crate::tri_table::triangles;
use crate::types::{MeshConfig, MeshOutput};

/// Extract the isosurface of `field` as a triangle soup.
#[cfg_attr(feature = "trace_spans", tracing::instrument(skip_all, name = "mc::extract"))]
pub fn extract(field: &DensityField, config: &MeshConfig) -> MeshOutput {
  let mut output = MeshOutput::new();
  extract_into(field, config, &mut output);
  output
}

/// Extract into `output`, clearing it first and reusing its allocation.
pub fn extract_into(field: &DensityField, config: &MeshConfig, output: &mut MeshOutput) {
  output.clear();

  let dims = field.dims();
  for x in 0..dims.x.saturating_sub(1) {
    for y in 0..dims.y.saturating_sub(1) {
      for z in 0..dims.z.saturating_sub(1) {
        polygonise_cube(field, x, y, z, config, output);
      }
    }
  }
}

/// Emit the triangles of cube `(x, y, z)`.
#[inline]
pub fn polygonise_cube(
  field: &DensityField,
  x: usize,
  y: usize,
  z: usize,
  config: &MeshConfig,
  output: &mut MeshOutput,
) {
  let values = cube_corners(field, x, y, z, config.boundary_density);
  polygonise(&values, [x, y, z], config, output);
}

/// Emit the triangles of a cube at `origin` with corner densities `values`.
pub fn polygonise(values: &[f32; 8], origin: [usize; 3], config: &MeshConfig, output: &mut MeshOutput) {
  let cube_config = config_index(values, config.isolevel);
  let edge_mask = EDGE_TABLE[cube_config as usize];
  if edge_mask == 0 {
    return;
  }

  let base = [origin[0] as f32, origin[1] as f32, origin[2] as f32];
  let corner = |c: u8| -> [f32; 3] {
    let offset = corner_position(c);
    [base[0] + offset[0], base[1] + offset[1], base[2] + offset[2]]
  };

  let mut edge_points = [[0.0f32; 3]; 12];
  for (edge, point) in edge_points.iter_mut().enumerate() {
    if edge_mask & (1 << edge) == 0 {
      continue;
    }
    let [c0, c1] = EDGE_CORNERS[edge];
    *point = interpolate_edge(
      config.isolevel,
      corner(c0),
      corner(c1),
      values[c0 as usize],
      values[c1 as usize],
    );
  }

  let scale = config.axis_scale;
  let scaled = |p: [f32; 3]| [p[0] * scale[0], p[1] * scale[1], p[2] * scale[2]];

  for [e0, e1, e2] in triangles(cube_config) {
    let (v0, v1, v2) = (edge_points[e0], edge_points[e1], edge_points[e2]);
    let normal = face_normal(v0, v1, v2);
    output.push_triangle([scaled(v0), scaled(v1), scaled(v2)], normal);
  }
}
