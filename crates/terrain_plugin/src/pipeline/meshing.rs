//! Stage 2: Meshing
//!
//! Thin wrapper around `marching_cubes::extract_into()` that tracks timing.

use web_time::Instant;

use crate::field::DensityField;
use crate::marching_cubes;
use crate::types::{MeshConfig, MeshOutput};

/// Mesh `field` into `output`, reusing its allocation.
///
/// Returns the elapsed time in microseconds.
#[cfg_attr(feature = "trace_spans", tracing::instrument(skip_all, name = "pipeline::mesh"))]
pub fn mesh_field(field: &DensityField, config: &MeshConfig, output: &mut MeshOutput) -> u64 {
  let start = Instant::now();
  marching_cubes::extract_into(field, config, output);
  start.elapsed().as_micros() as u64
}
