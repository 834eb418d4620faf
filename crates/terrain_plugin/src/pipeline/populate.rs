//! Stage 1: Populate
//!
//! Fills a chunk's density field. Each worker owns a disjoint run of X slabs,
//! so the writes need no synchronization; the call returns once all of them
//! are done.

use terrain_noise::NoisePrimitive;
use web_time::Instant;

use crate::density::DensitySynthesizer;
use crate::field::DensityField;
use crate::seed::GenerationContext;
use crate::threading::WorkerPool;
use crate::types::ChunkCoord;

/// Write every sample of `field` for `coord` under `ctx`.
///
/// Returns the elapsed time in microseconds. The result does not depend on the
/// pool's worker count.
#[cfg_attr(feature = "trace_spans", tracing::instrument(skip_all, name = "pipeline::populate"))]
pub fn populate_field<N: NoisePrimitive>(
  pool: &WorkerPool,
  synth: &DensitySynthesizer<N>,
  field: &mut DensityField,
  coord: ChunkCoord,
  ctx: &GenerationContext,
) -> u64 {
  let start = Instant::now();
  let dims = field.dims();
  let seed = ctx.seed;

  pool.fill_x_slabs(field, |xs, values| {
    synth.fill_slabs(xs, dims, coord, seed, values);
  });

  start.elapsed().as_micros() as u64
}

#[cfg(test)]
#[path = "populate_test.rs"]
mod populate_test;
