//! Pipeline timing and summary types.

/// Wall time of each stage for one chunk, in microseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChunkTimings {
  pub populate_us: u64,
  pub mesh_us: u64,
}

impl ChunkTimings {
  #[inline]
  pub fn total_us(&self) -> u64 {
    self.populate_us + self.mesh_us
  }
}

/// Summary of one generation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
  pub generation: u64,
  pub chunks: usize,
  pub vertices: usize,
  pub triangles: usize,
  pub populate_us: u64,
  pub mesh_us: u64,
  pub elapsed_us: u64,
}

impl PassStats {
  /// Fold one chunk's results into the pass totals.
  pub fn record_chunk(&mut self, timings: ChunkTimings, vertices: usize) {
    self.chunks += 1;
    self.vertices += vertices;
    self.triangles += vertices / 3;
    self.populate_us += timings.populate_us;
    self.mesh_us += timings.mesh_us;
  }
}
