//! Engine-agnostic metrics for terrain generation.
//!
//! Feature-gated and runtime-toggled; without the `metrics` feature every
//! `record_*` call is a no-op.
//!
//! # Usage
//!
//! ```ignore
//! use terrain_plugin::metrics::{GenerationMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! let metrics = world.metrics();
//! println!("avg populate: {:.0}us", metrics.avg_populate_us());
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

use crate::pipeline::{ChunkTimings, PassStats};

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Rolling window of the most recent values.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Iterate over values (oldest to newest).
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.buffer.iter()
  }

  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl RollingWindow<u64> {
  pub fn sum(&self) -> u64 {
    self.buffer.iter().sum()
  }

  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.sum() as f64 / self.buffer.len() as f64
    }
  }

  pub fn min_max(&self) -> Option<(u64, u64)> {
    let min = *self.buffer.iter().min()?;
    let max = *self.buffer.iter().max()?;
    Some((min, max))
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    // Two default passes worth of chunks
    Self::new(800)
  }
}

/// Per-chunk and per-pass generation statistics.
#[derive(Debug, Clone, Default)]
pub struct GenerationMetrics {
  /// Population time per chunk, microseconds.
  pub populate_timings: RollingWindow<u64>,
  /// Meshing time per chunk, microseconds.
  pub mesh_timings: RollingWindow<u64>,
  /// Vertex count per chunk.
  pub chunk_vertices: RollingWindow<u64>,

  /// Last completed pass.
  pub last_pass: Option<PassStats>,
  pub passes_completed: u64,
  /// Cumulative across passes.
  pub total_chunks_generated: u64,
}

impl GenerationMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear windows; cumulative counters survive.
  pub fn reset(&mut self) {
    self.populate_timings.clear();
    self.mesh_timings.clear();
    self.chunk_vertices.clear();
    self.last_pass = None;
  }

  pub fn record_chunk(&mut self, timings: ChunkTimings, vertex_count: usize) {
    if !is_enabled() {
      return;
    }
    self.populate_timings.push(timings.populate_us);
    self.mesh_timings.push(timings.mesh_us);
    self.chunk_vertices.push(vertex_count as u64);
    self.total_chunks_generated += 1;
  }

  pub fn record_pass(&mut self, stats: PassStats) {
    if !is_enabled() {
      return;
    }
    self.last_pass = Some(stats);
    self.passes_completed += 1;
  }

  pub fn avg_populate_us(&self) -> f64 {
    self.populate_timings.average()
  }

  pub fn avg_mesh_us(&self) -> f64 {
    self.mesh_timings.average()
  }

  /// Approximate vertex memory of the chunks in the window.
  pub fn vertex_memory_mb(&self) -> f64 {
    let bytes = self.chunk_vertices.sum() * std::mem::size_of::<crate::types::Vertex>() as u64;
    bytes as f64 / 1_048_576.0
  }
}
