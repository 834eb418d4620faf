//! Bounded worker pool for chunk population using rayon.
//!
//! ```text
//!   X extent 16, 3 workers:
//!
//!   worker 0: x 0..5    ┐
//!   worker 1: x 5..10   ├─ disjoint &mut slabs, spawned inside one scope
//!   worker 2: x 10..16  ┘  (remainder folded into the last slice)
//!                │
//!                ▼
//!   scope returns once every slice task has finished (join barrier)
//! ```
//!
//! The pool is built once and reused for every chunk of every pass.

use std::ops::Range;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::constants::FALLBACK_WORKERS;
use crate::error::{TerrainError, TerrainResult};
use crate::field::DensityField;

/// Worker count reported by the host, or [`FALLBACK_WORKERS`].
pub fn default_workers() -> usize {
  std::thread::available_parallelism()
    .map(|n| n.get())
    .unwrap_or(FALLBACK_WORKERS)
}

/// Split `0..extent` into contiguous slices, one per worker.
///
/// Each slice gets `extent / workers` entries and the last one also takes the
/// remainder. `workers` is clamped to `extent` so no slice is empty.
pub fn partition(extent: usize, workers: usize) -> Vec<Range<usize>> {
  let workers = workers.clamp(1, extent.max(1));
  if extent == 0 {
    return Vec::new();
  }

  let per_worker = extent / workers;
  let leftover = extent % workers;

  (0..workers)
    .map(|t| {
      let start = t * per_worker;
      let mut end = start + per_worker;
      if t == workers - 1 {
        end += leftover;
      }
      start..end
    })
    .collect()
}

/// Reusable pool that fills density fields slab-parallel.
pub struct WorkerPool {
  pool: ThreadPool,
  workers: usize,
}

impl WorkerPool {
  /// Pool sized to the host's available parallelism.
  pub fn new() -> TerrainResult<Self> {
    Self::with_workers(default_workers())
  }

  /// Pool with exactly `workers` threads.
  pub fn with_workers(workers: usize) -> TerrainResult<Self> {
    if workers == 0 {
      return Err(TerrainError::InvalidConfig(
        "worker count must be at least 1".to_string(),
      ));
    }

    let pool = ThreadPoolBuilder::new()
      .num_threads(workers)
      .thread_name(|i| format!("terrain-worker-{}", i))
      .build()?;

    Ok(Self { pool, workers })
  }

  /// Pool from an optional override, falling back to [`default_workers`].
  pub fn from_override(workers: Option<usize>) -> TerrainResult<Self> {
    match workers {
      Some(n) => Self::with_workers(n),
      None => Self::new(),
    }
  }

  #[inline]
  pub fn workers(&self) -> usize {
    self.workers
  }

  /// Run `fill` once per X partition of `field`, in parallel, and return once
  /// every partition is written.
  ///
  /// `fill` receives the X range and the samples of exactly those slabs.
  pub fn fill_x_slabs<F>(&self, field: &mut DensityField, fill: F)
  where
    F: Fn(Range<usize>, &mut [f32]) + Sync,
  {
    let ranges = partition(field.dims().x, self.workers);
    let slabs = field.x_slabs_mut(&ranges);

    if slabs.len() == 1 {
      for (range, values) in slabs {
        fill(range, values);
      }
      return;
    }

    let fill = &fill;
    self.pool.scope(|s| {
      for (range, values) in slabs {
        s.spawn(move |_| fill(range, values));
      }
    });
  }
}

impl std::fmt::Debug for WorkerPool {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WorkerPool")
      .field("workers", &self.workers)
      .finish()
  }
}

#[cfg(test)]
#[path = "threading_test.rs"]
mod threading_test;
