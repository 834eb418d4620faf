//! Terrain configuration.
//!
//! Every struct deserializes with `#[serde(default)]`, so a partial document
//! overrides only the keys it names:
//!
//! ```toml
//! [chunk]
//! height = 128
//!
//! [grid]
//! half_extent_x = 4
//! half_extent_z = 4
//!
//! [density.cave]
//! intensity = 0.0
//!
//! [workers]
//! count = 2
//! ```

use std::ops::Range;

use serde::Deserialize;

use crate::chunk::DEFAULT_VERTICAL_OFFSET;
use crate::constants::{CHUNK_SIZE, WORLD_HEIGHT};
use crate::density::DensityParams;
use crate::error::{TerrainError, TerrainResult};
use crate::field::FieldDims;
use crate::types::MeshConfig;

/// Per-chunk sample counts and placement.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
  /// Samples along X.
  pub width: usize,
  /// Samples along Y.
  pub height: usize,
  /// Samples along Z.
  pub depth: usize,
  /// Y translation of every chunk.
  pub vertical_offset: f32,
}

impl Default for ChunkConfig {
  fn default() -> Self {
    Self {
      width: CHUNK_SIZE,
      height: WORLD_HEIGHT,
      depth: CHUNK_SIZE,
      vertical_offset: DEFAULT_VERTICAL_OFFSET,
    }
  }
}

impl ChunkConfig {
  #[inline]
  pub fn dims(&self) -> FieldDims {
    FieldDims::new(self.width, self.height, self.depth)
  }
}

/// Largest half extent whose offsets fit in `i32`.
pub const MAX_HALF_EXTENT: u32 = i32::MAX as u32;

/// Extent of the chunk grid.
///
/// Offsets run over `-half_extent..half_extent` on each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
  pub half_extent_x: u32,
  pub half_extent_z: u32,
}

impl Default for GridConfig {
  fn default() -> Self {
    Self::square(10)
  }
}

impl GridConfig {
  pub const fn square(half_extent: u32) -> Self {
    Self {
      half_extent_x: half_extent,
      half_extent_z: half_extent,
    }
  }

  /// Offsets along X. Extents past [`MAX_HALF_EXTENT`] are clamped.
  #[inline]
  pub fn x_range(&self) -> Range<i32> {
    axis_range(self.half_extent_x)
  }

  /// Offsets along Z. Extents past [`MAX_HALF_EXTENT`] are clamped.
  #[inline]
  pub fn z_range(&self) -> Range<i32> {
    axis_range(self.half_extent_z)
  }

  /// Number of chunks in the grid, `None` when it overflows `usize`.
  pub fn checked_chunk_count(&self) -> Option<usize> {
    4usize
      .checked_mul(self.half_extent_x as usize)?
      .checked_mul(self.half_extent_z as usize)
  }

  /// Number of chunks in the grid, saturating at `usize::MAX`.
  #[inline]
  pub fn chunk_count(&self) -> usize {
    self.checked_chunk_count().unwrap_or(usize::MAX)
  }
}

#[inline]
fn axis_range(half_extent: u32) -> Range<i32> {
  let h = half_extent.min(MAX_HALF_EXTENT) as i32;
  -h..h
}

/// Worker pool sizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
  /// Thread count; host parallelism when unset.
  pub count: Option<usize>,
}

/// Root configuration of a terrain world.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
  pub chunk: ChunkConfig,
  pub grid: GridConfig,
  pub density: DensityParams,
  pub mesh: MeshConfig,
  pub workers: WorkerConfig,
}

impl TerrainConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_chunk_dims(mut self, dims: FieldDims) -> Self {
    self.chunk.width = dims.x;
    self.chunk.height = dims.y;
    self.chunk.depth = dims.z;
    self
  }

  pub fn with_grid(mut self, grid: GridConfig) -> Self {
    self.grid = grid;
    self
  }

  pub fn with_density(mut self, density: DensityParams) -> Self {
    self.density = density;
    self
  }

  pub fn with_mesh(mut self, mesh: MeshConfig) -> Self {
    self.mesh = mesh;
    self
  }

  pub fn with_workers(mut self, count: usize) -> Self {
    self.workers.count = Some(count);
    self
  }

  /// Reject configurations the pipeline cannot run.
  pub fn validate(&self) -> TerrainResult<()> {
    let dims = self.chunk.dims();
    if dims.x < 2 || dims.y < 2 || dims.z < 2 {
      return Err(TerrainError::InvalidConfig(format!(
        "chunk needs at least 2 samples per axis, got {}x{}x{}",
        dims.x, dims.y, dims.z
      )));
    }
    if dims.checked_volume().is_none() {
      return Err(TerrainError::InvalidConfig(format!(
        "chunk of {}x{}x{} samples overflows the address space",
        dims.x, dims.y, dims.z
      )));
    }

    let grid = &self.grid;
    if grid.half_extent_x > MAX_HALF_EXTENT || grid.half_extent_z > MAX_HALF_EXTENT {
      return Err(TerrainError::InvalidConfig(format!(
        "grid half extents must not exceed {}, got {}x{}",
        MAX_HALF_EXTENT, grid.half_extent_x, grid.half_extent_z
      )));
    }
    let chunks = grid.checked_chunk_count().ok_or_else(|| {
      TerrainError::InvalidConfig(format!(
        "grid of {}x{} half extents has too many chunks",
        grid.half_extent_x, grid.half_extent_z
      ))
    })?;
    if chunks == 0 {
      return Err(TerrainError::InvalidConfig(
        "grid must contain at least one chunk".to_string(),
      ));
    }
    if self.workers.count == Some(0) {
      return Err(TerrainError::InvalidConfig(
        "workers.count must be at least 1".to_string(),
      ));
    }
    self.density.validate().map_err(TerrainError::InvalidConfig)
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
