//! Noise composition for a single density sample.

use std::ops::Range;

use terrain_noise::{fractal_noise, NoisePrimitive, PerlinNoise};

use super::{DensityParams, FractalLayer};
use crate::field::FieldDims;
use crate::seed::WorldSeed;
use crate::types::ChunkCoord;

/// Pure density function over chunk-local voxel coordinates.
///
/// Holds only immutable state, so one instance is shared by every worker.
#[derive(Clone, Debug)]
pub struct DensitySynthesizer<N: NoisePrimitive = PerlinNoise> {
  noise: N,
  params: DensityParams,
}

impl Default for DensitySynthesizer<PerlinNoise> {
  fn default() -> Self {
    Self::new(PerlinNoise::default(), DensityParams::default())
  }
}

impl<N: NoisePrimitive> DensitySynthesizer<N> {
  pub fn new(noise: N, params: DensityParams) -> Self {
    Self { noise, params }
  }

  #[inline]
  pub fn params(&self) -> &DensityParams {
    &self.params
  }

  #[inline]
  pub fn noise(&self) -> &N {
    &self.noise
  }

  #[inline(always)]
  fn fbm(&self, layer: FractalLayer, x: f32, z: f32, w: f32) -> f32 {
    fractal_noise(
      &self.noise,
      x,
      z,
      layer.lacunarity,
      layer.persistence,
      layer.octaves,
      w,
    )
  }

  /// Density at chunk-local `(x, y, z)` of `chunk` under `seed`.
  #[inline]
  pub fn sample(&self, x: f32, y: f32, z: f32, chunk: ChunkCoord, seed: WorldSeed) -> f32 {
    let p = &self.params;

    if y < p.floor.threshold {
      return p.floor.density;
    }

    let seed = seed.value();
    let step = p.frequency / p.chunk_size;
    let xi = (x + seed + chunk.x as f32 * p.offset_stride) * step;
    let zi = (z + seed + chunk.z as f32 * p.offset_stride) * step;
    let yi = y * step;

    let mountain = &p.mountain;
    let mut base_height =
      self.fbm(mountain.layer(), xi, zi, seed).powf(mountain.exponent) * mountain.height_scale;

    let plateau = &p.plateau;
    if plateau.enabled {
      let offset = self.fbm(plateau.layer(), xi * plateau.scale, zi * plateau.scale, seed);
      base_height += offset * plateau.amplitude + plateau.bias;
    }

    let cave = &p.cave;
    let cf = cave.frequency;
    let cave_noise = self.fbm(cave.layer(), xi * cf, yi * cf, zi * cf).max(0.0);

    (y - base_height) + cave_noise * cave.intensity
  }

  /// Fill `out` with the samples of X slabs `xs` of a `dims` field.
  ///
  /// `out` holds exactly `xs.len()` slabs in field order.
  pub fn fill_slabs(
    &self,
    xs: Range<usize>,
    dims: FieldDims,
    chunk: ChunkCoord,
    seed: WorldSeed,
    out: &mut [f32],
  ) {
    debug_assert_eq!(out.len(), xs.len() * dims.slab_len());

    let mut i = 0;
    for x in xs {
      for y in 0..dims.y {
        for z in 0..dims.z {
          out[i] = self.sample(x as f32, y as f32, z as f32, chunk, seed);
          i += 1;
        }
      }
    }
  }
}
