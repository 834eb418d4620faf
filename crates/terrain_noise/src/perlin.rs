//! Perlin-backed noise primitive.

use noise::{NoiseFn, Perlin};

use crate::NoisePrimitive;

/// Gradient noise from `noise-rs`.
///
/// The permutation seed is fixed per instance; world variation comes from the
/// coordinates the caller feeds in, so a single instance can be shared by every
/// chunk and worker thread.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
  inner: Perlin,
}

impl PerlinNoise {
  /// Permutation seed used by `Default`.
  pub const DEFAULT_SEED: u32 = 0;

  /// Create a primitive with the given permutation seed.
  pub fn new(seed: u32) -> Self {
    Self {
      inner: Perlin::new(seed),
    }
  }
}

impl Default for PerlinNoise {
  fn default() -> Self {
    Self::new(Self::DEFAULT_SEED)
  }
}

impl NoisePrimitive for PerlinNoise {
  #[inline]
  fn noise3(&self, x: f32, z: f32, w: f32) -> f32 {
    self.inner.get([x as f64, z as f64, w as f64]) as f32
  }
}
