//! World seed and per-pass generation context.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_time::{SystemTime, UNIX_EPOCH};

/// Exclusive upper bound of the integer seed draw.
pub const SEED_RANGE: u32 = 10_000;

/// Multiplier turning the integer draw into the seed scalar.
pub const SEED_SCALE: f32 = 10.23322;

/// Scalar offset added to every horizontal sample coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WorldSeed(pub f32);

impl WorldSeed {
  pub const fn new(value: f32) -> Self {
    Self(value)
  }

  #[inline]
  pub const fn value(self) -> f32 {
    self.0
  }

  /// Draw a seed from `rng`: an integer in `0..10000` times `10.23322`.
  pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
    Self(rng.random_range(0..SEED_RANGE) as f32 * SEED_SCALE)
  }

  /// Draw a seed from an RNG seeded by the wall clock.
  pub fn from_time() -> Self {
    let nanos = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(|d| d.as_nanos() as u64)
      .unwrap_or_default();
    Self::draw(&mut StdRng::seed_from_u64(nanos))
  }
}

impl From<f32> for WorldSeed {
  fn from(value: f32) -> Self {
    Self(value)
  }
}

/// Immutable inputs shared by every chunk and worker of one generation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationContext {
  pub seed: WorldSeed,

  /// Pass counter, incremented per build.
  pub generation: u64,
}

impl GenerationContext {
  pub fn new(seed: WorldSeed, generation: u64) -> Self {
    Self { seed, generation }
  }

  /// Context of the pass following this one, under a new seed.
  pub fn next(&self, seed: WorldSeed) -> Self {
    Self::new(seed, self.generation + 1)
  }
}
