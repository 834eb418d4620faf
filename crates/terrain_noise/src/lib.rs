//! Noise primitive for terrain density synthesis.
//!
//! This crate owns the two pieces the terrain core treats as external:
//! a continuous pseudo-random function of three coordinates, and the
//! fractal (fBm) octave summation layered on top of it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     lib.rs                                  │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │ NoisePrimitive (trait)                                │  │
//! │  │   - noise3(x, z, w) -> f32   ~[-1, 1]                 │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │ perlin.rs   PerlinNoise (noise-rs Perlin)             │  │
//! │  │ fractal.rs  fractal_noise(...) -> f32   [0, 1]        │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The third coordinate `w` is a decorrelation axis: callers pass either the
//! world seed or a scaled third spatial axis through it.
//!
//! # Usage
//! ```ignore
//! use terrain_noise::{fractal_noise, PerlinNoise};
//!
//! let perlin = PerlinNoise::default();
//! let h = fractal_noise(&perlin, 0.3, 1.7, 1.5, 0.6, 10, 4242.0);
//! assert!((0.0..=1.0).contains(&h));
//! ```

mod fractal;
mod perlin;

pub use fractal::fractal_noise;
pub use perlin::PerlinNoise;

/// A continuous pseudo-random function of three coordinates.
///
/// Implementations must be pure and cheap to call from many threads at once;
/// the terrain core samples them once per voxel per octave.
pub trait NoisePrimitive: Send + Sync {
  /// Sample the noise at `(x, z, w)`. Output is roughly in `[-1, 1]`.
  fn noise3(&self, x: f32, z: f32, w: f32) -> f32;
}

/// Blanket impl for boxed trait objects.
impl NoisePrimitive for Box<dyn NoisePrimitive> {
  #[inline]
  fn noise3(&self, x: f32, z: f32, w: f32) -> f32 {
    (**self).noise3(x, z, w)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_perlin_is_deterministic() {
    let a = PerlinNoise::default();
    let b = PerlinNoise::default();
    for i in 0..64 {
      let x = i as f32 * 0.37;
      let z = i as f32 * 0.11;
      assert_eq!(a.noise3(x, z, 12.5), b.noise3(x, z, 12.5));
    }
  }

  #[test]
  fn test_perlin_zero_on_lattice() {
    let perlin = PerlinNoise::default();
    assert!(perlin.noise3(0.0, 0.0, 0.0).abs() < 1e-6);
    assert!(perlin.noise3(3.0, -2.0, 7.0).abs() < 1e-6);
  }

  #[test]
  fn test_fractal_stays_in_unit_range() {
    let perlin = PerlinNoise::default();
    for i in 0..500 {
      let x = i as f32 * 0.173;
      let z = i as f32 * 0.291 - 40.0;
      let v = fractal_noise(&perlin, x, z, 1.5, 0.6, 10, 1023.3);
      assert!((0.0..=1.0).contains(&v), "fractal out of range: {}", v);
    }
  }

  #[test]
  fn test_fractal_single_octave_remaps_primitive() {
    let perlin = PerlinNoise::default();
    let (x, z, w) = (0.42, 1.31, 5.5);
    let raw = perlin.noise3(x, z, w);
    let fractal = fractal_noise(&perlin, x, z, 2.0, 0.5, 1, w);
    assert!((fractal - (raw * 0.5 + 0.5).clamp(0.0, 1.0)).abs() < 1e-6);
  }

  #[test]
  fn test_fractal_midpoint_at_origin() {
    // Every octave samples the lattice origin, where Perlin is zero.
    let perlin = PerlinNoise::default();
    let v = fractal_noise(&perlin, 0.0, 0.0, 1.5, 0.6, 10, 0.0);
    assert!((v - 0.5).abs() < 1e-6);
  }

  #[test]
  fn test_fractal_zero_octaves_is_midpoint() {
    let perlin = PerlinNoise::default();
    assert_eq!(fractal_noise(&perlin, 0.3, 0.7, 1.5, 0.6, 0, 1.0), 0.5);
  }

  #[test]
  fn test_boxed_primitive_matches_concrete() {
    let perlin = PerlinNoise::new(7);
    let boxed: Box<dyn NoisePrimitive> = Box::new(PerlinNoise::new(7));
    assert_eq!(perlin.noise3(0.5, 0.25, 3.0), boxed.noise3(0.5, 0.25, 3.0));
  }
}
