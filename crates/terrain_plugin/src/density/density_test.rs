use super::*;
use terrain_noise::NoisePrimitive;

use crate::field::FieldDims;
use crate::seed::WorldSeed;
use crate::types::ChunkCoord;

/// Primitive returning a fixed value, for exact expectations.
struct ConstNoise(f32);

impl NoisePrimitive for ConstNoise {
  fn noise3(&self, _x: f32, _z: f32, _w: f32) -> f32 {
    self.0
  }
}

/// Primitive that poisons every sample.
struct NanNoise;

impl NoisePrimitive for NanNoise {
  fn noise3(&self, _x: f32, _z: f32, _w: f32) -> f32 {
    f32::NAN
  }
}

#[test]
fn test_default_params_match_reference_constants() {
  let p = DensityParams::default();
  assert_eq!(p.frequency, 0.025);
  assert_eq!(p.chunk_size, 16.0);
  assert_eq!(p.offset_stride, 8.0);
  assert_eq!(p.mountain.layer(), FractalLayer::new(10, 1.5, 0.6));
  assert_eq!(p.mountain.height_scale, 102.0);
  assert_eq!(p.plateau.layer(), FractalLayer::new(3, 1.2, 0.2));
  assert!(p.plateau.enabled);
  assert_eq!(p.cave.frequency, 10.0);
  assert_eq!(p.cave.intensity, 10.0);
  assert_eq!(p.floor.threshold, 4.0);
  assert_eq!(p.floor.density, -1.0);
  assert!(p.validate().is_ok());
}

#[test]
fn test_floor_invariant() {
  let synth = DensitySynthesizer::default();
  let seed = WorldSeed::new(5117.0);

  for y in 0..4 {
    for (x, z) in [(0.0, 0.0), (7.0, 3.0), (15.0, 15.0), (-40.0, 900.0)] {
      let d = synth.sample(x, y as f32, z, ChunkCoord::new(-3, 9), seed);
      assert_eq!(d, -1.0, "Floor broken at ({}, {}, {})", x, y, z);
    }
  }
}

#[test]
fn test_floor_ignores_noise_output() {
  let synth = DensitySynthesizer::new(NanNoise, DensityParams::default());
  assert_eq!(synth.sample(1.0, 3.0, 1.0, ChunkCoord::default(), WorldSeed::default()), -1.0);
  assert!(synth.sample(1.0, 4.0, 1.0, ChunkCoord::default(), WorldSeed::default()).is_nan());
}

#[test]
fn test_constant_noise_composition() {
  // Constant primitive value v normalises to 0.5 + 0.5 * v in every layer
  let synth = DensitySynthesizer::new(ConstNoise(0.0), DensityParams::default());
  let d = synth.sample(3.0, 100.0, 2.0, ChunkCoord::new(1, 1), WorldSeed::new(12.0));

  // height = 0.5 * 102 + (0.5 * 5 + 5) = 58.5, cave = 0.5 * 10 = 5
  let expected = (100.0 - 58.5) + 5.0;
  assert!((d - expected).abs() < 1e-4, "Expected {}, got {}", expected, d);
}

#[test]
fn test_plateau_toggle() {
  let params = DensityParams::default().with_plateau(false);
  let synth = DensitySynthesizer::new(ConstNoise(0.0), params);
  let d = synth.sample(0.0, 100.0, 0.0, ChunkCoord::default(), WorldSeed::default());

  let expected = (100.0 - 51.0) + 5.0;
  assert!((d - expected).abs() < 1e-4, "Expected {}, got {}", expected, d);
}

#[test]
fn test_cave_term_never_lowers_density() {
  let carved = DensitySynthesizer::default();
  let flat = DensitySynthesizer::new(
    terrain_noise::PerlinNoise::default(),
    DensityParams::default().with_cave_intensity(0.0),
  );
  let seed = WorldSeed::new(1023.322);

  for y in (4..256).step_by(17) {
    for x in 0..16 {
      let chunk = ChunkCoord::new(2, -1);
      let a = carved.sample(x as f32, y as f32, 5.0, chunk, seed);
      let b = flat.sample(x as f32, y as f32, 5.0, chunk, seed);
      assert!(a >= b, "Cave term lowered density at ({}, {})", x, y);
    }
  }
}

#[test]
fn test_sample_deterministic() {
  let synth = DensitySynthesizer::default();
  let seed = WorldSeed::new(4093.288);
  let chunk = ChunkCoord::new(-5, 4);

  for &(x, y, z) in &[(0.0, 10.0, 0.0), (15.0, 80.0, 7.0), (8.0, 255.0, 15.0)] {
    assert_eq!(
      synth.sample(x, y, z, chunk, seed).to_bits(),
      synth.sample(x, y, z, chunk, seed).to_bits()
    );
  }
}

#[test]
fn test_fill_slabs_matches_sample() {
  let synth = DensitySynthesizer::default();
  let dims = FieldDims::new(4, 8, 3);
  let chunk = ChunkCoord::new(1, 2);
  let seed = WorldSeed::new(20.46644);

  let mut out = vec![0.0; 2 * dims.slab_len()];
  synth.fill_slabs(1..3, dims, chunk, seed, &mut out);

  let mut i = 0;
  for x in 1..3 {
    for y in 0..8 {
      for z in 0..3 {
        assert_eq!(out[i], synth.sample(x as f32, y as f32, z as f32, chunk, seed));
        i += 1;
      }
    }
  }
}

#[test]
fn test_validate_rejects_bad_params() {
  assert!(DensityParams::default().with_frequency(0.0).validate().is_err());

  let mut params = DensityParams::default();
  params.mountain.octaves = 0;
  assert!(params.validate().is_err());

  let mut params = DensityParams::default();
  params.plateau.octaves = 0;
  assert!(params.validate().is_err());
  params.plateau.enabled = false;
  assert!(params.validate().is_ok());
}
