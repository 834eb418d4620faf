//! Fractal (fBm) octave summation.

use crate::NoisePrimitive;

/// Sum `octaves` layers of `noise`, each layer at `lacunarity` times the
/// previous frequency and `persistence` times the previous amplitude.
///
/// The sum is normalised by the total amplitude and remapped to `[0, 1]`.
/// `w` is passed through unchanged to every octave. Zero octaves yield the
/// midpoint `0.5`.
#[inline]
pub fn fractal_noise<N: NoisePrimitive + ?Sized>(
  noise: &N,
  x: f32,
  z: f32,
  lacunarity: f32,
  persistence: f32,
  octaves: u32,
  w: f32,
) -> f32 {
  if octaves == 0 {
    return 0.5;
  }

  let mut total = 0.0;
  let mut amplitude = 1.0;
  let mut frequency = 1.0;
  let mut max_amplitude = 0.0;

  for _ in 0..octaves {
    total += noise.noise3(x * frequency, z * frequency, w) * amplitude;
    max_amplitude += amplitude;
    amplitude *= persistence;
    frequency *= lacunarity;
  }

  (total / max_amplitude * 0.5 + 0.5).clamp(0.0, 1.0)
}
