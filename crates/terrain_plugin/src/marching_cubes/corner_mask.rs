//! Cube corner fetch and configuration index.
//!
//! The configuration is an 8-bit value where bit `i` is set when corner `i`
//! lies strictly below the isolevel (inside the solid).

use crate::constants::CORNER_OFFSETS;
use crate::field::DensityField;

/// Densities at the 8 corners of cube `(x, y, z)`.
///
/// Corners outside the field read `boundary`, never neighbouring memory.
#[inline(always)]
pub fn cube_corners(field: &DensityField, x: usize, y: usize, z: usize, boundary: f32) -> [f32; 8] {
  let mut values = [0.0; 8];
  for (value, offset) in values.iter_mut().zip(CORNER_OFFSETS.iter()) {
    *value = field.get_or(x + offset[0], y + offset[1], z + offset[2], boundary);
  }
  values
}

/// Build the configuration index of 8 corner densities.
#[inline(always)]
pub fn build(values: &[f32; 8], isolevel: f32) -> u8 {
  let mut config = 0u8;
  for (i, &value) in values.iter().enumerate() {
    if value < isolevel {
      config |= 1 << i;
    }
  }
  config
}

#[cfg(test)]
#[path = "corner_mask_test.rs"]
mod corner_mask_test;
