//! DensityField - flat owned scalar grid for one chunk.
//!
//! ```text
//! values: [f32; X * Y * Z]     index(x, y, z) = x * Y * Z + y * Z + z
//!
//!   ┌──────── slab x=0 ────────┬──────── slab x=1 ────────┬─ ...
//!   │ Y * Z contiguous samples │ Y * Z contiguous samples │
//!   └──────────────────────────┴──────────────────────────┴─ ...
//! ```
//!
//! Population hands each worker a disjoint run of whole X slabs through
//! [`DensityField::x_slabs_mut`]; meshing only reads.

use std::ops::Range;

use serde::Deserialize;

use crate::constants::{coord_to_index, CHUNK_SIZE, WORLD_HEIGHT};

/// Sample counts per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldDims {
  pub x: usize,
  pub y: usize,
  pub z: usize,
}

impl FieldDims {
  pub const fn new(x: usize, y: usize, z: usize) -> Self {
    Self { x, y, z }
  }

  /// Equal extent on every axis.
  pub const fn cube(n: usize) -> Self {
    Self::new(n, n, n)
  }

  /// Total sample count.
  #[inline]
  pub const fn volume(&self) -> usize {
    self.x * self.y * self.z
  }

  /// Total sample count, `None` when it overflows `usize`.
  pub fn checked_volume(&self) -> Option<usize> {
    self.x.checked_mul(self.y)?.checked_mul(self.z)
  }

  /// Samples in one X slab.
  #[inline]
  pub const fn slab_len(&self) -> usize {
    self.y * self.z
  }

  #[inline]
  pub const fn as_array(&self) -> [usize; 3] {
    [self.x, self.y, self.z]
  }
}

impl Default for FieldDims {
  fn default() -> Self {
    Self::new(CHUNK_SIZE, WORLD_HEIGHT, CHUNK_SIZE)
  }
}

/// Scalar density samples of one chunk.
///
/// Negative values are solid, non-negative values are air.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityField {
  dims: FieldDims,
  values: Vec<f32>,
}

impl DensityField {
  /// Zero-filled field.
  pub fn new(dims: FieldDims) -> Self {
    Self::filled(dims, 0.0)
  }

  /// Field with every sample set to `value`.
  pub fn filled(dims: FieldDims, value: f32) -> Self {
    Self {
      dims,
      values: vec![value; dims.volume()],
    }
  }

  /// Field whose sample at `(x, y, z)` is `f(x, y, z)`.
  pub fn from_fn(dims: FieldDims, mut f: impl FnMut(usize, usize, usize) -> f32) -> Self {
    let mut values = Vec::with_capacity(dims.volume());
    for x in 0..dims.x {
      for y in 0..dims.y {
        for z in 0..dims.z {
          values.push(f(x, y, z));
        }
      }
    }
    Self { dims, values }
  }

  #[inline]
  pub fn dims(&self) -> FieldDims {
    self.dims
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.values.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Linear index of `(x, y, z)`.
  #[inline(always)]
  pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
    coord_to_index(self.dims.as_array(), x, y, z)
  }

  #[inline(always)]
  pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
    x < self.dims.x && y < self.dims.y && z < self.dims.z
  }

  /// Sample at `(x, y, z)`. Panics when out of bounds.
  #[inline(always)]
  pub fn get(&self, x: usize, y: usize, z: usize) -> f32 {
    self.values[self.index(x, y, z)]
  }

  /// Sample at `(x, y, z)`, or `fallback` outside the field.
  #[inline(always)]
  pub fn get_or(&self, x: usize, y: usize, z: usize, fallback: f32) -> f32 {
    if self.contains(x, y, z) {
      self.get(x, y, z)
    } else {
      fallback
    }
  }

  #[inline]
  pub fn set(&mut self, x: usize, y: usize, z: usize, value: f32) {
    let idx = self.index(x, y, z);
    self.values[idx] = value;
  }

  #[inline]
  pub fn values(&self) -> &[f32] {
    &self.values
  }

  #[inline]
  pub fn values_mut(&mut self) -> &mut [f32] {
    &mut self.values
  }

  /// Split the buffer into one mutable run per X range.
  ///
  /// `ranges` must be sorted, contiguous, and cover `0..dims.x`. Each entry
  /// pairs the range with the samples of its slabs.
  pub fn x_slabs_mut(&mut self, ranges: &[Range<usize>]) -> Vec<(Range<usize>, &mut [f32])> {
    let slab = self.dims.slab_len();
    let mut rest: &mut [f32] = &mut self.values;
    let mut out = Vec::with_capacity(ranges.len());

    for range in ranges {
      let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * slab);
      out.push((range.clone(), head));
      rest = tail;
    }

    debug_assert!(rest.is_empty(), "x ranges do not cover the field");
    out
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
