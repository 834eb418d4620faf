//! Flat triangle normals.

use glam::Vec3;

/// Normal of triangle `(v0, v1, v2)`: `normalize((v2 - v0) × (v1 - v0))`.
///
/// Zero-area triangles yield a zero vector.
#[inline]
pub fn face_normal(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> [f32; 3] {
  let v0 = Vec3::from_array(v0);
  let a = Vec3::from_array(v2) - v0;
  let b = Vec3::from_array(v1) - v0;
  a.cross(b).normalize_or_zero().to_array()
}
