//! Core data types for marching-cubes meshing.

use serde::Deserialize;

use crate::constants::{AXIS_SCALE, BOUNDARY_DENSITY, ISOLEVEL};

/// Integer grid offset of a chunk on the X/Z plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChunkCoord {
  pub x: i32,
  pub z: i32,
}

impl ChunkCoord {
  pub const fn new(x: i32, z: i32) -> Self {
    Self { x, z }
  }
}

impl std::fmt::Display for ChunkCoord {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.z)
  }
}

/// Output vertex with all mesh attributes.
///
/// Laid out for direct upload: 8 tightly packed `f32`s.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vertex {
  /// Position in chunk-local space, axis scale applied.
  pub position: [f32; 3],

  /// Face normal, shared by the three vertices of a triangle.
  pub normal: [f32; 3],

  /// Texture coordinate. Always zero.
  pub uv: [f32; 2],
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Mesh generation result: an unindexed triangle soup.
#[derive(Clone, Debug, Default)]
pub struct MeshOutput {
  /// Vertices in triangle order, three per triangle.
  pub vertices: Vec<Vertex>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append one triangle sharing `normal`.
  #[inline]
  pub fn push_triangle(&mut self, positions: [[f32; 3]; 3], normal: [f32; 3]) {
    for position in positions {
      self.bounds.encapsulate(position);
      self.vertices.push(Vertex {
        position,
        normal,
        uv: [0.0; 2],
      });
    }
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of vertices in the mesh.
  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.vertices.len() / 3
  }
}

/// Configuration for surface extraction.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
  /// Density threshold of the surface.
  pub isolevel: f32,

  /// Scale applied to vertex positions per axis.
  pub axis_scale: [f32; 3],

  /// Density read for cube corners outside the field.
  pub boundary_density: f32,
}

impl Default for MeshConfig {
  fn default() -> Self {
    Self {
      isolevel: ISOLEVEL,
      axis_scale: AXIS_SCALE,
      boundary_density: BOUNDARY_DENSITY,
    }
  }
}

impl MeshConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_isolevel(mut self, isolevel: f32) -> Self {
    self.isolevel = isolevel;
    self
  }

  pub fn with_axis_scale(mut self, scale: [f32; 3]) -> Self {
    self.axis_scale = scale;
    self
  }

  pub fn with_boundary_density(mut self, density: f32) -> Self {
    self.boundary_density = density;
    self
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
