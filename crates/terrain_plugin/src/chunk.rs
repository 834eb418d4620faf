//! Chunk - one tile of terrain with its field, mesh, and placement.

use glam::{Mat4, Vec3};

use crate::field::{DensityField, FieldDims};
use crate::types::{ChunkCoord, MeshOutput, Vertex};

/// Default vertical translation of every chunk.
pub const DEFAULT_VERTICAL_OFFSET: f32 = -10.0;

/// World placement of a chunk.
///
/// Rotation is Euler degrees, applied X then Y then Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkTransform {
  pub translation: Vec3,
  pub rotation: Vec3,
  pub scale: Vec3,
}

impl Default for ChunkTransform {
  fn default() -> Self {
    Self {
      translation: Vec3::ZERO,
      rotation: Vec3::ZERO,
      scale: Vec3::ONE,
    }
  }
}

impl ChunkTransform {
  /// Placement of `coord`: `(x * dims.x, vertical_offset, z * dims.z)`,
  /// unit scale, no rotation.
  pub fn for_coord(coord: ChunkCoord, dims: FieldDims, vertical_offset: f32) -> Self {
    Self {
      translation: Vec3::new(
        coord.x as f32 * dims.x as f32,
        vertical_offset,
        coord.z as f32 * dims.z as f32,
      ),
      ..Default::default()
    }
  }

  /// `T * Rx * Ry * Rz * S`.
  pub fn model_matrix(&self) -> Mat4 {
    Mat4::from_translation(self.translation)
      * Mat4::from_rotation_x(self.rotation.x.to_radians())
      * Mat4::from_rotation_y(self.rotation.y.to_radians())
      * Mat4::from_rotation_z(self.rotation.z.to_radians())
      * Mat4::from_scale(self.scale)
  }
}

/// A generated terrain tile.
///
/// The chunk keeps its density field and vertex list after upload so the
/// backend can be fed again on regeneration.
#[derive(Clone, Debug)]
pub struct Chunk {
  pub coord: ChunkCoord,
  pub field: DensityField,
  pub mesh: MeshOutput,
  pub transform: ChunkTransform,
  /// Pass that last generated this chunk.
  pub generation: u64,
}

impl Chunk {
  /// Empty chunk at `coord`; the field is allocated but not populated.
  pub fn new(coord: ChunkCoord, dims: FieldDims, vertical_offset: f32) -> Self {
    Self {
      coord,
      field: DensityField::new(dims),
      mesh: MeshOutput::new(),
      transform: ChunkTransform::for_coord(coord, dims, vertical_offset),
      generation: 0,
    }
  }

  #[inline]
  pub fn vertices(&self) -> &[Vertex] {
    &self.mesh.vertices
  }

  #[inline]
  pub fn vertex_count(&self) -> usize {
    self.mesh.vertex_count()
  }

  #[inline]
  pub fn model_matrix(&self) -> Mat4 {
    self.transform.model_matrix()
  }
}

#[cfg(test)]
#[path = "chunk_test.rs"]
mod chunk_test;
