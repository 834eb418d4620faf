use super::*;

#[test]
fn test_placement_from_coord() {
  let t = ChunkTransform::for_coord(ChunkCoord::new(-3, 2), FieldDims::default(), -10.0);
  assert_eq!(t.translation, Vec3::new(-48.0, -10.0, 32.0));
  assert_eq!(t.rotation, Vec3::ZERO);
  assert_eq!(t.scale, Vec3::ONE);
}

#[test]
fn test_identity_rotation_model_is_translation() {
  let t = ChunkTransform::for_coord(ChunkCoord::new(1, 1), FieldDims::default(), -10.0);
  assert_eq!(t.model_matrix(), Mat4::from_translation(Vec3::new(16.0, -10.0, 16.0)));
}

#[test]
fn test_model_matrix_order() {
  let t = ChunkTransform {
    translation: Vec3::new(5.0, 0.0, 0.0),
    rotation: Vec3::new(0.0, 90.0, 0.0),
    scale: Vec3::splat(2.0),
  };

  // Scale, then rotate +X onto -Z, then translate
  let p = t.model_matrix().transform_point3(Vec3::X);
  assert!((p - Vec3::new(5.0, 0.0, -2.0)).length() < 1e-5, "Got {:?}", p);
}

#[test]
fn test_rotation_axis_order() {
  let t = ChunkTransform {
    rotation: Vec3::new(90.0, 90.0, 0.0),
    ..Default::default()
  };

  // Ry applied before Rx: +Z -> +X under Ry, X is fixed by Rx
  let p = t.model_matrix().transform_point3(Vec3::Z);
  assert!((p - Vec3::X).length() < 1e-5, "Got {:?}", p);
}

#[test]
fn test_new_chunk_is_unpopulated() {
  let chunk = Chunk::new(ChunkCoord::new(0, 0), FieldDims::new(4, 8, 4), DEFAULT_VERTICAL_OFFSET);
  assert_eq!(chunk.field.len(), 128);
  assert_eq!(chunk.vertex_count(), 0);
  assert_eq!(chunk.generation, 0);
}
