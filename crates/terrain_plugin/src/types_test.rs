use super::*;

#[test]
fn test_vertex_layout() {
  assert_eq!(std::mem::size_of::<Vertex>(), 32);
  assert_eq!(Vertex::default().uv, [0.0, 0.0]);
}

#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  assert!(!aabb.is_valid());

  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, 5.0, 0.0]);

  assert!(aabb.is_valid());
  assert_eq!(aabb.min, [-1.0, 2.0, 0.0]);
  assert_eq!(aabb.max, [1.0, 5.0, 3.0]);
}

#[test]
fn test_mesh_output_push_triangle() {
  let mut mesh = MeshOutput::new();
  assert!(mesh.is_empty());

  mesh.push_triangle(
    [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 1.0, 2.0]],
    [0.0, 1.0, 0.0],
  );

  assert_eq!(mesh.vertex_count(), 3);
  assert_eq!(mesh.triangle_count(), 1);
  assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
  assert!(mesh.vertices.iter().all(|v| v.uv == [0.0, 0.0]));
  assert_eq!(mesh.bounds.max, [2.0, 1.0, 2.0]);

  mesh.clear();
  assert!(mesh.is_empty());
  assert!(!mesh.bounds.is_valid());
}

#[test]
fn test_mesh_config_defaults() {
  let config = MeshConfig::default();
  assert_eq!(config.isolevel, 0.0);
  assert_eq!(config.axis_scale, [2.0, 1.0, 2.0]);
  assert_eq!(config.boundary_density, 1.0);

  let config = MeshConfig::new().with_isolevel(0.5).with_axis_scale([1.0; 3]);
  assert_eq!(config.isolevel, 0.5);
  assert_eq!(config.axis_scale, [1.0; 3]);
}
