use super::*;

#[test]
fn test_default_config() {
  let config = TerrainConfig::default();
  assert_eq!(config.chunk.dims(), FieldDims::new(16, 256, 16));
  assert_eq!(config.chunk.vertical_offset, -10.0);
  assert_eq!(config.grid.x_range(), -10..10);
  assert_eq!(config.grid.chunk_count(), 400);
  assert_eq!(config.workers.count, None);
  assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_thin_chunk() {
  let config = TerrainConfig::default().with_chunk_dims(FieldDims::new(1, 256, 16));
  assert!(matches!(config.validate(), Err(TerrainError::InvalidConfig(_))));
}

#[test]
fn test_rejects_empty_grid() {
  let config = TerrainConfig::default().with_grid(GridConfig {
    half_extent_x: 0,
    half_extent_z: 3,
  });
  assert!(config.validate().is_err());
}

#[test]
fn test_rejects_zero_workers() {
  assert!(TerrainConfig::default().with_workers(0).validate().is_err());
  assert!(TerrainConfig::default().with_workers(3).validate().is_ok());
}

#[test]
fn test_rejects_bad_density() {
  let config = TerrainConfig::default().with_density(DensityParams::default().with_frequency(-1.0));
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("frequency"), "{}", err);
}

#[test]
fn test_rectangular_grid() {
  let grid = GridConfig {
    half_extent_x: 2,
    half_extent_z: 5,
  };
  assert_eq!(grid.chunk_count(), 40);
  assert_eq!(grid.z_range(), -5..5);
}

#[test]
fn test_rejects_half_extent_past_i32() {
  for half_extent in [1u32 << 31, 3_000_000_000, u32::MAX] {
    let config = TerrainConfig::default().with_grid(GridConfig::square(half_extent));
    assert!(
      matches!(config.validate(), Err(TerrainError::InvalidConfig(_))),
      "Half extent {} accepted",
      half_extent
    );
  }

  let lopsided = TerrainConfig::default().with_grid(GridConfig {
    half_extent_x: 1,
    half_extent_z: u32::MAX,
  });
  assert!(lopsided.validate().is_err());
}

#[test]
fn test_huge_grid_ranges_stay_in_i32() {
  let grid = GridConfig::square(1 << 31);
  let max = MAX_HALF_EXTENT as i32;
  assert_eq!(grid.x_range(), -max..max);
  assert_eq!(grid.z_range(), -max..max);

  let edge = GridConfig::square(MAX_HALF_EXTENT);
  assert_eq!(edge.x_range(), -max..max);
}

#[test]
fn test_checked_chunk_count() {
  assert_eq!(GridConfig::square(3).checked_chunk_count(), Some(36));
  assert_eq!(GridConfig::square(0).checked_chunk_count(), Some(0));
  let wide = GridConfig {
    half_extent_x: u32::MAX,
    half_extent_z: u32::MAX,
  };
  assert_eq!(wide.checked_chunk_count(), None);
  assert_eq!(wide.chunk_count(), usize::MAX);
}

#[test]
fn test_rejects_overflowing_chunk_volume() {
  let config = TerrainConfig::default().with_chunk_dims(FieldDims::new(usize::MAX / 2, 4, 16));
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("overflows"), "{}", err);
}
