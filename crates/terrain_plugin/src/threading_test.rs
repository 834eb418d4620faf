use super::*;
use crate::field::FieldDims;

#[test]
fn test_partition_even() {
  assert_eq!(partition(16, 4), vec![0..4, 4..8, 8..12, 12..16]);
}

#[test]
fn test_partition_remainder_to_last() {
  assert_eq!(partition(16, 3), vec![0..5, 5..10, 10..16]);
  assert_eq!(partition(16, 6), vec![0..2, 2..4, 4..6, 6..8, 8..10, 10..16]);
}

#[test]
fn test_partition_clamps_workers_to_extent() {
  let ranges = partition(4, 32);
  assert_eq!(ranges.len(), 4);
  assert!(ranges.iter().all(|r| r.len() == 1));
}

#[test]
fn test_partition_covers_extent() {
  for extent in 1..40 {
    for workers in 1..20 {
      let ranges = partition(extent, workers);
      assert_eq!(ranges.first().map(|r| r.start), Some(0));
      assert_eq!(ranges.last().map(|r| r.end), Some(extent));
      for pair in ranges.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "Gap in {:?}", ranges);
      }
      assert!(ranges.iter().all(|r| !r.is_empty()));
    }
  }
}

#[test]
fn test_partition_zero_extent() {
  assert!(partition(0, 4).is_empty());
}

#[test]
fn test_zero_workers_rejected() {
  assert!(matches!(
    WorkerPool::with_workers(0),
    Err(TerrainError::InvalidConfig(_))
  ));
}

#[test]
fn test_default_workers_positive() {
  assert!(default_workers() >= 1);
}

#[test]
fn test_fill_x_slabs_writes_every_sample_once() {
  let pool = WorkerPool::with_workers(3).unwrap();
  let dims = FieldDims::new(16, 8, 4);
  let mut field = DensityField::filled(dims, f32::NAN);

  pool.fill_x_slabs(&mut field, |xs, values| {
    let slab = dims.slab_len();
    for (i, v) in values.iter_mut().enumerate() {
      let x = xs.start + i / slab;
      *v = x as f32;
    }
  });

  for x in 0..16 {
    for y in 0..8 {
      for z in 0..4 {
        assert_eq!(field.get(x, y, z), x as f32);
      }
    }
  }
}
