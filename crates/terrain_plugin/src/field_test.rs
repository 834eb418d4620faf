use super::*;

#[test]
fn test_default_dims() {
  let dims = FieldDims::default();
  assert_eq!(dims, FieldDims::new(16, 256, 16));
  assert_eq!(dims.volume(), 65536);
  assert_eq!(dims.slab_len(), 4096);
}

#[test]
fn test_checked_volume() {
  assert_eq!(FieldDims::default().checked_volume(), Some(65536));
  assert_eq!(FieldDims::new(usize::MAX, 2, 1).checked_volume(), None);
  assert_eq!(FieldDims::new(2, usize::MAX / 2 + 1, 1).checked_volume(), None);
}

#[test]
fn test_from_fn_matches_index() {
  let dims = FieldDims::new(3, 4, 5);
  let field = DensityField::from_fn(dims, |x, y, z| (x * 100 + y * 10 + z) as f32);

  assert_eq!(field.len(), 60);
  for x in 0..3 {
    for y in 0..4 {
      for z in 0..5 {
        assert_eq!(field.get(x, y, z), (x * 100 + y * 10 + z) as f32);
        assert_eq!(field.values()[field.index(x, y, z)], field.get(x, y, z));
      }
    }
  }
}

#[test]
fn test_get_or_outside() {
  let field = DensityField::filled(FieldDims::cube(4), -1.0);
  assert_eq!(field.get_or(3, 3, 3, 1.0), -1.0);
  assert_eq!(field.get_or(4, 0, 0, 1.0), 1.0);
  assert_eq!(field.get_or(0, 4, 0, 1.0), 1.0);
  assert_eq!(field.get_or(0, 0, 4, 1.0), 1.0);
}

#[test]
fn test_set() {
  let mut field = DensityField::new(FieldDims::cube(2));
  field.set(1, 0, 1, 7.5);
  assert_eq!(field.get(1, 0, 1), 7.5);
  assert_eq!(field.values().iter().filter(|&&v| v != 0.0).count(), 1);
}

#[test]
fn test_x_slabs_mut_disjoint() {
  let dims = FieldDims::new(5, 2, 3);
  let mut field = DensityField::new(dims);

  {
    let slabs = field.x_slabs_mut(&[0..2, 2..5]);
    assert_eq!(slabs.len(), 2);
    assert_eq!(slabs[0].1.len(), 2 * dims.slab_len());
    assert_eq!(slabs[1].1.len(), 3 * dims.slab_len());

    for (range, values) in slabs {
      values.fill(range.start as f32);
    }
  }

  assert_eq!(field.get(1, 1, 2), 0.0);
  assert_eq!(field.get(2, 0, 0), 2.0);
  assert_eq!(field.get(4, 1, 2), 2.0);
}
