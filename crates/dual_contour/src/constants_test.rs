use super::*;

#[test]
fn test_default_bounds_match_cell_count() {
  let cells = (DEFAULT_MAX - DEFAULT_MIN) / DEFAULT_CELL_SIZE;
  assert_eq!(cells as usize, DEFAULT_CELLS_PER_AXIS);
}

#[test]
fn test_corner_count() {
  assert_eq!(corner_count(2), 4);
  assert_eq!(corner_count(3), 8);
}

#[test]
fn test_cell_edges_connect_neighbouring_corners() {
  for dimensions in [2, 3] {
    for (i, &[c0, c1]) in cell_edges(dimensions).iter().enumerate() {
      assert!(c0 < corner_count(dimensions), "edge {} corner 0 out of bounds", i);
      assert!(c1 < corner_count(dimensions), "edge {} corner 1 out of bounds", i);
      // Corners of an edge differ along exactly one axis
      assert_eq!((c0 ^ c1).count_ones(), 1, "edge {} is not axis aligned", i);
      assert!(c0 < c1, "edge {} should run from the lower corner", i);
    }
  }
}

#[test]
fn test_cell_edges_are_unique() {
  for dimensions in [2, 3] {
    let edges = cell_edges(dimensions);
    for i in 0..edges.len() {
      for j in (i + 1)..edges.len() {
        assert_ne!(edges[i], edges[j], "edges {} and {} are duplicates", i, j);
      }
    }
  }
}

#[test]
fn test_edge_counts_per_axis() {
  // 2 edges per axis in 2D, 4 per axis in 3D
  for (dimensions, per_axis) in [(2, 2), (3, 4)] {
    for axis in 0..dimensions {
      let count = cell_edges(dimensions)
        .iter()
        .filter(|&&[c0, c1]| c0 ^ c1 == 1 << axis)
        .count();
      assert_eq!(count, per_axis, "dimension {} axis {}", dimensions, axis);
    }
  }
}

#[test]
fn test_corner_offset_matches_bit_layout() {
  for corner in 0..8 {
    assert_eq!(corner_offset(corner, 0), corner & 1);
    assert_eq!(corner_offset(corner, 1), (corner >> 1) & 1);
    assert_eq!(corner_offset(corner, 2), (corner >> 2) & 1);
  }
}

#[test]
fn test_unsupported_dimension_has_no_edges() {
  assert!(cell_edges(4).is_empty());
}
