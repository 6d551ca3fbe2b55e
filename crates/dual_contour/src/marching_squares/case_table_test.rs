use super::*;
use crate::constants::corner_offset;

/// Position of the midpoint of a cell edge.
fn edge_midpoint(edge: u8) -> [f64; 2] {
  let [c0, c1] = SQUARE_EDGES[edge as usize];
  [
    0.5 * (corner_offset(c0, 0) + corner_offset(c1, 0)) as f64,
    0.5 * (corner_offset(c0, 1) + corner_offset(c1, 1)) as f64,
  ]
}

#[test]
fn test_crossing_table_homogeneous() {
  assert_eq!(CROSSING_TABLE[0], 0);
  assert_eq!(CROSSING_TABLE[15], 0);
}

#[test]
fn test_crossing_table_single_corner() {
  // Single solid corner crosses exactly its 2 edges
  for corner in 0..4 {
    assert_eq!(CROSSING_TABLE[1 << corner].count_ones(), 2);
  }
}

#[test]
fn test_crossing_table_symmetry() {
  for case in 0..16 {
    assert_eq!(CROSSING_TABLE[case], CROSSING_TABLE[15 - case]);
  }
}

#[test]
fn test_segments_cover_each_crossing_once() {
  for (case, segments) in SEGMENT_TABLE.iter().enumerate() {
    let mut covered = 0u8;
    for &[from, to] in segments.iter() {
      assert_ne!(from, to);
      for edge in [from, to] {
        assert_eq!(covered & (1 << edge), 0, "case {} edge {} twice", case, edge);
        covered |= 1 << edge;
      }
    }
    assert_eq!(covered, CROSSING_TABLE[case], "case {}", case);
  }
}

#[test]
fn test_complement_reverses_segments() {
  // Flipping solid and empty flips the direction (saddles excepted)
  for case in 0..16usize {
    if case == 6 || case == 9 || SEGMENT_TABLE[case].is_empty() {
      continue;
    }
    let [from, to] = SEGMENT_TABLE[case][0];
    assert_eq!(SEGMENT_TABLE[15 - case], &[[to, from]]);
  }
}

#[test]
fn test_solid_corners_on_the_right() {
  for (case, segments) in SEGMENT_TABLE.iter().enumerate() {
    for &[from, to] in segments.iter() {
      let a = edge_midpoint(from);
      let b = edge_midpoint(to);
      let dir = [b[0] - a[0], b[1] - a[1]];
      for corner in 0..4usize {
        let p = [corner_offset(corner, 0) as f64, corner_offset(corner, 1) as f64];
        // Cross product sign: negative means p is right of a → b
        let side = dir[0] * (p[1] - a[1]) - dir[1] * (p[0] - a[0]);
        let solid = (case >> corner) & 1 == 1;
        if side < -1e-12 && segments.len() == 1 {
          assert!(solid, "case {} corner {} right but empty", case, corner);
        }
        if side > 1e-12 && segments.len() == 1 {
          assert!(!solid, "case {} corner {} left but solid", case, corner);
        }
      }
    }
  }
}

#[test]
fn test_saddles_isolate_solid_corners() {
  // Each saddle segment has exactly one solid corner on its right
  for case in [6usize, 9] {
    for &[from, to] in SEGMENT_TABLE[case].iter() {
      let a = edge_midpoint(from);
      let b = edge_midpoint(to);
      let dir = [b[0] - a[0], b[1] - a[1]];
      let right: Vec<usize> = (0..4usize)
        .filter(|&c| {
          let p = [corner_offset(c, 0) as f64, corner_offset(c, 1) as f64];
          dir[0] * (p[1] - a[1]) - dir[1] * (p[0] - a[0]) < 0.0
        })
        .collect();
      assert_eq!(right.len(), 1);
      assert_eq!((case >> right[0]) & 1, 1);
    }
  }
}
