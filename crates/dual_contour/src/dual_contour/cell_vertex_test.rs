use super::*;
use crate::field::{Ball, Cube, FiniteDifference, FnField, ScalarField};

fn cell2(min: [f64; 2]) -> CellBounds<2> {
  CellBounds::new(min, [min[0] + 1.0, min[1] + 1.0])
}

// adapt tests
#[test]
fn test_adapt_interpolates_zero_crossing() {
  assert_eq!(adapt(-1.0, 3.0), Ok(0.25));
  assert_eq!(adapt(3.0, -1.0), Ok(0.75));
  assert_eq!(adapt(1.0, -1.0), Ok(0.5));
}

#[test]
fn test_adapt_zero_counts_as_empty() {
  // 0 is not solid, so it pairs with a positive sample
  assert_eq!(adapt(0.0, 2.0), Ok(0.0));
  assert!(adapt(0.0, -2.0).is_err());
}

#[test]
fn test_adapt_rejects_same_sign() {
  assert_eq!(
    adapt(1.0, 2.0),
    Err(ContourError::NoSignChange { v0: 1.0, v1: 2.0 })
  );
  assert!(adapt(-1.0, -2.0).is_err());
}

// find_cell_vertex tests
#[test]
fn test_non_adaptive_returns_midpoint_without_sampling() {
  let field = FnField::new(
    |_: [f64; 2]| -> f64 { panic!("scalar sampled") },
    |_: [f64; 2]| -> [f64; 2] { panic!("normal sampled") },
  );
  let config = ContourConfig::default().with_adaptive(false);
  let vertex = find_cell_vertex(&field, &cell2([2.0, -1.0]), &config).unwrap();
  assert_eq!(vertex, Some([2.5, -0.5]));
}

#[test]
fn test_homogeneous_cell_has_no_vertex() {
  let disk = Ball::<2>::default();
  let config = ContourConfig::default();
  assert_eq!(find_cell_vertex(&disk, &cell2([0.0, 0.0]), &config), Ok(None));
  assert_eq!(find_cell_vertex(&disk, &cell2([5.0, 5.0]), &config), Ok(None));
}

#[test]
fn test_square_corner_is_recovered() {
  // Cell [2,3]² holds the corner (2.5, 2.5) of the default square
  let config = ContourConfig::default();
  let vertex = find_cell_vertex(&Cube::<2>::default(), &cell2([2.0, 2.0]), &config)
    .unwrap()
    .unwrap();
  assert!((vertex[0] - 2.5).abs() < 1e-3, "{:?}", vertex);
  assert!((vertex[1] - 2.5).abs() < 1e-3, "{:?}", vertex);
}

#[test]
fn test_square_corner_with_finite_difference_normals() {
  let square = Cube::<2>::default();
  let field = FiniteDifference::new(move |p: [f64; 2]| square.scalar(p));
  let config = ContourConfig::default().with_bias(false);
  let vertex = find_cell_vertex(&field, &cell2([2.0, 2.0]), &config)
    .unwrap()
    .unwrap();
  assert!((vertex[0] - 2.5).abs() < 1e-6, "{:?}", vertex);
  assert!((vertex[1] - 2.5).abs() < 1e-6, "{:?}", vertex);
}

#[test]
fn test_midpoint_rounds_off_square_corner() {
  let config = ContourConfig::default().with_adaptive(false);
  let vertex = find_cell_vertex(&Cube::<2>::default(), &cell2([2.0, 2.0]), &config).unwrap();
  assert_eq!(vertex, Some([2.5, 2.5]));

  let vertex = find_cell_vertex(&Cube::<2>::default(), &cell2([2.0, 1.0]), &config).unwrap();
  assert_eq!(vertex, Some([2.5, 1.5]));
}

#[test]
fn test_disk_vertex_close_to_circle() {
  let config = ContourConfig::default()
    .with_bias(false)
    .with_boundary(false);
  let cell = cell2([1.0, 2.0]);
  let vertex = find_cell_vertex(&Ball::<2>::default(), &cell, &config)
    .unwrap()
    .unwrap();
  let radius = (vertex[0] * vertex[0] + vertex[1] * vertex[1]).sqrt();
  assert!((radius - 2.5).abs() < 0.1, "radius {}", radius);
  assert!(cell.contains(&vertex, 1e-6));
}

#[test]
fn test_sphere_vertex_inside_cell_and_near_surface() {
  let cell = CellBounds::new([2.0, 0.0, 0.0], [3.0, 1.0, 1.0]);
  let vertex = find_cell_vertex(&Ball::<3>::default(), &cell, &ContourConfig::default())
    .unwrap()
    .unwrap();
  let radius = vertex.iter().map(|c| c * c).sum::<f64>().sqrt();
  assert!((radius - 2.5).abs() < 0.15, "radius {}", radius);
  assert!(cell.contains(&vertex, 1e-9));
  // Symmetric in y and z
  assert!((vertex[1] - vertex[2]).abs() < 1e-9);
}

#[test]
fn test_degenerate_normal_is_an_error() {
  let disk = Ball::<2>::default();
  let field = FnField::new(move |p: [f64; 2]| disk.scalar(p), |_: [f64; 2]| [0.0, 0.0]);
  let result = find_cell_vertex(&field, &cell2([2.0, 0.0]), &ContourConfig::default());
  match result {
    Err(ContourError::DegenerateNormal { point }) => {
      assert_eq!(point.len(), 2);
      assert!((point[0] - 2.5).abs() < 1e-12);
    }
    other => panic!("expected DegenerateNormal, got {:?}", other),
  }
}

#[test]
fn test_non_finite_normal_is_an_error() {
  let disk = Ball::<2>::default();
  let field = FnField::new(
    move |p: [f64; 2]| disk.scalar(p),
    |_: [f64; 2]| [f64::NAN, 1.0],
  );
  let result = find_cell_vertex(&field, &cell2([2.0, 0.0]), &ContourConfig::default());
  assert!(matches!(result, Err(ContourError::DegenerateNormal { .. })));
}

#[test]
fn test_unnormalized_normals_are_accepted() {
  let disk = Ball::<2>::default();
  let scaled = FnField::new(
    move |p: [f64; 2]| disk.scalar(p),
    move |p: [f64; 2]| disk.normal(p).map(|c| c * 40.0),
  );
  let config = ContourConfig::default();
  let cell = cell2([1.0, 2.0]);
  let a = find_cell_vertex(&scaled, &cell, &config).unwrap().unwrap();
  let b = find_cell_vertex(&disk, &cell, &config).unwrap().unwrap();
  assert!((a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9);
}
