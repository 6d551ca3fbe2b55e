//! Benchmarks for dual contouring, the QEF solver and marching squares.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dual_contour::{
  dual_contour_2d, dual_contour_3d, marching_squares, solve_qef, Ball, CellBounds, ContourConfig,
  Crossing, Cube, FiniteDifference, Grid2, Grid3, Wedge,
};

/// Benchmark the per-cell solver on a system that needs the fallback ladder.
fn bench_solve_qef(c: &mut Criterion) {
  let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
  let crossings = [
    Crossing::new([0.5, 1.25, 1.25], [0.0, inv_sqrt2, inv_sqrt2]),
    Crossing::new([0.5, 1.25, 1.25], [0.0, inv_sqrt2, -inv_sqrt2]),
  ];
  let cell = CellBounds::new([0.0; 3], [1.0; 3]);

  let mut group = c.benchmark_group("solve_qef");
  for (name, config) in [
    ("unconstrained", ContourConfig::default().with_boundary(false)),
    ("boundary", ContourConfig::default()),
    ("clip", ContourConfig::default().with_boundary(false).with_clip(true)),
  ] {
    group.bench_with_input(BenchmarkId::new("3d", name), &config, |b, config| {
      b.iter(|| solve_qef(black_box(&crossings), &cell, config))
    });
  }
  group.finish();
}

/// Sphere at increasing grid resolution.
fn bench_sphere_3d(c: &mut Criterion) {
  let sphere = Ball::<3>::default();
  let mut group = c.benchmark_group("dual_contour_3d");

  for cell_size in [1.0, 0.5, 0.25] {
    let grid = Grid3::new([-3.0; 3], [3.0; 3], cell_size).unwrap();
    for (mode, config) in [
      ("adaptive", ContourConfig::default()),
      ("midpoint", ContourConfig::default().with_adaptive(false)),
    ] {
      group.bench_with_input(
        BenchmarkId::new(mode, format!("cell={}", cell_size)),
        &grid,
        |b, grid| b.iter(|| dual_contour_3d(black_box(&sphere), grid, &config)),
      );
    }
  }

  group.finish();
}

/// Sharp-featured cube with analytic versus finite difference normals.
fn bench_cube_normals(c: &mut Criterion) {
  let cube = Cube::<3>::default();
  let sampled = FiniteDifference::new(move |p: [f64; 3]| {
    let d = p.map(f64::abs);
    2.5 - d[0].max(d[1]).max(d[2])
  });
  let grid = Grid3::new([-3.0; 3], [3.0; 3], 0.5).unwrap();
  let config = ContourConfig::default();

  let mut group = c.benchmark_group("cube_normals");
  group.bench_function("analytic", |b| {
    b.iter(|| dual_contour_3d(black_box(&cube), &grid, &config))
  });
  group.bench_function("finite_difference", |b| {
    b.iter(|| dual_contour_3d(black_box(&sampled), &grid, &config))
  });
  group.finish();
}

/// Dual contouring against marching squares on the same 2D fields.
fn bench_2d_comparison(c: &mut Criterion) {
  let grid = Grid2::new([-3.0; 2], [3.0; 2], 0.1).unwrap();
  let config = ContourConfig::default();
  let disk = Ball::<2>::default();
  let wedge = FiniteDifference::new(Wedge::default());

  let mut group = c.benchmark_group("2d_comparison");
  group.bench_function("dual_contour (disk)", |b| {
    b.iter(|| dual_contour_2d(black_box(&disk), &grid, &config))
  });
  group.bench_function("marching_squares (disk)", |b| {
    b.iter(|| marching_squares(black_box(&disk), &grid, &config))
  });
  group.bench_function("dual_contour (wedge)", |b| {
    b.iter(|| dual_contour_2d(black_box(&wedge), &grid, &config))
  });
  group.bench_function("marching_squares (wedge)", |b| {
    b.iter(|| marching_squares(black_box(&wedge), &grid, &config))
  });
  group.finish();
}

criterion_group!(
  benches,
  bench_solve_qef,
  bench_sphere_3d,
  bench_cube_normals,
  bench_2d_comparison
);
criterion_main!(benches);
