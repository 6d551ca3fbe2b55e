//! Quadratic error functions over surface crossings.
//!
//! Each crossing contributes one row `n · x = n · p` to an overdetermined
//! linear system `A x = b`. The vertex of a cell is the least squares
//! minimizer of `‖A x - b‖`.
//!
//! ```text
//!         n₀ ↑          ↗ n₁
//!   ───────p₀──────┐  p₁
//!                   ╲╱      x minimizes Σ (nᵢ · (x - pᵢ))²
//!                   ╱╲
//! ```
//!
//! A [`Qef`] is an immutable value. [`Qef::fix_axis`] returns a copy with one
//! coordinate pinned, which is how the solver restricts the search to a cell
//! face, edge or corner. The least squares solve runs relative to the mean
//! crossing position (the mass point), so rank deficient systems resolve to
//! the solution closest to the mass point.

pub mod solver;

pub use solver::solve_qef;

use nalgebra::{DMatrix, DVector};

use crate::constants::SVD_EPSILON;

/// Point where the surface crosses a cell edge, with the field normal there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing<const D: usize> {
  pub position: [f64; D],
  pub normal: [f64; D],
}

impl<const D: usize> Crossing<D> {
  pub fn new(position: [f64; D], normal: [f64; D]) -> Self {
    Self { position, normal }
  }
}

/// How constrained the solve that produced a vertex was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolveStage {
  /// All coordinates free.
  Unconstrained,
  /// One coordinate pinned to a cell face.
  Face,
  /// All but one coordinate pinned (3D cell edges).
  Edge,
  /// Every coordinate pinned to a cell corner.
  Corner,
}

/// Minimizer of a [`Qef`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QefSolution<const D: usize> {
  pub position: [f64; D],
  /// `‖A x - b‖` at `position`, bias rows included.
  pub residual: f64,
  pub stage: SolveStage,
}

/// Linear least squares system with optionally pinned coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Qef<const D: usize> {
  /// One column per free axis, in axis order.
  a: DMatrix<f64>,
  b: DVector<f64>,
  fixed: [Option<f64>; D],
  mass_point: [f64; D],
}

impl<const D: usize> Qef<D> {
  /// Build the system from crossings. Normals are used as given.
  pub fn new(crossings: &[Crossing<D>]) -> Self {
    let rows = crossings.len();
    let a = DMatrix::from_fn(rows, D, |row, col| crossings[row].normal[col]);
    let b = DVector::from_fn(rows, |row, _| {
      let Crossing { position, normal } = &crossings[row];
      (0..D).map(|axis| normal[axis] * position[axis]).sum()
    });

    let mut mass_point = [0.0; D];
    if rows > 0 {
      for crossing in crossings {
        for axis in 0..D {
          mass_point[axis] += crossing.position[axis];
        }
      }
      let inv = (rows as f64).recip();
      mass_point = mass_point.map(|c| c * inv);
    }

    Self {
      a,
      b,
      fixed: [None; D],
      mass_point,
    }
  }

  /// Append one row per free axis pulling the solution toward the mass
  /// point with the given strength.
  pub fn with_bias(self, strength: f64) -> Self {
    let Self {
      a,
      b,
      fixed,
      mass_point,
    } = self;
    let rows = a.nrows();
    let cols = a.ncols();

    let mut a = a.resize_vertically(rows + cols, 0.0);
    let mut b = b.resize_vertically(rows + cols, 0.0);
    for (col, axis) in free_axes(&fixed).enumerate() {
      a[(rows + col, col)] = strength;
      b[rows + col] = strength * mass_point[axis];
    }

    Self {
      a,
      b,
      fixed,
      mass_point,
    }
  }

  /// Copy of the system with `axis` pinned to `value`.
  ///
  /// The pinned column's contribution moves to the right-hand side and the
  /// column is removed.
  pub fn fix_axis(&self, axis: usize, value: f64) -> Self {
    debug_assert!(axis < D, "axis {} out of range", axis);
    debug_assert!(self.fixed[axis].is_none(), "axis {} already fixed", axis);

    let col = self.column_of(axis);
    let b = &self.b - self.a.column(col) * value;
    let a = self.a.clone().remove_column(col);

    let mut fixed = self.fixed;
    fixed[axis] = Some(value);

    Self {
      a,
      b,
      fixed,
      mass_point: self.mass_point,
    }
  }

  /// Least squares minimizer over the free axes.
  ///
  /// Singular directions resolve toward the mass point.
  pub fn solve(&self) -> QefSolution<D> {
    let center = self.free_components(&self.mass_point);

    let x = if self.a.nrows() == 0 || self.a.ncols() == 0 {
      center
    } else {
      let rhs = &self.b - &self.a * &center;
      self
        .a
        .clone()
        .svd(true, true)
        .solve(&rhs, SVD_EPSILON)
        .map(|offset| offset + &center)
        .unwrap_or(center)
    };

    let mut position = [0.0; D];
    let mut col = 0;
    for axis in 0..D {
      position[axis] = match self.fixed[axis] {
        Some(value) => value,
        None => {
          col += 1;
          x[col - 1]
        }
      };
    }

    QefSolution {
      residual: self.residual(&x),
      position,
      stage: self.stage(),
    }
  }

  /// `‖A x - b‖` at `point`. Pinned coordinates of `point` are ignored.
  pub fn evaluate(&self, point: &[f64; D]) -> f64 {
    self.residual(&self.free_components(point))
  }

  /// Mean position of the crossings.
  pub fn mass_point(&self) -> [f64; D] {
    self.mass_point
  }

  /// Number of rows, bias rows included.
  pub fn rows(&self) -> usize {
    self.a.nrows()
  }

  /// Pinned value per axis.
  pub fn fixed(&self) -> [Option<f64>; D] {
    self.fixed
  }

  /// Stage implied by how many axes are pinned.
  pub fn stage(&self) -> SolveStage {
    match self.fixed.iter().filter(|f| f.is_some()).count() {
      0 => SolveStage::Unconstrained,
      n if n == D => SolveStage::Corner,
      1 => SolveStage::Face,
      _ => SolveStage::Edge,
    }
  }

  fn residual(&self, x: &DVector<f64>) -> f64 {
    if self.a.ncols() == 0 {
      return self.b.norm();
    }
    (&self.a * x - &self.b).norm()
  }

  fn free_components(&self, point: &[f64; D]) -> DVector<f64> {
    DVector::from_iterator(
      self.a.ncols(),
      free_axes(&self.fixed).map(|axis| point[axis]),
    )
  }

  /// Column holding `axis`: the number of free axes before it.
  fn column_of(&self, axis: usize) -> usize {
    self.fixed[..axis].iter().filter(|f| f.is_none()).count()
  }
}

fn free_axes<const D: usize>(fixed: &[Option<f64>; D]) -> impl Iterator<Item = usize> + '_ {
  (0..D).filter(move |&axis| fixed[axis].is_none())
}
