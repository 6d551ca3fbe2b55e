//! Uniform cell grid over an axis-aligned bounding box.
//!
//! A `Grid<D>` covers `[min, min + dims * cell_size]` on every axis. Cells and
//! grid points are addressed by integer index tuples; grid point `i` sits at
//! `min + i * cell_size`, so cell `c` spans grid points `c` to `c + 1`.
//!
//! # Memory Layout
//!
//! ```text
//! Per-cell arenas are flat and row-major, axis 0 outermost:
//!
//!   index = ((c0 * dims[1]) + c1) * dims[2] + c2
//!
//! Iteration order of `cells()` follows the same layout, so pass 1 writes
//! arena slots sequentially.
//! ```

use crate::constants::*;
use crate::error::{ContourError, ContourResult};

/// Relative slack when snapping an extent to a whole number of cells.
const CELL_COUNT_SNAP: f64 = 1e-9;

/// Uniform grid of `D`-dimensional cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid<const D: usize> {
  min: [f64; D],
  cell_size: f64,
  dims: [usize; D],
}

/// 2D grid of square cells.
pub type Grid2 = Grid<2>;

/// 3D grid of cubic cells.
pub type Grid3 = Grid<3>;

impl<const D: usize> Grid<D> {
  /// Create a grid covering `[min, max]` with cubic cells of `cell_size`.
  ///
  /// Extents that are not a whole multiple of the cell size round up, so the
  /// grid may reach slightly past `max`.
  pub fn new(min: [f64; D], max: [f64; D], cell_size: f64) -> ContourResult<Self> {
    if !(cell_size.is_finite() && cell_size > 0.0) {
      return Err(ContourError::InvalidCellSize(cell_size));
    }

    let mut dims = [0usize; D];
    let mut cells = 1usize;
    for axis in 0..D {
      let (lo, hi) = (min[axis], max[axis]);
      if !(lo.is_finite() && hi.is_finite() && lo < hi) {
        return Err(ContourError::InvalidBounds {
          axis,
          min: lo,
          max: hi,
        });
      }

      let span = (hi - lo) / cell_size;
      let count = if (span - span.round()).abs() <= CELL_COUNT_SNAP * span.max(1.0) {
        span.round()
      } else {
        span.ceil()
      }
      .max(1.0);

      if !(count <= MAX_CELLS as f64) {
        return Err(ContourError::TooManyCells { cells: usize::MAX });
      }
      dims[axis] = count as usize;
      cells = cells.saturating_mul(dims[axis]);
    }

    if cells > MAX_CELLS {
      return Err(ContourError::TooManyCells { cells });
    }

    Ok(Self {
      min,
      cell_size,
      dims,
    })
  }

  /// Lower corner of the grid.
  #[inline]
  pub fn min(&self) -> [f64; D] {
    self.min
  }

  /// Upper corner of the grid (`min + dims * cell_size`).
  pub fn max(&self) -> [f64; D] {
    std::array::from_fn(|axis| self.min[axis] + self.dims[axis] as f64 * self.cell_size)
  }

  #[inline]
  pub fn cell_size(&self) -> f64 {
    self.cell_size
  }

  /// Number of cells along each axis.
  #[inline]
  pub fn dims(&self) -> [usize; D] {
    self.dims
  }

  /// Total number of cells.
  pub fn cell_count(&self) -> usize {
    self.dims.iter().product()
  }

  /// Whether `cell` addresses a cell of this grid.
  pub fn contains_cell(&self, cell: [usize; D]) -> bool {
    cell.iter().zip(self.dims.iter()).all(|(c, d)| c < d)
  }

  /// Packed row-major index of a cell.
  #[inline]
  pub fn linear_index(&self, cell: [usize; D]) -> usize {
    debug_assert!(self.contains_cell(cell), "cell {:?} outside grid", cell);
    let mut index = 0;
    for axis in 0..D {
      index = index * self.dims[axis] + cell[axis];
    }
    index
  }

  /// Inverse of [`Grid::linear_index`].
  #[inline]
  pub fn cell_at(&self, mut index: usize) -> [usize; D] {
    let mut cell = [0usize; D];
    for axis in (0..D).rev() {
      cell[axis] = index % self.dims[axis];
      index /= self.dims[axis];
    }
    cell
  }

  /// Iterate all cells in packed index order.
  pub fn cells(&self) -> impl Iterator<Item = [usize; D]> + '_ {
    (0..self.cell_count()).map(move |index| self.cell_at(index))
  }

  /// Position of a grid point (cell corner lattice, `0..=dims` per axis).
  #[inline]
  pub fn point(&self, grid_point: [usize; D]) -> [f64; D] {
    std::array::from_fn(|axis| self.min[axis] + grid_point[axis] as f64 * self.cell_size)
  }

  /// Geometric extent of a cell.
  pub fn cell_bounds(&self, cell: [usize; D]) -> CellBounds<D> {
    CellBounds {
      min: self.point(cell),
      max: self.point(std::array::from_fn(|axis| cell[axis] + 1)),
    }
  }
}

impl<const D: usize> Default for Grid<D> {
  fn default() -> Self {
    Self {
      min: [DEFAULT_MIN; D],
      cell_size: DEFAULT_CELL_SIZE,
      dims: [DEFAULT_CELLS_PER_AXIS; D],
    }
  }
}

/// Axis-aligned extent of a single cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellBounds<const D: usize> {
  /// Minimum corner (inclusive).
  pub min: [f64; D],
  /// Maximum corner (inclusive).
  pub max: [f64; D],
}

impl<const D: usize> CellBounds<D> {
  pub fn new(min: [f64; D], max: [f64; D]) -> Self {
    debug_assert!(
      (0..D).all(|axis| min[axis] <= max[axis]),
      "cell min must be <= max on all axes"
    );
    Self { min, max }
  }

  /// Check if the cell contains a point, allowing `tolerance` of slack.
  ///
  /// Non-finite coordinates are never contained.
  #[inline]
  pub fn contains(&self, point: &[f64; D], tolerance: f64) -> bool {
    (0..D).all(|axis| {
      point[axis] >= self.min[axis] - tolerance && point[axis] <= self.max[axis] + tolerance
    })
  }

  /// Clamp each coordinate into the cell.
  #[inline]
  pub fn clamp(&self, point: [f64; D]) -> [f64; D] {
    std::array::from_fn(|axis| point[axis].clamp(self.min[axis], self.max[axis]))
  }

  /// Cell midpoint.
  pub fn center(&self) -> [f64; D] {
    std::array::from_fn(|axis| 0.5 * (self.min[axis] + self.max[axis]))
  }

  /// Position of a corner, bit `k` of `corner` selecting `max` on axis `k`.
  #[inline]
  pub fn corner(&self, corner: usize) -> [f64; D] {
    std::array::from_fn(|axis| {
      if corner_offset(corner, axis) == 0 {
        self.min[axis]
      } else {
        self.max[axis]
      }
    })
  }

  /// All `2^D` corners in corner-index order.
  pub fn corners(&self) -> impl Iterator<Item = [f64; D]> + '_ {
    (0..corner_count(D)).map(move |corner| self.corner(corner))
  }

  /// Lower and upper bound on one axis.
  #[inline]
  pub fn axis_bounds(&self, axis: usize) -> [f64; 2] {
    [self.min[axis], self.max[axis]]
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
