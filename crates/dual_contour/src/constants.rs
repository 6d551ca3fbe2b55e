//! Grid, solver and cell topology constants.
//!
//! # Cell Corner Layout
//!
//! Bit `k` of a corner index selects the offset along axis `k`:
//!
//! ```text
//! 2D (binary: YX)               3D (binary: ZYX)
//!
//!   2 ──────── 3                  0 = (0,0,0)    4 = (0,0,1)
//!   │          │                  1 = (1,0,0)    5 = (1,0,1)
//!   │          │                  2 = (0,1,0)    6 = (0,1,1)
//!   │          │                  3 = (1,1,0)    7 = (1,1,1)
//!   0 ──────── 1
//!
//!  +Y                                     +Y
//!   │                                      │  +Z
//!   └── +X                                 │ /
//!                                          └───+X
//! ```
//!
//! # Default Bounds
//!
//! Extraction defaults to the `[-3, 3]` box on every axis with unit cells,
//! i.e. a 6×6 (2D) or 6×6×6 (3D) cell grid.

/// Default lower bound on every axis.
pub const DEFAULT_MIN: f64 = -3.0;

/// Default upper bound on every axis.
pub const DEFAULT_MAX: f64 = 3.0;

/// Default edge length of a grid cell.
pub const DEFAULT_CELL_SIZE: f64 = 1.0;

/// Cells per axis for the default bounds and cell size.
pub const DEFAULT_CELLS_PER_AXIS: usize = 6;

/// Strength of the mass-point bias rows, relative to 1.0 for unit normals.
pub const DEFAULT_BIAS_STRENGTH: f64 = 0.01;

/// Central difference step used when normals are derived from the scalar
/// field.
pub const DEFAULT_NORMAL_STEP: f64 = 0.01;

/// Singular values below this are treated as zero by the QEF solve.
///
/// Input normals are unit length and bias rows are scaled by
/// `DEFAULT_BIAS_STRENGTH`, so genuine singular values sit well above it.
pub const SVD_EPSILON: f64 = 1e-6;

/// Slack allowed when testing whether a solved point lies inside its cell.
pub const INSIDE_TOLERANCE: f64 = 1e-9;

/// Normals shorter than this are rejected as degenerate.
pub const NORMAL_EPSILON: f64 = 1e-12;

/// Largest number of cells a grid may hold (mesh faces index with `u32`).
pub const MAX_CELLS: usize = u32::MAX as usize;

/// Edge definitions of a 2D cell: pairs of corner indices.
pub const SQUARE_EDGES: [[usize; 2]; 4] = [
  [0, 1], // Edge 0: X axis at Y=0
  [0, 2], // Edge 1: Y axis at X=0
  [1, 3], // Edge 2: Y axis at X=1
  [2, 3], // Edge 3: X axis at Y=1
];

/// Edge definitions of a 3D cell: pairs of corner indices.
pub const CUBE_EDGES: [[usize; 2]; 12] = [
  [0, 1], // Edge 0:  X axis at Y=0, Z=0
  [0, 2], // Edge 1:  Y axis at X=0, Z=0
  [0, 4], // Edge 2:  Z axis at X=0, Y=0
  [1, 3], // Edge 3:  Y axis at X=1, Z=0
  [1, 5], // Edge 4:  Z axis at X=1, Y=0
  [2, 3], // Edge 5:  X axis at Y=1, Z=0
  [2, 6], // Edge 6:  Z axis at X=0, Y=1
  [3, 7], // Edge 7:  Z axis at X=1, Y=1
  [4, 5], // Edge 8:  X axis at Y=0, Z=1
  [4, 6], // Edge 9:  Y axis at X=0, Z=1
  [5, 7], // Edge 10: Y axis at X=1, Z=1
  [6, 7], // Edge 11: X axis at Y=1, Z=1
];

/// Cell edges for the given dimension.
///
/// Only 2 and 3 dimensions have edge tables; any other dimension has none.
#[inline]
pub const fn cell_edges(dimensions: usize) -> &'static [[usize; 2]] {
  match dimensions {
    2 => &SQUARE_EDGES,
    3 => &CUBE_EDGES,
    _ => &[],
  }
}

/// Number of corners of a cell in the given dimension.
#[inline(always)]
pub const fn corner_count(dimensions: usize) -> usize {
  1 << dimensions
}

/// Offset (0 or 1) of `corner` along `axis`.
#[inline(always)]
pub const fn corner_offset(corner: usize, axis: usize) -> usize {
  (corner >> axis) & 1
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
