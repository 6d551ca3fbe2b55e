//! Marching squares over a uniform 2D grid.
//!
//! The primal counterpart of [`crate::dual_contour_2d`]: segment endpoints
//! sit on cell edges instead of inside cells, so sharp corners are cut off.
//! Output follows the same winding (solid on the right of every segment).
//!
//! ```text
//!   For each cell:
//!     case = solid bits of the 4 corners
//!     for (from, to) in SEGMENT_TABLE[case]:
//!       place both ends on their edges (adapt, or edge midpoint)
//! ```
//!
//! Neighbouring cells interpolate shared edges from the same two samples in
//! the same order, so segment ends meet exactly.

mod case_table;

pub use case_table::{CROSSING_TABLE, SEGMENT_TABLE};

use glam::DVec2;

use crate::constants::{corner_count, SQUARE_EDGES};
use crate::dual_contour::adapt;
use crate::error::ContourResult;
use crate::field::ScalarField;
use crate::grid::{CellBounds, Grid2};
use crate::types::{ContourConfig, Edge};

/// Extract the oriented boundary of a 2D field with marching squares.
///
/// Only `config.adaptive` is consulted: interpolated crossings when set,
/// edge midpoints otherwise.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "marching_squares::extract"))]
pub fn marching_squares<F>(field: &F, grid: &Grid2, config: &ContourConfig) -> ContourResult<Vec<Edge>>
where
  F: ScalarField<2> + ?Sized,
{
  config.validate()?;

  let mut edges = Vec::new();
  for cell in grid.cells() {
    let bounds = grid.cell_bounds(cell);
    let samples: [f64; 4] = std::array::from_fn(|corner| field.scalar(bounds.corner(corner)));

    let case = (0..corner_count(2)).fold(0usize, |case, corner| {
      case | (((samples[corner] > 0.0) as usize) << corner)
    });
    if CROSSING_TABLE[case] == 0 {
      continue;
    }

    for &[from, to] in SEGMENT_TABLE[case] {
      let v1 = edge_point(&bounds, &samples, from, config.adaptive)?;
      let v2 = edge_point(&bounds, &samples, to, config.adaptive)?;
      edges.push(Edge::new(v1, v2));
    }
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(edges = edges.len(), "marching squares complete");

  Ok(edges)
}

/// Crossing on one cell edge.
#[inline]
fn edge_point(bounds: &CellBounds<2>, samples: &[f64; 4], edge: u8, adaptive: bool) -> ContourResult<DVec2> {
  let [c0, c1] = SQUARE_EDGES[edge as usize];
  let t = if adaptive {
    adapt(samples[c0], samples[c1])?
  } else {
    0.5
  };
  let p0 = DVec2::from_array(bounds.corner(c0));
  let p1 = DVec2::from_array(bounds.corner(c1));
  Ok(p0.lerp(p1, t))
}
