//! Per-cell vertex placement.
//!
//! Samples the cell corners, locates the surface crossing on every edge whose
//! endpoints disagree in sign, and hands the crossings to the QEF solver.

use smallvec::SmallVec;

use crate::constants::cell_edges;
use crate::error::{ContourError, ContourResult};
use crate::field::{normalize, ImplicitField};
use crate::grid::CellBounds;
use crate::qef::{solve_qef, Crossing};
use crate::types::ContourConfig;

/// Corner samples of one cell (4 in 2D, 8 in 3D).
type CornerSamples = SmallVec<[f64; 8]>;

/// Interpolation factor of the zero crossing between two samples.
///
/// Returns `t` in `[0, 1]` such that `v0 + t * (v1 - v0) = 0`. The samples
/// must lie on opposite sides of the surface (exactly one of them solid).
#[inline]
pub fn adapt(v0: f64, v1: f64) -> ContourResult<f64> {
  if (v0 > 0.0) == (v1 > 0.0) {
    return Err(ContourError::NoSignChange { v0, v1 });
  }
  Ok((0.0 - v0) / (v1 - v0))
}

/// Find the vertex of one cell.
///
/// Without adaptivity every cell gets its midpoint and the field is not
/// evaluated. Otherwise cells with fewer than two crossings have no vertex.
pub fn find_cell_vertex<F, const D: usize>(
  field: &F,
  cell: &CellBounds<D>,
  config: &ContourConfig,
) -> ContourResult<Option<[f64; D]>>
where
  F: ImplicitField<D> + ?Sized,
{
  if !config.adaptive {
    return Ok(Some(cell.center()));
  }

  let corners: SmallVec<[[f64; D]; 8]> = cell.corners().collect();
  let samples: CornerSamples = corners.iter().map(|&p| field.scalar(p)).collect();

  let mut crossings: SmallVec<[Crossing<D>; 12]> = SmallVec::new();
  for &[c0, c1] in cell_edges(D) {
    let (s0, s1) = (samples[c0], samples[c1]);
    if (s0 > 0.0) == (s1 > 0.0) {
      continue;
    }

    let t = adapt(s0, s1)?;
    let (p0, p1) = (corners[c0], corners[c1]);
    let position: [f64; D] = std::array::from_fn(|axis| p0[axis] + t * (p1[axis] - p0[axis]));
    let normal = normalize(field.normal(position)).ok_or_else(|| ContourError::DegenerateNormal {
      point: position.to_vec(),
    })?;
    crossings.push(Crossing::new(position, normal));
  }

  if crossings.len() < 2 {
    return Ok(None);
  }

  Ok(Some(solve_qef(&crossings, cell, config).position))
}

#[cfg(test)]
#[path = "cell_vertex_test.rs"]
mod cell_vertex_test;
