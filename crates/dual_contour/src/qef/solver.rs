//! Vertex placement for a single cell.
//!
//! The unconstrained minimizer of a QEF may land outside the cell that
//! produced it. With `boundary` enabled the solver then walks a fallback
//! ladder, re-solving with coordinates pinned to the cell boundary:
//!
//! ```text
//!   unconstrained ──outside──► faces ──none inside──► edges (3D) ──► corners
//!         │                      │                       │             │
//!       inside                best inside             best inside    best
//!         ▼                      ▼                       ▼             ▼
//!                              vertex (then optional clip)
//! ```
//!
//! Within a rung candidates are visited axis-major, lower bound first, and
//! the first candidate with the strictly smallest residual wins.

use super::{Crossing, Qef, QefSolution};
use crate::constants::INSIDE_TOLERANCE;
use crate::grid::CellBounds;
use crate::types::ContourConfig;

/// Solve for the vertex of `cell` from its crossings.
///
/// Order of operations: bias rows, unconstrained solve, boundary ladder,
/// clip. The returned residual is always measured against the biased
/// system at the returned position.
pub fn solve_qef<const D: usize>(
  crossings: &[Crossing<D>],
  cell: &CellBounds<D>,
  config: &ContourConfig,
) -> QefSolution<D> {
  let mut qef = Qef::new(crossings);
  if config.bias {
    qef = qef.with_bias(config.bias_strength);
  }

  let mut solution = qef.solve();
  if config.boundary && !cell.contains(&solution.position, INSIDE_TOLERANCE) {
    solution = solve_on_boundary(&qef, cell);
  }

  if config.clip {
    let clamped = cell.clamp(solution.position);
    if clamped != solution.position {
      solution.position = clamped;
      solution.residual = qef.evaluate(&clamped);
    }
  }

  solution
}

/// Walk the fallback ladder: faces, then edges (3D and up), then corners.
fn solve_on_boundary<const D: usize>(qef: &Qef<D>, cell: &CellBounds<D>) -> QefSolution<D> {
  let mut best = Best::default();
  for axis in 0..D {
    for value in cell.axis_bounds(axis) {
      best.offer(qef.fix_axis(axis, value).solve(), cell);
    }
  }
  if let Some(solution) = best.0 {
    return solution;
  }

  if D >= 3 {
    for first in 0..D {
      for second in first + 1..D {
        for v0 in cell.axis_bounds(first) {
          let pinned = qef.fix_axis(first, v0);
          for v1 in cell.axis_bounds(second) {
            best.offer(pinned.fix_axis(second, v1).solve(), cell);
          }
        }
      }
    }
    if let Some(solution) = best.0 {
      return solution;
    }
  }

  let mut corner_best: Option<QefSolution<D>> = None;
  for corner in cell.corners() {
    let pinned = (0..D).fold(qef.clone(), |q, axis| q.fix_axis(axis, corner[axis]));
    let candidate = pinned.solve();
    if corner_best.map_or(true, |b| candidate.residual < b.residual) {
      corner_best = Some(candidate);
    }
  }
  corner_best.unwrap_or_else(|| qef.solve())
}

/// Lowest-residual candidate that lies inside the cell.
struct Best<const D: usize>(Option<QefSolution<D>>);

impl<const D: usize> Default for Best<D> {
  fn default() -> Self {
    Self(None)
  }
}

impl<const D: usize> Best<D> {
  #[inline]
  fn offer(&mut self, candidate: QefSolution<D>, cell: &CellBounds<D>) {
    if !cell.contains(&candidate.position, INSIDE_TOLERANCE) {
      return;
    }
    if self.0.map_or(true, |b| candidate.residual < b.residual) {
      self.0 = Some(candidate);
    }
  }
}

#[cfg(test)]
#[path = "solver_test.rs"]
mod solver_test;
