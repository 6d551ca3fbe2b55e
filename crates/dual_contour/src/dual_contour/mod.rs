//! Dual contouring over a uniform grid.
//!
//! Extraction runs in two passes over a [`Grid`]:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 1: Vertices                             │
//! │  For each cell (row-major, axis 0 outermost):                   │
//! │    Sample corners, gather edge crossings + normals              │
//! │    Solve the cell QEF (or take the midpoint)                    │
//! │    Store the vertex in the cache slot of the packed cell index  │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 2: Stitching                            │
//! │  For each interior grid edge with a sign change:                │
//! │    2D: segment between the 2 cells sharing the edge             │
//! │    3D: quad between the 4 cells sharing the edge                │
//! │    Orient by which endpoint is solid                            │
//! │    Skip if any of those cells has no vertex                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Orientation
//!
//! ```text
//! 2D: solid on the right (y up)        3D: counter-clockwise seen from
//!                                          the empty side
//!   empty                                  (normals point solid → empty)
//!   ──────►
//!   solid
//! ```
//!
//! Closed 2D boundaries therefore wind clockwise around solid regions.

mod cell_vertex;

pub use cell_vertex::{adapt, find_cell_vertex};

use glam::{DVec2, DVec3};

use crate::error::ContourResult;
use crate::field::ImplicitField;
use crate::grid::{Grid, Grid2, Grid3};
use crate::types::{ContourConfig, Edge, Face, Mesh};

/// Extract the oriented boundary of a 2D field.
///
/// Returns segments in stitch order. Segments are not chained into loops.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "dual_contour::extract_2d"))]
pub fn dual_contour_2d<F>(field: &F, grid: &Grid2, config: &ContourConfig) -> ContourResult<Vec<Edge>>
where
  F: ImplicitField<2> + ?Sized,
{
  config.validate()?;
  let cache = VertexCache::build(field, grid, config)?;
  Ok(stitch_2d(field, grid, &cache))
}

/// Extract the oriented boundary surface of a 3D field as a quad mesh.
///
/// Mesh vertices are the cell vertices in cell order; faces are 0-based
/// quads.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "dual_contour::extract_3d"))]
pub fn dual_contour_3d<F>(field: &F, grid: &Grid3, config: &ContourConfig) -> ContourResult<Mesh>
where
  F: ImplicitField<3> + ?Sized,
{
  config.validate()?;
  let cache = VertexCache::build(field, grid, config)?;
  let faces = stitch_3d(field, grid, &cache);
  let vertices = cache.vertices.iter().map(|&v| DVec3::from_array(v)).collect();
  Ok(Mesh::from_parts(vertices, faces))
}

/// Cell vertices from pass 1, keyed by packed cell index.
pub(crate) struct VertexCache<const D: usize> {
  grid: Grid<D>,
  /// Index into `vertices` per cell, `None` for cells without a vertex.
  slots: Vec<Option<u32>>,
  vertices: Vec<[f64; D]>,
}

impl<const D: usize> VertexCache<D> {
  /// Run pass 1 over every cell of `grid`.
  pub(crate) fn build<F>(field: &F, grid: &Grid<D>, config: &ContourConfig) -> ContourResult<Self>
  where
    F: ImplicitField<D> + ?Sized,
  {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("vertex_pass", cells = grid.cell_count()).entered();

    let mut slots = Vec::with_capacity(grid.cell_count());
    let mut vertices = Vec::new();
    for cell in grid.cells() {
      let vertex = find_cell_vertex(field, &grid.cell_bounds(cell), config)?;
      slots.push(vertex.map(|v| {
        vertices.push(v);
        (vertices.len() - 1) as u32
      }));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(vertices = vertices.len(), "vertex pass complete");

    Ok(Self {
      grid: *grid,
      slots,
      vertices,
    })
  }

  /// Vertex index of `cell`.
  #[inline]
  pub(crate) fn index(&self, cell: [usize; D]) -> Option<u32> {
    self.slots[self.grid.linear_index(cell)]
  }

  /// Vertex position of `cell`.
  #[inline]
  pub(crate) fn position(&self, cell: [usize; D]) -> Option<[f64; D]> {
    self.index(cell).map(|i| self.vertices[i as usize])
  }

  /// Drop the vertex of `cell`, leaving a gap.
  #[cfg(test)]
  pub(crate) fn clear(&mut self, cell: [usize; D]) {
    let slot = self.grid.linear_index(cell);
    self.slots[slot] = None;
  }
}

/// Pass 2 in 2D: one segment per sign-changing interior grid edge.
pub(crate) fn stitch_2d<F>(field: &F, grid: &Grid2, cache: &VertexCache<2>) -> Vec<Edge>
where
  F: ImplicitField<2> + ?Sized,
{
  #[cfg(feature = "tracing")]
  let _span = tracing::info_span!("stitch_pass").entered();

  let [nx, ny] = grid.dims();
  let solid = |gx: usize, gy: usize| field.is_solid(grid.point([gx, gy]));
  let segment = |a: [usize; 2], b: [usize; 2]| -> Option<Edge> {
    let v1 = cache.position(a)?;
    let v2 = cache.position(b)?;
    Some(Edge::new(DVec2::from_array(v1), DVec2::from_array(v2)))
  };

  let mut edges = Vec::new();
  for gx in 0..nx {
    for gy in 0..ny {
      // Vertical grid line at gx, between the cells left and right of it
      if gx > 0 {
        let top = solid(gx, gy + 1);
        if solid(gx, gy) != top {
          if let Some(edge) = segment([gx - 1, gy], [gx, gy]) {
            edges.push(edge.swap(top));
          }
        }
      }

      // Horizontal grid line at gy, between the cells below and above it
      if gy > 0 {
        let left = solid(gx, gy);
        if left != solid(gx + 1, gy) {
          if let Some(edge) = segment([gx, gy - 1], [gx, gy]) {
            edges.push(edge.swap(left));
          }
        }
      }
    }
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(edges = edges.len(), "stitch pass complete");

  edges
}

/// Pass 2 in 3D: one quad per sign-changing interior grid edge.
pub(crate) fn stitch_3d<F>(field: &F, grid: &Grid3, cache: &VertexCache<3>) -> Vec<Face>
where
  F: ImplicitField<3> + ?Sized,
{
  #[cfg(feature = "tracing")]
  let _span = tracing::info_span!("stitch_pass").entered();

  let [nx, ny, nz] = grid.dims();
  let solid = |p: [usize; 3]| field.is_solid(grid.point(p));
  let quad = |cells: [[usize; 3]; 4]| -> Option<Face> {
    Some(Face::Quad([
      cache.index(cells[0])?,
      cache.index(cells[1])?,
      cache.index(cells[2])?,
      cache.index(cells[3])?,
    ]))
  };

  let mut faces = Vec::new();
  for gx in 0..nx {
    for gy in 0..ny {
      for gz in 0..nz {
        let near = solid([gx, gy, gz]);

        // Z-directed grid edge
        if gx > 0 && gy > 0 {
          let far = solid([gx, gy, gz + 1]);
          if near != far {
            let cells = [
              [gx - 1, gy - 1, gz],
              [gx, gy - 1, gz],
              [gx, gy, gz],
              [gx - 1, gy, gz],
            ];
            faces.extend(quad(cells).map(|f| f.swap(far)));
          }
        }

        // Y-directed grid edge
        if gx > 0 && gz > 0 {
          let far = solid([gx, gy + 1, gz]);
          if near != far {
            let cells = [
              [gx - 1, gy, gz - 1],
              [gx, gy, gz - 1],
              [gx, gy, gz],
              [gx - 1, gy, gz],
            ];
            faces.extend(quad(cells).map(|f| f.swap(near)));
          }
        }

        // X-directed grid edge
        if gy > 0 && gz > 0 {
          let far = solid([gx + 1, gy, gz]);
          if near != far {
            let cells = [
              [gx, gy - 1, gz - 1],
              [gx, gy, gz - 1],
              [gx, gy, gz],
              [gx, gy - 1, gz],
            ];
            faces.extend(quad(cells).map(|f| f.swap(far)));
          }
        }
      }
    }
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(faces = faces.len(), "stitch pass complete");

  faces
}
