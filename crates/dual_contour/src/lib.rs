//! dual_contour - Boundary extraction from implicit fields
//!
//! This crate extracts the zero-level boundary of a signed scalar field
//! (positive = solid) on a uniform grid using Dual Contouring. Every cell
//! that straddles the surface gets one vertex, placed by minimizing a
//! quadratic error function built from the edge crossings and surface
//! normals; neighbouring vertices are then stitched into oriented segments
//! (2D) or quads (3D).
//!
//! # Features
//!
//! - **Dual Contouring 2D/3D**: sharp features survive because vertices sit
//!   where the crossing tangents intersect, not at a centroid
//! - **Constrained QEF solving**: optional mass-point bias, a face → edge →
//!   corner fallback ladder that keeps vertices inside their cell, and
//!   optional clipping
//! - **Consistent orientation**: 2D loops wind clockwise around solid, 3D
//!   quads face out of the solid
//! - **Marching Squares**: primal 2D extractor for comparison
//!
//! # Example
//!
//! ```
//! use dual_contour::{dual_contour_3d, Ball, ContourConfig, Grid3};
//!
//! // Sphere of radius 2.5 in the default [-3, 3]³ grid of unit cells
//! let sphere = Ball::<3>::default();
//! let mesh = dual_contour_3d(&sphere, &Grid3::default(), &ContourConfig::default())?;
//!
//! println!(
//!   "Generated {} vertices, {} triangles",
//!   mesh.vertices.len(),
//!   mesh.triangle_count()
//! );
//! # Ok::<(), dual_contour::ContourError>(())
//! ```

pub mod constants;
pub mod error;
pub mod field;
pub mod grid;
pub mod qef;
pub mod types;

// Re-export commonly used items
pub use error::{ContourError, ContourResult};
pub use field::{Ball, Cube, FiniteDifference, FnField, ImplicitField, ScalarField, Wedge};
pub use grid::{CellBounds, Grid, Grid2, Grid3};
pub use qef::{solve_qef, Crossing, Qef, QefSolution, SolveStage};
pub use types::{Aabb3, ContourConfig, Edge, Face, Mesh};

// Dual contouring extraction
pub mod dual_contour;
pub use dual_contour::{adapt, dual_contour_2d, dual_contour_3d, find_cell_vertex};

// Primal 2D extraction
pub mod marching_squares;
pub use marching_squares::marching_squares;
