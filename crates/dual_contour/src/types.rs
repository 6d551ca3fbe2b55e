//! Core data types for contour extraction.

use std::ops::Add;

use glam::{DVec2, DVec3};

use crate::constants::DEFAULT_BIAS_STRENGTH;
use crate::error::{ContourError, ContourResult};

/// Oriented 2D boundary segment.
///
/// Segments produced by the extractors keep solid on their right-hand side
/// (y up), so closed loops wind clockwise around solid regions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
  pub v1: DVec2,
  pub v2: DVec2,
}

impl Edge {
  pub fn new(v1: DVec2, v2: DVec2) -> Self {
    Self { v1, v2 }
  }

  /// Reverse the edge when `swap` holds.
  #[inline]
  pub fn swap(self, swap: bool) -> Self {
    if swap {
      Self::new(self.v2, self.v1)
    } else {
      self
    }
  }

  /// Vector from `v1` to `v2`.
  #[inline]
  pub fn direction(&self) -> DVec2 {
    self.v2 - self.v1
  }
}

/// Mesh face referencing vertices by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
  Tri([u32; 3]),
  Quad([u32; 4]),
}

impl Face {
  /// Reverse the winding when `swap` holds.
  #[inline]
  pub fn swap(self, swap: bool) -> Self {
    if !swap {
      return self;
    }
    match self {
      Face::Tri([a, b, c]) => Face::Tri([c, b, a]),
      Face::Quad([a, b, c, d]) => Face::Quad([d, c, b, a]),
    }
  }

  /// Re-index every vertex reference.
  #[inline]
  pub fn map(self, f: impl Fn(u32) -> u32) -> Self {
    match self {
      Face::Tri(v) => Face::Tri(v.map(f)),
      Face::Quad(v) => Face::Quad(v.map(f)),
    }
  }

  /// Vertex indices in winding order.
  #[inline]
  pub fn indices(&self) -> &[u32] {
    match self {
      Face::Tri(v) => v,
      Face::Quad(v) => v,
    }
  }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
  pub min: DVec3,
  pub max: DVec3,
}

impl Aabb3 {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: DVec3::INFINITY,
      max: DVec3::NEG_INFINITY,
    }
  }

  pub fn new(min: DVec3, max: DVec3) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: DVec3) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min.cmple(self.max).all()
  }
}

impl Default for Aabb3 {
  fn default() -> Self {
    Self::empty()
  }
}

/// Vertices plus faces referencing them by index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
  pub vertices: Vec<DVec3>,
  pub faces: Vec<Face>,
}

impl Mesh {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_parts(vertices: Vec<DVec3>, faces: Vec<Face>) -> Self {
    Self { vertices, faces }
  }

  /// Returns true if no faces were generated.
  pub fn is_empty(&self) -> bool {
    self.faces.is_empty()
  }

  /// Number of triangles after fanning every face.
  pub fn triangle_count(&self) -> usize {
    self
      .faces
      .iter()
      .map(|face| face.indices().len() - 2)
      .sum()
  }

  /// Append `other`, shifting its face indices past this mesh's vertices.
  pub fn extend(&mut self, other: &Mesh) {
    let offset = self.vertices.len() as u32;
    self.vertices.extend_from_slice(&other.vertices);
    self
      .faces
      .extend(other.faces.iter().map(|face| face.map(|v| v + offset)));
  }

  /// Copy of the mesh moved by `offset`.
  pub fn translate(&self, offset: DVec3) -> Mesh {
    Mesh {
      vertices: self.vertices.iter().map(|&v| v + offset).collect(),
      faces: self.faces.clone(),
    }
  }

  /// Bounding box encompassing all vertices.
  pub fn bounds(&self) -> Aabb3 {
    let mut bounds = Aabb3::empty();
    for &v in &self.vertices {
      bounds.encapsulate(v);
    }
    bounds
  }

  /// Copy of the mesh with every quad split into two triangles.
  ///
  /// Quads split along their shorter diagonal for better triangle quality.
  /// Winding is preserved.
  pub fn triangulate(&self) -> Mesh {
    let mut faces = Vec::with_capacity(self.triangle_count());
    for face in &self.faces {
      match *face {
        Face::Tri(_) => faces.push(*face),
        Face::Quad([a, b, c, d]) => {
          let diag_ac = self.vertex(a).distance_squared(self.vertex(c));
          let diag_bd = self.vertex(b).distance_squared(self.vertex(d));
          if diag_ac <= diag_bd {
            faces.push(Face::Tri([a, b, c]));
            faces.push(Face::Tri([a, c, d]));
          } else {
            faces.push(Face::Tri([a, b, d]));
            faces.push(Face::Tri([b, c, d]));
          }
        }
      }
    }
    Mesh {
      vertices: self.vertices.clone(),
      faces,
    }
  }

  #[inline]
  fn vertex(&self, index: u32) -> DVec3 {
    self.vertices[index as usize]
  }
}

impl Add for Mesh {
  type Output = Mesh;

  fn add(mut self, rhs: Mesh) -> Mesh {
    self.extend(&rhs);
    self
  }
}

/// Configuration for contour extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct ContourConfig {
  /// Place vertices by QEF minimization (true) or at cell midpoints (false).
  pub adaptive: bool,

  /// Add weak rows pulling the QEF solution toward the mean crossing.
  pub bias: bool,

  /// Strength of the bias rows, relative to 1.0 for unit normals.
  pub bias_strength: f64,

  /// Constrain the QEF solution to the cell via the fallback ladder.
  pub boundary: bool,

  /// Clamp the final vertex into the cell.
  pub clip: bool,
}

impl Default for ContourConfig {
  fn default() -> Self {
    Self {
      adaptive: true,
      bias: true,
      bias_strength: DEFAULT_BIAS_STRENGTH,
      boundary: true,
      clip: false,
    }
  }
}

impl ContourConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_adaptive(mut self, adaptive: bool) -> Self {
    self.adaptive = adaptive;
    self
  }

  pub fn with_bias(mut self, bias: bool) -> Self {
    self.bias = bias;
    self
  }

  pub fn with_bias_strength(mut self, strength: f64) -> Self {
    self.bias_strength = strength;
    self
  }

  pub fn with_boundary(mut self, boundary: bool) -> Self {
    self.boundary = boundary;
    self
  }

  pub fn with_clip(mut self, clip: bool) -> Self {
    self.clip = clip;
    self
  }

  /// Check the configuration before traversal starts.
  pub fn validate(&self) -> ContourResult<()> {
    if !(self.bias_strength.is_finite() && self.bias_strength >= 0.0) {
      return Err(ContourError::InvalidBiasStrength(self.bias_strength));
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
