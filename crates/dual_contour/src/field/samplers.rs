//! Simple analytic fields for testing and debugging.
//!
//! These fields have known zero sets, which makes extracted boundaries easy
//! to verify: a disk/sphere, a square/cube and a sharp "X" crossing.

use super::{ImplicitField, ScalarField};

/// Disk (2D) or sphere (3D): `radius - |p - center|`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball<const D: usize> {
  pub center: [f64; D],
  pub radius: f64,
}

impl<const D: usize> Default for Ball<D> {
  fn default() -> Self {
    Self {
      center: [0.0; D],
      radius: 2.5,
    }
  }
}

impl<const D: usize> Ball<D> {
  pub fn new(center: [f64; D], radius: f64) -> Self {
    Self { center, radius }
  }

  #[inline]
  fn offset(&self, point: [f64; D]) -> [f64; D] {
    std::array::from_fn(|axis| point[axis] - self.center[axis])
  }
}

impl<const D: usize> ScalarField<D> for Ball<D> {
  #[inline]
  fn scalar(&self, point: [f64; D]) -> f64 {
    let d = self.offset(point);
    self.radius - d.iter().map(|c| c * c).sum::<f64>().sqrt()
  }
}

impl<const D: usize> ImplicitField<D> for Ball<D> {
  /// Points toward the center; zero at the center itself.
  fn normal(&self, point: [f64; D]) -> [f64; D] {
    let d = self.offset(point);
    let len = d.iter().map(|c| c * c).sum::<f64>().sqrt();
    if len == 0.0 {
      return [0.0; D];
    }
    d.map(|c| -c / len)
  }
}

/// Square (2D) or cube (3D): `half_extent - max_i |p_i - center_i|`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube<const D: usize> {
  pub center: [f64; D],
  pub half_extent: f64,
}

impl<const D: usize> Default for Cube<D> {
  fn default() -> Self {
    Self {
      center: [0.0; D],
      half_extent: 2.5,
    }
  }
}

impl<const D: usize> Cube<D> {
  pub fn new(center: [f64; D], half_extent: f64) -> Self {
    Self {
      center,
      half_extent,
    }
  }

  /// Axis with the largest offset from the center (lowest axis on ties).
  fn dominant_axis(&self, point: [f64; D]) -> (usize, f64) {
    let mut best = (0, 0.0f64);
    for axis in 0..D {
      let d = point[axis] - self.center[axis];
      if d.abs() > best.1.abs() {
        best = (axis, d);
      }
    }
    best
  }
}

impl<const D: usize> ScalarField<D> for Cube<D> {
  #[inline]
  fn scalar(&self, point: [f64; D]) -> f64 {
    let (_, d) = self.dominant_axis(point);
    self.half_extent - d.abs()
  }
}

impl<const D: usize> ImplicitField<D> for Cube<D> {
  /// Face normal of the dominant axis, pointing inward.
  fn normal(&self, point: [f64; D]) -> [f64; D] {
    let (axis, d) = self.dominant_axis(point);
    let mut n = [0.0; D];
    if d != 0.0 {
      n[axis] = -d.signum();
    }
    n
  }
}

/// Two diagonal lines crossing at `apex`: `|x - ax| - |y - ay|`.
///
/// Solid fills the left and right quadrants. The crossing is a sharp
/// feature that midpoint placement rounds off and QEF placement recovers.
/// Scalar only; pair it with [`super::FiniteDifference`] for normals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
  pub apex: [f64; 2],
}

impl Default for Wedge {
  fn default() -> Self {
    Self { apex: [0.5, 0.3] }
  }
}

impl Wedge {
  pub fn new(apex: [f64; 2]) -> Self {
    Self { apex }
  }
}

impl ScalarField<2> for Wedge {
  #[inline]
  fn scalar(&self, point: [f64; 2]) -> f64 {
    (point[0] - self.apex[0]).abs() - (point[1] - self.apex[1]).abs()
  }
}

#[cfg(test)]
#[path = "samplers_test.rs"]
mod samplers_test;
