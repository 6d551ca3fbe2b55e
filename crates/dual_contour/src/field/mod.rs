//! Implicit field capabilities consumed by the extractors.
//!
//! A field returns a signed value at any point; values `> 0` are solid. The
//! extractors only ever call two methods, so any closure, function pointer or
//! struct can act as a field:
//!
//! - [`ScalarField`]: the signed value. Implemented for every
//!   `Fn([f64; D]) -> f64`.
//! - [`ImplicitField`]: adds the surface normal, used by adaptive dual
//!   contouring to build the QEF.
//!
//! Normals may come from an analytic expression ([`FnField`], the
//! [`samplers`]) or be approximated from the scalar field by central
//! differences ([`FiniteDifference`]).

pub mod samplers;

pub use samplers::{Ball, Cube, Wedge};

use crate::constants::{DEFAULT_NORMAL_STEP, NORMAL_EPSILON};
use crate::error::{ContourError, ContourResult};

/// Signed scalar field over `D`-dimensional space.
pub trait ScalarField<const D: usize> {
  /// Signed value at `point`; positive is solid.
  fn scalar(&self, point: [f64; D]) -> f64;

  /// Whether `point` is solid.
  #[inline]
  fn is_solid(&self, point: [f64; D]) -> bool {
    self.scalar(point) > 0.0
  }
}

/// Scalar field that can also report its surface normal.
pub trait ImplicitField<const D: usize>: ScalarField<D> {
  /// Unit normal at `point`, pointing in the direction of steepest ascent of
  /// the field (into the solid).
  fn normal(&self, point: [f64; D]) -> [f64; D];
}

impl<F, const D: usize> ScalarField<D> for F
where
  F: Fn([f64; D]) -> f64,
{
  #[inline]
  fn scalar(&self, point: [f64; D]) -> f64 {
    self(point)
  }
}

/// Field assembled from a scalar closure and a normal closure.
#[derive(Clone, Copy)]
pub struct FnField<S, N> {
  scalar: S,
  normal: N,
}

impl<S, N> FnField<S, N> {
  pub fn new(scalar: S, normal: N) -> Self {
    Self { scalar, normal }
  }
}

impl<S, N, const D: usize> ScalarField<D> for FnField<S, N>
where
  S: Fn([f64; D]) -> f64,
{
  #[inline]
  fn scalar(&self, point: [f64; D]) -> f64 {
    (self.scalar)(point)
  }
}

impl<S, N, const D: usize> ImplicitField<D> for FnField<S, N>
where
  S: Fn([f64; D]) -> f64,
  N: Fn([f64; D]) -> [f64; D],
{
  #[inline]
  fn normal(&self, point: [f64; D]) -> [f64; D] {
    (self.normal)(point)
  }
}

/// Derives normals from a scalar field by central differences.
///
/// The normal along axis `i` is `(f(p + d·eᵢ) - f(p - d·eᵢ)) / 2d`, normalized.
/// A flat neighbourhood yields the zero vector, which the cell vertex finder
/// reports as [`ContourError::DegenerateNormal`].
#[derive(Clone, Copy, Debug)]
pub struct FiniteDifference<F> {
  field: F,
  step: f64,
}

impl<F> FiniteDifference<F> {
  /// Wrap `field` using the default step.
  pub fn new(field: F) -> Self {
    Self {
      field,
      step: DEFAULT_NORMAL_STEP,
    }
  }

  /// Wrap `field` with an explicit step; smaller steps approximate the
  /// gradient more closely.
  pub fn with_step(field: F, step: f64) -> ContourResult<Self> {
    if !(step.is_finite() && step > 0.0) {
      return Err(ContourError::InvalidStep(step));
    }
    Ok(Self { field, step })
  }

  #[inline]
  pub fn step(&self) -> f64 {
    self.step
  }

  /// The wrapped scalar field.
  pub fn inner(&self) -> &F {
    &self.field
  }
}

impl<F: ScalarField<D>, const D: usize> ScalarField<D> for FiniteDifference<F> {
  #[inline]
  fn scalar(&self, point: [f64; D]) -> f64 {
    self.field.scalar(point)
  }
}

impl<F: ScalarField<D>, const D: usize> ImplicitField<D> for FiniteDifference<F> {
  fn normal(&self, point: [f64; D]) -> [f64; D] {
    let gradient: [f64; D] = std::array::from_fn(|axis| {
      let mut ahead = point;
      let mut behind = point;
      ahead[axis] += self.step;
      behind[axis] -= self.step;
      (self.field.scalar(ahead) - self.field.scalar(behind)) / (2.0 * self.step)
    });
    normalize(gradient).unwrap_or([0.0; D])
  }
}

/// Scale `v` to unit length, or `None` when it is too short or non-finite.
#[inline]
pub fn normalize<const D: usize>(v: [f64; D]) -> Option<[f64; D]> {
  let len_sq: f64 = v.iter().map(|c| c * c).sum();
  if !len_sq.is_finite() || len_sq < NORMAL_EPSILON * NORMAL_EPSILON {
    return None;
  }
  let inv_len = len_sq.sqrt().recip();
  Some(v.map(|c| c * inv_len))
}
