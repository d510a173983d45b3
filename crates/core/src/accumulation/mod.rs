//! Summation kernels producing the raw `(dot, ‖u‖², ‖v‖²)` triple.
//!
//! Every kernel widens each `f32` element to `f64` before multiplying. The
//! product of two `f32` values is exact in `f64`, so the kernels only differ
//! in the order they add terms, which is where their rounding error comes from.
//!
//! Kernels assume their inputs were validated (equal, non-zero length). They
//! never apply the zero-magnitude or negative-score policies; those belong to
//! [`compose`](crate::compose).

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use enum_dispatch::enum_dispatch;

mod blocked;
pub use blocked::{BLOCK_SIZE, Blocked};

mod fused;
pub use fused::FusedNaive;

mod naive;
pub use naive::Naive;

mod pairwise;
pub use pairwise::{PAIRWISE_THRESHOLD, Pairwise};

/// Dot product and both squared norms of a vector pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulation {
  pub dot_product: f64,
  pub sum_squared_u: f64,
  pub sum_squared_v: f64,
}

impl Accumulation {
  pub const ZERO: Self = Self {
    dot_product: 0.0,
    sum_squared_u: 0.0,
    sum_squared_v: 0.0,
  };
}

impl Add for Accumulation {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    Self {
      dot_product: self.dot_product + rhs.dot_product,
      sum_squared_u: self.sum_squared_u + rhs.sum_squared_u,
      sum_squared_v: self.sum_squared_v + rhs.sum_squared_v,
    }
  }
}

impl AddAssign for Accumulation {
  fn add_assign(&mut self, rhs: Self) {
    *self = *self + rhs;
  }
}

impl Sum for Accumulation {
  /// Left-to-right, one partial triple at a time.
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::ZERO, Add::add)
  }
}

/// A summation strategy.
///
/// `kernel` trusts its caller to have validated the pair; with unequal lengths
/// it truncates or panics. Outside the crate the only way in is
/// [`Strategy::accumulate`](crate::Strategy::accumulate).
#[enum_dispatch]
pub(crate) trait Accumulator {
  fn kernel(&self, u: &[f32], v: &[f32]) -> Accumulation;
}

/// One sequential pass accumulating all three sums together.
pub(crate) fn linear(u: &[f32], v: &[f32]) -> Accumulation {
  debug_assert_eq!(u.len(), v.len());

  let mut dot_product = 0.0_f64;
  let mut sum_squared_u = 0.0_f64;
  let mut sum_squared_v = 0.0_f64;

  for (&x, &y) in u.iter().zip(v) {
    let x = f64::from(x);
    let y = f64::from(y);
    dot_product += x * y;
    sum_squared_u += x * x;
    sum_squared_v += y * y;
  }

  Accumulation {
    dot_product,
    sum_squared_u,
    sum_squared_v,
  }
}
