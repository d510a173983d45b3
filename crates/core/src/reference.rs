//! Extended-precision reference for measuring summation error.
//!
//! Products of two `f32` values are exact in `f64`, so the only error left is
//! in the additions. Neumaier's compensated summation carries the low-order
//! bits each addition drops and folds them back in at the end, giving a
//! result accurate to about one rounding regardless of length.

use cosim_shared::SimilarityError;

use crate::{Accumulation, compose, validate};

#[derive(Debug, Clone, Copy, Default)]
struct Neumaier {
  sum: f64,
  compensation: f64,
}

impl Neumaier {
  fn add(&mut self, term: f64) {
    let total = self.sum + term;
    if self.sum.abs() >= term.abs() {
      self.compensation += (self.sum - total) + term;
    } else {
      self.compensation += (term - total) + self.sum;
    }
    self.sum = total;
  }

  fn total(self) -> f64 {
    self.sum + self.compensation
  }
}

/// The accumulation triple computed with compensated summation.
pub fn reference_accumulate(u: &[f32], v: &[f32]) -> Result<Accumulation, SimilarityError> {
  validate(u, v)?;

  let mut dot_product = Neumaier::default();
  let mut sum_squared_u = Neumaier::default();
  let mut sum_squared_v = Neumaier::default();

  for (&x, &y) in u.iter().zip(v) {
    let x = f64::from(x);
    let y = f64::from(y);
    dot_product.add(x * y);
    sum_squared_u.add(x * x);
    sum_squared_v.add(y * y);
  }

  Ok(Accumulation {
    dot_product: dot_product.total(),
    sum_squared_u: sum_squared_u.total(),
    sum_squared_v: sum_squared_v.total(),
  })
}

/// Similarity composed from [`reference_accumulate`].
pub fn reference_similarity(u: &[f32], v: &[f32]) -> Result<f64, SimilarityError> {
  reference_accumulate(u, v).map(compose)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn recovers_terms_lost_to_a_large_leading_term() {
    let mut sum = Neumaier::default();
    sum.add(1e16);
    for _ in 0..1000 {
      sum.add(1.0);
    }
    assert_eq!(sum.total(), 1e16 + 1000.0);
  }

  #[test]
  fn recovers_cancellation() {
    let mut sum = Neumaier::default();
    for term in [1.0, 1e100, 1.0, -1e100] {
      sum.add(term);
    }
    assert_eq!(sum.total(), 2.0);
  }

  #[test]
  fn validates_lengths() {
    assert_eq!(
      reference_similarity(&[1.0], &[1.0, 2.0]),
      Err(SimilarityError::LengthMismatch)
    );
  }
}
