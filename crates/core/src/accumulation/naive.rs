use super::{Accumulation, Accumulator};

/// Three independent sequential passes, one per sum.
///
/// The baseline: every partial sum carries the rounding error of all the
/// terms before it, so the error bound grows linearly with the length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Naive;

fn sequential_dot(a: &[f32], b: &[f32]) -> f64 {
  let mut sum = 0.0_f64;
  for (&x, &y) in a.iter().zip(b) {
    sum += f64::from(x) * f64::from(y);
  }
  sum
}

impl Accumulator for Naive {
  fn kernel(&self, u: &[f32], v: &[f32]) -> Accumulation {
    debug_assert_eq!(u.len(), v.len());

    Accumulation {
      dot_product: sequential_dot(u, v),
      sum_squared_u: sequential_dot(u, u),
      sum_squared_v: sequential_dot(v, v),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::accumulation::linear;

  #[test]
  fn matches_a_single_fused_pass() {
    let u = [0.25_f32, -3.0, 7.5, 1e-3, 2.0];
    let v = [4.0_f32, 0.5, -1.25, 9.0, 2.0];
    // Same terms, same order; only the loop shape differs.
    assert_eq!(Naive.kernel(&u, &v), linear(&u, &v));
  }

  #[test]
  fn computes_plain_sums() {
    let acc = Naive.kernel(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]);
    assert_eq!(acc.dot_product, 12.0);
    assert_eq!(acc.sum_squared_u, 14.0);
    assert_eq!(acc.sum_squared_v, 77.0);
  }
}
