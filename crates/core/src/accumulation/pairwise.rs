use super::{Accumulation, Accumulator, linear};

/// Sub-ranges shorter than this are summed sequentially.
pub const PAIRWISE_THRESHOLD: usize = 32;

/// Divide and conquer: split both vectors in half, accumulate each half,
/// add the two triples.
///
/// Rounding error grows with the depth of the tree, `O(log n)`, instead of
/// with the number of terms. Recursion depth is `log2(n / PAIRWISE_THRESHOLD)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pairwise;

fn pairwise(u: &[f32], v: &[f32]) -> Accumulation {
  if u.len() < PAIRWISE_THRESHOLD {
    return linear(u, v);
  }

  let mid = u.len() / 2;
  let (u_lo, u_hi) = u.split_at(mid);
  let (v_lo, v_hi) = v.split_at(mid);

  pairwise(u_lo, v_lo) + pairwise(u_hi, v_hi)
}

impl Accumulator for Pairwise {
  fn kernel(&self, u: &[f32], v: &[f32]) -> Accumulation {
    debug_assert_eq!(u.len(), v.len());
    pairwise(u, v)
  }
}
