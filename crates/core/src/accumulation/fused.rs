use super::{Accumulation, Accumulator, linear};

/// A single sequential pass that accumulates the dot product and both
/// squared norms together. Same error profile as [`Naive`](super::Naive),
/// one read of each vector instead of two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FusedNaive;

impl Accumulator for FusedNaive {
  fn kernel(&self, u: &[f32], v: &[f32]) -> Accumulation {
    linear(u, v)
  }
}
