use super::{Accumulation, Accumulator, linear};

/// Length of each contiguous block. The trailing block may be shorter.
pub const BLOCK_SIZE: usize = 32;

/// Sequential accumulation inside fixed-size blocks, then a sequential sum of
/// the per-block triples.
///
/// Inside a block the error grows like [`Naive`](super::Naive); across blocks
/// every term is a block total, which keeps small terms from being swamped one
/// at a time. Memory is read strictly front to back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocked;

impl Accumulator for Blocked {
  fn kernel(&self, u: &[f32], v: &[f32]) -> Accumulation {
    debug_assert_eq!(u.len(), v.len());

    u.chunks(BLOCK_SIZE)
      .zip(v.chunks(BLOCK_SIZE))
      .map(|(u, v)| linear(u, v))
      .sum()
  }
}
