use crate::Accumulation;

/// Turn a raw triple into a similarity score in `[0, 1]`.
///
/// - a zero vector on either side scores `0`, including against itself;
/// - a negative cosine scores `0`, so opposite directions rank like
///   orthogonal ones;
/// - rounding can push `dot / magnitude` a few ulps past `1`; the score is
///   capped there.
///
/// A NaN or infinite element yields a NaN score, never a clamped one.
#[must_use]
pub fn compose(acc: Accumulation) -> f64 {
  // Squares of f32 values cannot overflow or underflow f64 here.
  let magnitude = (acc.sum_squared_u * acc.sum_squared_v).sqrt();
  if magnitude == 0.0 {
    return 0.0;
  }

  // `clamp` keeps NaN; `min`/`max` would turn it into a bound.
  (acc.dot_product / magnitude).clamp(0.0, 1.0)
}
