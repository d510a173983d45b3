use thiserror::Error;

/// The one condition the similarity engine refuses to compute through.
///
/// Zero vectors and anti-parallel vectors are not errors; they score `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimilarityError {
  /// The vectors differ in length, or at least one of them is empty.
  #[error("cannot compare vectors of different lengths")]
  LengthMismatch,
}
