use cosim_shared::SimilarityError;
use enum_dispatch::enum_dispatch;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::accumulation::{Accumulation, Accumulator, Blocked, FusedNaive, Naive, Pairwise};
use crate::{compose, validate};

/// The summation strategies, selectable by value.
///
/// All four satisfy the same contract: validate, accumulate, compose. They
/// differ only in the order the kernel adds its terms.
#[enum_dispatch(Accumulator)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
  Naive(Naive),
  Pairwise(Pairwise),
  Blocked(Blocked),
  FusedNaive(FusedNaive),
}

impl Strategy {
  /// Validated raw triple, before any score policy is applied.
  pub fn accumulate(&self, u: &[f32], v: &[f32]) -> Result<Accumulation, SimilarityError> {
    validate(u, v)?;
    Ok(self.kernel(u, v))
  }

  /// Cosine similarity in `[0, 1]`.
  pub fn similarity(&self, u: &[f32], v: &[f32]) -> Result<f64, SimilarityError> {
    self.accumulate(u, v).map(compose)
  }

  #[must_use]
  pub fn name(&self) -> &'static str {
    self.into()
  }
}

/// Similarity with three independent sequential passes.
pub fn similarity_naive(u: &[f32], v: &[f32]) -> Result<f64, SimilarityError> {
  Strategy::from(Naive).similarity(u, v)
}

/// Similarity with recursive pairwise summation.
pub fn similarity_pairwise(u: &[f32], v: &[f32]) -> Result<f64, SimilarityError> {
  Strategy::from(Pairwise).similarity(u, v)
}

/// Similarity with fixed-size block summation.
pub fn similarity_blocked(u: &[f32], v: &[f32]) -> Result<f64, SimilarityError> {
  Strategy::from(Blocked).similarity(u, v)
}

/// Similarity with one fused sequential pass.
pub fn similarity_fused_naive(u: &[f32], v: &[f32]) -> Result<f64, SimilarityError> {
  Strategy::from(FusedNaive).similarity(u, v)
}
