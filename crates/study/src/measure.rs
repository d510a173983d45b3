use cosim_core::{Strategy, compose, reference_accumulate};
use cosim_shared::SimilarityError;

/// How far one strategy lands from the compensated reference on one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
  pub strategy: Strategy,
  /// `|dot - reference_dot|`
  pub dot_error: f64,
  /// `dot_error / |reference_dot|`, or `dot_error` when the reference is zero.
  pub relative_dot_error: f64,
  /// `|score - reference_score|`
  pub score_error: f64,
}

pub fn measure(strategy: Strategy, u: &[f32], v: &[f32]) -> Result<Measurement, SimilarityError> {
  let reference = reference_accumulate(u, v)?;
  let acc = strategy.accumulate(u, v)?;

  let dot_error = (acc.dot_product - reference.dot_product).abs();
  let relative_dot_error = if reference.dot_product == 0.0 {
    dot_error
  } else {
    dot_error / reference.dot_product.abs()
  };

  Ok(Measurement {
    strategy,
    dot_error,
    relative_dot_error,
    score_error: (compose(acc) - compose(reference)).abs(),
  })
}
