use cosim_shared::SimilarityError;

/// Reject a pair that the accumulation kernels cannot walk in lockstep.
///
/// Empty vectors are rejected too: they have no direction to compare.
pub fn validate(u: &[f32], v: &[f32]) -> Result<(), SimilarityError> {
  if u.len() != v.len() || u.is_empty() {
    tracing::trace!(len_u = u.len(), len_v = v.len(), "rejecting vector pair");
    return Err(SimilarityError::LengthMismatch);
  }
  Ok(())
}
