use rand::Rng;
use serde::Serialize;
use strum::{Display, EnumIter};

/// Leading element of an ill-conditioned pair. Its square, `1e16`, sits where
/// the spacing of `f64` is 2, so sequential summation drops unit-sized terms.
pub const LEADING_MAGNITUDE: f32 = 1e8;

/// Shape of the generated input pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Workload {
  /// Independent elements drawn from `[-1, 1)`.
  Uniform,
  /// A shared large leading element followed by small positive elements.
  IllConditioned,
}

/// Draw a vector pair of length `dimension` for `workload`.
pub fn generate_pair<R: Rng>(
  workload: Workload,
  dimension: usize,
  rng: &mut R,
) -> (Vec<f32>, Vec<f32>) {
  match workload {
    Workload::Uniform => (
      (0..dimension).map(|_| rng.gen_range(-1.0f32..1.0)).collect(),
      (0..dimension).map(|_| rng.gen_range(-1.0f32..1.0)).collect(),
    ),
    Workload::IllConditioned => {
      let mut u: Vec<f32> = (0..dimension).map(|_| rng.gen_range(0.5f32..1.0)).collect();
      let mut v: Vec<f32> = (0..dimension).map(|_| rng.gen_range(0.5f32..1.0)).collect();
      if let (Some(a), Some(b)) = (u.first_mut(), v.first_mut()) {
        *a = LEADING_MAGNITUDE;
        *b = LEADING_MAGNITUDE;
      }
      (u, v)
    }
  }
}

#[cfg(test)]
mod tests {
  use rand::{SeedableRng, rngs::StdRng};

  use super::*;

  #[test]
  fn pairs_have_the_requested_length() {
    let mut rng = StdRng::seed_from_u64(7);
    for dimension in [1, 33, 500] {
      let (u, v) = generate_pair(Workload::Uniform, dimension, &mut rng);
      assert_eq!((u.len(), v.len()), (dimension, dimension));
    }
  }

  #[test]
  fn ill_conditioned_pairs_lead_with_a_large_element() {
    let mut rng = StdRng::seed_from_u64(7);
    let (u, v) = generate_pair(Workload::IllConditioned, 64, &mut rng);
    assert_eq!(u[0], LEADING_MAGNITUDE);
    assert_eq!(v[0], LEADING_MAGNITUDE);
    assert!(u[1..].iter().chain(&v[1..]).all(|x| (0.5..1.0).contains(x)));
  }

  #[test]
  fn same_seed_same_pair() {
    let a = generate_pair(Workload::Uniform, 16, &mut StdRng::seed_from_u64(1));
    let b = generate_pair(Workload::Uniform, 16, &mut StdRng::seed_from_u64(1));
    assert_eq!(a, b);
  }
}
