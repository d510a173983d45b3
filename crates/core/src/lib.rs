//! Cosine similarity over `f32` embeddings, computed with interchangeable
//! summation strategies so their rounding error and speed can be compared.
//!
//! ```
//! use cosim_core::{Strategy, similarity_pairwise};
//! use strum::IntoEnumIterator;
//!
//! let u = [1.0_f32, 1.0];
//! let v = [1.0_f32, 1.0];
//! assert_eq!(similarity_pairwise(&u, &v), Ok(1.0));
//! for strategy in Strategy::iter() {
//!   assert!(strategy.similarity(&u, &[1.0]).is_err());
//! }
//! ```
//!
//! Raw triples are only handed out after validation; the kernels themselves
//! are not reachable from outside the crate:
//!
//! ```compile_fail
//! use cosim_core::{Naive, Strategy};
//!
//! let _ = Strategy::from(Naive).kernel(&[1.0, 2.0], &[1.0]);
//! ```

pub use cosim_shared::SimilarityError;

mod accumulation;
pub use accumulation::{
  Accumulation, BLOCK_SIZE, Blocked, FusedNaive, Naive, PAIRWISE_THRESHOLD, Pairwise,
};

mod compose;
pub use compose::compose;

mod reference;
pub use reference::{reference_accumulate, reference_similarity};

mod strategy;
pub use strategy::{
  Strategy, similarity_blocked, similarity_fused_naive, similarity_naive, similarity_pairwise,
};

mod validate;
pub use validate::validate;
