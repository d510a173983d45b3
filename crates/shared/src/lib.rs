mod error;
pub use error::SimilarityError;

mod env;
pub use env::{APP_ENV, AppEnv, OutputFormat};
