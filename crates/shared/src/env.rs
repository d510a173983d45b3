use std::env;
use std::sync::LazyLock;

use strum::EnumString;

const DEFAULT_DIMENSIONS: &[usize] = &[32, 256, 4096, 65_536];
const DEFAULT_TRIALS: usize = 16;
const DEFAULT_SEED: u64 = 42;

/// How the study runner reports its rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
  /// One `info` event per row.
  #[default]
  Log,
  /// One JSON object per line on stdout.
  Json,
}

pub struct AppEnv {
  pub dimensions: Vec<usize>,
  pub trials: usize,
  pub seed: u64,
  pub output: OutputFormat,
}

impl AppEnv {
  fn new() -> Self {
    Self {
      dimensions: var_or("COSIM_DIMENSIONS", parse_dimensions, || {
        DEFAULT_DIMENSIONS.to_vec()
      }),
      trials: var_or("COSIM_TRIALS", |s| s.trim().parse().ok(), || DEFAULT_TRIALS),
      seed: var_or("COSIM_SEED", |s| s.trim().parse().ok(), || DEFAULT_SEED),
      output: var_or("COSIM_OUTPUT", |s| s.trim().parse().ok(), OutputFormat::default),
    }
  }
}

/// Read `key`, falling back to `default` when it is unset or does not parse.
fn var_or<T>(
  key: &str,
  parse: impl FnOnce(&str) -> Option<T>,
  default: impl FnOnce() -> T,
) -> T {
  let Ok(raw) = env::var(key) else {
    return default();
  };
  parse(&raw).unwrap_or_else(|| {
    tracing::warn!(key, value = %raw, "ignoring unparseable environment variable");
    default()
  })
}

/// Comma-separated positive lengths. Any zero or garbage entry rejects the whole list.
fn parse_dimensions(raw: &str) -> Option<Vec<usize>> {
  let dimensions = raw
    .split(',')
    .map(|part| part.trim().parse::<usize>().ok().filter(|&n| n > 0))
    .collect::<Option<Vec<_>>>()?;
  (!dimensions.is_empty()).then_some(dimensions)
}

pub static APP_ENV: LazyLock<AppEnv> = LazyLock::new(AppEnv::new);
