use anyhow::{Context, Result, bail};
use cosim_core::Strategy;
use cosim_shared::AppEnv;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::{Measurement, Workload, generate_pair, measure};

/// Parameters of one study run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyConfig {
  pub dimensions: Vec<usize>,
  /// Random pairs drawn per workload and dimension.
  pub trials: usize,
  pub seed: u64,
}

impl From<&AppEnv> for StudyConfig {
  fn from(env: &AppEnv) -> Self {
    Self {
      dimensions: env.dimensions.clone(),
      trials: env.trials,
      seed: env.seed,
    }
  }
}

/// Error statistics of one strategy on one workload and dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
  pub workload: Workload,
  pub dimension: usize,
  pub strategy: &'static str,
  pub trials: usize,
  pub max_dot_error: f64,
  pub mean_dot_error: f64,
  pub max_relative_dot_error: f64,
  pub max_score_error: f64,
}

impl ReportRow {
  fn new(workload: Workload, dimension: usize, strategy: Strategy) -> Self {
    Self {
      workload,
      dimension,
      strategy: strategy.name(),
      trials: 0,
      max_dot_error: 0.0,
      mean_dot_error: 0.0,
      max_relative_dot_error: 0.0,
      max_score_error: 0.0,
    }
  }

  fn record(&mut self, m: &Measurement) {
    self.trials += 1;
    self.max_dot_error = self.max_dot_error.max(m.dot_error);
    // Running mean keeps the row valid after every trial.
    self.mean_dot_error += (m.dot_error - self.mean_dot_error) / self.trials as f64;
    self.max_relative_dot_error = self.max_relative_dot_error.max(m.relative_dot_error);
    self.max_score_error = self.max_score_error.max(m.score_error);
  }
}

/// Measure every strategy against the reference on every workload and
/// dimension, `trials` pairs each. Rows come out grouped by workload, then
/// dimension, then strategy.
pub fn run_study(config: &StudyConfig) -> Result<Vec<ReportRow>> {
  if config.dimensions.is_empty() {
    bail!("study needs at least one dimension");
  }
  if config.trials == 0 {
    bail!("study needs at least one trial per dimension");
  }

  let mut rng = StdRng::seed_from_u64(config.seed);
  let mut rows = Vec::new();

  for workload in Workload::iter() {
    for &dimension in &config.dimensions {
      let mut group: Vec<ReportRow> = Strategy::iter()
        .map(|strategy| ReportRow::new(workload, dimension, strategy))
        .collect();

      for trial in 0..config.trials {
        let (u, v) = generate_pair(workload, dimension, &mut rng);
        for (row, strategy) in group.iter_mut().zip(Strategy::iter()) {
          let m = measure(strategy, &u, &v).with_context(|| {
            format!("measuring {strategy} on {workload} pair of dimension {dimension}")
          })?;
          tracing::trace!(
            %workload,
            dimension,
            trial,
            %strategy,
            dot_error = m.dot_error,
            score_error = m.score_error,
            "measured"
          );
          row.record(&m);
        }
      }

      tracing::debug!(%workload, dimension, trials = config.trials, "workload measured");
      rows.extend(group);
    }
  }

  Ok(rows)
}
