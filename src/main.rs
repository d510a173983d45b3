use std::io::{self, Write};

use anyhow::{Context, Result};
use cosim_shared::{APP_ENV, OutputFormat};
use cosim_study::{ReportRow, StudyConfig, run_study};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
          format!("{}=info,cosim_study=debug,cosim_shared=info", env!("CARGO_CRATE_NAME")).into()
        }),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();
  dotenvy::dotenv().ok();

  let config = StudyConfig::from(&*APP_ENV);
  tracing::info!(
    dimensions = ?config.dimensions,
    trials = config.trials,
    seed = config.seed,
    "running summation study"
  );

  let rows = run_study(&config)?;
  match APP_ENV.output {
    OutputFormat::Log => rows.iter().for_each(log_row),
    OutputFormat::Json => write_json(&rows)?,
  }

  Ok(())
}

fn log_row(row: &ReportRow) {
  tracing::info!(
    workload = %row.workload,
    dimension = row.dimension,
    strategy = row.strategy,
    max_dot_error = row.max_dot_error,
    mean_dot_error = row.mean_dot_error,
    max_relative_dot_error = row.max_relative_dot_error,
    max_score_error = row.max_score_error,
    "study row"
  );
}

fn write_json(rows: &[ReportRow]) -> Result<()> {
  let mut out = io::stdout().lock();
  for row in rows {
    serde_json::to_writer(&mut out, row).context("serializing report row")?;
    writeln!(out)?;
  }
  Ok(())
}
