use cosim_study::{ReportRow, StudyConfig, Workload, run_study};

fn row<'a>(rows: &'a [ReportRow], workload: Workload, strategy: &str) -> &'a ReportRow {
  rows
    .iter()
    .find(|row| row.workload == workload && row.strategy == strategy)
    .unwrap_or_else(|| panic!("missing {workload} / {strategy}"))
}

#[test]
fn sequential_summation_loses_the_most_on_ill_conditioned_input() {
  let rows = run_study(&StudyConfig {
    dimensions: vec![8192],
    trials: 4,
    seed: 7,
  })
  .unwrap();

  let naive = row(&rows, Workload::IllConditioned, "naive");
  let fused = row(&rows, Workload::IllConditioned, "fused_naive");
  let pairwise = row(&rows, Workload::IllConditioned, "pairwise");
  let blocked = row(&rows, Workload::IllConditioned, "blocked");

  assert!(pairwise.mean_dot_error < naive.mean_dot_error);
  assert!(blocked.mean_dot_error < naive.mean_dot_error);
  assert_eq!(naive.max_dot_error, fused.max_dot_error);
}

#[test]
fn uniform_inputs_agree_closely_with_the_reference() {
  let rows = run_study(&StudyConfig {
    dimensions: vec![32, 1024],
    trials: 8,
    seed: 3,
  })
  .unwrap();

  for row in rows.iter().filter(|row| row.workload == Workload::Uniform) {
    assert!(row.max_score_error < 1e-9, "{row:?}");
  }
}

#[test]
fn rows_serialize_as_flat_json() {
  let rows = run_study(&StudyConfig {
    dimensions: vec![16],
    trials: 1,
    seed: 1,
  })
  .unwrap();

  let json = serde_json::to_value(&rows[0]).unwrap();
  assert_eq!(json["workload"], "uniform");
  assert_eq!(json["dimension"], 16);
  assert_eq!(json["strategy"], "naive");
  assert_eq!(json["trials"], 1);
  assert!(json["max_dot_error"].is_number());
}
