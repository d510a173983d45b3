mod workload;
pub use workload::{LEADING_MAGNITUDE, Workload, generate_pair};

mod measure;
pub use measure::{Measurement, measure};

mod report;
pub use report::{ReportRow, StudyConfig, run_study};
