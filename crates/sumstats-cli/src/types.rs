use std::path::PathBuf;

use serde::Serialize;
use sumstats_model::QcReport;

/// Outcome of one input file.
#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub input: PathBuf,
    /// Where the normalized table was written; `None` on dry runs and failures.
    pub output: Option<PathBuf>,
    pub report: Option<QcReport>,
    pub error: Option<String>,
}

impl FileSummary {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub files: Vec<FileSummary>,
    pub dry_run: bool,
    pub has_errors: bool,
}
