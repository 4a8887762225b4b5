//! Per-stage summaries returned by the normalization pipeline.

use serde::{Deserialize, Serialize};

use crate::allele::AlleleScheme;

/// Outcome of numeric coercion on one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercionReport {
    pub column: String,
    /// The column already had a numeric dtype and was left untouched.
    pub already_numeric: bool,
    /// Missing values in the column after coercion.
    pub missing: usize,
}

/// Outcome of the `[0, 1]` spot-check on one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityReport {
    pub column: String,
    pub in_range: usize,
    pub out_of_range: usize,
    pub missing: usize,
}

/// Outcome of palindromic variant removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalindromeReport {
    pub scheme: AlleleScheme,
    pub rows_before: usize,
    pub rows_after: usize,
}

impl PalindromeReport {
    pub fn removed(&self) -> usize {
        self.rows_before - self.rows_after
    }
}

/// Outcome of chromosome label normalization on one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromosomeReport {
    pub column: String,
    pub normalized: usize,
    pub unrecognized: usize,
}

/// Everything the QC pipeline did to one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QcReport {
    pub rows_in: usize,
    pub rows_out: usize,
    pub chromosome: Option<ChromosomeReport>,
    pub coercions: Vec<CoercionReport>,
    pub probabilities: Vec<ProbabilityReport>,
    pub palindrome: Option<PalindromeReport>,
    /// Configured columns that the table does not have.
    pub skipped_columns: Vec<String>,
}
