//! Probability column spot-check.

use polars::prelude::*;
use sumstats_common::is_numeric_dtype;
use sumstats_model::ProbabilityReport;
use tracing::{error, info};

use crate::error::ValidationError;

/// Check that `column` holds probabilities.
///
/// The check passes when **any** non-null value lies in the closed interval
/// `[0, 1]`; a single in-range value is enough for the whole column. It fails
/// when no value does, which also covers empty and all-null columns.
///
/// The column must already be numeric; run [`crate::coerce_numeric`] first.
pub fn check_probability(df: &DataFrame, column: &str) -> Result<ProbabilityReport, ValidationError> {
    let series = df
        .column(column)
        .map_err(|_| ValidationError::ColumnNotFound {
            column: column.to_string(),
        })?;

    if !is_numeric_dtype(series.dtype()) {
        return Err(ValidationError::NotNumeric {
            column: column.to_string(),
            dtype: series.dtype().to_string(),
        });
    }

    let values = series.cast(&DataType::Float64)?;
    let mut report = ProbabilityReport {
        column: column.to_string(),
        in_range: 0,
        out_of_range: 0,
        missing: 0,
    };
    for value in values.f64()? {
        match value {
            Some(v) if (0.0..=1.0).contains(&v) => report.in_range += 1,
            Some(v) if v.is_nan() => report.missing += 1,
            Some(_) => report.out_of_range += 1,
            None => report.missing += 1,
        }
    }

    if report.in_range == 0 {
        error!(
            column = %column,
            out_of_range = report.out_of_range,
            missing = report.missing,
            "{column} should only contain values between 0 and 1"
        );
        return Err(ValidationError::OutOfRange {
            column: column.to_string(),
            out_of_range: report.out_of_range,
            missing: report.missing,
        });
    }

    info!(
        column = %column,
        in_range = report.in_range,
        out_of_range = report.out_of_range,
        "{column} contains values between 0 and 1"
    );
    Ok(report)
}
