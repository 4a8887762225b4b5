//! Numeric coercion of summary-statistic columns.
//!
//! Effect sizes, standard errors and p-values must be numeric before any
//! downstream check runs on them. A column that loaded as text is coerced
//! value by value: anything that does not parse as a number becomes null,
//! and the number of missing values is logged so the loss is auditable.

use polars::prelude::*;
use sumstats_common::{any_to_f64, is_numeric_dtype, preview_rows};
use sumstats_model::CoercionReport;
use tracing::{error, info, warn};

use crate::error::CoercionError;

/// Rows rendered in the diagnostic when a column cannot be coerced.
const PREVIEW_ROWS: usize = 2;

/// Ensure `column` is numeric, coercing it in place when it is not.
///
/// - Boolean, integer and float columns are left untouched.
/// - Text and all-null columns are replaced by a `Float64` column;
///   values that fail to parse (and `NaN`) become null.
/// - Any other dtype (lists, structs, binary, temporal) cannot be coerced and
///   yields [`CoercionError::UntestableColumn`]; the table is not modified.
///
/// Running it again on the coerced column is a no-op.
pub fn coerce_numeric(df: &mut DataFrame, column: &str) -> Result<CoercionReport, CoercionError> {
    let series = df
        .column(column)
        .map_err(|_| CoercionError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let dtype = series.dtype().clone();

    if is_numeric_dtype(&dtype) {
        info!(column = %column, "{column} is numeric");
        return Ok(CoercionReport {
            column: column.to_string(),
            already_numeric: true,
            missing: series.null_count(),
        });
    }

    if !matches!(dtype, DataType::String | DataType::Null) {
        let preview = preview_rows(df, PREVIEW_ROWS);
        error!(column = %column, dtype = %dtype, "the format of {column} is not testable\n{preview}");
        return Err(CoercionError::UntestableColumn {
            column: column.to_string(),
            dtype: dtype.to_string(),
            preview,
        });
    }

    let mut values: Vec<Option<f64>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = any_to_f64(series.get(idx)?).filter(|v| !v.is_nan());
        values.push(value);
    }

    let coerced = Series::new(column.into(), values);
    let missing = coerced.null_count();
    df.with_column(coerced)?;

    warn!(column = %column, missing, "{missing} rows in {column} are non-numeric");
    warn!(column = %column, "{column} is tested by coercing into numeric values");

    Ok(CoercionReport {
        column: column.to_string(),
        already_numeric: false,
        missing,
    })
}
