//! Chromosome column normalization.

use polars::prelude::*;
use sumstats_common::any_to_text;
use sumstats_model::{ChromosomeMap, ChromosomeReport};
use tracing::{info, warn};

use crate::error::ChromosomeError;
use crate::inference::infer;

/// Resolve one raw label to its canonical form.
///
/// Exact map entries and canonical labels win. Otherwise a label that reads
/// as an integral number (`01`, `7.0`) is looked up by that number.
fn resolve_label(map: &ChromosomeMap, raw: &str) -> Option<String> {
    if let Some(canonical) = map.normalize(raw) {
        return Some(canonical.to_string());
    }
    let number = infer(raw)
        .as_f64()
        .filter(|v| v.is_finite() && v.fract() == 0.0)?;
    map.get(&(number as i64).to_string()).map(str::to_string)
}

/// Replace the labels in `column` with canonical chromosome labels.
///
/// Values are trimmed before lookup. Unrecognized labels become null and are
/// counted; null values stay null. The column is always a string column
/// afterwards.
pub fn normalize_chromosome_column(
    df: &mut DataFrame,
    column: &str,
    map: &ChromosomeMap,
) -> Result<ChromosomeReport, ChromosomeError> {
    let series = df
        .column(column)
        .map_err(|_| ChromosomeError::ColumnNotFound {
            column: column.to_string(),
        })?;

    let mut report = ChromosomeReport {
        column: column.to_string(),
        normalized: 0,
        unrecognized: 0,
    };
    let mut labels: Vec<Option<String>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let Some(raw) = any_to_text(series.get(idx)?) else {
            labels.push(None);
            continue;
        };
        let label = resolve_label(map, raw.trim());
        if label.is_some() {
            report.normalized += 1;
        } else {
            report.unrecognized += 1;
        }
        labels.push(label);
    }

    df.with_column(Series::new(column.into(), labels))?;

    if report.unrecognized > 0 {
        warn!(
            column = %column,
            unrecognized = report.unrecognized,
            "{} labels in {column} are not recognized chromosomes",
            report.unrecognized
        );
    }
    info!(
        column = %column,
        normalized = report.normalized,
        max_chrom = map.max_chrom(),
        "chromosome labels normalized"
    );
    Ok(report)
}
