//! QC pipeline for one summary-statistics table.
//!
//! Stages run in this order:
//! 1. **Gene check**: eQTL tables only
//! 2. **Chromosome**: normalize the chromosome column when the table has one
//! 3. **Coerce**: numeric and probability columns become numeric
//! 4. **Probability**: each probability column is spot-checked against `[0, 1]`
//! 5. **Palindrome**: strand-ambiguous variants are dropped unless kept by config
//!
//! The first fatal stage error stops the run; the table may already carry the
//! changes of earlier stages.

use polars::prelude::DataFrame;
use sumstats_model::{ChromosomeMap, QcConfig, QcReport, SummaryKind};
use tracing::{info_span, warn};

use crate::chromosome::normalize_chromosome_column;
use crate::eqtl::check_gene;
use crate::error::Result;
use crate::numeric::coerce_numeric;
use crate::palindrome::remove_palindromic;
use crate::probability::check_probability;

fn has_column(df: &DataFrame, column: &str) -> bool {
    df.get_column_names()
        .iter()
        .any(|name| name.as_str() == column)
}

/// Run every QC stage on `df` in place.
pub fn run_qc(df: &mut DataFrame, config: &QcConfig, map: &ChromosomeMap) -> Result<QcReport> {
    let mut report = QcReport {
        rows_in: df.height(),
        ..QcReport::default()
    };

    if config.data_type == SummaryKind::Eqtl {
        let _span = info_span!("gene_check").entered();
        check_gene(df)?;
    }

    if has_column(df, &config.chrom_column) {
        let _span = info_span!("chromosome", column = %config.chrom_column).entered();
        report.chromosome = Some(normalize_chromosome_column(df, &config.chrom_column, map)?);
    } else {
        warn!(column = %config.chrom_column, "chromosome column not found; labels left as is");
        report.skipped_columns.push(config.chrom_column.clone());
    }

    {
        let _span = info_span!("coerce").entered();
        for column in config.coerced_columns() {
            if !has_column(df, column) {
                warn!(column = %column, "{column} not found; skipping");
                report.skipped_columns.push(column.to_string());
                continue;
            }
            report.coercions.push(coerce_numeric(df, column)?);
        }
    }

    {
        let _span = info_span!("probability").entered();
        for column in &config.probability_columns {
            if has_column(df, column) {
                report.probabilities.push(check_probability(df, column)?);
            }
        }
    }

    if !config.keep_palindromic {
        let _span = info_span!("palindrome").entered();
        report.palindrome = Some(remove_palindromic(df)?);
    }

    report.rows_out = df.height();
    Ok(report)
}
