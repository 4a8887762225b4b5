//! Shared utilities for the summary-statistics QC crates.
//!
//! Polars `AnyValue` conversions, dtype classification and small rendering
//! helpers used by ingest, normalization and the CLI.

pub mod polars;

pub use polars::{
    any_to_f64, any_to_text, format_numeric, is_numeric_dtype, parse_f64, parse_i64, preview_rows,
};
