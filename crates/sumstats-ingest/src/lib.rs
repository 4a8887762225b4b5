//! Summary-statistics ingestion utilities.
//!
//! This crate resolves input paths and loads delimited association results
//! (GWAS/eQTL summary statistics) into Polars DataFrames, and writes the
//! normalized tables back out.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sumstats_ingest::{find_file, read_summary_table};
//!
//! let path = find_file(Path::new("data/eqtl_chr1.tsv"))?;
//! let df = read_summary_table(&path, &["chrom"])?;
//! ```

mod columns;
mod discovery;
mod error;
mod reader;
mod resolve;

pub use columns::intersect_columns;
pub use discovery::{is_summary_file, list_summary_files};
pub use error::{IngestError, Result};
pub use reader::{Delimiter, read_summary_table, validate_frame_shape, write_summary_table};
pub use resolve::find_file;
