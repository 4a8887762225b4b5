//! Summary-statistics normalization and quality filters.
//!
//! Every stage takes a table (a Polars `DataFrame`) by mutable reference,
//! transforms or checks it in place, and returns a report of what it did or
//! a typed error when the table cannot be processed further.
//!
//! - **chromosome**: map raw chromosome labels to canonical `chr` labels
//! - **numeric**: coerce a column to numeric, counting values that fail to parse
//! - **probability**: spot-check that a column holds values in `[0, 1]`
//! - **palindrome**: drop strand-ambiguous (A/T, C/G) variants
//! - **inference**: narrow a scalar to integer, float or text
//! - **eqtl**: gene-ID checks for eQTL files
//! - **pipeline**: run the stages in order for one table
//!
//! Coercion must run before the probability check; the pipeline enforces that order.

mod error;

pub mod chromosome;
pub mod eqtl;
pub mod inference;
pub mod numeric;
pub mod palindrome;
pub mod pipeline;
pub mod probability;

pub use chromosome::normalize_chromosome_column;
pub use eqtl::check_gene;
pub use error::{
    ChromosomeError, CoercionError, FilterError, NormalizationError, Result, ValidationError,
};
pub use inference::infer;
pub use numeric::coerce_numeric;
pub use palindrome::{remove_palindromic, remove_palindromic_with_scheme, resolve_allele_scheme};
pub use pipeline::run_qc;
pub use probability::check_probability;
