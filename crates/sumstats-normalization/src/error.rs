use polars::error::PolarsError;
use sumstats_model::AlleleScheme;
use thiserror::Error;

/// Numeric coercion failures.
#[derive(Debug, Error)]
pub enum CoercionError {
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// The column holds values that cannot be reinterpreted as numbers at all.
    #[error("the format of {column} ({dtype}) is not testable")]
    UntestableColumn {
        column: String,
        dtype: String,
        /// First rows of the table, rendered for diagnosis.
        preview: String,
    },

    #[error("DataFrame error: {0}")]
    Polars(#[from] PolarsError),
}

/// Probability range check failures.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    #[error("{column} is not numeric ({dtype}); coerce it first")]
    NotNumeric { column: String, dtype: String },

    #[error("{column} should only contain values between 0 and 1 ({out_of_range} out of range, {missing} missing)")]
    OutOfRange {
        column: String,
        out_of_range: usize,
        missing: usize,
    },

    #[error("DataFrame error: {0}")]
    Polars(#[from] PolarsError),
}

/// Palindromic filter failures.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("alleles need to be indicated: expected 'ref'/'alt' or 'effect_allele'/'non_effect_allele' columns")]
    MissingAlleles,

    #[error("column '{column}' required by the {} allele columns not found", .scheme.label())]
    ColumnNotFound { column: String, scheme: AlleleScheme },

    #[error("DataFrame error: {0}")]
    Polars(#[from] PolarsError),
}

/// Chromosome label normalization failures.
#[derive(Debug, Error)]
pub enum ChromosomeError {
    #[error("chromosome column '{column}' not found")]
    ColumnNotFound { column: String },

    #[error("DataFrame error: {0}")]
    Polars(#[from] PolarsError),
}

/// Any failure that stops a table from going through the QC pipeline.
#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Chromosome(#[from] ChromosomeError),

    #[error("DataFrame error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
