pub mod allele;
pub mod chromosome;
pub mod config;
pub mod error;
pub mod report;
pub mod value;

pub use allele::{AlleleScheme, PALINDROMIC_PAIRS, allele_key, is_palindromic};
pub use chromosome::{ChromosomeMap, DEFAULT_MAX_CHROM, build_chromosome_map};
pub use config::{QcConfig, SummaryKind};
pub use error::{ConfigError, Result};
pub use report::{
    ChromosomeReport, CoercionReport, PalindromeReport, ProbabilityReport, QcReport,
};
pub use value::InferredValue;
