//! QC run configuration.
//!
//! Values come from an optional TOML file and are then overridden by CLI
//! flags. Every field has a default so an empty file is a valid config.
//!
//! ```toml
//! max_chrom = 23
//! data_type = "eqtl"
//! chrom_column = "chrom"
//! numeric_columns = ["beta", "se"]
//! probability_columns = ["pval"]
//! keep_palindromic = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chromosome::DEFAULT_MAX_CHROM;
use crate::error::{ConfigError, Result};

/// Kind of association results a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    #[default]
    Gwas,
    Eqtl,
}

impl SummaryKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Gwas => "GWAS",
            Self::Eqtl => "eQTL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QcConfig {
    /// Exclusive upper bound for autosome numbering.
    pub max_chrom: u32,
    pub data_type: SummaryKind,
    /// Column holding chromosome labels; normalized when present.
    pub chrom_column: String,
    /// Columns coerced to numeric.
    pub numeric_columns: Vec<String>,
    /// Columns coerced to numeric and then checked against `[0, 1]`.
    pub probability_columns: Vec<String>,
    /// Skip palindromic variant removal.
    pub keep_palindromic: bool,
}

impl Default for QcConfig {
    fn default() -> Self {
        Self {
            max_chrom: DEFAULT_MAX_CHROM,
            data_type: SummaryKind::default(),
            chrom_column: "chrom".to_string(),
            numeric_columns: Vec::new(),
            probability_columns: vec!["pval".to_string()],
            keep_palindromic: false,
        }
    }
}

impl QcConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.max_chrom < 1 {
            return Err(ConfigError::Invalid(
                "max_chrom must be at least 1".to_string(),
            ));
        }
        if self.chrom_column.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "chrom_column must not be empty".to_string(),
            ));
        }
        if let Some(name) = self
            .numeric_columns
            .iter()
            .chain(&self.probability_columns)
            .find(|name| name.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "column names must not be empty (got {name:?})"
            )));
        }
        Ok(())
    }

    /// All columns that go through numeric coercion, probability columns last, without duplicates.
    pub fn coerced_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for name in self.numeric_columns.iter().chain(&self.probability_columns) {
            if !columns.contains(&name.as_str()) {
                columns.push(name);
            }
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = QcConfig::from_toml_str("").unwrap();
        assert_eq!(config, QcConfig::default());
        assert_eq!(config.max_chrom, 23);
        assert_eq!(config.probability_columns, vec!["pval"]);
    }

    #[test]
    fn test_partial_toml() {
        let config = QcConfig::from_toml_str(
            "max_chrom = 25\ndata_type = \"eqtl\"\nnumeric_columns = [\"beta\"]\n",
        )
        .unwrap();
        assert_eq!(config.max_chrom, 25);
        assert_eq!(config.data_type, SummaryKind::Eqtl);
        assert_eq!(config.numeric_columns, vec!["beta"]);
        assert!(!config.keep_palindromic);
    }

    #[test]
    fn test_zero_max_chrom_rejected() {
        let config = QcConfig {
            max_chrom: 0,
            ..QcConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_coerced_columns_dedupes() {
        let config = QcConfig {
            numeric_columns: vec!["beta".to_string(), "pval".to_string()],
            probability_columns: vec!["pval".to_string(), "fdr".to_string()],
            ..QcConfig::default()
        };
        assert_eq!(config.coerced_columns(), vec!["beta", "pval", "fdr"]);
    }

    #[test]
    fn test_unknown_data_type_fails() {
        assert!(QcConfig::from_toml_str("data_type = \"mqtl\"").is_err());
    }
}
