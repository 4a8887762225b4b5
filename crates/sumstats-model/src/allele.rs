//! Allele naming schemes and palindromic allele pairs.
//!
//! A palindromic variant has complementary alleles (A/T or C/G), so its
//! strand cannot be inferred from the alleles alone. Strand flips on such
//! variants bias imputation and haplotype-based analyses, so they are removed
//! before harmonization.

use serde::{Deserialize, Serialize};

/// Allele pairs that are ambiguous under a strand flip.
pub const PALINDROMIC_PAIRS: [&str; 4] = ["AT", "TA", "CG", "GC"];

/// Which pair of columns carries the alleles in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlleleScheme {
    /// `alt` / `ref` columns.
    RefAlt,
    /// `effect_allele` / `non_effect_allele` columns.
    EffectNonEffect,
}

impl AlleleScheme {
    /// Pick the scheme from a table's column names.
    ///
    /// `ref` takes priority; `effect_allele` is the fallback. Only the probe
    /// column is checked here, the partner column is verified by the caller.
    pub fn detect<'a, I>(columns: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut has_effect = false;
        for name in columns {
            match name {
                "ref" => return Some(Self::RefAlt),
                "effect_allele" => has_effect = true,
                _ => {}
            }
        }
        has_effect.then_some(Self::EffectNonEffect)
    }

    /// Column whose allele comes first in the key.
    pub fn effect_column(self) -> &'static str {
        match self {
            Self::RefAlt => "alt",
            Self::EffectNonEffect => "effect_allele",
        }
    }

    /// Column whose allele comes second in the key.
    pub fn other_column(self) -> &'static str {
        match self {
            Self::RefAlt => "ref",
            Self::EffectNonEffect => "non_effect_allele",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RefAlt => "alt/ref",
            Self::EffectNonEffect => "effect_allele/non_effect_allele",
        }
    }
}

/// Build the allele-pair key: uppercase effect allele followed by uppercase other allele.
pub fn allele_key(effect: &str, other: &str) -> String {
    let mut key = String::with_capacity(effect.len() + other.len());
    key.push_str(&effect.to_uppercase());
    key.push_str(&other.to_uppercase());
    key
}

/// Returns true if the key is one of [`PALINDROMIC_PAIRS`].
pub fn is_palindromic(key: &str) -> bool {
    PALINDROMIC_PAIRS.contains(&key)
}
