//! Palindromic variant removal.
//!
//! Each row's allele-pair key is the uppercase effect (alt) allele followed by
//! the uppercase other (ref) allele. Rows whose key is `AT`, `TA`, `CG` or `GC`
//! are dropped. The key is never stored in the table.

use polars::prelude::*;
use sumstats_common::any_to_text;
use sumstats_model::{AlleleScheme, PalindromeReport, allele_key, is_palindromic};
use tracing::info;

use crate::error::FilterError;

/// Resolve which allele columns a table uses.
///
/// `ref`/`alt` take priority over `effect_allele`/`non_effect_allele`. Both
/// columns of the chosen pair must be present.
pub fn resolve_allele_scheme(df: &DataFrame) -> Result<AlleleScheme, FilterError> {
    let names = df.get_column_names();
    let scheme = AlleleScheme::detect(names.iter().map(|name| name.as_str()))
        .ok_or(FilterError::MissingAlleles)?;

    for column in [scheme.effect_column(), scheme.other_column()] {
        if !names.iter().any(|name| name.as_str() == column) {
            return Err(FilterError::ColumnNotFound {
                column: column.to_string(),
                scheme,
            });
        }
    }
    Ok(scheme)
}

fn allele_column<'a>(
    df: &'a DataFrame,
    column: &str,
    scheme: AlleleScheme,
) -> Result<&'a Column, FilterError> {
    df.column(column).map_err(|_| FilterError::ColumnNotFound {
        column: column.to_string(),
        scheme,
    })
}

/// Remove palindromic variants, resolving the allele columns from the table.
pub fn remove_palindromic(df: &mut DataFrame) -> Result<PalindromeReport, FilterError> {
    let scheme = resolve_allele_scheme(df)?;
    remove_palindromic_with_scheme(df, scheme)
}

/// Remove palindromic variants using a known allele scheme.
///
/// Rows with a missing allele have no key and are kept. Row order and all
/// other columns are preserved.
pub fn remove_palindromic_with_scheme(
    df: &mut DataFrame,
    scheme: AlleleScheme,
) -> Result<PalindromeReport, FilterError> {
    let effect = allele_column(df, scheme.effect_column(), scheme)?;
    let other = allele_column(df, scheme.other_column(), scheme)?;

    let rows_before = df.height();
    info!(
        variants = rows_before,
        "variant counts before filtering palindromic variants: {rows_before}"
    );

    let mut keep = Vec::with_capacity(rows_before);
    for idx in 0..rows_before {
        let key = match (any_to_text(effect.get(idx)?), any_to_text(other.get(idx)?)) {
            (Some(effect), Some(other)) => Some(allele_key(&effect, &other)),
            _ => None,
        };
        keep.push(!key.is_some_and(|key| is_palindromic(&key)));
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let filtered = df.filter(&mask)?;
    *df = filtered;

    let rows_after = df.height();
    info!(
        variants = rows_after,
        "variant counts after filtering palindromic variants: {rows_after}"
    );

    Ok(PalindromeReport {
        scheme,
        rows_before,
        rows_after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ref_alt(alt: Vec<&str>, reference: Vec<&str>) -> DataFrame {
        DataFrame::new(vec![
            Series::new("alt".into(), alt).into(),
            Series::new("ref".into(), reference).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_removes_at_keeps_ct() {
        let mut df = ref_alt(vec!["A", "C"], vec!["T", "T"]);
        let report = remove_palindromic(&mut df).unwrap();

        assert_eq!(report.scheme, AlleleScheme::RefAlt);
        assert_eq!(report.rows_before, 2);
        assert_eq!(report.rows_after, 1);
        let alt = df.column("alt").unwrap().str().unwrap();
        assert_eq!(alt.get(0), Some("C"));
    }

    #[test]
    fn test_lowercase_alleles_are_matched() {
        let mut df = ref_alt(vec!["g", "c", "a"], vec!["c", "g", "g"]);
        let report = remove_palindromic(&mut df).unwrap();
        assert_eq!(report.removed(), 2);
    }

    #[test]
    fn test_no_key_column_left_behind() {
        let mut df = ref_alt(vec!["A"], vec!["G"]);
        remove_palindromic(&mut df).unwrap();
        assert_eq!(df.get_column_names(), vec!["alt", "ref"]);
    }

    #[test]
    fn test_effect_allele_scheme() {
        let mut df = DataFrame::new(vec![
            Series::new("effect_allele".into(), vec!["T", "G"]).into(),
            Series::new("non_effect_allele".into(), vec!["A", "A"]).into(),
        ])
        .unwrap();
        let report = remove_palindromic(&mut df).unwrap();
        assert_eq!(report.scheme, AlleleScheme::EffectNonEffect);
        assert_eq!(report.rows_after, 1);
    }

    #[test]
    fn test_missing_alleles_fail() {
        let mut df = DataFrame::new(vec![Series::new("pval".into(), vec![0.1]).into()]).unwrap();
        assert!(matches!(
            remove_palindromic(&mut df),
            Err(FilterError::MissingAlleles)
        ));
    }

    #[test]
    fn test_ref_without_alt_fails() {
        let mut df = DataFrame::new(vec![Series::new("ref".into(), vec!["A"]).into()]).unwrap();
        assert!(matches!(
            remove_palindromic(&mut df),
            Err(FilterError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_null_alleles_are_kept() {
        let mut df = DataFrame::new(vec![
            Series::new("alt".into(), vec![Some("A"), None]).into(),
            Series::new("ref".into(), vec![Some("T"), Some("T")]).into(),
        ])
        .unwrap();
        let report = remove_palindromic(&mut df).unwrap();
        assert_eq!(report.rows_after, 1);
        assert_eq!(df.column("alt").unwrap().null_count(), 1);
    }
}
