//! eQTL-specific checks.

use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::Result;

/// Check gene identifiers of an eQTL table against a reference.
///
/// No gene reference is wired in yet, so every table passes unchanged.
pub fn check_gene(df: &DataFrame) -> Result<()> {
    debug!(rows = df.height(), "gene check has no reference; table passes unchanged");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_table_passes_unchanged() {
        let df = DataFrame::new(vec![
            Series::new("gene_id".into(), vec!["ENSG00000141510"]).into(),
        ])
        .unwrap();
        let before = df.clone();
        check_gene(&df).unwrap();
        assert!(df.equals_missing(&before));
    }
}
