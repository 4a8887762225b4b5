//! Tests for file discovery, loading and writing.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::*;
use sumstats_ingest::{
    IngestError, find_file, list_summary_files, read_summary_table, write_summary_table,
};

fn touch(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn lists_only_summary_files_sorted() {
    let dir = tempfile::tempdir().expect("temp dir");
    touch(dir.path(), "b_eqtl.tsv", "a\n1\n");
    touch(dir.path(), "a_gwas.csv", "a\n1\n");
    touch(dir.path(), "notes.md", "# notes\n");
    touch(dir.path(), "c.TXT", "a\n1\n");
    fs::create_dir(dir.path().join("nested.tsv")).expect("create dir");

    let files = list_summary_files(dir.path()).expect("list files");
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a_gwas.csv", "b_eqtl.tsv", "c.TXT"]);
}

#[test]
fn listing_missing_directory_fails() {
    let result = list_summary_files(Path::new("/no/such/dir"));
    assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
}

#[test]
fn chromosome_column_with_letters_loads_as_text() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = touch(
        dir.path(),
        "gwas.tsv",
        "chrom\tpos\tref\talt\tpval\n1\t100\tA\tG\t0.01\nX\t200\tC\tT\t0.2\n",
    );
    let path = find_file(&path).expect("find file");
    let df = read_summary_table(&path, &["chrom", "ref", "alt"]).expect("read");
    let chrom = df.column("chrom").unwrap().str().unwrap();
    assert_eq!(chrom.get(0), Some("1"));
    assert_eq!(chrom.get(1), Some("X"));
}

#[test]
fn written_table_reads_back_with_nulls() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = dir.path().join("out").join("filtered.tsv");
    let mut df = DataFrame::new(vec![
        Series::new("chrom".into(), vec!["chr1", "chr2"]).into(),
        Series::new("pval".into(), vec![Some(0.5), None]).into(),
    ])
    .unwrap();

    write_summary_table(&mut df, &out).expect("write");
    let text = fs::read_to_string(&out).expect("read output");
    assert!(text.starts_with("chrom\tpval\n"));
    assert!(text.contains("chr2\tNA"));

    let back = read_summary_table(&out, &[]).expect("read back");
    assert_eq!(back.height(), 2);
    assert_eq!(back.column("pval").unwrap().null_count(), 1);
}
