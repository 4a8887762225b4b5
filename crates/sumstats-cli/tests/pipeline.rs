//! Integration tests for per-file processing.

use std::fs;
use std::path::{Path, PathBuf};

use sumstats_cli::pipeline::{
    DEFAULT_OUTPUT_DIR, FileOptions, expand_inputs, output_path, process_file,
};
use sumstats_model::{DEFAULT_MAX_CHROM, QcConfig, build_chromosome_map};

const GWAS: &str = "chrom\tpos\talt\tref\tbeta\tpval\n\
                    1\t100\tA\tT\t0.1\t0.01\n\
                    X\t200\tC\tT\tbad\t0.2\n\
                    MT\t300\tG\tA\t-0.3\tNA\n";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn config() -> QcConfig {
    QcConfig {
        numeric_columns: vec!["beta".to_string()],
        ..QcConfig::default()
    }
}

#[test]
fn processes_and_writes_normalized_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "gwas.tsv", GWAS);
    let out_dir = dir.path().join("out");
    let config = config();
    let map = build_chromosome_map(DEFAULT_MAX_CHROM);
    let options = FileOptions {
        config: &config,
        map: &map,
        output_dir: Some(&out_dir),
        dry_run: false,
    };

    let processed = process_file(&input, &options).unwrap();

    assert_eq!(processed.report.rows_in, 3);
    assert_eq!(processed.report.rows_out, 2);
    let output = processed.output.unwrap();
    assert_eq!(output.file_name().unwrap(), "gwas.tsv");

    let written = fs::read_to_string(output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "chrom\tpos\talt\tref\tbeta\tpval");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("chrX\t200\tC\tT\tNA\t"));
    assert!(lines[2].starts_with("chrM\t300\tG\tA\t"));
    assert!(lines[2].ends_with("\tNA"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "gwas.tsv", GWAS);
    let config = config();
    let map = build_chromosome_map(DEFAULT_MAX_CHROM);
    let options = FileOptions {
        config: &config,
        map: &map,
        output_dir: None,
        dry_run: true,
    };

    let processed = process_file(&input, &options).unwrap();

    assert!(processed.output.is_none());
    assert!(!dir.path().join(DEFAULT_OUTPUT_DIR).exists());
}

#[test]
fn missing_file_fails() {
    let config = config();
    let map = build_chromosome_map(DEFAULT_MAX_CHROM);
    let options = FileOptions {
        config: &config,
        map: &map,
        output_dir: None,
        dry_run: true,
    };

    let err = process_file(Path::new("/no/such/gwas.tsv"), &options).unwrap_err();
    assert!(err.to_string().contains("no file"));
}

#[test]
fn out_of_range_probabilities_fail_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "bad.csv",
        "chrom,alt,ref,pval\n1,A,C,3.5\n2,G,T,12\n",
    );
    let config = QcConfig::default();
    let map = build_chromosome_map(DEFAULT_MAX_CHROM);
    let options = FileOptions {
        config: &config,
        map: &map,
        output_dir: None,
        dry_run: false,
    };

    let err = process_file(&input, &options).unwrap_err();

    assert!(format!("{err:#}").contains("between 0 and 1"));
    assert!(!dir.path().join(DEFAULT_OUTPUT_DIR).exists());
}

#[test]
fn refuses_to_overwrite_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "gwas.tsv", GWAS);
    let canonical_dir = dir.path().canonicalize().unwrap();
    let config = config();
    let map = build_chromosome_map(DEFAULT_MAX_CHROM);
    let options = FileOptions {
        config: &config,
        map: &map,
        output_dir: Some(&canonical_dir),
        dry_run: false,
    };

    assert!(process_file(&input, &options).is_err());
    assert_eq!(fs::read_to_string(&input).unwrap(), GWAS);
}

#[test]
fn refuses_to_overwrite_input_through_relative_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "gwas.tsv", GWAS);
    let config = config();
    let map = build_chromosome_map(DEFAULT_MAX_CHROM);
    let options = FileOptions {
        config: &config,
        map: &map,
        output_dir: Some(Path::new(".")),
        dry_run: false,
    };

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = process_file(Path::new("gwas.tsv"), &options);
    std::env::set_current_dir(previous).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("would overwrite the input"));
    assert_eq!(fs::read_to_string(&input).unwrap(), GWAS);
}

#[test]
fn refuses_to_overwrite_input_through_parent_components() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "gwas.tsv", GWAS);
    fs::create_dir(dir.path().join("sub")).unwrap();
    let roundabout = dir.path().join("sub").join("..");
    let config = config();
    let map = build_chromosome_map(DEFAULT_MAX_CHROM);
    let options = FileOptions {
        config: &config,
        map: &map,
        output_dir: Some(&roundabout),
        dry_run: false,
    };

    assert!(process_file(&input, &options).is_err());
    assert_eq!(fs::read_to_string(&input).unwrap(), GWAS);
}

#[test]
fn directories_expand_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "b.tsv", GWAS);
    write(dir.path(), "a.csv", GWAS);
    write(dir.path(), "readme.md", "notes");
    let single = dir.path().join("z.txt");

    let files = expand_inputs(&[dir.path().to_path_buf(), single.clone()]).unwrap();

    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.csv", "b.tsv", "z.txt"]);
}

#[test]
fn default_output_dir_sits_next_to_input() {
    let path = output_path(Path::new("/data/gwas/study.tsv"), None);
    assert_eq!(path, Path::new("/data/gwas/qc/study.tsv"));

    let path = output_path(Path::new("/data/gwas/study.tsv"), Some(Path::new("/tmp/out")));
    assert_eq!(path, Path::new("/tmp/out/study.tsv"));
}
