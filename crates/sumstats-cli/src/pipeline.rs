//! Per-file processing for the QC runner.
//!
//! Each file goes through the same stages:
//! 1. **Resolve**: canonicalize the path and confirm it is a file
//! 2. **Read**: load the delimited table, keeping the chromosome column as text
//! 3. **QC**: run the normalization pipeline (see [`sumstats_normalization::run_qc`])
//! 4. **Write**: save the normalized table, unless this is a dry run
//!
//! Files are independent; a failure in one does not affect the next.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use sumstats_ingest::{
    find_file, intersect_columns, is_summary_file, list_summary_files, read_summary_table,
    write_summary_table,
};
use sumstats_model::{ChromosomeMap, QcConfig, QcReport};
use sumstats_normalization::run_qc;

/// Name of the output directory created next to each input when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "qc";

/// Settings shared by every file in a run.
pub struct FileOptions<'a> {
    pub config: &'a QcConfig,
    pub map: &'a ChromosomeMap,
    pub output_dir: Option<&'a Path>,
    pub dry_run: bool,
}

/// Result of processing a single file.
#[derive(Debug)]
pub struct ProcessedFile {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub report: QcReport,
}

/// Expand directory arguments into the summary files they contain.
///
/// File arguments are kept as given, in order; existence is checked later per file.
pub fn expand_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let listed = list_summary_files(path)
                .with_context(|| format!("list summary files in {}", path.display()))?;
            debug!(dir = %path.display(), files = listed.len(), "expanded input directory");
            files.extend(listed);
        } else {
            if !is_summary_file(path) {
                debug!(path = %path.display(), "unrecognized extension; reading as tab-delimited");
            }
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Where the normalized copy of `input` is written.
pub fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(DEFAULT_OUTPUT_DIR),
    };
    match input.file_name() {
        Some(name) => dir.join(name),
        None => dir.join("sumstats.tsv"),
    }
}

/// Returns true if `target` names the already-canonical `input`, through
/// relative components or symlinks included.
fn resolves_to(target: &Path, input: &Path) -> bool {
    target
        .canonicalize()
        .is_ok_and(|resolved| resolved == input)
}

/// Run one file through resolve, read, QC and write.
pub fn process_file(path: &Path, options: &FileOptions<'_>) -> Result<ProcessedFile> {
    let span = info_span!("process_file", source_file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let input = find_file(path)?;
    let chrom_column = options.config.chrom_column.as_str();
    let mut df = read_summary_table(&input, &[chrom_column])
        .with_context(|| format!("read {}", input.display()))?;

    let present = intersect_columns(
        df.get_column_names().iter().map(|name| name.as_str()),
        options
            .config
            .coerced_columns()
            .into_iter()
            .chain(std::iter::once(chrom_column)),
    );
    debug!(columns = ?present, "configured columns present in table");

    let report = run_qc(&mut df, options.config, options.map)
        .with_context(|| format!("QC {}", input.display()))?;

    let output = if options.dry_run {
        None
    } else {
        let target = output_path(&input, options.output_dir);
        if resolves_to(&target, &input) {
            bail!(
                "output {} would overwrite the input; choose another --output-dir",
                target.display()
            );
        }
        write_summary_table(&mut df, &target)
            .with_context(|| format!("write {}", target.display()))?;
        Some(target)
    };

    info!(
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        duration_ms = start.elapsed().as_millis(),
        "file complete"
    );

    Ok(ProcessedFile {
        input,
        output,
        report,
    })
}
