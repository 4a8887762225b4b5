use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{error, info, info_span};

use sumstats_cli::pipeline::{FileOptions, expand_inputs, process_file};
use sumstats_cli::types::{CheckResult, FileSummary};
use sumstats_model::{QcConfig, build_chromosome_map};

use crate::cli::{CheckArgs, ChromosomesArgs};
use crate::summary::apply_table_style;

/// Logged between files so each file's events read as one block.
const DIVIDER: &str = "------------------------------------------------------------";

pub fn run_chromosomes(args: &ChromosomesArgs) -> Result<()> {
    let config = QcConfig {
        max_chrom: args.max_chrom,
        ..QcConfig::default()
    };
    config.validate().context("chromosome table settings")?;

    let map = build_chromosome_map(args.max_chrom);
    let mut table = Table::new();
    table.set_header(vec!["Label", "Canonical"]);
    apply_table_style(&mut table);
    for (raw, canonical) in map.iter() {
        table.add_row(vec![raw, canonical]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let config = resolve_config(args)?;
    let map = build_chromosome_map(config.max_chrom);
    let files = expand_inputs(&args.files)?;
    info!(
        files = files.len(),
        data_type = config.data_type.label(),
        max_chrom = config.max_chrom,
        dry_run = args.dry_run,
        "starting QC run"
    );

    let options = FileOptions {
        config: &config,
        map: &map,
        output_dir: args.output_dir.as_deref(),
        dry_run: args.dry_run,
    };

    let span = info_span!("check");
    let _guard = span.enter();
    let mut summaries = Vec::with_capacity(files.len());
    for (idx, path) in files.iter().enumerate() {
        if idx > 0 {
            info!("{DIVIDER}");
        }
        let summary = match process_file(path, &options) {
            Ok(processed) => FileSummary {
                input: processed.input,
                output: processed.output,
                report: Some(processed.report),
                error: None,
            },
            Err(err) => {
                error!(source_file = %path.display(), "{err:#}");
                FileSummary {
                    input: path.clone(),
                    output: None,
                    report: None,
                    error: Some(format!("{err:#}")),
                }
            }
        };
        summaries.push(summary);
    }

    let has_errors = summaries.iter().any(FileSummary::failed);
    Ok(CheckResult {
        files: summaries,
        dry_run: args.dry_run,
        has_errors,
    })
}

/// Defaults, then the `--config` file, then command-line flags.
fn resolve_config(args: &CheckArgs) -> Result<QcConfig> {
    let mut config = match &args.config {
        Some(path) => QcConfig::load(path)?,
        None => QcConfig::default(),
    };
    if let Some(max_chrom) = args.max_chrom {
        config.max_chrom = max_chrom;
    }
    if let Some(data_type) = args.data_type {
        config.data_type = data_type.into();
    }
    if let Some(column) = &args.chrom_column {
        config.chrom_column = column.clone();
    }
    if !args.numeric.is_empty() {
        config.numeric_columns = args.numeric.clone();
    }
    if !args.probability.is_empty() {
        config.probability_columns = args.probability.clone();
    }
    if args.keep_palindromic {
        config.keep_palindromic = true;
    }
    config.validate()?;
    Ok(config)
}
