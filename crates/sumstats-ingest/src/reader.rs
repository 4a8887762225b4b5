//! Delimited file reading and writing.
//!
//! Summary statistics are distributed as tab- or comma-separated text. The
//! delimiter is chosen from the file extension: `.csv` is comma separated,
//! everything else (`.tsv`, `.txt`, no extension) is tab separated. `NA` and
//! empty fields load as nulls.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Field separator of a summary-statistics file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
}

impl Delimiter {
    pub fn from_path(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv { Self::Comma } else { Self::Tab }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Tab => b'\t',
            Self::Comma => b',',
        }
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads the header line and splits it into column names.
fn read_header(path: &Path, delimiter: Delimiter) -> Result<Vec<String>> {
    let mut reader = BufReader::new(open(path)?);
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    let line = line.strip_prefix('\u{feff}').unwrap_or(&line);
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }
    Ok(line
        .split(char::from(delimiter.as_byte()))
        .map(|name| name.trim().trim_matches('"').to_string())
        .collect())
}

/// Validate DataFrame shape after loading.
///
/// Rejects frames without rows and frames with blank column names.
pub fn validate_frame_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

/// Reads a summary-statistics file into a Polars DataFrame.
///
/// Column dtypes are inferred over the whole file, so a column with a single
/// non-numeric entry loads as text and is left for numeric coercion to
/// report. Columns listed in `text_columns` are always loaded as text; use
/// this for chromosome and allele columns where `1` and `X` share a column.
pub fn read_summary_table(path: &Path, text_columns: &[&str]) -> Result<DataFrame> {
    let delimiter = Delimiter::from_path(path);
    let headers = read_header(path, delimiter)?;

    let overrides: Vec<Field> = headers
        .iter()
        .filter(|name| text_columns.contains(&name.as_str()))
        .map(|name| Field::new(name.as_str().into(), DataType::String))
        .collect();
    let schema_overwrite = if overrides.is_empty() {
        None
    } else {
        Some(Arc::new(Schema::from_iter(overrides)))
    };

    let parse_error = |e: PolarsError| IngestError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_schema_overwrite(schema_overwrite)
        .map_parse_options(|opts| {
            opts.with_separator(delimiter.as_byte())
                .with_null_values(Some(NullValues::AllColumnsSingle("NA".into())))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    validate_frame_shape(&df, path)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded summary table"
    );

    Ok(df)
}

/// Writes a DataFrame using the delimiter implied by the output path.
///
/// Nulls are written as `NA`.
pub fn write_summary_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let mut file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(Delimiter::from_path(path).as_byte())
        .with_null_value("NA".to_string())
        .finish(df)
        .map_err(|e| IngestError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
