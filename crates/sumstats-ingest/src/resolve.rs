use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::{IngestError, Result};

/// Resolve an input path and confirm it names an existing file.
///
/// Returns the canonical path.
pub fn find_file(path: &Path) -> Result<PathBuf> {
    let resolved = match path.canonicalize() {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            error!(path = %path.display(), "no file found for processing");
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if !resolved.is_file() {
        return Err(IngestError::NotAFile { path: resolved });
    }

    info!(path = %resolved.display(), "found input file");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let found = find_file(file.path()).unwrap();
        assert_eq!(found, file.path().canonicalize().unwrap());
    }

    #[test]
    fn test_missing_file() {
        let result = find_file(Path::new("/no/such/sumstats.tsv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = find_file(dir.path());
        assert!(matches!(result, Err(IngestError::NotAFile { .. })));
    }
}
