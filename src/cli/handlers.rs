//! Extraction pipeline and exit-code mapping
//!
//! The pipeline is strictly sequential: resolve path, read, locate, send.
//! Every failure is terminal and maps to a single diagnostic line on stderr
//! and exit code 1. The JSON payload goes only to the IPC channel; stderr
//! carries diagnostics and the success confirmation.

use crate::extract::locator::{locate, LocateError};
use crate::ipc::{send_config, IpcError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to resolve path {path}: {source}")]
    PathResolution { path: PathBuf, source: io::Error },
    #[error("Failed to read file {path}: {source}")]
    FileRead { path: PathBuf, source: io::Error },
    #[error("{0}")]
    Locate(#[from] LocateError),
    #[error("{0}")]
    Ipc(#[from] IpcError),
}

/// Runs the whole extraction pipeline for one step file.
///
/// Returns the resolved absolute path on success so the caller can report
/// which file was delivered.
pub fn run_extract(path: &Path) -> Result<PathBuf, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::FileNotFound(path.to_path_buf()));
    }

    let path = fs::canonicalize(path).map_err(|source| ExtractError::PathResolution {
        path: path.to_path_buf(),
        source,
    })?;

    let source = fs::read_to_string(&path).map_err(|source| ExtractError::FileRead {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), bytes = source.len(), "analyzing step file");
    let config = locate(&source)?;
    send_config(&config)?;

    Ok(path)
}

/// CLI entry point for the extraction pipeline; returns the process exit code.
pub fn handle_extract(path: Option<&Path>) -> i32 {
    let Some(path) = path else {
        eprintln!("Usage: stepconf <file-path>");
        return 1;
    };

    match run_extract(path) {
        Ok(resolved) => {
            eprintln!(
                "Successfully extracted and sent config from {}",
                resolved.display()
            );
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_argument_is_usage_error() {
        assert_eq!(handle_extract(None), 1);
    }

    #[test]
    fn test_nonexistent_file() {
        let err = run_extract(Path::new("/nonexistent/step.rs")).unwrap_err();
        assert!(matches!(err, ExtractError::FileNotFound(_)));
        assert!(err.to_string().contains("/nonexistent/step.rs"));
    }

    #[test]
    fn test_file_without_config_declaration() {
        let dir = TempDir::new().unwrap();
        let step = dir.path().join("step.rs");
        fs::write(&step, "pub fn executor() {}\n").unwrap();

        let err = run_extract(&step).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Locate(LocateError::ConfigNotFound)
        ));
    }

    #[test]
    fn test_syntactically_invalid_file() {
        let dir = TempDir::new().unwrap();
        let step = dir.path().join("step.rs");
        fs::write(&step, "static config = {{{\n").unwrap();

        let err = run_extract(&step).unwrap_err();
        assert!(matches!(err, ExtractError::Locate(LocateError::Syntax(_))));
    }
}
