//! File system helpers for the batch run.
//!
//! Validates graph file paths before loading and opens the buffered writers
//! used for the verbose log and the optional results file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `graph_file_path` exists and is a regular file.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or not a file.
pub fn validate_graph_file(graph_file_path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !graph_file_path.exists() {
        let error_msg = format!("File not found: {}", graph_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !graph_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", graph_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Opens `file_path` for writing, creating it if needed and truncating it otherwise.
///
/// The returned `BufWriter` is flushed by its owner (or on drop).
pub fn open_truncated_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    Ok(BufWriter::new(file))
}
