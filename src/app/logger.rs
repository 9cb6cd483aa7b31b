use once_cell::sync::Lazy;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Error as IoError, ErrorKind, Write};
use std::path::Path;
use std::sync::Mutex;

use super::file_handler;

// Global static logger instance
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logger to write to the specified file path.
/// The file is created if missing and truncated otherwise, so each run starts fresh.
pub fn init_global_logger(log_file_path: &Path) -> Result<(), IoError> {
    let writer = file_handler::open_truncated_writer(log_file_path)?;
    let mut logger_guard = LOGGER
        .lock()
        .map_err(|_| IoError::new(ErrorKind::Other, "logger mutex poisoned"))?;
    *logger_guard = Some(writer);
    Ok(())
}

/// Writes a verbose message to the global logger.
pub fn log_verbose_message_args(args: fmt::Arguments<'_>) {
    write_line("", args);
}

/// Writes a verbose error message to the global logger.
pub fn log_verbose_error_args(args: fmt::Arguments<'_>) {
    write_line("ERROR: ", args);
}

/// Flushes buffered log output. A no-op when the logger was never initialized.
pub fn flush_global_logger() -> Result<(), IoError> {
    let mut logger_guard = LOGGER
        .lock()
        .map_err(|_| IoError::new(ErrorKind::Other, "logger mutex poisoned"))?;
    match logger_guard.as_mut() {
        Some(writer) => writer.flush(),
        None => Ok(()),
    }
}

fn write_line(prefix: &str, args: fmt::Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "{}{}", prefix, args).is_err() {
                // Fallback to stderr if log writing fails
                eprintln!("Fallback (log write failed): {}{}", prefix, args);
            }
        }
        // If logger is None (not initialized), verbose messages are suppressed.
    } else {
        eprintln!("Fallback (logger mutex error): {}{}", prefix, args);
    }
}
