//! Main application orchestrator.
//!
//! Coordinates a batch run:
//! 1. Initializes logging.
//! 2. Opens the results destination (stdout or `--output`).
//! 3. Processes each graph file in the order given, delegating to
//!    `processing::process_graph_file`. A failing file is reported and the
//!    batch moves on to the next one.
//! 4. Flushes the verbose log after each graph and at exit.
//! 5. Reports a batch failure if any file failed.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing::{self, GraphOptions};
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use std::io::{self, BufWriter, Write};

/// Runs the batch described by the parsed command-line arguments.
///
/// # Errors
/// Returns `AppError::BatchFailed` if any graph file failed to load or
/// enumerate, or `AppError::Io` if the results destination cannot be written.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Keep going without the log file; results still reach the user.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let mut out: Box<dyn Write> = match &cli.output {
        Some(output_path) => Box::new(file_handler::open_truncated_writer(output_path)?),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let options = GraphOptions {
        enumeration: cli.enumeration_config(),
        show_matrix: cli.show_matrix,
        quiet_mode,
    };
    let total = cli.graph_files.len();
    let mut failed = 0;

    for (index, graph_file_path) in cli.graph_files.iter().enumerate() {
        verbose_println!(
            quiet_mode,
            "\n============================================================"
        );
        verbose_println!(quiet_mode, "Graph File: {}", graph_file_path.display());
        verbose_println!(
            quiet_mode,
            "============================================================"
        );

        match processing::process_graph_file(index + 1, graph_file_path, options, &mut out) {
            Ok(path_count) => {
                verbose_println!(
                    quiet_mode,
                    "[INFO] Wrote {} paths for {}",
                    path_count,
                    graph_file_path.display()
                );
            }
            Err(AppError::Io(e)) => {
                // The results destination itself failed; later graphs would fail the same way.
                verbose_eprintln!(quiet_mode, "[ERROR] Failed to write results: {}", e);
                flush_log(quiet_mode);
                return Err(AppError::Io(e));
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error processing '{}': {}", graph_file_path.display(), e);
                verbose_eprintln!(
                    quiet_mode,
                    "[ERROR] During processing of '{}': {}",
                    graph_file_path.display(),
                    e
                );
            }
        }
        // Keep stdout ordered relative to stderr between graphs.
        out.flush()?;
        flush_log(quiet_mode);
    }

    verbose_println!(
        quiet_mode,
        "\nBatch complete: {} of {} graph file(s) succeeded.",
        total - failed,
        total
    );
    flush_log(quiet_mode);

    if failed > 0 {
        return Err(AppError::BatchFailed { failed, total });
    }
    Ok(())
}

fn flush_log(quiet_mode: bool) {
    if quiet_mode {
        return;
    }
    if let Err(e) = logger::flush_global_logger() {
        // Log to stderr as the log file itself might be the one failing.
        eprintln!("[WARNING] Failed to flush verbose log: {}", e);
    }
}
