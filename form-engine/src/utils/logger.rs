//! Logging Infrastructure
//!
//! Structured logging setup for demos and the host application.

use shared::error::{AppError, AppResult};
use std::path::Path;

/// File name prefix of rolling log files
const LOG_FILE_PREFIX: &str = "form-engine";

/// Initialize the logger at `info` on stdout
pub fn init_logger() -> AppResult<()> {
    init_logger_with_file(None, None)
}

/// Initialize the logger with optional file output
///
/// Falls back to stdout when `log_dir` does not exist.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> AppResult<()> {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX);
            return subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init()
                .map_err(|e| AppError::internal(format!("Failed to initialize logger: {}", e)));
        }
    }

    subscriber
        .try_init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logger: {}", e)))
}
