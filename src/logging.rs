//! Logging setup
//!
//! Logs go to `<base>/logs/expenses.log`, rotated daily. Standard output is
//! left to command results.

use crate::config::ExpensePaths;
use crate::error::ExpenseResult;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Base name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "expenses.log";

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured `level`.
pub fn init(level: &str, paths: &ExpensePaths) -> ExpenseResult<LoggingGuard> {
    let log_dir = paths.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    // try_init: a second call in the same process keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    tracing::debug!(log_dir = %log_dir.display(), level, "Logging initialized");

    Ok(LoggingGuard { _guard: guard })
}

/// Initialize logging for tests (logs to the test writer)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Keeps the background log writer alive; pending lines are flushed on drop
pub struct LoggingGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Path prefix of the log files; rotation appends the date
pub fn log_file_path(paths: &ExpensePaths) -> PathBuf {
    paths.log_dir().join(LOG_FILE_NAME)
}
