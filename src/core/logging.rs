//! Logging Setup
//!
//! Initializes tracing with two layers: a daily-rolling JSON file under the
//! platform data directory and a human-readable stdout layer, both behind
//! an env-filter (default "info").

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize logging. The returned guard must be held for the process
/// lifetime so buffered file output is flushed on shutdown.
pub fn init() -> WorkerGuard {
    let log_dir = dirs::data_dir()
        .map(|d| d.join("fitsearch").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {e}");
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "fitsearch.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter);

    let stdout_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_filter(stdout_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .init();

    tracing::info!(
        "Logging initialized. Writing to {:?} (daily rolling)",
        log_dir.join("fitsearch.log")
    );

    guard
}
