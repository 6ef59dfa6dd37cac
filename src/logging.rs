//! Logging initialization.
//!
//! TUI mode: logs to `<paths.state>/logs/garage-register-{datetime}.log`
//! CLI mode: logs to stderr

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Result of logging initialization
pub struct LoggingHandle {
    /// Flushes buffered file logs when dropped; keep alive until exit
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Level directive: `--debug` wins, then the configured level
fn log_level(config: &Config, debug_override: bool) -> String {
    if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    }
}

/// `RUST_LOG` when set and valid, otherwise `level`
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn log_file_name(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("garage-register-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Whether this run writes to a log file instead of stderr
fn logs_to_file(config: &Config, is_tui_mode: bool) -> bool {
    is_tui_mode && config.logging.to_file
}

/// Initialize logging based on mode and configuration.
///
/// Stderr would corrupt the TUI, so TUI mode writes to a file unless
/// `logging.to_file` is disabled.
pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let filter = build_filter(&log_level(config, debug_override));

    if logs_to_file(config, is_tui_mode) {
        let logs_dir = config.logs_path();
        std::fs::create_dir_all(&logs_dir)
            .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

        let log_filename = log_file_name(chrono::Utc::now());
        let log_file_path = logs_dir.join(&log_filename);

        let (non_blocking, guard) = file_writer(&logs_dir, &log_filename);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .try_init()
            .context("Failed to install log subscriber")?;

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to install log subscriber")?;

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}

fn file_writer(
    dir: &Path,
    file_name: &str,
) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    tracing_appender::non_blocking(file_appender)
}
