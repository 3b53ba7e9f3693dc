//! Structured logging setup using the `tracing` ecosystem.
//!
//! Console output goes to stderr so command output on stdout stays
//! machine-readable. The log file rotates daily and can be JSON.

use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants;
use crate::error::SdmsResult;

/// Initialize the global tracing subscriber.
///
/// # Arguments
/// * `settings` - The `[logging]` section; `level` accepts any `EnvFilter` directive
/// * `log_dir` - Directory for the rotating log file
/// * `level_override` - Replaces `settings.level` when set (e.g. `-v` on the CLI)
pub fn init_logging(
    settings: &LoggingConfig,
    log_dir: &Path,
    level_override: Option<&str>,
) -> SdmsResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let level = level_override.unwrap_or(settings.level.as_str());
    let file_appender = rolling::daily(log_dir, constants::LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer);

    if settings.json_output {
        registry
            .with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
            .ok();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
            .ok();
    }

    tracing::debug!("logging initialized at level={level}, dir={}", log_dir.display());

    Ok(LogGuard { _guard: guard })
}

/// Guard that keeps the non-blocking log writer alive.
/// Drop this to flush and close the log file.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
