use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize logging for a docnav component, rolling daily under
/// `~/.docnav/logs` with the component name as the file prefix.
///
/// The returned guard flushes the non-blocking writer on drop and must be
/// held for the lifetime of the process.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let log_dir = Path::new(&home).join(".docnav/logs");
    init_logging_at(log_dir, component, to_stderr)
}

/// Same as [`init_logging`] with an explicit log directory.
pub fn init_logging_at(
    log_dir: impl Into<PathBuf>,
    component: &str,
    to_stderr: bool,
) -> WorkerGuard {
    let log_dir = log_dir.into();
    let _ = std::fs::create_dir_all(&log_dir);

    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}
