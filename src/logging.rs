//! File logging.
//!
//! The terminal belongs to the TUI, so tracing output goes to
//! `.chatbar/chatbar.log` through a non-blocking writer.

use std::fs::OpenOptions;

use anyhow::Context;
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::fs::ChatbarPaths;

/// Filter used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "chatbar=debug" } else { "chatbar=info" }
}

/// Installs the global subscriber writing to the chatbar log file.
///
/// The returned guard flushes buffered events when dropped; keep it alive
/// until the terminal has been restored.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
pub fn init(paths: &ChatbarPaths, verbose: bool) -> anyhow::Result<WorkerGuard> {
    paths.ensure_chatbar_dir()?;

    let mut log_file_opts = OpenOptions::new();
    log_file_opts.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        log_file_opts.mode(0o600);
    }

    let log_path = paths.log_file();
    let log_file = log_file_opts
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let (non_blocking, guard) = non_blocking(log_file);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_ansi(false)
        .with_filter(env_filter);

    // A subscriber may already be installed (tests); keep the existing one
    let _ = tracing_subscriber::registry().with(file_layer).try_init();

    Ok(guard)
}
