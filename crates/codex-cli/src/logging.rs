//! Tracing setup: console plus append-only file.

use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with a file appender for persistent logs.
///
/// Logs are written to:
/// - stdout (compact, for console viewing)
/// - `log_file` (JSON lines, appended, never rotated)
///
/// Log level is controlled by `RUST_LOG` (default: info).
///
/// The returned guard flushes the file writer on drop; hold it for the
/// lifetime of the process and drop it before `process::exit`.
pub fn init_tracing(log_file: &Path) -> Result<WorkerGuard> {
    if log_file.file_name().is_none() {
        anyhow::bail!("Invalid log file path: {}", log_file.display());
    }
    if let Some(log_dir) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(std::io::stdout().is_terminal())
                .compact(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false), // No ANSI colors in files
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unopenable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        // A directory cannot be opened for appending
        let err = init_tracing(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"), "{err:#}");
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        let err = init_tracing(Path::new("..")).unwrap_err();
        assert!(err.to_string().contains("Invalid log file path"), "{err:#}");
    }
}
