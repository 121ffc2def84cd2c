use crate::config::config::{Config, DEFAULT_LOG_LEVEL};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log events go for the current command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// One-shot CLI commands.
    Stderr,
    /// Full-screen TUI: only the configured log file, otherwise nowhere.
    Screen,
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
/// Calling it twice is harmless; the second call is ignored.
pub fn init_tracing(config: &Config, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false);

    let _ = match (&config.log_file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, LogTarget::Stderr) => builder.with_writer(std::io::stderr).try_init(),
        (None, LogTarget::Screen) => builder.with_writer(std::io::sink).try_init(),
    };
    Ok(())
}
