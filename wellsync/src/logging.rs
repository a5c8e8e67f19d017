//! Tracing subscriber setup.
//!
//! Headless mode logs to stderr. The TUI owns the terminal, so it only
//! logs when a log file is configured.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber for this run.
pub fn init(config: &AppConfig) -> io::Result<()> {
    if config.headless {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(config))
            .with_writer(io::stderr)
            .init();
        return Ok(());
    }

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(config))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    Ok(())
}
