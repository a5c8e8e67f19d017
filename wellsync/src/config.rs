//! Runtime configuration from the environment and command line.
//!
//! Environment (a `.env` file is loaded first if present):
//! - `WELLSYNC_LOG`: tracing filter, falling back to `RUST_LOG`, then "info"
//! - `WELLSYNC_LOG_FILE`: where the TUI writes logs (TUI logs are off without it)
//! - `WELLSYNC_REPLY_DELAY_MS`: companion "typing" delay, default 800

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_REPLY_DELAY_MS: u64 = 800;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("WELLSYNC_REPLY_DELAY_MS must be a whole number of milliseconds, got {0:?}")]
    InvalidReplyDelay(String),

    #[error("Unknown option: {0} (try --help)")]
    UnknownOption(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub headless: bool,
    pub json: bool,
    pub show_help: bool,
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
    pub reply_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            headless: false,
            json: false,
            show_help: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
        }
    }
}

impl AppConfig {
    /// Load from the process environment and arguments.
    pub fn load(args: &[String]) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_sources(args, |key| std::env::var(key).ok())
    }

    /// Build from arguments and an environment lookup.
    pub fn from_sources(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Skip the program name
        for arg in args.iter().skip(1) {
            match arg.as_str() {
                "--headless" => config.headless = true,
                "--json" => config.json = true,
                "-h" | "--help" => config.show_help = true,
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }

        if let Some(filter) = env("WELLSYNC_LOG").or_else(|| env("RUST_LOG")) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config.log_file = env("WELLSYNC_LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        if let Some(raw) = env("WELLSYNC_REPLY_DELAY_MS") {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidReplyDelay(raw.clone()))?;
            config.reply_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }
}
