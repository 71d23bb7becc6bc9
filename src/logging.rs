//! Tracing subscriber setup for the CLI
//!
//! The library only emits events; installing a subscriber is left to the
//! binary. `SKEWCHECK_LOG` takes precedence over `--log-level`.

use std::io;

use tracing::Level;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "SKEWCHECK_LOG";

/// Log level options for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Show all logs (trace level)
    Trace,
    /// Show debug and above
    Debug,
    /// Show info and above
    Info,
    /// Show warnings and above (default)
    #[default]
    Warn,
    /// Show errors only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn filter(level: LogLevel) -> miette::Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| {
            let level = Level::from(level).as_str().to_lowercase();
            EnvFilter::try_new(format!("skewcheck={level}"))
        })
        .map_err(|e| miette::miette!("Failed to create tracing filter: {e}"))
}

/// Install a compact stderr subscriber
pub fn init_tracing(level: LogLevel) -> miette::Result<()> {
    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter(level)?)
        .with(layer)
        .try_init()
        .map_err(|e| miette::miette!("Failed to initialize tracing: {e}"))
}
