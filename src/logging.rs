//! Log levels and subscriber setup.
//!
//! The library only emits [`tracing`] events. Binaries call [`init`] once,
//! before any archive is loaded, to install a stderr subscriber filtered at
//! the requested [`LogLevel`].
//!
//! Levels can be given by name or by the numeric scheme older scripts used
//! (`0` = debug through `3` = error):
//!
//! ```rust
//! use hangstats::logging::LogLevel;
//!
//! assert_eq!("warn".parse::<LogLevel>()?, LogLevel::Warn);
//! assert_eq!("2".parse::<LogLevel>()?, LogLevel::Warn);
//! assert!("verbose".parse::<LogLevel>().is_err());
//! # Ok::<(), hangstats::HangstatsError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HangstatsError;

/// Minimum severity that gets printed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Returns the `tracing` filter directive for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Returns all accepted names (including numeric aliases).
    pub fn all_names() -> &'static [&'static str] {
        &["debug", "info", "warn", "error", "0", "1", "2", "3"]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = HangstatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" | "0" => Ok(LogLevel::Debug),
            "info" | "1" => Ok(LogLevel::Info),
            "warn" | "warning" | "2" => Ok(LogLevel::Warn),
            "error" | "3" => Ok(LogLevel::Error),
            _ => Err(HangstatsError::invalid_log_level(s)),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// Returns `false` if a subscriber was already installed, in which case the
/// existing one is kept.
#[cfg(feature = "cli")]
pub fn init(level: LogLevel) -> bool {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::new(level.as_str());
    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
}
