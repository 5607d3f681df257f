//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! ```rust
//! use clap::Parser;
//! use hangstats::cli::{Args, OutputFormat};
//! use hangstats::logging::LogLevel;
//!
//! let args = Args::parse_from(["hangstats", "-f", "takeout.json", "-l", "0", "--format", "csv"]);
//! assert_eq!(args.file_path, "takeout.json");
//! assert_eq!(args.log_level, LogLevel::Debug);
//! assert_eq!(args.format, OutputFormat::Csv);
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ArchiveConfig;
use crate::core::models::OutputConfig;
use crate::logging::LogLevel;

/// Summarize a Google Hangouts takeout: participants, message counts,
/// renames and call time for every conversation.
#[derive(Parser, Debug, Clone)]
#[command(name = "hangstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    hangstats
    hangstats -f Takeout/Hangouts/Hangouts.json
    hangstats -f Hangouts.json -l debug --no-serialize
    hangstats -f Hangouts.json -o parsed --format csv")]
pub struct Args {
    /// Path to raw data file
    #[arg(short, long, default_value = "raw/Hangouts.json")]
    pub file_path: String,

    /// Minimum logging level to output (debug, info, warn, error or 0-3)
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Directory for per-conversation output files
    #[arg(short, long, default_value = "output")]
    pub output_dir: String,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Don't print conversation summaries
    #[arg(long)]
    pub no_summary: bool,

    /// Don't write output files
    #[arg(long)]
    pub no_serialize: bool,

    /// Fail on the first malformed conversation instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Accept archive paths without a .json extension
    #[arg(long)]
    pub any_extension: bool,
}

impl Args {
    /// Archive loading settings selected by the flags.
    pub fn archive_config(&self) -> ArchiveConfig {
        ArchiveConfig::new()
            .with_skip_invalid(!self.strict)
            .with_require_json_extension(!self.any_extension)
    }

    /// Output settings selected by the flags.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new()
            .with_output_dir(&self.output_dir)
            .with_format(self.format.into())
    }
}

/// Output format options.
///
/// - [`Json`](OutputFormat::Json) - Full snapshot (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - Message log, one JSON object per line
/// - [`Csv`](OutputFormat::Csv) - Message log with semicolon delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full snapshot as JSON (default)
    #[default]
    Json,

    /// JSON Lines - one log entry per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&crate::format::OutputFormat::from(*self), f)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<crate::format::OutputFormat>()? {
            crate::format::OutputFormat::Json => Ok(OutputFormat::Json),
            crate::format::OutputFormat::Jsonl => Ok(OutputFormat::Jsonl),
            crate::format::OutputFormat::Csv => Ok(OutputFormat::Csv),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
