//! Output format types for the hangstats library.
//!
//! These types don't depend on CLI frameworks and can be used directly from
//! library code.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> hangstats::Result<()> {
//! use hangstats::core::{ConversationAggregator, ConversationKind, OutputConfig};
//! use hangstats::format::{OutputFormat, write_snapshot};
//!
//! let snapshot = ConversationAggregator::new(ConversationKind::OneToOne, "c1", None).export();
//!
//! // Writes output/c1-parsed.csv
//! let config = OutputConfig::new().with_format(OutputFormat::Csv);
//! let path = write_snapshot(&snapshot, &config)?;
//! assert!(path.ends_with("c1-parsed.csv"));
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::models::OutputConfig;
use crate::core::snapshot::ConversationSnapshot;
use crate::error::{HangstatsError, Result};

/// Output format for conversation snapshots.
///
/// - [`Json`](OutputFormat::Json) - The whole snapshot (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - The message log, one JSON object per line
/// - [`Csv`](OutputFormat::Csv) - The message log, semicolon-delimited
///
/// # Example
///
/// ```rust
/// use hangstats::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Full snapshot as one JSON document
    #[default]
    Json,

    /// JSON Lines - one log entry per line
    ///
    /// Also known as NDJSON.
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Jsonl, OutputFormat::Csv]
    }

    /// Name of the cargo feature this format's writer needs.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn feature_disabled(format: OutputFormat) -> HangstatsError {
    HangstatsError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.required_feature()
        ),
    )
}

/// Writes a snapshot into `config.output_dir`, creating the directory if
/// needed, and returns the written path.
///
/// The file is named `<conversation_id>-parsed.<ext>`.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The directory or file cannot be written
pub fn write_snapshot(snapshot: &ConversationSnapshot, config: &OutputConfig) -> Result<PathBuf> {
    if !config.output_dir.is_dir() {
        fs::create_dir_all(&config.output_dir)?;
    }

    let path = config.snapshot_path(&snapshot.conversation_id);
    info!(
        "serializing conversation data to \"{}\"",
        path.display()
    );
    write_to_format(snapshot, &path, config)?;
    Ok(path)
}

/// Writes a snapshot to `path` in `config.format`.
#[allow(unused_variables)]
pub fn write_to_format(
    snapshot: &ConversationSnapshot,
    path: &std::path::Path,
    config: &OutputConfig,
) -> Result<()> {
    match config.format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(snapshot, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(snapshot, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(snapshot, path),
        #[allow(unreachable_patterns)]
        format => Err(feature_disabled(format)),
    }
}

/// Converts a snapshot to a string in `config.format`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "json-output")]
/// # fn example() -> hangstats::Result<()> {
/// use hangstats::core::{ConversationAggregator, ConversationKind, OutputConfig};
/// use hangstats::format::to_format_string;
///
/// let snapshot = ConversationAggregator::new(ConversationKind::OneToOne, "c1", None).export();
/// let json = to_format_string(&snapshot, &OutputConfig::new())?;
/// assert!(json.contains("Direct Message"));
/// # Ok(())
/// # }
/// ```
#[allow(unused_variables)]
pub fn to_format_string(snapshot: &ConversationSnapshot, config: &OutputConfig) -> Result<String> {
    match config.format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(snapshot),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(snapshot, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(snapshot),
        #[allow(unreachable_patterns)]
        format => Err(feature_disabled(format)),
    }
}
