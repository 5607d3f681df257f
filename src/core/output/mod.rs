//! Snapshot writers.
//!
//! This module provides writers for different output formats:
//! - [`write_json`] / [`to_json`] - The full snapshot as one JSON document - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - The message log, one JSON object per line - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - The message log with semicolon delimiter - requires `csv-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Contents | Use Case |
//! |--------|----------|----------|
//! | JSON | Everything | Reloading snapshots, further analysis |
//! | JSONL | Message log | Streaming consumers, line-oriented tools |
//! | CSV | Message log | Spreadsheets, plotting |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> hangstats::Result<()> {
//! use hangstats::core::output::{to_csv, write_json};
//! use hangstats::core::{ConversationAggregator, ConversationKind, OutputConfig};
//!
//! let snapshot = ConversationAggregator::new(ConversationKind::OneToOne, "c1", None).export();
//!
//! write_json(&snapshot, "c1-parsed.json", &OutputConfig::new())?;
//! let csv_string = to_csv(&snapshot)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
