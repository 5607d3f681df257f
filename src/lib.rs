//! # hangstats
//!
//! A Rust library for turning Google Hangouts takeout archives into
//! per-conversation statistics.
//!
//! ## Overview
//!
//! For every conversation in a `Hangouts.json` export, hangstats produces:
//! - **Participants** — the roster, including members added mid-conversation
//! - **Message counts** — per participant and per event category
//! - **Name history** — every rename, in order
//! - **Call time** — total duration of ended voice/video calls
//! - **Message log** — one `(timestamp, category, who)` entry per event
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hangstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let archive = HangoutsArchive::from_path("raw/Hangouts.json", &ArchiveConfig::new())?;
//!
//!     for conv in archive.aggregate() {
//!         println!("{}", conv.summary());
//!         write_snapshot(&conv.export(), &OutputConfig::new())?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Feeding Events Directly
//!
//! The aggregator does not care where events come from:
//!
//! ```rust
//! use hangstats::prelude::*;
//!
//! let mut conv = ConversationAggregator::new(ConversationKind::Group, "trip", None);
//! conv.seed_participants(&[InitialMember::new("A").with_name("Alice")]);
//! conv.process_event(&Event::rename("A", 1_000_000, "Trip Planning"));
//! conv.process_event(&Event::end_hangout("A", 2_000_000, 5400));
//!
//! assert_eq!(conv.name_history(), ["Trip Planning"]);
//! assert_eq!(conv.call_duration_hours(), 1.5);
//! ```
//!
//! ## Module Structure
//!
//! - [`event`] — [`Event`], [`EventKind`](event::EventKind), [`MessageCategory`]
//! - [`core`] — Aggregation
//!   - [`core::participant`] — [`Participant`](core::Participant) counters
//!   - [`core::conversation`] — [`ConversationAggregator`]
//!   - [`core::snapshot`] — [`ConversationSnapshot`]
//!   - [`core::output`] — JSON, JSONL and CSV writers
//! - [`archive`] — [`HangoutsArchive`](archive::HangoutsArchive) loader
//! - [`parsing`] — Raw takeout structures
//! - [`config`] — [`ArchiveConfig`](config::ArchiveConfig)
//! - [`format`] — [`OutputFormat`](format::OutputFormat), [`write_snapshot`](format::write_snapshot)
//! - [`logging`] — [`LogLevel`](logging::LogLevel) and subscriber setup
//! - [`error`] — Unified error types ([`HangstatsError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod event;
pub mod format;
pub mod logging;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use crate::core::{ConversationAggregator, ConversationSnapshot};
pub use error::{HangstatsError, Result};
pub use event::{Event, MessageCategory};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use hangstats::prelude::*;
/// ```
pub mod prelude {
    // Events
    pub use crate::event::{Event, EventKind, HangoutEventKind, MessageCategory};

    // Error types
    pub use crate::error::{HangstatsError, Result};

    // Aggregation
    pub use crate::core::{
        ConversationAggregator, ConversationKind, ConversationRecord, ConversationSnapshot,
        InitialMember, LogEntry, OutputConfig, Participant, ParticipantSummary,
    };

    // Loading
    pub use crate::archive::HangoutsArchive;
    pub use crate::config::ArchiveConfig;

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_snapshot};

    // Logging
    pub use crate::logging::LogLevel;
}
