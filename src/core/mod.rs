//! Core aggregation logic for hangstats.
//!
//! This module contains:
//! - [`participant`] - Per-identity message counters
//! - [`conversation`] - The event-stream aggregator
//! - [`snapshot`] - Exported conversation summaries
//! - [`models`] - Decoded conversation records and output configuration
//! - [`output`] - Snapshot writers (JSON, JSONL, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use hangstats::core::{
//!     ConversationAggregator, ConversationKind, ConversationRecord, InitialMember,
//! };
//! use hangstats::event::Event;
//!
//! let record = ConversationRecord::new("c1", ConversationKind::OneToOne)
//!     .with_participant(InitialMember::new("A").with_name("Alice"))
//!     .with_event(Event::regular_chat("A", 1_000_000));
//!
//! let snapshot = ConversationAggregator::aggregate(&record).export();
//! assert_eq!(snapshot.message_count, 1);
//! ```

pub mod conversation;
pub mod models;
pub mod output;
pub mod participant;
pub mod snapshot;

// Re-export main types for convenience
pub use conversation::{
    ConversationAggregator, ConversationSummary, DIRECT_MESSAGE_NAME, UNKNOWN_GROUP_NAME,
};
pub use models::{ConversationKind, ConversationRecord, InitialMember, OutputConfig};
pub use participant::{Participant, ParticipantSummary, UNKNOWN_NAME};
pub use snapshot::{ConversationSnapshot, LogEntry};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
