//! Exported summary of one aggregated conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::participant::ParticipantSummary;
use crate::event::MICROS_PER_SECOND;

/// Seconds per hour, used for call durations.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// One entry of the flattened message log.
///
/// `who` is the sender's display identifier, or the raw sender id when the
/// sender was not in the roster at the time of the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Seconds since the Unix epoch
    pub timestamp: f64,
    /// Raw category tag, including unrecognized ones
    pub category: String,
    pub who: String,
}

impl LogEntry {
    pub fn new(timestamp: f64, category: impl Into<String>, who: impl Into<String>) -> Self {
        Self {
            timestamp,
            category: category.into(),
            who: who.into(),
        }
    }

    /// The timestamp as a UTC datetime, if it is in range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_micros((self.timestamp * MICROS_PER_SECOND).round() as i64)
    }
}

/// Display/persistence-ready summary of a conversation.
///
/// Produced by [`ConversationAggregator::export`](super::ConversationAggregator::export).
/// Field names match the keys downstream analysis tooling reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSnapshot {
    pub conversation_id: String,
    pub conversation_name: String,
    /// Names the conversation was renamed to, in event order
    pub other_conversation_names: Vec<String>,
    /// Total counted messages across participants
    pub message_count: u64,
    /// Call time in hours
    pub video_duration: f64,
    /// Call time in seconds
    pub video_duration_secs: u64,
    pub participant_ids: Vec<String>,
    /// Display identifiers, parallel to `participant_ids`
    pub participant_names: Vec<String>,
    pub participants: Vec<ParticipantSummary>,
    pub messages: Vec<LogEntry>,
}

impl ConversationSnapshot {
    /// Re-derives the message count from the per-participant counters.
    pub fn recount_messages(&self) -> u64 {
        self.participants.iter().map(ParticipantSummary::total).sum()
    }

    /// Re-derives the call duration in hours from the seconds field.
    pub fn recompute_duration_hours(&self) -> f64 {
        self.video_duration_secs as f64 / SECONDS_PER_HOUR
    }

    /// Returns `true` if the derived fields agree with their sources.
    pub fn is_consistent(&self) -> bool {
        self.recount_messages() == self.message_count
            && self.recompute_duration_hours() == self.video_duration
            && self.participant_ids.len() == self.participants.len()
            && self.participant_names.len() == self.participants.len()
    }

    /// Number of log entries attributed to `who`.
    pub fn messages_from(&self, who: &str) -> usize {
        self.messages.iter().filter(|m| m.who == who).count()
    }
}
