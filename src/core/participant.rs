//! Per-identity message counters.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::MessageCategory;

/// Display name used when the archive does not know a participant's name.
pub const UNKNOWN_NAME: &str = "unknown";

/// One chat identity within a conversation.
///
/// Counters exist for exactly the five [`MessageCategory`] values and only
/// ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: String,
    name: String,
    counts: [u64; 5],
}

impl Participant {
    /// Creates a participant with all counters at zero.
    ///
    /// Pass [`UNKNOWN_NAME`] (or use [`Participant::unnamed`]) when no
    /// display name is known.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            counts: [0; 5],
        }
    }

    /// Creates a participant whose name is unknown.
    pub fn unnamed(id: impl Into<String>) -> Self {
        Self::new(id, UNKNOWN_NAME)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Increments the counter for `category`.
    pub fn record(&mut self, category: MessageCategory) {
        self.counts[category.index()] += 1;
    }

    /// Increments the counter named by a raw archive tag.
    ///
    /// Unknown tags leave the counters untouched and return `false`.
    pub fn record_tag(&mut self, tag: &str) -> bool {
        match tag.parse::<MessageCategory>() {
            Ok(category) => {
                self.record(category);
                true
            }
            Err(_) => {
                debug!(participant = %self.id, tag, "trying to count unknown message type");
                false
            }
        }
    }

    /// Returns the counter for `category`.
    pub fn count(&self, category: MessageCategory) -> u64 {
        self.counts[category.index()]
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The name, or the id when the name is unknown.
    pub fn display_identifier(&self) -> &str {
        if self.name == UNKNOWN_NAME {
            &self.id
        } else {
            &self.name
        }
    }

    /// Fixed-field report of this participant.
    pub fn summary(&self) -> ParticipantSummary {
        ParticipantSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            regular_chat_messages: self.count(MessageCategory::RegularChat),
            rename_messages: self.count(MessageCategory::Rename),
            remove_user_messages: self.count(MessageCategory::RemoveUser),
            add_user_messages: self.count(MessageCategory::AddUser),
            hangout_event_messages: self.count(MessageCategory::HangoutEvent),
        }
    }
}

/// Snapshot of a participant's counters.
///
/// `Display` renders the block printed in conversation summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSummary {
    pub id: String,
    pub name: String,
    pub regular_chat_messages: u64,
    pub rename_messages: u64,
    pub remove_user_messages: u64,
    pub add_user_messages: u64,
    pub hangout_event_messages: u64,
}

impl ParticipantSummary {
    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.regular_chat_messages
            + self.rename_messages
            + self.remove_user_messages
            + self.add_user_messages
            + self.hangout_event_messages
    }

    /// Returns the counter for `category`.
    pub fn count(&self, category: MessageCategory) -> u64 {
        match category {
            MessageCategory::RegularChat => self.regular_chat_messages,
            MessageCategory::Rename => self.rename_messages,
            MessageCategory::RemoveUser => self.remove_user_messages,
            MessageCategory::AddUser => self.add_user_messages,
            MessageCategory::HangoutEvent => self.hangout_event_messages,
        }
    }
}

impl fmt::Display for ParticipantSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    Name: {}", self.name)?;
        writeln!(f, "    ID: {}", self.id)?;
        for category in MessageCategory::ALL {
            writeln!(f, "    {}: {}", category.label(), self.count(category))?;
        }
        Ok(())
    }
}
