//! Core data models for decoded conversations and output configuration.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::format::OutputFormat;

/// Whether a conversation is a group chat or a direct message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationKind {
    Group,
    /// Two-party conversation. Every non-`GROUP` archive type maps here.
    #[default]
    OneToOne,
}

impl ConversationKind {
    /// Decodes the archive's `conversation.type` value.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "GROUP" {
            ConversationKind::Group
        } else {
            ConversationKind::OneToOne
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationKind::Group => "GROUP",
            ConversationKind::OneToOne => "ONE_TO_ONE",
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, ConversationKind::Group)
    }
}

impl fmt::Display for ConversationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A conversation member known before any event is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialMember {
    pub id: String,
    pub fallback_name: Option<String>,
}

impl InitialMember {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fallback_name: None,
        }
    }

    /// Builder-style method to set the fallback display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = Some(name.into());
        self
    }
}

/// One conversation decoded from the archive, ready for aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRecord {
    pub id: String,
    pub kind: ConversationKind,
    /// Current name; only group conversations carry one.
    pub name: Option<String>,
    pub participants: Vec<InitialMember>,
    /// Events in archive order.
    pub events: Vec<Event>,
}

impl ConversationRecord {
    pub fn new(id: impl Into<String>, kind: ConversationKind) -> Self {
        Self {
            id: id.into(),
            kind,
            name: None,
            participants: Vec::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_participant(mut self, member: InitialMember) -> Self {
        self.participants.push(member);
        self
    }

    #[must_use]
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.extend(events);
        self
    }
}

/// Where and how snapshots are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving `<conversation_id>-parsed.<ext>` files (default: `output`)
    pub output_dir: PathBuf,
    /// Snapshot format (default: JSON)
    pub format: OutputFormat,
    /// Pretty-print JSON snapshots (default: true)
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            format: OutputFormat::default(),
            pretty: true,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Default file name for a conversation's snapshot.
    pub fn file_name(&self, conversation_id: &str) -> String {
        format!("{}-parsed.{}", conversation_id, self.format.extension())
    }

    /// Full path of a conversation's snapshot.
    pub fn snapshot_path(&self, conversation_id: &str) -> PathBuf {
        self.output_dir.join(self.file_name(conversation_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(ConversationKind::from_tag("GROUP"), ConversationKind::Group);
        assert_eq!(
            ConversationKind::from_tag("STICKY_ONE_TO_ONE"),
            ConversationKind::OneToOne
        );
        assert_eq!(ConversationKind::from_tag(""), ConversationKind::OneToOne);
        assert!(ConversationKind::Group.is_group());
    }

    #[test]
    fn test_record_builder() {
        let record = ConversationRecord::new("c1", ConversationKind::Group)
            .with_name("Friends")
            .with_participant(InitialMember::new("A").with_name("Alice"))
            .with_event(Event::regular_chat("A", 0));

        assert_eq!(record.name.as_deref(), Some("Friends"));
        assert_eq!(record.participants[0].fallback_name.as_deref(), Some("Alice"));
        assert_eq!(record.events.len(), 1);
    }

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::new();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.pretty);
        assert_eq!(config.file_name("abc"), "abc-parsed.json");
    }

    #[test]
    fn test_output_config_builder() {
        let config = OutputConfig::new()
            .with_output_dir("/tmp/out")
            .with_format(OutputFormat::Jsonl)
            .with_pretty(false);
        assert_eq!(
            config.snapshot_path("abc"),
            PathBuf::from("/tmp/out/abc-parsed.jsonl")
        );
        assert!(!config.pretty);
    }
}
