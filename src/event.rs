//! Typed conversation events.
//!
//! This module provides [`Event`], the normalized representation of one entry
//! in a conversation's history, and [`EventKind`], the tagged variant that
//! carries each category's payload.
//!
//! # Categories
//!
//! Hangouts tags every event with one of five categories:
//!
//! | Category | Tag | Payload |
//! |----------|-----|---------|
//! | [`RegularChat`](MessageCategory::RegularChat) | `REGULAR_CHAT_MESSAGE` | none |
//! | [`Rename`](MessageCategory::Rename) | `RENAME_CONVERSATION` | new name |
//! | [`RemoveUser`](MessageCategory::RemoveUser) | `REMOVE_USER` | removed ids |
//! | [`AddUser`](MessageCategory::AddUser) | `ADD_USER` | added ids |
//! | [`HangoutEvent`](MessageCategory::HangoutEvent) | `HANGOUT_EVENT` | call event kind, duration |
//!
//! Any other tag decodes to [`EventKind::Unknown`], which keeps the raw tag so
//! it can still be logged.
//!
//! # Example
//!
//! ```
//! use hangstats::event::{Event, EventKind, MessageCategory};
//!
//! let event = Event::regular_chat("A", 1_000_000);
//! assert_eq!(event.timestamp_secs(), 1.0);
//! assert_eq!(event.kind.category(), Some(MessageCategory::RegularChat));
//!
//! let unknown = Event::new("A", 0, EventKind::Unknown("OTR_MODIFICATION".into()));
//! assert_eq!(unknown.tag(), "OTR_MODIFICATION");
//! assert_eq!(unknown.kind.category(), None);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Microseconds per second in Hangouts timestamps.
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// The closed set of message categories a participant is counted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageCategory {
    /// Ordinary chat message
    #[serde(rename = "REGULAR_CHAT_MESSAGE")]
    RegularChat,
    /// Conversation renamed
    #[serde(rename = "RENAME_CONVERSATION")]
    Rename,
    /// Member removed (or left)
    RemoveUser,
    /// Member added
    AddUser,
    /// Voice/video call event
    HangoutEvent,
}

impl MessageCategory {
    /// Every category, in counter order.
    pub const ALL: [MessageCategory; 5] = [
        MessageCategory::RegularChat,
        MessageCategory::Rename,
        MessageCategory::RemoveUser,
        MessageCategory::AddUser,
        MessageCategory::HangoutEvent,
    ];

    /// Returns the archive tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCategory::RegularChat => "REGULAR_CHAT_MESSAGE",
            MessageCategory::Rename => "RENAME_CONVERSATION",
            MessageCategory::RemoveUser => "REMOVE_USER",
            MessageCategory::AddUser => "ADD_USER",
            MessageCategory::HangoutEvent => "HANGOUT_EVENT",
        }
    }

    /// Returns the human-readable label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            MessageCategory::RegularChat => "Regular chat messages",
            MessageCategory::Rename => "Rename conversation messages",
            MessageCategory::RemoveUser => "Remove user messages",
            MessageCategory::AddUser => "Add user messages",
            MessageCategory::HangoutEvent => "Hangouts event messages",
        }
    }

    /// Position of this category's counter.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown message category: '{}'", s))
    }
}

/// Inner kind of a `HANGOUT_EVENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangoutEventKind {
    /// `START_HANGOUT`
    Start,
    /// `END_HANGOUT`, the only kind that carries a call duration
    End,
    /// Anything else, kept verbatim
    Other(String),
}

impl HangoutEventKind {
    /// Decodes an archive tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "START_HANGOUT" => HangoutEventKind::Start,
            "END_HANGOUT" => HangoutEventKind::End,
            other => HangoutEventKind::Other(other.to_string()),
        }
    }

    /// Returns the archive tag.
    pub fn as_str(&self) -> &str {
        match self {
            HangoutEventKind::Start => "START_HANGOUT",
            HangoutEventKind::End => "END_HANGOUT",
            HangoutEventKind::Other(tag) => tag,
        }
    }

    /// Returns `true` if this event ends a call.
    pub fn is_call_end(&self) -> bool {
        matches!(self, HangoutEventKind::End)
    }
}

/// Category-specific payload of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    RegularChat,
    /// `new_name` is `None` when the archive omitted the rename payload.
    Rename { new_name: Option<String> },
    RemoveUser { removed: Vec<String> },
    AddUser { added: Vec<String> },
    HangoutEvent {
        kind: HangoutEventKind,
        duration_secs: Option<u64>,
    },
    /// An unrecognized category tag.
    Unknown(String),
}

impl EventKind {
    /// Returns the category, or `None` for [`EventKind::Unknown`].
    pub fn category(&self) -> Option<MessageCategory> {
        match self {
            EventKind::RegularChat => Some(MessageCategory::RegularChat),
            EventKind::Rename { .. } => Some(MessageCategory::Rename),
            EventKind::RemoveUser { .. } => Some(MessageCategory::RemoveUser),
            EventKind::AddUser { .. } => Some(MessageCategory::AddUser),
            EventKind::HangoutEvent { .. } => Some(MessageCategory::HangoutEvent),
            EventKind::Unknown(_) => None,
        }
    }

    /// Returns the raw category tag.
    pub fn tag(&self) -> &str {
        match self {
            EventKind::Unknown(tag) => tag,
            known => known.category().map_or("", |c| c.as_str()),
        }
    }
}

/// One timestamped event in a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Chat id of the sender.
    pub sender_id: String,
    /// Microseconds since the Unix epoch.
    pub timestamp_us: i64,
    /// Category and payload.
    pub kind: EventKind,
}

impl Event {
    pub fn new(sender_id: impl Into<String>, timestamp_us: i64, kind: EventKind) -> Self {
        Self {
            sender_id: sender_id.into(),
            timestamp_us,
            kind,
        }
    }

    /// Creates a regular chat message.
    pub fn regular_chat(sender_id: impl Into<String>, timestamp_us: i64) -> Self {
        Self::new(sender_id, timestamp_us, EventKind::RegularChat)
    }

    /// Creates a conversation rename.
    pub fn rename(
        sender_id: impl Into<String>,
        timestamp_us: i64,
        new_name: impl Into<String>,
    ) -> Self {
        Self::new(
            sender_id,
            timestamp_us,
            EventKind::Rename {
                new_name: Some(new_name.into()),
            },
        )
    }

    /// Creates a membership addition.
    pub fn add_user<I, S>(sender_id: impl Into<String>, timestamp_us: i64, added: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            sender_id,
            timestamp_us,
            EventKind::AddUser {
                added: added.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Creates a membership removal.
    pub fn remove_user<I, S>(sender_id: impl Into<String>, timestamp_us: i64, removed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            sender_id,
            timestamp_us,
            EventKind::RemoveUser {
                removed: removed.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Creates a call event.
    pub fn hangout(
        sender_id: impl Into<String>,
        timestamp_us: i64,
        kind: HangoutEventKind,
        duration_secs: Option<u64>,
    ) -> Self {
        Self::new(
            sender_id,
            timestamp_us,
            EventKind::HangoutEvent {
                kind,
                duration_secs,
            },
        )
    }

    /// Creates a call-end event carrying its duration.
    pub fn end_hangout(sender_id: impl Into<String>, timestamp_us: i64, duration_secs: u64) -> Self {
        Self::hangout(
            sender_id,
            timestamp_us,
            HangoutEventKind::End,
            Some(duration_secs),
        )
    }

    /// Returns the timestamp in (fractional) seconds.
    pub fn timestamp_secs(&self) -> f64 {
        self.timestamp_us as f64 / MICROS_PER_SECOND
    }

    /// Returns the timestamp as a UTC datetime, if it is in range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_micros(self.timestamp_us).single()
    }

    /// Returns the raw category tag.
    pub fn tag(&self) -> &str {
        self.kind.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tags_round_trip() {
        for category in MessageCategory::ALL {
            assert_eq!(category.as_str().parse::<MessageCategory>(), Ok(category));
        }
        assert!("OTR_MODIFICATION".parse::<MessageCategory>().is_err());
        assert!("regular_chat_message".parse::<MessageCategory>().is_err());
    }

    #[test]
    fn test_category_index_matches_all_order() {
        for (i, category) in MessageCategory::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_category_serde_uses_archive_tags() {
        let json = serde_json::to_string(&MessageCategory::RegularChat).unwrap();
        assert_eq!(json, "\"REGULAR_CHAT_MESSAGE\"");
        let json = serde_json::to_string(&MessageCategory::Rename).unwrap();
        assert_eq!(json, "\"RENAME_CONVERSATION\"");
        let parsed: MessageCategory = serde_json::from_str("\"HANGOUT_EVENT\"").unwrap();
        assert_eq!(parsed, MessageCategory::HangoutEvent);
    }

    #[test]
    fn test_hangout_kind_tags() {
        assert_eq!(HangoutEventKind::from_tag("END_HANGOUT"), HangoutEventKind::End);
        assert_eq!(HangoutEventKind::from_tag("START_HANGOUT"), HangoutEventKind::Start);
        let other = HangoutEventKind::from_tag("JOIN_HANGOUT");
        assert_eq!(other.as_str(), "JOIN_HANGOUT");
        assert!(!other.is_call_end());
        assert!(HangoutEventKind::End.is_call_end());
    }

    #[test]
    fn test_event_kind_tag() {
        assert_eq!(EventKind::RegularChat.tag(), "REGULAR_CHAT_MESSAGE");
        assert_eq!(EventKind::AddUser { added: vec![] }.tag(), "ADD_USER");
        assert_eq!(EventKind::Unknown("WEIRD".into()).tag(), "WEIRD");
    }

    #[test]
    fn test_timestamp_conversion() {
        let event = Event::regular_chat("A", 1_500_000);
        assert_eq!(event.timestamp_secs(), 1.5);

        let event = Event::regular_chat("A", 1_420_070_400_000_000);
        let dt = event.datetime().unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2015-01-01");
    }

    #[test]
    fn test_builders() {
        let event = Event::add_user("A", 0, ["B", "C"]);
        assert_eq!(
            event.kind,
            EventKind::AddUser {
                added: vec!["B".to_string(), "C".to_string()]
            }
        );

        let event = Event::end_hangout("A", 0, 90);
        assert_eq!(
            event.kind,
            EventKind::HangoutEvent {
                kind: HangoutEventKind::End,
                duration_secs: Some(90)
            }
        );
    }
}
