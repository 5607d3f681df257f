//! Google Hangouts takeout structures.
//!
//! A takeout looks like this (irrelevant keys omitted):
//!
//! ```json
//! {
//!   "conversation_state": [
//!     {
//!       "conversation_state": {
//!         "conversation_id": {"id": "Ugx..."},
//!         "conversation": {
//!           "type": "GROUP",
//!           "name": "Friends",
//!           "participant_data": [{"id": {"chat_id": "1"}, "fallback_name": "Alice"}]
//!         },
//!         "event": [
//!           {
//!             "sender_id": {"chat_id": "1"},
//!             "timestamp": "1420070400000000",
//!             "event_type": "RENAME_CONVERSATION",
//!             "conversation_rename": {"new_name": "Best Friends"}
//!           }
//!         ]
//!       }
//!     }
//!   ]
//! }
//! ```

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::core::models::{ConversationKind, ConversationRecord, InitialMember};
use crate::event::{Event, EventKind, HangoutEventKind};

/// One element of the top-level `conversation_state` array.
#[derive(Debug, Deserialize)]
pub struct RawConversationEntry {
    pub conversation_state: RawConversationState,
}

#[derive(Debug, Deserialize)]
pub struct RawConversationState {
    pub conversation_id: RawConversationId,
    pub conversation: RawConversation,
    #[serde(default)]
    pub event: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
pub struct RawConversationId {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct RawConversation {
    /// `GROUP`, `STICKY_ONE_TO_ONE`, ...
    #[serde(rename = "type")]
    pub conversation_type: String,
    pub name: Option<String>,
    #[serde(default)]
    pub participant_data: Vec<RawParticipantData>,
}

#[derive(Debug, Deserialize)]
pub struct RawParticipantData {
    pub id: RawParticipantId,
    pub fallback_name: Option<String>,
}

/// Participant reference. Takeouts also carry a `gaia_id`, which is ignored.
#[derive(Debug, Deserialize)]
pub struct RawParticipantId {
    pub chat_id: String,
}

/// Raw event structure for deserialization.
#[derive(Debug, Deserialize)]
pub struct RawEvent {
    pub sender_id: RawParticipantId,
    /// Microseconds, as a string or an integer
    #[serde(default)]
    pub timestamp: Value,
    pub event_type: String,
    pub conversation_rename: Option<RawRename>,
    pub membership_change: Option<RawMembershipChange>,
    pub hangout_event: Option<RawHangoutEvent>,
}

#[derive(Debug, Deserialize)]
pub struct RawRename {
    pub new_name: Option<String>,
    pub old_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawMembershipChange {
    /// `JOIN` or `LEAVE`
    #[serde(rename = "type")]
    pub change_type: Option<String>,
    #[serde(default)]
    pub participant_id: Vec<RawParticipantId>,
}

#[derive(Debug, Deserialize)]
pub struct RawHangoutEvent {
    pub event_type: String,
    /// Seconds, as a string or an integer
    #[serde(default)]
    pub hangout_duration_secs: Value,
}

/// Reads an integer that may be encoded as a JSON number or a string.
///
/// Returns `None` for anything else, including fractional numbers.
pub fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn member_ids(change: Option<&RawMembershipChange>) -> Vec<String> {
    change
        .map(|c| c.participant_id.iter().map(|p| p.chat_id.clone()).collect())
        .unwrap_or_default()
}

/// Lowers a raw event into an [`Event`].
///
/// Missing payloads degrade to empty ones instead of failing: a rename
/// without a name, a membership change without members, a call event without
/// a duration. An unparsable timestamp becomes `0`.
pub fn convert_event(raw: &RawEvent) -> Event {
    let timestamp_us = value_to_i64(&raw.timestamp).unwrap_or_else(|| {
        warn!(timestamp = %raw.timestamp, "unparsable event timestamp, using 0");
        0
    });

    let kind = match raw.event_type.as_str() {
        "REGULAR_CHAT_MESSAGE" => EventKind::RegularChat,
        "RENAME_CONVERSATION" => EventKind::Rename {
            new_name: raw
                .conversation_rename
                .as_ref()
                .and_then(|r| r.new_name.clone()),
        },
        "ADD_USER" => EventKind::AddUser {
            added: member_ids(raw.membership_change.as_ref()),
        },
        "REMOVE_USER" => EventKind::RemoveUser {
            removed: member_ids(raw.membership_change.as_ref()),
        },
        "HANGOUT_EVENT" => match &raw.hangout_event {
            Some(hangout) => EventKind::HangoutEvent {
                kind: HangoutEventKind::from_tag(&hangout.event_type),
                duration_secs: value_to_i64(&hangout.hangout_duration_secs)
                    .and_then(|secs| u64::try_from(secs).ok()),
            },
            None => EventKind::HangoutEvent {
                kind: HangoutEventKind::Other(String::new()),
                duration_secs: None,
            },
        },
        other => EventKind::Unknown(other.to_string()),
    };

    Event::new(raw.sender_id.chat_id.clone(), timestamp_us, kind)
}

/// Lowers a raw conversation into a [`ConversationRecord`].
pub fn convert_conversation(raw: &RawConversationState) -> ConversationRecord {
    let participants = raw
        .conversation
        .participant_data
        .iter()
        .map(|p| InitialMember {
            id: p.id.chat_id.clone(),
            fallback_name: p.fallback_name.clone(),
        })
        .collect();

    ConversationRecord {
        id: raw.conversation_id.id.clone(),
        kind: ConversationKind::from_tag(&raw.conversation.conversation_type),
        name: raw.conversation.name.clone(),
        participants,
        events: raw.event.iter().map(convert_event).collect(),
    }
}
