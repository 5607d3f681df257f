//! Event-stream aggregation for a single conversation.
//!
//! [`ConversationAggregator`] folds an ordered sequence of [`Event`]s into a
//! participant roster with per-category counters, a rename history, a total
//! call duration and a flattened message log.
//!
//! # Example
//!
//! ```
//! use hangstats::core::{ConversationAggregator, ConversationKind, InitialMember};
//! use hangstats::event::Event;
//!
//! let mut conv = ConversationAggregator::new(ConversationKind::Group, "c1", None);
//! conv.seed_participants(&[InitialMember::new("A").with_name("Alice")]);
//!
//! conv.process_event(&Event::regular_chat("A", 1_000_000));
//! conv.process_event(&Event::add_user("A", 2_000_000, ["B"]));
//! conv.process_event(&Event::regular_chat("B", 3_000_000));
//!
//! assert_eq!(conv.participants().len(), 2);
//! assert_eq!(conv.total_message_count(), 3);
//! assert_eq!(conv.messages()[0].who, "Alice");
//! ```
//!
//! Events are processed strictly in order: a member added by an `ADD_USER`
//! event is only recognized for events that come after it.

use std::fmt;

use tracing::{Span, debug, info_span, trace};

use super::models::{ConversationKind, ConversationRecord, InitialMember};
use super::participant::{Participant, UNKNOWN_NAME};
use super::snapshot::{ConversationSnapshot, LogEntry, SECONDS_PER_HOUR};
use crate::event::{Event, EventKind};

/// Name given to group conversations the archive does not name.
pub const UNKNOWN_GROUP_NAME: &str = "Unknown Group Message";

/// Name given to every direct conversation.
pub const DIRECT_MESSAGE_NAME: &str = "Direct Message";

/// Aggregated state of one conversation.
#[derive(Debug)]
pub struct ConversationAggregator {
    id: String,
    kind: ConversationKind,
    name: String,
    name_history: Vec<String>,
    // Linear lookup by id; conversations have few members.
    participants: Vec<Participant>,
    call_duration_secs: u64,
    messages: Vec<LogEntry>,
    span: Span,
}

impl ConversationAggregator {
    /// Creates an empty aggregator.
    ///
    /// `name` is only honored for group conversations; a group without one
    /// is called [`UNKNOWN_GROUP_NAME`], and direct conversations are always
    /// called [`DIRECT_MESSAGE_NAME`].
    pub fn new(kind: ConversationKind, id: impl Into<String>, name: Option<String>) -> Self {
        let id = id.into();
        let name = if kind.is_group() {
            name.unwrap_or_else(|| UNKNOWN_GROUP_NAME.to_string())
        } else {
            DIRECT_MESSAGE_NAME.to_string()
        };
        let span = info_span!("conversation", id = %id);

        Self {
            id,
            kind,
            name,
            name_history: Vec::new(),
            participants: Vec::new(),
            call_duration_secs: 0,
            messages: Vec::new(),
            span,
        }
    }

    /// Creates an empty aggregator for a decoded record.
    ///
    /// Neither the record's members nor its events are consumed; see
    /// [`aggregate`](Self::aggregate) for that.
    pub fn from_record(record: &ConversationRecord) -> Self {
        Self::new(record.kind, record.id.clone(), record.name.clone())
    }

    /// Seeds the roster and processes every event of `record`.
    pub fn aggregate(record: &ConversationRecord) -> Self {
        let mut conv = Self::from_record(record);
        conv.span.in_scope(|| {
            tracing::info!(
                kind = %record.kind,
                events = record.events.len(),
                "parsing conversation with ID: {}",
                record.id
            );
        });

        conv.seed_participants(&record.participants);
        for event in &record.events {
            conv.process_event(event);
        }
        conv
    }

    /// Replaces the span diagnostics are emitted under.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Adds the conversation's starting members, in order.
    ///
    /// Meant to run once, before any event. Calling it again appends
    /// duplicates.
    pub fn seed_participants(&mut self, members: &[InitialMember]) {
        let _entered = self.span.enter();
        for member in members {
            let name = member.fallback_name.as_deref().unwrap_or(UNKNOWN_NAME);
            trace!(member = %member.id, name, "seeding participant");
            self.participants.push(Participant::new(member.id.clone(), name));
        }
    }

    /// Applies one event.
    ///
    /// Always appends exactly one log entry. Counters and derived state only
    /// change when the sender is in the roster and the category is known.
    pub fn process_event(&mut self, event: &Event) {
        let span = self.span.clone();
        let _entered = span.enter();

        let timestamp = event.timestamp_secs();
        let tag = event.tag();

        let Some(index) = self.position(&event.sender_id) else {
            debug!(sender = %event.sender_id, tag, "parsing message for unknown participant");
            self.messages
                .push(LogEntry::new(timestamp, tag, event.sender_id.clone()));
            return;
        };

        let sender = &mut self.participants[index];
        self.messages
            .push(LogEntry::new(timestamp, tag, sender.display_identifier()));
        if let Some(category) = event.kind.category() {
            sender.record(category);
        }

        match &event.kind {
            EventKind::RegularChat | EventKind::RemoveUser { .. } => {}
            EventKind::Rename { new_name } => match new_name {
                Some(new_name) => self.name_history.push(new_name.clone()),
                None => debug!("rename event without a new name"),
            },
            EventKind::AddUser { added } => {
                for id in added {
                    if self.position(id).is_none() {
                        trace!(member = %id, "adding participant");
                        self.participants.push(Participant::unnamed(id.clone()));
                    }
                }
            }
            EventKind::HangoutEvent {
                kind,
                duration_secs,
            } => {
                if kind.is_call_end() {
                    match duration_secs {
                        Some(secs) => {
                            self.call_duration_secs =
                                self.call_duration_secs.checked_add(*secs).unwrap_or_else(|| {
                                    debug!(secs, "call duration overflow, saturating");
                                    u64::MAX
                                });
                        }
                        None => debug!("call end without a duration"),
                    }
                }
            }
            EventKind::Unknown(tag) => {
                debug!(tag = %tag, "unrecognized event category");
            }
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.participants.iter().position(|p| p.id() == id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ConversationKind {
        self.kind
    }

    /// Current name. Renames are recorded in [`name_history`](Self::name_history)
    /// and do not change it.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_history(&self) -> &[String] {
        &self.name_history
    }

    /// Roster in first-seen order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Looks up a roster member by id.
    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id() == id)
    }

    pub fn is_participant(&self, id: &str) -> bool {
        self.participant(id).is_some()
    }

    /// The flattened message log, in event order.
    pub fn messages(&self) -> &[LogEntry] {
        &self.messages
    }

    /// Sum of every participant's total.
    pub fn total_message_count(&self) -> u64 {
        self.participants.iter().map(Participant::total).sum()
    }

    pub fn call_duration_secs(&self) -> u64 {
        self.call_duration_secs
    }

    pub fn call_duration_hours(&self) -> f64 {
        self.call_duration_secs as f64 / SECONDS_PER_HOUR
    }

    /// Builds a snapshot of the current state.
    pub fn export(&self) -> ConversationSnapshot {
        ConversationSnapshot {
            conversation_id: self.id.clone(),
            conversation_name: self.name.clone(),
            other_conversation_names: self.name_history.clone(),
            message_count: self.total_message_count(),
            video_duration: self.call_duration_hours(),
            video_duration_secs: self.call_duration_secs,
            participant_ids: self
                .participants
                .iter()
                .map(|p| p.id().to_string())
                .collect(),
            participant_names: self
                .participants
                .iter()
                .map(|p| p.display_identifier().to_string())
                .collect(),
            participants: self.participants.iter().map(Participant::summary).collect(),
            messages: self.messages.clone(),
        }
    }

    /// Human-readable report of the conversation.
    pub fn summary(&self) -> ConversationSummary<'_> {
        ConversationSummary { conversation: self }
    }
}

/// `Display` adapter printing a conversation report.
pub struct ConversationSummary<'a> {
    conversation: &'a ConversationAggregator,
}

impl fmt::Display for ConversationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conv = self.conversation;
        writeln!(f, "Conversation ID: {}", conv.id)?;
        if conv.kind.is_group() {
            writeln!(f, "Current conversation name: {}", conv.name)?;
            writeln!(
                f,
                "Other conversation names: {}",
                conv.name_history.join(", ")
            )?;
        }
        writeln!(f, "Total message count: {}", conv.total_message_count())?;
        writeln!(f, "Time in video call (hours): {:?}", conv.call_duration_hours())?;
        writeln!(f, "Conversation participants:")?;
        for participant in &conv.participants {
            writeln!(f, "{}", participant.summary())?;
        }
        Ok(())
    }
}
