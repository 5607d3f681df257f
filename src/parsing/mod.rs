//! Raw archive shapes and their conversion into typed records.
//!
//! [`hangouts`] mirrors the layout of a Google Takeout `Hangouts.json` file
//! closely enough for serde, then lowers each conversation into a
//! [`ConversationRecord`](crate::core::ConversationRecord).

pub mod hangouts;

// Re-export commonly used items
pub use hangouts::{
    RawConversationEntry, RawEvent, convert_conversation, convert_event, value_to_i64,
};
