//! Hangouts takeout loader.
//!
//! [`HangoutsArchive`] validates an export file, checks its top-level
//! structure and decodes every conversation into a
//! [`ConversationRecord`]. Structural problems are reported here, before
//! any aggregation starts.
//!
//! # Example
//!
//! ```rust,no_run
//! use hangstats::archive::HangoutsArchive;
//! use hangstats::config::ArchiveConfig;
//!
//! let archive = HangoutsArchive::from_path("raw/Hangouts.json", &ArchiveConfig::new())?;
//! for conv in archive.aggregate() {
//!     println!("{}", conv.summary());
//! }
//! # Ok::<(), hangstats::HangstatsError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::config::ArchiveConfig;
use crate::core::{ConversationAggregator, ConversationRecord};
use crate::error::{HangstatsError, Result};
use crate::parsing::hangouts::{RawConversationEntry, convert_conversation};

/// Top-level key holding every conversation.
pub const CONVERSATION_STATE_KEY: &str = "conversation_state";

/// A decoded Hangouts takeout.
#[derive(Debug, Clone, Default)]
pub struct HangoutsArchive {
    conversations: Vec<ConversationRecord>,
    skipped: usize,
}

impl HangoutsArchive {
    /// Loads and decodes an archive file.
    ///
    /// # Errors
    ///
    /// - [`NotFound`](HangstatsError::NotFound) if `path` does not exist
    /// - [`InvalidFormat`](HangstatsError::InvalidFormat) if `path` is not a
    ///   `.json` file and the config requires one
    /// - [`MissingField`](HangstatsError::MissingField) if the top-level
    ///   `conversation_state` key is absent
    /// - [`Parse`](HangstatsError::Parse) if the file is not JSON, or a
    ///   conversation is malformed and `skip_invalid` is off
    pub fn from_path(path: impl AsRef<Path>, config: &ArchiveConfig) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(HangstatsError::not_found(path));
        }

        // Case-sensitive: `Hangouts.JSON` is rejected.
        if config.require_json_extension && !path.extension().is_some_and(|ext| ext == "json") {
            return Err(HangstatsError::invalid_format(
                "archive",
                "File path must be a json file",
            ));
        }

        info!("parsing JSON file: {}", path.display());
        let content = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| HangstatsError::parse("archive", e, Some(path.to_path_buf())))?;

        Self::decode(value, config, Some(path.to_path_buf()))
    }

    /// Decodes an archive from a JSON string.
    pub fn parse_str(content: &str, config: &ArchiveConfig) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| HangstatsError::parse("archive", e, None))?;
        Self::decode(value, config, None)
    }

    /// Decodes an archive from an already-parsed JSON value.
    pub fn from_value(value: Value, config: &ArchiveConfig) -> Result<Self> {
        Self::decode(value, config, None)
    }

    fn decode(mut value: Value, config: &ArchiveConfig, path: Option<PathBuf>) -> Result<Self> {
        let Some(state) = value.get_mut(CONVERSATION_STATE_KEY).map(Value::take) else {
            return Err(HangstatsError::missing_field(CONVERSATION_STATE_KEY, path));
        };
        let Value::Array(entries) = state else {
            return Err(HangstatsError::invalid_format(
                "archive",
                format!("`{}` must be an array", CONVERSATION_STATE_KEY),
            ));
        };

        let mut archive = Self::default();
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<RawConversationEntry>(entry) {
                Ok(raw) => archive
                    .conversations
                    .push(convert_conversation(&raw.conversation_state)),
                Err(e) if config.skip_invalid => {
                    warn!(index, error = %e, "skipping malformed conversation");
                    archive.skipped += 1;
                }
                Err(e) => {
                    return Err(HangstatsError::parse(
                        format!("conversation #{}", index),
                        e,
                        path,
                    ));
                }
            }
        }

        Ok(archive)
    }

    /// Decoded conversations, in archive order.
    pub fn conversations(&self) -> &[ConversationRecord] {
        &self.conversations
    }

    pub fn into_conversations(self) -> Vec<ConversationRecord> {
        self.conversations
    }

    /// Number of conversations dropped as malformed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Aggregates every conversation independently.
    pub fn aggregate(&self) -> Vec<ConversationAggregator> {
        self.conversations
            .iter()
            .map(ConversationAggregator::aggregate)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ARCHIVE: &str = r#"{
        "conversation_state": [
            {"conversation_state": {
                "conversation_id": {"id": "c1"},
                "conversation": {"type": "STICKY_ONE_TO_ONE", "participant_data": [
                    {"id": {"chat_id": "1"}, "fallback_name": "Alice"}
                ]},
                "event": [
                    {"sender_id": {"chat_id": "1"}, "timestamp": "1000000", "event_type": "REGULAR_CHAT_MESSAGE"}
                ]
            }},
            {"not_a_conversation": true},
            {"conversation_state": {
                "conversation_id": {"id": "c2"},
                "conversation": {"type": "GROUP", "name": "Friends"}
            }}
        ]
    }"#;

    #[test]
    fn test_parse_str_skips_invalid() {
        let archive = HangoutsArchive::parse_str(ARCHIVE, &ArchiveConfig::new()).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.skipped(), 1);
        assert_eq!(archive.conversations()[1].name.as_deref(), Some("Friends"));
    }

    #[test]
    fn test_parse_str_strict_fails() {
        let err = HangoutsArchive::parse_str(ARCHIVE, &ArchiveConfig::strict()).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("conversation #1"));
    }

    #[test]
    fn test_missing_conversation_state() {
        let err = HangoutsArchive::parse_str(r#"{"other": []}"#, &ArchiveConfig::new()).unwrap_err();
        assert!(err.is_missing_field());

        let err = HangoutsArchive::parse_str("[]", &ArchiveConfig::new()).unwrap_err();
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_conversation_state_not_array() {
        let err = HangoutsArchive::parse_str(r#"{"conversation_state": {}}"#, &ArchiveConfig::new())
            .unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_invalid_json() {
        let err = HangoutsArchive::parse_str("not json", &ArchiveConfig::new()).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_empty_archive() {
        let archive =
            HangoutsArchive::parse_str(r#"{"conversation_state": []}"#, &ArchiveConfig::new())
                .unwrap();
        assert!(archive.is_empty());
        assert!(archive.aggregate().is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = HangoutsArchive::from_path("does/not/exist.json", &ArchiveConfig::new())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_path_requires_json_extension() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(ARCHIVE.as_bytes()).unwrap();

        let err = HangoutsArchive::from_path(file.path(), &ArchiveConfig::new()).unwrap_err();
        assert!(err.is_invalid_format());

        let config = ArchiveConfig::new().with_require_json_extension(false);
        let archive = HangoutsArchive::from_path(file.path(), &config).unwrap();
        assert_eq!(archive.len(), 2);
    }

    #[test]
    fn test_from_path_missing_key_names_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"{}").unwrap();

        let err = HangoutsArchive::from_path(file.path(), &ArchiveConfig::new()).unwrap_err();
        assert!(err.is_missing_field());
        assert!(err.to_string().contains("conversation_state"));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_aggregate_all() {
        let archive = HangoutsArchive::parse_str(ARCHIVE, &ArchiveConfig::new()).unwrap();
        let convs = archive.aggregate();
        assert_eq!(convs[0].total_message_count(), 1);
        assert_eq!(convs[0].name(), "Direct Message");
        assert_eq!(convs[1].name(), "Friends");
        assert_eq!(convs[1].total_message_count(), 0);
    }
}
