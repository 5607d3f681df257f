//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::models::OutputConfig;
use crate::core::snapshot::ConversationSnapshot;
use crate::error::Result;

/// Writes the full snapshot to a JSON file.
///
/// # Format
/// ```json
/// {
///   "conversation_id": "Ugx...",
///   "conversation_name": "Direct Message",
///   "other_conversation_names": [],
///   "message_count": 2,
///   "video_duration": 0.5,
///   ...
///   "messages": [{"timestamp": 1420070400.0, "category": "REGULAR_CHAT_MESSAGE", "who": "Alice"}]
/// }
/// ```
pub fn write_json(
    snapshot: &ConversationSnapshot,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    if config.pretty {
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
    } else {
        serde_json::to_writer(&mut writer, snapshot)?;
    }
    writer.flush()?;
    Ok(())
}

/// Converts the snapshot to a JSON string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(snapshot: &ConversationSnapshot, config: &OutputConfig) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(snapshot)?
    } else {
        serde_json::to_string(snapshot)?
    };
    Ok(json)
}
