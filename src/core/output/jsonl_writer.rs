//! JSON Lines (JSONL) output writer.
//!
//! Only the message log is written, one entry per line, which suits
//! line-oriented tooling and incremental loading.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::snapshot::ConversationSnapshot;
use crate::error::Result;

/// Writes the snapshot's message log to JSONL format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":1420070400.0,"category":"REGULAR_CHAT_MESSAGE","who":"Alice"}
/// {"timestamp":1420070460.0,"category":"ADD_USER","who":"Alice"}
/// ```
pub fn write_jsonl(snapshot: &ConversationSnapshot, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for entry in &snapshot.messages {
        let line = serde_json::to_string(entry)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts the snapshot's message log to a JSONL string.
pub fn to_jsonl(snapshot: &ConversationSnapshot) -> Result<String> {
    let mut output = String::new();
    for entry in &snapshot.messages {
        output.push_str(&serde_json::to_string(entry)?);
        output.push('\n');
    }
    Ok(output)
}
