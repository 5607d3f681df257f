//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::snapshot::{ConversationSnapshot, LogEntry};
use crate::error::Result;

const HEADER: [&str; 4] = ["Timestamp", "DateTime", "Category", "Sender"];

/// Writes the snapshot's message log to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp` (seconds), `DateTime` (UTC), `Category`, `Sender`
/// - Encoding: UTF-8
pub fn write_csv(snapshot: &ConversationSnapshot, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(snapshot, file)
}

/// Converts the snapshot's message log to a CSV string.
pub fn to_csv(snapshot: &ConversationSnapshot) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(snapshot, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_records<W: Write>(snapshot: &ConversationSnapshot, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(HEADER)?;
    for entry in &snapshot.messages {
        writer.write_record(build_record(entry))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV record for a single log entry.
fn build_record(entry: &LogEntry) -> [String; 4] {
    [
        entry.timestamp.to_string(),
        entry
            .datetime()
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        entry.category.clone(),
        entry.who.clone(),
    ]
}
