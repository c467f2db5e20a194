//! JSON Lines (JSONL) output writer.
//!
//! One message per line, same fields as the JSON writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::json_writer::JsonMessage;
use super::rows;
use crate::Message;
use crate::config::OutputConfig;
use crate::error::Result;

fn write_lines<W: Write>(writer: &mut W, messages: &[Message], config: &OutputConfig) -> Result<()> {
    for msg in rows(messages, config) {
        let line = serde_json::to_string(&JsonMessage::from_message(msg, config))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"author":"Alice","body":"Hello"}
/// {"author":"Bob","body":"Hi"}
/// ```
pub fn write_jsonl(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, messages, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_lines(&mut buf, messages, config)?;
    Ok(String::from_utf8(buf)?)
}
