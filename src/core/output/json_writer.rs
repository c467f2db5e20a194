//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::{TIMESTAMP_FORMAT, rows};
use crate::Message;
use crate::config::OutputConfig;
use crate::error::Result;

/// Message structure for JSON and JSONL output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(super) struct JsonMessage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    author: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    is_media: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    emojis: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    letter_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    word_count: Option<usize>,
    /// Outer `None` drops the field, inner `None` writes `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    response_latency_seconds: Option<Option<f64>>,
}

impl<'a> JsonMessage<'a> {
    pub(super) fn from_message(msg: &'a Message, config: &OutputConfig) -> Self {
        let metrics = config.include_metrics;
        Self {
            timestamp: config
                .include_timestamps
                .then(|| msg.timestamp.format(TIMESTAMP_FORMAT).to_string()),
            author: &msg.author,
            body: &msg.body,
            is_media: msg.is_media,
            emojis: config.include_emojis.then_some(msg.emojis.as_slice()),
            letter_count: metrics.then_some(msg.letter_count),
            word_count: metrics.then_some(msg.word_count),
            response_latency_seconds: metrics.then_some(msg.response_latency_seconds),
        }
    }
}

/// Writes messages to JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"author": "Alice", "body": "Hello"},
///   {"author": "Bob", "body": "Hi"}
/// ]
/// ```
pub fn write_json(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to JSON string as an array.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let json_messages: Vec<JsonMessage<'_>> = rows(messages, config)
        .map(|m| JsonMessage::from_message(m, config))
        .collect();

    Ok(serde_json::to_string_pretty(&json_messages)?)
}
