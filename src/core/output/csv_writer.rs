//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{TIMESTAMP_FORMAT, rows};
use crate::Message;
use crate::config::OutputConfig;
use crate::core::models::{EmojiCount, EmojiMatrix};
use crate::error::{ChatstatsError, Result};

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().delimiter(b';').from_writer(inner)
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ChatstatsError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Author");
    header.push("Body");

    if config.include_emojis {
        header.push("Emojis");
    }
    if config.include_metrics {
        header.push("LetterCount");
        header.push("WordCount");
        header.push("ResponseSeconds");
    }

    header
}

/// Build CSV record for a single message.
fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_timestamps {
        record.push(msg.timestamp.format(TIMESTAMP_FORMAT).to_string());
    }

    record.push(msg.author.clone());
    record.push(msg.body.clone());

    if config.include_emojis {
        record.push(msg.emojis.join(" "));
    }
    if config.include_metrics {
        record.push(msg.letter_count.to_string());
        record.push(msg.word_count.to_string());
        record.push(
            msg.response_latency_seconds
                .map(|s| s.to_string())
                .unwrap_or_default(),
        );
    }

    record
}

fn write_messages<W: Write>(
    writer: &mut csv::Writer<W>,
    messages: &[Message],
    config: &OutputConfig,
) -> Result<()> {
    writer.write_record(build_header(config))?;
    for msg in rows(messages, config) {
        writer.write_record(build_record(msg, config))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Author`, `Body`
///   - With timestamps: `Timestamp` first, as `YYYY-MM-DD HH:MM:SS`
///   - With emojis: `Emojis`, space separated
///   - With metrics: `LetterCount`, `WordCount`, `ResponseSeconds` (empty when undefined)
/// - Encoding: UTF-8
pub fn write_csv(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = csv_writer(File::create(output_path)?);
    write_messages(&mut writer, messages, config)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut writer = csv_writer(Vec::new());
    write_messages(&mut writer, messages, config)?;
    into_string(writer)
}

fn write_emoji_counts<W: Write>(writer: &mut csv::Writer<W>, counts: &[EmojiCount]) -> Result<()> {
    writer.write_record(["Emoji", "Count"])?;
    for row in counts {
        writer.write_record([row.emoji.as_str(), &row.count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the global emoji table as `Emoji;Count` rows, most used first.
pub fn write_emoji_csv(counts: &[EmojiCount], output_path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv_writer(File::create(output_path)?);
    write_emoji_counts(&mut writer, counts)
}

/// Converts the global emoji table to a CSV string.
pub fn to_emoji_csv(counts: &[EmojiCount]) -> Result<String> {
    let mut writer = csv_writer(Vec::new());
    write_emoji_counts(&mut writer, counts)?;
    into_string(writer)
}

fn write_matrix<W: Write>(writer: &mut csv::Writer<W>, matrix: &EmojiMatrix) -> Result<()> {
    let mut header = vec!["Author"];
    header.extend(matrix.emojis.iter().map(String::as_str));
    writer.write_record(&header)?;

    for (author, row) in matrix.authors.iter().zip(&matrix.counts) {
        let mut record = vec![author.clone()];
        record.extend(row.iter().map(usize::to_string));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the author × emoji matrix, one row per author and one column per emoji.
pub fn write_emoji_matrix_csv(matrix: &EmojiMatrix, output_path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv_writer(File::create(output_path)?);
    write_matrix(&mut writer, matrix)
}

/// Converts the author × emoji matrix to a CSV string.
pub fn to_emoji_matrix_csv(matrix: &EmojiMatrix) -> Result<String> {
    let mut writer = csv_writer(Vec::new());
    write_matrix(&mut writer, matrix)?;
    into_string(writer)
}
