//! Full analysis report as one JSON document.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::json_writer::JsonMessage;
use crate::config::OutputConfig;
use crate::core::models::{AuthorStats, DayCount, EmojiCount, EmojiMatrix, ParseReport};
use crate::core::processor::ChatAnalysis;
use crate::error::Result;

#[derive(Serialize)]
struct ReportWeekday {
    weekday: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct Report<'a> {
    parse: &'a ParseReport,
    authors: Vec<AuthorStats>,
    emoji_counts: &'a [EmojiCount],
    emoji_by_author: &'a EmojiMatrix,
    busiest_days: Vec<DayCount>,
    weekday_distribution: Vec<ReportWeekday>,
    word_cloud_text: &'a str,
    messages: Vec<JsonMessage<'a>>,
}

impl<'a> Report<'a> {
    fn new(analysis: &'a ChatAnalysis) -> Self {
        let config = OutputConfig::all();
        Self {
            parse: &analysis.report,
            authors: analysis.author_stats(),
            emoji_counts: &analysis.emoji_counts,
            emoji_by_author: &analysis.emoji_by_author,
            busiest_days: analysis.top_days(),
            weekday_distribution: analysis
                .weekday_distribution()
                .into_iter()
                .map(|w| ReportWeekday {
                    weekday: w.name(),
                    count: w.count,
                })
                .collect(),
            word_cloud_text: &analysis.word_cloud_text,
            messages: analysis
                .messages
                .iter()
                .map(|m| JsonMessage::from_message(m, &config))
                .collect(),
        }
    }
}

/// Converts a whole analysis to a pretty-printed JSON document.
///
/// The document holds the parse report, author stats, emoji table and
/// matrix, busiest days, weekday distribution, word-cloud text and every
/// message with all columns. Undefined latencies are written as `null`.
pub fn to_report_json(analysis: &ChatAnalysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report::new(analysis))?)
}

/// Writes a whole analysis to a JSON file.
pub fn write_report_json(analysis: &ChatAnalysis, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_report_json(analysis)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
