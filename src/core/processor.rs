//! The analysis pipeline: parse, normalize, extract emojis, aggregate.
//!
//! Stages run once, in order, over the whole document. Nothing is shared
//! between runs.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::AnalyzerConfig;
//! use chatstats::core::processor::analyze;
//!
//! let export = "\
//! 1/15/24, 9:00 am - Alice: Morning ☀️
//! 1/15/24, 9:00 am - Bob: <Media omitted>
//! 1/15/24, 9:10 am - Bob: hi 😂
//! 1/15/24, 9:30 am - Alice: coffee? 😂😂";
//!
//! let analysis = analyze(export, &AnalyzerConfig::default());
//! assert_eq!(analysis.messages.len(), 4);
//! assert_eq!(analysis.emoji_counts[0].emoji, "😂");
//! assert_eq!(analysis.emoji_counts[0].count, 3);
//! assert_eq!(analysis.messages[3].response_latency_seconds, Some(1800.0));
//! assert_eq!(analysis.word_cloud_text, "Morning ☀️ hi 😂 coffee? 😂😂");
//! ```

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::Message;
use crate::config::AnalyzerConfig;
use crate::core::emoji::{EmojiClassifier, UnicodeEmoji, emoji_frequencies, emoji_matrix, extract_emojis};
use crate::core::metrics::{self, compute_metrics, word_cloud_text};
use crate::core::models::{AuthorStats, DayCount, EmojiCount, EmojiMatrix, ParseReport, WeekdayCount};
use crate::core::timestamp::normalize;
use crate::error::{ChatstatsError, Result};
use crate::parser::parse_lines;

/// Everything derived from one chat export.
///
/// Built once by [`analyze`] and not modified afterwards. Per-author and
/// per-day summaries are computed on demand from [`messages`](Self::messages).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatAnalysis {
    /// All kept messages in chronological order, media placeholders included
    pub messages: Vec<Message>,
    /// Global emoji table, most used first
    pub emoji_counts: Vec<EmojiCount>,
    /// Author × emoji usage
    pub emoji_by_author: EmojiMatrix,
    /// Text message bodies joined by spaces
    pub word_cloud_text: String,
    /// Counts of kept and dropped lines
    pub report: ParseReport,
    /// Length of [`top_days`](Self::top_days)
    #[serde(skip)]
    pub top_days_limit: usize,
}

impl ChatAnalysis {
    /// Returns `true` if no line of the input produced a message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over messages that are not media placeholders.
    pub fn text_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.is_text())
    }

    /// Returns the summary of every author, in order of first appearance.
    pub fn author_stats(&self) -> Vec<AuthorStats> {
        metrics::author_stats(&self.messages)
    }

    /// Returns the summary of one author.
    pub fn author_stats_for(&self, author: &str) -> Option<AuthorStats> {
        self.author_stats().into_iter().find(|s| s.author == author)
    }

    /// Returns message counts per calendar date, earliest first.
    pub fn daily_counts(&self) -> Vec<DayCount> {
        metrics::daily_counts(&self.messages)
    }

    /// Returns the `n` busiest dates.
    pub fn busiest_days(&self, n: usize) -> Vec<DayCount> {
        metrics::busiest_days(&self.messages, n)
    }

    /// Returns the busiest dates, as many as configured.
    pub fn top_days(&self) -> Vec<DayCount> {
        self.busiest_days(self.top_days_limit)
    }

    /// Returns message counts Monday through Sunday.
    pub fn weekday_distribution(&self) -> Vec<WeekdayCount> {
        metrics::weekday_distribution(&self.messages)
    }
}

/// Analyzes a chat export with the built-in emoji recognizer.
///
/// Never fails: lines that don't parse or carry an impossible timestamp are
/// dropped and listed in [`ChatAnalysis::report`]. An input without any
/// message yields an empty analysis.
pub fn analyze(content: &str, config: &AnalyzerConfig) -> ChatAnalysis {
    analyze_with(content, config, &UnicodeEmoji)
}

/// Analyzes a chat export with a custom emoji recognizer.
pub fn analyze_with(
    content: &str,
    config: &AnalyzerConfig,
    classifier: &dyn EmojiClassifier,
) -> ChatAnalysis {
    let doc = parse_lines(content, config);
    let total_lines = doc.total_lines;
    let parsed_lines = doc.lines.len();
    let reattached_lines = doc.reattached_lines;
    let mut issues = doc.issues;

    let (mut messages, timestamp_issues) = normalize(doc.lines, config.date_order);
    issues.extend(timestamp_issues);
    issues.sort_by_key(|i| i.line());

    extract_emojis(&mut messages, classifier);
    compute_metrics(&mut messages);

    let emoji_counts = emoji_frequencies(&messages);
    let emoji_by_author = emoji_matrix(&messages);
    let word_cloud_text = word_cloud_text(&messages);

    let report = ParseReport {
        total_lines,
        parsed_lines,
        reattached_lines,
        messages: messages.len(),
        media_messages: messages.iter().filter(|m| m.is_media).count(),
        issues,
    };

    info!(
        messages = report.messages,
        media = report.media_messages,
        dropped = report.issues.len(),
        distinct_emojis = emoji_counts.len(),
        "analysis complete"
    );

    ChatAnalysis {
        messages,
        emoji_counts,
        emoji_by_author,
        word_cloud_text,
        report,
        top_days_limit: config.top_days,
    }
}

/// Analyzes raw bytes, which must be UTF-8.
///
/// # Errors
///
/// Returns [`ChatstatsError::Utf8`] if the bytes are not valid UTF-8 and
/// [`ChatstatsError::InvalidConfig`] if the configuration is rejected by
/// [`AnalyzerConfig::validate`].
pub fn analyze_bytes(bytes: &[u8], config: &AnalyzerConfig) -> Result<ChatAnalysis> {
    config.validate()?;
    let content = std::str::from_utf8(bytes).map_err(|e| ChatstatsError::undecodable(e, None))?;
    Ok(analyze(content, config))
}

/// Reads and analyzes a chat export file.
///
/// # Errors
///
/// Returns [`ChatstatsError::Io`] if the file cannot be read, plus the
/// errors of [`analyze_bytes`].
pub fn analyze_file(path: impl AsRef<Path>, config: &AnalyzerConfig) -> Result<ChatAnalysis> {
    let path = path.as_ref();
    config.validate()?;
    let bytes = std::fs::read(path)?;
    let content = std::str::from_utf8(&bytes)
        .map_err(|e| ChatstatsError::undecodable(e, Some(path.to_path_buf())))?;
    Ok(analyze(content, config))
}
