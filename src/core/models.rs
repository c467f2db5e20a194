//! Aggregate tables derived from the message collection.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::LineIssue;

/// One row of the global emoji table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmojiCount {
    /// The emoji grapheme
    pub emoji: String,
    /// Number of occurrences
    pub count: usize,
}

impl EmojiCount {
    pub fn new(emoji: impl Into<String>, count: usize) -> Self {
        Self {
            emoji: emoji.into(),
            count,
        }
    }
}

/// Emoji usage per author.
///
/// `counts[row][column]` is how often `authors[row]` used `emojis[column]`.
/// Every cell is present; combinations that never occur hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiMatrix {
    /// Row labels, in order of first appearance
    pub authors: Vec<String>,
    /// Column labels, most used first
    pub emojis: Vec<String>,
    /// Row-major counts
    pub counts: Vec<Vec<usize>>,
}

impl EmojiMatrix {
    /// Returns the count for one author and emoji, zero if either is unknown.
    pub fn get(&self, author: &str, emoji: &str) -> usize {
        let Some(row) = self.authors.iter().position(|a| a == author) else {
            return 0;
        };
        self.emojis
            .iter()
            .position(|e| e == emoji)
            .and_then(|col| self.counts.get(row)?.get(col).copied())
            .unwrap_or(0)
    }

    /// Returns the row of one author.
    pub fn row(&self, author: &str) -> Option<&[usize]> {
        let row = self.authors.iter().position(|a| a == author)?;
        self.counts.get(row).map(Vec::as_slice)
    }

    /// Returns the total number of emojis used by one author.
    pub fn author_total(&self, author: &str) -> usize {
        self.row(author).map_or(0, |r| r.iter().sum())
    }

    /// Returns the sum of every cell.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Returns `true` if the matrix has no emoji columns.
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}

/// Summary of one author's messages.
///
/// Derived on demand from the message collection; media placeholders are
/// not counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorStats {
    /// Author name
    pub author: String,
    /// Number of text messages
    pub message_count: usize,
    /// Mean word count per message
    pub words_per_message: f64,
    /// Mean letter count per message
    pub letters_per_message: f64,
    /// Total number of emoji tokens
    pub emoji_count: usize,
    /// Mean response latency in seconds.
    ///
    /// `None` when the author has no defined latency, i.e. a single message.
    pub average_response_seconds: Option<f64>,
}

/// Number of messages on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Number of messages on one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekdayCount {
    pub weekday: Weekday,
    pub count: usize,
}

impl WeekdayCount {
    /// Returns the English name of the weekday, e.g. `Monday`.
    pub fn name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

/// Returns the English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// What happened to the input lines during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Lines in the input document, blank lines included
    pub total_lines: usize,
    /// Lines that matched the message grammar
    pub parsed_lines: usize,
    /// Lines appended to a previous message's body
    pub reattached_lines: usize,
    /// Messages kept after timestamp normalization
    pub messages: usize,
    /// Kept messages that are media placeholders
    pub media_messages: usize,
    /// Every dropped line, in input order
    pub issues: Vec<LineIssue>,
}

impl ParseReport {
    /// Number of lines dropped for not matching the grammar.
    pub fn unparseable_lines(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, LineIssue::UnparseableLine { .. }))
            .count()
    }

    /// Number of messages dropped for an unresolvable timestamp.
    pub fn malformed_timestamps(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, LineIssue::MalformedTimestamp { .. }))
            .count()
    }

    /// Number of kept messages that carry text.
    pub fn text_messages(&self) -> usize {
        self.messages - self.media_messages
    }
}
