//! The message record produced by the analysis pipeline.
//!
//! A [`Message`] starts life as a parsed log line (date, time, meridiem,
//! author, body) and is completed by the later stages: the normalizer sets
//! [`timestamp`](Message::timestamp), the emoji extractor fills
//! [`emojis`](Message::emojis), and the metrics stage computes the counts and
//! [`response_latency_seconds`](Message::response_latency_seconds).
//!
//! # Examples
//!
//! ```
//! use chatstats::{Meridiem, Message};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(19, 42, 0)
//!     .unwrap();
//!
//! let msg = Message::new("Alice", "Hello 👋", ts);
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.meridiem, Meridiem::Pm);
//! assert_eq!(msg.time_of_day, "7:42");
//! ```

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// The AM/PM disambiguator of a 12-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    /// Ante meridiem, 12:00 AM is midnight.
    Am,
    /// Post meridiem, 12:00 PM is noon.
    Pm,
}

impl Meridiem {
    /// Converts an hour on the 12-hour clock (1..=12) to the 24-hour clock.
    ///
    /// Returns `None` for hours outside 1..=12.
    ///
    /// ```
    /// use chatstats::Meridiem;
    ///
    /// assert_eq!(Meridiem::Am.to_24h(12), Some(0));
    /// assert_eq!(Meridiem::Pm.to_24h(12), Some(12));
    /// assert_eq!(Meridiem::Pm.to_24h(7), Some(19));
    /// assert_eq!(Meridiem::Am.to_24h(13), None);
    /// ```
    pub fn to_24h(self, hour: u32) -> Option<u32> {
        match (hour, self) {
            (0 | 13.., _) => None,
            (12, Meridiem::Am) => Some(0),
            (12, Meridiem::Pm) => Some(12),
            (h, Meridiem::Am) => Some(h),
            (h, Meridiem::Pm) => Some(h + 12),
        }
    }

    /// Returns the meridiem of a 24-hour clock hour.
    pub fn of_hour(hour: u32) -> Self {
        if hour < 12 { Meridiem::Am } else { Meridiem::Pm }
    }
}

impl std::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

impl std::str::FromStr for Meridiem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "am" => Ok(Meridiem::Am),
            "pm" => Ok(Meridiem::Pm),
            _ => Err(format!("Unknown meridiem: '{}'. Expected 'am' or 'pm'", s)),
        }
    }
}

/// One chat message with all derived fields.
///
/// # Fields
///
/// | Field | Set by | Description |
/// |-------|--------|-------------|
/// | `date`, `time_of_day`, `meridiem` | line parser | Raw timestamp parts as found in the log |
/// | `author`, `body` | line parser | Trimmed speaker name and message text |
/// | `is_media` | line parser | Body equals a media placeholder |
/// | `timestamp` | normalizer | Naive local date and time |
/// | `emojis` | emoji extractor | Emoji graphemes in order of appearance |
/// | `letter_count`, `word_count` | metrics | Character and space-separated token counts |
/// | `response_latency_seconds` | metrics | Seconds since the author's previous message |
///
/// Media placeholder messages keep zero counts, no emojis and no latency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// 1-based line number of the message header in the input document.
    pub line: usize,

    /// Calendar date exactly as written in the log (e.g. `1/15/24`).
    pub date: String,

    /// Wall-clock time without meridiem (e.g. `7:42`).
    pub time_of_day: String,

    /// AM or PM.
    pub meridiem: Meridiem,

    /// Speaker name, trimmed. May be empty.
    pub author: String,

    /// Message text, trimmed.
    ///
    /// Contains newlines only when continuation lines are reattached.
    pub body: String,

    /// `true` if the body is a media placeholder such as `<Media omitted>`.
    #[serde(default)]
    pub is_media: bool,

    /// Absolute point in time, naive local time of the exporting device.
    pub timestamp: NaiveDateTime,

    /// Emoji tokens found in `body`, duplicates kept.
    #[serde(default)]
    pub emojis: Vec<String>,

    /// Number of characters in `body`.
    #[serde(default)]
    pub letter_count: usize,

    /// Number of space-separated tokens in `body`.
    #[serde(default)]
    pub word_count: usize,

    /// Seconds elapsed since the same author's previous message, if any.
    #[serde(default)]
    pub response_latency_seconds: Option<f64>,
}

impl Message {
    /// Creates a message from an author, a body and an absolute timestamp.
    ///
    /// The raw `date`, `time_of_day` and `meridiem` fields are rendered from
    /// `timestamp` in the month/day/year, 12-hour form used by chat exports.
    /// Derived fields start empty.
    pub fn new(author: impl Into<String>, body: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        let hour12 = match timestamp.hour() % 12 {
            0 => 12,
            h => h,
        };

        Self {
            line: 0,
            date: timestamp.format("%-m/%-d/%y").to_string(),
            time_of_day: format!("{}:{:02}", hour12, timestamp.minute()),
            meridiem: Meridiem::of_hour(timestamp.hour()),
            author: author.into(),
            body: body.into(),
            is_media: false,
            timestamp,
            emojis: Vec::new(),
            letter_count: 0,
            word_count: 0,
            response_latency_seconds: None,
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Builder method to mark the message as a media placeholder.
    #[must_use]
    pub fn with_media(mut self, is_media: bool) -> Self {
        self.is_media = is_media;
        self
    }

    /// Builder method to set the source line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the calendar date of the message.
    pub fn calendar_date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns `true` if the message carries text that counts towards
    /// aggregates, i.e. it is not a media placeholder.
    pub fn is_text(&self) -> bool {
        !self.is_media
    }

    /// Rebuilds the log line this message was parsed from.
    ///
    /// The result follows `<date>, <time> <meridiem> - <author>: <body>` and
    /// parses back to the same fields.
    pub fn to_log_line(&self) -> String {
        format!(
            "{}, {} {} - {}: {}",
            self.date,
            self.time_of_day,
            self.meridiem.to_string().to_lowercase(),
            self.author,
            self.body
        )
    }
}
