//! Line parser for plaintext chat exports.
//!
//! Each message in an export starts on a line shaped like
//!
//! ```text
//! 1/15/24, 7:42 pm - Alice: Hello there
//! ```
//!
//! that is `<date>, <time> <meridiem> - <author>:<body>`. Newer exports put a
//! narrow no-break space (U+202F) between the time and `am`/`pm`; any Unicode
//! whitespace is accepted there and never stored.
//!
//! Lines that don't match are dropped. In the export they are usually the
//! wrapped tail of a multi-line message; reattaching them is available as an
//! opt-in through [`AnalyzerConfig::reattach_continuations`].
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::LineParser;
//! use chatstats::Meridiem;
//!
//! let parser = LineParser::new();
//! let line = parser.parse_line("1/15/24, 7:42\u{202f}pm - Alice: Hello").unwrap();
//!
//! assert_eq!(line.date, "1/15/24");
//! assert_eq!(line.time_of_day, "7:42");
//! assert_eq!(line.meridiem, Meridiem::Pm);
//! assert_eq!(line.author, "Alice");
//! assert_eq!(line.body, "Hello");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::Meridiem;
use crate::config::AnalyzerConfig;
use crate::error::LineIssue;

/// `<date>, <time> <am|pm> - <author>:<body>`
const LINE_PATTERN: &str = r"^(\d+/\d+/\d+), (\d+:\d+)\s((?i:am|pm)) - ([^:]*):(.*)$";

static LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("line pattern is a valid regex"));

/// A line that matched the message grammar.
///
/// Fields are stored as found, except that `author` and `body` are trimmed
/// and the meridiem is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// 1-based line number in the input document
    pub line: usize,
    /// Raw date, digits separated by `/`
    pub date: String,
    /// Raw time, digits separated by `:`
    pub time_of_day: String,
    /// AM or PM
    pub meridiem: Meridiem,
    /// Speaker name, trimmed
    pub author: String,
    /// Message text, trimmed
    pub body: String,
    /// `true` if the body is a configured media placeholder
    pub is_media: bool,
}

impl ParsedLine {
    /// Rebuilds the line in the grammar's shape.
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

/// Result of scanning a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Matched lines in input order
    pub lines: Vec<ParsedLine>,
    /// Lines that were dropped
    pub issues: Vec<LineIssue>,
    /// Number of lines in the document, blank lines included
    pub total_lines: usize,
    /// Number of lines appended to a previous message's body
    pub reattached_lines: usize,
}

/// Scans a document line by line and extracts message headers.
#[derive(Debug, Clone)]
pub struct LineParser {
    config: AnalyzerConfig,
}

impl LineParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(&AnalyzerConfig::default())
    }

    /// Creates a parser from an analyzer configuration.
    pub fn with_config(config: &AnalyzerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Parses a single line.
    ///
    /// Returns `None` if the line doesn't match the grammar. The returned
    /// line number is 0; [`parse`](Self::parse) fills it in.
    pub fn parse_line(&self, line: &str) -> Option<ParsedLine> {
        let caps = LINE_REGEX.captures(line)?;

        let meridiem = caps.get(3)?.as_str().parse().ok()?;
        let body = caps.get(5).map_or("", |m| m.as_str().trim());

        Some(ParsedLine {
            line: 0,
            date: caps.get(1)?.as_str().to_string(),
            time_of_day: caps.get(2)?.as_str().to_string(),
            meridiem,
            author: caps.get(4).map_or("", |m| m.as_str().trim()).to_string(),
            body: body.to_string(),
            is_media: self.config.is_media_placeholder(body),
        })
    }

    /// Parses a whole document.
    ///
    /// Blank lines are skipped without being reported. Every other line that
    /// doesn't match is reported as [`LineIssue::UnparseableLine`], unless it
    /// was reattached to the previous message.
    pub fn parse(&self, content: &str) -> ParsedDocument {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut doc = ParsedDocument::default();

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            doc.total_lines = line_no;

            if raw.trim().is_empty() {
                continue;
            }

            if let Some(mut parsed) = self.parse_line(raw) {
                parsed.line = line_no;
                doc.lines.push(parsed);
                continue;
            }

            match doc.lines.last_mut() {
                Some(last) if self.config.reattach_continuations => {
                    last.body.push('\n');
                    last.body.push_str(raw.trim_end());
                    last.is_media = self.config.is_media_placeholder(&last.body);
                    doc.reattached_lines += 1;
                }
                _ => {
                    trace!(line = line_no, "dropping unparseable line");
                    doc.issues.push(LineIssue::UnparseableLine { line: line_no });
                }
            }
        }

        info!(
            total_lines = doc.total_lines,
            parsed = doc.lines.len(),
            dropped = doc.issues.len(),
            reattached = doc.reattached_lines,
            "parsed chat export"
        );

        doc
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a document with a parser built from `config`.
pub fn parse_lines(content: &str, config: &AnalyzerConfig) -> ParsedDocument {
    LineParser::with_config(config).parse(content)
}
