//! # Chatstats
//!
//! A Rust library for turning plaintext chat exports into structured,
//! analysis-ready tables.
//!
//! ## Overview
//!
//! An export is a text file where every message starts on a line like
//!
//! ```text
//! 1/15/24, 7:42 pm - Alice: Hello there 👋
//! ```
//!
//! Chatstats parses those lines, resolves the timestamps, sorts the messages
//! and derives:
//! - per-message letter count, word count and emojis
//! - per-author response latency, the time since the author last spoke
//! - per-author summaries, busiest days and the weekday distribution
//! - a global emoji table and an author × emoji matrix
//! - the concatenated text of all messages, for word clouds
//!
//! Malformed lines never abort a run; they are dropped and counted in a
//! [`ParseReport`](core::ParseReport).
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! let export = "\
//! 1/15/24, 9:00 pm - Alice: Hello 👋
//! 1/15/24, 9:02 pm - Bob: Hi! 😂
//! 1/15/24, 9:05 pm - Alice: How are you? 😂";
//!
//! let analysis = analyze(export, &AnalyzerConfig::default());
//!
//! let alice = analysis.author_stats_for("Alice").unwrap();
//! assert_eq!(alice.message_count, 2);
//! assert_eq!(alice.average_response_seconds, Some(300.0));
//! assert_eq!(analysis.emoji_counts[0], EmojiCount::new("😂", 2));
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - line grammar and [`LineParser`](parser::LineParser)
//! - [`core`] - the pipeline stages and [`ChatAnalysis`]
//!   - [`core::timestamp`] - date/time resolution and ordering
//!   - [`core::emoji`] - emoji extraction, [`EmojiClassifier`](core::EmojiClassifier)
//!   - [`core::metrics`] - counts, latency, author and day summaries
//!   - [`core::output`] - CSV, JSON, JSONL and report writers
//! - [`config`] - [`AnalyzerConfig`], [`OutputConfig`](config::OutputConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`error`] - [`ChatstatsError`], [`Result`] and [`LineIssue`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use config::AnalyzerConfig;
pub use core::{ChatAnalysis, analyze, analyze_bytes, analyze_file, analyze_with};
pub use error::{ChatstatsError, LineIssue, Result};
pub use message::{Meridiem, Message};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Message, Meridiem};

    pub use crate::error::{ChatstatsError, LineIssue, Result};

    pub use crate::config::{AnalyzerConfig, DateOrder, OutputConfig};

    // Pipeline
    pub use crate::core::{
        ChatAnalysis, EmojiClassifier, UnicodeEmoji, analyze, analyze_bytes, analyze_file,
        analyze_with, compute_metrics, emoji_frequencies, emoji_matrix, extract_emojis,
        normalize,
    };
    pub use crate::parser::{LineParser, parse_lines};

    // Aggregates
    pub use crate::core::{
        AuthorStats, DayCount, EmojiCount, EmojiMatrix, ParseReport, WeekdayCount,
    };

    pub use crate::format::OutputFormat;

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{
        to_json, to_jsonl, to_report_json, write_json, write_jsonl, write_report_json,
    };
}
