//! Core processing logic for chatstats.
//!
//! This module contains:
//! - [`timestamp`] - Date/time resolution and chronological ordering
//! - [`emoji`] - Emoji extraction and frequency tables
//! - [`metrics`] - Per-message metrics and per-author, per-day summaries
//! - [`models`] - Aggregate tables
//! - [`processor`] - The full pipeline and [`ChatAnalysis`]
//! - [`output`] - Format writers (CSV, JSON, JSONL, report)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::config::AnalyzerConfig;
//! use chatstats::core::{analyze, weekday_name};
//!
//! let analysis = analyze("1/15/24, 9:00 am - Alice: hi", &AnalyzerConfig::default());
//! let monday = &analysis.weekday_distribution()[0];
//! assert_eq!(weekday_name(monday.weekday), "Monday");
//! assert_eq!(monday.count, 1);
//! ```

pub mod emoji;
pub mod metrics;
pub mod models;
pub mod output;
pub mod processor;
pub mod timestamp;

pub use emoji::{EmojiClassifier, UnicodeEmoji, emoji_frequencies, emoji_matrix, extract_emojis};
pub use metrics::{
    author_stats, busiest_days, compute_metrics, daily_counts, weekday_distribution,
    word_cloud_text,
};
pub use models::{
    AuthorStats, DayCount, EmojiCount, EmojiMatrix, ParseReport, WeekdayCount, weekday_name,
};
pub use processor::{ChatAnalysis, analyze, analyze_bytes, analyze_file, analyze_with};
pub use timestamp::{normalize, resolve_timestamp};

// Re-export from the crate root
pub use crate::Message;
pub use crate::config::OutputConfig;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, to_emoji_csv, to_emoji_matrix_csv, write_csv, write_emoji_csv, write_emoji_matrix_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, to_report_json, write_json, write_jsonl, write_report_json};
