//! Output format writers.
//!
//! Message tables:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one message per line - requires `json-output` feature
//!
//! Aggregates:
//! - [`write_emoji_csv`] / [`write_emoji_matrix_csv`] - emoji tables as CSV - requires `csv-output` feature
//! - [`write_report_json`] / [`to_report_json`] - the whole analysis as one JSON document - requires `json-output` feature
//!
//! Which message columns are written is controlled by
//! [`OutputConfig`](crate::config::OutputConfig). Media placeholder rows are
//! only written with [`OutputConfig::include_media`](crate::config::OutputConfig::include_media).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::config::{AnalyzerConfig, OutputConfig};
//! use chatstats::core::output::{to_csv, write_jsonl, write_report_json};
//!
//! let analysis = chatstats::analyze_file("chat.txt", &AnalyzerConfig::default())?;
//! let config = OutputConfig::new().with_timestamps().with_metrics();
//!
//! write_jsonl(&analysis.messages, "messages.jsonl", &config)?;
//! write_report_json(&analysis, "report.json")?;
//!
//! let csv_string = to_csv(&analysis.messages, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
#[cfg(feature = "json-output")]
mod report_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{
    to_csv, to_emoji_csv, to_emoji_matrix_csv, write_csv, write_emoji_csv, write_emoji_matrix_csv,
};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
#[cfg(feature = "json-output")]
pub use report_writer::{to_report_json, write_report_json};

#[cfg(any(feature = "csv-output", feature = "json-output"))]
use crate::{Message, config::OutputConfig};

/// Timestamp layout shared by every writer.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Messages that become rows under `config`.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
fn rows<'a>(
    messages: &'a [Message],
    config: &OutputConfig,
) -> impl Iterator<Item = &'a Message> + 'a {
    let include_media = config.include_media;
    messages
        .iter()
        .filter(move |m| include_media || m.is_text())
}
