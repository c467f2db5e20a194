//! Command-line interface definition using clap.
//!
//! [`Args`] turns flags into the library's [`AnalyzerConfig`] and
//! [`OutputConfig`], so the binary itself only orchestrates and prints.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{AnalyzerConfig, DateOrder, OutputConfig};
use crate::error::{ChatstatsError, Result};

/// Default output file stem, the extension follows `--format`.
pub const DEFAULT_OUTPUT_STEM: &str = "chat_messages";

/// Analyze a plaintext chat export: per-message metrics, response latency,
/// emoji usage and activity by day.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt -f jsonl --metrics --emojis
    chatstats chat.txt --day-first --report report.json
    chatstats chat.txt --emoji-out emojis.csv --wordcloud-out words.txt")]
pub struct Args {
    /// Path to the chat export
    pub input: PathBuf,

    /// Path to the per-message output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Load analyzer settings from a JSON file; flags below override it
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read dates as day/month/year instead of month/day/year
    #[arg(long)]
    pub day_first: bool,

    /// Number of busiest days to report
    #[arg(long, value_name = "N")]
    pub top_days: Option<usize>,

    /// Body text that marks a media message (repeatable)
    #[arg(long = "media-placeholder", value_name = "TEXT")]
    pub media_placeholders: Vec<String>,

    /// Append lines that aren't message headers to the previous message
    #[arg(long)]
    pub reattach_continuations: bool,

    /// Include timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include extracted emojis in output
    #[arg(short = 'e', long)]
    pub emojis: bool,

    /// Include letter count, word count and response latency in output
    #[arg(short = 'm', long)]
    pub metrics: bool,

    /// Include media placeholder messages in output
    #[arg(long)]
    pub include_media: bool,

    /// Write the full analysis as JSON
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Write the emoji frequency table as CSV
    #[arg(long, value_name = "PATH")]
    pub emoji_out: Option<PathBuf>,

    /// Write the author × emoji matrix as CSV
    #[arg(long, value_name = "PATH")]
    pub emoji_matrix_out: Option<PathBuf>,

    /// Write the word-cloud text
    #[arg(long, value_name = "PATH")]
    pub wordcloud_out: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the analyzer configuration from `--config` and flags.
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => AnalyzerConfig::default(),
        };

        if self.day_first {
            config = config.with_date_order(DateOrder::DayFirst);
        }
        if let Some(n) = self.top_days {
            config = config.with_top_days(n);
        }
        if self.reattach_continuations {
            config = config.with_reattach_continuations(true);
        }
        for placeholder in &self.media_placeholders {
            config = config.with_media_placeholder(placeholder.as_str());
        }

        config.validate()?;
        Ok(config)
    }

    /// Builds the output configuration from flags.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.timestamps {
            config = config.with_timestamps();
        }
        if self.emojis {
            config = config.with_emojis();
        }
        if self.metrics {
            config = config.with_metrics();
        }
        if self.include_media {
            config = config.with_media();
        }
        config
    }

    /// Returns `--output`, or the default name with the format's extension.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let format: crate::format::OutputFormat = self.format.into();
            PathBuf::from(format!("{DEFAULT_OUTPUT_STEM}.{}", format.extension()))
        })
    }
}

fn load_config(path: &Path) -> Result<AnalyzerConfig> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| {
        ChatstatsError::invalid_config("config", format!("{}: {e}", path.display()))
    })
}

/// Output format options, mirrored from [`crate::format::OutputFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum FormatArg {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<FormatArg> for crate::format::OutputFormat {
    fn from(format: FormatArg) -> crate::format::OutputFormat {
        match format {
            FormatArg::Csv => crate::format::OutputFormat::Csv,
            FormatArg::Json => crate::format::OutputFormat::Json,
            FormatArg::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
