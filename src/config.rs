//! Configuration types for the analysis pipeline and its outputs.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{AnalyzerConfig, DateOrder};
//!
//! let config = AnalyzerConfig::new()
//!     .with_date_order(DateOrder::DayFirst)
//!     .with_media_placeholder("<Medien ausgeschlossen>")
//!     .with_top_days(5);
//!
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};

/// The media placeholder written by English-language exports.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Number of entries in the busiest-days ranking unless configured.
pub const DEFAULT_TOP_DAYS: usize = 10;

/// Order of the day and month fields in the `<date>` part of a line.
///
/// Exports do not say which order they use, so the order is fixed up front
/// instead of guessed. `1/2/24` is January 2nd under [`MonthFirst`] and
/// February 1st under [`DayFirst`].
///
/// [`MonthFirst`]: DateOrder::MonthFirst
/// [`DayFirst`]: DateOrder::DayFirst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `month/day/year`, the US export layout.
    #[default]
    MonthFirst,
    /// `day/month/year`.
    DayFirst,
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrder::MonthFirst => write!(f, "month/day/year"),
            DateOrder::DayFirst => write!(f, "day/month/year"),
        }
    }
}

/// Configuration for parsing and analyzing a chat export.
///
/// # Example
///
/// ```rust
/// use chatstats::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::new().with_reattach_continuations(true);
/// assert!(config.reattach_continuations);
/// assert_eq!(config.media_placeholders, vec!["<Media omitted>".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// How to read the `<date>` field (default: month first)
    pub date_order: DateOrder,

    /// Bodies that mark an attachment which was not exported
    /// (default: `<Media omitted>`)
    pub media_placeholders: Vec<String>,

    /// Append lines that don't start a message to the previous message's body
    /// instead of dropping them (default: false)
    pub reattach_continuations: bool,

    /// Length of the busiest-days ranking (default: 10)
    pub top_days: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::MonthFirst,
            media_placeholders: vec![DEFAULT_MEDIA_PLACEHOLDER.to_string()],
            reattach_continuations: false,
            top_days: DEFAULT_TOP_DAYS,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date field order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Adds a media placeholder to the existing list.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        if !self.media_placeholders.contains(&placeholder) {
            self.media_placeholders.push(placeholder);
        }
        self
    }

    /// Replaces the list of media placeholders.
    #[must_use]
    pub fn with_media_placeholders<I, S>(mut self, placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media_placeholders = placeholders.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether continuation lines are reattached.
    #[must_use]
    pub fn with_reattach_continuations(mut self, enabled: bool) -> Self {
        self.reattach_continuations = enabled;
        self
    }

    /// Sets the length of the busiest-days ranking.
    #[must_use]
    pub fn with_top_days(mut self, n: usize) -> Self {
        self.top_days = n;
        self
    }

    /// Returns `true` if `body` is one of the configured media placeholders.
    pub fn is_media_placeholder(&self, body: &str) -> bool {
        self.media_placeholders.iter().any(|p| p == body)
    }

    /// Checks the configuration for values the pipeline cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidConfig`] if `top_days` is zero or a
    /// media placeholder is blank (it would match every empty body).
    pub fn validate(&self) -> Result<()> {
        if self.top_days == 0 {
            return Err(ChatstatsError::invalid_config(
                "top_days",
                "must be at least 1",
            ));
        }
        if self.media_placeholders.iter().any(|p| p.trim().is_empty()) {
            return Err(ChatstatsError::invalid_config(
                "media_placeholders",
                "placeholders must not be blank",
            ));
        }
        Ok(())
    }
}

/// Controls which per-message columns the writers emit.
///
/// Author and body are always written.
///
/// # Example
///
/// ```rust
/// use chatstats::config::OutputConfig;
///
/// let config = OutputConfig::new().with_timestamps().with_metrics();
/// assert!(config.include_timestamps);
/// assert!(!config.include_emojis);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Include the normalized timestamp
    pub include_timestamps: bool,
    /// Include the extracted emoji list
    pub include_emojis: bool,
    /// Include letter count, word count and response latency
    pub include_metrics: bool,
    /// Include media placeholder messages as rows
    pub include_media: bool,
}

impl OutputConfig {
    /// Creates a configuration that writes author and body only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with every column enabled.
    pub fn all() -> Self {
        Self {
            include_timestamps: true,
            include_emojis: true,
            include_metrics: true,
            include_media: true,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_emojis(mut self) -> Self {
        self.include_emojis = true;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self) -> Self {
        self.include_metrics = true;
        self
    }

    #[must_use]
    pub fn with_media(mut self) -> Self {
        self.include_media = true;
        self
    }
}
