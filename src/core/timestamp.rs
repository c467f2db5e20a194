//! Timestamp normalization and chronological ordering.
//!
//! Merges the raw `date`, `time_of_day` and meridiem of each parsed line into
//! one naive [`NaiveDateTime`] and sorts the messages by it.
//!
//! The date convention is explicit: fields are read in the configured
//! [`DateOrder`], and the year may have two digits (`24` is 2024, years map
//! into 2000..=2099) or four. Times are `hour:minute` on the 12-hour clock.
//! No timezone is applied; the result is the local time of the exporting
//! device.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::DateOrder;
//! use chatstats::core::timestamp::resolve_timestamp;
//! use chatstats::Meridiem;
//!
//! let ts = resolve_timestamp("1/15/24", "12:05", Meridiem::Am, DateOrder::MonthFirst).unwrap();
//! assert_eq!(ts.to_string(), "2024-01-15 00:05:00");
//!
//! // There is no 13th month
//! assert!(resolve_timestamp("13/15/24", "9:00", Meridiem::Am, DateOrder::MonthFirst).is_none());
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, info};

use crate::Meridiem;
use crate::Message;
use crate::config::DateOrder;
use crate::error::LineIssue;
use crate::parser::ParsedLine;

/// Parses a `/`-separated date under the given field order.
///
/// Returns `None` if the date has the wrong shape or doesn't exist.
pub fn resolve_date(date: &str, order: DateOrder) -> Option<NaiveDate> {
    let mut parts = date.split('/');
    let first = parts.next()?;
    let second = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let (month, day) = match order {
        DateOrder::MonthFirst => (first, second),
        DateOrder::DayFirst => (second, first),
    };

    let year = match year.len() {
        2 => 2000 + year.parse::<i32>().ok()?,
        4 => year.parse::<i32>().ok()?,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Parses an `hour:minute` time on the 12-hour clock.
pub fn resolve_time(time: &str, meridiem: Meridiem) -> Option<NaiveTime> {
    let (hour, minute) = time.split_once(':')?;
    let hour = meridiem.to_24h(hour.parse().ok()?)?;
    NaiveTime::from_hms_opt(hour, minute.parse().ok()?, 0)
}

/// Combines date, time and meridiem into one absolute timestamp.
pub fn resolve_timestamp(
    date: &str,
    time: &str,
    meridiem: Meridiem,
    order: DateOrder,
) -> Option<NaiveDateTime> {
    Some(resolve_date(date, order)?.and_time(resolve_time(time, meridiem)?))
}

/// Resolves every parsed line to a [`Message`] and sorts by timestamp.
///
/// Lines whose timestamp doesn't resolve are dropped and reported as
/// [`LineIssue::MalformedTimestamp`]. The sort is stable, so messages with
/// equal timestamps keep their input order.
pub fn normalize(lines: Vec<ParsedLine>, order: DateOrder) -> (Vec<Message>, Vec<LineIssue>) {
    let mut messages = Vec::with_capacity(lines.len());
    let mut issues = Vec::new();

    for parsed in lines {
        let Some(timestamp) =
            resolve_timestamp(&parsed.date, &parsed.time_of_day, parsed.meridiem, order)
        else {
            debug!(
                line = parsed.line,
                date = %parsed.date,
                time = %parsed.time_of_day,
                "dropping message with malformed timestamp"
            );
            issues.push(LineIssue::MalformedTimestamp {
                line: parsed.line,
                date: parsed.date,
                time: parsed.time_of_day,
            });
            continue;
        };

        messages.push(Message {
            line: parsed.line,
            date: parsed.date,
            time_of_day: parsed.time_of_day,
            meridiem: parsed.meridiem,
            author: parsed.author,
            body: parsed.body,
            is_media: parsed.is_media,
            timestamp,
            emojis: Vec::new(),
            letter_count: 0,
            word_count: 0,
            response_latency_seconds: None,
        });
    }

    messages.sort_by_key(|m| m.timestamp);

    info!(
        resolved = messages.len(),
        malformed = issues.len(),
        "normalized timestamps"
    );

    (messages, issues)
}
