//! Per-message metrics and per-author, per-day summaries.
//!
//! Media placeholder messages are ignored everywhere in this module: they
//! keep zero counts, get no response latency, and don't count towards any
//! summary.
//!
//! # Response latency
//!
//! Latency is "time since this author last spoke at all", measured over the
//! globally sorted sequence. Messages from other authors in between don't
//! reset it, so it is not turn-taking reply time.
//!
//! ```rust
//! use chatstats::core::metrics::assign_response_latency;
//! use chatstats::Message;
//! use chrono::{Duration, NaiveDate};
//!
//! let t0 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let mut messages = vec![
//!     Message::new("A", "hi", t0),
//!     Message::new("B", "hey", t0 + Duration::seconds(10)),
//!     Message::new("A", "how are you?", t0 + Duration::seconds(30)),
//! ];
//!
//! assign_response_latency(&mut messages);
//! assert_eq!(messages[0].response_latency_seconds, None);
//! assert_eq!(messages[1].response_latency_seconds, None);
//! assert_eq!(messages[2].response_latency_seconds, Some(30.0));
//! ```

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use tracing::info;

use crate::Message;
use crate::core::models::{AuthorStats, DayCount, WeekdayCount};

/// Number of characters in a body.
pub fn letter_count(body: &str) -> usize {
    body.chars().count()
}

/// Number of tokens when splitting a body on the space character.
///
/// Splitting is on `' '` exactly, so an empty body counts as one word and
/// double spaces produce empty tokens. Both are intentional. The `'\n'`
/// between reattached continuation lines separates words too.
pub fn word_count(body: &str) -> usize {
    body.split([' ', '\n']).count()
}

/// Sets [`Message::response_latency_seconds`] on every text message.
///
/// `messages` must already be sorted by timestamp. The author → last-seen
/// map lives only for the duration of this call.
pub fn assign_response_latency(messages: &mut [Message]) {
    let mut last_seen: HashMap<String, NaiveDateTime> = HashMap::new();

    for msg in messages.iter_mut() {
        if msg.is_media {
            msg.response_latency_seconds = None;
            continue;
        }

        match last_seen.get_mut(&msg.author) {
            Some(last) => {
                msg.response_latency_seconds =
                    Some((msg.timestamp - *last).num_seconds() as f64);
                *last = msg.timestamp;
            }
            None => {
                msg.response_latency_seconds = None;
                last_seen.insert(msg.author.clone(), msg.timestamp);
            }
        }
    }
}

/// Fills letter count, word count and response latency.
///
/// `messages` must already be sorted by timestamp.
pub fn compute_metrics(messages: &mut [Message]) {
    for msg in messages.iter_mut() {
        if msg.is_media {
            msg.letter_count = 0;
            msg.word_count = 0;
        } else {
            msg.letter_count = letter_count(&msg.body);
            msg.word_count = word_count(&msg.body);
        }
    }

    assign_response_latency(messages);

    info!(messages = messages.len(), "computed message metrics");
}

fn mean(total: f64, n: usize) -> Option<f64> {
    (n > 0).then(|| total / n as f64)
}

/// Summarizes every author of a text message, in order of first appearance.
pub fn author_stats(messages: &[Message]) -> Vec<AuthorStats> {
    struct Acc {
        messages: usize,
        words: usize,
        letters: usize,
        emojis: usize,
        latency_total: f64,
        latency_samples: usize,
    }

    let mut order: Vec<&str> = Vec::new();
    let mut accs: HashMap<&str, Acc> = HashMap::new();

    for msg in messages.iter().filter(|m| m.is_text()) {
        let acc = accs.entry(msg.author.as_str()).or_insert_with(|| {
            order.push(msg.author.as_str());
            Acc {
                messages: 0,
                words: 0,
                letters: 0,
                emojis: 0,
                latency_total: 0.0,
                latency_samples: 0,
            }
        });

        acc.messages += 1;
        acc.words += msg.word_count;
        acc.letters += msg.letter_count;
        acc.emojis += msg.emojis.len();
        if let Some(latency) = msg.response_latency_seconds {
            acc.latency_total += latency;
            acc.latency_samples += 1;
        }
    }

    order
        .into_iter()
        .filter_map(|author| {
            let acc = accs.get(author)?;
            Some(AuthorStats {
                author: author.to_string(),
                message_count: acc.messages,
                words_per_message: acc.words as f64 / acc.messages as f64,
                letters_per_message: acc.letters as f64 / acc.messages as f64,
                emoji_count: acc.emojis,
                average_response_seconds: mean(acc.latency_total, acc.latency_samples),
            })
        })
        .collect()
}

/// Counts text messages per calendar date, earliest date first.
pub fn daily_counts(messages: &[Message]) -> Vec<DayCount> {
    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for msg in messages.iter().filter(|m| m.is_text()) {
        *counts.entry(msg.calendar_date()).or_default() += 1;
    }

    let mut days: Vec<DayCount> = counts
        .into_iter()
        .map(|(date, count)| DayCount { date, count })
        .collect();
    days.sort_by_key(|d| d.date);
    days
}

/// Returns the `n` dates with the most text messages.
///
/// Sorted by descending count; ties go to the earlier date.
pub fn busiest_days(messages: &[Message], n: usize) -> Vec<DayCount> {
    let mut days = daily_counts(messages);
    days.sort_by(|a, b| b.count.cmp(&a.count));
    days.truncate(n);
    days
}

/// Counts text messages per day of the week, Monday through Sunday.
///
/// Always returns seven entries; days without messages hold zero.
pub fn weekday_distribution(messages: &[Message]) -> Vec<WeekdayCount> {
    let mut counts = [0usize; 7];
    for msg in messages.iter().filter(|m| m.is_text()) {
        counts[msg.timestamp.weekday().num_days_from_monday() as usize] += 1;
    }

    let mut weekday = Weekday::Mon;
    counts
        .iter()
        .map(|&count| {
            let entry = WeekdayCount { weekday, count };
            weekday = weekday.succ();
            entry
        })
        .collect()
}

/// Joins the bodies of all text messages with single spaces.
///
/// This is the input for word-cloud rendering.
pub fn word_cloud_text(messages: &[Message]) -> String {
    messages
        .iter()
        .filter(|m| m.is_text())
        .map(|m| m.body.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> NaiveDateTime {
        // Monday
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn at(author: &str, body: &str, secs: i64) -> Message {
        Message::new(author, body, t0() + Duration::seconds(secs))
    }

    #[test]
    fn test_letter_count_is_chars() {
        assert_eq!(letter_count("hello"), 5);
        assert_eq!(letter_count("Привет"), 6);
        assert_eq!(letter_count("😂😂"), 2);
        assert_eq!(letter_count(""), 0);
    }

    #[test]
    fn test_word_count_quirks() {
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count(""), 1);
        assert_eq!(word_count("a  b"), 3);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("first line\nsecond line"), 4);
        assert_eq!(word_count("tab\tstays"), 1);
    }

    #[test]
    fn test_latency_ignores_other_authors() {
        let mut messages = vec![at("A", "x", 0), at("B", "y", 10), at("A", "z", 30)];
        assign_response_latency(&mut messages);

        assert_eq!(messages[0].response_latency_seconds, None);
        assert_eq!(messages[1].response_latency_seconds, None);
        assert_eq!(messages[2].response_latency_seconds, Some(30.0));
    }

    #[test]
    fn test_latency_consecutive_and_equal_timestamps() {
        let mut messages = vec![at("A", "x", 0), at("A", "y", 0), at("A", "z", 120)];
        assign_response_latency(&mut messages);

        assert_eq!(messages[1].response_latency_seconds, Some(0.0));
        assert_eq!(messages[2].response_latency_seconds, Some(120.0));
    }

    #[test]
    fn test_latency_skips_media() {
        let mut messages = vec![
            at("A", "x", 0),
            at("A", "<Media omitted>", 60).with_media(true),
            at("A", "z", 100),
        ];
        assign_response_latency(&mut messages);

        assert_eq!(messages[1].response_latency_seconds, None);
        assert_eq!(messages[2].response_latency_seconds, Some(100.0));
    }

    #[test]
    fn test_compute_metrics_zeroes_media() {
        let mut messages = vec![
            at("A", "two words", 0),
            at("A", "<Media omitted>", 5).with_media(true),
        ];
        compute_metrics(&mut messages);

        assert_eq!(messages[0].letter_count, 9);
        assert_eq!(messages[0].word_count, 2);
        assert_eq!(messages[1].letter_count, 0);
        assert_eq!(messages[1].word_count, 0);
    }

    #[test]
    fn test_author_stats() {
        let mut messages = vec![
            at("A", "one two", 0),
            at("B", "solo 🎉", 10),
            at("A", "three", 30),
            at("A", "four five six", 90),
            at("B", "<Media omitted>", 100).with_media(true),
        ];
        messages[1].emojis = vec!["🎉".into()];
        compute_metrics(&mut messages);

        let stats = author_stats(&messages);
        assert_eq!(stats.len(), 2);

        let a = &stats[0];
        assert_eq!(a.author, "A");
        assert_eq!(a.message_count, 3);
        assert!((a.words_per_message - 2.0).abs() < f64::EPSILON);
        assert_eq!(a.emoji_count, 0);
        assert_eq!(a.average_response_seconds, Some(45.0));

        let b = &stats[1];
        assert_eq!(b.author, "B");
        assert_eq!(b.message_count, 1);
        assert_eq!(b.emoji_count, 1);
        assert_eq!(b.average_response_seconds, None);
    }

    #[test]
    fn test_author_with_only_media_is_absent() {
        let messages = vec![at("A", "<Media omitted>", 0).with_media(true)];
        assert!(author_stats(&messages).is_empty());
    }

    #[test]
    fn test_daily_and_busiest_days() {
        let day = 86_400;
        let messages = vec![
            at("A", "x", 0),
            at("A", "x", day),
            at("A", "x", day + 1),
            at("A", "x", 2 * day),
            at("A", "x", 3 * day),
            at("A", "x", 3 * day + 1),
            at("A", "m", 4 * day).with_media(true),
        ];

        let daily = daily_counts(&messages);
        assert_eq!(daily.len(), 4);
        assert_eq!(daily[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let top = busiest_days(&messages, 3);
        let got: Vec<(u32, usize)> = top.iter().map(|d| (d.date.day(), d.count)).collect();
        assert_eq!(got, vec![(16, 2), (18, 2), (15, 1)]);

        assert!(busiest_days(&[], 10).is_empty());
    }

    #[test]
    fn test_weekday_distribution() {
        let day = 86_400;
        let messages = vec![
            at("A", "mon", 0),
            at("A", "mon", 60),
            at("A", "wed", 2 * day),
            at("A", "sun", 6 * day),
        ];
        let dist = weekday_distribution(&messages);

        assert_eq!(dist.len(), 7);
        assert_eq!(dist[0].weekday, Weekday::Mon);
        assert_eq!(dist[6].weekday, Weekday::Sun);
        let counts: Vec<usize> = dist.iter().map(|w| w.count).collect();
        assert_eq!(counts, vec![2, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_word_cloud_text_excludes_media() {
        let messages = vec![
            at("A", "hello", 0),
            at("B", "<Media omitted>", 1).with_media(true),
            at("A", "world", 2),
        ];
        assert_eq!(word_cloud_text(&messages), "hello world");
        assert_eq!(word_cloud_text(&[]), "");
    }
}
