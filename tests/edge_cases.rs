//! Edge case tests for malformed and unusual chat exports

use chatstats::prelude::*;

fn run(chat: &str) -> ChatAnalysis {
    analyze(chat, &AnalyzerConfig::default())
}

// =========================================================================
// Empty and degenerate inputs
// =========================================================================

#[test]
fn test_empty_document() {
    let analysis = run("");
    assert!(analysis.is_empty());
    assert_eq!(analysis.report.total_lines, 0);
    assert!(analysis.emoji_counts.is_empty());
    assert!(analysis.author_stats().is_empty());
    assert!(analysis.top_days().is_empty());
    assert_eq!(analysis.weekday_distribution().len(), 7);
    assert!(analysis.weekday_distribution().iter().all(|w| w.count == 0));
    assert_eq!(analysis.word_cloud_text, "");
}

#[test]
fn test_only_blank_lines() {
    let analysis = run("\n   \n\t\n");
    assert!(analysis.is_empty());
    assert_eq!(analysis.report.total_lines, 3);
    assert!(analysis.report.issues.is_empty());
}

#[test]
fn test_only_garbage() {
    let analysis = run("hello\n-----\n[1/15/24 9:00] Alice: wrong layout");
    assert!(analysis.is_empty());
    assert_eq!(analysis.report.unparseable_lines(), 3);
}

#[test]
fn test_system_notice_without_colon_is_dropped() {
    let analysis = run(
        "1/15/24, 9:00 am - Messages and calls are end-to-end encrypted.\n\
         1/15/24, 9:01 am - Alice: hi",
    );
    assert_eq!(analysis.messages.len(), 1);
    assert_eq!(
        analysis.report.issues,
        vec![LineIssue::UnparseableLine { line: 1 }]
    );
}

#[test]
fn test_byte_order_mark_and_crlf() {
    let analysis = run("\u{feff}1/15/24, 9:00 am - Alice: hi\r\n1/15/24, 9:01 am - Bob: yo\r\n");
    assert_eq!(analysis.messages.len(), 2);
    assert_eq!(analysis.messages[0].date, "1/15/24");
    assert_eq!(analysis.messages[1].body, "yo");
}

// =========================================================================
// Authors and bodies
// =========================================================================

#[test]
fn test_colons_stay_in_body() {
    let analysis = run("1/15/24, 9:00 am - Alice: meet at 10:30: ok?");
    assert_eq!(analysis.messages[0].author, "Alice");
    assert_eq!(analysis.messages[0].body, "meet at 10:30: ok?");
}

#[test]
fn test_empty_author_and_body() {
    let analysis = run("1/15/24, 9:00 am - : \n1/15/24, 9:01 am - : again");
    assert_eq!(analysis.messages.len(), 2);
    assert_eq!(analysis.messages[0].author, "");
    assert_eq!(analysis.messages[0].body, "");
    assert_eq!(analysis.messages[0].letter_count, 0);
    // Splitting "" on a space yields one empty token
    assert_eq!(analysis.messages[0].word_count, 1);
    assert_eq!(analysis.messages[1].response_latency_seconds, Some(60.0));
}

#[test]
fn test_non_latin_text() {
    let analysis = run("1/15/24, 9:00 am - Иван: Привет мир 你好");
    let msg = &analysis.messages[0];
    assert_eq!(msg.author, "Иван");
    assert_eq!(msg.letter_count, 13);
    assert_eq!(msg.word_count, 3);
    assert!(msg.emojis.is_empty());
}

#[test]
fn test_double_spaces_count_empty_tokens() {
    let analysis = run("1/15/24, 9:00 am - Alice: a  b");
    assert_eq!(analysis.messages[0].word_count, 3);
}

// =========================================================================
// Timestamps
// =========================================================================

#[test]
fn test_midnight_and_noon() {
    let analysis = run("1/15/24, 12:00 am - A: midnight\n1/15/24, 12:00 pm - A: noon");
    let hours: Vec<String> = analysis
        .messages
        .iter()
        .map(|m| m.timestamp.format("%H:%M").to_string())
        .collect();
    assert_eq!(hours, vec!["00:00", "12:00"]);
    assert_eq!(analysis.messages[1].response_latency_seconds, Some(43_200.0));
}

#[test]
fn test_impossible_timestamps_are_reported() {
    let analysis = run("\
2/30/24, 9:00 am - A: no such day
1/15/24, 13:00 pm - A: no such hour
1/15/24, 0:15 am - A: zero hour
1/15/24, 9:75 am - A: no such minute
1/15/24, 9:00 am - A: fine");

    assert_eq!(analysis.messages.len(), 1);
    assert_eq!(analysis.report.malformed_timestamps(), 4);
    let lines: Vec<usize> = analysis.report.issues.iter().map(LineIssue::line).collect();
    assert_eq!(lines, vec![1, 2, 3, 4]);
    assert_eq!(
        analysis.report.issues[0].to_string(),
        "line 1: malformed timestamp '2/30/24, 9:00'"
    );
}

#[test]
fn test_equal_timestamps_keep_input_order() {
    let analysis = run("\
1/15/24, 9:00 am - B: second author first
1/15/24, 9:00 am - A: first author second
1/15/24, 9:00 am - B: again");

    let authors: Vec<&str> = analysis.messages.iter().map(|m| m.author()).collect();
    assert_eq!(authors, vec!["B", "A", "B"]);
    assert_eq!(analysis.messages[2].response_latency_seconds, Some(0.0));
}

#[test]
fn test_latency_measured_after_sorting() {
    // Alice's later message comes first in the file
    let analysis = run("1/15/24, 9:10 am - Alice: later\n1/15/24, 9:00 am - Alice: earlier");
    assert_eq!(analysis.messages[0].body, "earlier");
    assert_eq!(analysis.messages[1].response_latency_seconds, Some(600.0));
}

// =========================================================================
// Media placeholders
// =========================================================================

#[test]
fn test_media_only_author() {
    let analysis = run("\
1/15/24, 9:00 am - Alice: hi 🎉
1/15/24, 9:01 am - Bob: <Media omitted>");

    assert_eq!(analysis.messages.len(), 2);
    assert!(analysis.messages[1].is_media);
    assert!(analysis.messages[1].emojis.is_empty());
    assert!(analysis.author_stats_for("Bob").is_none());
    assert_eq!(analysis.emoji_by_author.authors, vec!["Alice"]);
    assert_eq!(analysis.daily_counts()[0].count, 1);
}

#[test]
fn test_placeholder_must_match_exactly() {
    let analysis = run("1/15/24, 9:00 am - Alice: <Media omitted> lol");
    assert!(!analysis.messages[0].is_media);
    assert_eq!(analysis.report.media_messages, 0);
}

// =========================================================================
// Emoji edge cases
// =========================================================================

#[test]
fn test_emoji_sequences_count_once() {
    let analysis = run("1/15/24, 9:00 am - A: 👨‍👩‍👧‍👦 👍🏽 🇰🇿 #️⃣");
    assert_eq!(
        analysis.messages[0].emojis,
        vec!["👨‍👩‍👧‍👦", "👍🏽", "🇰🇿", "#️⃣"]
    );
    assert_eq!(analysis.emoji_counts.len(), 4);
}

#[test]
fn test_ties_in_emoji_table_keep_first_seen_order() {
    let analysis = run("1/15/24, 9:00 am - A: 🔥\n1/15/24, 9:01 am - B: 🎉\n1/15/24, 9:02 am - A: 🎉🔥");
    let order: Vec<&str> = analysis.emoji_counts.iter().map(|e| e.emoji.as_str()).collect();
    assert_eq!(order, vec!["🔥", "🎉"]);
}

#[test]
fn test_invalid_config_rejected_before_reading() {
    let err = analyze_bytes(b"", &AnalyzerConfig::default().with_media_placeholder("  ")).unwrap_err();
    assert!(err.is_invalid_config());
}
