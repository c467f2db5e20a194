//! Tests for output writers (CSV, JSON, JSONL, report)

use chatstats::config::{AnalyzerConfig, OutputConfig};
use chatstats::core::output::{
    to_csv, to_emoji_csv, to_jsonl, write_csv, write_emoji_matrix_csv, write_json, write_jsonl,
    write_report_json,
};
use chatstats::format::{OutputFormat, to_format_string, write_to_format};
use chatstats::{ChatAnalysis, analyze};
use std::fs;
use tempfile::tempdir;

const CHAT: &str = "\
1/15/24, 10:30 am - Alice: Hello! 👋
1/15/24, 10:31 am - Bob: <Media omitted>
1/15/24, 10:32 am - Bob: Hi; Alice \"quoted\"
1/15/24, 10:40 am - Alice: How are you? 😂";

fn sample() -> ChatAnalysis {
    analyze(CHAT, &AnalyzerConfig::default())
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_roundtrips_through_csv_reader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_csv(&sample().messages, &path, &OutputConfig::all()).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&path)
            .unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["Timestamp", "Author", "Body", "Emojis", "LetterCount", "WordCount", "ResponseSeconds"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][0], "2024-01-15 10:30:00");
        assert_eq!(&rows[2][2], "Hi; Alice \"quoted\"");
        assert_eq!(&rows[3][3], "😂");
        assert_eq!(&rows[3][6], "600");
        assert_eq!(&rows[0][6], "");
    }

    #[test]
    fn test_csv_without_media_rows() {
        let csv = to_csv(&sample().messages, &OutputConfig::new()).unwrap();
        assert_eq!(csv.lines().count(), 4);
        assert!(!csv.contains("<Media omitted>"));
    }

    #[test]
    fn test_emoji_tables() {
        let analysis = sample();
        assert_eq!(to_emoji_csv(&analysis.emoji_counts).unwrap(), "Emoji;Count\n👋;1\n😂;1\n");

        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix.csv");
        write_emoji_matrix_csv(&analysis.emoji_by_author, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Author;👋;😂\nAlice;1;1\nBob;0;0\n"
        );
    }
}

// ============================================================================
// JSON / JSONL Writer Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_with_metrics() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        let config = OutputConfig::new().with_metrics().with_emojis();
        write_json(&sample().messages, &path, &config).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["author"], "Alice");
        assert!(rows[0]["response_latency_seconds"].is_null());
        assert_eq!(rows[2]["response_latency_seconds"], 600.0);
        assert_eq!(rows[2]["emojis"][0], "😂");
        assert!(rows[0].get("timestamp").is_none());
    }

    #[test]
    fn test_write_jsonl_one_object_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.jsonl");

        write_jsonl(&sample().messages, &path, &OutputConfig::all()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let rows: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1]["is_media"], true);
        assert_eq!(rows[1]["letter_count"], 0);
        assert_eq!(rows[3]["timestamp"], "2024-01-15 10:40:00");
    }

    #[test]
    fn test_report_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_report_json(&sample(), &path).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report["parse"]["total_lines"], 4);
        assert_eq!(report["authors"][1]["author"], "Bob");
        assert!(report["authors"][1]["average_response_seconds"].is_null());
        assert_eq!(report["authors"][0]["average_response_seconds"], 600.0);
        assert_eq!(report["busiest_days"][0]["count"], 3);
        assert_eq!(report["messages"].as_array().unwrap().len(), 4);
    }
}

// ============================================================================
// Format Dispatch Tests
// ============================================================================

mod format_tests {
    use super::*;

    #[test]
    fn test_write_to_format_by_extension() {
        let dir = tempdir().unwrap();
        let messages = sample().messages;

        for name in ["out.csv", "out.json", "out.jsonl", "out.ndjson"] {
            let path = dir.path().join(name);
            let format = OutputFormat::from_path(&path).unwrap();
            write_to_format(&messages, &path, format, &OutputConfig::new()).unwrap();
            assert!(fs::metadata(&path).unwrap().len() > 0, "{name} is empty");
        }
    }

    #[test]
    fn test_to_format_string_matches_writers() {
        let messages = sample().messages;
        let config = OutputConfig::new().with_timestamps();

        assert_eq!(
            to_format_string(&messages, OutputFormat::Csv, &config).unwrap(),
            to_csv(&messages, &config).unwrap()
        );
        assert_eq!(
            to_format_string(&messages, OutputFormat::Jsonl, &config).unwrap(),
            to_jsonl(&messages, &config).unwrap()
        );
    }

    #[test]
    fn test_write_to_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.csv");
        let err = write_to_format(&sample().messages, &path, OutputFormat::Csv, &OutputConfig::new())
            .unwrap_err();
        assert!(err.is_io());
    }
}
