//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatstats::cli::Args;
use chatstats::core::output::{write_emoji_csv, write_emoji_matrix_csv, write_report_json};
use chatstats::core::{AuthorStats, ChatAnalysis, analyze_file};
use chatstats::format::{OutputFormat, write_to_format};
use chatstats::logging::init_logging;
use chatstats::{ChatstatsError, LineIssue};

/// How many emojis and dropped lines to list on screen.
const SHOWN_ROWS: usize = 5;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    let analyzer_config = args.analyzer_config()?;
    let output_config = args.output_config();
    let format: OutputFormat = args.format.into();
    let output_path = args.output_path();

    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", output_path.display());
    println!("📄 Format:  {}", format);
    println!("📅 Dates:   {}", analyzer_config.date_order);
    if analyzer_config.reattach_continuations {
        println!("🔗 Continuation lines are reattached");
    }
    println!();

    println!("⏳ Analyzing...");
    let analysis_start = Instant::now();
    let analysis = analyze_file(&args.input, &analyzer_config)?;
    let analysis_time = analysis_start.elapsed();
    print_parse_summary(&analysis);
    println!("   Done in {:.2}s", analysis_time.as_secs_f64());

    if analysis.is_empty() {
        println!();
        println!("⚠️  No messages found. Is this a chat export?");
    } else {
        print_authors(&analysis.author_stats());
        print_emojis(&analysis);
        print_activity(&analysis);
    }

    println!();
    println!("💾 Writing {}...", format);
    let write_start = Instant::now();
    write_to_format(&analysis.messages, &output_path, format, &output_config)?;

    if let Some(path) = &args.report {
        write_report_json(&analysis, path)?;
        println!("   Report:     {}", path.display());
    }
    if let Some(path) = &args.emoji_out {
        write_emoji_csv(&analysis.emoji_counts, path)?;
        println!("   Emojis:     {}", path.display());
    }
    if let Some(path) = &args.emoji_matrix_out {
        write_emoji_matrix_csv(&analysis.emoji_by_author, path)?;
        println!("   Emoji grid: {}", path.display());
    }
    if let Some(path) = &args.wordcloud_out {
        std::fs::write(path, &analysis.word_cloud_text)?;
        println!("   Word cloud: {}", path.display());
    }
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output_path.display());

    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let lines_per_sec = analysis.report.total_lines as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} lines/sec", lines_per_sec);

    Ok(())
}

fn print_parse_summary(analysis: &ChatAnalysis) {
    let report = &analysis.report;
    println!(
        "   Found {} messages in {} lines ({} media)",
        report.messages, report.total_lines, report.media_messages
    );
    if report.reattached_lines > 0 {
        println!("   Reattached {} continuation lines", report.reattached_lines);
    }
    if !report.issues.is_empty() {
        println!(
            "   Dropped {} unparseable lines, {} malformed timestamps",
            report.unparseable_lines(),
            report.malformed_timestamps()
        );
        let malformed = report
            .issues
            .iter()
            .filter(|i| matches!(i, LineIssue::MalformedTimestamp { .. }));
        for issue in malformed.take(SHOWN_ROWS) {
            println!("   ⚠️  {}", issue);
        }
    }
}

fn format_latency(seconds: Option<f64>) -> String {
    match seconds {
        None => "no data".to_string(),
        Some(s) if s < 60.0 => format!("{:.0}s", s),
        Some(s) if s < 3600.0 => format!("{:.1}m", s / 60.0),
        Some(s) => format!("{:.1}h", s / 3600.0),
    }
}

fn print_authors(stats: &[AuthorStats]) {
    println!();
    println!("👥 Authors:");
    for s in stats {
        println!(
            "   {:<20} {:>6} msgs  {:>5.1} words/msg  {:>6.1} letters/msg  {:>4} emojis  avg reply {}",
            s.author,
            s.message_count,
            s.words_per_message,
            s.letters_per_message,
            s.emoji_count,
            format_latency(s.average_response_seconds)
        );
    }
}

fn print_emojis(analysis: &ChatAnalysis) {
    if analysis.emoji_counts.is_empty() {
        return;
    }
    println!();
    println!("😀 Top emojis:");
    for row in analysis.emoji_counts.iter().take(SHOWN_ROWS) {
        println!("   {}  {}", row.emoji, row.count);
    }
}

fn print_activity(analysis: &ChatAnalysis) {
    println!();
    println!("📅 Busiest days:");
    for day in analysis.top_days() {
        println!("   {}  {}", day.date, day.count);
    }

    println!();
    println!("🗓️  By weekday:");
    for day in analysis.weekday_distribution() {
        println!("   {:<10} {}", day.name(), day.count);
    }
}
