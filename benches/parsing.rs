//! Benchmarks for chatstats parsing and analysis.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- emoji`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstats::config::{AnalyzerConfig, DateOrder, OutputConfig};
use chatstats::core::emoji::{EmojiClassifier, UnicodeEmoji, emoji_frequencies, emoji_matrix};
use chatstats::core::output::{to_csv, to_jsonl, to_report_json};
use chatstats::core::timestamp::normalize;
use chatstats::parser::LineParser;
use chatstats::{ChatAnalysis, analyze};

// =============================================================================
// Test Data Generators
// =============================================================================

const BODIES: &[&str] = &[
    "Message number {} 😂",
    "ok",
    "<Media omitted>",
    "Привет, как дела? 👍🏽 #{}",
    "see you at 7 🇰🇿🎉🎉",
    "no emoji here, just a slightly longer line of text number {}",
];

fn generate_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let author = match i % 3 {
            0 => "Alice",
            1 => "Bob",
            _ => "Carol",
        };
        let day = (i / 500) % 28 + 1;
        let minute_of_day = i % 720;
        let hour = minute_of_day / 60 + 1;
        let meridiem = if i % 2 == 0 { "am" } else { "pm" };
        let body = BODIES[i % BODIES.len()].replace("{}", &i.to_string());
        lines.push(format!(
            "1/{}/24, {}:{:02}\u{202f}{} - {}: {}",
            day,
            hour,
            minute_of_day % 60,
            meridiem,
            author,
            body
        ));
    }
    lines.join("\n")
}

fn generate_analysis(count: usize) -> ChatAnalysis {
    analyze(&generate_export(count), &AnalyzerConfig::default())
}

// =============================================================================
// Stage Benchmarks
// =============================================================================

fn bench_line_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_parsing");
    let parser = LineParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let text = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(parser.parse(black_box(text))));
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let parser = LineParser::new();

    for size in [1_000_usize, 10_000, 50_000] {
        let lines = parser.parse(&generate_export(size)).lines;
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| black_box(normalize(lines.clone(), DateOrder::MonthFirst)));
        });
    }
    group.finish();
}

fn bench_emoji_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("emoji_extraction");
    let text = "family 👨‍👩‍👧‍👦 flags 🇰🇿🇺🇸 tones 👍🏽👍🏿 keycaps 1️⃣#️⃣ plain text Привет ".repeat(20);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("unicode_emoji", |b| {
        b.iter(|| black_box(UnicodeEmoji.extract(black_box(&text))));
    });
    group.finish();
}

fn bench_emoji_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("emoji_tables");

    for size in [1_000_usize, 10_000] {
        let analysis = generate_analysis(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("frequencies", size),
            &analysis.messages,
            |b, messages| b.iter(|| black_box(emoji_frequencies(black_box(messages)))),
        );
        group.bench_with_input(
            BenchmarkId::new("matrix", size),
            &analysis.messages,
            |b, messages| b.iter(|| black_box(emoji_matrix(black_box(messages)))),
        );
    }
    group.finish();
}

fn bench_author_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("author_stats");

    for size in [1_000_usize, 10_000, 50_000] {
        let analysis = generate_analysis(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &analysis, |b, analysis| {
            b.iter(|| {
                black_box(analysis.author_stats());
                black_box(analysis.top_days());
                black_box(analysis.weekday_distribution())
            });
        });
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let config = OutputConfig::all();

    for size in [100_usize, 1_000, 10_000] {
        let analysis = generate_analysis(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("csv", size), &analysis, |b, analysis| {
            b.iter(|| black_box(to_csv(black_box(&analysis.messages), &config).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("jsonl", size), &analysis, |b, analysis| {
            b.iter(|| black_box(to_jsonl(black_box(&analysis.messages), &config).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("report", size), &analysis, |b, analysis| {
            b.iter(|| black_box(to_report_json(black_box(analysis)).unwrap()));
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let config = AnalyzerConfig::default();

    for size in [1_000_usize, 10_000, 50_000] {
        let text = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(analyze(black_box(text), &config)));
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_line_parsing,
    bench_normalize,
    bench_emoji_extraction,
    bench_emoji_tables,
    bench_author_stats,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
