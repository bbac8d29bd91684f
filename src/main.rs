//! # chatstat CLI
//!
//! Command-line front end for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatstat::cli::{Args, setup_logging};
use chatstat::format::write_to_format;
use chatstat::output::write_report_json;
use chatstat::parser::ParseStats;
use chatstat::{ChatParser, ChatstatError, Report};

/// Entries shown per ranking in the terminal summary.
const SHOWN: usize = 5;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    setup_logging(args.log_level.as_deref());

    let config = args.analysis_config()?;
    let records_format = args.records_format().transpose()?;
    let filter = args.user_filter();

    println!("📊 chatstat v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("👤 User:    {}", filter);
    println!();

    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let outcome = ChatParser::new().parse_path(&args.input)?;
    print_parse_stats(&outcome.stats, parse_start.elapsed().as_secs_f64());
    let table = outcome.table;

    if args.list_users {
        println!();
        println!("👥 Users:");
        for option in table.user_options() {
            println!("   {}", option);
        }
        return Ok(());
    }

    let report = Report::build(&table, &filter, &config);
    println!();
    if report.is_empty() {
        println!("⚠️  No messages for {}", filter);
    } else {
        print_report(&report);
    }

    if let (Some(path), Some(format)) = (&args.records, records_format) {
        let view = table.view(&filter);
        println!();
        println!("💾 Writing {} records as {}...", view.len(), format);
        write_to_format(view.iter(), path, format)?;
        println!("   Saved to {}", path.display());
    }

    if let Some(path) = &args.report {
        println!();
        println!("💾 Writing report...");
        write_report_json(&report, path)?;
        println!("   Saved to {}", path.display());
    }

    println!();
    println!(
        "✅ Done in {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_parse_stats(stats: &ParseStats, seconds: f64) {
    println!("   Found {} messages ({:.2}s)", stats.records, seconds);
    if stats.has_loss() {
        println!(
            "   Skipped {} with malformed timestamps ({:.1}%)",
            stats.malformed_timestamps,
            stats.loss_ratio()
        );
    }
    if stats.orphan_lines > 0 {
        println!("   Ignored {} lines before the first message", stats.orphan_lines);
    }
}

fn print_report(report: &Report) {
    let summary = &report.summary;
    println!("📈 Summary:");
    println!("   Messages:  {}", summary.messages);
    println!("   Words:     {}", summary.words);
    println!("   Media:     {}", summary.media);
    println!("   Links:     {}", summary.links);

    if let (Some(first), Some(last)) = (report.daily_timeline.first(), report.daily_timeline.last()) {
        println!(
            "   Active:    {} to {} ({} days, {} months)",
            first.date,
            last.date,
            report.daily_timeline.len(),
            report.monthly_timeline.len()
        );
    }
    if let Some(busiest) = report.week_activity.first() {
        println!("   Busiest day:   {} ({})", busiest.label, busiest.messages);
    }
    if let Some(busiest) = report.month_activity.first() {
        println!("   Busiest month: {} ({})", busiest.label, busiest.messages);
    }
    if let Some((day, hour, messages)) = report.heatmap.peak() {
        println!("   Peak hour:     {} {:02}:00 ({})", day, hour, messages);
    }

    if let Some(busy) = &report.busy_users {
        println!();
        println!("👥 Most active:");
        for (user, share) in busy.ranking.iter().zip(&busy.shares) {
            println!("   {:<24} {:>6} ({:.2}%)", user.user, user.messages, share.percent);
        }
    }

    if !report.common_words.is_empty() {
        println!();
        println!("🔤 Common words:");
        for entry in report.common_words.iter().take(SHOWN) {
            println!("   {:<24} {:>6}", entry.word, entry.count);
        }
    }

    if !report.emoji.is_empty() {
        println!();
        println!("😀 Emoji:");
        let line: Vec<String> = report
            .emoji
            .iter()
            .take(SHOWN)
            .map(|e| format!("{} {}", e.emoji, e.count))
            .collect();
        println!("   {}", line.join("   "));
    }
}
