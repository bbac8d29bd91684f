//! Integration tests for the parse → view → statistics pipeline.

use chatstat::prelude::*;
use chatstat::record::GROUP_NOTIFICATION;
use chatstat::stats::ActivityHeatmap;
use chrono::{NaiveDate, Weekday};
use std::fs;
use tempfile::tempdir;

/// A small but realistic group export.
///
/// 10/01/21 is a Sunday, 11/01/21 a Monday.
const GROUP_CHAT: &str = "\
10/01/21, 19:02 - Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
10/01/21, 19:02 - Alice created group \"Weekend\"
10/01/21, 19:03 - Alice added Bob
10/01/21, 19:05 - Alice: Welcome! Plans for Saturday?
10/01/21, 19:07 - Bob: Hiking maybe 🥾
or the lake
depends on weather ☀️
10/01/21, 19:08 - Bob: <Media omitted>
11/01/21, 08:30 - Carol: Morning! Found this https://trails.example/route-7
11/01/21, 08:31 - Alice: The lake sounds great 😂😂
11/01/21, 08:31 - Alice: the LAKE it is
02/02/21, 21:45 - Bob: Photos from Saturday
02/02/21, 21:45 - Bob: <Media omitted>
02/02/21, 21:46 - Bob: <Media omitted>
02/02/21, 21:50 - Carol left";

fn parse(content: &str) -> ParseOutcome {
    ChatParser::new().parse_str(content)
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_parse_group_chat_records() {
    let outcome = parse(GROUP_CHAT);
    let table = &outcome.table;

    assert_eq!(table.len(), 13);
    assert_eq!(outcome.stats.new_message_lines, 13);
    assert_eq!(outcome.stats.continuation_lines, 2);
    assert_eq!(outcome.stats.malformed_timestamps, 0);
    assert_eq!(outcome.stats.records, 13);

    let multi = &table.records()[4];
    assert_eq!(multi.author, "Bob");
    assert_eq!(multi.text, "Hiking maybe 🥾\nor the lake\ndepends on weather ☀️");
    assert_eq!(multi.date, NaiveDate::from_ymd_opt(2021, 1, 10).unwrap());
    assert_eq!(multi.weekday, Weekday::Sun);
    assert_eq!(multi.day_name, "Sunday");
    assert_eq!(multi.month_name, "January");
    assert_eq!((multi.hour, multi.minute), (19, 7));

    let notifications: Vec<_> = table
        .iter()
        .filter(|r| r.author == GROUP_NOTIFICATION)
        .map(|r| r.text.as_str())
        .collect();
    assert_eq!(
        notifications,
        vec![
            "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
            "Alice created group \"Weekend\"",
            "Alice added Bob",
            "Carol left",
        ]
    );
}

#[test]
fn test_records_keep_input_order() {
    let outcome = parse(
        "05/05/21, 12:00 - A: later\n\
         01/01/21, 12:00 - B: earlier",
    );
    let texts: Vec<_> = outcome.table.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["later", "earlier"]);
}

#[test]
fn test_parse_path_matches_parse_str() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    fs::write(&path, GROUP_CHAT).unwrap();

    let from_file = ChatParser::new().parse_path(&path).unwrap();
    assert_eq!(from_file.table, parse(GROUP_CHAT).table);
    assert_eq!(from_file.stats, parse(GROUP_CHAT).stats);
}

#[test]
fn test_parse_path_missing_file() {
    let err = ChatParser::new()
        .parse_path("/nonexistent/chat.txt".as_ref())
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_parse_bytes_invalid_utf8() {
    let mut bytes = b"01/01/20, 10:00 - A: hi ".to_vec();
    bytes.push(0xff);
    let err = ChatParser::new().parse_bytes(bytes).unwrap_err();
    assert!(err.is_utf8());
}

// =========================================================================
// Users and views
// =========================================================================

#[test]
fn test_users_and_options() {
    let table = parse(GROUP_CHAT).table;
    assert_eq!(table.users(), vec!["Alice", "Bob", "Carol"]);
    assert_eq!(table.user_options(), vec![OVERALL, "Alice", "Bob", "Carol"]);
}

#[test]
fn test_views_partition_table() {
    let table = parse(GROUP_CHAT).table;

    let all = table.view(&UserFilter::All);
    assert_eq!(all.len(), table.len());

    let per_user: usize = table
        .users()
        .into_iter()
        .map(|u| table.view(&UserFilter::user(u)).len())
        .sum();
    let notifications = table.view(&UserFilter::user(GROUP_NOTIFICATION)).len();
    assert_eq!(per_user + notifications, table.len());
}

#[test]
fn test_overall_selection_is_all() {
    let table = parse(GROUP_CHAT).table;
    let view = table.view(&UserFilter::from_selection("Overall"));
    assert!(view.filter().is_all());
    assert_eq!(view.len(), table.len());
}

// =========================================================================
// Statistics
// =========================================================================

#[test]
fn test_fetch_stats_overall_and_user() {
    let table = parse(GROUP_CHAT).table;
    let config = AnalysisConfig::default();

    let overall = fetch_stats(&table.view(&UserFilter::All), &config);
    assert_eq!(overall.messages, 13);
    assert_eq!(overall.media, 3);
    assert_eq!(overall.links, 1);

    let bob = fetch_stats(&table.view(&UserFilter::user("Bob")), &config);
    assert_eq!(bob.messages, 5);
    assert_eq!(bob.media, 3);
    assert_eq!(bob.links, 0);
}

#[test]
fn test_timelines() {
    let table = parse(GROUP_CHAT).table;
    let view = table.view(&UserFilter::All);

    let monthly = monthly_timeline(&view);
    let labels: Vec<_> = monthly.iter().map(|m| (m.label.as_str(), m.messages)).collect();
    assert_eq!(labels, vec![("January-2021", 9), ("February-2021", 4)]);

    let daily = daily_timeline(&view);
    let days: Vec<_> = daily.iter().map(|d| (d.date.to_string(), d.messages)).collect();
    assert_eq!(
        days,
        vec![
            ("2021-01-10".to_string(), 6),
            ("2021-01-11".to_string(), 3),
            ("2021-02-02".to_string(), 4),
        ]
    );
}

#[test]
fn test_activity_maps_and_heatmap() {
    let table = parse(GROUP_CHAT).table;
    let view = table.view(&UserFilter::All);

    let week = week_activity_map(&view);
    assert_eq!(week[0].label, "Sunday");
    assert_eq!(week[0].messages, 6);
    assert_eq!(week.iter().map(|w| w.messages).sum::<usize>(), 13);

    let months = month_activity_map(&view);
    assert_eq!(months[0].label, "January");
    assert_eq!(months[1].label, "February");

    let heatmap = activity_heatmap(&view);
    assert_eq!(heatmap.get(Weekday::Sun, 19), 6);
    assert_eq!(heatmap.get(Weekday::Mon, 8), 3);
    assert_eq!(heatmap.get(Weekday::Tue, 21), 4);
    assert_eq!(heatmap.total(), 13);
    assert_eq!(heatmap.peak(), Some(("Sunday", 19, 6)));
}

#[test]
fn test_busy_users_counts_notifications() {
    let table = parse(GROUP_CHAT).table;
    let busy = most_busy_users(&table.view(&UserFilter::All), 2);

    let ranking: Vec<_> = busy.ranking.iter().map(|u| (u.user.as_str(), u.messages)).collect();
    assert_eq!(ranking, vec![("Bob", 5), (GROUP_NOTIFICATION, 4)]);

    assert_eq!(busy.shares.len(), 4);
    let total: f64 = busy.shares.iter().map(|s| s.percent).sum();
    assert!((total - 100.0).abs() < 0.05);
}

#[test]
fn test_words_with_dashboard_stop_words() {
    let table = parse(GROUP_CHAT).table;
    let view = table.view(&UserFilter::All);
    let config = AnalysisConfig::dashboard();

    let corpus = wordcloud_corpus(&view, &config);
    assert!(!corpus.contains("<Media omitted>"));
    assert!(!corpus.contains("end-to-end"));

    let words = most_common_words(&view, &config);
    assert_eq!(words[0].word, "lake");
    assert_eq!(words[0].count, 3);
    assert!(words.iter().all(|w| w.word != "the" && !w.word.contains("http")));
    assert_eq!(words, most_common_words(&view, &config));
}

#[test]
fn test_emoji() {
    let table = parse(GROUP_CHAT).table;
    let emoji = emoji_helper(&table.view(&UserFilter::All));
    let pairs: Vec<_> = emoji.iter().map(|e| (e.emoji, e.count)).collect();
    assert_eq!(pairs, vec![('😂', 2), ('🥾', 1), ('☀', 1)]);
}

// =========================================================================
// Reports
// =========================================================================

#[test]
fn test_report_matches_individual_statistics() {
    let table = parse(GROUP_CHAT).table;
    let config = AnalysisConfig::dashboard();
    let filter = UserFilter::user("Alice");
    let view = table.view(&filter);

    let report = Report::build(&table, &filter, &config);
    assert_eq!(report.summary, fetch_stats(&view, &config));
    assert_eq!(report.monthly_timeline, monthly_timeline(&view));
    assert_eq!(report.common_words, most_common_words(&view, &config));
    assert_eq!(report.emoji, emoji_helper(&view));
    assert!(report.busy_users.is_none());
}

#[test]
fn test_unknown_user_everything_empty() {
    let table = parse(GROUP_CHAT).table;
    let config = AnalysisConfig::dashboard();
    let view = table.view(&UserFilter::user("Mallory"));

    assert!(view.is_empty());
    assert_eq!(fetch_stats(&view, &config).messages, 0);
    assert!(monthly_timeline(&view).is_empty());
    assert!(daily_timeline(&view).is_empty());
    assert!(week_activity_map(&view).is_empty());
    assert!(month_activity_map(&view).is_empty());
    assert_eq!(activity_heatmap(&view), ActivityHeatmap::default());
    assert!(most_busy_users(&view, 5).shares.is_empty());
    assert!(wordcloud_corpus(&view, &config).is_empty());
    assert!(most_common_words(&view, &config).is_empty());
    assert!(emoji_helper(&view).is_empty());
}

#[test]
fn test_table_shared_across_threads() {
    let table = parse(GROUP_CHAT).table;
    let config = AnalysisConfig::dashboard();

    let (words, emoji) = std::thread::scope(|s| {
        let words = s.spawn(|| most_common_words(&table.view(&UserFilter::All), &config));
        let emoji = s.spawn(|| emoji_helper(&table.view(&UserFilter::All)));
        (words.join().unwrap(), emoji.join().unwrap())
    });

    assert_eq!(words, most_common_words(&table.view(&UserFilter::All), &config));
    assert_eq!(emoji.len(), 3);
}
