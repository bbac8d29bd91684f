//! # Chatstat
//!
//! A Rust library for turning WhatsApp chat exports into a table of
//! structured message records and computing statistics over them.
//!
//! ## Overview
//!
//! An export is plain text where every message starts with a line like
//! `DD/MM/YY, HH:MM - Sender: Message`. Lines that don't start that way
//! continue the previous message. Chatstat:
//!
//! 1. Assembles the lines into messages in a single forward pass
//! 2. Normalizes each message into a [`MessageRecord`] with calendar fields
//!    (date, year, month, weekday, hour) derived once
//! 3. Computes statistics over a [`TableView`], the table filtered to one
//!    author or to everyone
//!
//! Lines that cannot be interpreted are never fatal: a message whose
//! timestamp names no real instant is left out and counted in
//! [`ParseStats`](parser::ParseStats).
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! let export = "\
//! 12/03/21, 09:15 - Alice: Morning! ☀️
//! 12/03/21, 09:16 - Bob: <Media omitted>
//! 12/03/21, 09:20 - Alice added Carol
//! 12/03/21, 21:05 - Carol: thanks for adding me
//! see https://example.com";
//!
//! let table = ChatParser::new().parse_str(export).table;
//! assert_eq!(table.users(), vec!["Alice", "Bob", "Carol"]);
//!
//! let view = table.view(&UserFilter::All);
//! let stats = fetch_stats(&view, &AnalysisConfig::default());
//! assert_eq!(stats.messages, 4);
//! assert_eq!(stats.media, 1);
//! assert_eq!(stats.links, 1);
//!
//! // Or everything at once
//! let report = Report::build(&table, &UserFilter::user("Carol"), &AnalysisConfig::dashboard());
//! assert_eq!(report.summary.messages, 1);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ChatParser`], [`ParseOutcome`](parser::ParseOutcome), [`ParseStats`](parser::ParseStats)
//! - [`parsing`] — the pipeline stages: line classification, message assembly, normalization
//! - [`record`] — [`MessageRecord`] and calendar name tables
//! - [`table`] — [`RecordTable`], [`UserFilter`], [`TableView`]
//! - [`stats`] — one function per statistic, all reading a [`TableView`]
//! - [`report`] — [`Report`], every statistic for one selection
//! - [`config`] — [`AnalysisConfig`](config::AnalysisConfig), [`StopWords`](config::StopWords)
//! - [`output`], [`format`] — CSV / JSON / JSONL export
//! - [`cli`] — CLI arguments and logging setup (`cli` feature)
//! - [`error`] — [`ChatstatError`], [`RecordError`](error::RecordError), [`Result`]
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod report;
pub mod stats;
pub mod table;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use parser::ChatParser;
pub use record::MessageRecord;
pub use report::Report;
pub use table::{RecordTable, TableView, UserFilter};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    // Parsing
    pub use crate::parser::{ChatParser, ParseOutcome, ParseStats};

    // Data model
    pub use crate::record::MessageRecord;
    pub use crate::table::{OVERALL, RecordTable, TableView, UserFilter};

    // Error types
    pub use crate::error::{ChatstatError, RecordError, Result};

    // Configuration
    pub use crate::config::{AnalysisConfig, StopWords};

    // Statistics
    pub use crate::report::Report;
    pub use crate::stats::{
        activity_heatmap, daily_timeline, emoji_helper, fetch_stats, month_activity_map,
        monthly_timeline, most_busy_users, most_common_words, week_activity_map,
        wordcloud_corpus,
    };

    // Output
    pub use crate::format::OutputFormat;
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl, write_report_json};
}
