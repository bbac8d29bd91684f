//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`setup_logging`] - installs the `tracing` subscriber used by the binary
//!
//! Parsing [`Args`] does not touch the filesystem; [`Args::analysis_config`]
//! loads the stop-word file and validates the numeric limits.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{AnalysisConfig, StopWords};
use crate::error::Result;
use crate::format::OutputFormat;
use crate::table::{OVERALL, UserFilter};

/// Fallback filter when neither `--log-level` nor `RUST_LOG` is usable.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Parse a WhatsApp chat export and print message, activity, word and emoji
/// statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --user Alice
    chatstat chat.txt --list-users
    chatstat chat.txt --records records.csv --report report.json
    chatstat chat.txt --dashboard-stop-words --stop-words extra.txt --top-words 10")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Restrict statistics to one author ("Overall" means everyone)
    #[arg(short, long, value_name = "USER", default_value = OVERALL)]
    pub user: String,

    /// Number of authors in the busiest-users ranking
    #[arg(long, value_name = "N", default_value_t = crate::config::DEFAULT_TOP_USERS)]
    pub top_users: usize,

    /// Number of entries in the common-words ranking
    #[arg(long, value_name = "N", default_value_t = crate::config::DEFAULT_TOP_WORDS)]
    pub top_words: usize,

    /// Newline-delimited stop-word file ('#' starts a comment)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Also ignore the built-in English stop words
    #[arg(long)]
    pub dashboard_stop_words: bool,

    /// Export the selected records to this file
    #[arg(long, value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// Format of the records export (detected from the extension if omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the full report as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Print the selectable users and exit
    #[arg(long)]
    pub list_users: bool,

    /// Log filter, e.g. "debug" or "chatstat=trace" (overrides RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// The user selection as a filter.
    pub fn user_filter(&self) -> UserFilter {
        UserFilter::from_selection(&self.user)
    }

    /// Builds and validates the analysis configuration.
    ///
    /// Reads the stop-word file if one was given.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut stop_words = if self.dashboard_stop_words {
            StopWords::dashboard_defaults()
        } else {
            StopWords::new()
        };
        if let Some(path) = &self.stop_words {
            stop_words = stop_words.union(&StopWords::load(path)?);
        }

        let config = AnalysisConfig::new()
            .with_stop_words(stop_words)
            .with_top_users(self.top_users)
            .with_top_words(self.top_words);
        config.validate()?;
        Ok(config)
    }

    /// Format for the records export: `--format` if given, otherwise the
    /// extension of `--records`.
    pub fn records_format(&self) -> Option<Result<OutputFormat>> {
        let path = self.records.as_ref()?;
        Some(match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_path(path),
        })
    }
}

/// Initialises the global `tracing` subscriber, writing to stderr.
///
/// `level` wins over `RUST_LOG`; an unparsable directive falls back to
/// [`DEFAULT_LOG_LEVEL`].
pub fn setup_logging(level: Option<&str>) {
    let filter = log_filter(level);

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

fn log_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracing_subscriber::filter::LevelFilter;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["chatstat", "chat.txt"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = args(&[]);
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.user_filter(), UserFilter::All);
        assert_eq!(args.top_users, 5);
        assert_eq!(args.top_words, 20);
        assert!(args.records_format().is_none());

        let config = args.analysis_config().unwrap();
        assert!(config.stop_words.is_empty());
    }

    #[test]
    fn test_user_selection() {
        assert_eq!(args(&["-u", "Alice"]).user_filter(), UserFilter::user("Alice"));
        assert_eq!(args(&["--user", "Overall"]).user_filter(), UserFilter::All);
    }

    #[test]
    fn test_records_format_detection() {
        let detected = args(&["--records", "out.jsonl"]).records_format().unwrap();
        assert_eq!(detected.unwrap(), OutputFormat::Jsonl);

        let explicit = args(&["--records", "out.txt", "-f", "csv"])
            .records_format()
            .unwrap();
        assert_eq!(explicit.unwrap(), OutputFormat::Csv);

        let alias = args(&["--records", "out", "--format", "ndjson"])
            .records_format()
            .unwrap();
        assert_eq!(alias.unwrap(), OutputFormat::Jsonl);

        assert!(args(&["--records", "out.txt"]).records_format().unwrap().is_err());
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let err = args(&["--top-words", "0"]).analysis_config().unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_stop_word_file_merged_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# custom\nLol\nbrb").unwrap();
        let path = file.path().to_str().unwrap();

        let config = args(&["--stop-words", path, "--dashboard-stop-words"])
            .analysis_config()
            .unwrap();
        assert!(config.stop_words.contains("lol"));
        assert!(config.stop_words.contains("BRB"));
        assert!(config.stop_words.contains("the"));
    }

    #[test]
    fn test_missing_stop_word_file() {
        let err = args(&["--stop-words", "/nonexistent/stop.txt"])
            .analysis_config()
            .unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_log_filter_from_level() {
        let filter = log_filter(Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = log_filter(Some("chatstat=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_log_filter_invalid_level_falls_back() {
        let filter = log_filter(Some("chatstat=loud"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_unknown_format_rejected_by_clap() {
        assert!(Args::try_parse_from(["chatstat", "chat.txt", "-f", "xml"]).is_err());
    }
}
