//! Configuration for the aggregation engine.
//!
//! Configuration is an explicit value passed into every statistic that needs
//! it; nothing is read from process-wide state.
//!
//! - [`AnalysisConfig`] - ranking sizes, stop words and the media placeholder
//! - [`StopWords`] - case-insensitive set of words ignored by word rankings
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, StopWords};
//!
//! let config = AnalysisConfig::new()
//!     .with_top_users(3)
//!     .with_top_words(10)
//!     .with_stop_words(StopWords::from_words(["the", "And"]));
//!
//! assert!(config.stop_words.contains("and"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatError, Result};
use crate::record::MEDIA_OMITTED;

/// Default number of authors in the busy-user ranking.
pub const DEFAULT_TOP_USERS: usize = 5;

/// Default number of words in the common-word ranking.
pub const DEFAULT_TOP_WORDS: usize = 20;

/// The stop-word list the chat dashboard ships with.
const DASHBOARD_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "to", "of", "and", "for", "in", "on", "this", "that", "with",
    "as", "be", "by", "or", "it", "at", "from", "you", "your", "https", "media", "omitted",
];

/// A set of words excluded from word rankings.
///
/// Words are stored lowercased, and lookups lowercase their argument, so
/// matching is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from any list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The stop-word list of the chat dashboard.
    pub fn dashboard_defaults() -> Self {
        Self::from_words(DASHBOARD_STOP_WORDS)
    }

    /// Parses a newline-delimited list. Blank lines and lines starting with
    /// `#` are ignored.
    pub fn parse_list(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Loads a newline-delimited list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidConfig`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ChatstatError::invalid_config(format!(
                "cannot read stop words from {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::parse_list(&content))
    }

    /// Returns `true` if `word` is a stop word, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        let lowered = word.to_lowercase();
        lowered != word && self.words.contains(&lowered)
    }

    /// Adds every word of `other` to this set.
    #[must_use]
    pub fn union(mut self, other: &StopWords) -> Self {
        self.words.extend(other.words.iter().cloned());
        self
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for StopWords {
    fn from(words: Vec<String>) -> Self {
        Self::from_words(words)
    }
}

impl From<StopWords> for Vec<String> {
    fn from(stop_words: StopWords) -> Self {
        let mut words: Vec<String> = stop_words.words.into_iter().collect();
        words.sort();
        words
    }
}

/// Settings consumed by the aggregation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Words ignored by [`most_common_words`](crate::stats::most_common_words) (default: empty)
    pub stop_words: StopWords,

    /// Length of the busy-user ranking (default: 5)
    pub top_users: usize,

    /// Length of the common-word ranking (default: 20)
    pub top_words: usize,

    /// Body that marks an omitted attachment (default: `<Media omitted>`)
    pub media_placeholder: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWords::new(),
            top_users: DEFAULT_TOP_USERS,
            top_words: DEFAULT_TOP_WORDS,
            media_placeholder: MEDIA_OMITTED.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the configuration the chat dashboard uses, with its stop words.
    pub fn dashboard() -> Self {
        Self {
            stop_words: StopWords::dashboard_defaults(),
            ..Self::default()
        }
    }

    /// Sets the stop words.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Sets the length of the busy-user ranking.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the length of the common-word ranking.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the media placeholder body.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Checks that the ranking sizes are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidConfig`] when a ranking size is zero or
    /// the media placeholder is empty.
    pub fn validate(&self) -> Result<()> {
        if self.top_users == 0 {
            return Err(ChatstatError::invalid_config("top_users must be at least 1"));
        }
        if self.top_words == 0 {
            return Err(ChatstatError::invalid_config("top_words must be at least 1"));
        }
        if self.media_placeholder.is_empty() {
            return Err(ChatstatError::invalid_config(
                "media_placeholder must not be empty",
            ));
        }
        Ok(())
    }
}
