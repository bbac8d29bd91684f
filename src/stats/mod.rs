//! The aggregation engine.
//!
//! Every statistic is a pure function over a [`TableView`](crate::TableView):
//! callers apply the user filter once with
//! [`RecordTable::view`](crate::RecordTable::view) and hand the same view to
//! as many statistics as they need. Functions only read the records and
//! return fresh, owned values.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`fetch_stats`] | message, word, media and link counts |
//! | [`monthly_timeline`] | messages per calendar month, oldest first |
//! | [`daily_timeline`] | messages per day, oldest first |
//! | [`week_activity_map`] | messages per weekday, busiest first |
//! | [`month_activity_map`] | messages per month name, busiest first |
//! | [`activity_heatmap`] | dense weekday x hour matrix |
//! | [`most_busy_users`] | author ranking and share of messages |
//! | [`wordcloud_corpus`] | text for an external word-cloud renderer |
//! | [`most_common_words`] | word frequency ranking |
//! | [`emoji_helper`] | emoji frequency ranking |
//!
//! Rankings order by count, descending; equal counts keep the order in which
//! their keys were first seen in the table.
//!
//! # Example
//!
//! ```rust
//! use chatstat::{ChatParser, UserFilter};
//! use chatstat::config::AnalysisConfig;
//! use chatstat::stats::{fetch_stats, most_common_words};
//!
//! let table = ChatParser::new()
//!     .parse_str("01/01/20, 10:00 - Alice: hello world\n01/01/20, 10:01 - Bob: hello")
//!     .table;
//! let view = table.view(&UserFilter::All);
//! let config = AnalysisConfig::default();
//!
//! assert_eq!(fetch_stats(&view, &config).words, 3);
//! assert_eq!(most_common_words(&view, &config)[0].word, "hello");
//! ```

mod activity;
mod emoji;
mod summary;
mod timeline;
mod users;
mod words;

use std::collections::HashMap;
use std::hash::Hash;

pub use activity::{
    ActivityCount, ActivityHeatmap, HOURS, activity_heatmap, month_activity_map,
    week_activity_map,
};
pub use emoji::{EmojiCount, emoji_helper, is_emoji};
pub use summary::{MessageStats, fetch_stats};
pub use timeline::{DailyBucket, MonthlyBucket, daily_timeline, monthly_timeline};
pub use users::{BusyUsers, UserCount, UserShare, most_busy_users};
pub use words::{WordCount, most_common_words, wordcloud_corpus};

/// Frequency counter that remembers first-seen order.
///
/// [`Tally::ranked`] sorts stably by descending count, so ties come out in
/// insertion order.
#[derive(Debug)]
pub(crate) struct Tally<K> {
    positions: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub(crate) fn new() -> Self {
        Self {
            positions: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, key: K) {
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub(crate) fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub(crate) fn ranked(self) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for Tally<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}
