//! Every statistic for one user selection, computed in one call.
//!
//! [`Report::build`] applies the filter once, then runs each statistic of the
//! [`stats`](crate::stats) module against that single view. The busy-user
//! ranking only makes sense across all authors, so it is present only when
//! the filter is [`UserFilter::All`].
//!
//! # Example
//!
//! ```rust
//! use chatstat::{ChatParser, Report, UserFilter};
//! use chatstat::config::AnalysisConfig;
//!
//! let table = ChatParser::new()
//!     .parse_str("01/01/20, 10:00 - Alice: hi 👋\n01/01/20, 10:05 - Bob: hello")
//!     .table;
//!
//! let overall = Report::build(&table, &UserFilter::All, &AnalysisConfig::default());
//! assert_eq!(overall.summary.messages, 2);
//! assert!(overall.busy_users.is_some());
//!
//! let alice = Report::build(&table, &UserFilter::user("Alice"), &AnalysisConfig::default());
//! assert_eq!(alice.summary.messages, 1);
//! assert!(alice.busy_users.is_none());
//! ```

use serde::Serialize;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::stats::{
    ActivityCount, ActivityHeatmap, BusyUsers, DailyBucket, EmojiCount, MessageStats,
    MonthlyBucket, WordCount, activity_heatmap, daily_timeline, emoji_helper, fetch_stats,
    month_activity_map, monthly_timeline, most_busy_users, most_common_words,
    week_activity_map, wordcloud_corpus,
};
use crate::table::{RecordTable, UserFilter};

/// All statistics for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The selection the report was built for.
    pub user: UserFilter,
    pub summary: MessageStats,
    pub monthly_timeline: Vec<MonthlyBucket>,
    pub daily_timeline: Vec<DailyBucket>,
    pub week_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: ActivityHeatmap,
    /// Present only for [`UserFilter::All`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub wordcloud_corpus: String,
    pub common_words: Vec<WordCount>,
    pub emoji: Vec<EmojiCount>,
}

impl Report {
    /// Computes every statistic for `filter`.
    pub fn build(table: &RecordTable, filter: &UserFilter, config: &AnalysisConfig) -> Self {
        let view = table.view(filter);
        debug!(user = %filter, records = view.len(), "Building report");

        let busy_users = filter
            .is_all()
            .then(|| most_busy_users(&view, config.top_users));

        Self {
            user: filter.clone(),
            summary: fetch_stats(&view, config),
            monthly_timeline: monthly_timeline(&view),
            daily_timeline: daily_timeline(&view),
            week_activity: week_activity_map(&view),
            month_activity: month_activity_map(&view),
            heatmap: activity_heatmap(&view),
            busy_users,
            wordcloud_corpus: wordcloud_corpus(&view, config),
            common_words: most_common_words(&view, config),
            emoji: emoji_helper(&view),
        }
    }

    /// Returns `true` if the selection matched no message.
    pub fn is_empty(&self) -> bool {
        self.summary.messages == 0
    }
}
