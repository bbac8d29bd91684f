//! Headline counters.

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::table::TableView;

/// The four headline numbers of a chat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MessageStats {
    /// Number of records.
    pub messages: usize,
    /// Whitespace-separated tokens across all texts.
    pub words: usize,
    /// Records whose text is exactly the media placeholder.
    pub media: usize,
    /// Records whose text contains `http`.
    pub links: usize,
}

/// Counts messages, words, omitted media and links.
pub fn fetch_stats(view: &TableView<'_>, config: &AnalysisConfig) -> MessageStats {
    view.iter().fold(MessageStats::default(), |mut acc, record| {
        acc.messages += 1;
        acc.words += record.text.split_whitespace().count();
        if record.is_media(&config.media_placeholder) {
            acc.media += 1;
        }
        if record.has_link() {
            acc.links += 1;
        }
        acc
    })
}
