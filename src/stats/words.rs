//! Word statistics.
//!
//! Both functions here skip group notifications and media placeholders, so
//! system text like "added" or "omitted" never dominates the result.

use serde::Serialize;

use super::Tally;
use crate::config::AnalysisConfig;
use crate::record::MessageRecord;
use crate::table::TableView;

/// Occurrences of one lowercased word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

fn is_human_text(record: &MessageRecord, config: &AnalysisConfig) -> bool {
    !record.is_group_notification() && !record.is_media(&config.media_placeholder)
}

/// Joins the texts of human messages with single spaces.
///
/// The result feeds an external word-cloud renderer.
pub fn wordcloud_corpus(view: &TableView<'_>, config: &AnalysisConfig) -> String {
    let texts: Vec<&str> = view
        .iter()
        .filter(|r| is_human_text(r, config))
        .map(|r| r.text.as_str())
        .collect();
    texts.join(" ")
}

/// Ranks the `config.top_words` most frequent words, most frequent first.
///
/// Words are lowercased whitespace-separated tokens. Stop words and tokens
/// containing `http` are ignored. Ties keep the order in which the words were
/// first encountered.
pub fn most_common_words(view: &TableView<'_>, config: &AnalysisConfig) -> Vec<WordCount> {
    let mut tally = Tally::new();

    for record in view.iter().filter(|r| is_human_text(r, config)) {
        let lowered = record.text.to_lowercase();
        tally.extend(
            lowered
                .split_whitespace()
                .filter(|word| !word.contains("http") && !config.stop_words.contains(word))
                .map(str::to_string),
        );
    }

    tally
        .ranked()
        .into_iter()
        .take(config.top_words)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StopWords;
    use crate::table::UserFilter;
    use crate::{ChatParser, RecordTable};

    fn table(content: &str) -> RecordTable {
        ChatParser::new().parse_str(content).table
    }

    const CHAT: &str = "\
01/01/20, 10:00 - Alice added Bob
01/01/20, 10:01 - Alice: The cat and THE dog
01/01/20, 10:02 - Bob: <Media omitted>
01/01/20, 10:03 - Bob: the cat https://cats.example Cat";

    #[test]
    fn test_corpus_excludes_notifications_and_media() {
        let table = table(CHAT);
        let corpus = wordcloud_corpus(&table.view(&UserFilter::All), &AnalysisConfig::default());
        assert_eq!(
            corpus,
            "The cat and THE dog the cat https://cats.example Cat"
        );
    }

    #[test]
    fn test_common_words_lowercase_and_http() {
        let table = table(CHAT);
        let words = most_common_words(&table.view(&UserFilter::All), &AnalysisConfig::default());
        let pairs: Vec<_> = words.iter().map(|w| (w.word.as_str(), w.count)).collect();
        assert_eq!(pairs, vec![("the", 3), ("cat", 3), ("and", 1), ("dog", 1)]);
    }

    #[test]
    fn test_common_words_stop_words() {
        let table = table(CHAT);
        let config = AnalysisConfig::new().with_stop_words(StopWords::from_words(["THE", "and"]));
        let words = most_common_words(&table.view(&UserFilter::All), &config);
        let pairs: Vec<_> = words.iter().map(|w| (w.word.as_str(), w.count)).collect();
        assert_eq!(pairs, vec![("cat", 3), ("dog", 1)]);
    }

    #[test]
    fn test_common_words_top_n() {
        let table = table("01/01/20, 10:00 - A: a b c d e f");
        let config = AnalysisConfig::new().with_top_words(2);
        let words = most_common_words(&table.view(&UserFilter::All), &config);
        let list: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(list, vec!["a", "b"]);
    }

    #[test]
    fn test_common_words_is_idempotent() {
        let table = table(CHAT);
        let view = table.view(&UserFilter::All);
        let config = AnalysisConfig::dashboard();
        assert_eq!(
            most_common_words(&view, &config),
            most_common_words(&view, &config)
        );
    }

    #[test]
    fn test_unknown_user() {
        let table = table(CHAT);
        let view = table.view(&UserFilter::user("Zed"));
        let config = AnalysisConfig::default();
        assert!(wordcloud_corpus(&view, &config).is_empty());
        assert!(most_common_words(&view, &config).is_empty());
    }
}
