//! Author ranking.

use serde::Serialize;

use super::Tally;
use crate::table::TableView;

/// Messages sent by one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub user: String,
    pub messages: usize,
}

/// One author's share of all messages in the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub user: String,
    /// Percentage of messages, rounded to two decimals.
    pub percent: f64,
}

/// Result of [`most_busy_users`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The `top_n` most active authors, busiest first.
    pub ranking: Vec<UserCount>,
    /// Every author with their share, busiest first.
    pub shares: Vec<UserShare>,
}

/// Ranks authors by message count.
///
/// This statistic is meant for the unfiltered view; over a single-user view
/// it degenerates to that user at 100%. Group notifications count as an
/// author like any other.
pub fn most_busy_users(view: &TableView<'_>, top_n: usize) -> BusyUsers {
    let mut tally = Tally::new();
    tally.extend(view.iter().map(|r| r.author.as_str()));

    let total = tally.total();
    let ranked = tally.ranked();

    let shares = ranked
        .iter()
        .map(|&(user, messages)| UserShare {
            user: user.to_string(),
            percent: round2(messages as f64 / total as f64 * 100.0),
        })
        .collect();

    let ranking = ranked
        .into_iter()
        .take(top_n)
        .map(|(user, messages)| UserCount {
            user: user.to_string(),
            messages,
        })
        .collect();

    BusyUsers { ranking, shares }
}

/// Rounds to two decimals, half away from zero on the scaled value, so
/// `0.125` becomes `0.13` (banker's rounding would give `0.12`).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
