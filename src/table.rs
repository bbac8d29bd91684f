//! The record table and its filtered views.
//!
//! [`RecordTable`] owns the parsed records in input order. Statistics never
//! read the table directly: callers first pick a [`UserFilter`] and call
//! [`RecordTable::view`], which applies the filter once and returns a
//! [`TableView`] of borrowed records. Every function in
//! [`stats`](crate::stats) takes that view.
//!
//! # Example
//!
//! ```
//! use chatstat::{ChatParser, UserFilter};
//!
//! let outcome = ChatParser::new().parse_str(
//!     "01/01/20, 10:00 - Alice: hi\n01/01/20, 10:01 - Bob: hey",
//! );
//! let table = outcome.table;
//!
//! assert_eq!(table.view(&UserFilter::All).len(), 2);
//! assert_eq!(table.view(&UserFilter::user("Bob")).len(), 1);
//! assert!(table.view(&UserFilter::user("Nobody")).is_empty());
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::{GROUP_NOTIFICATION, MessageRecord};

/// Selection value meaning "all users", as offered by the user picker.
pub const OVERALL: &str = "Overall";

/// Ordered, read-only collection of parsed records.
///
/// Order is input order. Exports are normally chronological, but the table
/// neither sorts nor validates that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordTable {
    records: Vec<MessageRecord>,
}

impl RecordTable {
    /// Wraps already-normalized records, keeping their order.
    pub fn from_records(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    /// Returns the records as a slice.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Iterates over the records in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct human authors, sorted, without [`GROUP_NOTIFICATION`].
    pub fn users(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.author.as_str())
            .filter(|author| *author != GROUP_NOTIFICATION)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The selections a user picker offers: [`OVERALL`] followed by [`users`](Self::users).
    pub fn user_options(&self) -> Vec<&str> {
        let users = self.users();
        let mut options = Vec::with_capacity(users.len() + 1);
        options.push(OVERALL);
        options.extend(users);
        options
    }

    /// Applies `filter` once and returns the borrowed records that pass it.
    ///
    /// The table is not modified. A filter naming an author that does not
    /// appear in the table yields an empty view.
    pub fn view(&self, filter: &UserFilter) -> TableView<'_> {
        let records = match filter {
            UserFilter::All => self.records.iter().collect(),
            UserFilter::User(name) => self.records.iter().filter(|r| r.author == *name).collect(),
        };

        TableView {
            filter: filter.clone(),
            records,
        }
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<MessageRecord> for RecordTable {
    fn from_iter<I: IntoIterator<Item = MessageRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

/// Which records a statistic is computed over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserFilter {
    /// Every record, including group notifications.
    #[default]
    All,
    /// Only records whose author matches exactly.
    User(String),
}

impl UserFilter {
    /// Filter for a single author.
    pub fn user(name: impl Into<String>) -> Self {
        UserFilter::User(name.into())
    }

    /// Interprets a picker selection: [`OVERALL`] means all users, anything
    /// else is an exact author name.
    pub fn from_selection(selection: &str) -> Self {
        if selection == OVERALL {
            UserFilter::All
        } else {
            UserFilter::User(selection.to_string())
        }
    }

    /// Returns `true` for [`UserFilter::All`].
    pub fn is_all(&self) -> bool {
        matches!(self, UserFilter::All)
    }
}

impl From<&str> for UserFilter {
    fn from(selection: &str) -> Self {
        Self::from_selection(selection)
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserFilter::All => write!(f, "{OVERALL}"),
            UserFilter::User(name) => write!(f, "{name}"),
        }
    }
}

/// Borrowed, filtered slice of a [`RecordTable`].
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    filter: UserFilter,
    records: Vec<&'a MessageRecord>,
}

impl<'a> TableView<'a> {
    /// The filter this view was built with.
    pub fn filter(&self) -> &UserFilter {
        &self.filter
    }

    /// Iterates over the selected records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'a MessageRecord> + '_ {
        self.records.iter().copied()
    }

    /// Number of selected records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no record passed the filter.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
