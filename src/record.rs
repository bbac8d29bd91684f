//! Canonical message record.
//!
//! This module provides [`MessageRecord`], the normalized unit of the
//! [`RecordTable`](crate::RecordTable). The parser produces one record per
//! message whose leading timestamp could be parsed; everything downstream
//! reads these records and nothing else.
//!
//! # Derived Fields
//!
//! Calendar labels used for grouping are computed once, in
//! [`MessageRecord::new`], and stored alongside the timestamp:
//!
//! | Field | Example |
//! |-------|---------|
//! | `date` | `2020-01-01` |
//! | `year` / `month_num` / `hour` / `minute` | `2020` / `1` / `10` / `5` |
//! | `weekday` | `Weekday::Wed` |
//! | `day_name` | `"Wednesday"` |
//! | `month_name` | `"January"` |
//!
//! # Example
//!
//! ```
//! use chatstat::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2020, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 5, 0)
//!     .unwrap();
//! let record = MessageRecord::new(ts, "Alice", "Happy new year!");
//!
//! assert_eq!(record.day_name, "Wednesday");
//! assert_eq!(record.month_name, "January");
//! assert!(!record.is_group_notification());
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// Author assigned to system lines that carry no `"<sender>: "` prefix,
/// such as "Alice added Bob" or the end-to-end encryption notice.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Body WhatsApp writes in place of an attachment when exporting without media.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// English weekday names, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A fully normalized chat message.
///
/// Records are immutable once built: the fields are public for reading, and
/// the table only ever hands out shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    /// Minute-precision local time of the message, no timezone.
    pub timestamp: NaiveDateTime,

    /// Calendar date of `timestamp`, used for daily grouping.
    pub date: NaiveDate,

    /// Four-digit year.
    pub year: i32,

    /// Month number, 1 to 12.
    pub month_num: u32,

    /// Hour of day, 0 to 23.
    pub hour: u32,

    /// Minute of hour, 0 to 59.
    pub minute: u32,

    /// Day of week of `timestamp`.
    #[serde(skip)]
    pub weekday: Weekday,

    /// English day name, e.g. `"Monday"`.
    pub day_name: &'static str,

    /// English month name, e.g. `"January"`.
    pub month_name: &'static str,

    /// Sender, or [`GROUP_NOTIFICATION`] for system lines.
    pub author: String,

    /// Message body with surrounding whitespace stripped.
    ///
    /// May contain newlines for multi-line messages.
    pub text: String,
}

impl MessageRecord {
    /// Builds a record, computing every derived calendar field from `timestamp`.
    ///
    /// Seconds are discarded so that all records share minute precision.
    pub fn new(timestamp: NaiveDateTime, author: impl Into<String>, text: impl Into<String>) -> Self {
        let timestamp = timestamp.with_second(0).unwrap_or(timestamp);
        let weekday = timestamp.weekday();
        let month_num = timestamp.month();

        Self {
            timestamp,
            date: timestamp.date(),
            year: timestamp.year(),
            month_num,
            hour: timestamp.hour(),
            minute: timestamp.minute(),
            weekday,
            day_name: day_name(weekday),
            month_name: month_name(month_num),
            author: author.into(),
            text: text.into(),
        }
    }

    /// Returns `true` if this record is a system notification without a sender.
    pub fn is_group_notification(&self) -> bool {
        self.author == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is exactly the given media placeholder.
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.text == placeholder
    }

    /// Returns `true` if the body mentions a link.
    pub fn has_link(&self) -> bool {
        self.text.contains("http")
    }
}

/// English name for a weekday.
pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// English name for a month number (1 to 12).
///
/// Out-of-range numbers are clamped; chrono never yields them for a valid date.
pub fn month_name(month_num: u32) -> &'static str {
    let index = month_num.clamp(1, 12) - 1;
    MONTH_NAMES[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let record = MessageRecord::new(at(2024, 2, 29, 23, 59), "Bob", "leap day");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(record.year, 2024);
        assert_eq!(record.month_num, 2);
        assert_eq!(record.hour, 23);
        assert_eq!(record.minute, 59);
        assert_eq!(record.weekday, Weekday::Thu);
        assert_eq!(record.day_name, "Thursday");
        assert_eq!(record.month_name, "February");
    }

    #[test]
    fn test_seconds_discarded() {
        let ts = NaiveDate::from_ymd_opt(2020, 5, 1)
            .unwrap()
            .and_hms_opt(8, 30, 45)
            .unwrap();
        let record = MessageRecord::new(ts, "A", "x");
        assert_eq!(record.timestamp, at(2020, 5, 1, 8, 30));
    }

    #[test]
    fn test_group_notification() {
        let record = MessageRecord::new(at(2020, 1, 1, 0, 0), GROUP_NOTIFICATION, "Alice added Bob");
        assert!(record.is_group_notification());
        let record = MessageRecord::new(at(2020, 1, 1, 0, 0), "Alice", "hi");
        assert!(!record.is_group_notification());
    }

    #[test]
    fn test_media_and_links() {
        let media = MessageRecord::new(at(2020, 1, 1, 0, 0), "A", MEDIA_OMITTED);
        assert!(media.is_media(MEDIA_OMITTED));
        assert!(!media.has_link());

        let link = MessageRecord::new(at(2020, 1, 1, 0, 0), "A", "see https://example.com");
        assert!(link.has_link());
        assert!(!link.is_media(MEDIA_OMITTED));
    }

    #[test]
    fn test_name_tables() {
        assert_eq!(day_name(Weekday::Mon), "Monday");
        assert_eq!(day_name(Weekday::Sun), "Sunday");
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }
}
