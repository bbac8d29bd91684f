//! Block normalization: timestamp parsing and author splitting.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use super::assemble::MessageBlock;
use crate::error::RecordError;
use crate::record::{GROUP_NOTIFICATION, MessageRecord};

/// Separator between sender and text in the first line of a message.
const AUTHOR_SEPARATOR: &str = ": ";

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{2}), ([0-9]{1,2}):([0-9]{2})$")
        .expect("timestamp pattern is valid")
});

/// Parses `D/M/YY, H:MM` (24-hour clock) into a calendar instant.
///
/// Two-digit years are read as `2000 + YY`. Fails when the text does not have
/// that shape or its fields do not name a real date and time.
///
/// # Example
///
/// ```
/// use chatstat::parsing::parse_timestamp;
///
/// let ts = parse_timestamp("31/12/99, 23:59").unwrap();
/// assert_eq!(ts.to_string(), "2099-12-31 23:59:00");
///
/// assert!(parse_timestamp("01/13/20, 10:00").is_err());
/// ```
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, RecordError> {
    let malformed = || RecordError::MalformedTimestamp {
        raw: raw.to_string(),
    };

    let caps = TIMESTAMP.captures(raw).ok_or_else(malformed)?;
    let field = |i: usize| -> Result<u32, RecordError> {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(malformed)
    };

    let day = field(1)?;
    let month = field(2)?;
    let year = 2000 + field(3)? as i32;
    let hour = field(4)?;
    let minute = field(5)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(malformed)
}

/// Splits a message body into `(author, text)`.
///
/// The split happens at the first `": "`. The author is kept verbatim and the
/// text is trimmed. A body without the separator is a system line: the author
/// is [`GROUP_NOTIFICATION`] and the whole trimmed body is the text.
///
/// # Example
///
/// ```
/// use chatstat::parsing::split_author;
///
/// assert_eq!(split_author("Alice: hi: there "), ("Alice", "hi: there"));
/// assert_eq!(split_author("Alice added Bob"), ("group_notification", "Alice added Bob"));
/// ```
pub fn split_author(raw_body: &str) -> (&str, &str) {
    match raw_body.split_once(AUTHOR_SEPARATOR) {
        Some((author, text)) => (author, text.trim()),
        None => (GROUP_NOTIFICATION, raw_body.trim()),
    }
}

/// Turns an assembled block into a record.
///
/// # Errors
///
/// Returns [`RecordError::MalformedTimestamp`] when the block's timestamp does
/// not parse. No partial record is produced.
pub fn normalize(block: MessageBlock) -> Result<MessageRecord, RecordError> {
    let timestamp = parse_timestamp(&block.raw_timestamp)?;
    let (author, text) = split_author(&block.raw_body);
    Ok(MessageRecord::new(timestamp, author, text))
}
