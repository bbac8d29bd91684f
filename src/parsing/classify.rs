//! Line classification for the `DD/MM/YY, HH:MM - ` export format.
//!
//! Only one grammar is recognized:
//!
//! ```text
//! 15/01/24, 10:30 - Alice: Hello
//! 1/2/20, 9:05 - Alice added Bob
//! ```
//!
//! Day and month take one or two digits, the year exactly two, the hour one or
//! two, the minute exactly two, followed by the literal `" - "`. Anything else
//! (four-digit years, `AM`/`PM`, bracketed iOS exports, dotted dates) is a
//! continuation of the previous message.

use std::sync::LazyLock;

use regex::Regex;

/// Start-of-message grammar. Group 1 is the raw timestamp, group 2 the rest.
static MESSAGE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2}/[0-9]{1,2}/[0-9]{2}, [0-9]{1,2}:[0-9]{2}) - (.*)$")
        .expect("message start pattern is valid")
});

/// Classification of one trimmed, non-blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// The line opens a new message.
    NewMessage {
        /// Text before the first `" - "`, e.g. `"15/01/24, 10:30"`.
        raw_timestamp: &'a str,
        /// Everything after the first `" - "`, verbatim.
        remainder: &'a str,
    },
    /// The line belongs to the message opened before it.
    Continuation(&'a str),
}

impl LineKind<'_> {
    /// Returns `true` for [`LineKind::NewMessage`].
    pub fn is_new_message(&self) -> bool {
        matches!(self, LineKind::NewMessage { .. })
    }
}

/// Classifies a single line.
///
/// The caller is expected to trim the line and drop blank lines first; a
/// blank line passed here is reported as a continuation.
///
/// # Example
///
/// ```
/// use chatstat::parsing::{LineKind, classify_line};
///
/// assert_eq!(
///     classify_line("01/01/20, 10:00 - Alice: hi"),
///     LineKind::NewMessage { raw_timestamp: "01/01/20, 10:00", remainder: "Alice: hi" },
/// );
/// assert_eq!(classify_line("second line"), LineKind::Continuation("second line"));
/// ```
pub fn classify_line(line: &str) -> LineKind<'_> {
    match MESSAGE_START.captures(line) {
        Some(caps) => {
            let raw_timestamp = caps.get(1).map_or("", |m| m.as_str());
            let remainder = caps.get(2).map_or("", |m| m.as_str());
            LineKind::NewMessage {
                raw_timestamp,
                remainder,
            }
        }
        None => LineKind::Continuation(line),
    }
}
