//! Emoji frequency.
//!
//! Messages are scanned one code point at a time. A code point counts as an
//! emoji when Unicode marks it `Extended_Pictographic`, `Emoji_Modifier`
//! (skin tones) or `Regional_Indicator` (flag halves). Joiners and variation
//! selectors are not counted, so a multi-code-point sequence contributes each
//! of its pictographs separately.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::Tally;
use crate::table::TableView;

static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Extended_Pictographic}\p{Emoji_Modifier}\p{Regional_Indicator}]$")
        .expect("emoji pattern is valid")
});

/// Occurrences of one emoji code point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: char,
    pub count: usize,
}

/// Returns `true` if `c` is an emoji code point.
///
/// ```
/// use chatstat::stats::is_emoji;
///
/// assert!(is_emoji('😂'));
/// assert!(is_emoji('❤'));
/// assert!(!is_emoji('a'));
/// assert!(!is_emoji('#'));
/// ```
pub fn is_emoji(c: char) -> bool {
    if c.is_ascii() {
        return false;
    }
    let mut buf = [0u8; 4];
    EMOJI.is_match(c.encode_utf8(&mut buf))
}

/// Counts every emoji in the view, most frequent first.
///
/// All distinct emoji are returned; ties keep first-seen order.
pub fn emoji_helper(view: &TableView<'_>) -> Vec<EmojiCount> {
    let mut tally = Tally::new();
    for record in view.iter() {
        tally.extend(record.text.chars().filter(|&c| is_emoji(c)));
    }

    tally
        .ranked()
        .into_iter()
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect()
}
