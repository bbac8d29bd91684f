//! Parser entry point.
//!
//! [`ChatParser`] runs the classify → assemble → normalize pipeline over a
//! whole export and returns a [`ParseOutcome`]: the [`RecordTable`] plus
//! [`ParseStats`] describing what was kept and what was lost.
//!
//! # Example
//!
//! ```rust
//! use chatstat::ChatParser;
//!
//! let export = "\
//! 01/01/20, 10:00 - Alice: Happy new year!
//! 01/01/20, 10:01 - Bob: Same to you
//! and many more
//! 01/01/20, 10:02 - Alice added Carol";
//!
//! let outcome = ChatParser::new().parse_str(export);
//! assert_eq!(outcome.table.len(), 3);
//! assert_eq!(outcome.table.records()[1].text, "Same to you\nand many more");
//! assert_eq!(outcome.table.records()[2].author, "group_notification");
//! assert_eq!(outcome.stats.malformed_timestamps, 0);
//! ```
//!
//! # Failure Semantics
//!
//! Malformed individual lines never fail the parse. A message whose timestamp
//! does not name a real calendar instant is left out of the table and counted
//! in [`ParseStats::malformed_timestamps`]. The only hard failures are reading
//! the file and decoding it as UTF-8.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{ChatstatError, Result};
use crate::parsing::{Assembler, LineKind, MessageBlock, Transition, classify_line, normalize};
use crate::record::MessageRecord;
use crate::table::RecordTable;

/// Byte order mark some editors prepend when re-saving an export.
const BOM: char = '\u{feff}';

/// Line boundaries: `\r\n`, `\n`, a lone `\r` (classic Mac exports), the
/// C0/C1 separators and U+2028/U+2029.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]")
        .expect("line break regex is valid")
});

/// Counters collected during one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Physical lines in the input.
    pub lines_total: usize,
    /// Lines that were empty after trimming and were skipped.
    pub blank_lines: usize,
    /// Lines that opened a message.
    pub new_message_lines: usize,
    /// Lines classified as continuations, orphans included.
    pub continuation_lines: usize,
    /// Continuations seen before the first message, discarded.
    pub orphan_lines: usize,
    /// Messages dropped because their timestamp did not parse.
    pub malformed_timestamps: usize,
    /// Records in the resulting table.
    pub records: usize,
}

impl ParseStats {
    /// Percentage of opened messages that were dropped as malformed.
    pub fn loss_ratio(&self) -> f64 {
        if self.new_message_lines == 0 {
            return 0.0;
        }
        self.malformed_timestamps as f64 / self.new_message_lines as f64 * 100.0
    }

    /// Returns `true` if any message was dropped.
    pub fn has_loss(&self) -> bool {
        self.malformed_timestamps > 0
    }
}

/// Result of parsing one export.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Records in input order.
    pub table: RecordTable,
    /// What happened along the way.
    pub stats: ParseStats,
}

/// Parser for `DD/MM/YY, HH:MM - Sender: Message` chat exports.
///
/// The parser is stateless; one instance can parse any number of inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatParser;

impl ChatParser {
    /// Creates a parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses export text already in memory.
    pub fn parse_str(&self, content: &str) -> ParseOutcome {
        let content = content.strip_prefix(BOM).unwrap_or(content);

        let mut stats = ParseStats::default();
        let mut records = Vec::new();
        let mut assembler = Assembler::new();

        for line in split_lines(content) {
            stats.lines_total += 1;

            let line = line.trim();
            if line.is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            let kind = classify_line(line);
            match kind {
                LineKind::NewMessage { .. } => stats.new_message_lines += 1,
                LineKind::Continuation(_) => stats.continuation_lines += 1,
            }

            match assembler.push(kind) {
                Transition::Opened(Some(done)) => emit(done, &mut records, &mut stats),
                Transition::Opened(None) | Transition::Appended => {}
                Transition::DroppedOrphan => stats.orphan_lines += 1,
            }
        }

        if let Some(last) = assembler.finish() {
            emit(last, &mut records, &mut stats);
        }

        stats.records = records.len();

        if stats.has_loss() {
            warn!(
                dropped = stats.malformed_timestamps,
                kept = stats.records,
                "Dropped {} message(s) with malformed timestamps ({:.2}%)",
                stats.malformed_timestamps,
                stats.loss_ratio()
            );
        }
        if stats.orphan_lines > 0 {
            debug!(
                orphans = stats.orphan_lines,
                "Skipped lines before the first message"
            );
        }
        info!(
            records = stats.records,
            lines = stats.lines_total,
            "Parsed chat export"
        );

        ParseOutcome {
            table: RecordTable::from_records(records),
            stats,
        }
    }

    /// Parses raw bytes, which must be UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Utf8`] if the bytes are not valid UTF-8.
    pub fn parse_bytes(&self, bytes: Vec<u8>) -> Result<ParseOutcome> {
        let content =
            String::from_utf8(bytes).map_err(|e| ChatstatError::utf8("chat export", e))?;
        Ok(self.parse_str(&content))
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Io`] if the file cannot be read and
    /// [`ChatstatError::Utf8`] if its content is not UTF-8.
    pub fn parse_path(&self, path: &Path) -> Result<ParseOutcome> {
        debug!(path = %path.display(), "Reading chat export");
        let bytes = fs::read(path)?;
        self.parse_bytes(bytes)
    }
}

/// Splits on every [`LINE_BREAK`]; a trailing break does not yield an empty
/// last line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(content).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

fn emit(block: MessageBlock, records: &mut Vec<MessageRecord>, stats: &mut ParseStats) {
    match normalize(block) {
        Ok(record) => records.push(record),
        Err(err) => {
            stats.malformed_timestamps += 1;
            debug!(%err, "Dropping message");
        }
    }
}
