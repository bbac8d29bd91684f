//! Message assembly state machine.
//!
//! ```text
//!                 NewMessage                 NewMessage (flush + open)
//! AwaitingFirst ─────────────► Accumulating ◄──────────┐
//!      │                          │   │                │
//!      │ Continuation (drop)      │   └────────────────┘
//!      ▼                          │   Continuation (append)
//! AwaitingFirst                   ▼
//!                          finish(): flush last block
//! ```
//!
//! The assembler only groups text. It neither parses timestamps nor splits
//! authors; that is [`normalize`](super::normalize)'s job.

use super::classify::LineKind;

/// One logical message before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBlock {
    /// Timestamp text from the opening line.
    pub raw_timestamp: String,
    /// Opening line's remainder plus every continuation line, joined with `'\n'`.
    pub raw_body: String,
}

impl MessageBlock {
    fn open(raw_timestamp: &str, remainder: &str) -> Self {
        Self {
            raw_timestamp: raw_timestamp.to_string(),
            raw_body: remainder.to_string(),
        }
    }

    fn append(&mut self, line: &str) {
        self.raw_body.push('\n');
        self.raw_body.push_str(line);
    }
}

/// What feeding one line did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A new block was opened. Carries the previously open block, now
    /// complete, if there was one.
    Opened(Option<MessageBlock>),
    /// The line was appended to the open block.
    Appended,
    /// A continuation arrived before any message and was discarded.
    DroppedOrphan,
}

#[derive(Debug, Default)]
enum AssemblerState {
    #[default]
    AwaitingFirstMessage,
    Accumulating(MessageBlock),
}

/// Groups classified lines into [`MessageBlock`]s in a single forward pass.
///
/// # Example
///
/// ```
/// use chatstat::parsing::{Assembler, Transition, classify_line};
///
/// let mut assembler = Assembler::new();
/// assert_eq!(assembler.push(classify_line("stray")), Transition::DroppedOrphan);
/// assert_eq!(assembler.push(classify_line("01/01/20, 10:00 - A: one")), Transition::Opened(None));
/// assert_eq!(assembler.push(classify_line("two")), Transition::Appended);
///
/// let last = assembler.finish().unwrap();
/// assert_eq!(last.raw_body, "A: one\ntwo");
/// ```
#[derive(Debug, Default)]
pub struct Assembler {
    state: AssemblerState,
}

impl Assembler {
    /// Creates an assembler awaiting its first message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a block is open.
    pub fn is_accumulating(&self) -> bool {
        matches!(self.state, AssemblerState::Accumulating(_))
    }

    /// Feeds one classified line.
    pub fn push(&mut self, line: LineKind<'_>) -> Transition {
        let state = std::mem::take(&mut self.state);

        let (next, transition) = match (state, line) {
            (
                AssemblerState::AwaitingFirstMessage,
                LineKind::NewMessage {
                    raw_timestamp,
                    remainder,
                },
            ) => (
                AssemblerState::Accumulating(MessageBlock::open(raw_timestamp, remainder)),
                Transition::Opened(None),
            ),
            (AssemblerState::AwaitingFirstMessage, LineKind::Continuation(_)) => (
                AssemblerState::AwaitingFirstMessage,
                Transition::DroppedOrphan,
            ),
            (
                AssemblerState::Accumulating(done),
                LineKind::NewMessage {
                    raw_timestamp,
                    remainder,
                },
            ) => (
                AssemblerState::Accumulating(MessageBlock::open(raw_timestamp, remainder)),
                Transition::Opened(Some(done)),
            ),
            (AssemblerState::Accumulating(mut block), LineKind::Continuation(text)) => {
                block.append(text);
                (AssemblerState::Accumulating(block), Transition::Appended)
            }
        };

        self.state = next;
        transition
    }

    /// Ends the input and returns the block still open, if any.
    pub fn finish(self) -> Option<MessageBlock> {
        match self.state {
            AssemblerState::AwaitingFirstMessage => None,
            AssemblerState::Accumulating(block) => Some(block),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::classify_line;

    fn feed(lines: &[&str]) -> Vec<MessageBlock> {
        let mut assembler = Assembler::new();
        let mut blocks = Vec::new();
        for line in lines {
            if let Transition::Opened(Some(done)) = assembler.push(classify_line(line)) {
                blocks.push(done);
            }
        }
        blocks.extend(assembler.finish());
        blocks
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(feed(&[]).is_empty());
        assert!(Assembler::new().finish().is_none());
    }

    #[test]
    fn test_orphans_before_first_message_are_dropped() {
        let blocks = feed(&["preamble", "more preamble", "01/01/20, 10:00 - A: hi"]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].raw_body, "A: hi");
    }

    #[test]
    fn test_only_orphans_yields_nothing() {
        let mut assembler = Assembler::new();
        assert_eq!(assembler.push(classify_line("x")), Transition::DroppedOrphan);
        assert!(!assembler.is_accumulating());
        assert!(assembler.finish().is_none());
    }

    #[test]
    fn test_continuations_join_with_newline() {
        let blocks = feed(&["01/01/20, 10:00 - A: line1", "line2", "line3"]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].raw_timestamp, "01/01/20, 10:00");
        assert_eq!(blocks[0].raw_body, "A: line1\nline2\nline3");
    }

    #[test]
    fn test_new_message_flushes_previous() {
        let mut assembler = Assembler::new();
        assembler.push(classify_line("01/01/20, 10:00 - A: one"));
        let transition = assembler.push(classify_line("01/01/20, 10:01 - B: two"));
        match transition {
            Transition::Opened(Some(done)) => assert_eq!(done.raw_body, "A: one"),
            other => panic!("unexpected transition: {:?}", other),
        }
        assert_eq!(assembler.finish().unwrap().raw_body, "B: two");
    }

    #[test]
    fn test_trailing_block_is_flushed() {
        let blocks = feed(&[
            "01/01/20, 10:00 - A: one",
            "01/01/20, 10:01 - B: two",
            "tail",
        ]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].raw_body, "B: two\ntail");
    }
}
