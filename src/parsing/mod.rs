//! The three stages that turn export text into records.
//!
//! - [`classify`] - decides whether a line opens a message or continues one
//! - [`assemble`] - groups classified lines into [`MessageBlock`]s
//! - [`normalize`] - turns a block into a [`MessageRecord`](crate::MessageRecord)
//!
//! [`ChatParser`](crate::parser::ChatParser) drives all three in a single
//! forward pass. The stages are public so they can be tested and reused on
//! their own.

pub mod assemble;
pub mod classify;
pub mod normalize;

pub use assemble::{Assembler, MessageBlock, Transition};
pub use classify::{LineKind, classify_line};
pub use normalize::{normalize, parse_timestamp, split_author};
