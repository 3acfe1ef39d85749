//! # txt
//!
//! Parsing utilities for whitespace-delimited CAN **text** logs.
//! Use `txt::parse::from_file(...)` to create a `LogTable`.
//! Helper routines are in `txt::support` (line parsing, byte splitting).

pub mod parse;
pub(crate) mod support;

// Per-line building blocks, re-exported for callers that feed lines from
// somewhere other than a file.
pub use support::bytes::split as split_bytes;
pub use support::line::parse as parse_line;
