use std::io;
use thiserror::Error;

/// Errors produced while parsing a CAN text log.
///
/// The first two variants are **per-line**: the table builder recovers from
/// them by skipping the offending line and continuing. The last two are
/// **file-level** and abort the load with no partial table.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid timestamp token '{token}': must be a finite number of seconds >= 0")]
    InvalidTimestamp { token: String },
    #[error("Truncated row: found {found} fields, schema requires {expected}")]
    TruncatedRow { found: usize, expected: usize },
    #[error("Failed to read log file '{path}'. \nError: {source}")]
    FileUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Log file '{path}' produced no records")]
    EmptyLog { path: String },
}

impl ParseError {
    /// `true` for errors the table builder recovers from by dropping one line.
    pub fn is_line_error(&self) -> bool {
        matches!(
            self,
            ParseError::InvalidTimestamp { .. } | ParseError::TruncatedRow { .. }
        )
    }
}
