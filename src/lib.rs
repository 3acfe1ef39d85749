//! # can_chart
//!
//! Rust utilities for turning **CAN bus text logs** into chartable per-byte time series.
//!
//! ## Highlights
//! - **Text-log parser**: read whitespace-delimited traces into a [`LogTable`] via `txt::parse::from_file(...)`.
//! - **Explicit schemas**: column layout is a [`ColumnSchema`] value, never guessed from column counts.
//! - **Canonical identifiers**: [`MessageId`] folds case and whitespace once, at parse time and again at query time.
//! - **Fixed-width records**: every [`LogRecord`] carries exactly 8 optional byte channels; missing bytes stay missing.
//! - **Query engine**: `query::series(...)` returns aligned [`SignalSeries`] per selected identifier plus a shared timestamp extent.
//!
//! _Crate docs refreshed: 2026-08-14_.
//!

pub mod query;
pub mod txt;
#[doc(hidden)]
pub mod types;

// Top-level re-exports (appear under Crate Items → Structs)
#[doc(inline)]
pub use crate::types::{
    errors::ParseError,
    msg_id::MessageId,
    record::LogRecord,
    schema::{Column, ColumnSchema},
    series::SignalSeries,
    table::{LogTable, TableHandle},
};
