use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::types::msg_id::MessageId;
use crate::types::record::LogRecord;

/// In-memory representation of a parsed CAN text log.
///
/// A `LogTable` is created by the `txt` parser and then consumed read-only by
/// the query engine and downstream UIs. Records are stored in file order.
/// After construction the table is never mutated: a reload produces a fresh
/// table that **replaces** the old one wholesale (see [`TableHandle`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogTable {
    /// All surviving records in file order.
    pub records: Vec<LogRecord>,

    /// Number of lines dropped during parsing (corrupt timestamp, truncated row).
    pub skipped_lines: usize,
}

impl LogTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resets the table to its default (empty) state.
    pub fn clear(&mut self) {
        self.records = Vec::default();
        self.skipped_lines = 0;
    }

    /// Distinct canonical identifiers present in the table, sorted ascending.
    ///
    /// Sorting and deduplication happen on the canonical form, so `" 100"`
    /// and `"100"` in the source file yield a single entry. The result is
    /// deterministic and suitable for populating a selection list directly.
    pub fn distinct_message_ids(&self) -> Vec<MessageId> {
        let mut ids: Vec<MessageId> = self.records.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        ids
    }
}

/// Shared handle to the current table, with replace-only updates.
///
/// The UI layer keeps one `TableHandle`; readers take a cheap [`Arc`] snapshot
/// and keep working against it even if a reload swaps the table underneath.
/// The lock is held only for the pointer clone/swap, never across a parse or
/// a query, so a query in flight can never observe a half-built table.
#[derive(Debug, Default)]
pub struct TableHandle {
    current: RwLock<Arc<LogTable>>,
}

impl TableHandle {
    pub fn new(table: LogTable) -> Self {
        TableHandle {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Snapshot of the current table for reading.
    pub fn snapshot(&self) -> Arc<LogTable> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replaces the whole table. Existing snapshots keep the old table alive.
    pub fn replace(&self, table: LogTable) {
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Arc::new(table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ts: f64, id: &str) -> LogRecord {
        LogRecord {
            timestamp: ts,
            id: MessageId::new(id),
            ..Default::default()
        }
    }

    #[test]
    fn distinct_ids_are_sorted_and_deduped() {
        let table = LogTable {
            records: vec![
                record(0.1, "7c1"),
                record(0.2, " 100"),
                record(0.3, "100"),
                record(0.4, "1A0"),
            ],
            skipped_lines: 0,
        };
        let ids: Vec<String> = table
            .distinct_message_ids()
            .iter()
            .map(|i| i.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["100", "1A0", "7C1"]);
    }

    #[test]
    fn clear_empties_the_table() {
        let mut table = LogTable {
            records: vec![record(0.1, "100")],
            skipped_lines: 3,
        };
        table.clear();
        assert_eq!(table, LogTable::default());
    }

    #[test]
    fn handle_replace_keeps_old_snapshots_alive() {
        let handle = TableHandle::new(LogTable {
            records: vec![record(0.1, "100")],
            skipped_lines: 0,
        });

        let before = handle.snapshot();
        handle.replace(LogTable::default());
        let after = handle.snapshot();

        // the reader that grabbed `before` still sees the full old table
        assert_eq!(before.len(), 1);
        assert!(after.is_empty());
    }
}
