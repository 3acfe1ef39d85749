use serde::{Deserialize, Serialize};

/// A named column of the log format, mapped positionally onto the leading
/// whitespace-separated fields of every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    Timestamp,
    Bus,
    Id,
    Dlc,
}

/// Ordered column layout of a log file.
///
/// The data field is not listed: it is always the **remainder** of the line
/// after the named columns. The schema is an explicit configuration value
/// chosen by the caller; the parser never sniffs the layout from column
/// counts, so behavior stays deterministic for every line of a file.
///
/// Two stock layouts cover the known log variants:
/// - [`ColumnSchema::timestamp_id_dlc`]: `<timestamp> <id> <dlc> <data...>`
/// - [`ColumnSchema::timestamp_bus_id_dlc`]: `<timestamp> <bus> <id> <dlc> <data...>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    columns: Vec<Column>,
}

impl ColumnSchema {
    /// Layout without a bus column: `<timestamp> <id> <dlc> <data...>`.
    pub fn timestamp_id_dlc() -> Self {
        ColumnSchema {
            columns: vec![Column::Timestamp, Column::Id, Column::Dlc],
        }
    }

    /// Layout with a bus column: `<timestamp> <bus> <id> <dlc> <data...>`.
    pub fn timestamp_bus_id_dlc() -> Self {
        ColumnSchema {
            columns: vec![Column::Timestamp, Column::Bus, Column::Id, Column::Dlc],
        }
    }

    /// Named columns in line order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of leading fields a line must provide before the data remainder.
    pub fn field_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of `column` within the leading fields, if the schema carries it.
    pub fn position_of(&self, column: Column) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        ColumnSchema::timestamp_id_dlc()
    }
}
