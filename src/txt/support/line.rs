use crate::txt::support::bytes;
use crate::types::errors::ParseError;
use crate::types::msg_id::MessageId;
use crate::types::record::LogRecord;
use crate::types::schema::{Column, ColumnSchema};

// Example lines:
// 0.016728 1A0 8 3E 42 03 00 39 00 03 01     (timestamp_id_dlc)
// 0.016728 1 1A0 8 3E420300390003 01         (timestamp_bus_id_dlc)
/// Parses one raw log line into a [`LogRecord`].
///
/// The line is split on runs of whitespace. The schema maps the leading
/// fields onto named columns; everything after them is the data field, which
/// is expanded into the 8 byte channels by the byte splitter.
///
/// The identifier column is taken **verbatim as a string** (then canonically
/// normalized by [`MessageId`]); it is never parsed as a number, so `"0x100"`
/// and `"100"` stay distinct. The DLC is advisory: an unparsable DLC token
/// degrades to `None` without failing the line.
///
/// # Errors
/// - [`ParseError::TruncatedRow`] when the line has fewer fields than the
///   schema names. An empty data remainder is allowed (DLC 0 frames).
/// - [`ParseError::InvalidTimestamp`] when the timestamp token is not a
///   finite number `>= 0`.
///
/// Both are per-line errors: the table builder drops the line and continues.
pub fn parse(line: &str, schema: &ColumnSchema) -> Result<LogRecord, ParseError> {
    // split line by whitespaces
    let parts: Vec<&str> = line.split_whitespace().collect();
    let expected: usize = schema.field_count();
    if parts.len() < expected {
        return Err(ParseError::TruncatedRow {
            found: parts.len(),
            expected,
        });
    }

    let mut timestamp_token: &str = "";
    let mut bus_token: Option<&str> = None;
    let mut id_token: &str = "";
    let mut dlc_token: Option<&str> = None;
    for (part, column) in parts.iter().copied().zip(schema.columns().iter()) {
        match column {
            Column::Timestamp => timestamp_token = part,
            Column::Bus => bus_token = Some(part),
            Column::Id => id_token = part,
            Column::Dlc => dlc_token = Some(part),
        }
    }

    // timestamp must be a finite, non-negative number of seconds
    let timestamp: f64 = match timestamp_token.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            return Err(ParseError::InvalidTimestamp {
                token: timestamp_token.to_string(),
            });
        }
    };

    let raw_data: String = parts[expected..].join(" ");
    let bytes = bytes::split(&raw_data);

    Ok(LogRecord {
        timestamp,
        bus: bus_token.map(str::to_string),
        id: MessageId::new(id_token),
        dlc: dlc_token.and_then(|t| t.parse::<u16>().ok()),
        raw_data,
        bytes,
    })
}
