use serde::{Deserialize, Serialize};

use crate::types::msg_id::MessageId;

/// Fixed number of byte channels carried by every record.
pub const BYTE_CHANNELS: usize = 8;

/// A single parsed log line.
///
/// Records are a light, fixed-width row: timing, identifier and exactly
/// [`BYTE_CHANNELS`] optional byte values. A missing or unparsable byte is
/// `None`, never zero, so a genuine gap can always be told apart from a byte
/// whose value happens to be `0.0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogRecord {
    /// Relative timestamp in seconds. Finite and `>= 0`, enforced at parse time.
    pub timestamp: f64,

    /// Bus/channel token, present only when the schema carries a bus column.
    pub bus: Option<String>,

    /// Canonical message identifier (trimmed + uppercased, see [`MessageId`]).
    pub id: MessageId,

    /// Advisory data length code. Not used to validate the byte count.
    pub dlc: Option<u16>,

    /// Data remainder of the line, token spacing collapsed to single spaces.
    pub raw_data: String,

    /// Extracted byte channels. Always exactly 8 slots; extra payload bytes
    /// are discarded, missing positions stay `None`.
    pub bytes: [Option<f64>; BYTE_CHANNELS],
}

impl LogRecord {
    pub fn clear(&mut self) {
        self.timestamp = 0.0;
        self.bus = None;
        self.id = MessageId::default();
        self.dlc = None;
        self.raw_data.clear();
        self.bytes = [None; BYTE_CHANNELS];
    }
}

impl std::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Minimal display: timestamp, identifier, raw payload
        write!(f, "{:.6} {} [{}]", self.timestamp, self.id, self.raw_data)
    }
}
