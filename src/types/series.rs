use serde::{Deserialize, Serialize};

use crate::types::msg_id::MessageId;
use crate::types::record::BYTE_CHANNELS;

/// Aligned per-byte time series for one message identifier.
///
/// Produced by the query engine and consumed by a chart renderer. Every byte
/// channel has exactly the same length as `timestamps` and is index-aligned
/// to it. A `None` in the middle of a channel is a genuine gap (that byte was
/// missing in that message) and must be rendered as a break, never
/// interpolated or dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalSeries {
    /// Canonical identifier this series belongs to.
    pub id: MessageId,

    /// Timestamps of the matching rows, in table order.
    pub timestamps: Vec<f64>,

    /// One optional-value series per byte position, aligned to `timestamps`.
    pub byte_channels: [Vec<Option<f64>>; BYTE_CHANNELS],
}

impl SignalSeries {
    pub fn new(id: MessageId) -> Self {
        SignalSeries {
            id,
            ..Default::default()
        }
    }

    /// Number of samples (rows) in the series.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Appends one row, keeping all channels aligned to `timestamps`.
    pub fn push(&mut self, timestamp: f64, bytes: &[Option<f64>; BYTE_CHANNELS]) {
        self.timestamps.push(timestamp);
        for (channel, value) in self.byte_channels.iter_mut().zip(bytes.iter()) {
            channel.push(*value);
        }
    }

    /// `[timestamp, value]` pairs for one byte channel, skipping gaps.
    /// Convenience for renderers that plot each segment between gaps.
    pub fn channel_points(&self, byte_index: usize) -> Vec<[f64; 2]> {
        let Some(channel) = self.byte_channels.get(byte_index) else {
            return Vec::new();
        };
        self.timestamps
            .iter()
            .zip(channel.iter())
            .filter_map(|(ts, value)| value.map(|v| [*ts, v]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_channels_aligned() {
        let mut series = SignalSeries::new(MessageId::new("1A0"));
        series.push(0.1, &[Some(1.0), None, None, None, None, None, None, None]);
        series.push(0.2, &[Some(2.0), Some(3.0), None, None, None, None, None, None]);

        assert_eq!(series.len(), 2);
        for channel in &series.byte_channels {
            assert_eq!(channel.len(), series.timestamps.len());
        }
        assert_eq!(series.byte_channels[0], vec![Some(1.0), Some(2.0)]);
        assert_eq!(series.byte_channels[1], vec![None, Some(3.0)]);
    }

    #[test]
    fn channel_points_skips_gaps() {
        let mut series = SignalSeries::new(MessageId::new("1A0"));
        series.push(0.1, &[Some(1.0), None, None, None, None, None, None, None]);
        series.push(0.2, &[None, None, None, None, None, None, None, None]);
        series.push(0.3, &[Some(3.0), None, None, None, None, None, None, None]);

        assert_eq!(series.channel_points(0), vec![[0.1, 1.0], [0.3, 3.0]]);
        assert!(series.channel_points(1).is_empty());
        assert!(series.channel_points(99).is_empty());
    }
}
