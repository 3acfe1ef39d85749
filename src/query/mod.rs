//! # query
//!
//! Signal query engine: filters a [`LogTable`] down to aligned per-byte time
//! series for a set of selected message identifiers.
//!
//! The engine is stateless: every call is a pure function of
//! `(table, selected_ids)`. Display metadata (colors and the like) is opaque
//! to this crate; callers keep it keyed by the canonical [`MessageId`] and
//! join it back onto the returned map themselves.

use std::collections::{HashMap, HashSet};

use crate::types::msg_id::MessageId;
use crate::types::series::SignalSeries;
use crate::types::table::LogTable;

/// Returns one [`SignalSeries`] per selected identifier with matching rows.
///
/// Selection values are normalized the same way stored identifiers are
/// (trim + uppercase fold), so `"1a0"`, `" 1A0 "` and `"1A0"` all select the
/// same signal. An identifier with **zero** matching rows simply has no entry
/// in the result — per-signal emptiness is silent, never an error, and never
/// affects the other selected identifiers.
///
/// Rows are visited once, in table order, so every series' `timestamps` is a
/// subsequence of the table's timestamps and all byte channels stay aligned.
pub fn series<I, S>(table: &LogTable, selected_ids: I) -> HashMap<MessageId, SignalSeries>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let wanted: HashSet<MessageId> = selected_ids
        .into_iter()
        .map(|raw| MessageId::new(raw.as_ref()))
        .collect();

    let mut result: HashMap<MessageId, SignalSeries> = HashMap::new();
    if wanted.is_empty() {
        return result;
    }

    for record in &table.records {
        if !wanted.contains(&record.id) {
            continue;
        }
        result
            .entry(record.id.clone())
            .or_insert_with(|| SignalSeries::new(record.id.clone()))
            .push(record.timestamp, &record.bytes);
    }

    result
}

/// Minimum and maximum timestamp over the **whole** table.
///
/// Computed once per table, not per selected signal, so every chart in a
/// combined plot shares one x-axis scale. Row order does not matter. An empty
/// table yields `(0.0, 0.0)`.
pub fn timestamp_extent(table: &LogTable) -> (f64, f64) {
    let mut iter = table.records.iter().map(|r| r.timestamp);
    let Some(first) = iter.next() else {
        return (0.0, 0.0);
    };
    iter.fold((first, first), |(min, max), ts| {
        (min.min(ts), max.max(ts))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txt::parse::from_lines;
    use crate::types::schema::ColumnSchema;

    fn sample_table() -> LogTable {
        from_lines(
            [
                "0.1 1a0 8 1 2 3 4 5 6 7 8",
                "5.0 7C1 2 10 20",
                "2.3 1a0 3 9 8 7",
            ],
            &ColumnSchema::timestamp_id_dlc(),
        )
    }

    #[test]
    fn query_is_case_and_whitespace_insensitive() {
        let table = sample_table();
        let a = series(&table, ["1A0"]);
        let b = series(&table, [" 1a0 "]);
        let c = series(&table, ["1a0"]);
        assert_eq!(a, b);
        assert_eq!(b, c);

        let sig = &a[&MessageId::new("1A0")];
        assert_eq!(sig.timestamps, vec![0.1, 2.3]);
        assert_eq!(sig.byte_channels[0], vec![Some(1.0), Some(9.0)]);
        // second matching row has only 3 bytes: channel 3 shows a gap there
        assert_eq!(sig.byte_channels[3], vec![Some(4.0), None]);
    }

    #[test]
    fn absent_id_is_silently_missing_from_the_result() {
        let table = sample_table();
        let result = series(&table, ["DEAD", "7c1"]);
        assert!(!result.contains_key(&MessageId::new("DEAD")));
        // the other selected id is unaffected
        let sig = &result[&MessageId::new("7C1")];
        assert_eq!(sig.timestamps, vec![5.0]);
        assert_eq!(sig.byte_channels[1], vec![Some(20.0)]);
    }

    #[test]
    fn duplicate_selections_collapse_to_one_entry() {
        let table = sample_table();
        let result = series(&table, ["1A0", " 1a0", "1a0 "]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn empty_selection_yields_empty_map() {
        let table = sample_table();
        let result = series(&table, Vec::<&str>::new());
        assert!(result.is_empty());
    }

    #[test]
    fn extent_covers_the_whole_table_regardless_of_row_order() {
        let table = sample_table();
        assert_eq!(timestamp_extent(&table), (0.1, 5.0));
    }

    #[test]
    fn extent_of_empty_table_is_zero_zero() {
        assert_eq!(timestamp_extent(&LogTable::default()), (0.0, 0.0));
    }

    #[test]
    fn channels_stay_aligned_with_timestamps() {
        let table = sample_table();
        let result = series(&table, ["1A0", "7C1"]);
        for sig in result.values() {
            for channel in &sig.byte_channels {
                assert_eq!(channel.len(), sig.timestamps.len());
            }
        }
    }
}
