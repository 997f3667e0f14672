use std::collections::BTreeMap;

use super::model::Dataset;

/// Display label substituted for empty or missing cell values.
pub const NO_VALUE: &str = "(no value)";

// ---------------------------------------------------------------------------
// FrequencyTable – value → count for one column
// ---------------------------------------------------------------------------

/// Occurrence counts of each distinct value of one column over a row
/// subset, plus the total number of rows counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Iterate (value, count) in value order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, u64)> {
        self.counts.iter().map(|(v, &c)| (v, c))
    }

    /// Count for one value (0 if absent).
    pub fn count_of(&self, value: &str) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no value was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (the number of rows examined).
    pub fn total(&self) -> u64 {
        self.total
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Count how often each distinct value of `column` occurs among the rows of
/// `view`. Empty cells count under [`NO_VALUE`].
///
/// Recomputed from scratch on every call; nothing is patched incrementally.
/// A column the dataset does not have yields an empty table with total 0
/// ("no data", never an error), as does an empty view.
pub fn aggregate(dataset: &Dataset, view: &[usize], column: &str) -> FrequencyTable {
    let Some(col) = dataset.column_index(column) else {
        return FrequencyTable::default();
    };

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for &row in view {
        let raw = dataset.value(row, col);
        let key = if raw.is_empty() { NO_VALUE } else { raw };
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }

    FrequencyTable {
        counts,
        total: view.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{self, FilterSet};

    fn dataset() -> Dataset {
        let columns = vec!["status".to_string()];
        let rows = vec![
            vec!["ok".to_string()],
            vec!["fail".to_string()],
            vec!["ok".to_string()],
        ];
        Dataset::new(columns, rows)
    }

    #[test]
    fn counts_values_over_the_full_view() {
        let ds = dataset();
        let view = filter::apply(&ds, &FilterSet::default());
        let table = aggregate(&ds, &view, "status");
        assert_eq!(table.count_of("ok"), 2);
        assert_eq!(table.count_of("fail"), 1);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn total_equals_view_length_for_any_filter() {
        let ds = dataset();
        let mut f = FilterSet::default();
        f.add("status", "ok");
        let view = filter::apply(&ds, &f);
        let table = aggregate(&ds, &view, "status");
        assert_eq!(table.total() as usize, view.len());
        assert_eq!(table.iter().map(|(_, c)| c).sum::<u64>(), table.total());
    }

    #[test]
    fn empty_cells_count_under_the_sentinel() {
        let ds = Dataset::new(
            vec!["status".to_string()],
            vec![
                vec!["ok".to_string()],
                vec!["fail".to_string()],
                vec!["ok".to_string()],
                vec![String::new()],
            ],
        );
        let view = filter::apply(&ds, &FilterSet::default());
        let table = aggregate(&ds, &view, "status");
        assert_eq!(table.count_of(NO_VALUE), 1);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn unknown_column_yields_empty_table() {
        let ds = dataset();
        let view = filter::apply(&ds, &FilterSet::default());
        let table = aggregate(&ds, &view, "region");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn empty_view_yields_empty_table() {
        let ds = dataset();
        let table = aggregate(&ds, &[], "status");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn reaggregation_with_unchanged_inputs_is_identical() {
        let ds = dataset();
        let view = filter::apply(&ds, &FilterSet::default());
        assert_eq!(
            aggregate(&ds, &view, "status"),
            aggregate(&ds, &view, "status")
        );
    }
}
