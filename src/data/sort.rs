use serde::Serialize;

use super::frequency::FrequencyTable;

// ---------------------------------------------------------------------------
// SortSpec – which column of the distribution orders the display
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Value,
    Count,
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The active (key, direction) pair for the distribution display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// Before any header has been clicked: count, descending.
    fn default() -> Self {
        SortSpec {
            key: SortKey::Count,
            direction: SortDirection::Descending,
        }
    }
}

impl SortSpec {
    /// Header-click behaviour: the active key flips direction, a new key
    /// starts descending. Descending-on-new-key applies to every key,
    /// including `Value`.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.key = key;
            self.direction = SortDirection::Descending;
        }
    }
}

// ---------------------------------------------------------------------------
// Sorted distribution entries
// ---------------------------------------------------------------------------

/// One row of the displayed distribution. `percent` is the numeric ratio
/// (count / total * 100); formatting to two decimals is presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetEntry {
    pub value: String,
    pub count: u64,
    pub percent: f64,
}

/// Order a frequency table into display entries.
///
/// Percentage compares counts, since the total is fixed across one table
/// the two orderings are identical. Ties always break by ascending value,
/// so the result is a total order independent of input iteration order.
pub fn sort(table: &FrequencyTable, spec: SortSpec) -> Vec<FacetEntry> {
    let total = table.total();
    let mut entries: Vec<FacetEntry> = table
        .iter()
        .map(|(value, count)| FacetEntry {
            value: value.clone(),
            count,
            percent: if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();

    entries.sort_by(|a, b| {
        let primary = match spec.key {
            SortKey::Value => a.value.cmp(&b.value),
            SortKey::Count | SortKey::Percentage => a.count.cmp(&b.count),
        };
        let primary = match spec.direction {
            SortDirection::Ascending => primary,
            SortDirection::Descending => primary.reverse(),
        };
        primary.then_with(|| a.value.cmp(&b.value))
    });

    entries
}

/// Comparison helper for tests and callers that format percentages.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.2}%")
}
