use std::collections::{BTreeMap, BTreeSet};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Case-insensitive matching
// ---------------------------------------------------------------------------

/// The one comparison used for filtering: is `pattern` a case-insensitive
/// substring of `value`? Both sides are folded here so filter application
/// and display never diverge on normalisation.
pub fn contains_ci(value: &str, pattern: &str) -> bool {
    value.to_lowercase().contains(&pattern.to_lowercase())
}

// ---------------------------------------------------------------------------
// FilterSet – per-column inclusion patterns
// ---------------------------------------------------------------------------

/// Active filter patterns, keyed by column name.
///
/// Invariants: a column is absent from the map iff it is unfiltered, and an
/// empty pattern set is never kept (the entry is removed instead). Patterns
/// are stored as entered and folded only at comparison time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    patterns: BTreeMap<String, BTreeSet<String>>,
}

impl FilterSet {
    /// Register `pattern` for `column`. The pattern is trimmed first; an
    /// empty submission clears the column's filter instead (the "empty
    /// input clears this column" policy).
    pub fn add(&mut self, column: &str, pattern: &str) {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            self.patterns.remove(column);
            return;
        }
        self.patterns
            .entry(column.to_string())
            .or_default()
            .insert(pattern.to_string());
    }

    /// Drop the filter for `column`, if any.
    pub fn remove(&mut self, column: &str) {
        self.patterns.remove(column);
    }

    /// Drop all filters.
    pub fn clear(&mut self) {
        self.patterns.clear();
    }

    /// Whether no column is filtered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// (column, pattern count) pairs in column-name order, for the status line.
    pub fn describe(&self) -> Vec<(String, usize)> {
        self.patterns
            .iter()
            .map(|(col, pats)| (col.clone(), pats.len()))
            .collect()
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.patterns.iter()
    }
}

// ---------------------------------------------------------------------------
// Filter application
// ---------------------------------------------------------------------------

/// Return indices of rows that pass all active filters, in dataset order.
///
/// A row passes when, for every filtered column (AND across columns), at
/// least one of that column's patterns is a case-insensitive substring of
/// the row's value (OR within a column). A filter on a column the dataset
/// does not have is evaluated against the empty string, so it excludes
/// every row.
///
/// With no filters the result is the identity view: a fresh index vector
/// over all rows.
pub fn apply(dataset: &Dataset, filters: &FilterSet) -> Vec<usize> {
    if filters.is_empty() {
        return (0..dataset.row_count()).collect();
    }

    // Resolve column positions once, not per row.
    let active: Vec<(Option<usize>, &BTreeSet<String>)> = filters
        .iter()
        .map(|(col, pats)| (dataset.column_index(col), pats))
        .collect();

    (0..dataset.row_count())
        .filter(|&row| {
            active.iter().all(|(idx, pats)| {
                let value = match idx {
                    Some(col) => dataset.value(row, *col),
                    None => "",
                };
                pats.iter().any(|p| contains_ci(value, p))
            })
        })
        .collect()
}
