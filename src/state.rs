use crate::data::filter::{self, FilterSet};
use crate::data::frequency::{self, FrequencyTable};
use crate::data::model::Dataset;
use crate::data::sort::{self, FacetEntry, SortKey, SortSpec};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
///
/// Every mutating event (select column, submit filter, clear filters,
/// toggle sort) runs its recomputation to completion before the next event
/// is handled; there is no implicit observer graph.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    dataset: Option<Dataset>,

    /// Per-column filter patterns.
    filters: FilterSet,

    /// Indices of rows passing the current filters (cached, dataset order).
    visible: Vec<usize>,

    /// Column whose distribution is shown, if any.
    selected_column: Option<String>,

    /// Active sort key and direction.
    sort: SortSpec,

    /// Frequency table for the selected column over `visible` (cached so a
    /// sort toggle does not re-aggregate).
    table: FrequencyTable,

    /// `table` ordered by `sort`, ready for display.
    distribution: Vec<FacetEntry>,

    /// Text currently in the filter input box.
    pub filter_input: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterSet::default(),
            visible: Vec::new(),
            selected_column: None,
            sort: SortSpec::default(),
            table: FrequencyTable::default(),
            distribution: Vec::new(),
            filter_input: String::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, resetting the whole session.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.filters.clear();
        self.visible = (0..dataset.row_count()).collect();
        self.selected_column = None;
        self.sort = SortSpec::default();
        self.table = FrequencyTable::default();
        self.distribution.clear();
        self.filter_input.clear();
        self.status_message = None;
        self.dataset = Some(dataset);
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn selected_column(&self) -> Option<&str> {
        self.selected_column.as_deref()
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    /// The sorted distribution for the selected column.
    pub fn distribution(&self) -> &[FacetEntry] {
        &self.distribution
    }

    pub fn total_row_count(&self) -> usize {
        self.dataset.as_ref().map_or(0, |ds| ds.row_count())
    }

    pub fn filtered_row_count(&self) -> usize {
        self.visible.len()
    }

    /// (column, pattern count) pairs for the status line.
    pub fn filter_summary(&self) -> Vec<(String, usize)> {
        self.filters.describe()
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    // -- Events --------------------------------------------------------

    /// Show the distribution of `column`. The filtered view is unchanged,
    /// so only aggregation and sorting rerun.
    pub fn select_column(&mut self, column: &str) {
        self.selected_column = Some(column.to_string());
        self.filter_input.clear();
        log::debug!("selected column: {column}");
        self.reaggregate();
    }

    /// Apply the filter input to the selected column. An empty submission
    /// clears that column's filter. No-op with no column selected.
    pub fn submit_filter(&mut self) {
        let Some(column) = self.selected_column.clone() else {
            return;
        };
        let pattern = self.filter_input.clone();
        self.filters.add(&column, &pattern);
        self.refilter();
        log::debug!(
            "filter on {column}: '{pattern}' ({} rows match)",
            self.visible.len()
        );
    }

    /// Drop every filter and restore the full-dataset view.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.filter_input.clear();
        log::debug!("cleared all filters");
        self.refilter();
    }

    /// Header click: flip or switch the sort, then reorder the cached
    /// table without re-aggregating.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        self.distribution = sort::sort(&self.table, self.sort);
    }

    // -- Recomputation -------------------------------------------------

    /// Recompute the visible rows from the current filters, then the
    /// distribution on top of them.
    fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible = filter::apply(ds, &self.filters);
        }
        self.reaggregate();
    }

    /// Recompute the frequency table of the selected column over the
    /// visible rows, then re-sort.
    fn reaggregate(&mut self) {
        self.table = match (&self.dataset, &self.selected_column) {
            (Some(ds), Some(col)) => frequency::aggregate(ds, &self.visible, col),
            _ => FrequencyTable::default(),
        };
        self.distribution = sort::sort(&self.table, self.sort);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::frequency::NO_VALUE;
    use crate::data::sort::format_percent;

    fn state_with_status_rows(cells: &[&str]) -> AppState {
        let rows = cells.iter().map(|c| vec![c.to_string()]).collect();
        let mut state = AppState::default();
        state.set_dataset(Dataset::new(vec!["status".to_string()], rows));
        state
    }

    fn values(state: &AppState) -> Vec<&str> {
        state
            .distribution()
            .iter()
            .map(|e| e.value.as_str())
            .collect()
    }

    #[test]
    fn unfiltered_distribution_sorted_by_count_descending() {
        // Scenario: three rows, no filters, default sort.
        let mut state = state_with_status_rows(&["ok", "fail", "ok"]);
        state.select_column("status");

        assert_eq!(state.total_row_count(), 3);
        assert_eq!(state.filtered_row_count(), 3);
        assert_eq!(values(&state), vec!["ok", "fail"]);

        let dist = state.distribution();
        assert_eq!(dist[0].count, 2);
        assert_eq!(format_percent(dist[0].percent), "66.67%");
        assert_eq!(dist[1].count, 1);
        assert_eq!(format_percent(dist[1].percent), "33.33%");
    }

    #[test]
    fn filtering_narrows_the_distribution_to_matching_rows() {
        let mut state = state_with_status_rows(&["ok", "fail", "ok"]);
        state.select_column("status");
        state.filter_input = "ok".to_string();
        state.submit_filter();

        assert_eq!(state.filtered_row_count(), 2);
        assert_eq!(values(&state), vec!["ok"]);
        let dist = state.distribution();
        assert_eq!(dist[0].count, 2);
        assert_eq!(format_percent(dist[0].percent), "100.00%");
    }

    #[test]
    fn filter_on_absent_column_empties_the_view() {
        let mut state = state_with_status_rows(&["ok", "fail", "ok"]);
        state.select_column("region");
        state.filter_input = "us".to_string();
        state.submit_filter();

        assert_eq!(state.filtered_row_count(), 0);
        state.select_column("status");
        assert!(state.distribution().is_empty());
    }

    #[test]
    fn clearing_filters_restores_the_unfiltered_distribution() {
        let mut state = state_with_status_rows(&["ok", "fail", "ok"]);
        state.select_column("status");
        let before: Vec<FacetEntry> = state.distribution().to_vec();

        state.filter_input = "ok".to_string();
        state.submit_filter();
        assert_eq!(state.filtered_row_count(), 2);

        state.clear_filters();
        assert_eq!(state.filtered_row_count(), 3);
        assert_eq!(state.distribution(), &before[..]);
    }

    #[test]
    fn empty_values_show_as_the_sentinel() {
        let mut state = state_with_status_rows(&["ok", "fail", "ok", ""]);
        state.select_column("status");
        assert!(values(&state).contains(&NO_VALUE));
        let entry = state
            .distribution()
            .iter()
            .find(|e| e.value == NO_VALUE)
            .unwrap();
        assert_eq!(entry.count, 1);
    }

    #[test]
    fn empty_filter_submission_clears_that_columns_filter() {
        let mut state = state_with_status_rows(&["ok", "fail", "ok"]);
        state.select_column("status");
        state.filter_input = "ok".to_string();
        state.submit_filter();
        assert_eq!(state.filtered_row_count(), 2);

        state.filter_input.clear();
        state.submit_filter();
        assert_eq!(state.filtered_row_count(), 3);
        assert!(!state.has_filters());
    }

    #[test]
    fn toggle_sort_reorders_without_reaggregating() {
        let mut state = state_with_status_rows(&["ok", "fail", "ok"]);
        state.select_column("status");
        assert_eq!(values(&state), vec!["ok", "fail"]);

        state.toggle_sort(SortKey::Count); // same key: flip to ascending
        assert_eq!(values(&state), vec!["fail", "ok"]);

        state.toggle_sort(SortKey::Value); // new key: descending
        assert_eq!(values(&state), vec!["ok", "fail"]);

        state.toggle_sort(SortKey::Count); // back to default
        state.toggle_sort(SortKey::Count);
        state.toggle_sort(SortKey::Count);
        assert_eq!(values(&state), vec!["ok", "fail"]);
    }

    #[test]
    fn filter_summary_lists_columns_and_pattern_counts() {
        let mut state = AppState::default();
        state.set_dataset(Dataset::new(
            vec!["status".to_string(), "user".to_string()],
            vec![vec!["ok".to_string(), "alice".to_string()]],
        ));
        state.select_column("status");
        state.filter_input = "ok".to_string();
        state.submit_filter();
        state.select_column("user");
        state.filter_input = "ali".to_string();
        state.submit_filter();

        assert_eq!(
            state.filter_summary(),
            vec![("status".to_string(), 1), ("user".to_string(), 1)]
        );
        assert_eq!(state.filtered_row_count(), 1);
    }

    #[test]
    fn loading_a_dataset_resets_the_session() {
        let mut state = state_with_status_rows(&["ok", "fail"]);
        state.select_column("status");
        state.filter_input = "ok".to_string();
        state.submit_filter();

        state.set_dataset(Dataset::new(
            vec!["other".to_string()],
            vec![vec!["x".to_string()]],
        ));
        assert!(!state.has_filters());
        assert_eq!(state.selected_column(), None);
        assert_eq!(state.filtered_row_count(), 1);
        assert!(state.distribution().is_empty());
        assert_eq!(state.sort_spec(), SortSpec::default());
    }
}
