// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table: an ordered column list from the header plus the
/// row cells, all kept as opaque strings (no type inference).
///
/// Immutable after construction. Every row holds exactly one cell per
/// column: short rows are padded with empty strings, extra trailing cells
/// are dropped.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset, normalising every row to the header width.
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Dataset { columns, rows }
    }

    /// Ordered column names, as discovered from the header.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column index). Rows are normalised at construction so
    /// any index within the header width is valid.
    pub fn value(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    /// Cell at (row, column name); empty string if the column is unknown.
    pub fn get(&self, row: usize, column: &str) -> &str {
        match self.column_index(column) {
            Some(col) => self.value(row, col),
            None => "",
        }
    }
}
