//! In-memory record table.
//!
//! Rows and columns of untyped string cells, loaded once per run and
//! transformed in place. Cell semantics (phone formats, email shapes) are
//! deliberately not modeled; the converter passes values through.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    #[must_use]
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Index of a header by exact name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total cell count across all rows.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.headers.len()
    }

    /// Cell value at (row, column), empty when the row is short.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Appends a column, pairing values to rows by position.
    ///
    /// The caller guarantees `values` has one entry per row; missing tail
    /// entries become empty cells.
    pub fn push_column(&mut self, header: String, values: Vec<String>) {
        self.headers.push(header);
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row.push(values.next().unwrap_or_default());
        }
    }
}
