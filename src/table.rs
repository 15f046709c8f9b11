use crate::error::{CsvStatsError, Result};
use crate::types::Cell;
use crate::validation::check_duplicate_fields;

/// Named column of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Column {
            name: name.into(),
            cells,
        }
    }

    /// Numeric cells in row order, text cells skipped
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().filter_map(Cell::as_number)
    }

    pub fn has_numbers(&self) -> bool {
        self.cells.iter().any(Cell::is_number)
    }
}

/// Column-oriented table. Every column holds the same number of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table, checking that names are unique and all columns have equal length
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let names: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();
        check_duplicate_fields(&names)?;

        let row_count = columns.first().map(|c| c.cells.len()).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.cells.len() != row_count) {
            return Err(CsvStatsError::MalformedInput(format!(
                "Column '{}' has {} values, expected {}",
                bad.name,
                bad.cells.len(),
                row_count
            )));
        }

        Ok(Table { columns, row_count })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column lookup that reports an unknown name as an error
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| CsvStatsError::UnknownColumn(name.to_string()))
    }

    /// New table holding only the given rows, in the given order, across every column.
    /// Indices past the last row are ignored.
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        let kept: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.row_count)
            .collect();

        let columns = self
            .columns
            .iter()
            .map(|c| {
                let cells = kept.iter().map(|&i| c.cells[i].clone()).collect();
                Column::new(c.name.clone(), cells)
            })
            .collect();

        Table {
            columns,
            row_count: kept.len(),
        }
    }
}
