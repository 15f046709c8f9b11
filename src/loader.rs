use crate::error::{CsvStatsError, Result};
use crate::table::{Column, Table};
use crate::types::constants::{NO_DATA_ROWS, NO_HEADERS};
use crate::types::Cell;
use crate::validation::validate_headers;
use log::{debug, warn};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load a CSV file into a column-oriented table.
///
/// The first line is the header; a file starting with a blank line has no
/// headers. Blank lines after the header are skipped. Every other record
/// becomes a row; missing trailing fields are stored as empty text and extra
/// fields are dropped.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CsvStatsError::NotFound(path.display().to_string()),
        _ => CsvStatsError::Io(e),
    })?;

    let mut input = BufReader::new(file);
    if starts_with_blank_line(input.fill_buf()?) {
        return Err(CsvStatsError::MalformedInput(NO_HEADERS.to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(read_error)?
        .iter()
        .map(|h| h.to_string())
        .collect();
    validate_headers(&headers)?;

    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
    let mut row_count = 0;

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(read_error)?;

        if record.len() > headers.len() {
            warn!(
                "Row {} has {} fields but header has {}; extra fields ignored",
                row_no + 1,
                record.len(),
                headers.len()
            );
        }

        for (col_idx, column) in cells.iter_mut().enumerate() {
            column.push(convert_value(record.get(col_idx).unwrap_or("")));
        }
        row_count += 1;
    }

    if row_count == 0 {
        return Err(CsvStatsError::MalformedInput(NO_DATA_ROWS.to_string()));
    }

    debug!(
        "Loaded {} rows x {} columns from {}",
        row_count,
        headers.len(),
        path.display()
    );

    Table::new(
        headers
            .into_iter()
            .zip(cells)
            .map(|(name, cells)| Column::new(name, cells))
            .collect(),
    )
}

/// Convert raw field text into a cell.
/// Empty text stays text; anything that parses as a float (surrounding
/// whitespace allowed, single underscores between digits as in `1_000`)
/// becomes a number; everything else is kept verbatim.
pub fn convert_value(raw: &str) -> Cell {
    if raw.is_empty() {
        return Cell::Text(String::new());
    }

    let parsed = strip_digit_separators(raw.trim()).and_then(|text| text.parse::<f64>().ok());
    match parsed {
        Some(n) => Cell::Number(n),
        None => Cell::Text(raw.to_string()),
    }
}

/// Remove `_` digit separators. `None` if an underscore is not between two digits.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    for (idx, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = idx.checked_sub(1).and_then(|i| bytes.get(i));
        let after = bytes.get(idx + 1);
        if !(before.is_some_and(u8::is_ascii_digit) && after.is_some_and(u8::is_ascii_digit)) {
            return None;
        }
    }

    Some(Cow::Owned(text.replace('_', "")))
}

fn starts_with_blank_line(buf: &[u8]) -> bool {
    matches!(buf.first(), Some(b'\n' | b'\r'))
}

fn read_error(e: csv::Error) -> CsvStatsError {
    let message = format!("Error reading CSV file: {}", e);
    match e.into_kind() {
        csv::ErrorKind::Io(io) => CsvStatsError::Io(io),
        _ => CsvStatsError::MalformedInput(message),
    }
}
