use crate::error::{CsvStatsError, Result};
use crate::types::constants::NO_HEADERS;
use std::collections::HashSet;

/// Check for duplicate field names in header.
/// Names are compared exactly, so `Name` and `name` are distinct columns.
pub fn check_duplicate_fields(headers: &[String]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for header in headers {
        if !seen.insert(header.as_str()) {
            return Err(CsvStatsError::MalformedInput(format!(
                "Duplicate field name \"{}\"",
                header
            )));
        }
    }

    Ok(())
}

/// Validate the header row of a CSV file
pub fn validate_headers(headers: &[String]) -> Result<()> {
    if headers.is_empty() {
        return Err(CsvStatsError::MalformedInput(NO_HEADERS.to_string()));
    }
    check_duplicate_fields(headers)
}

/// Split a filter expression into its three whitespace-separated tokens
pub fn split_filter_tokens(filter: &str) -> Result<[&str; 3]> {
    let parts: Vec<&str> = filter.split_whitespace().collect();
    match parts.as_slice() {
        [column, operator, value] => Ok([*column, *operator, *value]),
        _ => Err(CsvStatsError::InvalidFilterSpec(
            "Filter must be in format: 'column operator value' (example: 'age > 30')".to_string(),
        )),
    }
}

/// Parse a filter threshold
pub fn parse_threshold(value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        CsvStatsError::InvalidFilterSpec(format!("Filter value must be numeric, got: {}", value))
    })
}
