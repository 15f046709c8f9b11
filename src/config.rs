use crate::error::{CsvStatsError, Result};
use crate::types::FilterOp;
use crate::validation::{parse_threshold, split_filter_tokens};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_OUTPUT_FORMAT: &str = "console";

/// Single-column numeric row filter, e.g. `age > 30`
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub column: String,
    pub op: FilterOp,
    pub threshold: f64,
}

/// Key/value form of a filter spec before validation
#[derive(Debug, Deserialize)]
struct RawFilterSpec {
    column: Option<String>,
    operator: Option<String>,
    value: Option<Value>,
}

impl FilterSpec {
    pub fn new(column: impl Into<String>, op: FilterOp, threshold: f64) -> Self {
        FilterSpec {
            column: column.into(),
            op,
            threshold,
        }
    }

    /// Parse the object form `{"column": "age", "operator": ">", "value": 30}`.
    /// Every key is required and `value` must be a JSON number.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawFilterSpec = serde_json::from_str(json).map_err(|e| {
            CsvStatsError::InvalidFilterSpec(format!("Invalid filter specification: {}", e))
        })?;

        let (Some(column), Some(operator), Some(value)) = (raw.column, raw.operator, raw.value)
        else {
            return Err(CsvStatsError::InvalidFilterSpec(
                "Filter spec must contain keys: column, operator, value".to_string(),
            ));
        };

        let threshold = value.as_f64().ok_or_else(|| {
            CsvStatsError::InvalidFilterSpec(format!("Filter value must be numeric, got: {}", value))
        })?;

        Ok(FilterSpec::new(column, operator.parse()?, threshold))
    }
}

impl FromStr for FilterSpec {
    type Err = CsvStatsError;

    /// Parse `"<column> <operator> <value>"`, exactly three whitespace-separated tokens
    fn from_str(s: &str) -> Result<Self> {
        let [column, operator, value] = split_filter_tokens(s)?;
        let op: FilterOp = operator.parse()?;
        let threshold = parse_threshold(value)?;
        Ok(FilterSpec::new(column, op, threshold))
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.op, self.threshold)
    }
}

/// Inputs of one processing run
#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    /// Columns to analyze; `None` selects every column holding a number
    pub columns: Option<Vec<String>>,
    pub filter: Option<FilterSpec>,
    /// `console`, `json` or `structured`; checked when the result is rendered
    pub output_format: String,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Config {
            path: path.into(),
            columns: None,
            filter: None,
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
        }
    }

    pub fn with_columns(mut self, columns: Option<Vec<String>>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_filter(mut self, filter: Option<FilterSpec>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_output_format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = output_format.into();
        self
    }
}
