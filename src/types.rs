use crate::error::CsvStatsError;
use std::fmt;
use std::str::FromStr;

/// A single table cell, typed once at load time
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Cell::Number(_))
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// Comparison operator of a row filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Gt,
    Lt,
    Eq,
    Ge,
    Le,
}

impl FilterOp {
    pub const ALL: [FilterOp; 5] = [
        FilterOp::Gt,
        FilterOp::Lt,
        FilterOp::Eq,
        FilterOp::Ge,
        FilterOp::Le,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Gt => ">",
            FilterOp::Lt => "<",
            FilterOp::Eq => "==",
            FilterOp::Ge => ">=",
            FilterOp::Le => "<=",
        }
    }

    /// Evaluate `value <op> threshold`
    pub fn matches(&self, value: f64, threshold: f64) -> bool {
        match self {
            FilterOp::Gt => value > threshold,
            FilterOp::Lt => value < threshold,
            FilterOp::Eq => value == threshold,
            FilterOp::Ge => value >= threshold,
            FilterOp::Le => value <= threshold,
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOp {
    type Err = CsvStatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CsvStatsError::InvalidOperator(s.to_string()))
    }
}

/// Output representation of a statistics result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Console,
    Structured,
}

impl FromStr for OutputFormat {
    type Err = CsvStatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(OutputFormat::Console),
            "json" | "structured" => Ok(OutputFormat::Structured),
            other => Err(CsvStatsError::InvalidOutputFormat(other.to_string())),
        }
    }
}

/// Constants
pub mod constants {
    pub const NO_HEADERS: &str = "CSV file has no headers";
    pub const NO_DATA_ROWS: &str = "CSV file contains no data rows";
    pub const NO_STATISTICS: &str = "No statistics to display";
    pub const NO_MATCHING_DATA: &str = "No data matches the filter criteria";

    pub const REPORT_TITLE: &str = "CSV Data Statistics";
    pub const REPORT_WIDTH: usize = 60;
    pub const SECTION_WIDTH: usize = 40;
    /// Width of the padded "Label:" part of a report line
    pub const LABEL_WIDTH: usize = 12;
}
