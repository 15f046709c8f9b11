use thiserror::Error;

/// Kind of failure, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    MalformedInput,
    UnknownColumn,
    NoNumericData,
    NoNumericColumns,
    InvalidOperator,
    InvalidFilterSpec,
    InvalidOutputFormat,
    Io,
}

#[derive(Error, Debug)]
pub enum CsvStatsError {
    #[error("CSV file not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    MalformedInput(String),

    #[error("Column '{0}' not found in data")]
    UnknownColumn(String),

    #[error("Column '{0}' contains no numeric values")]
    NoNumericData(String),

    #[error("No numeric columns found to analyze")]
    NoNumericColumns,

    #[error("Invalid operator '{0}'. Must be one of: >, <, ==, >=, <=")]
    InvalidOperator(String),

    #[error("{0}")]
    InvalidFilterSpec(String),

    #[error("Invalid output format: {0}. Must be 'console', 'json' or 'structured'")]
    InvalidOutputFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CsvStatsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CsvStatsError::NotFound(_) => ErrorKind::NotFound,
            CsvStatsError::MalformedInput(_) => ErrorKind::MalformedInput,
            CsvStatsError::UnknownColumn(_) => ErrorKind::UnknownColumn,
            CsvStatsError::NoNumericData(_) => ErrorKind::NoNumericData,
            CsvStatsError::NoNumericColumns => ErrorKind::NoNumericColumns,
            CsvStatsError::InvalidOperator(_) => ErrorKind::InvalidOperator,
            CsvStatsError::InvalidFilterSpec(_) => ErrorKind::InvalidFilterSpec,
            CsvStatsError::InvalidOutputFormat(_) => ErrorKind::InvalidOutputFormat,
            CsvStatsError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, CsvStatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = CsvStatsError::UnknownColumn("height".to_string());
        assert_eq!(e.to_string(), "Column 'height' not found in data");
        assert_eq!(e.kind(), ErrorKind::UnknownColumn);

        let e = CsvStatsError::MalformedInput("CSV file has no headers".to_string());
        assert!(e.to_string().contains("no headers"));
    }

    #[test]
    fn test_output_format_message_lists_accepted_values() {
        let message = CsvStatsError::InvalidOutputFormat("xml".to_string()).to_string();
        assert_eq!(
            message,
            "Invalid output format: xml. Must be 'console', 'json' or 'structured'"
        );
    }

    #[test]
    fn test_io_error_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: CsvStatsError = io.into();
        assert_eq!(e.kind(), ErrorKind::Io);
    }
}
