pub mod analyzer;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod processor;
pub mod table;
pub mod types;
pub mod validation;

pub use analyzer::{calculate_stats, filter_rows, ColumnStats, StatisticsResult};
pub use config::{Config, FilterSpec};
pub use error::{CsvStatsError, ErrorKind, Result};
pub use loader::load;
pub use output::{format_console, format_structured};
pub use processor::{run, CsvProcessor};
pub use table::{Column, Table};
pub use types::{Cell, FilterOp, OutputFormat};
