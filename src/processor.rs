use crate::analyzer::{calculate_stats, filter_rows};
use crate::config::{Config, FilterSpec};
use crate::error::{CsvStatsError, Result};
use crate::loader::load;
use crate::output;
use crate::table::Table;
use crate::types::constants::NO_MATCHING_DATA;
use crate::types::OutputFormat;
use log::{debug, info};
use std::path::Path;

/// Runs load, filter, statistics and formatting for one configuration
pub struct CsvProcessor {
    config: Config,
}

impl CsvProcessor {
    pub fn new(config: Config) -> Self {
        CsvProcessor { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the pipeline and return the rendered result
    pub fn process(&self) -> Result<String> {
        let mut table = load(&self.config.path)?;

        if let Some(filter) = &self.config.filter {
            table = apply_filter(&table, filter)?;

            if table.is_empty() {
                info!("Filter '{}' matched no rows", filter);
                return Ok(NO_MATCHING_DATA.to_string());
            }
        }

        let columns = match &self.config.columns {
            Some(columns) => columns.clone(),
            None => numeric_columns(&table),
        };
        if columns.is_empty() {
            return Err(CsvStatsError::NoNumericColumns);
        }
        debug!("Analyzing columns: {}", columns.join(", "));

        let stats = calculate_stats(&table, columns.as_slice())?;

        let format: OutputFormat = self.config.output_format.parse()?;
        Ok(output::format(&stats, format))
    }
}

/// Run the whole pipeline for a single file
pub fn run<P: AsRef<Path>>(
    path: P,
    columns: Option<&[String]>,
    filter: Option<&FilterSpec>,
    output_format: &str,
) -> Result<String> {
    let config = Config::new(path.as_ref())
        .with_columns(columns.map(|c| c.to_vec()))
        .with_filter(filter.cloned())
        .with_output_format(output_format);

    CsvProcessor::new(config).process()
}

fn apply_filter(table: &Table, filter: &FilterSpec) -> Result<Table> {
    filter_rows(table, &filter.column, filter.op, filter.threshold)
}

/// Names of the columns holding at least one number, in table order
pub fn numeric_columns(table: &Table) -> Vec<String> {
    table
        .columns()
        .iter()
        .filter(|c| c.has_numbers())
        .map(|c| c.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    #[test]
    fn test_numeric_columns() {
        let table = Table::new(vec![
            Column::new("name", vec!["a".into(), "b".into()]),
            Column::new("age", vec![1.0.into(), 2.0.into()]),
            Column::new("note", vec!["".into(), 3.0.into()]),
            Column::new("city", vec!["x".into(), "".into()]),
        ])
        .unwrap();

        assert_eq!(numeric_columns(&table), vec!["age", "note"]);
    }

    #[test]
    fn test_numeric_columns_none() {
        let table = Table::new(vec![Column::new("name", vec!["a".into()])]).unwrap();
        assert!(numeric_columns(&table).is_empty());
    }
}
