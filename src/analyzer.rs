use crate::error::{CsvStatsError, Result};
use crate::table::Table;
use crate::types::FilterOp;
use log::debug;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Summary statistics of the numeric cells of one column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub stdev: f64,
    pub count: usize,
}

impl ColumnStats {
    /// Compute statistics over a non-empty slice of numbers
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mean = mean(values);
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        Some(ColumnStats {
            mean,
            median: median(values),
            min,
            max,
            stdev: sample_stdev(values, mean),
            count: values.len(),
        })
    }
}

/// Statistics per column, in the order the columns were requested
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsResult {
    columns: Vec<(String, ColumnStats)>,
}

impl StatisticsResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, stats: ColumnStats) {
        self.columns.push((column.into(), stats));
    }

    pub fn get(&self, column: &str) -> Option<&ColumnStats> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnStats)> {
        self.columns.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for StatisticsResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, stats) in &self.columns {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}

/// Calculate statistics for the requested columns.
///
/// Text cells are skipped. Fails on the first column that is missing from the
/// table or has no numeric cells at all.
pub fn calculate_stats<S: AsRef<str>>(table: &Table, columns: &[S]) -> Result<StatisticsResult> {
    let mut result = StatisticsResult::new();

    for name in columns {
        let name = name.as_ref();
        let column = table.require_column(name)?;
        let values: Vec<f64> = column.numbers().collect();

        let stats = ColumnStats::from_values(&values)
            .ok_or_else(|| CsvStatsError::NoNumericData(name.to_string()))?;

        debug!("Column '{}': {} numeric values", name, stats.count);
        result.push(name, stats);
    }

    Ok(result)
}

/// Keep the rows whose `column` cell is a number satisfying `cell <op> threshold`.
///
/// Rows with a text cell in `column` never match. The result has the same
/// columns as the input, possibly with zero rows.
pub fn filter_rows(table: &Table, column: &str, op: FilterOp, threshold: f64) -> Result<Table> {
    let target = table.require_column(column)?;

    let matching: Vec<usize> = target
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| {
            cell.as_number()
                .is_some_and(|value| op.matches(value, threshold))
        })
        .map(|(idx, _)| idx)
        .collect();

    debug!(
        "Filter {} {} {} kept {} of {} rows",
        column,
        op,
        threshold,
        matching.len(),
        table.row_count()
    );

    Ok(table.select_rows(&matching))
}

/// Sum using Kahan compensated summation.
/// Compensation stops once a term or the running sum is not finite, so an
/// infinite value gives the same result wherever it sits in the input.
fn kahan_sum(values: &[f64]) -> f64 {
    let mut sum: f64 = 0.0;
    let mut compensation = 0.0;
    for &v in values {
        if !(sum.is_finite() && v.is_finite()) {
            sum += v;
            continue;
        }
        let y = v - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Largest power of two not above the largest magnitude; dividing by it is exact
fn pow2_scale(values: &[f64]) -> f64 {
    let max_abs = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if max_abs == 0.0 {
        return 1.0;
    }
    2.0_f64.powi(max_abs.log2().floor() as i32)
}

fn mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum = kahan_sum(values);
    if sum.is_finite() || !all_finite(values) {
        return sum / n;
    }

    // sum of finite values overflowed; each x / n keeps partial sums in range
    let shares: Vec<f64> = values.iter().map(|v| v / n).collect();
    kahan_sum(&shares)
}

/// Middle value of the sorted data; mean of the two middle values for even counts
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        let (lo, hi) = (sorted[mid - 1], sorted[mid]);
        let sum = lo + hi;
        if sum.is_finite() || !(lo.is_finite() && hi.is_finite()) {
            sum / 2.0
        } else {
            lo / 2.0 + hi / 2.0
        }
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (n - 1 denominator); 0.0 for a single value
fn sample_stdev(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let denom = (values.len() - 1) as f64;

    let squares: Vec<f64> = values.iter().map(|v| (v - mean).powi(2)).collect();
    let stdev = (kahan_sum(&squares) / denom).sqrt();
    if stdev.is_finite() || !mean.is_finite() || !all_finite(values) {
        return stdev;
    }

    // squared deviations overflowed; redo the sum with every value scaled into [-2, 2]
    let scale = pow2_scale(values);
    let scaled_mean = mean / scale;
    let squares: Vec<f64> = values
        .iter()
        .map(|v| (v / scale - scaled_mean).powi(2))
        .collect();
    (kahan_sum(&squares) / denom).sqrt() * scale
}
