use crate::analyzer::{ColumnStats, StatisticsResult};
use crate::types::constants::{
    LABEL_WIDTH, NO_STATISTICS, REPORT_TITLE, REPORT_WIDTH, SECTION_WIDTH,
};
use crate::types::OutputFormat;

/// Render a statistics result in the requested format
pub fn format(result: &StatisticsResult, output: OutputFormat) -> String {
    match output {
        OutputFormat::Console => format_console(result),
        OutputFormat::Structured => format_structured(result),
    }
}

/// Human-readable report, every statistic rounded to two decimals
pub fn format_console(result: &StatisticsResult) -> String {
    if result.is_empty() {
        return NO_STATISTICS.to_string();
    }

    let rule = "=".repeat(REPORT_WIDTH);
    let mut lines = vec![rule.clone(), REPORT_TITLE.to_string(), rule.clone()];

    for (column, stats) in result.iter() {
        lines.push(format!("\nColumn: {}", column));
        lines.push("-".repeat(SECTION_WIDTH));
        lines.extend(stat_lines(stats));
    }

    lines.push(rule);
    lines.join("\n")
}

fn stat_lines(stats: &ColumnStats) -> [String; 6] {
    [
        labelled("Count:", stats.count.to_string()),
        labelled("Mean:", fixed2(stats.mean)),
        labelled("Median:", fixed2(stats.median)),
        labelled("Min:", fixed2(stats.min)),
        labelled("Max:", fixed2(stats.max)),
        labelled("Std Dev:", fixed2(stats.stdev)),
    ]
}

/// Two decimals; non-finite values print as `inf`, `-inf` or `nan`
fn fixed2(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.2}", value)
    }
}

fn labelled(label: &str, value: String) -> String {
    format!("  {:<width$}{}", label, value, width = LABEL_WIDTH)
}

/// JSON object keyed by column, two-space indented, full float precision.
/// JSON has no infinities or NaN, so non-finite fields are written as `null`.
pub fn format_structured(result: &StatisticsResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn stats(mean: f64, count: usize) -> ColumnStats {
        ColumnStats {
            mean,
            median: mean,
            min: mean,
            max: mean,
            stdev: 0.0,
            count,
        }
    }

    fn sample_result() -> StatisticsResult {
        let mut result = StatisticsResult::new();
        result.push(
            "age",
            ColumnStats {
                mean: 30.0,
                median: 30.0,
                min: 25.0,
                max: 35.0,
                stdev: 3.807886552931954,
                count: 5,
            },
        );
        result.push("salary", stats(53000.0, 5));
        result
    }

    #[test]
    fn test_console_empty() {
        assert_eq!(format_console(&StatisticsResult::new()), "No statistics to display");
    }

    #[test]
    fn test_console_layout() {
        let mut result = StatisticsResult::new();
        result.push("age", stats(30.0, 5));

        let expected = [
            "=".repeat(60),
            "CSV Data Statistics".to_string(),
            "=".repeat(60),
            String::new(),
            "Column: age".to_string(),
            "-".repeat(40),
            "  Count:      5".to_string(),
            "  Mean:       30.00".to_string(),
            "  Median:     30.00".to_string(),
            "  Min:        30.00".to_string(),
            "  Max:        30.00".to_string(),
            "  Std Dev:    0.00".to_string(),
            "=".repeat(60),
        ]
        .join("\n");

        assert_eq!(format_console(&result), expected);
    }

    #[test]
    fn test_console_multiple_columns_in_order() {
        let output = format_console(&sample_result());
        let age = output.find("Column: age").unwrap();
        let salary = output.find("Column: salary").unwrap();
        assert!(age < salary);
        assert!(output.contains("  Std Dev:    3.81"));
        assert!(output.contains("  Mean:       53000.00"));
    }

    #[test]
    fn test_console_two_decimals() {
        let mut result = StatisticsResult::new();
        result.push("big", stats(1000000.5, 2));
        result.push("small", stats(0.001, 1));
        result.push("neg", stats(-12.345678, 3));

        let output = format_console(&result);
        assert!(output.contains("1000000.50"));
        assert!(output.contains("0.00"));
        assert!(output.contains("-12.35"));
        assert!(output.contains("  Count:      2\n"));
    }

    #[test]
    fn test_structured_round_trip() {
        let mut result = StatisticsResult::new();
        result.push(
            "precise",
            ColumnStats {
                mean: 123.456789,
                median: 98.765432,
                min: 0.1 + 0.2,
                max: 1e300,
                stdev: 1.0 / 3.0,
                count: 3,
            },
        );

        let output = format_structured(&result);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        let back: ColumnStats = serde_json::from_value(parsed["precise"].clone()).unwrap();
        assert_eq!(back, *result.get("precise").unwrap());
    }

    #[test]
    fn test_structured_order_and_indent() {
        let output = format_structured(&sample_result());
        assert!(output.starts_with("{\n  \"age\": {\n    \"mean\": 30.0,"));

        let age = output.find("\"age\"").unwrap();
        let salary = output.find("\"salary\"").unwrap();
        assert!(age < salary);

        let keys = ["\"mean\"", "\"median\"", "\"min\"", "\"max\"", "\"stdev\"", "\"count\""];
        let positions: Vec<usize> = keys.iter().map(|k| output.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(output.contains("\"count\": 5"));
    }

    fn non_finite_result() -> StatisticsResult {
        let mut result = StatisticsResult::new();
        result.push(
            "score",
            ColumnStats {
                mean: f64::INFINITY,
                median: f64::INFINITY,
                min: f64::NEG_INFINITY,
                max: f64::INFINITY,
                stdev: f64::NAN,
                count: 3,
            },
        );
        result
    }

    #[test]
    fn test_console_non_finite() {
        let output = format_console(&non_finite_result());
        assert!(output.contains("  Mean:       inf\n"));
        assert!(output.contains("  Median:     inf\n"));
        assert!(output.contains("  Min:        -inf\n"));
        assert!(output.contains("  Max:        inf\n"));
        assert!(output.contains("  Std Dev:    nan\n"));
        assert!(output.contains("  Count:      3\n"));
    }

    #[test]
    fn test_structured_non_finite_as_null() {
        let output = format_structured(&non_finite_result());
        let parsed: Value = serde_json::from_str(&output).unwrap();
        let score = &parsed["score"];
        for field in ["mean", "median", "min", "max", "stdev"] {
            assert!(score[field].is_null(), "{field}");
        }
        assert_eq!(score["count"], 3);
    }

    #[test]
    fn test_structured_extreme_magnitudes() {
        let mut result = StatisticsResult::new();
        result.push(
            "big",
            ColumnStats {
                mean: f64::MAX,
                median: 1e308,
                min: -f64::MAX,
                max: f64::MIN_POSITIVE,
                stdev: 1.4142135623730951e308,
                count: 2,
            },
        );

        let output = format_structured(&result);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        let back: ColumnStats = serde_json::from_value(parsed["big"].clone()).unwrap();
        assert_eq!(back, *result.get("big").unwrap());
    }

    #[test]
    fn test_structured_empty() {
        assert_eq!(format_structured(&StatisticsResult::new()), "{}");
    }

    #[test]
    fn test_format_dispatch() {
        let result = sample_result();
        assert_eq!(format(&result, OutputFormat::Console), format_console(&result));
        assert_eq!(format(&result, OutputFormat::Structured), format_structured(&result));
    }
}
