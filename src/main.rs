use clap::Parser;
use csvstats::{Config, CsvProcessor, FilterSpec};
use std::process::ExitCode;

/// CSV Stats - Descriptive statistics for the numeric columns of a CSV file
#[derive(Parser, Debug)]
#[command(name = "csvstats")]
#[command(about = "Process CSV files and generate statistics")]
#[command(
    version,
    after_help = "Examples:\n  csvstats data.csv\n  csvstats data.csv --columns age salary\n  csvstats data.csv --filter \"age > 30\"\n  csvstats data.csv --filter \"salary >= 50000\" --output json\n\nOn failure the tool prints a message starting with \"Error: \" and exits with status 1."
)]
struct Args {
    /// Path to CSV file
    file: String,

    /// Columns to analyze (default: all numeric columns)
    #[arg(long = "columns", num_args = 1..)]
    columns: Option<Vec<String>>,

    /// Filter rows (format: "column operator value", e.g. "age > 30")
    #[arg(long = "filter", value_name = "FILTER")]
    filter: Option<String>,

    /// Output format: console, json or structured
    #[arg(long = "output", default_value = "console")]
    output: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> csvstats::Result<String> {
    let filter = args
        .filter
        .as_deref()
        .map(str::parse::<FilterSpec>)
        .transpose()?;

    let config = Config::new(args.file)
        .with_columns(args.columns)
        .with_filter(filter)
        .with_output_format(args.output);

    CsvProcessor::new(config).process()
}
