use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_insights::loader::load_dataset;
use transaction_insights::report::{BusinessInsights, InsightsConfig};

fn main() -> Result<()> {
    //NOTE: Two positional arguments do not justify pulling in clap yet
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: transaction-insights [input].csv [log_level:optional] > [report].txt");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let timer = Instant::now();
    let dataset = load_dataset(path)?;
    let insights = BusinessInsights::compute(&dataset, &InsightsConfig::default())?;
    let duration = timer.elapsed();

    info!("Analyzed {} transactions in: {duration:?}", dataset.len());

    write_report_to_stdout(&insights)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report goes to stdout, so logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(insights: &BusinessInsights) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    write!(output, "{insights}")?;

    output.flush()?;

    Ok(())
}
