use clap::Parser;
use rwscan::config::{ConfigError, LoggingPreferences};
use rwscan::logging::{self, LogLevel};
use rwscan::pipeline::{self, ReportSummary};
use rwscan::{OutputFormat, RebalanceStrategy, ScanConfig};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rwscan", version)]
#[command(about = "List the reserved words and user-defined identifiers in source files", long_about = None)]
struct Args {
    /// Source files to scan [default: Palindrome.java]
    sources: Vec<PathBuf>,

    /// Whitespace-separated reserved word list [default: reservedWords.txt]
    #[arg(short, long)]
    vocabulary: Option<PathBuf>,

    /// TOML file with scan settings; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format: text or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// eager-both, eager-touched or deferred
    #[arg(short, long)]
    rebalance: Option<RebalanceStrategy>,

    /// error, warning, info or debug
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Emit log events as JSON lines
    #[arg(long)]
    structured_logs: bool,

    /// Print scan statistics to stderr after the report
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_logging(&args)?;

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            logging::safe_log_error(e.error_code(), &e.to_string());
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match pipeline::run(&config) {
        Ok(result) => result,
        Err(e) => {
            logging::safe_log_error(e.error_code(), &e.to_string());
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = pipeline::write_report(&mut out, &result, config.output_format) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if args.stats {
        let summary = ReportSummary::from(&result);
        let mut err = io::stderr().lock();
        match config.output_format {
            OutputFormat::Text => writeln!(err, "{}", summary)?,
            OutputFormat::Json => writeln!(err, "{}", serde_json::to_string(&summary)?)?,
        }
    }

    Ok(())
}

fn init_logging(args: &Args) -> Result<(), String> {
    let mut preferences = LoggingPreferences::default();
    if let Some(level) = args.log_level {
        preferences.min_log_level = level;
    }
    if args.structured_logs {
        preferences.use_structured_logging = true;
    }

    logging::config::init_runtime_preferences(preferences)?;
    logging::init_global_logging()
}

/// Defaults and environment, then the TOML file, then flags
fn build_config(args: &Args) -> Result<ScanConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::from_toml_file(path)?,
        None => ScanConfig::default(),
    };

    if let Some(vocabulary) = &args.vocabulary {
        config.vocabulary_path = vocabulary.clone();
    }
    if !args.sources.is_empty() {
        config.source_paths = args.sources.clone();
    }
    if let Some(format) = args.format {
        config.output_format = format;
    }
    if let Some(strategy) = args.rebalance {
        config.rebalance_strategy = strategy;
    }

    config.validate()?;
    Ok(config)
}
