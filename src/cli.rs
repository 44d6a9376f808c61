use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hexpuzzle::solver::constants::DEFAULT_MAX_LEN;
use hexpuzzle::{HexSolver, SearchConfig, Sequence, VerificationReport};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Hexpuzzle - Find the longest hex number with divisible prefixes and a middle 3
#[derive(Parser, Debug)]
#[command(name = "hexpuzzle")]
#[command(
    about = "Find the longest hex number where each prefix of length k leaves remainder k-1 and the middle digit is 3"
)]
#[command(version)]
pub struct CliArgs {
    /// Longest sequence the search will build
    #[arg(short, long, default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Verify this hex digit string instead of searching
    #[arg(long, value_name = "HEX")]
    pub verify: Option<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// What the application was asked to do
#[derive(Debug)]
pub enum Mode {
    Search(SearchConfig),
    Verify(Sequence),
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub mode: Mode,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let mode = match args.verify {
        Some(text) => {
            let seq = text
                .parse::<Sequence>()
                .context("Invalid hex digit string")?;
            Mode::Verify(seq)
        }
        None => Mode::Search(SearchConfig::with_max_len(args.max_len)),
    };

    Ok(CliConfig {
        mode,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    match config.mode {
        Mode::Search(search) => run_search(search),
        Mode::Verify(seq) => run_verify(&seq),
    }
}

fn run_search(search: SearchConfig) -> Result<()> {
    let solver = HexSolver::new(search).context("Invalid search configuration")?;

    println!("Solving hex puzzle...");
    println!("Looking for longest hex number where each prefix satisfies the divisibility condition");
    println!("and the middle digit is 3");
    println!();

    let outcome = solver.find_longest_with(|found| {
        println!("Found valid number of length {}: {}", found.len(), found);
    });
    info!(
        "Pruned {} candidates by prefix and {} by middle digit",
        outcome.stats.prefix_pruned, outcome.stats.middle_pruned
    );

    match outcome.solution() {
        Some(best) => {
            println!();
            println!("Best solution found: {}", best);
            print_report(best)?;
            Ok(())
        }
        None => {
            warn!("Search exhausted without a valid sequence");
            println!("No solution found!");
            Ok(())
        }
    }
}

fn run_verify(seq: &Sequence) -> Result<()> {
    info!("Verifying '{}' without searching", seq);

    let report = print_report(seq)?;
    if report.all_valid() {
        println!("Valid: yes");
    } else {
        let failed: Vec<String> = report.failed_checks().map(|c| c.k.to_string()).collect();
        if !report.middle.satisfied() {
            println!("Middle digit rule: failed");
        }
        if !failed.is_empty() {
            println!("Failed prefix checks: k={}", failed.join(", "));
        }
        println!("Valid: no");
    }
    Ok(())
}

fn print_report(seq: &Sequence) -> Result<VerificationReport> {
    let report = VerificationReport::build(seq).context("Cannot verify an empty sequence")?;
    println!();
    println!("{}", report);
    Ok(report)
}
