use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown_solver::{CountdownSolver, SolverConfig};
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

/// Solve the numbers round of Countdown
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(
    about = "Find every arithmetic expression over the given numbers that comes closest to the target"
)]
#[command(version)]
pub struct CliArgs {
    /// Target number
    #[arg(value_name = "TARGET", allow_negative_numbers = true)]
    pub target: i64,

    /// Source numbers, each used at most once
    #[arg(
        value_name = "x1, x2, ...",
        required = true,
        num_args = 1..,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub numbers: Vec<u64>,

    /// Build the dependency table on a single thread
    #[arg(long)]
    pub single_threaded: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub numbers: Vec<u64>,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            target: args.target,
            numbers: args.numbers,
            solver: SolverConfig {
                parallel: !args.single_threaded,
            },
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
///
/// Malformed arguments make clap print a usage message and exit with code 2.
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
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
    let config = parse_args();

    init_logging(&config.log_level)?;

    info!(
        "Searching for calculations using {:?} closest to {}",
        config.numbers, config.target
    );

    let solver = CountdownSolver::new(config.solver);
    let solution = solver
        .solve(config.target, &config.numbers)
        .context("Solver failed")?;

    if solution.results().is_empty() {
        warn!("No calculation comes closer to the target than using no numbers");
    }

    print!("{}", solution);
    Ok(())
}
