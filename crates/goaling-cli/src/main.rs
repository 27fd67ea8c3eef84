mod interpolate;
mod parse;
mod validate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "goaling")]
#[command(about = "BPO weekly goaling tools: interpolate week 1, parse goal ids, validate uploads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fill a missing week-1 value from week 2, or fill a whole series
    Interpolate {
        /// Metric type (DWR, FCR, or AHT)
        #[arg(long, short = 'm')]
        metric: String,

        /// Week 2 value, for a single calculation
        #[arg(long, short = 'w')]
        week2: Option<f64>,

        /// Comma-separated weekly values; use "None" or an empty token for
        /// missing weeks
        #[arg(long, short = 'v')]
        values: Option<String>,

        /// Also check the walk direction of the filled series
        #[arg(long)]
        validate: bool,

        /// Output as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },
    /// Parse goal ids into their components
    Parse {
        /// Single goal id to parse
        goal_id: Option<String>,

        /// CSV file with goal ids, for batch mode
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Column name containing goal ids
        #[arg(long, short = 'c', default_value = "Unique Goal ID")]
        column: String,

        /// Output as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },
    /// Validate an upload CSV before submission
    Validate {
        /// CSV file to validate
        filepath: PathBuf,

        /// Existing export to check for duplicates
        #[arg(long, short = 'e')]
        existing: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },
}

/// Print a subcommand's help and report failure, for subcommands invoked
/// without any of their mutually exclusive modes.
pub(crate) fn subcommand_help(name: &str) -> anyhow::Result<ExitCode> {
    use clap::CommandFactory;

    let mut command = Cli::command();
    if let Some(subcommand) = command.find_subcommand_mut(name) {
        subcommand.print_help()?;
    }
    Ok(ExitCode::FAILURE)
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(
            std::env::var("GOALING_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        ))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Interpolate {
            metric,
            week2,
            values,
            validate,
            json,
        } => interpolate::run(&metric, week2, values.as_deref(), validate, json),
        Commands::Parse {
            goal_id,
            file,
            column,
            json,
        } => parse::run(goal_id.as_deref(), file.as_deref(), &column, json),
        Commands::Validate {
            filepath,
            existing,
            json,
        } => validate::run(&filepath, existing.as_deref(), json),
    }
}
