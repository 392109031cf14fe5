use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use venture_cli::app::{self, ScoreArgs};
use venture_cli::{config, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Business idea viability scoring.
///
/// Collects a handful of answers about a business idea (price, cost,
/// traffic, conversion, expenses, investment) and scores it out of 100.
#[derive(Debug, Parser)]
#[command(name = "venture", version)]
struct Cli {
    /// TOML file overriding the scoring weights and thresholds.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `venture_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Directory to write `<app>.log` into. Must already exist.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Suppress log output on stderr. File logging is unaffected.
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer the questionnaire step by step.
    Wizard,

    /// Score a single idea given as flags.
    Score(ScoreArgs),

    /// Score every row of a CSV file and print results as CSV.
    Batch {
        /// CSV file whose headers are answer names such as `pricePoint`.
        file: PathBuf,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Applies the logging flags on top of the default subscriber.
fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    logging::init_default_logging();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if cli.quiet {
        logging::set_console_enabled(false)?;
    }
    if let Some(dir) = &cli.log_dir {
        let path = logging::enable_file_logging(dir)?;
        debug!(path = %path.display(), "file logging enabled");
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let scorer = config::build_scorer(cli.config.as_deref()).context("building the scorer")?;

    match &cli.command {
        Command::Wizard => {
            let stdin = io::stdin();
            let result = app::run_wizard(scorer, stdin.lock(), io::stdout().lock())
                .context("running the questionnaire")?;
            if let Some(result) = result {
                info!(score = result.score, rating = %result.rating, "last analysis");
            }
        }
        Command::Score(args) => {
            app::run_score(&scorer, args, io::stdout().lock()).context("writing the report")?;
        }
        Command::Batch { file } => {
            app::run_batch(&scorer, file, io::stdout().lock())?;
        }
    }

    Ok(())
}
