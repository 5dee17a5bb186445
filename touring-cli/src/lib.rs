//! Command-line interface for scoring touring itineraries.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod score;

pub use error::CliError;

use score::{ScoreArgs, run_score};

const ARG_ITINERARY: &str = "itinerary";
const ARG_CATALOG: &str = "catalog";
const ENV_ITINERARY: &str = "TOURING_CMDS_SCORE_ITINERARY";
const ENV_CATALOG: &str = "TOURING_CMDS_SCORE_CATALOG";

/// Run the touring CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, input files, or the
/// simulation itself fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "touring",
    about = "Replay and score multi-day sightseeing itineraries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score an itinerary against a site catalog.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
