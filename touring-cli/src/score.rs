//! Score command implementation for the touring CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use touring_core::{Evaluation, Simulator, TraceEvent};
use touring_fs::EntryKind;

use crate::{ARG_CATALOG, ARG_ITINERARY, CliError, ENV_CATALOG, ENV_ITINERARY};

/// Decimal places used when printing the total score.
const SCORE_PLACES: usize = 5;

/// How the score command reports its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Trace lines (when verbose) followed by `Total Points: <score>`.
    #[default]
    Text,
    /// The full evaluation as pretty-printed JSON.
    Json,
}

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Replay an itinerary day by day against a catalog of sites \
                 and their opening hours, then report the points earned. \
                 Paths can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Score an itinerary against a site catalog"
)]
#[ortho_config(prefix = "TOURING")]
pub(crate) struct ScoreArgs {
    /// Path to the itinerary file, one line of site ids per day.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) itinerary: Option<Utf8PathBuf>,
    /// Path to the catalog file listing sites and opening hours.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Print a narrative of every simulation step (text output only).
    #[arg(long, short = 'v')]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) verbose: bool,
    /// Output format.
    #[arg(long, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) itinerary: Utf8PathBuf,
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) verbose: bool,
    pub(crate) format: OutputFormat,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.itinerary, ARG_ITINERARY)?;
        Self::require_existing(&self.catalog, ARG_CATALOG)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match touring_fs::entry_kind(path) {
            Ok(EntryKind::File) => Ok(()),
            Ok(EntryKind::Directory | EntryKind::Other) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let itinerary = args.itinerary.ok_or(CliError::MissingArgument {
            field: ARG_ITINERARY,
            env: ENV_ITINERARY,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;
        Ok(Self {
            itinerary,
            catalog,
            verbose: args.verbose,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(super) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    score_with_config(&config, writer)
}

pub(super) fn score_with_config(
    config: &ScoreConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog = touring_data::read_catalog(&config.catalog)?;
    let itinerary = touring_data::read_itinerary(&config.itinerary)?;
    debug!(
        "scoring {} against {} catalogued sites",
        config.itinerary,
        catalog.site_count()
    );

    let mut trace: Vec<TraceEvent> = Vec::new();
    let evaluation = Simulator::new(&catalog).evaluate_with(&itinerary, &mut trace)?;
    match config.format {
        OutputFormat::Text => {
            let shown = if config.verbose { trace.as_slice() } else { &[] };
            write_text(writer, shown, &evaluation)
        }
        OutputFormat::Json => write_json(writer, &evaluation),
    }
}

fn write_text(
    writer: &mut dyn Write,
    trace: &[TraceEvent],
    evaluation: &Evaluation,
) -> Result<(), CliError> {
    for event in trace {
        writeln!(writer, "{event}").map_err(CliError::WriteScoreOutput)?;
    }
    writeln!(
        writer,
        "Total Points: {}",
        evaluation.rounded_score(SCORE_PLACES)
    )
    .map_err(CliError::WriteScoreOutput)
}

fn write_json(writer: &mut dyn Write, evaluation: &Evaluation) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(evaluation).map_err(CliError::SerialiseEvaluation)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteScoreOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteScoreOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
