//! Command-line interface for sorting and counting OSM identifiers.
#![forbid(unsafe_code)]

use std::io::{Read, Write};

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

mod error;
mod ids;

pub use error::CliError;
use ids::IdList;

const ARG_INPUT: &str = "input";

/// Run the CLI with the current process arguments, stdin and stdout.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, input or output fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run_with(cli, &mut stdin, &mut stdout)
}

fn run_with(cli: Cli, stdin: &mut dyn Read, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Sort(command) => {
            let config = command.options.into_config()?;
            let ids = IdList::load(&config, &command.ids, stdin)?;
            ids.sorted().write_lines(writer)
        }
        Command::Count(command) => {
            let config = command.options.into_config()?;
            let ids = IdList::load(&config, &command.ids, stdin)?;
            ids.write_counts(writer)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "osmid",
    about = "Sort and count OpenStreetMap feature and element identifiers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print identifiers ordered by kind, reference and version.
    Sort(IdCommand),
    /// Print how many identifiers of each kind were read.
    Count(IdCommand),
}

#[derive(Debug, Args)]
struct IdCommand {
    #[command(flatten)]
    options: IdOptions,
    /// Identifiers such as `node/1`, `way/3:2` or `changeset/7`. When
    /// omitted, identifiers are read from `--input` or stdin.
    #[arg(value_name = "id")]
    ids: Vec<String>,
}

/// Layered options shared by the `sort` and `count` subcommands.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Options can come from CLI flags, configuration files, or \
                 environment variables prefixed with OSMID_.",
    about = "Describe where identifiers come from and how to parse them"
)]
#[ortho_config(prefix = "OSMID")]
struct IdOptions {
    /// File of whitespace-separated identifiers.
    #[arg(long = ARG_INPUT, value_name = "path")]
    #[serde(default)]
    input: Option<Utf8PathBuf>,
    /// Parse versionless feature identifiers instead of element identifiers.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    features: Option<bool>,
    /// Fail on the first unparsable identifier instead of skipping it.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    strict: Option<bool>,
}

impl IdOptions {
    fn into_config(self) -> Result<IdConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(IdConfig::from(merged))
    }
}

/// Resolved identifier options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct IdConfig {
    input: Option<Utf8PathBuf>,
    features: bool,
    strict: bool,
}

impl From<IdOptions> for IdConfig {
    fn from(options: IdOptions) -> Self {
        Self {
            input: options.input,
            features: options.features.unwrap_or(false),
            strict: options.strict.unwrap_or(false),
        }
    }
}

#[cfg(test)]
fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<IdConfig, CliError> {
    let merged = IdOptions::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(IdConfig::from(merged))
}

#[cfg(test)]
mod tests;
