//! Error types emitted by the osmid CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use osmid_core::ParseIdError;
use thiserror::Error;

/// Errors emitted by the osmid CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Reading the identifier file failed.
    #[error("failed to read identifiers from {path:?}: {source}")]
    ReadInput {
        /// File that could not be read.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading identifiers from stdin failed.
    #[error("failed to read identifiers from stdin: {0}")]
    ReadStdin(#[source] std::io::Error),
    /// An identifier could not be parsed in strict mode.
    #[error("invalid identifier '{token}': {source}")]
    ParseIdentifier {
        /// Offending input token.
        token: String,
        /// Source error from identifier parsing.
        #[source]
        source: ParseIdError,
    },
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
