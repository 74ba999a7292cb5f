//! Reading, parsing and printing identifier lists.

use std::fmt::Display;
use std::io::{Read, Write};
use std::str::FromStr;

use log::{debug, warn};
use osmid_core::{ElementIds, FeatureIds, Kind, KindCounts, ParseIdError};

use crate::{CliError, IdConfig};

/// Identifiers read for one command, in input order until sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IdList {
    Features(FeatureIds),
    Elements(ElementIds),
}

impl IdList {
    /// Read identifiers from positional arguments, the input file, or stdin,
    /// in that order of preference.
    pub(crate) fn load(
        config: &IdConfig,
        ids: &[String],
        stdin: &mut dyn Read,
    ) -> Result<Self, CliError> {
        let text = read_source(config, ids, stdin)?;
        Self::parse(&text, config)
    }

    pub(crate) fn parse(text: &str, config: &IdConfig) -> Result<Self, CliError> {
        if config.features {
            parse_tokens(text, config.strict).map(Self::Features)
        } else {
            parse_tokens(text, config.strict).map(Self::Elements)
        }
    }

    #[must_use]
    pub(crate) fn sorted(self) -> Self {
        match self {
            Self::Features(ids) => Self::Features(ids.sorted()),
            Self::Elements(ids) => Self::Elements(ids.sorted()),
        }
    }

    pub(crate) fn counts(&self) -> KindCounts {
        match self {
            Self::Features(ids) => ids.counts(),
            Self::Elements(ids) => ids.counts(),
        }
    }

    pub(crate) fn write_lines(&self, writer: &mut dyn Write) -> Result<(), CliError> {
        match self {
            Self::Features(ids) => write_each(writer, ids.iter()),
            Self::Elements(ids) => write_each(writer, ids.iter()),
        }
    }

    pub(crate) fn write_counts(&self, writer: &mut dyn Write) -> Result<(), CliError> {
        let counts = self.counts();
        for kind in Kind::ALL {
            writeln!(writer, "{kind} {}", counts.get(kind)).map_err(CliError::WriteOutput)?;
        }
        Ok(())
    }
}

fn read_source(
    config: &IdConfig,
    ids: &[String],
    stdin: &mut dyn Read,
) -> Result<String, CliError> {
    if !ids.is_empty() {
        return Ok(ids.join("\n"));
    }
    if let Some(path) = &config.input {
        debug!("Reading identifiers from {path}");
        return std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            CliError::ReadInput {
                path: path.clone(),
                source,
            }
        });
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .map_err(CliError::ReadStdin)?;
    Ok(text)
}

fn parse_tokens<T, C>(text: &str, strict: bool) -> Result<C, CliError>
where
    T: FromStr<Err = ParseIdError>,
    C: FromIterator<T>,
{
    text.split_whitespace()
        .filter_map(|token| match token.parse::<T>() {
            Ok(id) => Some(Ok(id)),
            Err(source) if strict => Some(Err(CliError::ParseIdentifier {
                token: token.to_owned(),
                source,
            })),
            Err(err) => {
                warn!("Skipped identifier '{token}': {err}");
                None
            }
        })
        .collect()
}

fn write_each<'a, T, I>(writer: &mut dyn Write, ids: I) -> Result<(), CliError>
where
    T: Display + 'a,
    I: Iterator<Item = &'a T>,
{
    for id in ids {
        writeln!(writer, "{id}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
