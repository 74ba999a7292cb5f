//! Error types raised while building or parsing identifiers.

use std::num::ParseIntError;

use thiserror::Error;

use crate::Kind;

/// Errors returned by the fallible identifier constructors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdError {
    /// The reference does not fit the packed layout.
    #[error("{kind} reference {reference} is outside the supported range")]
    ReferenceOutOfRange {
        /// Kind of the rejected identifier.
        kind: Kind,
        /// Reference that could not be packed.
        reference: i64,
    },
    /// The version does not fit the packed layout.
    #[error("{kind} version {version} exceeds the supported maximum of {max}", max = crate::codec::MAX_VERSION)]
    VersionOutOfRange {
        /// Kind of the rejected identifier.
        kind: Kind,
        /// Version that could not be packed.
        version: u32,
    },
    /// A typed reference was requested from an identifier of another kind.
    #[error("expected a {expected} identifier, found {found}")]
    KindMismatch {
        /// Kind the caller asked for.
        expected: Kind,
        /// Kind carried by the identifier.
        found: Kind,
    },
    /// A raw scalar does not decode to a valid identifier.
    #[error("scalar {scalar} is not a valid packed identifier")]
    InvalidScalar {
        /// The rejected scalar.
        scalar: i64,
    },
}

/// Errors returned when parsing the `kind/reference[:version]` string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseIdError {
    /// The input has no `/` between kind and reference.
    #[error("identifier '{input}' is missing the '/' separator")]
    MissingSeparator {
        /// Offending input.
        input: String,
    },
    /// The kind name is not one of the four known kinds.
    #[error("unknown element kind '{name}'")]
    UnknownKind {
        /// Offending kind name.
        name: String,
    },
    /// The reference is not a decimal integer.
    #[error("invalid reference in '{input}'")]
    InvalidReference {
        /// Offending input.
        input: String,
        /// Source error from integer parsing.
        #[source]
        source: ParseIntError,
    },
    /// The version is not a non-negative decimal integer.
    #[error("invalid version in '{input}'")]
    InvalidVersion {
        /// Offending input.
        input: String,
        /// Source error from integer parsing.
        #[source]
        source: ParseIntError,
    },
    /// The parsed values do not fit the packed layout.
    #[error(transparent)]
    OutOfRange(#[from] IdError),
}
