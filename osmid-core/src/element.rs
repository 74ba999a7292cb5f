//! Versioned identifiers: a feature at a point in its edit history.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::feature::split_feature;
use crate::{FeatureId, IdError, Kind, ParseIdError};

/// Identifies one version of an entity.
///
/// Ordered by kind rank, then reference, then version. Changeset elements
/// always carry version 0 and render without it.
///
/// # Examples
/// ```
/// use osmid_core::{ElementId, Kind, NodeId, VersionedRef};
///
/// let id = NodeId(1).element_id(2);
/// assert_eq!(id.kind(), Kind::Node);
/// assert_eq!(id.version(), 2);
/// assert_eq!(id.to_string(), "node/1:2");
/// assert_eq!("node/1:2".parse::<ElementId>(), Ok(id));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(i64);

impl ElementId {
    /// Build an identifier from its parts.
    ///
    /// A changeset's `version` is ignored and stored as 0.
    ///
    /// # Panics
    /// Panics when `reference` is outside
    /// [`ELEMENT_REF_MIN`](codec::ELEMENT_REF_MIN)`..=`[`ELEMENT_REF_MAX`](codec::ELEMENT_REF_MAX)
    /// or when a versioned kind is given a version above
    /// [`MAX_VERSION`](codec::MAX_VERSION). Use [`ElementId::try_new`] for
    /// untrusted input.
    #[must_use]
    pub fn new(kind: Kind, reference: i64, version: u32) -> Self {
        match Self::try_new(kind, reference, version) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build an identifier, rejecting values the layout cannot hold.
    ///
    /// # Errors
    /// Returns [`IdError::ReferenceOutOfRange`] or
    /// [`IdError::VersionOutOfRange`].
    pub fn try_new(kind: Kind, reference: i64, version: u32) -> Result<Self, IdError> {
        codec::encode_element(kind, reference, version).map(Self)
    }

    /// Rebuild an identifier from a scalar previously returned by [`ElementId::raw`].
    ///
    /// # Errors
    /// Returns [`IdError::InvalidScalar`] for negative scalars and for
    /// changeset scalars carrying a non-zero version.
    pub fn from_raw(scalar: i64) -> Result<Self, IdError> {
        codec::validate_element(scalar).map(Self)
    }

    /// Return the packed scalar. Comparing scalars compares identifiers.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Return the entity kind.
    #[must_use]
    pub fn kind(self) -> Kind {
        codec::decode_element(self.0).0
    }

    /// Return the reference number within the kind.
    #[must_use]
    pub fn reference(self) -> i64 {
        codec::decode_element(self.0).1
    }

    /// Return the version. Always 0 for changesets.
    #[must_use]
    pub fn version(self) -> u32 {
        codec::decode_element(self.0).2
    }

    /// Drop the version, recovering the feature identifier.
    #[must_use]
    pub fn feature_id(self) -> FeatureId {
        let (kind, reference, _) = codec::decode_element(self.0);
        // Element references are a subset of feature references.
        FeatureId::new(kind, reference)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, reference, version) = codec::decode_element(self.0);
        if kind.is_versioned() {
            write!(f, "{kind}/{reference}:{version}")
        } else {
            write!(f, "{kind}/{reference}")
        }
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({self})")
    }
}

impl FromStr for ElementId {
    type Err = ParseIdError;

    /// Parse `kind/reference[:version]`. A missing version means 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (feature, version) = match s.rsplit_once(':') {
            Some((feature, version)) => {
                let parsed = version
                    .parse::<u32>()
                    .map_err(|source| ParseIdError::InvalidVersion {
                        input: s.to_owned(),
                        source,
                    })?;
                (feature, parsed)
            }
            None => (s, 0),
        };
        let (kind, reference) = split_feature(feature)?;
        Ok(Self::try_new(kind, reference, version)?)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ElementId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ElementId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
