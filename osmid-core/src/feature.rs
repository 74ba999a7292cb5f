//! Versionless identifiers: one per `(kind, reference)` pair.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::{ElementId, IdError, Kind, ParseIdError};

/// Identifies an entity of any kind, ignoring its version.
///
/// The value is a single packed scalar (see [`codec`]), so the derived
/// ordering is kind rank, then reference.
///
/// # Examples
/// ```
/// use osmid_core::{FeatureId, FeatureRef, Kind, RelationId};
///
/// let id = RelationId(1000).feature_id();
/// assert_eq!(id.kind(), Kind::Relation);
/// assert_eq!(id.reference(), 1000);
/// assert_eq!(id.to_string(), "relation/1000");
/// assert_eq!("relation/1000".parse::<FeatureId>(), Ok(id));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureId(i64);

impl FeatureId {
    /// Build an identifier from a kind and reference.
    ///
    /// # Panics
    /// Panics when `reference` is outside
    /// [`FEATURE_REF_MIN`](codec::FEATURE_REF_MIN)`..=`[`FEATURE_REF_MAX`](codec::FEATURE_REF_MAX).
    /// Use [`FeatureId::try_new`] for untrusted input.
    #[must_use]
    pub fn new(kind: Kind, reference: i64) -> Self {
        match Self::try_new(kind, reference) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build an identifier, rejecting references the layout cannot hold.
    ///
    /// # Errors
    /// Returns [`IdError::ReferenceOutOfRange`] for unsupported references.
    pub const fn try_new(kind: Kind, reference: i64) -> Result<Self, IdError> {
        match codec::encode_feature(kind, reference) {
            Ok(scalar) => Ok(Self(scalar)),
            Err(err) => Err(err),
        }
    }

    /// Rebuild an identifier from a scalar previously returned by [`FeatureId::raw`].
    ///
    /// # Errors
    /// Returns [`IdError::InvalidScalar`] for negative scalars and for
    /// scalars whose reference lies outside the supported range.
    pub const fn from_raw(scalar: i64) -> Result<Self, IdError> {
        match codec::validate_feature(scalar) {
            Ok(valid) => Ok(Self(valid)),
            Err(err) => Err(err),
        }
    }

    /// Return the packed scalar. Comparing scalars compares identifiers.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Return the entity kind.
    #[must_use]
    pub const fn kind(self) -> Kind {
        codec::decode_feature(self.0).0
    }

    /// Return the reference number within the kind.
    #[must_use]
    pub const fn reference(self) -> i64 {
        codec::decode_feature(self.0).1
    }

    /// Attach a version, producing an element identifier.
    ///
    /// Changesets are unversioned: their element always carries version 0
    /// regardless of `version`.
    ///
    /// # Panics
    /// Panics when a versioned kind is given a version above
    /// [`MAX_VERSION`](codec::MAX_VERSION).
    ///
    /// # Examples
    /// ```
    /// use osmid_core::{ChangesetId, FeatureRef, NodeId};
    ///
    /// let node = NodeId(1).feature_id();
    /// assert_eq!(node.element_id(3).version(), 3);
    /// assert_eq!(node.element_id(3).feature_id(), node);
    ///
    /// let changeset = ChangesetId(1).feature_id();
    /// assert_eq!(changeset.element_id(3).version(), 0);
    /// ```
    #[must_use]
    pub fn element_id(self, version: u32) -> ElementId {
        let (kind, reference) = codec::decode_feature(self.0);
        ElementId::new(kind, reference, version)
    }

    /// Attach a version, rejecting versions the element layout cannot hold.
    ///
    /// # Errors
    /// Returns [`IdError::VersionOutOfRange`] when a versioned kind is given
    /// a version above [`MAX_VERSION`](codec::MAX_VERSION).
    pub fn try_element_id(self, version: u32) -> Result<ElementId, IdError> {
        let (kind, reference) = codec::decode_feature(self.0);
        ElementId::try_new(kind, reference, version)
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind(), self.reference())
    }
}

impl fmt::Debug for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureId({self})")
    }
}

impl FromStr for FeatureId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, reference) = split_feature(s)?;
        Ok(Self::try_new(kind, reference)?)
    }
}

/// Parse the `kind/reference` prefix shared by both identifier forms.
pub(crate) fn split_feature(s: &str) -> Result<(Kind, i64), ParseIdError> {
    let (kind_name, reference) = s
        .split_once('/')
        .ok_or_else(|| ParseIdError::MissingSeparator { input: s.to_owned() })?;
    let kind = kind_name.parse::<Kind>()?;
    let parsed = reference
        .parse::<i64>()
        .map_err(|source| ParseIdError::InvalidReference {
            input: s.to_owned(),
            source,
        })?;
    Ok((kind, parsed))
}

#[cfg(feature = "serde")]
impl serde::Serialize for FeatureId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FeatureId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{FEATURE_REF_MAX, FEATURE_REF_MIN, MAX_VERSION};
    use crate::{ChangesetId, FeatureRef, NodeId, RelationId, WayId};
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    #[case(NodeId(1).feature_id(), "node/1")]
    #[case(WayId(3).feature_id(), "way/3")]
    #[case(RelationId(1000).feature_id(), "relation/1000")]
    #[case(ChangesetId(-7).feature_id(), "changeset/-7")]
    fn renders_kind_and_reference(#[case] id: FeatureId, #[case] expected: &str) {
        assert_eq!(id.to_string(), expected);
        assert_eq!(expected.parse::<FeatureId>(), Ok(id));
    }

    #[rstest]
    #[case("node1")]
    #[case("area/1")]
    #[case("way/x")]
    #[case("way/")]
    fn parsing_rejects_malformed_input(#[case] input: &str) {
        assert!(input.parse::<FeatureId>().is_err());
    }

    #[rstest]
    fn parsing_reports_out_of_range_reference() {
        let input = format!("node/{}", FEATURE_REF_MIN - 1);
        assert!(matches!(
            input.parse::<FeatureId>(),
            Err(ParseIdError::OutOfRange(IdError::ReferenceOutOfRange { .. }))
        ));
    }

    #[rstest]
    fn element_round_trip_recovers_feature() {
        let feature = WayId(12).feature_id();
        for version in [0, 1, 200, MAX_VERSION] {
            assert_eq!(feature.element_id(version).feature_id(), feature);
        }
    }

    #[rstest]
    fn changeset_element_is_normalised_to_version_zero() {
        let feature = ChangesetId(4).feature_id();
        for version in [0, 1, MAX_VERSION, u32::MAX] {
            let element = feature.element_id(version);
            assert_eq!(element.version(), 0);
            assert_eq!(element, ChangesetId(4).element_id());
        }
    }

    #[rstest]
    fn try_element_id_rejects_only_oversized_versions() {
        assert_eq!(
            NodeId(1).feature_id().try_element_id(MAX_VERSION + 1),
            Err(IdError::VersionOutOfRange {
                kind: Kind::Node,
                version: MAX_VERSION + 1
            })
        );
        assert!(NodeId(FEATURE_REF_MAX).feature_id().try_element_id(MAX_VERSION).is_ok());
        assert!(ChangesetId(FEATURE_REF_MIN).feature_id().try_element_id(u32::MAX).is_ok());
    }

    #[rstest]
    #[case(Kind::Node)]
    #[case(Kind::Way)]
    #[case(Kind::Relation)]
    #[case(Kind::Changeset)]
    fn every_feature_accepts_a_version(#[case] kind: Kind) {
        for reference in [FEATURE_REF_MIN, -1, 0, FEATURE_REF_MAX] {
            let feature = FeatureId::new(kind, reference);
            for version in [0, 1, MAX_VERSION] {
                assert_eq!(feature.element_id(version).feature_id(), feature);
            }
        }
    }

    #[rstest]
    #[case(1 << 53)]
    #[case(-(1 << 55))]
    fn references_beyond_the_element_range_are_not_features(#[case] reference: i64) {
        assert!(matches!(
            FeatureId::try_new(Kind::Way, reference),
            Err(IdError::ReferenceOutOfRange { .. })
        ));
        assert!(NodeId(reference).try_feature_id().is_err());
        assert!(ChangesetId(reference).try_feature_id().is_err());
    }

    #[rstest]
    fn raw_scalar_round_trips() {
        let id = RelationId(-99).feature_id();
        assert_eq!(FeatureId::from_raw(id.raw()), Ok(id));
        assert!(FeatureId::from_raw(-1).is_err());
        assert!(FeatureId::from_raw(0).is_err());
    }

    #[rstest]
    fn usable_as_map_key() {
        let mut seen = HashMap::new();
        seen.insert(NodeId(1).feature_id(), "first");
        seen.insert(WayId(1).feature_id(), "second");
        assert_eq!(seen.get(&NodeId(1).feature_id()), Some(&"first"));
        assert_eq!(seen.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[expect(clippy::expect_used, reason = "JSON round trips must succeed in tests")]
    fn serialises_as_string() {
        let id = WayId(3).feature_id();
        let json = serde_json::to_string(&id).expect("serialise feature id");
        assert_eq!(json, "\"way/3\"");
        let back: FeatureId = serde_json::from_str(&json).expect("deserialise feature id");
        assert_eq!(back, id);
    }
}
