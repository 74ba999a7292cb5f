//! Kind-specific reference numbers.
//!
//! Each kind has its own numbering space: `NodeId(1)` and `WayId(1)` name
//! unrelated entities. The wrappers exist so that the kind travels with the
//! number through the type system.

use crate::{ElementId, FeatureId, IdError, Kind};

/// A reference number that knows which kind it belongs to.
///
/// # Examples
/// ```
/// use osmid_core::{FeatureRef, NodeId, WayId};
///
/// assert_eq!(NodeId(1).feature_id().to_string(), "node/1");
/// assert_eq!(WayId(3).feature_id().to_string(), "way/3");
/// ```
pub trait FeatureRef: Copy {
    /// Kind of every identifier built from this type.
    const KIND: Kind;

    /// Return the raw reference number.
    fn reference(self) -> i64;

    /// Build the versionless identifier.
    ///
    /// # Panics
    /// Panics when the reference is outside
    /// [`FEATURE_REF_MIN`](crate::codec::FEATURE_REF_MIN)`..=`[`FEATURE_REF_MAX`](crate::codec::FEATURE_REF_MAX).
    #[must_use]
    fn feature_id(self) -> FeatureId {
        FeatureId::new(Self::KIND, self.reference())
    }

    /// Build the versionless identifier, rejecting unsupported references.
    ///
    /// # Errors
    /// Returns [`IdError::ReferenceOutOfRange`] for references the packed
    /// layout cannot hold.
    fn try_feature_id(self) -> Result<FeatureId, IdError> {
        FeatureId::try_new(Self::KIND, self.reference())
    }
}

/// A reference number whose entities carry versions.
///
/// Implemented for nodes, ways and relations. Changesets are unversioned and
/// use [`ChangesetId::element_id`] instead.
///
/// # Examples
/// ```
/// use osmid_core::{RelationId, VersionedRef};
///
/// let element = RelationId(1).element_id(4);
/// assert_eq!(element.version(), 4);
/// assert_eq!(element.to_string(), "relation/1:4");
/// ```
pub trait VersionedRef: FeatureRef {
    /// Build the identifier of one version of this entity.
    ///
    /// # Panics
    /// Panics when the reference or version does not fit the element layout.
    #[must_use]
    fn element_id(self, version: u32) -> ElementId {
        ElementId::new(Self::KIND, self.reference(), version)
    }

    /// Build the identifier of one version, rejecting unsupported values.
    ///
    /// # Errors
    /// Returns [`IdError::ReferenceOutOfRange`] or
    /// [`IdError::VersionOutOfRange`] when the layout cannot hold the value.
    fn try_element_id(self, version: u32) -> Result<ElementId, IdError> {
        ElementId::try_new(Self::KIND, self.reference(), version)
    }
}

macro_rules! reference_id {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub i64);

        impl FeatureRef for $name {
            const KIND: Kind = Kind::$kind;

            fn reference(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(reference: i64) -> Self {
                Self(reference)
            }
        }

        impl From<$name> for FeatureId {
            fn from(id: $name) -> Self {
                id.feature_id()
            }
        }

        impl TryFrom<FeatureId> for $name {
            type Error = IdError;

            fn try_from(id: FeatureId) -> Result<Self, Self::Error> {
                if id.kind() == Kind::$kind {
                    Ok(Self(id.reference()))
                } else {
                    Err(IdError::KindMismatch {
                        expected: Kind::$kind,
                        found: id.kind(),
                    })
                }
            }
        }

        impl TryFrom<ElementId> for $name {
            type Error = IdError;

            fn try_from(id: ElementId) -> Result<Self, Self::Error> {
                Self::try_from(id.feature_id())
            }
        }
    };
}

reference_id!(
    /// Reference number of a node.
    NodeId => Node
);
reference_id!(
    /// Reference number of a way.
    WayId => Way
);
reference_id!(
    /// Reference number of a relation.
    RelationId => Relation
);
reference_id!(
    /// Reference number of a changeset.
    ChangesetId => Changeset
);

impl VersionedRef for NodeId {}
impl VersionedRef for WayId {}
impl VersionedRef for RelationId {}

impl ChangesetId {
    /// Build the element identifier of this changeset. Always version 0.
    ///
    /// # Panics
    /// Panics when the reference does not fit the element layout.
    ///
    /// # Examples
    /// ```
    /// use osmid_core::ChangesetId;
    ///
    /// let element = ChangesetId(3).element_id();
    /// assert_eq!(element.version(), 0);
    /// assert_eq!(element.to_string(), "changeset/3");
    /// ```
    #[must_use]
    pub fn element_id(self) -> ElementId {
        ElementId::new(Kind::Changeset, self.0, 0)
    }

    /// Build the element identifier, rejecting unsupported references.
    ///
    /// # Errors
    /// Returns [`IdError::ReferenceOutOfRange`] when the layout cannot hold
    /// the reference.
    pub fn try_element_id(self) -> Result<ElementId, IdError> {
        ElementId::try_new(Kind::Changeset, self.0, 0)
    }
}
