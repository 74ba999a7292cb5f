//! Owned, sortable sequences of identifiers.
//!
//! Sorting uses the standard library's stable sort over the packed scalar,
//! which orders by kind rank, then reference, then version. Equal keys keep
//! their input order.

use std::ops::Deref;

use log::warn;

use crate::{ElementId, FeatureId, Kind};

/// Number of identifiers of each kind in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindCounts {
    /// Number of node identifiers.
    pub nodes: usize,
    /// Number of way identifiers.
    pub ways: usize,
    /// Number of relation identifiers.
    pub relations: usize,
    /// Number of changeset identifiers.
    pub changesets: usize,
}

impl KindCounts {
    const fn record(mut self, kind: Kind) -> Self {
        match kind {
            Kind::Node => self.nodes += 1,
            Kind::Way => self.ways += 1,
            Kind::Relation => self.relations += 1,
            Kind::Changeset => self.changesets += 1,
        }
        self
    }

    /// Return the count for one kind.
    #[must_use]
    pub const fn get(&self, kind: Kind) -> usize {
        match kind {
            Kind::Node => self.nodes,
            Kind::Way => self.ways,
            Kind::Relation => self.relations,
            Kind::Changeset => self.changesets,
        }
    }

    /// Return the total across all kinds.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.nodes + self.ways + self.relations + self.changesets
    }
}

macro_rules! id_sequence {
    ($(#[$meta:meta])* $name:ident, $id:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(Vec<$id>);

        impl $name {
            /// Construct an empty sequence.
            #[must_use]
            pub const fn new() -> Self {
                Self(Vec::new())
            }

            /// Append an identifier.
            pub fn push(&mut self, id: $id) {
                self.0.push(id);
            }

            /// Sort in place. Stable: equal identifiers keep their order.
            pub fn sort(&mut self) {
                self.0.sort();
            }

            /// Consume the sequence and return it sorted.
            #[must_use]
            pub fn sorted(mut self) -> Self {
                self.sort();
                self
            }

            /// Count the identifiers of each kind.
            #[must_use]
            pub fn counts(&self) -> KindCounts {
                self.0
                    .iter()
                    .fold(KindCounts::default(), |counts, id| counts.record(id.kind()))
            }

            /// Build a sequence from raw scalars, skipping invalid ones.
            #[must_use]
            pub fn from_raw_lossy<I: IntoIterator<Item = i64>>(scalars: I) -> Self {
                scalars
                    .into_iter()
                    .filter_map(|scalar| match <$id>::from_raw(scalar) {
                        Ok(id) => Some(id),
                        Err(err) => {
                            warn!("Skipped identifier: {err}");
                            None
                        }
                    })
                    .collect()
            }

            /// Consume the wrapper and return the underlying vector.
            #[must_use]
            pub fn into_inner(self) -> Vec<$id> {
                self.0
            }
        }

        impl Deref for $name {
            type Target = [$id];

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<Vec<$id>> for $name {
            fn from(ids: Vec<$id>) -> Self {
                Self(ids)
            }
        }

        impl FromIterator<$id> for $name {
            fn from_iter<I: IntoIterator<Item = $id>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl Extend<$id> for $name {
            fn extend<I: IntoIterator<Item = $id>>(&mut self, iter: I) {
                self.0.extend(iter);
            }
        }

        impl IntoIterator for $name {
            type Item = $id;
            type IntoIter = std::vec::IntoIter<$id>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $id;
            type IntoIter = std::slice::Iter<'a, $id>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

id_sequence!(
    /// A sequence of versionless identifiers.
    ///
    /// # Examples
    /// ```
    /// use osmid_core::{ChangesetId, FeatureIds, FeatureRef, NodeId, WayId};
    ///
    /// let mut ids: FeatureIds = [
    ///     ChangesetId(1).feature_id(),
    ///     WayId(2).feature_id(),
    ///     NodeId(9).feature_id(),
    /// ]
    /// .into_iter()
    /// .collect();
    /// ids.sort();
    /// assert_eq!(ids.first(), Some(&NodeId(9).feature_id()));
    /// assert_eq!(ids.counts().ways, 1);
    /// ```
    FeatureIds,
    FeatureId
);

id_sequence!(
    /// A sequence of versioned identifiers.
    ///
    /// # Examples
    /// ```
    /// use osmid_core::{ElementIds, NodeId, VersionedRef};
    ///
    /// let ids = ElementIds::from(vec![NodeId(1).element_id(2), NodeId(1).element_id(1)]);
    /// let sorted = ids.sorted();
    /// assert_eq!(sorted.first().map(|id| id.version()), Some(1));
    /// ```
    ElementIds,
    ElementId
);

impl ElementIds {
    /// Drop versions, keeping the order of the sequence.
    #[must_use]
    pub fn feature_ids(&self) -> FeatureIds {
        self.0.iter().map(|id| id.feature_id()).collect()
    }
}

/// Stably sort arbitrary records by the feature identifier they carry.
///
/// Records with equal identifiers keep their relative order.
///
/// # Examples
/// ```
/// use osmid_core::{ChangesetId, FeatureRef, NodeId, sort_by_feature_id};
///
/// let mut edits = vec![
///     (ChangesetId(1).feature_id(), "first"),
///     (NodeId(4).feature_id(), "node"),
///     (ChangesetId(1).feature_id(), "second"),
/// ];
/// sort_by_feature_id(&mut edits, |(id, _)| *id);
/// let labels: Vec<&str> = edits.iter().map(|(_, label)| *label).collect();
/// assert_eq!(labels, ["node", "first", "second"]);
/// ```
pub fn sort_by_feature_id<T, F>(records: &mut [T], id: F)
where
    F: FnMut(&T) -> FeatureId,
{
    records.sort_by_key(id);
}

/// Stably sort arbitrary records by the element identifier they carry.
///
/// Records with equal identifiers keep their relative order.
pub fn sort_by_element_id<T, F>(records: &mut [T], id: F)
where
    F: FnMut(&T) -> ElementId,
{
    records.sort_by_key(id);
}
