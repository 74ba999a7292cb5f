//! The four OpenStreetMap entity kinds.
//!
//! Variant order is the canonical sort order, so the derived `Ord` agrees
//! with [`Kind::rank`].
//!
//! # Examples
//! ```
//! use osmid_core::Kind;
//!
//! assert_eq!(Kind::Relation.as_str(), "relation");
//! assert_eq!(Kind::Way.to_string(), "way");
//! assert!(Kind::Node < Kind::Changeset);
//! ```

use crate::ParseIdError;

/// Entity kind of a feature or element identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// A point with coordinates.
    Node,
    /// An ordered list of nodes.
    Way,
    /// A grouping of nodes, ways and other relations.
    Relation,
    /// A batch of edits. Changesets are not versioned.
    Changeset,
}

impl Kind {
    /// Every kind in rank order.
    pub const ALL: [Self; 4] = [Self::Node, Self::Way, Self::Relation, Self::Changeset];

    /// Return the canonical lowercase name.
    ///
    /// # Examples
    /// ```
    /// use osmid_core::Kind;
    ///
    /// assert_eq!(Kind::Changeset.as_str(), "changeset");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
            Self::Changeset => "changeset",
        }
    }

    /// Return the primary sort key, `0..=3`.
    ///
    /// # Examples
    /// ```
    /// use osmid_core::Kind;
    ///
    /// assert_eq!(Kind::Node.rank(), 0);
    /// assert_eq!(Kind::Changeset.rank(), 3);
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Node => 0,
            Self::Way => 1,
            Self::Relation => 2,
            Self::Changeset => 3,
        }
    }

    /// Map the low two bits of `bits` onto a kind.
    ///
    /// Total over every input, so a decoded scalar can never yield a kind
    /// outside the enum.
    pub(crate) const fn from_rank_bits(bits: i64) -> Self {
        match bits & 0b11 {
            0 => Self::Node,
            1 => Self::Way,
            2 => Self::Relation,
            _ => Self::Changeset,
        }
    }

    /// Report whether identifiers of this kind carry a version.
    #[must_use]
    pub const fn is_versioned(self) -> bool {
        !matches!(self, Self::Changeset)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseIdError::UnknownKind { name: s.to_owned() })
    }
}
