//! Packed, ordered identifiers for OpenStreetMap entities.
//!
//! Responsibilities:
//! - Name any node, way, relation or changeset with one [`FeatureId`].
//! - Name one version of such an entity with an [`ElementId`].
//! - Keep the packed scalar order equal to the logical order
//!   (kind rank, reference, version) so raw scalars can be sorted directly.
//!
//! Boundaries:
//! - No entity payloads, storage or network access.
//!
//! Invariants:
//! - Identifiers are immutable `Copy` values.
//! - Every constructible identifier has a valid kind; out-of-range
//!   references and versions are rejected, never truncated.
//!
//! # Examples
//! ```
//! use osmid_core::{ChangesetId, ElementIds, NodeId, VersionedRef, WayId};
//!
//! let ids: ElementIds = [
//!     ChangesetId(1).element_id(),
//!     WayId(1).element_id(2),
//!     NodeId(1).element_id(2),
//! ]
//! .into_iter()
//! .collect();
//! let rendered: Vec<String> = ids.sorted().iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, ["node/1:2", "way/1:2", "changeset/1"]);
//! ```

#![forbid(unsafe_code)]

pub mod codec;
mod element;
mod error;
mod feature;
mod kind;
mod reference;
mod sequence;

pub use element::ElementId;
pub use error::{IdError, ParseIdError};
pub use feature::FeatureId;
pub use kind::Kind;
pub use reference::{ChangesetId, FeatureRef, NodeId, RelationId, VersionedRef, WayId};
pub use sequence::{
    ElementIds, FeatureIds, KindCounts, sort_by_element_id, sort_by_feature_id,
};
