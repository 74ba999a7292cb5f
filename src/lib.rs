//! Facade crate for the osmid identifier library.
//!
//! This crate re-exports the packed OpenStreetMap identifier types from
//! `osmid-core` and forwards its `serde` feature.

#![forbid(unsafe_code)]

pub use osmid_core::{
    ChangesetId, ElementId, ElementIds, FeatureId, FeatureIds, FeatureRef, IdError, Kind,
    KindCounts, NodeId, ParseIdError, RelationId, VersionedRef, WayId, codec, sort_by_element_id,
    sort_by_feature_id,
};
