//! Proptest strategies for identifier property tests.
//!
//! Generated references cover the full supported range of each layout, with
//! extra weight on zero, negatives and the layout boundaries.

use osmid_core::Kind;
use osmid_core::codec::{ELEMENT_REF_MAX, ELEMENT_REF_MIN, FEATURE_REF_MAX, FEATURE_REF_MIN, MAX_VERSION};
use proptest::prelude::*;

/// Strategy for any of the four kinds.
pub fn kind_strategy() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::Node),
        Just(Kind::Way),
        Just(Kind::Relation),
        Just(Kind::Changeset),
    ]
}

/// Strategy for references accepted by the feature layout.
pub fn feature_ref_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        FEATURE_REF_MIN..=FEATURE_REF_MAX,
        -1_000_i64..1_000_i64,
        Just(FEATURE_REF_MIN),
        Just(FEATURE_REF_MAX),
    ]
}

/// Strategy for references accepted by the element layout.
pub fn element_ref_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        ELEMENT_REF_MIN..=ELEMENT_REF_MAX,
        -1_000_i64..1_000_i64,
        Just(ELEMENT_REF_MIN),
        Just(ELEMENT_REF_MAX),
    ]
}

/// Strategy for versions accepted by the element layout.
pub fn version_strategy() -> impl Strategy<Value = u32> {
    0..=MAX_VERSION
}

/// Strategy for a short list of `(kind, reference, version)` tuples with
/// many collisions, so that sorting meets duplicate keys.
pub fn colliding_tuples_strategy(max_len: usize) -> impl Strategy<Value = Vec<(Kind, i64, u32)>> {
    proptest::collection::vec((kind_strategy(), -3_i64..3_i64, 0_u32..3_u32), 0..=max_len)
}
