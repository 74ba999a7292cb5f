//! Packing of `(kind, reference[, version])` tuples into one `i64`.
//!
//! Both layouts keep bit 63 clear, so every valid scalar is non-negative
//! and plain signed comparison of two scalars gives the identifier order.
//!
//! Feature layout:
//!
//! ```text
//!  63 | 62 61 | 60 ........................................... 0
//!   0 | rank  | reference + 2^60
//! ```
//!
//! Element layout:
//!
//! ```text
//!  63 | 62 61 | 60 ............................... 8 | 7 ...... 0
//!   0 | rank  | reference + 2^52                     | version
//! ```
//!
//! References are stored with a bias so that negative references occupy
//! the low end of their kind's band instead of borrowing from the rank bits.
//! Changeset elements always store version 0.
//!
//! Both layouts accept the same reference range, bounded by the narrower
//! element field, so any feature can take a version.

use crate::{IdError, Kind};

const KIND_SHIFT: u32 = 61;

const FEATURE_REF_BIAS: i64 = 1 << 60;
const FEATURE_REF_MASK: i64 = (1 << 61) - 1;

const ELEMENT_REF_SHIFT: u32 = 8;
const ELEMENT_REF_BIAS: i64 = 1 << 52;
const ELEMENT_REF_MASK: i64 = (1 << 53) - 1;
const VERSION_MASK: i64 = 0xFF;

/// Smallest reference an [`ElementId`](crate::ElementId) can hold.
pub const ELEMENT_REF_MIN: i64 = -ELEMENT_REF_BIAS;
/// Largest reference an [`ElementId`](crate::ElementId) can hold.
pub const ELEMENT_REF_MAX: i64 = ELEMENT_REF_BIAS - 1;
/// Smallest reference a [`FeatureId`](crate::FeatureId) can hold.
pub const FEATURE_REF_MIN: i64 = ELEMENT_REF_MIN;
/// Largest reference a [`FeatureId`](crate::FeatureId) can hold.
pub const FEATURE_REF_MAX: i64 = ELEMENT_REF_MAX;
/// Largest version an [`ElementId`](crate::ElementId) can hold.
pub const MAX_VERSION: u32 = 255;

const fn kind_bits(kind: Kind) -> i64 {
    (kind.rank() as i64) << KIND_SHIFT
}

/// Pack a kind and reference into a feature scalar.
///
/// # Errors
/// Returns [`IdError::ReferenceOutOfRange`] when `reference` falls outside
/// [`FEATURE_REF_MIN`]`..=`[`FEATURE_REF_MAX`].
///
/// # Examples
/// ```
/// use osmid_core::{Kind, codec};
///
/// # fn main() -> Result<(), osmid_core::IdError> {
/// let way = codec::encode_feature(Kind::Way, -5)?;
/// let relation = codec::encode_feature(Kind::Relation, -5)?;
/// assert!(way < relation);
/// assert_eq!(codec::decode_feature(way), (Kind::Way, -5));
/// # Ok(())
/// # }
/// ```
pub const fn encode_feature(kind: Kind, reference: i64) -> Result<i64, IdError> {
    if reference < FEATURE_REF_MIN || reference > FEATURE_REF_MAX {
        return Err(IdError::ReferenceOutOfRange { kind, reference });
    }
    Ok(kind_bits(kind) | (reference + FEATURE_REF_BIAS))
}

/// Unpack a feature scalar produced by [`encode_feature`].
#[must_use]
pub const fn decode_feature(scalar: i64) -> (Kind, i64) {
    let kind = Kind::from_rank_bits(scalar >> KIND_SHIFT);
    let reference = (scalar & FEATURE_REF_MASK) - FEATURE_REF_BIAS;
    (kind, reference)
}

/// Pack a kind, reference and version into an element scalar.
///
/// The version of a changeset is pinned to 0 whatever `version` says.
///
/// # Errors
/// Returns [`IdError::ReferenceOutOfRange`] when `reference` falls outside
/// [`ELEMENT_REF_MIN`]`..=`[`ELEMENT_REF_MAX`], and
/// [`IdError::VersionOutOfRange`] when a versioned kind is given a version
/// above [`MAX_VERSION`].
///
/// # Examples
/// ```
/// use osmid_core::{Kind, codec};
///
/// # fn main() -> Result<(), osmid_core::IdError> {
/// let v1 = codec::encode_element(Kind::Node, 7, 1)?;
/// let v2 = codec::encode_element(Kind::Node, 7, 2)?;
/// assert!(v1 < v2);
/// assert_eq!(codec::decode_element(v2), (Kind::Node, 7, 2));
///
/// let changeset = codec::encode_element(Kind::Changeset, 7, 9)?;
/// assert_eq!(codec::decode_element(changeset), (Kind::Changeset, 7, 0));
/// # Ok(())
/// # }
/// ```
pub fn encode_element(kind: Kind, reference: i64, version: u32) -> Result<i64, IdError> {
    if !(ELEMENT_REF_MIN..=ELEMENT_REF_MAX).contains(&reference) {
        return Err(IdError::ReferenceOutOfRange { kind, reference });
    }
    let packed_version = if kind.is_versioned() {
        if version > MAX_VERSION {
            return Err(IdError::VersionOutOfRange { kind, version });
        }
        i64::from(version)
    } else {
        0
    };
    let packed_reference = (reference + ELEMENT_REF_BIAS) << ELEMENT_REF_SHIFT;
    Ok(kind_bits(kind) | packed_reference | packed_version)
}

/// Unpack an element scalar produced by [`encode_element`].
#[must_use]
pub fn decode_element(scalar: i64) -> (Kind, i64, u32) {
    let kind = Kind::from_rank_bits(scalar >> KIND_SHIFT);
    let reference = ((scalar >> ELEMENT_REF_SHIFT) & ELEMENT_REF_MASK) - ELEMENT_REF_BIAS;
    // Masked to eight bits, so the conversion cannot fail.
    let version = u8::try_from(scalar & VERSION_MASK).map_or(0, u32::from);
    (kind, reference, version)
}

/// Check that `scalar` could have come from [`encode_feature`].
pub(crate) const fn validate_feature(scalar: i64) -> Result<i64, IdError> {
    if scalar < 0 {
        return Err(IdError::InvalidScalar { scalar });
    }
    let reference = decode_feature(scalar).1;
    if reference < FEATURE_REF_MIN || reference > FEATURE_REF_MAX {
        return Err(IdError::InvalidScalar { scalar });
    }
    Ok(scalar)
}

/// Check that `scalar` could have come from [`encode_element`].
pub(crate) fn validate_element(scalar: i64) -> Result<i64, IdError> {
    if scalar < 0 {
        return Err(IdError::InvalidScalar { scalar });
    }
    match decode_element(scalar) {
        (Kind::Changeset, _, version) if version != 0 => Err(IdError::InvalidScalar { scalar }),
        _ => Ok(scalar),
    }
}
