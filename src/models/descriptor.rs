//! Converter descriptors
//!
//! A descriptor is the selection engine's unit of output: an immutable
//! `(source, target, kind, hints)` record plus a `create()` factory that
//! instantiates the actual converter. Selection never materializes
//! converters — `create()` is invoked by the caller only after a descriptor
//! has been chosen.

use serde::{Deserialize, Serialize};

use crate::conversions::Converter;
use crate::models::hints::MappingHints;
use crate::models::logical_type::LogicalType;

/// Converter family, as a flat tagged union.
///
/// Each kind names one conversion shape; `Composite` chains two direct
/// conversions through an intermediate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConverterKind {
    /// Plain cast between two numeric or character types.
    NumericCast,
    NumericToString,
    /// Fixed-width big-endian byte encoding of a numeric or character value.
    NumericToBytes,
    CharToString,
    /// Boolean to 0/1 in any numeric type.
    BoolToNumber,
    BoolToString,
    /// Enumeration ordinal to any numeric type.
    EnumToNumber,
    /// Enumeration member label (falling back to the ordinal) to text.
    EnumToString,
    StringToBytes,
    BytesToString,
    TimestampToString,
    TimestampToMicros,
    TimestampTzToString,
    TimestampTzToMicros,
    TimestampTzToBytes,
    DurationToString,
    DurationToMicros,
    UuidToString,
    UuidToBytes,
    /// Two-hop conversion chained through `via`.
    Composite { via: LogicalType },
}

/// Immutable descriptor for one candidate conversion.
///
/// Descriptors are created fresh per query, carry no identity beyond their
/// field values, and are safe to cache or discard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConverterDescriptor {
    pub source: LogicalType,
    pub target: LogicalType,
    pub kind: ConverterKind,
    /// `None` means no refinement: the physical layer decides the shape.
    pub hints: Option<MappingHints>,
}

impl ConverterDescriptor {
    pub fn new(source: LogicalType, target: LogicalType, kind: ConverterKind) -> Self {
        ConverterDescriptor {
            source,
            target,
            kind,
            hints: None,
        }
    }

    pub fn with_hints(
        source: LogicalType,
        target: LogicalType,
        kind: ConverterKind,
        hints: MappingHints,
    ) -> Self {
        ConverterDescriptor {
            source,
            target,
            kind,
            hints: Some(hints),
        }
    }

    /// Instantiate the converter this descriptor describes.
    ///
    /// The returned converter reports the same mapping hints as the
    /// descriptor itself.
    pub fn create(&self) -> Converter {
        Converter::from_descriptor(self)
    }
}
