//! Instantiated converters
//!
//! `Converter` is the machinery a descriptor's `create()` produces: it
//! checks the incoming value's type against the declared source, then
//! dispatches on the converter kind. Composite converters chain their two
//! legs, inner first.
//!
//! # Module organization
//!
//! - `numeric` - casts between numeric, boolean, character and enumeration
//!   representations
//! - `text` - text renderings for string targets
//! - `bytes` - fixed-width byte encodings and UTF-8 transcoding
//! - `temporal` - microsecond encodings of temporal values

pub mod bytes;
pub mod numeric;
pub mod temporal;
pub mod text;

use crate::errors::ConversionError;
use crate::models::descriptor::{ConverterDescriptor, ConverterKind};
use crate::models::hints::MappingHints;
use crate::models::logical_type::LogicalType;
use crate::models::value::Value;

/// A materialized converter, produced by [`ConverterDescriptor::create`].
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    source: LogicalType,
    target: LogicalType,
    kind: ConverterKind,
    hints: Option<MappingHints>,
}

impl Converter {
    pub(crate) fn from_descriptor(descriptor: &ConverterDescriptor) -> Self {
        Converter {
            source: descriptor.source,
            target: descriptor.target,
            kind: descriptor.kind,
            hints: descriptor.hints,
        }
    }

    pub fn source(&self) -> LogicalType {
        self.source
    }

    pub fn target(&self) -> LogicalType {
        self.target
    }

    pub fn kind(&self) -> ConverterKind {
        self.kind
    }

    /// Same hints as the descriptor this converter was created from.
    pub fn mapping_hints(&self) -> Option<&MappingHints> {
        self.hints.as_ref()
    }

    /// Convert one value. The value must inhabit the declared source type.
    pub fn apply(&self, value: &Value) -> Result<Value, ConversionError> {
        if value.logical_type() != self.source {
            return Err(ConversionError::TypeMismatch {
                expected: self.source,
                actual: value.logical_type(),
            });
        }
        self.apply_unchecked(value)
    }

    fn apply_unchecked(&self, value: &Value) -> Result<Value, ConversionError> {
        match self.kind {
            ConverterKind::NumericCast
            | ConverterKind::BoolToNumber
            | ConverterKind::EnumToNumber => numeric::cast_to(value, self.target),
            ConverterKind::NumericToString
            | ConverterKind::CharToString
            | ConverterKind::BoolToString
            | ConverterKind::EnumToString
            | ConverterKind::TimestampToString
            | ConverterKind::TimestampTzToString
            | ConverterKind::DurationToString
            | ConverterKind::UuidToString => text::render(value).map(Value::Utf8),
            ConverterKind::NumericToBytes => bytes::fixed_width(value),
            ConverterKind::StringToBytes => bytes::string_to_bytes(value),
            ConverterKind::BytesToString => bytes::bytes_to_string(value),
            ConverterKind::TimestampToMicros
            | ConverterKind::TimestampTzToMicros
            | ConverterKind::DurationToMicros => temporal::to_micros(value),
            ConverterKind::TimestampTzToBytes => bytes::timestamp_tz_to_bytes(value),
            ConverterKind::UuidToBytes => bytes::uuid_to_bytes(value),
            ConverterKind::Composite { via } => {
                let inner = direct_converter(self.source, via)?;
                let outer = direct_converter(via, self.target)?;
                outer.apply(&inner.apply(value)?)
            }
        }
    }
}

/// Hint-free direct converter for one leg of a composite chain.
fn direct_converter(
    source: LogicalType,
    target: LogicalType,
) -> Result<Converter, ConversionError> {
    let kind = direct_kind(source, target).ok_or(ConversionError::UnsupportedConversion {
        source,
        target,
    })?;
    Ok(Converter {
        source,
        target,
        kind,
        hints: None,
    })
}

fn direct_kind(source: LogicalType, target: LogicalType) -> Option<ConverterKind> {
    match (source, target) {
        (LogicalType::Enum(_), t) if t.is_numeric() => Some(ConverterKind::EnumToNumber),
        (LogicalType::Boolean, t) if t.is_numeric() => Some(ConverterKind::BoolToNumber),
        (LogicalType::Timestamp, LogicalType::Int64) => Some(ConverterKind::TimestampToMicros),
        (LogicalType::TimestampTz, LogicalType::Int64) => Some(ConverterKind::TimestampTzToMicros),
        (LogicalType::Duration, LogicalType::Int64) => Some(ConverterKind::DurationToMicros),
        (s, t) if s.is_numeric() && t.is_numeric() => Some(ConverterKind::NumericCast),
        (s, LogicalType::Binary) if s.is_numeric() || s == LogicalType::Char => {
            Some(ConverterKind::NumericToBytes)
        }
        (s, LogicalType::Utf8) if s.is_numeric() => Some(ConverterKind::NumericToString),
        (LogicalType::Utf8, LogicalType::Binary) => Some(ConverterKind::StringToBytes),
        _ => None,
    }
}
