//! Unified logical type system for mapcast
//!
//! `LogicalType` is the closed set of value shapes the conversion engine
//! understands, independent of any physical storage encoding. Enumeration
//! types carry their underlying integer width (`IntType`) as an attribute
//! rather than as separate variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Underlying integer width carried by enumeration types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
}

impl IntType {
    /// The logical type with this width.
    pub fn as_logical(self) -> LogicalType {
        match self {
            IntType::Int8 => LogicalType::Int8,
            IntType::Int16 => LogicalType::Int16,
            IntType::Int32 => LogicalType::Int32,
            IntType::Int64 => LogicalType::Int64,
            IntType::UInt8 => LogicalType::UInt8,
            IntType::UInt16 => LogicalType::UInt16,
            IntType::UInt32 => LogicalType::UInt32,
            IntType::UInt64 => LogicalType::UInt64,
        }
    }

    /// Natural storage width in bytes.
    pub fn byte_width(self) -> usize {
        match self {
            IntType::Int8 | IntType::UInt8 => 1,
            IntType::Int16 | IntType::UInt16 => 2,
            IntType::Int32 | IntType::UInt32 => 4,
            IntType::Int64 | IntType::UInt64 => 8,
        }
    }

    pub fn is_64_bit(self) -> bool {
        matches!(self, IntType::Int64 | IntType::UInt64)
    }
}

/// Logical value type known to the conversion engine.
///
/// Covers the signed/unsigned integer widths, floating point and
/// high-precision decimal, character and text, opaque bytes, the temporal
/// types, identifiers, and integer-backed enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    /// High-precision decimal (128-bit mantissa plus scale).
    Decimal,
    /// Single character.
    Char,
    /// UTF-8 text.
    Utf8,
    /// Opaque byte sequence.
    Binary,
    /// Date/time without offset.
    Timestamp,
    /// Date/time with a UTC offset.
    TimestampTz,
    /// Time interval.
    Duration,
    /// Globally unique identifier.
    Uuid,
    /// Integer-backed enumeration; the payload is the underlying width.
    Enum(IntType),
}

/// Payload-free discriminant of [`LogicalType`], used to key catalog tables.
///
/// All enumerations share one entry regardless of underlying width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeClass {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Decimal,
    Char,
    Utf8,
    Binary,
    Timestamp,
    TimestampTz,
    Duration,
    Uuid,
    Enum,
}

impl LogicalType {
    pub fn class(&self) -> TypeClass {
        match self {
            LogicalType::Boolean => TypeClass::Boolean,
            LogicalType::Int8 => TypeClass::Int8,
            LogicalType::Int16 => TypeClass::Int16,
            LogicalType::Int32 => TypeClass::Int32,
            LogicalType::Int64 => TypeClass::Int64,
            LogicalType::UInt8 => TypeClass::UInt8,
            LogicalType::UInt16 => TypeClass::UInt16,
            LogicalType::UInt32 => TypeClass::UInt32,
            LogicalType::UInt64 => TypeClass::UInt64,
            LogicalType::Float32 => TypeClass::Float32,
            LogicalType::Float64 => TypeClass::Float64,
            LogicalType::Decimal => TypeClass::Decimal,
            LogicalType::Char => TypeClass::Char,
            LogicalType::Utf8 => TypeClass::Utf8,
            LogicalType::Binary => TypeClass::Binary,
            LogicalType::Timestamp => TypeClass::Timestamp,
            LogicalType::TimestampTz => TypeClass::TimestampTz,
            LogicalType::Duration => TypeClass::Duration,
            LogicalType::Uuid => TypeClass::Uuid,
            LogicalType::Enum(_) => TypeClass::Enum,
        }
    }

    /// True for the eleven numeric types (integers, floats, decimal).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            LogicalType::Int8
                | LogicalType::Int16
                | LogicalType::Int32
                | LogicalType::Int64
                | LogicalType::UInt8
                | LogicalType::UInt16
                | LogicalType::UInt32
                | LogicalType::UInt64
                | LogicalType::Float32
                | LogicalType::Float64
                | LogicalType::Decimal
        )
    }

    pub fn is_unsigned_int(&self) -> bool {
        matches!(
            self,
            LogicalType::UInt8 | LogicalType::UInt16 | LogicalType::UInt32 | LogicalType::UInt64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, LogicalType::Float32 | LogicalType::Float64)
    }

    /// The numeric identity used when walking widening tables: enumerations
    /// resolve to their underlying width, everything else to itself.
    pub fn underlying(&self) -> LogicalType {
        match self {
            LogicalType::Enum(it) => it.as_logical(),
            other => *other,
        }
    }

    /// Natural storage width in bytes for numeric and character types.
    ///
    /// Returns `None` for variable-size or structured types (text, bytes,
    /// temporal values, enumerations — an enumeration's width is its
    /// underlying type's width).
    pub fn byte_width(&self) -> Option<usize> {
        match self {
            LogicalType::Int8 | LogicalType::UInt8 => Some(1),
            LogicalType::Int16 | LogicalType::UInt16 | LogicalType::Char => Some(2),
            LogicalType::Int32 | LogicalType::UInt32 | LogicalType::Float32 => Some(4),
            LogicalType::Int64 | LogicalType::UInt64 | LogicalType::Float64 => Some(8),
            LogicalType::Decimal => Some(16),
            _ => None,
        }
    }

    /// Lowercase wire name, matching the JSON wire format used by schema
    /// layers ("int32", "utf8", ...).
    pub fn wire_name(&self) -> String {
        match self {
            LogicalType::Boolean => "boolean".to_string(),
            LogicalType::Int8 => "int8".to_string(),
            LogicalType::Int16 => "int16".to_string(),
            LogicalType::Int32 => "int32".to_string(),
            LogicalType::Int64 => "int64".to_string(),
            LogicalType::UInt8 => "uint8".to_string(),
            LogicalType::UInt16 => "uint16".to_string(),
            LogicalType::UInt32 => "uint32".to_string(),
            LogicalType::UInt64 => "uint64".to_string(),
            LogicalType::Float32 => "float32".to_string(),
            LogicalType::Float64 => "float64".to_string(),
            LogicalType::Decimal => "decimal".to_string(),
            LogicalType::Char => "char".to_string(),
            LogicalType::Utf8 => "utf8".to_string(),
            LogicalType::Binary => "binary".to_string(),
            LogicalType::Timestamp => "timestamp".to_string(),
            LogicalType::TimestampTz => "timestamp_tz".to_string(),
            LogicalType::Duration => "duration".to_string(),
            LogicalType::Uuid => "uuid".to_string(),
            LogicalType::Enum(it) => format!("enum<{}>", it.as_logical().wire_name()),
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

// `ConversionError` carries `LogicalType` in a field named `source`, which
// `thiserror` treats as the error source and therefore requires to implement
// `std::error::Error`. This impl satisfies that bound mechanically.
impl std::error::Error for LogicalType {}
