//! Canonical numeric ordering tables
//!
//! These orderings are behaviorally significant: they fix the order in which
//! family expansion emits converters, which callers rely on when picking the
//! first acceptable candidate. They are pinned as constants by convention —
//! do not re-derive them from width or signedness rules.

use crate::models::logical_type::LogicalType;

/// The eleven numeric types, in the order the family tail emits them.
pub const NUMERIC_ORDER: [LogicalType; 11] = [
    LogicalType::Int32,
    LogicalType::Int64,
    LogicalType::Int16,
    LogicalType::UInt8,
    LogicalType::UInt64,
    LogicalType::UInt32,
    LogicalType::UInt16,
    LogicalType::Int8,
    LogicalType::Decimal,
    LogicalType::Float64,
    LogicalType::Float32,
];

/// Widening chain for signed integer sources.
pub const SIGNED_WIDENING: [LogicalType; 5] = [
    LogicalType::Int8,
    LogicalType::Int16,
    LogicalType::Int32,
    LogicalType::Int64,
    LogicalType::Decimal,
];

/// Widening chain for unsigned integer sources. Signed types wide enough to
/// hold the unsigned value are interleaved.
pub const UNSIGNED_WIDENING: [LogicalType; 8] = [
    LogicalType::UInt8,
    LogicalType::Int16,
    LogicalType::UInt16,
    LogicalType::Int32,
    LogicalType::UInt32,
    LogicalType::Int64,
    LogicalType::UInt64,
    LogicalType::Decimal,
];

/// Widening chain for floating-point sources.
pub const FLOAT_WIDENING: [LogicalType; 3] = [
    LogicalType::Float32,
    LogicalType::Float64,
    LogicalType::Decimal,
];

/// Widening chain for the character source (code-unit casts).
pub const CHAR_WIDENING: [LogicalType; 7] = [
    LogicalType::Char,
    LogicalType::Int32,
    LogicalType::UInt16,
    LogicalType::UInt32,
    LogicalType::Int64,
    LogicalType::UInt64,
    LogicalType::Decimal,
];
