//! Shared error types for mapcast.
//!
//! Selection itself never fails — an unsupported source type or an
//! unreachable target is an empty result. Errors exist only at the
//! conversion layer, when an instantiated converter is applied to a value.

use thiserror::Error;

use crate::models::logical_type::LogicalType;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: LogicalType,
        actual: LogicalType,
    },

    #[error("byte sequence is not valid UTF-8")]
    InvalidUtf8,

    #[error("value out of range for {target}: {detail}")]
    OutOfRange { target: LogicalType, detail: String },

    #[error("no direct conversion from {source} to {target}")]
    UnsupportedConversion {
        source: LogicalType,
        target: LogicalType,
    },
}
