//! Fixed-width byte encodings
//!
//! Numeric values encode big-endian at their natural width, the key-friendly
//! layout used for index prefixes. Decimal packs its scale byte ahead of the
//! low 120 bits of the mantissa (16 bytes total); the offset-carrying
//! timestamp packs 8 bytes of UTC microseconds plus 4 bytes of offset
//! seconds.

use crate::errors::ConversionError;
use crate::models::logical_type::LogicalType;
use crate::models::value::{DecimalValue, Value};

/// Encode a numeric or character value at its natural fixed width.
pub fn fixed_width(value: &Value) -> Result<Value, ConversionError> {
    let bytes = match value {
        Value::Int8(v) => v.to_be_bytes().to_vec(),
        Value::Int16(v) => v.to_be_bytes().to_vec(),
        Value::Int32(v) => v.to_be_bytes().to_vec(),
        Value::Int64(v) => v.to_be_bytes().to_vec(),
        Value::UInt8(v) => v.to_be_bytes().to_vec(),
        Value::UInt16(v) => v.to_be_bytes().to_vec(),
        Value::UInt32(v) => v.to_be_bytes().to_vec(),
        Value::UInt64(v) => v.to_be_bytes().to_vec(),
        Value::Float32(v) => v.to_be_bytes().to_vec(),
        Value::Float64(v) => v.to_be_bytes().to_vec(),
        // UTF-16-style code unit; supplementary-plane characters truncate.
        Value::Char(c) => (*c as u32 as u16).to_be_bytes().to_vec(),
        Value::Decimal(d) => decimal_bytes(d),
        other => {
            return Err(ConversionError::UnsupportedConversion {
                source: other.logical_type(),
                target: LogicalType::Binary,
            })
        }
    };
    Ok(Value::Binary(bytes))
}

fn decimal_bytes(d: &DecimalValue) -> Vec<u8> {
    let mut out = Vec::with_capacity(16);
    out.push(d.scale());
    // low 120 bits of the mantissa, two's complement big-endian
    out.extend_from_slice(&d.mantissa().to_be_bytes()[1..]);
    out
}

pub fn string_to_bytes(value: &Value) -> Result<Value, ConversionError> {
    match value {
        Value::Utf8(s) => Ok(Value::Binary(s.as_bytes().to_vec())),
        other => Err(ConversionError::UnsupportedConversion {
            source: other.logical_type(),
            target: LogicalType::Binary,
        }),
    }
}

pub fn bytes_to_string(value: &Value) -> Result<Value, ConversionError> {
    match value {
        Value::Binary(b) => String::from_utf8(b.clone())
            .map(Value::Utf8)
            .map_err(|_| ConversionError::InvalidUtf8),
        other => Err(ConversionError::UnsupportedConversion {
            source: other.logical_type(),
            target: LogicalType::Utf8,
        }),
    }
}

pub fn uuid_to_bytes(value: &Value) -> Result<Value, ConversionError> {
    match value {
        Value::Uuid(u) => Ok(Value::Binary(u.as_bytes().to_vec())),
        other => Err(ConversionError::UnsupportedConversion {
            source: other.logical_type(),
            target: LogicalType::Binary,
        }),
    }
}

/// 8-byte UTC microseconds followed by 4-byte offset seconds.
pub fn timestamp_tz_to_bytes(value: &Value) -> Result<Value, ConversionError> {
    match value {
        Value::TimestampTz(dt) => {
            let mut out = Vec::with_capacity(12);
            out.extend_from_slice(&dt.timestamp_micros().to_be_bytes());
            out.extend_from_slice(&dt.offset().local_minus_utc().to_be_bytes());
            Ok(Value::Binary(out))
        }
        other => Err(ConversionError::UnsupportedConversion {
            source: other.logical_type(),
            target: LogicalType::Binary,
        }),
    }
}
