//! Numeric casts
//!
//! Casting between the numeric types goes through an i128/f64 intermediate;
//! integer narrowing wraps (two's complement), float-to-integer saturates,
//! decimal endpoints use mantissa/scale arithmetic. Boolean (0/1), character
//! (code point) and enumeration (ordinal) sources funnel through the same
//! path.

use crate::errors::ConversionError;
use crate::models::logical_type::LogicalType;
use crate::models::value::{DecimalValue, Value};

enum Num {
    Int(i128),
    Float(f64),
    Dec(DecimalValue),
}

fn numeric_view(value: &Value) -> Option<Num> {
    Some(match value {
        Value::Boolean(b) => Num::Int(*b as i128),
        Value::Int8(v) => Num::Int(*v as i128),
        Value::Int16(v) => Num::Int(*v as i128),
        Value::Int32(v) => Num::Int(*v as i128),
        Value::Int64(v) => Num::Int(*v as i128),
        Value::UInt8(v) => Num::Int(*v as i128),
        Value::UInt16(v) => Num::Int(*v as i128),
        Value::UInt32(v) => Num::Int(*v as i128),
        Value::UInt64(v) => Num::Int(*v as i128),
        Value::Float32(v) => Num::Float(*v as f64),
        Value::Float64(v) => Num::Float(*v),
        Value::Decimal(d) => Num::Dec(*d),
        Value::Char(c) => Num::Int(*c as u32 as i128),
        Value::Enum(e) => Num::Int(e.ordinal),
        _ => return None,
    })
}

fn as_i128(num: &Num) -> i128 {
    match num {
        Num::Int(i) => *i,
        Num::Float(f) => *f as i128,
        Num::Dec(d) => d.to_int(),
    }
}

fn as_f64(num: &Num) -> f64 {
    match num {
        Num::Int(i) => *i as f64,
        Num::Float(f) => *f,
        Num::Dec(d) => d.to_f64(),
    }
}

/// Cast a numeric-valued input into `target`.
pub fn cast_to(value: &Value, target: LogicalType) -> Result<Value, ConversionError> {
    let num = numeric_view(value).ok_or(ConversionError::UnsupportedConversion {
        source: value.logical_type(),
        target,
    })?;
    let out = match target {
        LogicalType::Int8 => Value::Int8(as_i128(&num) as i8),
        LogicalType::Int16 => Value::Int16(as_i128(&num) as i16),
        LogicalType::Int32 => Value::Int32(as_i128(&num) as i32),
        LogicalType::Int64 => Value::Int64(as_i128(&num) as i64),
        LogicalType::UInt8 => Value::UInt8(as_i128(&num) as u8),
        LogicalType::UInt16 => Value::UInt16(as_i128(&num) as u16),
        LogicalType::UInt32 => Value::UInt32(as_i128(&num) as u32),
        LogicalType::UInt64 => Value::UInt64(as_i128(&num) as u64),
        LogicalType::Float32 => Value::Float32(as_f64(&num) as f32),
        LogicalType::Float64 => Value::Float64(as_f64(&num)),
        LogicalType::Decimal => Value::Decimal(match num {
            Num::Int(i) => DecimalValue::from_int(i),
            Num::Float(f) => DecimalValue::from_f64(f).ok_or(ConversionError::OutOfRange {
                target: LogicalType::Decimal,
                detail: "non-finite float".to_string(),
            })?,
            Num::Dec(d) => d,
        }),
        other => {
            return Err(ConversionError::UnsupportedConversion {
                source: value.logical_type(),
                target: other,
            })
        }
    };
    Ok(out)
}
