//! Runtime value representation
//!
//! One variant per logical type. Converters produced by `create()` operate on
//! these values; the selection engine itself never inspects them.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::models::logical_type::{IntType, LogicalType};

/// High-precision decimal: 128-bit mantissa plus a base-10 scale.
///
/// Values are kept normalized (no trailing zero digits in the fraction), so
/// structural equality matches numeric equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    mantissa: i128,
    scale: u8,
}

impl DecimalValue {
    pub fn new(mantissa: i128, scale: u8) -> Self {
        DecimalValue { mantissa, scale }.normalized()
    }

    pub fn from_int(n: i128) -> Self {
        DecimalValue {
            mantissa: n,
            scale: 0,
        }
    }

    /// Lossy conversion from a float, capped at nine fractional digits.
    /// Returns `None` for non-finite inputs.
    pub fn from_f64(f: f64) -> Option<Self> {
        if !f.is_finite() {
            return None;
        }
        let scaled = (f * 1e9).round();
        if scaled.abs() < 1.6e38 {
            Some(
                DecimalValue {
                    mantissa: scaled as i128,
                    scale: 9,
                }
                .normalized(),
            )
        } else {
            // Magnitude too large to scale; keep the integer part.
            Some(DecimalValue {
                mantissa: f as i128,
                scale: 0,
            })
        }
    }

    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn to_f64(&self) -> f64 {
        self.mantissa as f64 / 10f64.powi(self.scale as i32)
    }

    /// Integer part, truncated toward zero.
    pub fn to_int(&self) -> i128 {
        self.mantissa / 10i128.pow(self.scale as u32)
    }

    fn normalized(mut self) -> Self {
        while self.scale > 0 && self.mantissa % 10 == 0 {
            self.mantissa /= 10;
            self.scale -= 1;
        }
        self
    }
}

impl std::fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.mantissa);
        }
        let divisor = 10i128.pow(self.scale as u32);
        let abs = self.mantissa.unsigned_abs();
        let int = abs / divisor as u128;
        let frac = abs % divisor as u128;
        let sign = if self.mantissa < 0 { "-" } else { "" };
        write!(f, "{}{}.{:0width$}", sign, int, frac, width = self.scale as usize)
    }
}

/// Runtime value of an integer-backed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
    /// Width of the underlying integer type.
    pub underlying: IntType,
    /// Member value in the underlying representation.
    pub ordinal: i128,
    /// Member name, when the host knows it; feeds the text converter.
    pub label: Option<String>,
}

impl EnumValue {
    pub fn new(underlying: IntType, ordinal: i128) -> Self {
        EnumValue {
            underlying,
            ordinal,
            label: None,
        }
    }

    pub fn with_label(underlying: IntType, ordinal: i128, label: impl Into<String>) -> Self {
        EnumValue {
            underlying,
            ordinal,
            label: Some(label.into()),
        }
    }
}

/// A runtime value, one variant per logical type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Decimal(DecimalValue),
    Char(char),
    Utf8(String),
    Binary(Vec<u8>),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<FixedOffset>),
    Duration(chrono::Duration),
    Uuid(uuid::Uuid),
    Enum(EnumValue),
}

impl Value {
    /// The logical type this value inhabits.
    pub fn logical_type(&self) -> LogicalType {
        match self {
            Value::Boolean(_) => LogicalType::Boolean,
            Value::Int8(_) => LogicalType::Int8,
            Value::Int16(_) => LogicalType::Int16,
            Value::Int32(_) => LogicalType::Int32,
            Value::Int64(_) => LogicalType::Int64,
            Value::UInt8(_) => LogicalType::UInt8,
            Value::UInt16(_) => LogicalType::UInt16,
            Value::UInt32(_) => LogicalType::UInt32,
            Value::UInt64(_) => LogicalType::UInt64,
            Value::Float32(_) => LogicalType::Float32,
            Value::Float64(_) => LogicalType::Float64,
            Value::Decimal(_) => LogicalType::Decimal,
            Value::Char(_) => LogicalType::Char,
            Value::Utf8(_) => LogicalType::Utf8,
            Value::Binary(_) => LogicalType::Binary,
            Value::Timestamp(_) => LogicalType::Timestamp,
            Value::TimestampTz(_) => LogicalType::TimestampTz,
            Value::Duration(_) => LogicalType::Duration,
            Value::Uuid(_) => LogicalType::Uuid,
            Value::Enum(e) => LogicalType::Enum(e.underlying),
        }
    }
}
