//! Temporal values as 64-bit integers
//!
//! Microseconds since the Unix epoch, UTC for the offset-carrying type.

use crate::errors::ConversionError;
use crate::models::logical_type::LogicalType;
use crate::models::value::Value;

pub fn to_micros(value: &Value) -> Result<Value, ConversionError> {
    let micros = match value {
        Value::Timestamp(ts) => ts.and_utc().timestamp_micros(),
        Value::TimestampTz(dt) => dt.timestamp_micros(),
        Value::Duration(d) => d.num_microseconds().ok_or_else(|| ConversionError::OutOfRange {
            target: LogicalType::Int64,
            detail: "interval exceeds the microsecond range".to_string(),
        })?,
        other => {
            return Err(ConversionError::UnsupportedConversion {
                source: other.logical_type(),
                target: LogicalType::Int64,
            })
        }
    };
    Ok(Value::Int64(micros))
}
