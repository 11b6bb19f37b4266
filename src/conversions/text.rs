//! Text renderings of scalar values
//!
//! Booleans render as "0"/"1", enumerations as their member label when one
//! is known, temporal values in RFC 3339 style.

use crate::errors::ConversionError;
use crate::models::value::Value;

/// Render a value as text for a string-typed storage target.
pub fn render(value: &Value) -> Result<String, ConversionError> {
    let text = match value {
        Value::Boolean(b) => if *b { "1" } else { "0" }.to_string(),
        Value::Int8(v) => v.to_string(),
        Value::Int16(v) => v.to_string(),
        Value::Int32(v) => v.to_string(),
        Value::Int64(v) => v.to_string(),
        Value::UInt8(v) => v.to_string(),
        Value::UInt16(v) => v.to_string(),
        Value::UInt32(v) => v.to_string(),
        Value::UInt64(v) => v.to_string(),
        Value::Float32(v) => v.to_string(),
        Value::Float64(v) => v.to_string(),
        Value::Decimal(d) => d.to_string(),
        Value::Char(c) => c.to_string(),
        Value::Enum(e) => match &e.label {
            Some(label) => label.clone(),
            None => e.ordinal.to_string(),
        },
        Value::Timestamp(ts) => ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        Value::TimestampTz(dt) => dt.to_rfc3339(),
        Value::Duration(d) => format_duration(d),
        Value::Uuid(u) => u.to_string(),
        other => {
            return Err(ConversionError::UnsupportedConversion {
                source: other.logical_type(),
                target: crate::models::logical_type::LogicalType::Utf8,
            })
        }
    };
    Ok(text)
}

/// `[-][d.]hh:mm:ss[.ffffff]`, days omitted when zero.
fn format_duration(d: &chrono::Duration) -> String {
    let negative = *d < chrono::Duration::zero();
    let abs = if negative { -*d } else { *d };
    let total_micros = abs.num_microseconds().unwrap_or(i64::MAX);
    let micros = total_micros % 1_000_000;
    let total_secs = total_micros / 1_000_000;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = (total_secs / 3600) % 24;
    let days = total_secs / 86_400;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if days > 0 {
        out.push_str(&format!("{}.", days));
    }
    out.push_str(&format!("{:02}:{:02}:{:02}", hours, mins, secs));
    if micros > 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::logical_type::IntType;
    use crate::models::value::{DecimalValue, EnumValue};
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_bool_renders_as_digit() {
        assert_eq!(render(&Value::Boolean(true)).unwrap(), "1");
        assert_eq!(render(&Value::Boolean(false)).unwrap(), "0");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(render(&Value::Int32(-42)).unwrap(), "-42");
        assert_eq!(render(&Value::UInt64(99)).unwrap(), "99");
        assert_eq!(
            render(&Value::Decimal(DecimalValue::new(1053, 2))).unwrap(),
            "10.53"
        );
    }

    #[test]
    fn test_enum_prefers_label() {
        let labeled = Value::Enum(EnumValue::with_label(IntType::UInt8, 3, "Cube"));
        assert_eq!(render(&labeled).unwrap(), "Cube");

        let bare = Value::Enum(EnumValue::new(IntType::UInt8, 3));
        assert_eq!(render(&bare).unwrap(), "3");
    }

    #[test]
    fn test_timestamp_format() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_micro_opt(12, 30, 5, 250)
            .unwrap();
        assert_eq!(
            render(&Value::Timestamp(ts)).unwrap(),
            "2024-03-01T12:30:05.000250"
        );
    }

    #[test]
    fn test_timestamp_tz_is_rfc3339() {
        let offset = chrono::FixedOffset::east_opt(3600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            render(&Value::TimestampTz(dt)).unwrap(),
            "2024-03-01T12:00:00+01:00"
        );
    }

    #[test]
    fn test_duration_format() {
        let d = chrono::Duration::seconds(3661);
        assert_eq!(render(&Value::Duration(d)).unwrap(), "01:01:01");

        let with_days = chrono::Duration::seconds(90_000) + chrono::Duration::microseconds(42);
        assert_eq!(
            render(&Value::Duration(with_days)).unwrap(),
            "1.01:00:00.000042"
        );

        let negative = chrono::Duration::seconds(-5);
        assert_eq!(render(&Value::Duration(negative)).unwrap(), "-00:00:05");
    }

    #[test]
    fn test_uuid_is_hyphenated() {
        let u = uuid::Uuid::from_u128(0x11223344_5566_7788_99aa_bbccddeeff00);
        assert_eq!(
            render(&Value::Uuid(u)).unwrap(),
            "11223344-5566-7788-99aa-bbccddeeff00"
        );
    }

    #[test]
    fn test_binary_is_not_text_renderable() {
        assert!(render(&Value::Binary(vec![1, 2])).is_err());
    }
}
