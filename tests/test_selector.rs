//! Integration tests for converter selection
//!
//! Covers:
//! - Exact descriptor sequences (order, kind, target, hints) for every
//!   source type, including composite splicing positions
//! - Enumeration expansion for each underlying width
//! - Target filtering down to single descriptors
//! - The exhaustive numeric pair grid and the no-identity rule
//! - Consistency between descriptor hints and instantiated converter hints

use mapcast::{
    ConverterDescriptor, ConverterKind, ConverterSelector, IntType, LogicalType, MappingHints,
};

use mapcast::ConverterKind as K;
use mapcast::LogicalType as T;

type Expected = (ConverterKind, LogicalType, Option<MappingHints>);

const NUMERICS: [LogicalType; 11] = [
    T::Int32,
    T::Int64,
    T::Int16,
    T::UInt8,
    T::UInt64,
    T::UInt32,
    T::UInt16,
    T::Int8,
    T::Decimal,
    T::Float64,
    T::Float32,
];

fn size(n: usize) -> Option<MappingHints> {
    Some(MappingHints::with_size(n))
}

fn cast(target: LogicalType) -> Expected {
    (K::NumericCast, target, None)
}

fn assert_converters(source: LogicalType, actual: &[ConverterDescriptor], expected: &[Expected]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "sequence length for {}",
        source
    );
    for (i, (descriptor, (kind, target, hints))) in actual.iter().zip(expected).enumerate() {
        assert_eq!(descriptor.source, source, "entry {}: source", i);
        assert_eq!(&descriptor.kind, kind, "entry {}: kind", i);
        assert_eq!(&descriptor.target, target, "entry {}: target", i);
        assert_eq!(&descriptor.hints, hints, "entry {}: hints", i);

        // the instantiated converter must agree with its descriptor
        let converter = descriptor.create();
        assert_eq!(converter.source(), descriptor.source);
        assert_eq!(converter.target(), descriptor.target);
        assert_eq!(converter.kind(), descriptor.kind);
        assert_eq!(
            converter.mapping_hints(),
            descriptor.hints.as_ref(),
            "entry {}: converter hints",
            i
        );
    }
}

#[test]
fn converters_for_int32() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Int32,
        &selector.resolve(T::Int32, None),
        &[
            cast(T::Int64),
            cast(T::Decimal),
            (K::NumericToString, T::Utf8, size(64)),
            (K::NumericToBytes, T::Binary, size(4)),
            cast(T::Int16),
            cast(T::UInt8),
            cast(T::UInt64),
            cast(T::UInt32),
            cast(T::UInt16),
            cast(T::Int8),
            cast(T::Float64),
            cast(T::Float32),
        ],
    );
}

#[test]
fn converters_for_uint32() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::UInt32,
        &selector.resolve(T::UInt32, None),
        &[
            cast(T::Int64),
            cast(T::UInt64),
            cast(T::Decimal),
            (K::NumericToString, T::Utf8, size(64)),
            (K::NumericToBytes, T::Binary, size(4)),
            cast(T::Int32),
            cast(T::Int16),
            cast(T::UInt8),
            cast(T::UInt16),
            cast(T::Int8),
            cast(T::Float64),
            cast(T::Float32),
        ],
    );
}

#[test]
fn converters_for_int8() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Int8,
        &selector.resolve(T::Int8, None),
        &[
            cast(T::Int16),
            cast(T::Int32),
            cast(T::Int64),
            cast(T::Decimal),
            (K::NumericToString, T::Utf8, size(64)),
            (K::NumericToBytes, T::Binary, size(1)),
            cast(T::UInt8),
            cast(T::UInt64),
            cast(T::UInt32),
            cast(T::UInt16),
            cast(T::Float64),
            cast(T::Float32),
        ],
    );
}

#[test]
fn converters_for_uint8() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::UInt8,
        &selector.resolve(T::UInt8, None),
        &[
            cast(T::Int16),
            cast(T::UInt16),
            cast(T::Int32),
            cast(T::UInt32),
            cast(T::Int64),
            cast(T::UInt64),
            cast(T::Decimal),
            (K::NumericToString, T::Utf8, size(64)),
            (K::NumericToBytes, T::Binary, size(1)),
            cast(T::Int8),
            cast(T::Float64),
            cast(T::Float32),
        ],
    );
}

#[test]
fn converters_for_float64() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Float64,
        &selector.resolve(T::Float64, None),
        &[
            cast(T::Decimal),
            (K::NumericToString, T::Utf8, size(64)),
            (K::NumericToBytes, T::Binary, size(8)),
            cast(T::Int32),
            cast(T::Int64),
            cast(T::Int16),
            cast(T::UInt8),
            cast(T::UInt64),
            cast(T::UInt32),
            cast(T::UInt16),
            cast(T::Int8),
            cast(T::Float32),
        ],
    );
}

#[test]
fn converters_for_float32() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Float32,
        &selector.resolve(T::Float32, None),
        &[
            cast(T::Float64),
            cast(T::Decimal),
            (K::NumericToString, T::Utf8, size(64)),
            (K::NumericToBytes, T::Binary, size(4)),
            cast(T::Int32),
            cast(T::Int64),
            cast(T::Int16),
            cast(T::UInt8),
            cast(T::UInt64),
            cast(T::UInt32),
            cast(T::UInt16),
            cast(T::Int8),
        ],
    );
}

#[test]
fn converters_for_decimal() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Decimal,
        &selector.resolve(T::Decimal, None),
        &[
            (K::NumericToString, T::Utf8, size(64)),
            (K::NumericToBytes, T::Binary, size(16)),
            cast(T::Int32),
            cast(T::Int64),
            cast(T::Int16),
            cast(T::UInt8),
            cast(T::UInt64),
            cast(T::UInt32),
            cast(T::UInt16),
            cast(T::Int8),
            cast(T::Float64),
            cast(T::Float32),
        ],
    );
}

#[test]
fn every_numeric_source_has_twelve_candidates() {
    let selector = ConverterSelector::default();
    for source in NUMERICS {
        let descriptors = selector.resolve(source, None);
        assert_eq!(descriptors.len(), 12, "candidate count for {}", source);

        let text: Vec<_> = descriptors
            .iter()
            .filter(|d| d.kind == K::NumericToString)
            .collect();
        assert_eq!(text.len(), 1, "text converters for {}", source);
        assert_eq!(text[0].hints, size(64));

        let bytes: Vec<_> = descriptors
            .iter()
            .filter(|d| d.kind == K::NumericToBytes)
            .collect();
        assert_eq!(bytes.len(), 1, "byte converters for {}", source);
        assert_eq!(bytes[0].hints, size(source.byte_width().unwrap()));

        // casts cover every other numeric exactly once, hint-free
        let casts: Vec<_> = descriptors
            .iter()
            .filter(|d| d.kind == K::NumericCast)
            .collect();
        assert_eq!(casts.len(), 10, "cast count for {}", source);
        for other in NUMERICS {
            if other == source {
                assert!(casts.iter().all(|d| d.target != other));
            } else {
                assert_eq!(casts.iter().filter(|d| d.target == other).count(), 1);
            }
        }
        assert!(casts.iter().all(|d| d.hints.is_none()));
    }
}

#[test]
fn converters_for_char() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Char,
        &selector.resolve(T::Char, None),
        &[
            (K::CharToString, T::Utf8, size(1)),
            cast(T::Int32),
            cast(T::UInt16),
            cast(T::UInt32),
            cast(T::Int64),
            cast(T::UInt64),
            cast(T::Decimal),
            (K::NumericToBytes, T::Binary, size(2)),
            cast(T::Int16),
            cast(T::UInt8),
            cast(T::Int8),
            cast(T::Float64),
            cast(T::Float32),
        ],
    );
}

#[test]
fn char_target_filtering() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Char,
        &selector.resolve(T::Char, Some(T::Utf8)),
        &[(K::CharToString, T::Utf8, size(1))],
    );
    assert_converters(
        T::Char,
        &selector.resolve(T::Char, Some(T::Binary)),
        &[(K::NumericToBytes, T::Binary, size(2))],
    );
    assert_converters(
        T::Char,
        &selector.resolve(T::Char, Some(T::UInt16)),
        &[cast(T::UInt16)],
    );
}

#[test]
fn converters_for_bool() {
    let selector = ConverterSelector::default();
    let mut expected: Vec<Expected> = NUMERICS
        .iter()
        .map(|&target| (K::BoolToNumber, target, None))
        .collect();
    expected.push((K::BoolToString, T::Utf8, size(1)));
    expected.push((K::Composite { via: T::UInt8 }, T::Binary, size(1)));
    assert_converters(T::Boolean, &selector.resolve(T::Boolean, None), &expected);
}

#[test]
fn converters_for_int32_enum() {
    let selector = ConverterSelector::default();
    let source = T::Enum(IntType::Int32);
    let enum_cast = |target| (K::EnumToNumber, target, None);
    assert_converters(
        source,
        &selector.resolve(source, None),
        &[
            enum_cast(T::Int32),
            enum_cast(T::Int64),
            enum_cast(T::Decimal),
            (K::EnumToString, T::Utf8, size(512)),
            (K::Composite { via: T::Int32 }, T::Binary, size(4)),
            enum_cast(T::Int16),
            enum_cast(T::UInt8),
            enum_cast(T::UInt64),
            enum_cast(T::UInt32),
            enum_cast(T::UInt16),
            enum_cast(T::Int8),
            enum_cast(T::Float64),
            enum_cast(T::Float32),
        ],
    );
}

#[test]
fn converters_for_uint64_enum() {
    let selector = ConverterSelector::default();
    let source = T::Enum(IntType::UInt64);
    let enum_cast = |target| (K::EnumToNumber, target, None);
    assert_converters(
        source,
        &selector.resolve(source, None),
        &[
            enum_cast(T::UInt64),
            (
                K::EnumToNumber,
                T::Decimal,
                Some(MappingHints::with_precision_scale(20, 0)),
            ),
            (K::EnumToString, T::Utf8, size(512)),
            (K::Composite { via: T::UInt64 }, T::Binary, size(8)),
            enum_cast(T::Int32),
            enum_cast(T::Int64),
            enum_cast(T::Int16),
            enum_cast(T::UInt8),
            enum_cast(T::UInt32),
            enum_cast(T::UInt16),
            enum_cast(T::Int8),
            enum_cast(T::Float64),
            enum_cast(T::Float32),
        ],
    );
}

#[test]
fn converters_for_int64_enum() {
    let selector = ConverterSelector::default();
    let source = T::Enum(IntType::Int64);
    let enum_cast = |target| (K::EnumToNumber, target, None);
    assert_converters(
        source,
        &selector.resolve(source, None),
        &[
            enum_cast(T::Int64),
            (
                K::EnumToNumber,
                T::Decimal,
                Some(MappingHints::with_precision_scale(20, 0)),
            ),
            (K::EnumToString, T::Utf8, size(512)),
            (K::Composite { via: T::Int64 }, T::Binary, size(8)),
            enum_cast(T::Int32),
            enum_cast(T::Int16),
            enum_cast(T::UInt8),
            enum_cast(T::UInt64),
            enum_cast(T::UInt32),
            enum_cast(T::UInt16),
            enum_cast(T::Int8),
            enum_cast(T::Float64),
            enum_cast(T::Float32),
        ],
    );
}

#[test]
fn converters_for_uint8_enum() {
    let selector = ConverterSelector::default();
    let source = T::Enum(IntType::UInt8);
    let enum_cast = |target| (K::EnumToNumber, target, None);
    assert_converters(
        source,
        &selector.resolve(source, None),
        &[
            enum_cast(T::UInt8),
            enum_cast(T::Int16),
            enum_cast(T::UInt16),
            enum_cast(T::Int32),
            enum_cast(T::UInt32),
            enum_cast(T::Int64),
            enum_cast(T::UInt64),
            enum_cast(T::Decimal),
            (K::EnumToString, T::Utf8, size(512)),
            (K::Composite { via: T::UInt8 }, T::Binary, size(1)),
            enum_cast(T::Int8),
            enum_cast(T::Float64),
            enum_cast(T::Float32),
        ],
    );
}

#[test]
fn enum_target_filtering() {
    let selector = ConverterSelector::default();
    let source = T::Enum(IntType::Int32);

    assert_converters(
        source,
        &selector.resolve(source, Some(T::Utf8)),
        &[(K::EnumToString, T::Utf8, size(512))],
    );
    assert_converters(
        source,
        &selector.resolve(source, Some(T::Int32)),
        &[(K::EnumToNumber, T::Int32, None)],
    );
    assert_converters(
        source,
        &selector.resolve(source, Some(T::Int8)),
        &[(K::EnumToNumber, T::Int8, None)],
    );
    assert_converters(
        source,
        &selector.resolve(source, Some(T::Binary)),
        &[(K::Composite { via: T::Int32 }, T::Binary, size(4))],
    );
}

#[test]
fn only_64_bit_backed_enums_hint_decimal_precision() {
    let selector = ConverterSelector::default();
    let expected = Some(MappingHints::with_precision_scale(20, 0));

    let wide = [IntType::Int64, IntType::UInt64];
    for it in wide {
        let result = selector.resolve(T::Enum(it), Some(T::Decimal));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].hints, expected, "underlying {:?}", it);
    }

    let narrow = [
        IntType::Int8,
        IntType::Int16,
        IntType::Int32,
        IntType::UInt8,
        IntType::UInt16,
        IntType::UInt32,
    ];
    for it in narrow {
        let result = selector.resolve(T::Enum(it), Some(T::Decimal));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].hints, None, "underlying {:?}", it);
    }

    // plain numeric sources never hint a precision when targeting decimal
    for source in NUMERICS {
        for d in selector.resolve(source, Some(T::Decimal)) {
            assert_eq!(d.hints, None, "source {}", source);
        }
    }
}

#[test]
fn converters_for_uuid() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Uuid,
        &selector.resolve(T::Uuid, None),
        &[
            (K::UuidToBytes, T::Binary, size(16)),
            (K::UuidToString, T::Utf8, size(36)),
        ],
    );
    assert_converters(
        T::Uuid,
        &selector.resolve(T::Uuid, Some(T::Utf8)),
        &[(K::UuidToString, T::Utf8, size(36))],
    );
    assert_converters(
        T::Uuid,
        &selector.resolve(T::Uuid, Some(T::Binary)),
        &[(K::UuidToBytes, T::Binary, size(16))],
    );
}

#[test]
fn converters_for_strings_and_bytes() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Utf8,
        &selector.resolve(T::Utf8, None),
        &[(K::StringToBytes, T::Binary, None)],
    );
    assert_converters(
        T::Utf8,
        &selector.resolve(T::Utf8, Some(T::Binary)),
        &[(K::StringToBytes, T::Binary, None)],
    );
    assert_converters(
        T::Binary,
        &selector.resolve(T::Binary, None),
        &[(K::BytesToString, T::Utf8, None)],
    );
    assert_converters(
        T::Binary,
        &selector.resolve(T::Binary, Some(T::Utf8)),
        &[(K::BytesToString, T::Utf8, None)],
    );
}

#[test]
fn converters_for_timestamp() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Timestamp,
        &selector.resolve(T::Timestamp, None),
        &[
            (K::TimestampToString, T::Utf8, size(48)),
            (K::TimestampToMicros, T::Int64, None),
            (K::Composite { via: T::Int64 }, T::Binary, size(8)),
        ],
    );
    assert_converters(
        T::Timestamp,
        &selector.resolve(T::Timestamp, Some(T::Binary)),
        &[(K::Composite { via: T::Int64 }, T::Binary, size(8))],
    );
    assert_converters(
        T::Timestamp,
        &selector.resolve(T::Timestamp, Some(T::Utf8)),
        &[(K::TimestampToString, T::Utf8, size(48))],
    );
    assert_converters(
        T::Timestamp,
        &selector.resolve(T::Timestamp, Some(T::Int64)),
        &[(K::TimestampToMicros, T::Int64, None)],
    );
}

#[test]
fn converters_for_timestamp_tz() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::TimestampTz,
        &selector.resolve(T::TimestampTz, None),
        &[
            (K::TimestampTzToString, T::Utf8, size(48)),
            (K::TimestampTzToMicros, T::Int64, None),
            (K::TimestampTzToBytes, T::Binary, size(12)),
        ],
    );
    assert_converters(
        T::TimestampTz,
        &selector.resolve(T::TimestampTz, Some(T::Binary)),
        &[(K::TimestampTzToBytes, T::Binary, size(12))],
    );
    assert_converters(
        T::TimestampTz,
        &selector.resolve(T::TimestampTz, Some(T::Int64)),
        &[(K::TimestampTzToMicros, T::Int64, None)],
    );
}

#[test]
fn converters_for_duration() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Duration,
        &selector.resolve(T::Duration, None),
        &[
            (K::DurationToString, T::Utf8, size(48)),
            (K::DurationToMicros, T::Int64, None),
            (K::Composite { via: T::Int64 }, T::Binary, size(8)),
        ],
    );
    assert_converters(
        T::Duration,
        &selector.resolve(T::Duration, Some(T::Binary)),
        &[(K::Composite { via: T::Int64 }, T::Binary, size(8))],
    );
    assert_converters(
        T::Duration,
        &selector.resolve(T::Duration, Some(T::Int64)),
        &[(K::DurationToMicros, T::Int64, None)],
    );
}

#[test]
fn reciprocal_float_casts() {
    let selector = ConverterSelector::default();
    assert_converters(
        T::Float64,
        &selector.resolve(T::Float64, Some(T::Float32)),
        &[cast(T::Float32)],
    );
    assert_converters(
        T::Float32,
        &selector.resolve(T::Float32, Some(T::Float64)),
        &[cast(T::Float64)],
    );
}

#[test]
fn exhaustive_numeric_pair_grid() {
    let selector = ConverterSelector::default();
    for source in NUMERICS {
        for target in NUMERICS {
            let result = selector.resolve(source, Some(target));
            if source == target {
                assert!(result.is_empty(), "{} -> {} must be empty", source, target);
            } else {
                assert_eq!(result.len(), 1, "{} -> {}", source, target);
                assert_eq!(result[0].kind, K::NumericCast);
                assert_eq!(result[0].source, source);
                assert_eq!(result[0].target, target);
            }
        }
    }
}

#[test]
fn identity_is_never_offered() {
    let selector = ConverterSelector::default();
    let all_types = [
        T::Boolean,
        T::Int8,
        T::Int16,
        T::Int32,
        T::Int64,
        T::UInt8,
        T::UInt16,
        T::UInt32,
        T::UInt64,
        T::Float32,
        T::Float64,
        T::Decimal,
        T::Char,
        T::Utf8,
        T::Binary,
        T::Timestamp,
        T::TimestampTz,
        T::Duration,
        T::Uuid,
        T::Enum(IntType::Int32),
        T::Enum(IntType::UInt64),
    ];
    for ty in all_types {
        assert!(
            selector.resolve(ty, Some(ty)).is_empty(),
            "identity offered for {}",
            ty
        );
    }
}

#[test]
fn repeated_queries_are_identical() {
    let selector = ConverterSelector::default();
    let sources = [
        T::Boolean,
        T::Int32,
        T::Char,
        T::Decimal,
        T::Timestamp,
        T::Enum(IntType::UInt8),
    ];
    for source in sources {
        let first = selector.resolve(source, None);
        let second = selector.resolve(source, None);
        assert_eq!(first, second, "unstable sequence for {}", source);
    }
}

#[test]
fn descriptors_serialize_for_the_wire() {
    let selector = ConverterSelector::default();
    let descriptor = selector.resolve(T::Uuid, Some(T::Utf8)).remove(0);
    let json = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(json["source"], "Uuid");
    assert_eq!(json["target"], "Utf8");
    assert_eq!(json["hints"]["size"], 36);

    let back: ConverterDescriptor = serde_json::from_value(json).unwrap();
    assert_eq!(back, descriptor);
}
