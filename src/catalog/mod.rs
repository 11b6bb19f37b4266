//! Converter catalog: the static rule table behind the selector
//!
//! For each logical type (keyed by [`TypeClass`]) the catalog holds the
//! ordered list of rule groups applicable when that type appears as a
//! conversion source. A rule group is either an explicit `(source, target)`
//! pair, a numeric-cast family expanded at query time, or a composite rule
//! naming the intermediate to chain through.
//!
//! The catalog is assembled once and shared read-only afterwards. Extra
//! rules may be registered only while the catalog is still exclusively owned
//! (`&mut self`); publishing it behind an `Arc` is the point after which no
//! mutation path exists.

pub mod numeric_order;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::models::descriptor::ConverterKind;
use crate::models::hints::MappingHints;
use crate::models::logical_type::{LogicalType, TypeClass};
use numeric_order::NUMERIC_ORDER;

/// One explicit `(source, target)` converter with optional declared hints.
#[derive(Debug, Clone)]
pub struct PairRule {
    pub target: LogicalType,
    pub kind: ConverterKind,
    pub hints: Option<MappingHints>,
}

/// Converter kind used for members of a cast family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyKind {
    NumericCast,
    BoolToNumber,
    EnumToNumber,
}

impl FamilyKind {
    pub fn converter_kind(self) -> ConverterKind {
        match self {
            FamilyKind::NumericCast => ConverterKind::NumericCast,
            FamilyKind::BoolToNumber => ConverterKind::BoolToNumber,
            FamilyKind::EnumToNumber => ConverterKind::EnumToNumber,
        }
    }
}

/// "This source casts to every other numeric type": expanded at query time
/// into one descriptor per target, in the canonical numeric ordering. The
/// `mid` groups are spliced between the widening head and the remaining
/// numeric tail.
#[derive(Debug, Clone)]
pub struct FamilyRule {
    pub kind: FamilyKind,
    pub mid: Vec<RuleGroup>,
}

/// Intermediate type of a composite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Via {
    Fixed(LogicalType),
    /// The source's underlying integer width (enumeration sources).
    SourceUnderlying,
}

/// Two-hop conversion through a declared intermediate. The selector
/// synthesizes the concrete descriptor by resolving the outer leg
/// (`via -> target`) against the catalog; the hints are the outer leg's.
#[derive(Debug, Clone)]
pub struct CompositeRule {
    pub via: Via,
    pub target: LogicalType,
}

#[derive(Debug, Clone)]
pub enum RuleGroup {
    Pair(PairRule),
    Family(FamilyRule),
    Composite(CompositeRule),
}

fn pair(target: LogicalType, kind: ConverterKind, hints: Option<MappingHints>) -> RuleGroup {
    RuleGroup::Pair(PairRule {
        target,
        kind,
        hints,
    })
}

/// Static table mapping each supported logical type to its conversion rules.
#[derive(Debug, Clone)]
pub struct ConverterCatalog {
    rules: HashMap<TypeClass, Vec<RuleGroup>>,
}

static SHARED_CATALOG: Lazy<Arc<ConverterCatalog>> =
    Lazy::new(|| Arc::new(ConverterCatalog::new()));

impl ConverterCatalog {
    /// Catalog with the built-in rule set for every supported type.
    pub fn new() -> Self {
        let mut catalog = ConverterCatalog::empty();

        // Every numeric type: cast family with text and fixed-width byte
        // converters spliced after the widening head.
        for ty in NUMERIC_ORDER {
            let width = ty.byte_width().unwrap_or(8);
            catalog.register(
                ty.class(),
                vec![RuleGroup::Family(FamilyRule {
                    kind: FamilyKind::NumericCast,
                    mid: vec![
                        pair(
                            LogicalType::Utf8,
                            ConverterKind::NumericToString,
                            Some(MappingHints::with_size(64)),
                        ),
                        pair(
                            LogicalType::Binary,
                            ConverterKind::NumericToBytes,
                            Some(MappingHints::with_size(width)),
                        ),
                    ],
                })],
            );
        }

        catalog.register(
            TypeClass::Char,
            vec![
                pair(
                    LogicalType::Utf8,
                    ConverterKind::CharToString,
                    Some(MappingHints::with_size(1)),
                ),
                RuleGroup::Family(FamilyRule {
                    kind: FamilyKind::NumericCast,
                    mid: vec![pair(
                        LogicalType::Binary,
                        ConverterKind::NumericToBytes,
                        Some(MappingHints::with_size(2)),
                    )],
                }),
            ],
        );

        catalog.register(
            TypeClass::Boolean,
            vec![
                RuleGroup::Family(FamilyRule {
                    kind: FamilyKind::BoolToNumber,
                    mid: Vec::new(),
                }),
                pair(
                    LogicalType::Utf8,
                    ConverterKind::BoolToString,
                    Some(MappingHints::with_size(1)),
                ),
                RuleGroup::Composite(CompositeRule {
                    via: Via::Fixed(LogicalType::UInt8),
                    target: LogicalType::Binary,
                }),
            ],
        );

        // Enumerations share one entry; the underlying width is taken from
        // the query. Member names can be long, hence the 512 text hint.
        catalog.register(
            TypeClass::Enum,
            vec![RuleGroup::Family(FamilyRule {
                kind: FamilyKind::EnumToNumber,
                mid: vec![
                    pair(
                        LogicalType::Utf8,
                        ConverterKind::EnumToString,
                        Some(MappingHints::with_size(512)),
                    ),
                    RuleGroup::Composite(CompositeRule {
                        via: Via::SourceUnderlying,
                        target: LogicalType::Binary,
                    }),
                ],
            })],
        );

        catalog.register(
            TypeClass::Utf8,
            vec![pair(LogicalType::Binary, ConverterKind::StringToBytes, None)],
        );
        catalog.register(
            TypeClass::Binary,
            vec![pair(LogicalType::Utf8, ConverterKind::BytesToString, None)],
        );

        catalog.register(
            TypeClass::Timestamp,
            vec![
                pair(
                    LogicalType::Utf8,
                    ConverterKind::TimestampToString,
                    Some(MappingHints::with_size(48)),
                ),
                pair(LogicalType::Int64, ConverterKind::TimestampToMicros, None),
                RuleGroup::Composite(CompositeRule {
                    via: Via::Fixed(LogicalType::Int64),
                    target: LogicalType::Binary,
                }),
            ],
        );

        // The offset-carrying type has a native byte encoding (micros plus
        // offset), so no composite is needed.
        catalog.register(
            TypeClass::TimestampTz,
            vec![
                pair(
                    LogicalType::Utf8,
                    ConverterKind::TimestampTzToString,
                    Some(MappingHints::with_size(48)),
                ),
                pair(LogicalType::Int64, ConverterKind::TimestampTzToMicros, None),
                pair(
                    LogicalType::Binary,
                    ConverterKind::TimestampTzToBytes,
                    Some(MappingHints::with_size(12)),
                ),
            ],
        );

        catalog.register(
            TypeClass::Duration,
            vec![
                pair(
                    LogicalType::Utf8,
                    ConverterKind::DurationToString,
                    Some(MappingHints::with_size(48)),
                ),
                pair(LogicalType::Int64, ConverterKind::DurationToMicros, None),
                RuleGroup::Composite(CompositeRule {
                    via: Via::Fixed(LogicalType::Int64),
                    target: LogicalType::Binary,
                }),
            ],
        );

        catalog.register(
            TypeClass::Uuid,
            vec![
                pair(
                    LogicalType::Binary,
                    ConverterKind::UuidToBytes,
                    Some(MappingHints::with_size(16)),
                ),
                pair(
                    LogicalType::Utf8,
                    ConverterKind::UuidToString,
                    Some(MappingHints::with_size(36)),
                ),
            ],
        );

        catalog
    }

    /// Catalog with no rules at all; every lookup yields an empty slice.
    pub fn empty() -> Self {
        ConverterCatalog {
            rules: HashMap::new(),
        }
    }

    /// Replace the rule groups for one type class. Only reachable while the
    /// catalog is exclusively owned; registration must happen before the
    /// catalog is published to concurrent readers.
    pub fn register(&mut self, class: TypeClass, groups: Vec<RuleGroup>) {
        self.rules.insert(class, groups);
    }

    /// Rule groups for a source type class; empty when the type is unknown.
    pub fn rules_for(&self, class: TypeClass) -> &[RuleGroup] {
        self.rules.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The process-wide default catalog, built on first use.
    pub fn shared() -> Arc<ConverterCatalog> {
        Arc::clone(&SHARED_CATALOG)
    }
}

impl Default for ConverterCatalog {
    fn default() -> Self {
        ConverterCatalog::new()
    }
}
