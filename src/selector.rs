//! Converter selection
//!
//! `ConverterSelector::resolve` walks the catalog for a source type, expands
//! rule groups into concrete descriptors (families in canonical numeric
//! order, composites synthesized through their declared intermediate), and
//! optionally narrows the result to one requested target type.
//!
//! The selector is stateless: identical inputs always produce identical
//! descriptor sequences, and concurrent calls share nothing but the
//! immutable catalog.

use std::sync::Arc;

use crate::catalog::numeric_order::{
    CHAR_WIDENING, FLOAT_WIDENING, NUMERIC_ORDER, SIGNED_WIDENING, UNSIGNED_WIDENING,
};
use crate::catalog::{CompositeRule, ConverterCatalog, FamilyKind, FamilyRule, PairRule, RuleGroup, Via};
use crate::models::descriptor::{ConverterDescriptor, ConverterKind};
use crate::models::hints::MappingHints;
use crate::models::logical_type::LogicalType;

/// Resolves converter descriptors for `(source, optional target)` queries.
#[derive(Debug, Clone)]
pub struct ConverterSelector {
    catalog: Arc<ConverterCatalog>,
}

impl ConverterSelector {
    pub fn new(catalog: Arc<ConverterCatalog>) -> Self {
        ConverterSelector { catalog }
    }

    /// All converters reaching `target` from `source`, most natural first.
    ///
    /// With `target` given, the result has at most one element; identity
    /// queries and unreachable targets yield an empty vector, never an
    /// error. With `target` omitted, the full ordered candidate list is
    /// returned.
    pub fn resolve(
        &self,
        source: LogicalType,
        target: Option<LogicalType>,
    ) -> Vec<ConverterDescriptor> {
        let mut out = Vec::new();
        for group in self.catalog.rules_for(source.class()) {
            self.expand_group(source, group, &mut out);
        }
        log::trace!(
            "expanded {} candidate converter(s) for source {}",
            out.len(),
            source
        );
        match target {
            Some(t) => out.into_iter().filter(|d| d.target == t).collect(),
            None => out,
        }
    }

    fn expand_group(
        &self,
        source: LogicalType,
        group: &RuleGroup,
        out: &mut Vec<ConverterDescriptor>,
    ) {
        match group {
            RuleGroup::Pair(rule) => out.push(pair_descriptor(source, rule)),
            RuleGroup::Family(rule) => self.expand_family(source, rule, out),
            RuleGroup::Composite(rule) => {
                if let Some(descriptor) = self.synthesize_composite(source, rule) {
                    out.push(descriptor);
                }
            }
        }
    }

    /// Family expansion: widening head, spliced mid converters, remaining
    /// numeric tail. `used` tracks emitted targets so overlapping widening
    /// chains stay duplicate-free.
    fn expand_family(
        &self,
        source: LogicalType,
        family: &FamilyRule,
        out: &mut Vec<ConverterDescriptor>,
    ) {
        let underlying = source.underlying();
        let is_enum = matches!(source, LogicalType::Enum(_));
        let mut used: Vec<LogicalType> = vec![source];

        // An enumeration converts to its own underlying width first.
        if is_enum {
            out.push(family_descriptor(source, underlying, family.kind));
            used.push(underlying);
        }

        walk_widening(&SIGNED_WIDENING, source, family.kind, is_enum, &mut used, out);
        if underlying.is_unsigned_int() {
            walk_widening(&UNSIGNED_WIDENING, source, family.kind, is_enum, &mut used, out);
        }
        if underlying.is_float() {
            walk_widening(&FLOAT_WIDENING, source, family.kind, is_enum, &mut used, out);
        }
        if underlying == LogicalType::Char {
            walk_widening(&CHAR_WIDENING, source, family.kind, is_enum, &mut used, out);
        }

        for mid in &family.mid {
            self.expand_group(source, mid, out);
        }

        for numeric in NUMERIC_ORDER {
            if !used.contains(&numeric) {
                out.push(family_descriptor(source, numeric, family.kind));
                used.push(numeric);
            }
        }
    }

    /// Chain `source -> via -> target`. The outer leg is resolved against
    /// the catalog and contributes the composite's hints; when no outer leg
    /// exists the composite is silently skipped.
    fn synthesize_composite(
        &self,
        source: LogicalType,
        rule: &CompositeRule,
    ) -> Option<ConverterDescriptor> {
        let via = match rule.via {
            Via::Fixed(ty) => ty,
            Via::SourceUnderlying => source.underlying(),
        };
        let outer = self.resolve(via, Some(rule.target)).into_iter().next()?;
        Some(ConverterDescriptor {
            source,
            target: rule.target,
            kind: ConverterKind::Composite { via },
            hints: outer.hints,
        })
    }
}

impl Default for ConverterSelector {
    fn default() -> Self {
        ConverterSelector::new(ConverterCatalog::shared())
    }
}

/// Emit every chain entry after the source's own position (from the
/// position itself for enumeration sources, whose underlying width is a
/// distinct target). Chains not containing the source are skipped whole.
fn walk_widening(
    chain: &[LogicalType],
    source: LogicalType,
    kind: FamilyKind,
    is_enum: bool,
    used: &mut Vec<LogicalType>,
    out: &mut Vec<ConverterDescriptor>,
) {
    let underlying = source.underlying();
    if let Some(pos) = chain.iter().position(|t| *t == underlying) {
        let start = if is_enum { pos } else { pos + 1 };
        for &target in &chain[start..] {
            if !used.contains(&target) {
                out.push(family_descriptor(source, target, kind));
                used.push(target);
            }
        }
    }
}

fn pair_descriptor(source: LogicalType, rule: &PairRule) -> ConverterDescriptor {
    ConverterDescriptor {
        source,
        target: rule.target,
        kind: rule.kind,
        hints: rule.hints,
    }
}

fn family_descriptor(
    source: LogicalType,
    target: LogicalType,
    kind: FamilyKind,
) -> ConverterDescriptor {
    ConverterDescriptor {
        source,
        target,
        kind: kind.converter_kind(),
        hints: family_hints(source, target),
    }
}

/// Casts between numeric types carry no hints, with one exception: a 64-bit
/// backed enumeration narrowing into the decimal type needs 20 integer
/// digits to round-trip losslessly.
fn family_hints(source: LogicalType, target: LogicalType) -> Option<MappingHints> {
    match (source, target) {
        (LogicalType::Enum(it), LogicalType::Decimal) if it.is_64_bit() => {
            Some(MappingHints::with_precision_scale(20, 0))
        }
        _ => None,
    }
}
