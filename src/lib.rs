//! # mapcast
//!
//! Type conversion selection engine for storage mapping layers.
//!
//! Given a value's logical type (and optionally the storage type the host
//! wants to map it to), the engine returns an ordered list of converter
//! descriptors, most natural conversion first. Each descriptor carries
//! mapping hints describing the physical shape its output implies and a
//! `create()` factory producing the actual converter.
//!
//! Selection is pure and read-only: the converter catalog is built once and
//! shared immutably, `resolve` allocates only its own result, and identical
//! queries always yield identical sequences. "No converter exists" is an
//! empty result, never an error.
//!
//! ## Example
//!
//! ```rust
//! use mapcast::{ConverterSelector, LogicalType, Value};
//!
//! let selector = ConverterSelector::default();
//!
//! // every conversion reachable from a 32-bit integer
//! let all = selector.resolve(LogicalType::Int32, None);
//! assert_eq!(all.len(), 12);
//!
//! // narrowed to one requested storage type
//! let to_text = selector.resolve(LogicalType::Int32, Some(LogicalType::Utf8));
//! assert_eq!(to_text.len(), 1);
//! assert_eq!(to_text[0].hints.unwrap().size, Some(64));
//!
//! let converted = to_text[0].create().apply(&Value::Int32(42)).unwrap();
//! assert_eq!(converted, Value::Utf8("42".to_string()));
//! ```

pub mod catalog;
pub mod conversions;
pub mod errors;
pub mod models;
pub mod selector;

// Re-export commonly used types at crate root
pub use catalog::{
    CompositeRule, ConverterCatalog, FamilyKind, FamilyRule, PairRule, RuleGroup, Via,
};
pub use conversions::Converter;
pub use errors::ConversionError;
pub use models::{
    ConverterDescriptor, ConverterKind, DecimalValue, EnumValue, IntType, LogicalType,
    MappingHints, TypeClass, Value,
};
pub use selector::ConverterSelector;
