//! Value objects shared across the engine: logical types, mapping hints,
//! converter descriptors, and the runtime value representation.

pub mod descriptor;
pub mod hints;
pub mod logical_type;
pub mod value;

pub use descriptor::{ConverterDescriptor, ConverterKind};
pub use hints::MappingHints;
pub use logical_type::{IntType, LogicalType, TypeClass};
pub use value::{DecimalValue, EnumValue, Value};
