//! Mapping hints attached to converter descriptors
//!
//! A hint record describes the physical storage shape a converted value
//! implies: byte/character size, numeric precision and scale, fixed-length
//! and unicode flags. Hints are immutable value objects; a descriptor either
//! carries a fully formed record or none at all — absent fields stay absent,
//! the physical layer fills in its own defaults.

use serde::{Deserialize, Serialize};

/// Storage shape implied by a converter's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MappingHints {
    pub is_fixed_length: Option<bool>,
    pub is_unicode: Option<bool>,
    pub precision: Option<u8>,
    pub scale: Option<u8>,
    pub size: Option<usize>,
}

impl MappingHints {
    /// Hint carrying only a size (bytes for binary targets, characters for
    /// text targets).
    pub fn with_size(size: usize) -> Self {
        MappingHints {
            size: Some(size),
            ..Default::default()
        }
    }

    /// Hint carrying only a numeric precision and scale.
    pub fn with_precision_scale(precision: u8, scale: u8) -> Self {
        MappingHints {
            precision: Some(precision),
            scale: Some(scale),
            ..Default::default()
        }
    }
}
