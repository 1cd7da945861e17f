//! Default column widths for newly placed fields.

use std::collections::BTreeMap;

use crate::ir::{Attribute, GRID_WIDTH};

/// Width used when neither the custom field nor the base type is known.
pub const DEFAULT_FIELD_SIZE: u8 = 6;

// Built-in widths per attribute type
const BUILTIN_SIZES: &[(&str, u8)] = &[
    ("biginteger", 4),
    ("blocks", 12),
    ("boolean", 4),
    ("component", 12),
    ("date", 4),
    ("datetime", 6),
    ("decimal", 4),
    ("dynamiczone", 12),
    ("email", 6),
    ("enumeration", 6),
    ("float", 4),
    ("integer", 4),
    ("json", 12),
    ("media", 6),
    ("password", 6),
    ("relation", 6),
    ("richtext", 12),
    ("string", 6),
    ("text", 6),
    ("time", 4),
    ("timestamp", 4),
    ("uid", 6),
];

/// Size table: custom field uid first, then base type, then the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSizes {
    types: BTreeMap<String, u8>,
    custom_fields: BTreeMap<String, u8>,
    fallback: u8,
}

impl Default for FieldSizes {
    fn default() -> Self {
        Self {
            types: BUILTIN_SIZES
                .iter()
                .map(|(kind, size)| (kind.to_string(), *size))
                .collect(),
            custom_fields: BTreeMap::new(),
            fallback: DEFAULT_FIELD_SIZE,
        }
    }
}

impl FieldSizes {
    pub fn with_type(mut self, kind: impl Into<String>, size: u8) -> Self {
        self.types.insert(kind.into(), clamp(size));
        self
    }

    pub fn with_custom_field(mut self, uid: impl Into<String>, size: u8) -> Self {
        self.custom_fields.insert(uid.into(), clamp(size));
        self
    }

    pub fn with_fallback(mut self, size: u8) -> Self {
        self.fallback = clamp(size);
        self
    }

    pub fn fallback(&self) -> u8 {
        self.fallback
    }

    pub fn size_for(&self, attribute: &Attribute) -> u8 {
        attribute
            .custom_field
            .as_ref()
            .and_then(|uid| self.custom_fields.get(uid))
            .or_else(|| self.types.get(&attribute.kind))
            .copied()
            .unwrap_or(self.fallback)
    }
}

fn clamp(size: u8) -> u8 {
    size.clamp(1, GRID_WIDTH)
}
