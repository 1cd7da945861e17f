use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the placeholder entry used to pad a row to the full grid width.
pub const FILLER_NAME: &str = "_TEMP_";

/// Number of columns in one edit-layout row.
pub const GRID_WIDTH: u8 = 12;

/// A displayed attribute and its column width within a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    pub name: String,
    pub size: u8,
}

impl FieldRef {
    pub fn new(name: impl Into<String>, size: u8) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn filler(size: u8) -> Self {
        Self::new(FILLER_NAME, size)
    }

    pub fn is_filler(&self) -> bool {
        self.name == FILLER_NAME
    }
}

impl std::fmt::Display for FieldRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.size)
    }
}

/// One packed row. `row_id` is positional and reassigned on every pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub row_id: usize,
    pub row_content: Vec<FieldRef>,
}

impl Row {
    pub fn new(row_id: usize, row_content: Vec<FieldRef>) -> Self {
        Self {
            row_id,
            row_content,
        }
    }

    /// Fields of this row that are not filler.
    pub fn fields(&self) -> impl Iterator<Item = &FieldRef> {
        self.row_content.iter().filter(|f| !f.is_filler())
    }
}

/// Edit layout as displayed: padded rows.
pub type Layout = Vec<Row>;

/// Edit layout as persisted: rows of fields, no ids, no filler.
pub type RawLayout = Vec<Vec<FieldRef>>;

/// Type descriptor of one schema attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Attribute {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            custom_field: None,
            extra: Map::new(),
        }
    }
}

/// Per-field display metadata for the edit and list views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadatas {
    #[serde(default)]
    pub edit: Map<String, Value>,
    #[serde(default)]
    pub list: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layouts {
    #[serde(default)]
    pub edit: Layout,
    #[serde(default)]
    pub list: Vec<String>,
}

/// The part of a configuration the settings view edits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditableConfiguration {
    pub layouts: Layouts,
    #[serde(default)]
    pub metadatas: BTreeMap<String, FieldMetadatas>,
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl EditableConfiguration {
    /// Whether `name` is placed anywhere in the edit layout.
    pub fn displays(&self, name: &str) -> bool {
        self.layouts
            .edit
            .iter()
            .any(|row| row.fields().any(|f| f.name == name))
    }
}
