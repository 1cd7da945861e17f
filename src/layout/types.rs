//! Wire types for the configuration endpoints.
//!
//! Example fetched document:
//! ```json
//! {
//!   "uid": "api::article.article",
//!   "attributes": { "title": { "type": "string" }, "body": { "type": "richtext" } },
//!   "layouts": { "edit": [[{ "name": "title", "size": 6 }]], "list": ["id", { "name": "title" }] },
//!   "metadatas": { "title": { "edit": { "label": "Title" }, "list": { "sortable": true } } },
//!   "settings": { "mainField": "title" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::packer::pack_raw;
use crate::ir::{Attribute, EditableConfiguration, FieldMetadatas, Layouts, RawLayout};

/// A list-layout column as stored: a bare name or an object with a `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListEntry {
    Name(String),
    Object {
        name: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl ListEntry {
    pub fn name(&self) -> &str {
        match self {
            ListEntry::Name(name) => name,
            ListEntry::Object { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredLayouts {
    #[serde(default)]
    pub edit: RawLayout,
    #[serde(default)]
    pub list: Vec<ListEntry>,
}

/// Configuration of one content type or component, as fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
    #[serde(default)]
    pub layouts: StoredLayouts,
    #[serde(default)]
    pub metadatas: BTreeMap<String, FieldMetadatas>,
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl SchemaConfiguration {
    /// Editable copy with the edit layout packed for display.
    pub fn editable(&self) -> EditableConfiguration {
        EditableConfiguration {
            layouts: Layouts {
                edit: pack_raw(&self.layouts.edit),
                list: self
                    .layouts
                    .list
                    .iter()
                    .map(|entry| entry.name().to_string())
                    .collect(),
            },
            metadatas: self.metadatas.clone(),
            settings: self.settings.clone(),
            options: self.options.clone(),
        }
    }

    /// Layout entries naming no attribute, in layout order, deduplicated.
    pub fn unknown_references(&self) -> Vec<&str> {
        let edit = self.layouts.edit.iter().flatten().map(|f| f.name.as_str());
        let list = self.layouts.list.iter().map(ListEntry::name);

        let mut unknown: Vec<&str> = Vec::new();
        for name in edit.chain(list) {
            if !self.attributes.contains_key(name) && !unknown.contains(&name) {
                unknown.push(name);
            }
        }
        unknown
    }
}

/// Body of `GET .../configuration`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationDocument {
    #[serde(flatten)]
    pub schema: SchemaConfiguration,
    #[serde(default)]
    pub components: BTreeMap<String, SchemaConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateLayouts {
    pub edit: RawLayout,
    pub list: Vec<String>,
}

/// Body of `PUT .../configuration`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationUpdate {
    pub layouts: UpdateLayouts,
    pub metadatas: BTreeMap<String, FieldMetadatas>,
    pub settings: Map<String, Value>,
}

impl ConfigurationDocument {
    /// Fold a saved update back into the document, as the backend would.
    pub fn apply_update(&mut self, update: &ConfigurationUpdate) {
        self.schema.layouts = StoredLayouts {
            edit: update.layouts.edit.clone(),
            list: update
                .layouts
                .list
                .iter()
                .cloned()
                .map(ListEntry::Name)
                .collect(),
        };
        self.schema.metadatas = update.metadatas.clone();
        self.schema.settings = update.settings.clone();
    }
}
