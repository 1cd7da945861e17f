//! List-view (table column) layout.

use std::collections::BTreeMap;

use serde::Serialize;

use super::reducer::move_item;
use crate::error::LayoutError;
use crate::ir::{Attribute, EditableConfiguration};

// Types a table cannot be sorted by
const UNSORTABLE_TYPES: &[&str] = &[
    "blocks",
    "component",
    "dynamiczone",
    "json",
    "media",
    "password",
    "relation",
    "richtext",
];

/// A displayed table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListField {
    pub name: String,
    pub label: String,
    pub sortable: bool,
}

pub fn add_list_field(
    config: &mut EditableConfiguration,
    attributes: &BTreeMap<String, Attribute>,
    name: String,
) -> Result<(), LayoutError> {
    if !attributes.contains_key(&name) {
        return Err(LayoutError::UnknownField(name));
    }
    if config.layouts.list.contains(&name) {
        return Err(LayoutError::FieldAlreadyDisplayed(name));
    }

    config.layouts.list.push(name);
    Ok(())
}

/// Remove a column; the last remaining column cannot be removed.
pub fn remove_list_field(config: &mut EditableConfiguration, index: usize) -> Result<(), LayoutError> {
    let list = &mut config.layouts.list;
    if index >= list.len() {
        return Err(LayoutError::IndexOutOfRange {
            target: "list field",
            index,
            len: list.len(),
        });
    }
    if list.len() == 1 {
        return Err(LayoutError::MinimumDisplayedFields);
    }

    list.remove(index);
    Ok(())
}

pub fn move_list_field(
    config: &mut EditableConfiguration,
    from_index: usize,
    to_index: usize,
) -> Result<(), LayoutError> {
    let list = &mut config.layouts.list;
    let len = list.len();
    for index in [from_index, to_index] {
        if index >= len {
            return Err(LayoutError::IndexOutOfRange {
                target: "list field",
                index,
                len,
            });
        }
    }

    move_item(list, from_index, to_index);
    Ok(())
}

pub fn list_fields(
    config: &EditableConfiguration,
    attributes: &BTreeMap<String, Attribute>,
) -> Vec<ListField> {
    config
        .layouts
        .list
        .iter()
        .map(|name| {
            let meta = config.metadatas.get(name).map(|m| &m.list);
            let label = meta
                .and_then(|m| m.get("label"))
                .and_then(|v| v.as_str())
                .unwrap_or(name)
                .to_string();
            let sortable = meta
                .and_then(|m| m.get("sortable"))
                .and_then(|v| v.as_bool())
                .unwrap_or_else(|| {
                    attributes
                        .get(name)
                        .map(|attr| !UNSORTABLE_TYPES.contains(&attr.kind.as_str()))
                        .unwrap_or(true)
                });

            ListField {
                name: name.clone(),
                label,
                sortable,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::FieldMetadatas;
    use serde_json::json;

    fn attributes() -> BTreeMap<String, Attribute> {
        [
            ("title", "string"),
            ("body", "richtext"),
            ("author", "relation"),
            ("views", "integer"),
        ]
        .into_iter()
        .map(|(name, kind)| (name.to_string(), Attribute::new(kind)))
        .collect()
    }

    fn config(list: &[&str]) -> EditableConfiguration {
        let mut config = EditableConfiguration::default();
        config.layouts.list = list.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn test_add_list_field() {
        let mut config = config(&["title"]);
        add_list_field(&mut config, &attributes(), "views".into()).unwrap();
        assert_eq!(config.layouts.list, vec!["title", "views"]);

        assert_eq!(
            add_list_field(&mut config, &attributes(), "views".into()),
            Err(LayoutError::FieldAlreadyDisplayed("views".into()))
        );
        assert_eq!(
            add_list_field(&mut config, &attributes(), "ghost".into()),
            Err(LayoutError::UnknownField("ghost".into()))
        );
    }

    #[test]
    fn test_last_list_field_cannot_be_removed() {
        let mut config = config(&["title", "views"]);
        remove_list_field(&mut config, 0).unwrap();
        assert_eq!(config.layouts.list, vec!["views"]);

        assert_eq!(
            remove_list_field(&mut config, 0),
            Err(LayoutError::MinimumDisplayedFields)
        );
        assert_eq!(config.layouts.list, vec!["views"]);
        assert!(remove_list_field(&mut config, 3).is_err());
    }

    #[test]
    fn test_move_list_field() {
        let mut config = config(&["title", "views", "author"]);
        move_list_field(&mut config, 2, 0).unwrap();
        assert_eq!(config.layouts.list, vec!["author", "title", "views"]);
        assert!(move_list_field(&mut config, 0, 3).is_err());
    }

    #[test]
    fn test_list_fields_labels_and_sortability() {
        let mut config = config(&["title", "author", "body", "id"]);
        config.metadatas.insert(
            "title".into(),
            FieldMetadatas {
                list: json!({ "label": "Headline" }).as_object().unwrap().clone(),
                ..Default::default()
            },
        );
        config.metadatas.insert(
            "body".into(),
            FieldMetadatas {
                list: json!({ "sortable": true }).as_object().unwrap().clone(),
                ..Default::default()
            },
        );

        let fields = list_fields(&config, &attributes());
        assert_eq!(fields[0].label, "Headline");
        assert!(fields[0].sortable);
        assert!(!fields[1].sortable);
        // explicit metadata wins over the type
        assert!(fields[2].sortable);
        // not an attribute, e.g. the id column
        assert_eq!(fields[3].label, "id");
        assert!(fields[3].sortable);
    }
}
