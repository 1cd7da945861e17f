//! Settings-view state and the reducer that applies edit actions to it.
//!
//! [`LayoutReducer::reduce`] never mutates the state it is given: it returns
//! the next snapshot, or the reason the action was rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::list;
use super::path::{deep_set, KeyPath};
use crate::error::LayoutError;
use crate::ir::{Attribute, EditableConfiguration, FieldRef, Layout, Row};
use crate::layout::sizes::{FieldSizes, DEFAULT_FIELD_SIZE};
use crate::layout::types::{ConfigurationDocument, ConfigurationUpdate, UpdateLayouts};
use crate::layout::{get_field_size, pack, set_field_size, unpack};

/// Contents of the field-metadata modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaForm {
    pub metadata: Map<String, Value>,
    pub size: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub attributes: BTreeMap<String, Attribute>,
    /// Last saved snapshot.
    pub initial_data: EditableConfiguration,
    /// Working copy.
    pub modified_data: EditableConfiguration,
    pub meta_to_edit: String,
    pub meta_form: Option<MetaForm>,
    pub component_layouts: BTreeMap<String, EditableConfiguration>,
}

impl LayoutState {
    /// Whether there are unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.initial_data != self.modified_data
    }

    /// Attributes that can still be placed in the edit layout.
    pub fn addable_fields(&self) -> Vec<&str> {
        self.attributes
            .keys()
            .map(String::as_str)
            .filter(|name| !self.modified_data.displays(name))
            .collect()
    }

    pub fn list_fields(&self) -> Vec<list::ListField> {
        list::list_fields(&self.modified_data, &self.attributes)
    }

    /// Body for the configuration update request.
    pub fn update_body(&self) -> ConfigurationUpdate {
        ConfigurationUpdate {
            layouts: UpdateLayouts {
                edit: unpack(&self.modified_data.layouts.edit),
                list: self.modified_data.layouts.list.clone(),
            },
            metadatas: self.modified_data.metadatas.clone(),
            settings: self.modified_data.settings.clone(),
        }
    }

    fn edit_layout_mut(&mut self) -> &mut Layout {
        &mut self.modified_data.layouts.edit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum LayoutAction {
    SetData {
        data: Box<ConfigurationDocument>,
    },
    OnAddField {
        name: String,
    },
    RemoveField {
        row_index: usize,
        field_index: usize,
    },
    ReorderRow {
        drag_row_index: usize,
        drag_index: usize,
        hover_index: usize,
    },
    ReorderDiffRow {
        drag_row_index: usize,
        drag_index: usize,
        hover_row_index: usize,
        hover_index: usize,
    },
    MoveRow {
        from_index: usize,
        to_index: usize,
    },
    SetFieldToEdit {
        name: String,
    },
    UnsetFieldToEdit,
    OnChangeMeta {
        keys: KeyPath,
        value: Value,
    },
    OnChangeSize {
        value: u8,
    },
    SubmitMetaForm,
    OnChange {
        keys: KeyPath,
        value: Value,
    },
    SubmitSucceeded,
    OnReset,
    AddListField {
        name: String,
    },
    RemoveListField {
        index: usize,
    },
    MoveListField {
        from_index: usize,
        to_index: usize,
    },
}

impl LayoutAction {
    pub fn kind(&self) -> &'static str {
        match self {
            LayoutAction::SetData { .. } => "SET_DATA",
            LayoutAction::OnAddField { .. } => "ON_ADD_FIELD",
            LayoutAction::RemoveField { .. } => "REMOVE_FIELD",
            LayoutAction::ReorderRow { .. } => "REORDER_ROW",
            LayoutAction::ReorderDiffRow { .. } => "REORDER_DIFF_ROW",
            LayoutAction::MoveRow { .. } => "MOVE_ROW",
            LayoutAction::SetFieldToEdit { .. } => "SET_FIELD_TO_EDIT",
            LayoutAction::UnsetFieldToEdit => "UNSET_FIELD_TO_EDIT",
            LayoutAction::OnChangeMeta { .. } => "ON_CHANGE_META",
            LayoutAction::OnChangeSize { .. } => "ON_CHANGE_SIZE",
            LayoutAction::SubmitMetaForm => "SUBMIT_META_FORM",
            LayoutAction::OnChange { .. } => "ON_CHANGE",
            LayoutAction::SubmitSucceeded => "SUBMIT_SUCCEEDED",
            LayoutAction::OnReset => "ON_RESET",
            LayoutAction::AddListField { .. } => "ADD_LIST_FIELD",
            LayoutAction::RemoveListField { .. } => "REMOVE_LIST_FIELD",
            LayoutAction::MoveListField { .. } => "MOVE_LIST_FIELD",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutReducer {
    sizes: FieldSizes,
}

impl LayoutReducer {
    pub fn new(sizes: FieldSizes) -> Self {
        Self { sizes }
    }

    pub fn reduce(
        &self,
        state: &LayoutState,
        action: LayoutAction,
    ) -> Result<LayoutState, LayoutError> {
        tracing::debug!(action = action.kind(), "reduce");
        let mut next = state.clone();

        match action {
            LayoutAction::SetData { data } => next = initial_state(&data),
            LayoutAction::OnAddField { name } => self.add_field(&mut next, name)?,
            LayoutAction::RemoveField {
                row_index,
                field_index,
            } => remove_field(next.edit_layout_mut(), row_index, field_index)?,
            LayoutAction::ReorderRow {
                drag_row_index,
                drag_index,
                hover_index,
            } => reorder_row(next.edit_layout_mut(), drag_row_index, drag_index, hover_index)?,
            LayoutAction::ReorderDiffRow {
                drag_row_index,
                drag_index,
                hover_row_index,
                hover_index,
            } => reorder_diff_row(
                next.edit_layout_mut(),
                drag_row_index,
                drag_index,
                hover_row_index,
                hover_index,
            )?,
            LayoutAction::MoveRow {
                from_index,
                to_index,
            } => move_row(next.edit_layout_mut(), from_index, to_index)?,
            LayoutAction::SetFieldToEdit { name } => set_field_to_edit(&mut next, name)?,
            LayoutAction::UnsetFieldToEdit => {
                next.meta_to_edit.clear();
                next.meta_form = None;
            }
            LayoutAction::OnChangeMeta { keys, value } => {
                let form = next.meta_form.as_mut().ok_or(LayoutError::NoFieldBeingEdited)?;
                let mut metadata = Value::Object(std::mem::take(&mut form.metadata));
                deep_set(&mut metadata, &keys, value)?;
                if let Value::Object(map) = metadata {
                    form.metadata = map;
                }
            }
            LayoutAction::OnChangeSize { value } => {
                let form = next.meta_form.as_mut().ok_or(LayoutError::NoFieldBeingEdited)?;
                if !(1..=crate::ir::GRID_WIDTH).contains(&value) {
                    return Err(LayoutError::InvalidSize(value));
                }
                form.size = value;
            }
            LayoutAction::SubmitMetaForm => submit_meta_form(&mut next)?,
            LayoutAction::OnChange { keys, value } => on_change(&mut next, &keys, value)?,
            LayoutAction::SubmitSucceeded => next.initial_data = next.modified_data.clone(),
            LayoutAction::OnReset => {
                next.modified_data = next.initial_data.clone();
                next.meta_to_edit.clear();
                next.meta_form = None;
            }
            LayoutAction::AddListField { name } => {
                list::add_list_field(&mut next.modified_data, &next.attributes, name)?
            }
            LayoutAction::RemoveListField { index } => {
                list::remove_list_field(&mut next.modified_data, index)?
            }
            LayoutAction::MoveListField {
                from_index,
                to_index,
            } => list::move_list_field(&mut next.modified_data, from_index, to_index)?,
        }

        Ok(next)
    }

    fn add_field(&self, state: &mut LayoutState, name: String) -> Result<(), LayoutError> {
        let attribute = state
            .attributes
            .get(&name)
            .ok_or_else(|| LayoutError::UnknownField(name.clone()))?;
        if state.modified_data.displays(&name) {
            return Err(LayoutError::FieldAlreadyDisplayed(name));
        }

        let field = FieldRef::new(name, self.sizes.size_for(attribute));
        let edit = state.edit_layout_mut();
        match edit.last_mut() {
            Some(last) => last.row_content.push(field),
            None => edit.push(Row::new(0, vec![field])),
        }
        *edit = pack(edit);

        Ok(())
    }
}

fn initial_state(document: &ConfigurationDocument) -> LayoutState {
    let editable = document.schema.editable();
    LayoutState {
        attributes: document.schema.attributes.clone(),
        initial_data: editable.clone(),
        modified_data: editable,
        meta_to_edit: String::new(),
        meta_form: None,
        component_layouts: document
            .components
            .iter()
            .map(|(uid, component)| (uid.clone(), component.editable()))
            .collect(),
    }
}

pub(crate) fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

fn row_content_mut(edit: &mut Layout, row_index: usize) -> Result<&mut Vec<FieldRef>, LayoutError> {
    let len = edit.len();
    edit.get_mut(row_index)
        .map(|row| &mut row.row_content)
        .ok_or(LayoutError::row(row_index, len))
}

fn check_field(content: &[FieldRef], row: usize, index: usize) -> Result<(), LayoutError> {
    match content.get(index) {
        None => Err(LayoutError::field(index, content.len())),
        Some(field) if field.is_filler() => Err(LayoutError::FillerTarget { row, index }),
        Some(_) => Ok(()),
    }
}

fn remove_field(edit: &mut Layout, row_index: usize, field_index: usize) -> Result<(), LayoutError> {
    let content = row_content_mut(edit, row_index)?;
    check_field(content, row_index, field_index)?;

    // A row whose last field goes away disappears with it.
    if content.iter().filter(|f| !f.is_filler()).count() <= 1 {
        edit.remove(row_index);
    } else {
        content.remove(field_index);
    }
    *edit = pack(edit);

    Ok(())
}

fn reorder_row(
    edit: &mut Layout,
    row_index: usize,
    drag_index: usize,
    hover_index: usize,
) -> Result<(), LayoutError> {
    let content = row_content_mut(edit, row_index)?;
    check_field(content, row_index, drag_index)?;
    if hover_index >= content.len() {
        return Err(LayoutError::field(hover_index, content.len()));
    }

    move_item(content, drag_index, hover_index);
    *edit = pack(edit);

    Ok(())
}

fn reorder_diff_row(
    edit: &mut Layout,
    drag_row_index: usize,
    drag_index: usize,
    hover_row_index: usize,
    hover_index: usize,
) -> Result<(), LayoutError> {
    if drag_row_index == hover_row_index {
        return reorder_row(edit, drag_row_index, drag_index, hover_index);
    }

    let target_len = row_content_mut(edit, hover_row_index)?.len();
    if hover_index > target_len {
        return Err(LayoutError::field(hover_index, target_len));
    }
    let source = row_content_mut(edit, drag_row_index)?;
    check_field(source, drag_row_index, drag_index)?;

    // The target row may now be wider than the grid; packing moves the
    // overflow into a new row below it.
    let field = source.remove(drag_index);
    row_content_mut(edit, hover_row_index)?.insert(hover_index, field);
    *edit = pack(edit);

    Ok(())
}

fn move_row(edit: &mut Layout, from_index: usize, to_index: usize) -> Result<(), LayoutError> {
    let len = edit.len();
    if from_index >= len {
        return Err(LayoutError::row(from_index, len));
    }
    if to_index >= len {
        return Err(LayoutError::row(to_index, len));
    }

    move_item(edit, from_index, to_index);
    for (row_id, row) in edit.iter_mut().enumerate() {
        row.row_id = row_id;
    }

    Ok(())
}

fn set_field_to_edit(state: &mut LayoutState, name: String) -> Result<(), LayoutError> {
    if !state.attributes.contains_key(&name) {
        return Err(LayoutError::UnknownField(name));
    }

    let metadata = state
        .modified_data
        .metadatas
        .get(&name)
        .map(|meta| meta.edit.clone())
        .unwrap_or_default();
    let size = get_field_size(&name, &state.modified_data.layouts.edit).unwrap_or(DEFAULT_FIELD_SIZE);

    state.meta_to_edit = name;
    state.meta_form = Some(MetaForm { metadata, size });

    Ok(())
}

fn submit_meta_form(state: &mut LayoutState) -> Result<(), LayoutError> {
    let form = match (&state.meta_form, state.meta_to_edit.is_empty()) {
        (Some(form), false) => form.clone(),
        _ => return Err(LayoutError::NoFieldBeingEdited),
    };
    let name = state.meta_to_edit.clone();

    state
        .modified_data
        .metadatas
        .entry(name.clone())
        .or_default()
        .edit = form.metadata;

    let resized = set_field_size(&name, form.size, &state.modified_data.layouts.edit);
    *state.edit_layout_mut() = pack(&resized);

    Ok(())
}

fn on_change(state: &mut LayoutState, keys: &KeyPath, value: Value) -> Result<(), LayoutError> {
    let mut data = serde_json::to_value(&state.modified_data)
        .map_err(|e| LayoutError::Shape(e.to_string()))?;
    deep_set(&mut data, keys, value)?;

    let mut modified: EditableConfiguration =
        serde_json::from_value(data).map_err(|e| LayoutError::Shape(e.to_string()))?;
    modified.layouts.edit = pack(&modified.layouts.edit);
    state.modified_data = modified;

    Ok(())
}
