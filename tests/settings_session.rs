//! End-to-end: load a configuration file, edit it and save the update body.

use edit_layout::editor::ipc::parse_actions;
use edit_layout::editor::{LayoutReducer, Session};
use edit_layout::ir::FieldRef;
use edit_layout::layout::layout_file::{read_configuration, FileStore};
use edit_layout::layout::types::ConfigurationUpdate;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const DOCUMENT: &str = r#"{
    "uid": "api::article.article",
    "attributes": {
        "title": { "type": "string" },
        "slug": { "type": "uid" },
        "body": { "type": "richtext" },
        "published": { "type": "boolean" }
    },
    "layouts": {
        "edit": [[{ "name": "title", "size": 6 }, { "name": "slug", "size": 6 }], [{ "name": "body", "size": 12 }]],
        "list": ["title"]
    },
    "metadatas": { "title": { "edit": { "label": "Title" }, "list": {} } },
    "settings": { "mainField": "title" }
}"#;

const ACTIONS: &str = r#"
{"type":"ON_ADD_FIELD","name":"published"}
{"type":"MOVE_ROW","fromIndex":2,"toIndex":0}
{"type":"SET_FIELD_TO_EDIT","name":"title"}
{"type":"ON_CHANGE_META","keys":["description"],"value":"Shown in lists"}
{"type":"ON_CHANGE_SIZE","value":8}
{"type":"SUBMIT_META_FORM"}
{"type":"UNSET_FIELD_TO_EDIT"}
{"type":"REMOVE_LIST_FIELD","index":0}
{"type":"ADD_LIST_FIELD","name":"published"}
{"type":"ON_CHANGE","keys":"settings.mainField","value":"slug"}
"#;

fn source() -> NamedTempFile {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), DOCUMENT).unwrap();
    tmp
}

#[test]
fn edits_are_saved_without_filler() {
    let source = source();
    let output = NamedTempFile::new().unwrap();
    let store = FileStore::new(source.path()).with_output(output.path());

    let mut session = Session::open(store, LayoutReducer::default()).unwrap();
    let report = session.apply_all(parse_actions(ACTIONS).unwrap());
    assert_eq!(report.applied, 9);
    assert_eq!(report.rejected.len(), 1);

    session.save().unwrap();
    assert!(!session.state().is_dirty());

    let body: ConfigurationUpdate =
        serde_json::from_str(&std::fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(
        body.layouts.edit,
        vec![
            vec![FieldRef::new("published", 4)],
            vec![FieldRef::new("title", 8)],
            vec![FieldRef::new("slug", 6)],
            vec![FieldRef::new("body", 12)],
        ]
    );
    assert_eq!(body.layouts.list, vec!["title", "published"]);
    assert_eq!(body.metadatas["title"].edit["description"], "Shown in lists");
    assert_eq!(body.settings["mainField"], "slug");
}

#[test]
fn saving_in_place_updates_the_document() {
    let source = source();
    let mut session = Session::open(FileStore::new(source.path()), LayoutReducer::default()).unwrap();
    session
        .apply_all(parse_actions(r#"[{"type":"REMOVE_FIELD","rowIndex":0,"fieldIndex":1}]"#).unwrap());
    session.save().unwrap();

    let saved = read_configuration(source.path()).unwrap();
    assert_eq!(
        saved.schema.layouts.edit,
        vec![vec![FieldRef::new("title", 6)], vec![FieldRef::new("body", 12)]]
    );
    assert_eq!(saved.schema.uid.as_deref(), Some("api::article.article"));
}
