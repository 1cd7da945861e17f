use super::reducer::LayoutAction;
use crate::error::AppError;

pub fn parse_action(body: &str) -> Result<LayoutAction, String> {
    serde_json::from_str(body).map_err(|e| format!("Failed to parse action message: {}", e))
}

/// Parse an action script: either one JSON array of actions, or one action
/// per line. Blank lines are skipped.
pub fn parse_actions(script: &str) -> Result<Vec<LayoutAction>, AppError> {
    if script.trim_start().starts_with('[') {
        return serde_json::from_str(script)
            .map_err(|e| AppError::ActionError(format!("Failed to parse action list: {}", e)));
    }

    script
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            parse_action(line).map_err(|e| AppError::ActionError(format!("line {}: {}", index + 1, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::path::KeyPath;
    use serde_json::json;

    #[test]
    fn test_parse_add_field() {
        let msg = parse_action(r#"{"type":"ON_ADD_FIELD","name":"cover"}"#).unwrap();
        match msg {
            LayoutAction::OnAddField { name } => assert_eq!(name, "cover"),
            _ => panic!("Expected OnAddField"),
        }
    }

    #[test]
    fn test_parse_on_change() {
        let msg =
            parse_action(r#"{"type":"ON_CHANGE","keys":"settings.mainField","value":"slug"}"#).unwrap();
        assert_eq!(
            msg,
            LayoutAction::OnChange {
                keys: KeyPath::new(["settings", "mainField"]),
                value: json!("slug"),
            }
        );
    }

    #[test]
    fn test_parse_invalid_message() {
        assert!(parse_action(r#"{"type":"unknown"}"#).is_err());
        assert!(parse_action(r#"{"type":"REMOVE_FIELD","rowIndex":-1,"fieldIndex":0}"#).is_err());
    }

    #[test]
    fn test_parse_json_lines() {
        let script = r#"
{"type":"ON_ADD_FIELD","name":"cover"}

{"type":"MOVE_ROW","fromIndex":1,"toIndex":0}
"#;
        let actions = parse_actions(script).unwrap();
        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[1], LayoutAction::MoveRow { from_index: 1, to_index: 0 }));
    }

    #[test]
    fn test_parse_json_array() {
        let script = r#"[{"type":"SET_FIELD_TO_EDIT","name":"title"},{"type":"SUBMIT_META_FORM"}]"#;
        let actions = parse_actions(script).unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1], LayoutAction::SubmitMetaForm);
    }

    #[test]
    fn test_parse_reports_bad_line() {
        let script = "{\"type\":\"ON_RESET\"}\n{\"type\":\"NOPE\"}\n";
        match parse_actions(script) {
            Err(AppError::ActionError(msg)) => assert!(msg.starts_with("line 2:")),
            other => panic!("Expected ActionError, got {:?}", other),
        }
    }
}
