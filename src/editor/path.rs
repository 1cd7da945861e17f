//! Deep assignment into JSON values by key path.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LayoutError;

/// Path of keys into a JSON value. Accepts `"settings.mainField"` or
/// `["settings", "mainField"]`; numeric segments index arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawKeyPath", into = "Vec<String>")]
pub struct KeyPath(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKeyPath {
    Dotted(String),
    Keys(Vec<String>),
}

impl From<RawKeyPath> for KeyPath {
    fn from(raw: RawKeyPath) -> Self {
        match raw {
            RawKeyPath::Dotted(path) => KeyPath::parse(&path),
            RawKeyPath::Keys(keys) => KeyPath(keys),
        }
    }
}

impl From<KeyPath> for Vec<String> {
    fn from(path: KeyPath) -> Self {
        path.0
    }
}

impl KeyPath {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeyPath(keys.into_iter().map(Into::into).collect())
    }

    pub fn parse(dotted: &str) -> Self {
        KeyPath(
            dotted
                .split('.')
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Set `value` at `path` inside `target`, creating missing objects on the way.
pub fn deep_set(target: &mut Value, path: &KeyPath, value: Value) -> Result<(), LayoutError> {
    let invalid = || LayoutError::InvalidPath(path.to_string());
    let (last, parents) = path.keys().split_last().ok_or_else(invalid)?;

    let mut node = target;
    for key in parents {
        node = child_mut(node, key).ok_or_else(invalid)?;
    }

    match node {
        Value::Object(map) => {
            map.insert(last.clone(), value);
            Ok(())
        }
        Value::Array(items) => {
            let index: usize = last.parse().map_err(|_| invalid())?;
            if index < items.len() {
                items[index] = value;
            } else if index == items.len() {
                items.push(value);
            } else {
                return Err(invalid());
            }
            Ok(())
        }
        _ => Err(invalid()),
    }
}

fn child_mut<'a>(node: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => {
            let child = map
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if child.is_null() {
                *child = Value::Object(Map::new());
            }
            Some(child)
        }
        Value::Array(items) => {
            let index: usize = key.parse().ok()?;
            items.get_mut(index)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_creates_missing_objects() {
        let mut value = json!({ "settings": {} });
        deep_set(&mut value, &KeyPath::parse("settings.defaultSort.field"), json!("title")).unwrap();
        assert_eq!(value, json!({ "settings": { "defaultSort": { "field": "title" } } }));
    }

    #[test]
    fn test_set_indexes_arrays() {
        let mut value = json!({ "list": ["a", "b"] });
        deep_set(&mut value, &KeyPath::new(["list", "1"]), json!("c")).unwrap();
        deep_set(&mut value, &KeyPath::new(["list", "2"]), json!("d")).unwrap();
        assert_eq!(value, json!({ "list": ["a", "c", "d"] }));
    }

    #[test]
    fn test_set_rejects_bad_paths() {
        let mut value = json!({ "list": ["a"], "name": "x" });
        assert!(deep_set(&mut value, &KeyPath::new(["list", "5"]), json!(1)).is_err());
        assert!(deep_set(&mut value, &KeyPath::new(["list", "a"]), json!(1)).is_err());
        assert!(deep_set(&mut value, &KeyPath::new(["name", "inner"]), json!(1)).is_err());
        assert!(deep_set(&mut value, &KeyPath::new(Vec::<String>::new()), json!(1)).is_err());
    }

    #[test]
    fn test_key_path_deserializes_both_forms() {
        let dotted: KeyPath = serde_json::from_str(r#""settings.mainField""#).unwrap();
        let keys: KeyPath = serde_json::from_str(r#"["settings","mainField"]"#).unwrap();
        assert_eq!(dotted, keys);
        assert_eq!(dotted.to_string(), "settings.mainField");
    }
}
