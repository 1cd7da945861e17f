//! Tool settings loaded from TOML.
//!
//! Example settings.toml:
//! ```toml
//! default_size = 6
//!
//! [sizes]
//! string = 6
//! richtext = 12
//!
//! [custom_fields]
//! "plugin::color-picker.color" = 4
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::layout::sizes::{FieldSizes, DEFAULT_FIELD_SIZE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_size: u8,
    pub sizes: BTreeMap<String, u8>,
    pub custom_fields: BTreeMap<String, u8>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_FIELD_SIZE,
            sizes: BTreeMap::new(),
            custom_fields: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Layer the overrides over the built-in size table.
    pub fn field_sizes(&self) -> FieldSizes {
        let mut sizes = FieldSizes::default().with_fallback(self.default_size);
        for (kind, size) in &self.sizes {
            sizes = sizes.with_type(kind, *size);
        }
        for (uid, size) in &self.custom_fields {
            sizes = sizes.with_custom_field(uid, *size);
        }
        sizes
    }
}

pub fn read_settings(path: &Path) -> Result<Settings, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::SettingsError(format!("Failed to read {}: {}", path.display(), e)))?;
    let settings: Settings = toml::from_str(&content)
        .map_err(|e| AppError::SettingsError(format!("Failed to parse {}: {}", path.display(), e)))?;

    Ok(settings)
}

/// Settings from `path` when given, built-in defaults otherwise.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, AppError> {
    match path {
        Some(path) => read_settings(path),
        None => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Attribute;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_settings_layers_overrides() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            r#"
default_size = 5

[sizes]
string = 8

[custom_fields]
"plugin::color.color" = 3
"#
        )
        .unwrap();

        let settings = read_settings(tmp.path()).unwrap();
        let sizes = settings.field_sizes();
        assert_eq!(sizes.fallback(), 5);
        assert_eq!(sizes.size_for(&Attribute::new("string")), 8);
        assert_eq!(sizes.size_for(&Attribute::new("boolean")), 4);
        assert_eq!(sizes.size_for(&Attribute::new("geo")), 5);

        let mut color = Attribute::new("string");
        color.custom_field = Some("plugin::color.color".into());
        assert_eq!(sizes.size_for(&color), 3);
    }

    #[test]
    fn test_empty_settings_file_uses_defaults() {
        let tmp = NamedTempFile::new().unwrap();
        assert_eq!(read_settings(tmp.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_settings_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "default_size = \"wide\"").unwrap();
        assert!(matches!(
            read_settings(tmp.path()),
            Err(AppError::SettingsError(_))
        ));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(load_settings(None).unwrap(), Settings::default());
    }
}
