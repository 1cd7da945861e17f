use std::io::Write;
use std::path::{Path, PathBuf};

use super::types::{ConfigurationDocument, ConfigurationUpdate};
use crate::error::AppError;

pub fn read_configuration(path: &Path) -> Result<ConfigurationDocument, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::ConfigurationError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let data: ConfigurationDocument = serde_json::from_str(&content).map_err(|e| {
        AppError::ConfigurationError(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    Ok(data)
}

pub fn write_configuration(path: &Path, data: &ConfigurationDocument) -> Result<(), AppError> {
    write_json(path, data)
}

pub fn write_update(path: &Path, update: &ConfigurationUpdate) -> Result<(), AppError> {
    write_json(path, update)
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(data).map_err(|e| {
        AppError::ConfigurationError(format!("Failed to serialize configuration: {}", e))
    })
}

fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), AppError> {
    let content = to_json(data)?;
    std::fs::write(path, content).map_err(|e| {
        AppError::ConfigurationError(format!("Failed to write {}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Backend holding the configuration of one content type.
pub trait ConfigurationStore {
    fn fetch(&mut self) -> Result<ConfigurationDocument, AppError>;

    /// Persist `update` and return the document as stored afterwards.
    fn update(&mut self, update: &ConfigurationUpdate) -> Result<ConfigurationDocument, AppError>;
}

/// Where a [`FileStore`] sends saved updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateSink {
    /// Fold the update into the source document.
    Source,
    /// Write the update body to a file.
    File(PathBuf),
    /// Print the update body.
    Stdout,
}

/// Store backed by a configuration document on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    source: PathBuf,
    sink: UpdateSink,
}

impl FileStore {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            sink: UpdateSink::Source,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.sink = UpdateSink::File(output.into());
        self
    }

    pub fn with_stdout(mut self) -> Self {
        self.sink = UpdateSink::Stdout;
        self
    }
}

impl ConfigurationStore for FileStore {
    fn fetch(&mut self) -> Result<ConfigurationDocument, AppError> {
        read_configuration(&self.source)
    }

    fn update(&mut self, update: &ConfigurationUpdate) -> Result<ConfigurationDocument, AppError> {
        let mut document = read_configuration(&self.source)?;
        document.apply_update(update);

        match &self.sink {
            UpdateSink::Source => write_configuration(&self.source, &document)?,
            UpdateSink::File(output) => write_update(output, update)?,
            UpdateSink::Stdout => {
                let content = to_json(update)?;
                writeln!(std::io::stdout(), "{}", content)?;
            }
        }

        Ok(document)
    }
}
