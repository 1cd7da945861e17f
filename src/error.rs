use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file error: {0}")]
    ConfigurationError(String),

    #[error("Settings file error: {0}")]
    SettingsError(String),

    #[error("Action error: {0}")]
    ActionError(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Reasons an action is rejected by the reducer. The previous state stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("{target} index {index} out of range (len {len})")]
    IndexOutOfRange {
        target: &'static str,
        index: usize,
        len: usize,
    },

    #[error("slot {index} of row {row} is a placeholder, not a field")]
    FillerTarget { row: usize, index: usize },

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{0}` is already displayed")]
    FieldAlreadyDisplayed(String),

    #[error("no field is being edited")]
    NoFieldBeingEdited,

    #[error("invalid field size {0}, expected 1..=12")]
    InvalidSize(u8),

    #[error("invalid path `{0}`")]
    InvalidPath(String),

    #[error("edit would break the configuration shape: {0}")]
    Shape(String),

    #[error("at least one field must stay displayed")]
    MinimumDisplayedFields,
}

impl LayoutError {
    pub(crate) fn row(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            target: "row",
            index,
            len,
        }
    }

    pub(crate) fn field(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            target: "field",
            index,
            len,
        }
    }

    /// Rejections that are expected user feedback rather than malformed input.
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::MinimumDisplayedFields)
    }
}
