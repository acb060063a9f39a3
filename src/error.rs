use thiserror::Error;

pub type FieldResult<T> = Result<T, FieldError>;

/// Errors surfaced at the host boundary.
///
/// Rendering and configuration resolution never fail: malformed mapping
/// lines, widths, and aspect-ratio strings all degrade to documented
/// defaults. These variants exist for the host-integration edges only
/// (module lookup, preview-tool input).
#[derive(Error, Debug, Clone)]
pub enum FieldError {
    #[error("No module available for inputfield kind '{kind}'")]
    ModuleNotFound { kind: String },

    #[error("Failed to read '{path}': {reason}")]
    FileRead { path: String, reason: String },

    #[error("YAML error: {0}")]
    YamlError(String),

    #[error("Invalid preview document: {0}")]
    InvalidPreview(String),
}

impl From<serde_yaml::Error> for FieldError {
    fn from(err: serde_yaml::Error) -> Self {
        FieldError::YamlError(err.to_string())
    }
}
