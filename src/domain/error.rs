use std::io;

use thiserror::Error;

/// Library-wide error type for tunefile operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Case name is invalid.
    #[error("Invalid case name '{0}': must be alphanumeric with hyphens, underscores, or periods")]
    InvalidCaseName(String),

    /// A document failed to load.
    #[error(transparent)]
    Load(#[from] crate::loader::LoadError),

    /// A document read from a file failed to load.
    #[error("Failed to load {file}: {source}")]
    LoadFile {
        file: String,
        source: crate::loader::LoadError,
    },

    /// Loader options are invalid.
    #[error("Invalid loader options: {0}")]
    InvalidOptions(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Builtin case not found in the embedded catalog.
    #[error("Builtin case '{name}' not found. Available: {available}")]
    BuiltinCaseNotFound { name: String, available: String },

    /// Template rendering failed.
    #[error("Failed to render '{what}': {details}")]
    TemplateRender { what: String, details: String },

    /// Export serialization failed.
    #[error("Failed to serialize {what}: {details}")]
    Export { what: String, details: String },
}
