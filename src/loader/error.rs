use thiserror::Error;

/// Errors raised while loading tuned-case or build-manifest documents.
///
/// All variants are terminal for the affected document (or batch); nothing
/// is retried and no partial record is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input is not well-formed YAML. The wrapped error carries line and
    /// column where available.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Structurally valid document with a missing or mistyped field.
    /// `path` is the dotted key path of the offending field, e.g.
    /// `stop.time_total_s`.
    #[error("Schema violation at '{path}': {detail}")]
    SchemaViolation { path: String, detail: String },

    /// Two case documents in one batch share a name.
    #[error("Duplicate case definition '{name}'")]
    DuplicateDefinition { name: String },
}

impl LoadError {
    pub(crate) fn schema(path: impl Into<String>, detail: impl Into<String>) -> Self {
        LoadError::SchemaViolation { path: path.into(), detail: detail.into() }
    }
}
