//! Loader behavior settings.

use serde::Deserialize;

use crate::domain::AppError;

/// Settings controlling loader behavior, loadable from a `tunefile.toml`
/// next to the harness configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderOptions {
    /// Accept a manifest whose `base_image` is the empty string. Off by
    /// default; builders that inject the image later opt in.
    #[serde(default)]
    pub allow_empty_base_image: bool,
    /// File extensions the directory scan treats as case documents.
    #[serde(default = "default_case_file_extensions")]
    pub case_file_extensions: Vec<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            allow_empty_base_image: false,
            case_file_extensions: default_case_file_extensions(),
        }
    }
}

fn default_case_file_extensions() -> Vec<String> {
    vec!["yml".to_string(), "yaml".to_string()]
}

impl LoaderOptions {
    /// Parse and validate options from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let options: LoaderOptions = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.case_file_extensions.is_empty() {
            return Err(AppError::InvalidOptions(
                "case_file_extensions must not be empty".to_string(),
            ));
        }
        for extension in &self.case_file_extensions {
            if extension.is_empty() || extension.contains('.') {
                return Err(AppError::InvalidOptions(format!(
                    "invalid case file extension '{}'",
                    extension
                )));
            }
        }
        Ok(())
    }
}
