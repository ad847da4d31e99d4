use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::AppError;

/// A validated tuned-case name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - No path traversal components (/, \, ., ..)
///
/// Names double as registry and file-name keys, so anything that could not
/// serve as a bare file stem is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaseName(String);

impl CaseName {
    /// Validate and create a new case name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid_case_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidCaseName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_case_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name.contains('/') || name.contains('\\') {
        return false;
    }
    if name == "." || name == ".." {
        return false;
    }
    name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}

impl From<CaseName> for String {
    fn from(val: CaseName) -> Self {
        val.0
    }
}

impl std::ops::Deref for CaseName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for CaseName {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::fmt::Display for CaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for CaseName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CaseName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CaseName::new(&s).map_err(serde::de::Error::custom)
    }
}
