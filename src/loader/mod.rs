//! Parse and validate tuned-case and build-manifest documents.
//!
//! Loading is one-shot, synchronous, and pure: one YAML document in, one
//! fully validated record (or one error) out. Document kind is decided by
//! top-level shape, never by file name.

pub mod batch;
pub mod diagnostics;
pub mod options;

mod case;
mod error;
mod manifest;
mod yaml;

use serde_yaml::{Mapping, Value};

use crate::domain::{BuildManifest, CaseName, TunedCase};

pub use batch::{BatchEntry, CaseBatch, source_digest};
pub use diagnostics::{Diagnostics, Warning};
pub use error::LoadError;
pub use options::LoaderOptions;

use case::{looks_like_case_body, parse_tuned_case};
use manifest::{looks_like_manifest, parse_build_manifest};

/// A successfully loaded document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Case(TunedCase),
    Manifest(BuildManifest),
}

impl Document {
    pub fn as_case(&self) -> Option<&TunedCase> {
        match self {
            Document::Case(case) => Some(case),
            _ => None,
        }
    }

    pub fn as_manifest(&self) -> Option<&BuildManifest> {
        match self {
            Document::Manifest(manifest) => Some(manifest),
            _ => None,
        }
    }
}

/// Load one document from YAML text.
///
/// A mapping with a single top-level key whose value carries `env`/`run`/
/// `stop` fields is a tuned case (the key is the case name); a mapping with
/// `base_image`, `python`, or `post_build_cmds` at the top level is a build
/// manifest. Anything else is rejected.
pub fn load_document(
    text: &str,
    options: &LoaderOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Document, LoadError> {
    let root = parse_root_mapping(text)?;

    if looks_like_manifest(&root) {
        let manifest = parse_build_manifest(&root, options, diagnostics)?;
        return Ok(Document::Manifest(manifest));
    }

    if root.len() == 1
        && let Some((name_value, body)) = root.iter().next()
    {
        let Value::String(name) = name_value else {
            return Err(LoadError::schema(".", "case name must be a string"));
        };
        let Value::Mapping(body) = body else {
            return Err(LoadError::schema(name.as_str(), "case body must be a mapping"));
        };
        if looks_like_case_body(body) {
            let name =
                CaseName::new(name).map_err(|err| LoadError::schema(".", err.to_string()))?;
            let case = parse_tuned_case(name, body, diagnostics)?;
            return Ok(Document::Case(case));
        }
    }

    Err(LoadError::schema(
        ".",
        "unrecognized document shape: expected a single named tuned case or a build manifest",
    ))
}

fn parse_root_mapping(text: &str) -> Result<Mapping, LoadError> {
    match serde_yaml::from_str::<Value>(text)? {
        Value::Mapping(map) => Ok(map),
        _ => Err(LoadError::schema(".", "document root must be a mapping")),
    }
}
