//! tunefile: Load and validate tuned training-run cases and image build manifests.
//!
//! Two YAML document families feed the training harness: tuned test cases
//! (one named environment/algorithm pairing with pass/stop metric
//! thresholds) and image build manifests (base image, package groups,
//! post-build commands). This crate parses both into validated, immutable
//! records and rejects anything malformed with the offending key path.
//! Training itself, environment simulation, and image building stay with
//! external collaborators.

pub mod domain;
pub mod loader;
pub mod services;

use std::fs;
use std::path::Path;

pub use domain::{AppError, BuildManifest, CaseName, ParamValue, PythonPackages, TunedCase};
pub use loader::{
    BatchEntry, CaseBatch, Diagnostics, Document, LoadError, LoaderOptions, load_document,
    source_digest,
};
pub use services::catalog::{builtin_case_names, load_builtin_case, load_builtin_cases};
pub use services::export::{ExportFormat, export_case, export_manifest};
pub use services::template::{ResolveContext, resolve_manifest};

/// Load a single tuned case from a file, with default options.
pub fn load_case_file(path: &Path) -> Result<TunedCase, AppError> {
    let text = fs::read_to_string(path)?;
    let mut diagnostics = Diagnostics::new();
    match load_document(&text, &LoaderOptions::default(), &mut diagnostics) {
        Ok(Document::Case(case)) => Ok(case),
        Ok(Document::Manifest(_)) => Err(load_file_error(path, "expected a tuned case document")),
        Err(source) => Err(AppError::LoadFile { file: path.display().to_string(), source }),
    }
}

/// Load a build manifest from a file, with default options.
pub fn load_manifest_file(path: &Path) -> Result<BuildManifest, AppError> {
    let text = fs::read_to_string(path)?;
    let mut diagnostics = Diagnostics::new();
    match load_document(&text, &LoaderOptions::default(), &mut diagnostics) {
        Ok(Document::Manifest(manifest)) => Ok(manifest),
        Ok(Document::Case(_)) => Err(load_file_error(path, "expected a build manifest document")),
        Err(source) => Err(AppError::LoadFile { file: path.display().to_string(), source }),
    }
}

/// Load every tuned case in a directory, enforcing unique names across the
/// batch. Warnings are discarded; use [`CaseBatch::load_dir`] to collect
/// them.
pub fn load_cases_dir(dir: &Path) -> Result<Vec<BatchEntry>, AppError> {
    let mut diagnostics = Diagnostics::new();
    CaseBatch::load_dir(dir, &LoaderOptions::default(), &mut diagnostics)
}

fn load_file_error(path: &Path, detail: &str) -> AppError {
    AppError::LoadFile {
        file: path.display().to_string(),
        source: LoadError::SchemaViolation { path: ".".to_string(), detail: detail.to_string() },
    }
}
