//! Batch loading of tuned-case files with unique-name enforcement.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::{AppError, TunedCase};

use super::diagnostics::Diagnostics;
use super::error::LoadError;
use super::options::LoaderOptions;
use super::{Document, load_document};

/// One loaded case together with where it came from.
///
/// The digest identifies the exact source text so a harness can correlate
/// results to inputs; it never participates in record equality.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub case: TunedCase,
    /// Source file, when the entry came from disk.
    pub source: Option<PathBuf>,
    /// SHA-256 of the source text, lowercase hex.
    pub digest: String,
}

/// Accumulates tuned cases from several documents, then enforces the
/// batch-wide unique-name invariant in a single post-pass.
///
/// Individual loads are pure and independent; only [`CaseBatch::finish`]
/// looks across documents.
#[derive(Debug, Default)]
pub struct CaseBatch {
    entries: Vec<BatchEntry>,
}

impl CaseBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one case document into the batch. A build manifest is a schema
    /// violation here; the duplicate-name check is deferred to `finish`.
    pub fn insert(
        &mut self,
        text: &str,
        source: Option<&Path>,
        options: &LoaderOptions,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), LoadError> {
        let case = match load_document(text, options, diagnostics)? {
            Document::Case(case) => case,
            Document::Manifest(_) => {
                return Err(LoadError::schema(".", "expected a tuned case document"));
            }
        };
        self.entries.push(BatchEntry {
            case,
            source: source.map(Path::to_path_buf),
            digest: source_digest(text),
        });
        Ok(())
    }

    /// Duplicate-name post-pass; on success, yields the entries in load
    /// order.
    pub fn finish(self) -> Result<Vec<BatchEntry>, LoadError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.case.name.clone()) {
                return Err(LoadError::DuplicateDefinition {
                    name: entry.case.name.as_str().to_string(),
                });
            }
        }
        Ok(self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load every case file in one directory level, then run the
    /// duplicate-name post-pass. Files are visited in name order so batches
    /// are deterministic.
    pub fn load_dir(
        dir: &Path,
        options: &LoaderOptions,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<BatchEntry>, AppError> {
        let mut batch = CaseBatch::new();
        for path in case_files_in(dir, options)? {
            let text = fs::read_to_string(&path)?;
            batch.insert(&text, Some(&path), options, diagnostics).map_err(|source| {
                AppError::LoadFile { file: path.display().to_string(), source }
            })?;
        }
        Ok(batch.finish()?)
    }
}

fn case_files_in(dir: &Path, options: &LoaderOptions) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| options.case_file_extensions.iter().any(|e| e == ext));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// SHA-256 of the source text as lowercase hex.
pub fn source_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
