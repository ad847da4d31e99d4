//! Builtin tuned-case catalog loaded from embedded assets.
//!
//! The harness ships a stock of known-good tuned cases; they are embedded in
//! the binary and go through the ordinary loader like any on-disk document.

use include_dir::{Dir, File, include_dir};

use crate::domain::{AppError, TunedCase};
use crate::loader::{CaseBatch, Diagnostics, Document, LoadError, LoaderOptions, load_document};

/// Embedded tuned-case directory.
static TUNED_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/tuned");

/// Names of all builtin tuned cases (embedded file stems), sorted.
pub fn builtin_case_names() -> Vec<String> {
    let mut names: Vec<String> = TUNED_DIR
        .files()
        .filter_map(|file| file.path().file_stem().and_then(|stem| stem.to_str()))
        .map(str::to_string)
        .collect();
    names.sort();
    names
}

/// Load one builtin tuned case by name.
pub fn load_builtin_case(name: &str) -> Result<TunedCase, AppError> {
    let file = TUNED_DIR
        .files()
        .find(|file| file.path().file_stem().and_then(|stem| stem.to_str()) == Some(name))
        .ok_or_else(|| AppError::BuiltinCaseNotFound {
            name: name.to_string(),
            available: builtin_case_names().join(", "),
        })?;

    let mut diagnostics = Diagnostics::new();
    match load_document(embedded_text(file)?, &LoaderOptions::default(), &mut diagnostics) {
        Ok(Document::Case(case)) => Ok(case),
        Ok(Document::Manifest(_)) => Err(AppError::LoadFile {
            file: file.path().display().to_string(),
            source: LoadError::schema(".", "expected a tuned case document"),
        }),
        Err(source) => {
            Err(AppError::LoadFile { file: file.path().display().to_string(), source })
        }
    }
}

/// Load every builtin case, enforcing unique names across the set.
pub fn load_builtin_cases() -> Result<Vec<TunedCase>, AppError> {
    let mut files: Vec<&File<'_>> = TUNED_DIR.files().collect();
    files.sort_by(|a, b| a.path().cmp(b.path()));

    let mut batch = CaseBatch::new();
    let mut diagnostics = Diagnostics::new();
    for file in files {
        batch
            .insert(embedded_text(file)?, None, &LoaderOptions::default(), &mut diagnostics)
            .map_err(|source| AppError::LoadFile {
                file: file.path().display().to_string(),
                source,
            })?;
    }
    Ok(batch.finish()?.into_iter().map(|entry| entry.case).collect())
}

fn embedded_text<'a>(file: &'a File<'a>) -> Result<&'a str, AppError> {
    file.contents_utf8().ok_or_else(|| AppError::LoadFile {
        file: file.path().display().to_string(),
        source: LoadError::schema(".", "embedded document is not valid UTF-8"),
    })
}
