//! Build-manifest document validation.

use serde_yaml::Mapping;

use crate::domain::{BuildManifest, PythonPackages};

use super::diagnostics::Diagnostics;
use super::error::LoadError;
use super::options::LoaderOptions;
use super::yaml::{
    key, optional_mapping, optional_string_map, optional_string_sequence, require_string,
};

/// Top-level keys that identify a document as a build manifest.
pub(crate) const MANIFEST_MARKERS: [&str; 3] = ["base_image", "python", "post_build_cmds"];

/// Keys the build-manifest schema models; anything else is preserved in the
/// extension bucket.
const KNOWN_KEYS: [&str; 5] =
    ["base_image", "env_vars", "debian_packages", "python", "post_build_cmds"];

const PYTHON_KEYS: [&str; 2] = ["pip_packages", "conda_packages"];

/// Validate a build-manifest document root.
///
/// Template placeholders inside string values pass through verbatim; no
/// `{{ ... }}` expression is interpreted here.
pub(crate) fn parse_build_manifest(
    root: &Mapping,
    options: &LoaderOptions,
    diagnostics: &mut Diagnostics,
) -> Result<BuildManifest, LoadError> {
    let base_image = require_string(root, "", "base_image")?;
    if base_image.is_empty() && !options.allow_empty_base_image {
        return Err(LoadError::schema("base_image", "must not be empty"));
    }

    let env_vars = optional_string_map(root, "", "env_vars")?;
    let debian_packages = optional_string_sequence(root, "", "debian_packages")?;
    let post_build_cmds = optional_string_sequence(root, "", "post_build_cmds")?;

    let python = match optional_mapping(root, "", "python")? {
        Some(section) => {
            for (entry_key, _) in section {
                let known = entry_key.as_str().is_some_and(|k| PYTHON_KEYS.contains(&k));
                if !known {
                    let label = entry_key.as_str().unwrap_or("<non-string key>");
                    diagnostics
                        .push_warning("build manifest", format!("unknown key 'python.{label}'"));
                }
            }
            PythonPackages {
                pip_packages: optional_string_sequence(section, "python", "pip_packages")?,
                conda_packages: optional_string_sequence(section, "python", "conda_packages")?,
            }
        }
        None => PythonPackages::default(),
    };

    let mut extensions = Mapping::new();
    for (entry_key, entry_value) in root {
        let known = entry_key.as_str().is_some_and(|k| KNOWN_KEYS.contains(&k));
        if !known {
            let label = entry_key.as_str().unwrap_or("<non-string key>");
            diagnostics
                .push_warning("build manifest", format!("unknown key '{}' preserved", label));
            extensions.insert(entry_key.clone(), entry_value.clone());
        }
    }

    Ok(BuildManifest { base_image, env_vars, debian_packages, python, post_build_cmds, extensions })
}

/// Whether a document root carries any manifest marker key.
pub(crate) fn looks_like_manifest(root: &Mapping) -> bool {
    MANIFEST_MARKERS.iter().any(|name| root.get(key(name)).is_some())
}
