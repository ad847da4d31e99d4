//! Image build-manifest record.

use std::collections::BTreeMap;

use serde_yaml::Mapping;

/// Configuration for one container image build: a base image, package
/// groups, and post-build shell commands executed by an external builder.
///
/// Strings may embed `{{ ... }}` template placeholders; they are opaque at
/// this layer and pass through verbatim until
/// [`resolve_manifest`](crate::services::template::resolve_manifest) is
/// explicitly invoked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildManifest {
    /// Base container image reference.
    pub base_image: String,
    /// Environment variables baked into the image.
    pub env_vars: BTreeMap<String, String>,
    /// System-level packages, in install order.
    pub debian_packages: Vec<String>,
    /// Language- and environment-manager-level package groups.
    pub python: PythonPackages,
    /// Shell commands run after the image is assembled, in listed order.
    pub post_build_cmds: Vec<String>,
    /// Unrecognized top-level keys, preserved verbatim and in source order.
    pub extensions: Mapping,
}

/// Python package groups; order within each group is install order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PythonPackages {
    pub pip_packages: Vec<String>,
    pub conda_packages: Vec<String>,
}

impl BuildManifest {
    /// Whether any modeled string still carries an unresolved `{{ ... }}`
    /// placeholder.
    pub fn contains_placeholders(&self) -> bool {
        std::iter::once(&self.base_image)
            .chain(self.env_vars.values())
            .chain(&self.debian_packages)
            .chain(&self.python.pip_packages)
            .chain(&self.python.conda_packages)
            .chain(&self.post_build_cmds)
            .any(|s| s.contains("{{"))
    }
}
