//! Explicit template resolution for build manifests.
//!
//! The loader passes `{{ ... }}` placeholders through verbatim; this module
//! is the collaborator that actually substitutes them, and only when the
//! builder asks for it.

use std::collections::BTreeMap;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, BuildManifest};

/// Variables exposed to manifest templates as `env`.
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    vars: BTreeMap<String, String>,
}

impl ResolveContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one variable, returning the context for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

/// Render every templated string in `manifest` against `ctx` and return the
/// resolved copy; the input is left untouched.
///
/// Placeholders look variables up through `env`, e.g.
/// `{{ env["RAY_WHEELS"] | default("ray") }}`. A missing variable without a
/// `default` renders as the empty string rather than failing, matching how
/// the external builder treats unset substitutions.
pub fn resolve_manifest(
    manifest: &BuildManifest,
    ctx: &ResolveContext,
) -> Result<BuildManifest, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Chainable);

    let render = |template: &str, what: &str| -> Result<String, AppError> {
        env.render_str(template, context! { env => ctx.vars }).map_err(|e| {
            AppError::TemplateRender { what: what.to_string(), details: e.to_string() }
        })
    };

    let mut resolved = manifest.clone();
    resolved.base_image = render(&manifest.base_image, "base_image")?;
    for (key, value) in &manifest.env_vars {
        resolved.env_vars.insert(key.clone(), render(value, &format!("env_vars.{key}"))?);
    }
    for (idx, package) in manifest.debian_packages.iter().enumerate() {
        resolved.debian_packages[idx] = render(package, &format!("debian_packages[{idx}]"))?;
    }
    for (idx, package) in manifest.python.pip_packages.iter().enumerate() {
        resolved.python.pip_packages[idx] =
            render(package, &format!("python.pip_packages[{idx}]"))?;
    }
    for (idx, package) in manifest.python.conda_packages.iter().enumerate() {
        resolved.python.conda_packages[idx] =
            render(package, &format!("python.conda_packages[{idx}]"))?;
    }
    for (idx, cmd) in manifest.post_build_cmds.iter().enumerate() {
        resolved.post_build_cmds[idx] = render(cmd, &format!("post_build_cmds[{idx}]"))?;
    }
    Ok(resolved)
}
