//! Re-serialization of loaded records back to their on-disk shape.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::domain::{AppError, BuildManifest, TunedCase};

/// Output encodings for loaded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Yaml,
    Json,
}

/// Serialize a tuned case back to a single-key document. Extension keys
/// follow the modeled fields in their original order, so a load/export/load
/// cycle yields an equal record.
pub fn export_case(case: &TunedCase, format: ExportFormat) -> Result<String, AppError> {
    let value = case_to_value(case)?;
    serialize(&value, format, "tuned case")
}

/// Serialize a build manifest back to document form.
pub fn export_manifest(manifest: &BuildManifest, format: ExportFormat) -> Result<String, AppError> {
    let value = manifest_to_value(manifest);
    serialize(&value, format, "build manifest")
}

fn serialize(value: &Value, format: ExportFormat, what: &str) -> Result<String, AppError> {
    match format {
        ExportFormat::Yaml => serde_yaml::to_string(value)
            .map_err(|e| AppError::Export { what: what.to_string(), details: e.to_string() }),
        ExportFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| AppError::Export { what: what.to_string(), details: e.to_string() }),
    }
}

fn case_to_value(case: &TunedCase) -> Result<Value, AppError> {
    let mut body = Mapping::new();
    body.insert("env".into(), Value::String(case.env.clone()));
    body.insert("run".into(), Value::String(case.run.clone()));
    if !case.pass_criteria.is_empty() {
        body.insert("pass_criteria".into(), criteria_to_value(&case.pass_criteria));
    }
    body.insert("stop".into(), criteria_to_value(&case.stop));
    if !case.frameworks.is_empty() {
        body.insert("frameworks".into(), string_sequence(&case.frameworks));
    }
    if !case.config.is_empty() {
        let config = serde_yaml::to_value(&case.config).map_err(|e| AppError::Export {
            what: "tuned case config".to_string(),
            details: e.to_string(),
        })?;
        body.insert("config".into(), config);
    }
    for (entry_key, entry_value) in &case.extensions {
        body.insert(entry_key.clone(), entry_value.clone());
    }

    let mut root = Mapping::new();
    root.insert(Value::String(case.name.as_str().to_string()), Value::Mapping(body));
    Ok(Value::Mapping(root))
}

fn manifest_to_value(manifest: &BuildManifest) -> Value {
    let mut root = Mapping::new();
    root.insert("base_image".into(), Value::String(manifest.base_image.clone()));
    if !manifest.env_vars.is_empty() {
        let mut vars = Mapping::new();
        for (key, value) in &manifest.env_vars {
            vars.insert(Value::String(key.clone()), Value::String(value.clone()));
        }
        root.insert("env_vars".into(), Value::Mapping(vars));
    }
    if !manifest.debian_packages.is_empty() {
        root.insert("debian_packages".into(), string_sequence(&manifest.debian_packages));
    }
    if !manifest.python.pip_packages.is_empty() || !manifest.python.conda_packages.is_empty() {
        let mut python = Mapping::new();
        if !manifest.python.pip_packages.is_empty() {
            python.insert("pip_packages".into(), string_sequence(&manifest.python.pip_packages));
        }
        if !manifest.python.conda_packages.is_empty() {
            python
                .insert("conda_packages".into(), string_sequence(&manifest.python.conda_packages));
        }
        root.insert("python".into(), Value::Mapping(python));
    }
    if !manifest.post_build_cmds.is_empty() {
        root.insert("post_build_cmds".into(), string_sequence(&manifest.post_build_cmds));
    }
    for (entry_key, entry_value) in &manifest.extensions {
        root.insert(entry_key.clone(), entry_value.clone());
    }
    Value::Mapping(root)
}

fn criteria_to_value(criteria: &BTreeMap<String, f64>) -> Value {
    let mut map = Mapping::new();
    for (metric, threshold) in criteria {
        map.insert(Value::String(metric.clone()), Value::Number((*threshold).into()));
    }
    Value::Mapping(map)
}

fn string_sequence(strings: &[String]) -> Value {
    Value::Sequence(strings.iter().map(|s| Value::String(s.clone())).collect())
}
