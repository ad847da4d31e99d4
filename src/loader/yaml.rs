//! Mapping access helpers over parsed YAML trees.
//!
//! Every helper reports failures as [`LoadError::SchemaViolation`] carrying
//! the dotted key path of the offending field.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::domain::ParamValue;

use super::error::LoadError;

pub(crate) fn key(name: &str) -> Value {
    Value::String(name.to_string())
}

/// Join a parent path and a key into a dotted path. The document root is the
/// empty parent, so top-level fields keep their bare name.
pub(crate) fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() { name.to_string() } else { format!("{parent}.{name}") }
}

pub(crate) fn get_string(map: &Mapping, name: &str) -> Option<String> {
    map.get(key(name)).and_then(|value| match value {
        Value::String(value) => Some(value.clone()),
        _ => None,
    })
}

/// A required string field; present with another type is as fatal as absent.
pub(crate) fn require_string(map: &Mapping, parent: &str, name: &str) -> Result<String, LoadError> {
    let path = join_path(parent, name);
    match map.get(key(name)) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(LoadError::schema(path, "must be a string")),
        None => Err(LoadError::schema(path, "is required")),
    }
}

/// A required, non-empty string field.
pub(crate) fn require_non_empty_string(
    map: &Mapping,
    parent: &str,
    name: &str,
) -> Result<String, LoadError> {
    let value = require_string(map, parent, name)?;
    if value.trim().is_empty() {
        return Err(LoadError::schema(join_path(parent, name), "must not be empty"));
    }
    Ok(value)
}

/// An optional mapping field; `None` when absent, error when mistyped.
pub(crate) fn optional_mapping<'a>(
    map: &'a Mapping,
    parent: &str,
    name: &str,
) -> Result<Option<&'a Mapping>, LoadError> {
    match map.get(key(name)) {
        Some(Value::Mapping(value)) => Ok(Some(value)),
        Some(_) => Err(LoadError::schema(join_path(parent, name), "must be a mapping")),
        None => Ok(None),
    }
}

/// An optional sequence-of-strings field; absent means empty. Order is
/// preserved.
pub(crate) fn optional_string_sequence(
    map: &Mapping,
    parent: &str,
    name: &str,
) -> Result<Vec<String>, LoadError> {
    let path = join_path(parent, name);
    let values = match map.get(key(name)) {
        Some(Value::Sequence(values)) => values,
        Some(_) => return Err(LoadError::schema(path, "must be a sequence of strings")),
        None => return Ok(Vec::new()),
    };

    let mut strings = Vec::with_capacity(values.len());
    for (idx, value) in values.iter().enumerate() {
        match value {
            Value::String(text) => strings.push(text.clone()),
            _ => {
                return Err(LoadError::schema(format!("{path}[{idx}]"), "must be a string"));
            }
        }
    }
    Ok(strings)
}

/// An optional string-to-string mapping field; absent means empty.
pub(crate) fn optional_string_map(
    map: &Mapping,
    parent: &str,
    name: &str,
) -> Result<BTreeMap<String, String>, LoadError> {
    let path = join_path(parent, name);
    let Some(entries) = optional_mapping(map, parent, name)? else {
        return Ok(BTreeMap::new());
    };

    let mut result = BTreeMap::new();
    for (entry_key, entry_value) in entries {
        let Value::String(entry_key) = entry_key else {
            return Err(LoadError::schema(path, "keys must be strings"));
        };
        let Value::String(entry_value) = entry_value else {
            return Err(LoadError::schema(
                join_path(&path, entry_key),
                "must be a string",
            ));
        };
        result.insert(entry_key.clone(), entry_value.clone());
    }
    Ok(result)
}

/// A metric-threshold mapping (`pass_criteria`, `stop`): non-empty string
/// keys mapped to finite numbers.
pub(crate) fn criteria_map(
    map: &Mapping,
    parent: &str,
    name: &str,
) -> Result<Option<BTreeMap<String, f64>>, LoadError> {
    let path = join_path(parent, name);
    let Some(entries) = optional_mapping(map, parent, name)? else {
        return Ok(None);
    };

    let mut criteria = BTreeMap::new();
    for (entry_key, entry_value) in entries {
        let metric = match entry_key {
            Value::String(metric) if !metric.trim().is_empty() => metric.clone(),
            _ => return Err(LoadError::schema(path, "metric names must be non-empty strings")),
        };
        let threshold = finite_number(entry_value, &join_path(&path, &metric))?;
        criteria.insert(metric, threshold);
    }
    Ok(Some(criteria))
}

/// A finite numeric leaf; integers widen to `f64`, NaN and infinities are
/// rejected.
pub(crate) fn finite_number(value: &Value, path: &str) -> Result<f64, LoadError> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        _ => None,
    };
    match number {
        Some(number) if number.is_finite() => Ok(number),
        Some(_) => Err(LoadError::schema(path, "must be a finite number")),
        None => Err(LoadError::schema(path, "must be a number")),
    }
}

/// Convert a YAML node into a [`ParamValue`] tree. Tagged nodes and
/// non-string mapping keys have no meaning to any consumer and are rejected
/// at their path.
pub(crate) fn param_value(value: &Value, path: &str) -> Result<ParamValue, LoadError> {
    match value {
        Value::Null => Ok(ParamValue::Null),
        Value::Bool(value) => Ok(ParamValue::Bool(*value)),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Ok(ParamValue::Int(int))
            } else {
                Ok(ParamValue::Float(finite_number(value, path)?))
            }
        }
        Value::String(text) => Ok(ParamValue::String(text.clone())),
        Value::Sequence(values) => {
            let mut items = Vec::with_capacity(values.len());
            for (idx, item) in values.iter().enumerate() {
                items.push(param_value(item, &format!("{path}[{idx}]"))?);
            }
            Ok(ParamValue::Sequence(items))
        }
        Value::Mapping(entries) => Ok(ParamValue::Map(param_map(entries, path)?)),
        Value::Tagged(_) => Err(LoadError::schema(path, "tagged values are not supported")),
    }
}

/// Convert a YAML mapping into a [`ParamValue`] map, enforcing string keys.
pub(crate) fn param_map(
    entries: &Mapping,
    path: &str,
) -> Result<BTreeMap<String, ParamValue>, LoadError> {
    let mut map = BTreeMap::new();
    for (entry_key, entry_value) in entries {
        let Value::String(entry_key) = entry_key else {
            return Err(LoadError::schema(path, "keys must be strings"));
        };
        let entry_path = join_path(path, entry_key);
        map.insert(entry_key.clone(), param_value(entry_value, &entry_path)?);
    }
    Ok(map)
}
