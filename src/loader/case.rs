//! Tuned-case document validation.

use std::collections::BTreeMap;

use serde_yaml::Mapping;

use crate::domain::{CaseName, TunedCase};

use super::diagnostics::Diagnostics;
use super::error::LoadError;
use super::yaml::{
    criteria_map, key, optional_mapping, optional_string_sequence, param_map,
    require_non_empty_string,
};

/// Keys the tuned-case schema models; anything else is preserved in the
/// extension bucket.
const KNOWN_KEYS: [&str; 6] = ["env", "run", "pass_criteria", "stop", "frameworks", "config"];

/// Validate one tuned-case body (the mapping under the case-name key).
///
/// Key paths in errors are relative to the body, matching how the fields
/// appear in the document (`stop.time_total_s`, not prefixed by the case
/// name).
pub(crate) fn parse_tuned_case(
    name: CaseName,
    body: &Mapping,
    diagnostics: &mut Diagnostics,
) -> Result<TunedCase, LoadError> {
    let env = require_non_empty_string(body, "", "env")?;
    let run = require_non_empty_string(body, "", "run")?;

    let stop = match criteria_map(body, "", "stop")? {
        Some(stop) if !stop.is_empty() => stop,
        Some(_) => return Err(LoadError::schema("stop", "must have entries")),
        None => return Err(LoadError::schema("stop", "is required")),
    };

    let pass_criteria = criteria_map(body, "", "pass_criteria")?.unwrap_or_default();
    let frameworks = optional_string_sequence(body, "", "frameworks")?;

    let config = match optional_mapping(body, "", "config")? {
        Some(entries) => param_map(entries, "config")?,
        None => BTreeMap::new(),
    };

    let mut extensions = Mapping::new();
    for (entry_key, entry_value) in body {
        let known = entry_key.as_str().is_some_and(|k| KNOWN_KEYS.contains(&k));
        if !known {
            let label = entry_key.as_str().unwrap_or("<non-string key>");
            diagnostics.push_warning(
                name.as_str(),
                format!("unknown key '{}' preserved", label),
            );
            extensions.insert(entry_key.clone(), entry_value.clone());
        }
    }

    Ok(TunedCase { name, env, run, pass_criteria, stop, frameworks, config, extensions })
}

/// Whether a case body looks like one: it carries at least one of the
/// identifying fields, even if validation would still reject it.
pub(crate) fn looks_like_case_body(body: &Mapping) -> bool {
    ["env", "run", "stop"].iter().any(|name| body.get(key(name)).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParamValue;

    fn parse(yaml: &str) -> Result<TunedCase, LoadError> {
        let body: Mapping = serde_yaml::from_str(yaml).unwrap();
        let name = CaseName::new("a3c-pongdeterministic-v4").unwrap();
        parse_tuned_case(name, &body, &mut Diagnostics::new())
    }

    #[test]
    fn minimal_case_loads() {
        let case = parse(
            r#"
env: PongDeterministic-v4
run: A3C
stop:
  time_total_s: 3600
config:
  num_workers: 16
"#,
        )
        .unwrap();

        assert_eq!(case.env, "PongDeterministic-v4");
        assert_eq!(case.run, "A3C");
        assert_eq!(case.stop["time_total_s"], 3600.0);
        assert_eq!(case.config["num_workers"], ParamValue::Int(16));
        assert!(case.pass_criteria.is_empty());
        assert!(case.frameworks.is_empty());
        assert!(case.extensions.is_empty());
    }

    #[test]
    fn missing_stop_names_the_field() {
        let err = parse("env: CartPole-v1\nrun: PPO").unwrap_err();
        assert!(matches!(err, LoadError::SchemaViolation { ref path, .. } if path == "stop"));
    }

    #[test]
    fn empty_stop_is_rejected() {
        let err = parse("env: CartPole-v1\nrun: PPO\nstop: {}").unwrap_err();
        assert!(matches!(err, LoadError::SchemaViolation { ref path, .. } if path == "stop"));
    }

    #[test]
    fn non_numeric_pass_criterion_names_the_metric() {
        let err = parse(
            r#"
env: CartPole-v1
run: PPO
stop:
  timesteps_total: 100000
pass_criteria:
  episode_reward_mean: high
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::SchemaViolation { ref path, .. } if path == "pass_criteria.episode_reward_mean"
        ));
    }

    #[test]
    fn empty_env_is_rejected() {
        let err = parse("env: \"\"\nrun: PPO\nstop: {timesteps_total: 1}").unwrap_err();
        assert!(matches!(err, LoadError::SchemaViolation { ref path, .. } if path == "env"));
    }

    #[test]
    fn frameworks_keep_order() {
        let case = parse(
            "env: CartPole-v1\nrun: PPO\nstop: {timesteps_total: 1}\nframeworks: [tf2, tf, torch]",
        )
        .unwrap();
        assert_eq!(case.frameworks, vec!["tf2", "tf", "torch"]);
    }

    #[test]
    fn unknown_keys_go_to_extensions_with_warning() {
        let body: Mapping = serde_yaml::from_str(
            "env: CartPole-v1\nrun: PPO\nstop: {timesteps_total: 1}\nnotes: experimental",
        )
        .unwrap();
        let mut diagnostics = Diagnostics::new();
        let case = parse_tuned_case(CaseName::new("cartpole-ppo").unwrap(), &body, &mut diagnostics)
            .unwrap();

        assert_eq!(case.env, "CartPole-v1");
        assert_eq!(
            case.extensions.get(serde_yaml::Value::String("notes".into())),
            Some(&serde_yaml::Value::String("experimental".into()))
        );
        assert_eq!(diagnostics.warning_count(), 1);
        assert!(diagnostics.warnings()[0].message.contains("notes"));
    }

    #[test]
    fn nested_config_tree_converts() {
        let case = parse(
            r#"
env: CartPole-v1
run: PPO
stop:
  timesteps_total: 100000
config:
  model:
    fcnet_hiddens: [32]
    vf_share_layers: true
"#,
        )
        .unwrap();
        let model = case.config.get("model").unwrap();
        assert_eq!(model.get("vf_share_layers").and_then(ParamValue::as_bool), Some(true));
    }
}
