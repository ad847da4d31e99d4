//! Embedded catalog integrity: every shipped case loads and lints cleanly.

use std::path::{Path, PathBuf};

use yamllint_rs::{FileProcessor, ProcessingOptions, Severity};

use tunefile::{ParamValue, builtin_case_names, load_builtin_case, load_builtin_cases};

#[test]
fn catalog_lists_shipped_cases() {
    let names = builtin_case_names();
    for expected in ["cartpole-ppo", "pendulum-ddpg", "pong-impala"] {
        assert!(names.iter().any(|n| n == expected), "missing builtin case {}", expected);
    }
}

#[test]
fn every_builtin_case_validates() {
    let cases = load_builtin_cases().unwrap();
    assert_eq!(cases.len(), builtin_case_names().len());
    for case in &cases {
        assert!(!case.env.is_empty());
        assert!(!case.run.is_empty());
        assert!(!case.stop.is_empty());
    }
}

#[test]
fn pong_impala_keeps_its_lr_schedule() {
    let case = load_builtin_case("pong-impala").unwrap();
    let schedule = case.config.get("lr_schedule").expect("lr_schedule present");
    match schedule {
        ParamValue::Sequence(entries) => {
            assert_eq!(entries.len(), 2);
            match &entries[0] {
                ParamValue::Sequence(pair) => {
                    assert_eq!(pair[0], ParamValue::Int(0));
                    assert_eq!(pair[1], ParamValue::Float(0.0005));
                }
                other => panic!("expected nested [step, lr] pair, got {:?}", other),
            }
        }
        other => panic!("expected a piecewise schedule sequence, got {:?}", other),
    }
}

#[test]
fn embedded_assets_pass_yaml_lint() {
    let assets_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/assets/tuned");
    let files = collect_yaml_files(&assets_dir);
    assert!(!files.is_empty(), "embedded asset directory produced no YAML files");

    let mut config = yamllint_rs::config::Config::new();
    config.set_rule_enabled("line-length", false);
    config.set_rule_enabled("indentation", false);
    config.set_rule_enabled("truthy", false);
    config.set_rule_enabled("document-start", false);
    config.set_rule_enabled("comments", false);

    let processor = FileProcessor::with_config(ProcessingOptions::default(), config);

    let mut errors = Vec::new();
    for file in files {
        match processor.process_file(&file) {
            Ok(result) => {
                let issues: Vec<_> = result
                    .issues
                    .iter()
                    .filter(|(issue, _)| issue.severity == Severity::Error)
                    .collect();

                if !issues.is_empty() {
                    let mut msg = format!("\n  {}:", file.display());
                    for (issue, line) in &issues {
                        msg.push_str(&format!(
                            "\n    L{}: {} - {}",
                            issue.line, issue.message, line
                        ));
                    }
                    errors.push(msg);
                }
            }
            Err(e) => {
                errors.push(format!("\n  {}: failed to lint - {}", file.display(), e));
            }
        }
    }

    assert!(errors.is_empty(), "YAML lint errors in embedded assets:{}", errors.join(""));
}

fn collect_yaml_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(root)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", root.display(), e))
    {
        let path = entry.expect("directory entry").path();
        if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yml" || ext == "yaml")
        {
            files.push(path);
        }
    }
    files
}
