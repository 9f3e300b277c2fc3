//! Behavior of the keyword analysis engine.

use ares_core::engine::{ids, ANALYSIS_STEPS, RAW_OUTPUT};
use ares_core::model::Severity;
use ares_core::AresEngine;

#[test]
fn steps_are_constant_across_inputs() {
    let engine = AresEngine::new();
    let inputs = [
        "",
        "hello",
        "privileged: true",
        "password=hunter2",
        "securityContext:\n  privileged: true\n  key: abc",
        "日本語のログ",
    ];
    let first = engine.analyze(inputs[0]).steps;
    assert_eq!(first, ANALYSIS_STEPS.to_vec());
    for input in &inputs[1..] {
        assert_eq!(engine.analyze(input).steps, first, "input: {input:?}");
    }
}

#[test]
fn password_yields_exactly_one_critical_leak() {
    let engine = AresEngine::new();
    for input in ["password", "DB_PASSWORD=x", "my Password is password"] {
        let result = engine.analyze(input);
        let leaks: Vec<_> = result
            .findings
            .iter()
            .filter(|f| f.id == ids::HARDCODED_SECRET)
            .collect();
        assert_eq!(leaks.len(), 1, "input: {input:?}");
        assert_eq!(leaks[0].severity, Severity::Critical);
        assert!(leaks[0].remediation_script.is_some());
    }
}

#[test]
fn unmatched_input_yields_single_general_finding() {
    let result = AresEngine::new().analyze("apiVersion: v1\nkind: Service\n");
    assert_eq!(result.findings.len(), 1);
    let f = &result.findings[0];
    assert_eq!(f.id, ids::GENERAL);
    assert_eq!(f.severity, Severity::Low);
    assert_eq!(f.affected_component, "General Input");
    assert!(f.remediation_script.is_none());
}

#[test]
fn privileged_pod_yields_high_finding() {
    let manifest = "\
apiVersion: v1
kind: Pod
spec:
  containers:
    - name: app
      image: nginx
";
    let result = AresEngine::new().analyze(&format!("{manifest}      privileged: true\n"));
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].id, ids::PRIVILEGED_CONTAINER);
    assert_eq!(result.findings[0].severity, Severity::High);
    let script = result.findings[0].remediation_script.as_deref().unwrap();
    assert!(script.contains("allowPrivilegeEscalation: false"));
}

#[test]
fn both_rules_can_fire_without_fallback() {
    let result = AresEngine::new().analyze("securityContext: {}\nsecret: hunter2");
    let got: Vec<_> = result.findings.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(got, vec![ids::PRIVILEGED_CONTAINER, ids::HARDCODED_SECRET]);
    assert_eq!(result.raw_output, RAW_OUTPUT);
}

#[test]
fn result_serializes_to_wire_shape() {
    let result = AresEngine::new().analyze("nothing to see");
    let v = serde_json::to_value(&result).unwrap();
    assert_eq!(v["raw_output"], "Analysis completed successfully.");
    assert_eq!(v["steps"].as_array().unwrap().len(), 5);
    let f = &v["findings"][0];
    assert_eq!(f["severity"], "Low");
    assert_eq!(f["id"], "gen-1");
    assert!(f.get("remediation_script").is_none());

    let result = AresEngine::new().analyze("password");
    let v = serde_json::to_value(&result).unwrap();
    assert_eq!(v["findings"][0]["severity"], "Critical");
    assert!(v["findings"][0]["remediation_script"]
        .as_str()
        .unwrap()
        .contains("${DB_PASSWORD}"));
}
