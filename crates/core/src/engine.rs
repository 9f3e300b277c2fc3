//! Keyword-driven analysis engine.
//!
//! There is no model behind this: each rule is a substring test over the
//! input and, on a hit, contributes one canned [`Finding`]. Rules run in table
//! order; if none hit, a single low-severity informational finding is
//! returned instead.

use tracing::debug;

use crate::model::{AnalysisResult, Finding, Severity};
use crate::prompts::{ANALYSIS_PROMPT, ARES_SYSTEM_PROMPT};

/// Progress messages replayed by the dashboard. Identical for every input.
pub const ANALYSIS_STEPS: [&str; 5] = [
    "Identifying input signature...",
    "Matching against Known Vulnerability Database (KVDB)...",
    "Analyzing configuration attributes...",
    "Correlating findings with MITRE ATT&CK (Defensive)...",
    "Generating hardening strategies...",
];

/// `raw_output` of every completed analysis.
pub const RAW_OUTPUT: &str = "Analysis completed successfully.";

/// Finding ids produced by the engine.
pub mod ids {
    /// Privileged container or securityContext present.
    pub const PRIVILEGED_CONTAINER: &str = "k8s-priv-1";
    /// Password, secret or key in plain text.
    pub const HARDCODED_SECRET: &str = "sec-leak-1";
    /// Nothing matched.
    pub const GENERAL: &str = "gen-1";
}

const K8S_HARDENING_SCRIPT: &str = "\
# Kubernetes Hardening
securityContext:
  privileged: false
  allowPrivilegeEscalation: false
  capabilities:
    drop:
      - ALL
";

const SECRET_REPLACE_SCRIPT: &str = "\
# Bash - Find and Replace Secret (Example)
# DO NOT RUN WITHOUT BACKUP
sed -i 's/password123/${DB_PASSWORD}/g' config.yaml
";

/// Input as seen by the rules: the raw text and its lowercase form.
struct Probe<'a> {
    raw: &'a str,
    lower: String,
}

struct Rule {
    name: &'static str,
    matches: fn(&Probe<'_>) -> bool,
    finding: fn() -> Finding,
}

static RULES: &[Rule] = &[
    Rule {
        name: "privileged-container",
        matches: mentions_privileged,
        finding: privileged_container,
    },
    Rule {
        name: "hardcoded-secret",
        matches: mentions_secret,
        finding: hardcoded_secret,
    },
];

fn mentions_privileged(p: &Probe<'_>) -> bool {
    p.lower.contains("privileged: true") || p.raw.contains("securityContext")
}

// Only "password" is matched case-insensitively.
fn mentions_secret(p: &Probe<'_>) -> bool {
    p.lower.contains("password") || p.raw.contains("secret") || p.raw.contains("key")
}

fn privileged_container() -> Finding {
    Finding {
        id: ids::PRIVILEGED_CONTAINER.into(),
        title: "Privileged Container Detected".into(),
        severity: Severity::High,
        description: "The container is configured with privileged access, which disables many security isolations.".into(),
        affected_component: "Deployment Spec".into(),
        remediation_explanation: "Set `privileged: false` in the securityContext. Use capabilities instead.".into(),
        remediation_script: Some(K8S_HARDENING_SCRIPT.into()),
    }
}

fn hardcoded_secret() -> Finding {
    Finding {
        id: ids::HARDCODED_SECRET.into(),
        title: "Potential Hardcoded Secret".into(),
        severity: Severity::Critical,
        description: "A pattern resembling a secret or password was found in the plain text.".into(),
        affected_component: "Source Code / Config".into(),
        remediation_explanation: "Rotate the secret immediately. Use a secrets manager (Vault, AWS Secrets Manager).".into(),
        remediation_script: Some(SECRET_REPLACE_SCRIPT.into()),
    }
}

fn general_info() -> Finding {
    Finding {
        id: ids::GENERAL.into(),
        title: "Input Analysis Info".into(),
        severity: Severity::Low,
        description: "No critical signatures matched in the provided snippet. Manual review recommended.".into(),
        affected_component: "General Input".into(),
        remediation_explanation: "Ensure this input is validated against a schema.".into(),
        remediation_script: None,
    }
}

/// The analysis engine.
#[derive(Debug, Clone)]
pub struct AresEngine {
    history: Vec<String>,
}

impl Default for AresEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AresEngine {
    /// Creates an engine whose history starts with the system prompt.
    pub fn new() -> Self {
        Self {
            history: vec![ARES_SYSTEM_PROMPT.to_string()],
        }
    }

    /// Conversation history a model-backed engine would send.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Request text for analysing `input`.
    pub fn analysis_request(&self, input: &str) -> String {
        format!("{ANALYSIS_PROMPT}{input}")
    }

    /// Runs the keyword rules over `input`.
    pub fn analyze(&self, input: &str) -> AnalysisResult {
        let probe = Probe {
            raw: input,
            lower: input.to_lowercase(),
        };

        let mut findings: Vec<Finding> = RULES
            .iter()
            .filter(|rule| (rule.matches)(&probe))
            .map(|rule| {
                debug!(rule = rule.name, "rule matched");
                (rule.finding)()
            })
            .collect();

        if findings.is_empty() {
            findings.push(general_info());
        }

        AnalysisResult {
            steps: ANALYSIS_STEPS.iter().map(|s| s.to_string()).collect(),
            findings,
            raw_output: RAW_OUTPUT.to_string(),
        }
    }
}
