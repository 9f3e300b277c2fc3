//! Value records produced by the engine and the waitlist.

use serde::{Deserialize, Serialize};

/// How bad a finding is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational.
    Low,
    /// Worth fixing.
    Medium,
    /// Weakens isolation or exposure controls.
    High,
    /// Needs immediate action, e.g. a leaked secret.
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        };
        f.write_str(s)
    }
}

/// A single reported issue with remediation guidance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    /// Stable identifier of the rule that produced this finding.
    pub id: String,
    /// One-line headline.
    pub title: String,
    /// How bad it is.
    pub severity: Severity,
    /// What was found and why it matters.
    pub description: String,
    /// Part of the input the finding applies to.
    pub affected_component: String,
    /// Short, human-readable fix. Shown in the dashboard findings list.
    pub remediation_explanation: String,
    /// Optional script or config snippet implementing the fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_script: Option<String>,
}

/// Output of one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Progress messages replayed by the dashboard console.
    pub steps: Vec<String>,
    /// Findings in rule order.
    pub findings: Vec<Finding>,
    /// Completion message.
    pub raw_output: String,
}

/// A validated waitlist submission, as handed to a sink.
///
/// Field order matters: it is the column order of spreadsheet sinks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaitlistEntry {
    /// RFC 3339 UTC, millisecond precision.
    pub timestamp: String,
    /// Full name.
    pub name: String,
    /// Organization.
    pub company: String,
    /// Work email.
    pub email: String,
}

impl WaitlistEntry {
    /// Spreadsheet row: timestamp, name, company, email.
    pub fn to_row(&self) -> [&str; 4] {
        [&self.timestamp, &self.name, &self.company, &self.email]
    }
}
