//! Prompt templates for a model-backed engine.
//!
//! Nothing sends these anywhere yet; [`crate::AresEngine`] keeps the system
//! prompt in its history and can build the analysis request text.

/// System prompt: defensive analysis only.
pub const ARES_SYSTEM_PROMPT: &str = "\
You are ARES (Automated Remediation & Enforcement System).
Your goal is DEFENSIVE SECURITY ONLY.
You must analyze the provided input for security vulnerabilities, misconfigurations, and exposures.
You must NEVER provide instructions for exploitation, hacking, or attacking.
You must NEVER execute commands or suggest commands that could harm a live system without review.

Your analysis pipeline:
1. IDENTIFY: Determine the type of input (Log, IaC, Code, Config, Scan Report).
2. ANALYZE: Scan for CVEs, OWASP Top 10, CIS Benchmark violations, and logical flaws.
3. EXPLAIN: clearly explain the risk and impact.
4. REMEDIATE: Provide specific, step-by-step hardening instructions.

Output Format: JSON only.
";

/// Prefix of the per-artifact analysis request. The input is appended.
pub const ANALYSIS_PROMPT: &str = "\
Analyze the following security artifact.
Return a JSON object with:
- summary: Brief overview of the artifact.
- findings: Array of objects { title, severity (Low/Medium/High/Critical), description, remediation_guide }.
- format: Detected input format (e.g., \"Kubernetes YAML\", \"Python Script\").

Input Data:
";

/// Remediation script request. Placeholders: `{context}`, `{finding}`, `{language}`.
pub const REMEDIATION_SCRIPT_PROMPT: &str = "\
Generate a defensive remediation script for the following finding.
Context: {context}
Finding: {finding}
Target Language: {language} (e.g., Bash, Terraform, Ansible)

Rules:
- The script must FIX the issue, not just find it.
- Include comments explaining each step.
- Add \"dry-run\" or verification steps where possible.
- PREVENT execution of destructive commands without user confirmation.
- Output ONLY the code block.
";

/// Fills the placeholders of [`REMEDIATION_SCRIPT_PROMPT`].
pub fn render_remediation_prompt(context: &str, finding: &str, language: &str) -> String {
    REMEDIATION_SCRIPT_PROMPT
        .replace("{context}", context)
        .replace("{finding}", finding)
        .replace("{language}", language)
}
