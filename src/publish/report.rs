//! Publish report model
//!
//! The flat artifact summarizing one pre-merge workflow run: test results
//! plus the code review, security audit, and visual QA check outcomes.
//! Unlike sessions there is no recursion; the same escaping discipline
//! applies when the report is rendered.

use serde::{Deserialize, Serialize};

/// Summary of one pre-merge publish run
///
/// Each check is a pass/fail flag with an optional link to a detail report.
/// Wire names stay camelCase to match the recorded artifact format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReport {
    /// Branch the publish run targeted
    pub branch: String,
    /// ISO-8601 timestamp of the run
    pub timestamp: String,
    /// Whether the test suite passed
    pub tests_passed: bool,
    /// Captured test-runner output
    pub tests_output: String,
    /// Whether code review passed
    pub code_review_passed: bool,
    /// Optional path to the code review detail report
    pub code_review_report: Option<String>,
    /// Whether the security audit passed
    pub security_audit_passed: bool,
    /// Optional path to the security audit detail report
    pub security_report: Option<String>,
    /// Whether visual QA passed
    #[serde(rename = "visualQAPassed")]
    pub visual_qa_passed: bool,
    /// Optional path to the visual QA detail report
    #[serde(rename = "visualQAReport")]
    pub visual_qa_report: Option<String>,
    /// Optional pull request URL
    pub pr_url: Option<String>,
}

impl PublishReport {
    /// True when every check in the run passed
    pub fn all_passed(&self) -> bool {
        self.tests_passed
            && self.code_review_passed
            && self.security_audit_passed
            && self.visual_qa_passed
    }
}
