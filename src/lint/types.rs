//! Core types for the lint module.
//!
//! This module contains the canonical, tool-agnostic result shapes that
//! every backend adapter produces:
//! - `Severity` - Two-level severity model
//! - `LintIssue` - A single normalized finding
//! - `LintResult` - The outcome of one lint invocation

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Severity of a normalized lint issue.
///
/// Tools report richer scales; everything that is not exactly an error
/// collapses to a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A single lint finding, normalized from a tool's native diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintIssue {
    /// File path where the issue was found, `"unknown"` when the tool
    /// reported no location.
    pub file: String,

    /// Line number, zero when the tool did not report a position.
    pub line: u32,

    /// Column number, zero when the tool did not report a position.
    pub column: u32,

    /// Severity of the issue
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// Rule ID/code (e.g., "lint/no-unused", "no-console")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

/// The outcome of one lint invocation.
///
/// Created fresh per invocation; there is no caching and no identity
/// beyond field equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    /// RFC 3339 timestamp captured at invocation start, before the
    /// subprocess was spawned.
    pub timestamp: String,

    /// The caller's input paths, echoed verbatim regardless of which
    /// files the tool actually reported on.
    pub files: Vec<PathBuf>,

    /// Normalized findings in the tool's reporting order.
    pub issues: Vec<LintIssue>,

    /// Number of issues with `Severity::Error`
    pub error_count: usize,

    /// Number of issues with `Severity::Warning`
    pub warning_count: usize,
}

impl LintResult {
    /// Build a result from normalized issues, deriving both severity
    /// counts from the issue list.
    pub fn new(timestamp: String, files: Vec<PathBuf>, issues: Vec<LintIssue>) -> Self {
        let error_count = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        let warning_count = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();

        Self {
            timestamp,
            files,
            issues,
            error_count,
            warning_count,
        }
    }

    /// A zero-issue result.
    pub fn clean(timestamp: String, files: Vec<PathBuf>) -> Self {
        Self::new(timestamp, files, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> LintIssue {
        LintIssue {
            file: "a.ts".to_string(),
            line: 0,
            column: 0,
            severity,
            message: "msg".to_string(),
            rule: None,
        }
    }

    #[test]
    fn test_counts_derived_from_issues() {
        let result = LintResult::new(
            "2024-01-01T00:00:00+00:00".to_string(),
            vec![PathBuf::from("a.ts")],
            vec![
                issue(Severity::Error),
                issue(Severity::Warning),
                issue(Severity::Error),
            ],
        );

        assert_eq!(result.error_count, 2);
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.error_count + result.warning_count, result.issues.len());
    }

    #[test]
    fn test_clean_result_has_zero_counts() {
        let result = LintResult::clean(
            "2024-01-01T00:00:00+00:00".to_string(),
            vec![PathBuf::from("a.ts"), PathBuf::from("b.ts")],
        );

        assert!(result.issues.is_empty());
        assert_eq!(result.error_count, 0);
        assert_eq!(result.warning_count, 0);
        assert_eq!(result.files, vec![PathBuf::from("a.ts"), PathBuf::from("b.ts")]);
    }

    #[test]
    fn test_result_serializes_with_camel_case_counts() {
        let result = LintResult::clean("t".to_string(), Vec::new());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["errorCount"], 0);
        assert_eq!(json["warningCount"], 0);
        assert!(json.get("error_count").is_none());
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Severity::Error).unwrap(), "error");
        assert_eq!(serde_json::to_value(Severity::Warning).unwrap(), "warning");
    }

    #[test]
    fn test_absent_rule_is_omitted_from_json() {
        let json = serde_json::to_value(issue(Severity::Warning)).unwrap();
        assert!(json.get("rule").is_none());
    }
}
