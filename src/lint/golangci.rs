//! golangci-lint adapter: drives `golangci-lint run --out-format json`.
//!
//! golangci-lint is a standalone binary, so it is invoked directly on
//! every platform. Like ESLint it prints its report on clean runs too,
//! so stdout is parsed whenever it is non-empty.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::Value;

use crate::error::Result;
use crate::lint::exec::{SystemRunner, ToolInvocation, ToolRunner};
use crate::lint::linter::{silent_exit, spawn_failure, Linter};
use crate::lint::types::{LintIssue, LintResult, Severity};

pub struct GolangciLint {
    runner: Box<dyn ToolRunner>,
}

impl GolangciLint {
    pub fn new() -> Self {
        Self {
            runner: Box::new(SystemRunner),
        }
    }

    pub fn with_runner(runner: Box<dyn ToolRunner>) -> Self {
        Self { runner }
    }

    fn build_invocation(files: &[PathBuf], config_path: Option<&Path>) -> ToolInvocation {
        let mut args = vec![
            "run".to_string(),
            "--out-format".to_string(),
            "json".to_string(),
        ];
        args.extend(files.iter().map(|f| f.to_string_lossy().to_string()));

        if let Some(config) = config_path {
            args.push("--config".to_string());
            args.push(config.to_string_lossy().to_string());
        }

        let mut invocation = ToolInvocation::new("golangci-lint", args);
        if let Some(config) = config_path {
            invocation = invocation.with_cwd(config.to_path_buf());
        }
        invocation
    }
}

impl Default for GolangciLint {
    fn default() -> Self {
        Self::new()
    }
}

impl Linter for GolangciLint {
    fn name(&self) -> &'static str {
        "golangci-lint"
    }

    fn lint(&self, file_paths: &[PathBuf], config_path: Option<&Path>) -> Result<LintResult> {
        let timestamp = Utc::now().to_rfc3339();
        let invocation = Self::build_invocation(file_paths, config_path);
        tracing::debug!(tool = self.name(), ?invocation, "running linter");

        let output = self
            .runner
            .run(&invocation)
            .map_err(|err| spawn_failure(self.name(), err))?;

        if output.stdout.trim().is_empty() {
            if output.success {
                return Ok(LintResult::clean(timestamp, file_paths.to_vec()));
            }
            return Err(silent_exit(self.name(), &output));
        }

        let issues = parse_report(&output.stdout);
        Ok(LintResult::new(timestamp, file_paths.to_vec(), issues))
    }
}

/// golangci-lint wraps its findings in an `Issues` array (null on clean
/// runs). Anything unexpected degrades to zero findings.
fn parse_report(stdout: &str) -> Vec<LintIssue> {
    let envelope: Value = match serde_json::from_str(stdout) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(error = %err, "golangci-lint output was not valid JSON, treating as zero findings");
            return Vec::new();
        }
    };

    let Some(raw_issues) = envelope.get("Issues").and_then(Value::as_array) else {
        return Vec::new();
    };

    raw_issues.iter().map(to_issue).collect()
}

fn to_issue(raw: &Value) -> LintIssue {
    // golangci-lint routinely omits Severity; an unlabelled finding is a
    // gating failure, so anything that is not "warning" counts as error.
    let severity = match raw.get("Severity").and_then(Value::as_str) {
        Some("warning") => Severity::Warning,
        _ => Severity::Error,
    };

    LintIssue {
        file: raw
            .pointer("/Pos/Filename")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
        line: raw.pointer("/Pos/Line").and_then(Value::as_u64).unwrap_or(0) as u32,
        column: raw
            .pointer("/Pos/Column")
            .and_then(Value::as_u64)
            .unwrap_or(0) as u32,
        severity,
        message: raw
            .get("Text")
            .and_then(Value::as_str)
            .unwrap_or("unknown issue")
            .to_string(),
        rule: raw
            .get("FromLinter")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}
