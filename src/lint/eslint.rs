//! ESLint adapter: drives `eslint --format json`.
//!
//! ESLint exits zero on warning-only runs while still printing its JSON
//! report, so stdout is parsed whenever it is non-empty regardless of the
//! exit status.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::Value;

use crate::error::Result;
use crate::lint::exec::{ShellMode, SystemRunner, ToolInvocation, ToolRunner};
use crate::lint::linter::{silent_exit, spawn_failure, Linter};
use crate::lint::types::{LintIssue, LintResult, Severity};

pub struct ESLint {
    runner: Box<dyn ToolRunner>,
}

impl ESLint {
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
            "eslint".to_string(),
            "--format".to_string(),
            "json".to_string(),
        ];
        args.extend(files.iter().map(|f| f.to_string_lossy().to_string()));

        if let Some(config) = config_path {
            args.push("--config".to_string());
            args.push(config.to_string_lossy().to_string());
        }

        let mut invocation =
            ToolInvocation::new("npx", args).with_shell(ShellMode::for_package_runner());
        if let Some(config) = config_path {
            invocation = invocation.with_cwd(config.to_path_buf());
        }
        invocation
    }
}

impl Default for ESLint {
    fn default() -> Self {
        Self::new()
    }
}

impl Linter for ESLint {
    fn name(&self) -> &'static str {
        "eslint"
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

/// ESLint reports an array of per-file results, each carrying a
/// `messages` array. Anything unexpected degrades to zero findings.
fn parse_report(stdout: &str) -> Vec<LintIssue> {
    let results = match serde_json::from_str::<Value>(stdout) {
        Ok(Value::Array(results)) => results,
        Ok(_) => {
            tracing::warn!("eslint output was not a JSON array, treating as zero findings");
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!(error = %err, "eslint output was not valid JSON, treating as zero findings");
            return Vec::new();
        }
    };

    let mut issues = Vec::new();
    for result in &results {
        let file = result
            .get("filePath")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        let Some(messages) = result.get("messages").and_then(Value::as_array) else {
            continue;
        };

        for message in messages {
            // ESLint severity: 2 = error, 1 = warning
            let severity = match message.get("severity").and_then(Value::as_u64) {
                Some(2) => Severity::Error,
                _ => Severity::Warning,
            };

            issues.push(LintIssue {
                file: file.to_string(),
                line: message.get("line").and_then(Value::as_u64).unwrap_or(0) as u32,
                column: message.get("column").and_then(Value::as_u64).unwrap_or(0) as u32,
                severity,
                message: message
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown issue")
                    .to_string(),
                rule: message
                    .get("ruleId")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            });
        }
    }
    issues
}
