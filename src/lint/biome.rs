//! Biome adapter: drives `biome lint` through its JSON reporter.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::Value;

use crate::error::Result;
use crate::lint::exec::{ShellMode, SystemRunner, ToolInvocation, ToolRunner};
use crate::lint::linter::{silent_exit, spawn_failure, Linter};
use crate::lint::types::{LintIssue, LintResult, Severity};

/// Diagnostic categories under this prefix report a fault in Biome
/// itself, not a finding in the linted code.
const INTERNAL_ERROR_PREFIX: &str = "internalError/";

pub struct Biome {
    runner: Box<dyn ToolRunner>,
}

impl Biome {
    pub fn new() -> Self {
        Self {
            runner: Box::new(SystemRunner),
        }
    }

    /// Adapter over an injected runner; tests use this to avoid
    /// spawning real processes.
    pub fn with_runner(runner: Box<dyn ToolRunner>) -> Self {
        Self { runner }
    }

    fn build_invocation(files: &[PathBuf], config_path: Option<&Path>) -> ToolInvocation {
        let mut args = vec![
            "@biomejs/biome".to_string(),
            "lint".to_string(),
            "--reporter=json".to_string(),
        ];
        args.extend(files.iter().map(|f| f.to_string_lossy().to_string()));

        if let Some(config) = config_path {
            args.push("--config-path".to_string());
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

impl Default for Biome {
    fn default() -> Self {
        Self::new()
    }
}

impl Linter for Biome {
    fn name(&self) -> &'static str {
        "biome"
    }

    fn lint(&self, file_paths: &[PathBuf], config_path: Option<&Path>) -> Result<LintResult> {
        let timestamp = Utc::now().to_rfc3339();
        let invocation = Self::build_invocation(file_paths, config_path);
        tracing::debug!(tool = self.name(), ?invocation, "running linter");

        let output = self
            .runner
            .run(&invocation)
            .map_err(|err| spawn_failure(self.name(), err))?;

        // Exit zero means the tool found nothing; the JSON report is only
        // emitted alongside a non-zero exit.
        if output.success {
            return Ok(LintResult::clean(timestamp, file_paths.to_vec()));
        }

        if output.stdout.trim().is_empty() {
            return Err(silent_exit(self.name(), &output));
        }

        let issues = parse_diagnostics(&output.stdout)
            .iter()
            .filter_map(to_issue)
            .collect();
        Ok(LintResult::new(timestamp, file_paths.to_vec(), issues))
    }
}

/// Extract the raw diagnostics array from the report envelope. A payload
/// that is not valid JSON, or has no `diagnostics` field, degrades to
/// zero diagnostics.
fn parse_diagnostics(stdout: &str) -> Vec<Value> {
    let envelope: Value = match serde_json::from_str(stdout) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(error = %err, "biome output was not valid JSON, treating as zero findings");
            return Vec::new();
        }
    };

    envelope
        .get("diagnostics")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Normalize one raw diagnostic, or drop it when it reports a
/// tool-internal fault.
fn to_issue(diagnostic: &Value) -> Option<LintIssue> {
    let category = diagnostic.get("category").and_then(Value::as_str);
    if category.is_some_and(|c| c.starts_with(INTERNAL_ERROR_PREFIX)) {
        return None;
    }

    let severity = match diagnostic.get("severity").and_then(Value::as_str) {
        Some("error") => Severity::Error,
        _ => Severity::Warning,
    };

    Some(LintIssue {
        file: diagnostic
            .pointer("/location/path/file")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
        // Position extraction is not attempted at this layer.
        line: 0,
        column: 0,
        severity,
        message: describe(diagnostic),
        rule: category.map(str::to_string),
    })
}

fn describe(diagnostic: &Value) -> String {
    if let Some(description) = diagnostic.get("description").and_then(Value::as_str) {
        return description.to_string();
    }
    if let Some(parts) = diagnostic.get("message").and_then(Value::as_array) {
        return parts
            .iter()
            .filter_map(|part| part.get("content").and_then(Value::as_str))
            .collect();
    }
    "unknown issue".to_string()
}
