//! The linter capability implemented by every backend adapter.

use std::path::{Path, PathBuf};

use crate::error::{GuardError, Result};
use crate::lint::exec::ToolOutput;
use crate::lint::types::LintResult;

/// One backend adapter per supported external tool.
///
/// Adapters honor a shared contract: zero-issue runs return a result with
/// empty issues and both counts zero, `files` always echoes the caller's
/// input paths, and the timestamp is captured once, before the subprocess
/// is spawned. `Err` is reserved for process failures; a tool that ran
/// and reported findings is a normal result, whatever its exit code.
pub trait Linter {
    /// Tool name used in logs and process-failure errors.
    fn name(&self) -> &'static str;

    /// Run the tool over `file_paths` and normalize its findings.
    fn lint(&self, file_paths: &[PathBuf], config_path: Option<&Path>) -> Result<LintResult>;
}

/// The tool could not be spawned (typically: executable not found).
pub(crate) fn spawn_failure(tool: &'static str, err: std::io::Error) -> GuardError {
    GuardError::LinterProcess {
        tool,
        message: format!("failed to spawn: {err}"),
    }
}

/// The tool exited non-zero without reporting anything on stdout, so
/// there are no findings to normalize and the run counts as a failure.
pub(crate) fn silent_exit(tool: &'static str, output: &ToolOutput) -> GuardError {
    let exit = match output.exit_code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    };
    let stderr = output.stderr.trim();
    let message = if stderr.is_empty() {
        format!("{exit} with no captured output")
    } else {
        format!("{exit} with no captured output: {stderr}")
    };
    GuardError::LinterProcess { tool, message }
}
