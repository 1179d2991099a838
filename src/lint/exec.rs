//! Subprocess execution for backend adapters.
//!
//! Adapters describe what to run as a [`ToolInvocation`] and hand it to a
//! [`ToolRunner`]. The runner blocks until the process exits and returns
//! the captured output; it never interprets exit codes. Tests substitute
//! a scripted runner so no real process is spawned.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// How an invocation reaches the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMode {
    /// Execute the program directly.
    Direct,
    /// Execute through the platform shell.
    Shell,
}

impl ShellMode {
    /// Shell mode for wrapped package-runner commands (`npx` and
    /// friends), which cannot be executed directly on Windows.
    pub fn for_package_runner() -> Self {
        if cfg!(windows) {
            ShellMode::Shell
        } else {
            ShellMode::Direct
        }
    }
}

/// A fully described external tool invocation.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    /// The executable to run (e.g., "npx", "golangci-lint")
    pub program: String,

    /// Arguments, in order
    pub args: Vec<String>,

    /// Working directory override (None = inherit)
    pub cwd: Option<PathBuf>,

    /// Shell-wrapping strategy
    pub shell: ShellMode,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: None,
            shell: ShellMode::Direct,
        }
    }

    pub fn with_cwd(mut self, cwd: PathBuf) -> Self {
        self.cwd = Some(cwd);
        self
    }

    pub fn with_shell(mut self, shell: ShellMode) -> Self {
        self.shell = shell;
        self
    }
}

/// Captured outcome of a completed tool process.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    /// Whether the process exited with status zero
    pub success: bool,

    /// Exit code, if the process exited normally
    pub exit_code: Option<i32>,

    /// Captured standard output
    pub stdout: String,

    /// Captured standard error
    pub stderr: String,
}

/// Capability to run an external tool and capture its output.
///
/// `Err` means the process could not be run at all; a process that ran
/// and exited non-zero is an `Ok` with `success == false`.
pub trait ToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> io::Result<ToolOutput>;
}

/// Runs invocations through `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &ToolInvocation) -> io::Result<ToolOutput> {
        let mut cmd = match invocation.shell {
            ShellMode::Direct => {
                let mut cmd = Command::new(&invocation.program);
                cmd.args(&invocation.args);
                cmd
            }
            ShellMode::Shell => shell_command(invocation),
        };

        if let Some(ref cwd) = invocation.cwd {
            cmd.current_dir(cwd);
        }

        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output()?;

        Ok(ToolOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(windows)]
fn shell_command(invocation: &ToolInvocation) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(&invocation.program);
    cmd.args(&invocation.args);
    cmd
}

/// POSIX fallback; shell mode only arises on Windows in practice, so the
/// command line is joined naively.
#[cfg(not(windows))]
fn shell_command(invocation: &ToolInvocation) -> Command {
    let mut line = invocation.program.clone();
    for arg in &invocation.args {
        line.push(' ');
        line.push_str(arg);
    }
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}
