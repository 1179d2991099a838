//! TDD Guard engine: linter execution and diagnostic normalization.
//!
//! This library drives external static-analysis tools as isolated
//! subprocesses, captures their machine-readable output, and reduces it to
//! one canonical issue representation. It also carries the guard command
//! toggle that enables or disables enforcement from inbound hook events.
//!
//! The engine deliberately implements no linting itself: each supported
//! tool is wrapped by a backend adapter that knows how to invoke it and
//! how to read its report. Selecting no linter is a valid configuration
//! and simply disables linting.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use tdd_guard::{select_linter, Config};
//!
//! let config = Config::new().with_linter_type("biome");
//!
//! if let Some(linter) = select_linter(&config) {
//!     let files = vec![PathBuf::from("src/index.ts")];
//!     let result = linter.lint(&files, None)?;
//!     println!("{} errors, {} warnings", result.error_count, result.warning_count);
//! }
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod hooks;
pub mod lint;

// Re-export commonly used types
pub use config::Config;
pub use error::{GuardError, Result};
pub use guard::{FileGuardStore, GuardManager, GuardState, GuardStore, MemoryGuardStore};
pub use hooks::{UserPromptHandler, ValidationResult};
pub use lint::{
    select_linter, Biome, ESLint, GolangciLint, LintIssue, LintResult, Linter, Severity,
    ShellMode, SystemRunner, ToolInvocation, ToolOutput, ToolRunner,
};
