//! Linter execution and diagnostic normalization.
//!
//! One backend adapter exists per supported tool:
//!
//! - **Biome**: `npx @biomejs/biome lint --reporter=json`
//! - **ESLint**: `npx eslint --format json`
//! - **golangci-lint**: `golangci-lint run --out-format json`
//!
//! Every adapter implements the [`Linter`] capability: given target file
//! paths and an optional config path, spawn the tool once, wait for it to
//! exit, and normalize whatever it reported into a [`LintResult`]. A tool
//! that exits non-zero while printing a report is a normal outcome; only a
//! tool that could not run at all surfaces as an error.
//!
//! Subprocess execution sits behind the [`ToolRunner`] capability so
//! adapters can be exercised without spawning real processes.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::PathBuf;
//! use tdd_guard::{select_linter, Config};
//!
//! let config = Config::new().with_linter_type("eslint");
//!
//! match select_linter(&config) {
//!     Some(linter) => {
//!         let result = linter.lint(&[PathBuf::from("src/app.ts")], None)?;
//!         println!("{} issues", result.issues.len());
//!     }
//!     None => println!("linting disabled"),
//! }
//! ```

// Submodules
mod biome;
mod eslint;
mod exec;
mod golangci;
mod linter;
mod provider;
mod types;

// Re-export types for public API
pub use biome::Biome;
pub use eslint::ESLint;
pub use exec::{ShellMode, SystemRunner, ToolInvocation, ToolOutput, ToolRunner};
pub use golangci::GolangciLint;
pub use linter::Linter;
pub use provider::select_linter;
pub use types::{LintIssue, LintResult, Severity};
