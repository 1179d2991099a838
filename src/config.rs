//! Caller-supplied configuration values.
//!
//! Loading configuration from disk or the environment belongs to the
//! calling layer; this crate only consumes the resulting values.

use std::path::PathBuf;

/// Default location for persisted guard data, relative to the project root.
pub const DEFAULT_DATA_DIR: &str = ".claude/tdd-guard/data";

#[derive(Debug, Clone)]
pub struct Config {
    /// Which linter backend to drive. `None` disables linting.
    pub linter_type: Option<String>,

    /// Directory where guard state is persisted.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_linter_type(mut self, linter_type: impl Into<String>) -> Self {
        self.linter_type = Some(linter_type.into());
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            linter_type: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}
