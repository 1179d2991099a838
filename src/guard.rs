//! Guard enable/disable state and the manager that flips it.
//!
//! The state itself is owned by a [`GuardStore`]; the manager only
//! requests transitions. Concurrent writes are last-write-wins at the
//! store layer, no locking happens here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{GuardError, Result};

/// Whether guard enforcement is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardState {
    Enabled,
    Disabled,
}

/// Capability to read and persist the guard state.
///
/// `load` returns `None` when no state was ever persisted.
pub trait GuardStore {
    fn load(&self) -> Result<Option<GuardState>>;
    fn save(&self, state: GuardState) -> Result<()>;
}

/// On-disk representation, kept stable for external tooling.
#[derive(Serialize, Deserialize)]
struct StoredState {
    enabled: bool,
}

/// Persists guard state as `guard.json` under the data directory.
pub struct FileGuardStore {
    path: PathBuf,
}

impl FileGuardStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("guard.json"),
        }
    }

    fn storage_error(&self, message: String) -> GuardError {
        GuardError::Storage {
            path: self.path.display().to_string(),
            message,
        }
    }
}

impl GuardStore for FileGuardStore {
    fn load(&self) -> Result<Option<GuardState>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.storage_error(err.to_string())),
        };

        let stored: StoredState =
            serde_json::from_str(&raw).map_err(|err| self.storage_error(err.to_string()))?;

        Ok(Some(if stored.enabled {
            GuardState::Enabled
        } else {
            GuardState::Disabled
        }))
    }

    fn save(&self, state: GuardState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| self.storage_error(err.to_string()))?;
        }

        let stored = StoredState {
            enabled: state == GuardState::Enabled,
        };
        let raw = serde_json::to_string_pretty(&stored)
            .map_err(|err| self.storage_error(err.to_string()))?;
        fs::write(&self.path, raw).map_err(|err| self.storage_error(err.to_string()))
    }
}

/// In-memory store for tests and embedders that manage persistence
/// themselves.
#[derive(Default)]
pub struct MemoryGuardStore {
    state: Mutex<Option<GuardState>>,
}

impl MemoryGuardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuardStore for MemoryGuardStore {
    fn load(&self) -> Result<Option<GuardState>> {
        Ok(*self.state.lock())
    }

    fn save(&self, state: GuardState) -> Result<()> {
        *self.state.lock() = Some(state);
        Ok(())
    }
}

/// Requests guard state transitions against an injected store.
pub struct GuardManager {
    store: Box<dyn GuardStore>,
}

impl GuardManager {
    pub fn new(store: Box<dyn GuardStore>) -> Self {
        Self { store }
    }

    /// Manager over the file store at the config's data directory.
    pub fn for_config(config: &Config) -> Self {
        Self::new(Box::new(FileGuardStore::new(&config.data_dir)))
    }

    pub fn enable(&self) -> Result<()> {
        self.store.save(GuardState::Enabled)
    }

    pub fn disable(&self) -> Result<()> {
        self.store.save(GuardState::Disabled)
    }

    /// Absent state counts as enabled.
    pub fn is_enabled(&self) -> Result<bool> {
        let state = self.store.load()?.unwrap_or(GuardState::Enabled);
        Ok(state == GuardState::Enabled)
    }
}
