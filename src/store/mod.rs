//! Whole-state persistence.
//!
//! The ledger is one JSON record at a fixed path, rewritten in full after
//! every mutation. There is no merge step: two processes sharing a state
//! file last-write-win.

use crate::errors::{AppError, AppResult};
use crate::models::state::LedgerState;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing, unreadable, or malformed state resolves to the empty
    /// default rather than failing startup.
    pub fn load(&self) -> LedgerState {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => LedgerState::default(),
        }
    }

    pub fn save(&self, state: &LedgerState) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| AppError::Store(format!("serialization failed: {e}")))?;

        fs::write(&self.path, json)?;
        Ok(())
    }
}
