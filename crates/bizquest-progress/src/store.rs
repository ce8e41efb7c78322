//! Pluggable persistence for the progress ledger.
//!
//! The ledger talks to a [`ProgressStore`] handle it is given, never to a
//! global. Two backends: an in-memory store for tests and throwaway runs,
//! and a JSON file store for real sessions. Loading is forgiving — a
//! missing or unreadable file yields the default ledger instead of an
//! error, matching how the original app treats a blank browser profile.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::ledger::ProgressData;

/// Errors from persisting the ledger.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("progress store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("progress store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load/save surface the ledger operates through.
pub trait ProgressStore {
    /// Read the saved ledger, or defaults if nothing (valid) is saved.
    fn load(&mut self) -> ProgressData;

    /// Persist the ledger.
    fn save(&mut self, data: &ProgressData) -> Result<(), ProgressError>;
}

impl<S: ProgressStore + ?Sized> ProgressStore for &mut S {
    fn load(&mut self) -> ProgressData {
        (**self).load()
    }

    fn save(&mut self, data: &ProgressData) -> Result<(), ProgressError> {
        (**self).save(data)
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for Box<S> {
    fn load(&mut self) -> ProgressData {
        (**self).load()
    }

    fn save(&mut self, data: &ProgressData) -> Result<(), ProgressError> {
        (**self).save(data)
    }
}

/// Volatile store for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<ProgressData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&mut self) -> ProgressData {
        self.saved.clone().unwrap_or_default()
    }

    fn save(&mut self, data: &ProgressData) -> Result<(), ProgressError> {
        self.saved = Some(data.clone());
        Ok(())
    }
}

/// JSON file on disk, one ledger per file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&mut self) -> ProgressData {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(data) => {
                    debug!(path = %self.path.display(), "loaded progress file");
                    data
                }
                Err(err) => {
                    warn!(
                        path = %self.path.display(),
                        %err,
                        "progress file unreadable, starting fresh"
                    );
                    ProgressData::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no progress file yet");
                ProgressData::default()
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "progress file unreadable, starting fresh");
                ProgressData::default()
            }
        }
    }

    fn save(&mut self, data: &ProgressData) -> Result<(), ProgressError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "saved progress file");
        Ok(())
    }
}
