// src/store.rs
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::{Error, Result};
use crate::file::ensure_directory;
use crate::model::Snapshot;

/// The last snapshot a run decided to keep. One JSON file, replaced whole.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` if no run has ever saved a snapshot here.
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no snapshot at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_err(e)),
        };

        let snapshot: Snapshot = serde_json::from_str(&text).map_err(|source| Error::Json {
            path: self.path.clone(),
            source,
        })?;
        debug!("loaded {} beers from {}", snapshot.len(), self.path.display());
        Ok(Some(snapshot))
    }

    /// Replace the stored snapshot. Written to a sibling temp file first,
    /// then renamed over the old one.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(snapshot).map_err(|source| Error::Json {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        debug!("saved {} beers to {}", snapshot.len(), self.path.display());
        Ok(())
    }

    fn io_err(&self, source: io::Error) -> Error {
        Error::Io { path: self.path.clone(), source }
    }
}
