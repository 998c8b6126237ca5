//! Index store: the `.database.json` snapshot of every note header
//!
//! A rebuild always rescans the whole notes directory and replaces the index
//! file. The replacement goes through a temporary file in the same directory
//! followed by a rename, so readers see either the old snapshot or the new one.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{NotebookError, Result};
use crate::note::NoteHeader;
use crate::scanner;

/// File name of the index, relative to the process working directory
pub const INDEX_FILE_NAME: &str = ".database.json";

/// Outcome of a rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildReport {
    /// Number of records written
    pub records: usize,
    /// Wall-clock time spent scanning and writing
    pub elapsed: Duration,
}

/// Reads and writes the index file at a fixed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<cwd>/.database.json`
    pub fn in_current_dir() -> Result<Self> {
        Ok(Self::at(std::env::current_dir()?.join(INDEX_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rescan `notes_dir` and replace the index with the result.
    ///
    /// The scan completes before the index file is touched; a malformed note
    /// leaves the previous index in place.
    pub fn rebuild(&self, notes_dir: &Path) -> Result<RebuildReport> {
        let start = Instant::now();

        let records = scanner::scan(notes_dir)?;
        self.write_snapshot(&records)?;

        let report = RebuildReport {
            records: records.len(),
            elapsed: start.elapsed(),
        };
        info!(
            "Rebuilt index {} with {} notes in {:?}",
            self.path.display(),
            report.records,
            report.elapsed
        );
        Ok(report)
    }

    /// Atomically replace the index file with `records`
    pub fn write_snapshot(&self, records: &[NoteHeader]) -> Result<()> {
        let json = serde_json::to_string(records)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(json.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path).map_err(|e| NotebookError::Io(e.error))?;

        debug!("Wrote {} bytes to {}", json.len(), self.path.display());
        Ok(())
    }

    /// Raw index contents, exactly as stored
    pub fn read_raw(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => NotebookError::IndexNotFound {
                path: self.path.clone(),
            },
            _ => NotebookError::Io(e),
        })
    }

    /// Decode the stored snapshot
    pub fn load(&self) -> Result<Vec<NoteHeader>> {
        Ok(serde_json::from_str(&self.read_raw()?)?)
    }
}
