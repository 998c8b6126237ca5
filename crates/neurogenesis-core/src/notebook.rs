//! A notes directory paired with its index store

use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::header;
use crate::index::{IndexStore, RebuildReport};

/// A notes directory together with the index describing it
#[derive(Debug, Clone)]
pub struct Notebook {
    notes_dir: PathBuf,
    store: IndexStore,
}

/// A note written by [`Notebook::write_note`]
#[derive(Debug, Clone)]
pub struct CreatedNote {
    pub id: Uuid,
    pub title: String,
    pub path: PathBuf,
}

impl Notebook {
    pub fn new(notes_dir: impl Into<PathBuf>, store: IndexStore) -> Self {
        Self {
            notes_dir: notes_dir.into(),
            store,
        }
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    /// Write a new note with a fresh id. The index is not touched.
    pub fn write_note(&self, title: Option<&str>) -> Result<CreatedNote> {
        let id = Uuid::new_v4();
        let title = title.unwrap_or_default().to_string();

        let path = header::write_note(&self.notes_dir, &id.to_string(), &title)?;
        info!("Created note {} at {}", id, path.display());

        Ok(CreatedNote { id, title, path })
    }

    /// Write a new note, then rebuild the index.
    ///
    /// A failed rebuild leaves the note on disk; use [`Notebook::write_note`]
    /// and [`Notebook::rebuild`] directly to learn the id before rebuilding.
    pub fn create_note(&self, title: Option<&str>) -> Result<(CreatedNote, RebuildReport)> {
        let created = self.write_note(title)?;
        let report = self.rebuild()?;
        Ok((created, report))
    }

    /// Rescan the notes directory and replace the index
    pub fn rebuild(&self) -> Result<RebuildReport> {
        self.store.rebuild(&self.notes_dir)
    }

    /// Stored index contents, verbatim
    pub fn read_index(&self) -> Result<String> {
        self.store.read_raw()
    }
}
