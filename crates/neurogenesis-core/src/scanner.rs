//! Corpus scanning
//!
//! Lists the `*.md` files directly inside a notes directory and reads each
//! header. A single unreadable note aborts the whole scan.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;

use crate::error::Result;
use crate::header::{read_header, NOTE_EXTENSION};
use crate::note::NoteHeader;

/// Immediate `*.md` files in `dir`, in directory listing order
pub fn list_note_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(&format!("*.{NOTE_EXTENSION}"))?;
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let matches = entry.file_name().to_str().is_some_and(|n| pattern.matches(n));
        // Follows symlinks, so linked notes are indexed too
        if matches && path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}

/// Read every note header in `dir`, sorted by note id
pub fn scan(dir: &Path) -> Result<Vec<NoteHeader>> {
    let mut records = Vec::new();

    for path in list_note_files(dir)? {
        debug!("Scanning {}", path.display());
        records.push(read_header(&path)?);
    }

    records.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(records)
}
