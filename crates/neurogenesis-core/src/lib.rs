//! # Neurogenesis Core
//!
//! Flat-file note indexing. Notes are markdown files that start with a fixed
//! five-line header; the index is a single JSON array describing every note
//! in a directory as of the last rebuild.
//!
//! - [`header`]: header codec (write a new note, read a note's header)
//! - [`scanner`]: enumerate `*.md` files and read their headers
//! - [`index`]: persist and serve the JSON snapshot
//! - [`Notebook`]: the three composed for a given notes directory
//!
//! ```rust,no_run
//! use neurogenesis_core::{IndexStore, Notebook};
//!
//! # fn main() -> neurogenesis_core::Result<()> {
//! let notebook = Notebook::new("/home/me/cerebrum", IndexStore::in_current_dir()?);
//! let (created, report) = notebook.create_note(Some("Reading list"))?;
//! println!("{} ({} notes indexed)", created.id, report.records);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod header;
pub mod index;
pub mod note;
pub mod notebook;
pub mod scanner;

pub use error::{HeaderError, NotebookError, Result};
pub use index::{IndexStore, RebuildReport, INDEX_FILE_NAME};
pub use note::{Note, NoteHeader};
pub use notebook::{CreatedNote, Notebook};
