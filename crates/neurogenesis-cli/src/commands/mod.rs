pub mod config;
pub mod get_nodes;
pub mod new;
pub mod refresh;

use anyhow::{Context, Result};
use neurogenesis_core::{IndexStore, Notebook, RebuildReport};
use tracing::debug;

use crate::config::CliConfig;

/// Enter the notes directory and open its notebook.
///
/// The index lives in the process working directory, so after this call it
/// sits next to the notes.
pub fn open_notebook(config: &CliConfig) -> Result<Notebook> {
    let notes_dir = config.notes_directory.canonicalize().with_context(|| {
        format!(
            "Notes directory not found: {}",
            config.notes_directory.display()
        )
    })?;

    std::env::set_current_dir(&notes_dir)
        .with_context(|| format!("Failed to enter notes directory: {}", notes_dir.display()))?;
    debug!("Working directory set to {}", notes_dir.display());

    Ok(Notebook::new(notes_dir, IndexStore::in_current_dir()?))
}

/// Line printed after every rebuild
pub fn rebuild_message(report: &RebuildReport) -> String {
    format!("Updated Database in {}s", report.elapsed.as_secs_f64())
}
