use anyhow::Result;

use super::{open_notebook, rebuild_message};
use crate::config::CliConfig;

/// Write a note, announce its id, then rebuild.
///
/// The id is printed before the rebuild so it is not lost when another note
/// in the directory is malformed.
pub fn execute(config: &CliConfig, title: Option<String>) -> Result<()> {
    let notebook = open_notebook(config)?;
    let created = notebook.write_note(title.as_deref())?;

    println!(
        "Created a new node with ID:{} and TITLE:{}",
        created.id, created.title
    );

    let report = notebook.rebuild()?;
    println!("{}", rebuild_message(&report));

    Ok(())
}
