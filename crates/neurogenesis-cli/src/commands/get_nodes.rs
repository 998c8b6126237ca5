use anyhow::Result;

use super::open_notebook;
use crate::config::CliConfig;

/// Print the stored index as-is. No rescan happens here.
pub fn execute(config: &CliConfig) -> Result<()> {
    let notebook = open_notebook(config)?;
    println!("{}", notebook.read_index()?);
    Ok(())
}
