use anyhow::Result;

use super::{open_notebook, rebuild_message};
use crate::config::CliConfig;

pub fn execute(config: &CliConfig) -> Result<()> {
    let notebook = open_notebook(config)?;
    let report = notebook.rebuild()?;

    println!("{}", rebuild_message(&report));
    Ok(())
}
